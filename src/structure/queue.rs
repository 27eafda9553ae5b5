//! Circular-buffer queue snapshot
//!
//! Slots are fixed; `front` wraps modulo capacity and the rear slot is
//! `(front + len) % capacity`.

use std::fmt;

use super::Value;
use crate::TraceError;

/// Bounded FIFO over a ring of slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CircularQueue {
    slots: Vec<Option<Value>>,
    front: usize,
    len: usize,
}

impl CircularQueue {
    /// Empty queue; capacity must be positive
    pub fn new(capacity: usize) -> Result<Self, TraceError> {
        if capacity == 0 {
            return Err(TraceError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
            front: 0,
            len: 0,
        })
    }

    /// Queue holding `values` front to rear
    pub fn from_values(
        capacity: usize,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, TraceError> {
        let mut queue = Self::new(capacity)?;
        for v in values {
            if queue.enqueue(v).is_none() {
                return Err(TraceError::InvalidCapacity(capacity));
            }
        }
        Ok(queue)
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is occupied
    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    /// Slot index of the front value
    pub fn front_index(&self) -> usize {
        self.front
    }

    /// Slot index the next enqueue writes to
    pub fn rear_index(&self) -> usize {
        (self.front + self.len) % self.slots.len()
    }

    /// Front value
    pub fn front(&self) -> Option<&Value> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Values front to rear
    pub fn values(&self) -> Vec<Value> {
        (0..self.len)
            .filter_map(|k| self.slots[(self.front + k) % self.slots.len()].clone())
            .collect()
    }

    /// Enqueue at the rear; returns the slot written, `None` on overflow
    pub fn enqueue(&mut self, value: Value) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let rear = self.rear_index();
        self.slots[rear] = Some(value);
        self.len += 1;
        Some(rear)
    }

    /// Dequeue from the front
    pub fn dequeue(&mut self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        value
    }
}

impl fmt::Display for CircularQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<&str> = self
            .slots
            .iter()
            .map(|s| s.as_ref().map(Value::as_str).unwrap_or("_"))
            .collect();
        writeln!(
            f,
            "[{}] front={} rear={} ({}/{})",
            slots.join(", "),
            self.front,
            self.rear_index(),
            self.len,
            self.capacity()
        )
    }
}
