//! Bounded stack snapshot

use std::fmt;

use super::Value;
use crate::TraceError;

/// Array-backed stack with a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BoundedStack {
    items: Vec<Value>,
    capacity: usize,
}

impl BoundedStack {
    /// Empty stack; capacity must be positive
    pub fn new(capacity: usize) -> Result<Self, TraceError> {
        if capacity == 0 {
            return Err(TraceError::InvalidCapacity(capacity));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Stack holding `values` bottom to top
    pub fn from_values(
        capacity: usize,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, TraceError> {
        let mut stack = Self::new(capacity)?;
        for v in values {
            if !stack.push(v) {
                return Err(TraceError::InvalidCapacity(capacity));
            }
        }
        Ok(stack)
    }

    /// Maximum number of items
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `len == capacity`
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Top item
    pub fn top(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Items bottom to top
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Push; false on overflow
    pub fn push(&mut self, value: Value) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Pop the top item
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }
}

impl fmt::Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.items.iter().map(Value::as_str).collect();
        writeln!(f, "[{}] <- top ({}/{})", items.join(", "), self.len(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::values;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(BoundedStack::new(0), Err(TraceError::InvalidCapacity(0))));
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut stack = BoundedStack::from_values(2, values(["A"])).unwrap();
        assert!(stack.push(Value::from("B")));
        assert!(stack.is_full());
        assert!(!stack.push(Value::from("C")));
        assert_eq!(stack.pop(), Some(Value::from("B")));
    }

    #[test]
    fn test_seed_larger_than_capacity() {
        assert!(BoundedStack::from_values(1, values(["A", "B"])).is_err());
    }
}
