//! Circular queue traces
//!
//! Cells are ring slots, not logical positions: highlighting slot 0
//! after a wrap-around points at the physical slot the learner sees.

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{CircularQueue, Value};
use crate::trace::{Step, StepKind};

/// Queue operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    /// Add at the rear
    Enqueue(Value),
    /// Remove from the front
    Dequeue,
    /// Read the front
    Front,
    /// `size == 0`
    IsEmpty,
    /// `size == capacity`
    IsFull,
}

/// Trace generator for the queue visualization
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueTracer;

impl TraceGenerator for QueueTracer {
    type Snapshot = CircularQueue;
    type Operation = QueueOp;

    fn name(&self) -> &'static str {
        "queue"
    }

    fn algorithm(&self, operation: &QueueOp) -> Algorithm {
        match operation {
            QueueOp::Enqueue(_) => Algorithm::QueueEnqueue,
            QueueOp::Dequeue => Algorithm::QueueDequeue,
            QueueOp::Front => Algorithm::QueueFront,
            QueueOp::IsEmpty => Algorithm::QueueIsEmpty,
            QueueOp::IsFull => Algorithm::QueueIsFull,
        }
    }

    fn generate(&self, operation: &QueueOp, queue: &CircularQueue) -> Generated<CircularQueue> {
        if let QueueOp::Enqueue(value) = operation {
            if value.is_blank() {
                return Generated::missing_value(Algorithm::QueueEnqueue, "enqueue");
            }
        }
        match operation {
            QueueOp::Enqueue(value) => enqueue(queue, value),
            QueueOp::Dequeue => dequeue(queue),
            QueueOp::Front => front(queue),
            QueueOp::IsEmpty => {
                check(queue, Algorithm::QueueIsEmpty, "size == 0?", "isEmpty", queue.is_empty())
            }
            QueueOp::IsFull => check(
                queue,
                Algorithm::QueueIsFull,
                "size == capacity?",
                "isFull",
                queue.is_full(),
            ),
        }
    }
}

fn enqueue(queue: &CircularQueue, value: &Value) -> Generated<CircularQueue> {
    let mut rec = Recorder::new(Algorithm::QueueEnqueue);
    rec.push(
        Step::new(
            StepKind::Info,
            format!("Check capacity: size {} of {}", queue.len(), queue.capacity()),
        )
        .line(1),
    );
    if queue.is_full() {
        rec.push(
            Step::new(StepKind::Overflow, format!("Queue overflow - cannot enqueue {}", value))
                .cell(queue.rear_index())
                .line(1),
        );
        return Generated::read_only(rec.finish());
    }

    let rear = queue.rear_index();
    rec.push(
        Step::new(
            StepKind::Info,
            format!(
                "rear <- ({} + {}) % {} = {}",
                queue.front_index(),
                queue.len(),
                queue.capacity(),
                rear
            ),
        )
        .cell(rear)
        .line(2),
    );
    rec.push(
        Step::new(StepKind::Write, format!("queue[{}] <- {}", rear, value))
            .cell(rear)
            .line(3),
    );
    rec.push(Step::new(StepKind::Info, format!("size <- {}", queue.len() + 1)).line(4));
    rec.push(Step::new(StepKind::Done, format!("Enqueued {}", value)).cell(rear).line(5));

    let mut next = queue.clone();
    next.enqueue(value.clone());
    Generated::on_complete(rec.finish(), next)
}

fn dequeue(queue: &CircularQueue) -> Generated<CircularQueue> {
    let mut rec = Recorder::new(Algorithm::QueueDequeue);
    let Some(value) = queue.front() else {
        rec.push(Step::new(StepKind::Underflow, "Queue underflow - queue is empty").line(1));
        return Generated::read_only(rec.finish());
    };

    let front = queue.front_index();
    let advanced = (front + 1) % queue.capacity();
    rec.push(Step::new(StepKind::Info, format!("Size is {}", queue.len())).cell(front).line(1));
    rec.push(
        Step::new(StepKind::Info, format!("value <- queue[{}] = {}", front, value))
            .cell(front)
            .line(2),
    );
    rec.push(
        Step::new(
            StepKind::Write,
            format!("front <- ({} + 1) % {} = {}", front, queue.capacity(), advanced),
        )
        .cells([front, advanced])
        .line(3),
    );
    rec.push(Step::new(StepKind::Info, format!("size <- {}", queue.len() - 1)).line(4));
    rec.push(Step::new(StepKind::Done, format!("Dequeued {}", value)).cell(front).line(5));

    let mut next = queue.clone();
    next.dequeue();
    Generated::on_complete(rec.finish(), next)
}

fn front(queue: &CircularQueue) -> Generated<CircularQueue> {
    let mut rec = Recorder::new(Algorithm::QueueFront);
    let Some(value) = queue.front() else {
        rec.push(Step::new(StepKind::Empty, "Queue is empty - no front element").line(1));
        return Generated::read_only(rec.finish());
    };
    rec.push(Step::new(StepKind::Info, format!("Size is {}", queue.len())).line(1));
    rec.push(
        Step::new(StepKind::Found, format!("Front is {}", value))
            .cell(queue.front_index())
            .lines([2, 3]),
    );
    Generated::read_only(rec.finish())
}

fn check(
    queue: &CircularQueue,
    algorithm: Algorithm,
    question: &str,
    name: &str,
    answer: bool,
) -> Generated<CircularQueue> {
    let mut rec = Recorder::new(algorithm);
    rec.push(
        Step::new(
            StepKind::Compare,
            format!("{} size is {} of {}", question, queue.len(), queue.capacity()),
        )
        .line(1),
    );
    rec.push(Step::new(StepKind::Done, format!("{} = {}", name, answer)).line(2));
    Generated::read_only(rec.finish())
}
