//! Bounded stack traces

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{BoundedStack, Value};
use crate::trace::{Step, StepKind};

/// Stack operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    /// Push onto the top
    Push(Value),
    /// Remove the top
    Pop,
    /// Read the top
    Peek,
    /// `size == 0`
    IsEmpty,
    /// `size == capacity`
    IsFull,
}

/// Trace generator for the stack visualization
#[derive(Debug, Clone, Copy, Default)]
pub struct StackTracer;

impl TraceGenerator for StackTracer {
    type Snapshot = BoundedStack;
    type Operation = StackOp;

    fn name(&self) -> &'static str {
        "stack"
    }

    fn algorithm(&self, operation: &StackOp) -> Algorithm {
        match operation {
            StackOp::Push(_) => Algorithm::StackPush,
            StackOp::Pop => Algorithm::StackPop,
            StackOp::Peek => Algorithm::StackPeek,
            StackOp::IsEmpty => Algorithm::StackIsEmpty,
            StackOp::IsFull => Algorithm::StackIsFull,
        }
    }

    fn generate(&self, operation: &StackOp, stack: &BoundedStack) -> Generated<BoundedStack> {
        if let StackOp::Push(value) = operation {
            if value.is_blank() {
                return Generated::missing_value(Algorithm::StackPush, "push");
            }
        }
        match operation {
            StackOp::Push(value) => push(stack, value),
            StackOp::Pop => pop(stack),
            StackOp::Peek => peek(stack),
            StackOp::IsEmpty => is_empty(stack),
            StackOp::IsFull => is_full(stack),
        }
    }
}

fn top_index(stack: &BoundedStack) -> Option<usize> {
    stack.len().checked_sub(1)
}

fn push(stack: &BoundedStack, value: &Value) -> Generated<BoundedStack> {
    let mut rec = Recorder::new(Algorithm::StackPush);
    rec.push(
        Step::new(
            StepKind::Info,
            format!("Check capacity: size {} of {}", stack.len(), stack.capacity()),
        )
        .line(1),
    );
    if stack.is_full() {
        let mut overflow =
            Step::new(StepKind::Overflow, format!("Stack overflow - cannot push {}", value))
                .line(1);
        if let Some(top) = top_index(stack) {
            overflow = overflow.cell(top);
        }
        rec.push(overflow);
        return Generated::read_only(rec.finish());
    }

    let slot = stack.len();
    rec.push(Step::new(StepKind::Info, format!("top <- {}", slot)).cell(slot).line(2));
    rec.push(
        Step::new(StepKind::Write, format!("stack[{}] <- {}", slot, value))
            .cell(slot)
            .line(3),
    );
    rec.push(Step::new(StepKind::Info, format!("size <- {}", slot + 1)).cell(slot).line(4));
    rec.push(Step::new(StepKind::Done, format!("Pushed {}", value)).cell(slot).line(5));

    let mut next = stack.clone();
    next.push(value.clone());
    Generated::on_complete(rec.finish(), next)
}

fn pop(stack: &BoundedStack) -> Generated<BoundedStack> {
    let mut rec = Recorder::new(Algorithm::StackPop);
    let (Some(top), Some(value)) = (top_index(stack), stack.top()) else {
        rec.push(Step::new(StepKind::Underflow, "Stack underflow - stack is empty").line(1));
        return Generated::read_only(rec.finish());
    };

    rec.push(Step::new(StepKind::Info, format!("Size is {}", stack.len())).cell(top).line(1));
    rec.push(
        Step::new(StepKind::Info, format!("value <- stack[{}] = {}", top, value))
            .cell(top)
            .line(2),
    );
    rec.push(
        Step::new(StepKind::Write, format!("top <- {}, size <- {}", top as isize - 1, top))
            .cell(top)
            .line(3),
    );
    rec.push(Step::new(StepKind::Done, format!("Popped {}", value)).cell(top).line(4));

    let mut next = stack.clone();
    next.pop();
    Generated::on_complete(rec.finish(), next)
}

fn peek(stack: &BoundedStack) -> Generated<BoundedStack> {
    let mut rec = Recorder::new(Algorithm::StackPeek);
    let (Some(top), Some(value)) = (top_index(stack), stack.top()) else {
        rec.push(Step::new(StepKind::Empty, "Stack is empty - nothing to peek").line(1));
        return Generated::read_only(rec.finish());
    };
    rec.push(Step::new(StepKind::Info, format!("Size is {}", stack.len())).line(1));
    rec.push(Step::new(StepKind::Found, format!("Top is {}", value)).cell(top).lines([2, 3]));
    Generated::read_only(rec.finish())
}

fn is_empty(stack: &BoundedStack) -> Generated<BoundedStack> {
    let mut rec = Recorder::new(Algorithm::StackIsEmpty);
    rec.push(Step::new(StepKind::Compare, format!("size == 0? size is {}", stack.len())).line(1));
    rec.push(Step::new(StepKind::Done, format!("isEmpty = {}", stack.is_empty())).line(2));
    Generated::read_only(rec.finish())
}

fn is_full(stack: &BoundedStack) -> Generated<BoundedStack> {
    let mut rec = Recorder::new(Algorithm::StackIsFull);
    rec.push(
        Step::new(
            StepKind::Compare,
            format!("size == capacity? {} of {}", stack.len(), stack.capacity()),
        )
        .line(1),
    );
    rec.push(Step::new(StepKind::Done, format!("isFull = {}", stack.is_full())).line(2));
    Generated::read_only(rec.finish())
}
