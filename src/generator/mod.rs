//! Trace generators
//!
//! A generator turns `(operation, snapshot)` into a complete [`Trace`]
//! up front. It never mutates the snapshot it is given: any new state
//! comes back as a [`Commit`] for the host to apply, either right away
//! or once playback of the trace has finished.

mod array;
mod list;
mod matrix;
mod queue;
mod stack;
mod tree;

pub use array::{ArrayOp, ArrayTracer};
pub use list::{ListOp, ListTracer};
pub use matrix::{MatrixOp, MatrixTracer};
pub use queue::{QueueOp, QueueTracer};
pub use stack::{StackOp, StackTracer};
pub use tree::{TreeOp, TreeTracer};

use std::fmt;

use crate::pseudocode::Algorithm;
use crate::trace::{Step, StepKind, Trace};

/// New state produced by an operation and when to apply it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit<S> {
    /// Read-only operation, or a rejected one
    None,
    /// Apply as soon as the trace is produced (simple cell writes)
    Immediate(S),
    /// Apply once playback reaches the final step
    OnComplete(S),
}

impl<S> Commit<S> {
    /// Whether there is anything to apply
    pub fn is_none(&self) -> bool {
        matches!(self, Commit::None)
    }

    /// New state, regardless of timing
    pub fn state(&self) -> Option<&S> {
        match self {
            Commit::None => None,
            Commit::Immediate(s) | Commit::OnComplete(s) => Some(s),
        }
    }

    /// Consume into the new state
    pub fn into_state(self) -> Option<S> {
        match self {
            Commit::None => None,
            Commit::Immediate(s) | Commit::OnComplete(s) => Some(s),
        }
    }
}

/// Output of one generator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<S> {
    /// Steps to animate
    pub trace: Trace,

    /// State to commit
    pub commit: Commit<S>,
}

impl<S> Generated<S> {
    /// Trace with nothing to commit
    pub fn read_only(trace: Trace) -> Self {
        Self {
            trace,
            commit: Commit::None,
        }
    }

    /// Trace whose new state applies immediately
    pub fn immediate(trace: Trace, state: S) -> Self {
        Self {
            trace,
            commit: Commit::Immediate(state),
        }
    }

    /// Trace whose new state applies after playback
    pub fn on_complete(trace: Trace, state: S) -> Self {
        Self {
            trace,
            commit: Commit::OnComplete(state),
        }
    }

    /// Single-step rejection (empty structure, bad index, ...)
    pub(crate) fn rejected(algorithm: Algorithm, step: Step) -> Self {
        Self::read_only(Trace::new(algorithm, vec![step]))
    }

    /// Single `Empty` step naming the structure and the refused action
    pub(crate) fn empty(algorithm: Algorithm, what: &str, action: &str) -> Self {
        Self::rejected(
            algorithm,
            Step::new(StepKind::Empty, format!("{} is empty - nothing to {}", what, action)),
        )
    }

    /// Single `MissingValue` step asking for the value an operation needs
    pub(crate) fn missing_value(algorithm: Algorithm, action: &str) -> Self {
        Self::rejected(
            algorithm,
            Step::new(StepKind::MissingValue, format!("Enter a value to {}", action)),
        )
    }
}

/// Produces traces for one family of data structure
pub trait TraceGenerator {
    /// Structure state the generator reads
    type Snapshot: Clone + fmt::Debug;

    /// Operation selector with its parameters
    type Operation: fmt::Debug;

    /// Short generator name (used in logs)
    fn name(&self) -> &'static str;

    /// Pseudocode algorithm an operation animates
    fn algorithm(&self, operation: &Self::Operation) -> Algorithm;

    /// Produce the full trace for `operation` against `snapshot`.
    ///
    /// Total: every input yields at least one step. Rejections such as
    /// an empty structure or an out-of-range index are reported as
    /// steps, never as errors.
    fn generate(
        &self,
        operation: &Self::Operation,
        snapshot: &Self::Snapshot,
    ) -> Generated<Self::Snapshot>;
}

/// Incremental step collector bound to one algorithm
#[derive(Debug)]
pub(crate) struct Recorder {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl Recorder {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn finish(self) -> Trace {
        Trace::new(self.algorithm, self.steps)
    }
}
