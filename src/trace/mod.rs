//! Step and Trace data contract
//!
//! A [`Trace`] is the complete, ordered narration of one operation.
//! It is built up front by a generator, replayed by the engine and
//! read step-by-step by the presentation layer. Steps are stored
//! behind an `Arc<[Step]>` so a trace is never mutated after creation
//! and cloning it between host and engine is cheap.

mod coordinate;
mod step;

pub use coordinate::Coordinate;
pub use step::{LineNumber, Step, StepKind};

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::pseudocode::Algorithm;

/// Ordered, finite, immutable sequence of steps
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Trace {
    /// Algorithm whose pseudocode the line numbers refer to
    algorithm: Option<Algorithm>,

    /// Steps in playback order
    steps: Arc<[Step]>,
}

impl Trace {
    /// Create trace for an algorithm
    pub fn new(algorithm: Algorithm, steps: Vec<Step>) -> Self {
        Self {
            algorithm: Some(algorithm),
            steps: steps.into(),
        }
    }

    /// Trace with no steps and no algorithm (initial engine state)
    pub fn empty() -> Self {
        Self {
            algorithm: None,
            steps: Arc::from(Vec::new()),
        }
    }

    /// Algorithm that produced this trace
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Number of steps
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Last step
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Index of the last step
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// All steps in order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over steps
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Default for Trace {
    fn default() -> Self {
        Trace::empty()
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.steps.len().to_string().len();
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{:>width$}/{}  {}", i + 1, self.steps.len(), step, width = width)?;
        }
        Ok(())
    }
}
