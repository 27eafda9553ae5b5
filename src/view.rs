//! Presentation adapter
//!
//! The rendering layer reads exactly three things from the active
//! step: the status message, the structure highlight set and the
//! pseudocode highlight set. [`StepView`] packages them, along with
//! the listing the line numbers refer to.

use std::collections::BTreeSet;
use std::fmt;

use crate::engine::{AnimationEngine, Clock};
use crate::pseudocode::Listing;
use crate::trace::{Coordinate, LineNumber, Step};

/// What the renderer shows for one step
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct StepView {
    /// Active step index
    pub index: usize,

    /// Number of steps in the trace
    pub total: usize,

    /// Status line
    pub message: String,

    /// Structure positions to emphasize
    pub cells: BTreeSet<Coordinate>,

    /// Pseudocode lines to emphasize
    pub lines: BTreeSet<LineNumber>,

    /// Listing the lines belong to
    #[cfg_attr(feature = "visualize", serde(skip))]
    pub listing: Option<&'static Listing>,
}

impl StepView {
    /// View of one step of a trace
    pub fn from_step(
        step: &Step,
        index: usize,
        total: usize,
        listing: Option<&'static Listing>,
    ) -> Self {
        Self {
            index,
            total,
            message: step.message.clone(),
            cells: step.highlighted_cells.clone(),
            lines: step.highlighted_lines.clone(),
            listing,
        }
    }

    /// View of the engine's active step; `None` while the trace is empty
    pub fn of<C: Clock>(engine: &AnimationEngine<C>) -> Option<Self> {
        let trace = engine.trace();
        let listing = trace.algorithm().map(|a| a.listing());
        engine
            .current()
            .map(|step| Self::from_step(step, engine.step(), trace.len(), listing))
    }

    /// Whether a structure position is highlighted
    pub fn highlights(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.cells.contains(&coordinate.into())
    }

    /// Pseudocode panel with highlighted lines marked
    pub fn code_panel(&self) -> Option<String> {
        self.listing.map(|l| l.render(&self.lines))
    }
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.index + 1, self.total, self.message)
    }
}
