//! Single animation step
//!
//! A step is self-contained: it carries everything needed to render
//! one frame (message, highlighted coordinates, highlighted pseudocode
//! lines) and never refers back to the previous step.

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU16;

use super::Coordinate;

/// 1-based pseudocode line number
pub type LineNumber = NonZeroU16;

/// Classification of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum StepKind {
    /// Narration with no specific action (checks, setup)
    Info,
    /// Comparison against a target or another element
    Compare,
    /// Element visited by a traversal
    Visit,
    /// Element written or moved
    Write,
    /// Pointer relinked (lists, trees)
    Relink,
    /// Search hit
    Found,
    /// Search exhausted its candidates
    NotFound,
    /// Operation attempted on an empty structure
    Empty,
    /// Index outside the structure
    InvalidIndex,
    /// Operation needs a value and none was given
    MissingValue,
    /// Bounded structure is full
    Overflow,
    /// Bounded structure is empty on removal
    Underflow,
    /// Final summary of a completed operation
    Done,
}

impl StepKind {
    /// Whether this step reports a rejected operation
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StepKind::Empty
                | StepKind::InvalidIndex
                | StepKind::MissingValue
                | StepKind::Overflow
                | StepKind::Underflow
        )
    }
}

/// Immutable record produced by a trace generator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Step {
    /// What kind of step this is
    pub kind: StepKind,

    /// Human-readable description
    pub message: String,

    /// Structure positions to emphasize
    pub highlighted_cells: BTreeSet<Coordinate>,

    /// Pseudocode lines to emphasize
    pub highlighted_lines: BTreeSet<LineNumber>,
}

impl Step {
    /// Create step with no highlights
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            highlighted_cells: BTreeSet::new(),
            highlighted_lines: BTreeSet::new(),
        }
    }

    /// Add one highlighted coordinate
    pub fn cell(mut self, coordinate: impl Into<Coordinate>) -> Self {
        self.highlighted_cells.insert(coordinate.into());
        self
    }

    /// Add several highlighted coordinates
    pub fn cells<I, C>(mut self, coordinates: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        self.highlighted_cells
            .extend(coordinates.into_iter().map(Into::into));
        self
    }

    /// Add one highlighted pseudocode line (0 is not a line and is skipped)
    pub fn line(mut self, line: u16) -> Self {
        debug_assert!(line > 0, "pseudocode lines are 1-based");
        if let Some(line) = NonZeroU16::new(line) {
            self.highlighted_lines.insert(line);
        }
        self
    }

    /// Add several highlighted pseudocode lines
    pub fn lines(self, lines: impl IntoIterator<Item = u16>) -> Self {
        lines.into_iter().fold(self, Step::line)
    }

    /// Highlighted lines as plain integers (ascending)
    pub fn line_numbers(&self) -> Vec<u16> {
        self.highlighted_lines.iter().map(|l| l.get()).collect()
    }

    /// Whether the coordinate is highlighted
    pub fn highlights(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.highlighted_cells.contains(&coordinate.into())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.highlighted_cells.is_empty() {
            let cells: Vec<String> = self.highlighted_cells.iter().map(|c| c.to_string()).collect();
            write!(f, "  cells={}", cells.join(" "))?;
        }
        if !self.highlighted_lines.is_empty() {
            let lines: Vec<String> = self.highlighted_lines.iter().map(|l| l.to_string()).collect();
            write!(f, "  lines={}", lines.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_highlights() {
        let step = Step::new(StepKind::Compare, "Check A[2]")
            .cell(2)
            .cells([4, 2])
            .lines([2, 1]);

        assert_eq!(step.highlighted_cells.len(), 2);
        assert!(step.highlights(4));
        assert_eq!(step.line_numbers(), vec![1, 2]);
    }

    #[test]
    fn test_display_lists_cells_and_lines() {
        let step = Step::new(StepKind::Visit, "Visit (0, 1)")
            .cell((0, 1))
            .line(2);
        assert_eq!(step.to_string(), "Visit (0, 1)  cells=(0, 1)  lines=2");
    }

    #[test]
    fn test_rejection_kinds() {
        assert!(StepKind::Underflow.is_rejection());
        assert!(!StepKind::Found.is_rejection());
    }
}
