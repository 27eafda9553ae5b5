//! Positions inside a visualized structure
//!
//! A coordinate names one element the renderer should emphasize:
//! an array/stack/queue slot, a list position, a matrix cell or a
//! tree node identity.

use std::fmt;

use crate::structure::NodeId;

/// Position in the visualized structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Coordinate {
    /// Slot index (arrays, stacks, queues) or node position (linked lists)
    Index(usize),

    /// Matrix cell (0-based)
    Cell {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },

    /// Tree node identity
    Node(NodeId),
}

impl Coordinate {
    /// Matrix cell shorthand
    #[inline]
    pub fn cell(row: usize, col: usize) -> Self {
        Coordinate::Cell { row, col }
    }

    /// Slot index, if this is an index coordinate
    pub fn as_index(&self) -> Option<usize> {
        match *self {
            Coordinate::Index(i) => Some(i),
            _ => None,
        }
    }

    /// `(row, col)`, if this is a matrix cell
    pub fn as_cell(&self) -> Option<(usize, usize)> {
        match *self {
            Coordinate::Cell { row, col } => Some((row, col)),
            _ => None,
        }
    }

    /// Node id, if this is a tree coordinate
    pub fn as_node(&self) -> Option<NodeId> {
        match *self {
            Coordinate::Node(id) => Some(id),
            _ => None,
        }
    }
}

impl From<usize> for Coordinate {
    fn from(index: usize) -> Self {
        Coordinate::Index(index)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::Cell { row, col }
    }
}

impl From<NodeId> for Coordinate {
    fn from(id: NodeId) -> Self {
        Coordinate::Node(id)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Index(i) => write!(f, "[{}]", i),
            Coordinate::Cell { row, col } => write!(f, "({}, {})", row, col),
            Coordinate::Node(id) => write!(f, "{}", id),
        }
    }
}
