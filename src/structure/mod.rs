//! Structure snapshots
//!
//! Each visualization owns exactly one snapshot. Generators only ever
//! read a snapshot; the new state an operation produces is handed
//! back as a separate value and committed by the host.

mod bst;
mod list;
mod matrix;
mod queue;
mod stack;
mod value;

pub use bst::{Bst, BstNode, NodeId};
pub use list::{LinkedList, ListKind};
pub use matrix::{Matrix, SpiralSide, SpiralVisit};
pub use queue::CircularQueue;
pub use stack::BoundedStack;
pub use value::{is_sorted, values, Value};

/// Which visualization a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// 1-D array
    Array,
    /// 2-D matrix
    Matrix,
    /// Singly linked list
    SinglyLinkedList,
    /// Doubly linked list
    DoublyLinkedList,
    /// Binary search tree
    Tree,
    /// Bounded stack
    Stack,
    /// Circular queue
    Queue,
}
