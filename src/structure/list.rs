//! Linked list snapshot (list-as-array)
//!
//! Nodes are kept in head-to-tail order; node `i` is the node reached
//! after `i` hops from the head. The flavour decides whether `prev`
//! pointers exist.

use std::fmt;

use super::Value;

/// Singly or doubly linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum ListKind {
    /// `next` pointers only
    #[default]
    Singly,
    /// `next` and `prev` pointers
    Doubly,
}

/// Linked list of values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LinkedList {
    kind: ListKind,
    nodes: Vec<Value>,
}

impl LinkedList {
    /// Empty list
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
        }
    }

    /// List holding `values` head to tail
    pub fn from_values(kind: ListKind, values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            kind,
            nodes: values.into_iter().collect(),
        }
    }

    /// Flavour
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Whether `prev` pointers exist
    pub fn is_doubly(&self) -> bool {
        self.kind == ListKind::Doubly
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value at position
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.nodes.get(index)
    }

    /// Values head to tail
    pub fn values(&self) -> &[Value] {
        &self.nodes
    }

    /// Position of the first node matching `target`
    pub fn position(&self, target: &Value) -> Option<usize> {
        self.nodes.iter().position(|v| v.matches(target))
    }

    /// Insert so the new node ends up at `index` (0..=len)
    pub fn insert(&mut self, index: usize, value: Value) -> bool {
        if index > self.nodes.len() {
            return false;
        }
        self.nodes.insert(index, value);
        true
    }

    /// Remove the node at `index`
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.nodes.len() {
            Some(self.nodes.remove(index))
        } else {
            None
        }
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            ListKind::Singly => " -> ",
            ListKind::Doubly => " <-> ",
        };
        write!(f, "head")?;
        for node in &self.nodes {
            write!(f, "{}{}", arrow, node.as_str())?;
        }
        writeln!(f, "{}null", arrow)
    }
}
