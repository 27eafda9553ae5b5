//! Binary search tree snapshot
//!
//! Nodes live in an id-keyed arena. Ids are handed out by the tree
//! itself and never reused, so a node highlighted in one trace keeps
//! its identity after later inserts and deletes.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

/// Stable node identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BstNode {
    /// Key
    pub value: i64,
    /// Left child
    pub left: Option<NodeId>,
    /// Right child
    pub right: Option<NodeId>,
}

/// Binary search tree without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Bst {
    root: Option<NodeId>,
    nodes: BTreeMap<NodeId, BstNode>,
    next_id: u32,
}

impl Default for Bst {
    fn default() -> Self {
        Self::new()
    }
}

impl Bst {
    /// Empty tree
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Tree built by inserting `values` in order (duplicates skipped)
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::new();
        for v in values {
            let _ = tree.insert(v);
        }
        tree
    }

    /// Root id
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node by id
    pub fn node(&self, id: NodeId) -> Option<&BstNode> {
        self.nodes.get(&id)
    }

    /// Key of a node
    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.nodes.get(&id).map(|n| n.value)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn allocate(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            BstNode {
                value,
                left: None,
                right: None,
            },
        );
        id
    }

    /// Insert a key; `None` when it is already present
    pub fn insert(&mut self, value: i64) -> Option<NodeId> {
        let Some(mut cur) = self.root else {
            let id = self.allocate(value);
            self.root = Some(id);
            return Some(id);
        };

        loop {
            let node = self.nodes.get(&cur)?;
            if value == node.value {
                return None;
            }
            let next = if value < node.value { node.left } else { node.right };
            match next {
                Some(child) => cur = child,
                None => {
                    let id = self.allocate(value);
                    let parent = self.nodes.get_mut(&cur)?;
                    if value < parent.value {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return Some(id);
                }
            }
        }
    }

    /// Find node holding a key
    pub fn find(&self, value: i64) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.nodes.get(&id)?;
            if value == node.value {
                return Some(id);
            }
            cur = if value < node.value { node.left } else { node.right };
        }
        None
    }

    /// Remove a key; a node with two children takes its in-order
    /// successor's key and the successor node is removed instead
    pub fn remove(&mut self, value: i64) -> bool {
        let root = self.root;
        match self.remove_from(root, value) {
            Some(new_root) => {
                self.root = new_root;
                true
            }
            None => false,
        }
    }

    // Returns the replacement for `subtree`, or None when the key was absent.
    fn remove_from(&mut self, subtree: Option<NodeId>, value: i64) -> Option<Option<NodeId>> {
        let id = subtree?;
        let node = self.nodes.get(&id)?.clone();

        if value < node.value {
            let replacement = self.remove_from(node.left, value)?;
            if let Some(n) = self.nodes.get_mut(&id) {
                n.left = replacement;
            }
            return Some(Some(id));
        }
        if value > node.value {
            let replacement = self.remove_from(node.right, value)?;
            if let Some(n) = self.nodes.get_mut(&id) {
                n.right = replacement;
            }
            return Some(Some(id));
        }

        match (node.left, node.right) {
            (None, None) => {
                self.nodes.remove(&id);
                Some(None)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.nodes.remove(&id);
                Some(Some(child))
            }
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let successor_value = self.value(successor)?;
                let replacement = self.remove_from(Some(right), successor_value)?;
                if let Some(n) = self.nodes.get_mut(&id) {
                    n.value = successor_value;
                    n.right = replacement;
                }
                Some(Some(id))
            }
        }
    }

    /// Leftmost node of the subtree rooted at `id`
    pub fn leftmost(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(left) = self.nodes.get(&cur).and_then(|n| n.left) {
            cur = left;
        }
        cur
    }

    /// Ids in sorted key order
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes.get(&id).and_then(|n| n.left);
            }
            if let Some(id) = stack.pop() {
                out.push(id);
                cur = self.nodes.get(&id).and_then(|n| n.right);
            }
        }
        out
    }

    /// Ids in node-left-right order
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.right);
                stack.extend(node.left);
            }
        }
        out
    }

    /// Ids in left-right-node order
    pub fn post_order(&self) -> Vec<NodeId> {
        // reverse of node-right-left
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.left);
                stack.extend(node.right);
            }
        }
        out.reverse();
        out
    }

    /// Ids level by level, left to right
    pub fn level_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            out.push(id);
            if let Some(node) = self.nodes.get(&id) {
                queue.extend(node.left);
                queue.extend(node.right);
            }
        }
        out
    }

    /// Keys in sorted order
    pub fn sorted_values(&self) -> Vec<i64> {
        self.in_order()
            .into_iter()
            .filter_map(|id| self.value(id))
            .collect()
    }

    /// Whether `child` hangs directly below `parent`
    pub fn is_child_of(&self, child: NodeId, parent: NodeId) -> bool {
        self.nodes
            .get(&parent)
            .map(|p| p.left == Some(child) || p.right == Some(child))
            .unwrap_or(false)
    }
}

impl fmt::Display for Bst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn walk(
            tree: &Bst,
            id: Option<NodeId>,
            depth: usize,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            let Some(id) = id else { return Ok(()) };
            let Some(node) = tree.node(id) else { return Ok(()) };
            walk(tree, node.right, depth + 1, f)?;
            writeln!(f, "{}{}", "    ".repeat(depth), node.value)?;
            walk(tree, node.left, depth + 1, f)
        }

        if self.is_empty() {
            return writeln!(f, "(empty tree)");
        }
        walk(self, self.root, 0, f)
    }
}
