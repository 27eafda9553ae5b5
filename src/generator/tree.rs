//! Binary search tree traces

use std::cmp::Ordering;

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{Bst, NodeId};
use crate::trace::{Step, StepKind};

/// Tree operation with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    /// Insert a key (duplicates rejected)
    Insert(i64),
    /// Descend looking for a key
    Search(i64),
    /// Remove a key using successor replacement
    Delete(i64),
    /// Left, node, right
    InOrder,
    /// Node, left, right
    PreOrder,
    /// Left, right, node
    PostOrder,
    /// Breadth-first
    LevelOrder,
    /// Leftmost key
    Min,
    /// Rightmost key
    Max,
}

/// Trace generator for the binary search tree visualization
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTracer;

impl TraceGenerator for TreeTracer {
    type Snapshot = Bst;
    type Operation = TreeOp;

    fn name(&self) -> &'static str {
        "tree"
    }

    fn algorithm(&self, operation: &TreeOp) -> Algorithm {
        match operation {
            TreeOp::Insert(_) => Algorithm::TreeInsert,
            TreeOp::Search(_) => Algorithm::TreeSearch,
            TreeOp::Delete(_) => Algorithm::TreeDelete,
            TreeOp::InOrder => Algorithm::TreeInOrder,
            TreeOp::PreOrder => Algorithm::TreePreOrder,
            TreeOp::PostOrder => Algorithm::TreePostOrder,
            TreeOp::LevelOrder => Algorithm::TreeLevelOrder,
            TreeOp::Min => Algorithm::TreeMin,
            TreeOp::Max => Algorithm::TreeMax,
        }
    }

    fn generate(&self, operation: &TreeOp, tree: &Bst) -> Generated<Bst> {
        match *operation {
            TreeOp::Insert(value) => insert(tree, value),
            TreeOp::Search(value) => search(tree, value),
            TreeOp::Delete(value) => delete(tree, value),
            TreeOp::InOrder => traversal(tree, Algorithm::TreeInOrder, tree.in_order(), &[4]),
            TreeOp::PreOrder => traversal(tree, Algorithm::TreePreOrder, tree.pre_order(), &[3]),
            TreeOp::PostOrder => traversal(tree, Algorithm::TreePostOrder, tree.post_order(), &[5]),
            TreeOp::LevelOrder => {
                traversal(tree, Algorithm::TreeLevelOrder, tree.level_order(), &[3, 4])
            }
            TreeOp::Min => extreme(tree, true),
            TreeOp::Max => extreme(tree, false),
        }
    }
}

fn key(tree: &Bst, id: NodeId) -> i64 {
    tree.value(id).unwrap_or_default()
}

fn child(tree: &Bst, id: NodeId, left: bool) -> Option<NodeId> {
    tree.node(id).and_then(|n| if left { n.left } else { n.right })
}

fn insert(tree: &Bst, value: i64) -> Generated<Bst> {
    let mut rec = Recorder::new(Algorithm::TreeInsert);
    let Some(root) = tree.root() else {
        rec.push(
            Step::new(StepKind::Write, format!("Tree is empty: {} becomes the root", value))
                .lines([1, 5]),
        );
        let mut next = tree.clone();
        next.insert(value);
        return Generated::on_complete(rec.finish(), next);
    };

    let mut cur = root;
    loop {
        let here = key(tree, cur);
        match value.cmp(&here) {
            Ordering::Equal => {
                rec.push(
                    Step::new(StepKind::Info, format!("{} already exists - not inserted", value))
                        .cell(cur)
                        .line(3),
                );
                return Generated::read_only(rec.finish());
            }
            ordering => {
                let left = ordering == Ordering::Less;
                let side = if left { "left" } else { "right" };
                rec.push(
                    Step::new(
                        StepKind::Compare,
                        format!("Compare {} with {}: go {}", value, here, side),
                    )
                    .cell(cur)
                    .lines([2, 4]),
                );
                match child(tree, cur, left) {
                    Some(next) => cur = next,
                    None => {
                        rec.push(
                            Step::new(
                                StepKind::Write,
                                format!("Attach {} as {} child of {}", value, side, here),
                            )
                            .cell(cur)
                            .line(5),
                        );
                        let mut next = tree.clone();
                        next.insert(value);
                        return Generated::on_complete(rec.finish(), next);
                    }
                }
            }
        }
    }
}

fn search(tree: &Bst, value: i64) -> Generated<Bst> {
    if tree.is_empty() {
        return Generated::empty(Algorithm::TreeSearch, "Tree", "search");
    }
    let mut rec = Recorder::new(Algorithm::TreeSearch);
    let mut cur = tree.root();
    while let Some(id) = cur {
        let here = key(tree, id);
        match value.cmp(&here) {
            Ordering::Equal => {
                rec.push(
                    Step::new(StepKind::Found, format!("Found {}", value))
                        .cell(id)
                        .lines([2, 3]),
                );
                return Generated::read_only(rec.finish());
            }
            Ordering::Less => {
                rec.push(
                    Step::new(StepKind::Compare, format!("{} < {}: go left", value, here))
                        .cell(id)
                        .lines([2, 4]),
                );
                cur = child(tree, id, true);
            }
            Ordering::Greater => {
                rec.push(
                    Step::new(StepKind::Compare, format!("{} > {}: go right", value, here))
                        .cell(id)
                        .lines([2, 5]),
                );
                cur = child(tree, id, false);
            }
        }
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("Reached null - {} is not in the tree", value))
            .line(6),
    );
    Generated::read_only(rec.finish())
}

fn delete(tree: &Bst, value: i64) -> Generated<Bst> {
    if tree.is_empty() {
        return Generated::empty(Algorithm::TreeDelete, "Tree", "delete");
    }
    let mut rec = Recorder::new(Algorithm::TreeDelete);

    let mut cur = tree.root();
    let target = loop {
        let Some(id) = cur else {
            rec.push(
                Step::new(StepKind::NotFound, format!("{} not found - nothing deleted", value))
                    .line(5),
            );
            return Generated::read_only(rec.finish());
        };
        let here = key(tree, id);
        match value.cmp(&here) {
            Ordering::Equal => break id,
            Ordering::Less => {
                rec.push(
                    Step::new(StepKind::Compare, format!("{} < {}: go left", value, here))
                        .cell(id)
                        .lines([2, 3]),
                );
                cur = child(tree, id, true);
            }
            Ordering::Greater => {
                rec.push(
                    Step::new(StepKind::Compare, format!("{} > {}: go right", value, here))
                        .cell(id)
                        .lines([2, 4]),
                );
                cur = child(tree, id, false);
            }
        }
    };

    rec.push(
        Step::new(StepKind::Found, format!("Found {}", value))
            .cell(target)
            .line(6),
    );

    match (child(tree, target, true), child(tree, target, false)) {
        (None, None) => {
            rec.push(
                Step::new(StepKind::Relink, format!("{} is a leaf: remove it", value))
                    .cell(target)
                    .line(7),
            );
        }
        (Some(only), None) | (None, Some(only)) => {
            rec.push(
                Step::new(
                    StepKind::Relink,
                    format!("{} has one child: promote {}", value, key(tree, only)),
                )
                .cells([target, only])
                .line(8),
            );
        }
        (Some(_), Some(right)) => {
            rec.push(
                Step::new(StepKind::Info, format!("{} has two children: find successor", value))
                    .cell(target)
                    .line(9),
            );
            let mut s = right;
            loop {
                rec.push(
                    Step::new(StepKind::Visit, format!("Successor search at {}", key(tree, s)))
                        .cell(s)
                        .line(10),
                );
                match child(tree, s, true) {
                    Some(left) => s = left,
                    None => break,
                }
            }
            rec.push(
                Step::new(
                    StepKind::Write,
                    format!("Copy successor {} into the found node", key(tree, s)),
                )
                .cells([target, s])
                .line(11),
            );
            rec.push(
                Step::new(StepKind::Relink, format!("Remove successor node {}", key(tree, s)))
                    .cell(s)
                    .line(12),
            );
        }
    }

    let mut next = tree.clone();
    next.remove(value);
    rec.push(Step::new(StepKind::Done, format!("Deleted {}", value)));
    Generated::on_complete(rec.finish(), next)
}

fn traversal(
    tree: &Bst,
    algorithm: Algorithm,
    order: Vec<NodeId>,
    lines: &[u16],
) -> Generated<Bst> {
    if order.is_empty() {
        return Generated::empty(algorithm, "Tree", "traverse");
    }
    let mut rec = Recorder::new(algorithm);
    for id in order {
        rec.push(
            Step::new(StepKind::Visit, format!("Visit {}", key(tree, id)))
                .cell(id)
                .lines(lines.iter().copied()),
        );
    }
    Generated::read_only(rec.finish())
}

fn extreme(tree: &Bst, leftward: bool) -> Generated<Bst> {
    let (algorithm, label, side) = if leftward {
        (Algorithm::TreeMin, "Minimum", "left")
    } else {
        (Algorithm::TreeMax, "Maximum", "right")
    };
    let Some(root) = tree.root() else {
        return Generated::empty(algorithm, "Tree", "scan");
    };

    let mut rec = Recorder::new(algorithm);
    rec.push(
        Step::new(StepKind::Info, format!("Start at root {}", key(tree, root)))
            .cell(root)
            .line(1),
    );
    let mut cur = root;
    while let Some(next) = child(tree, cur, leftward) {
        rec.push(
            Step::new(
                StepKind::Visit,
                format!("Go {} from {} to {}", side, key(tree, cur), key(tree, next)),
            )
            .cell(next)
            .lines([2, 3]),
        );
        cur = next;
    }
    rec.push(
        Step::new(StepKind::Done, format!("{} is {}", label, key(tree, cur)))
            .cell(cur)
            .line(4),
    );
    Generated::read_only(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Bst {
        Bst::from_values([50, 30, 70, 20, 40, 60, 80])
    }

    fn visited(tree: &Bst, out: &Generated<Bst>) -> Vec<i64> {
        out.trace
            .iter()
            .filter_map(|s| s.highlighted_cells.iter().next())
            .filter_map(|c| c.as_node())
            .filter_map(|id| tree.value(id))
            .collect()
    }

    #[test]
    fn test_in_order_visits_sorted_keys() {
        let tree = seeded();
        let out = TreeTracer.generate(&TreeOp::InOrder, &tree);
        assert_eq!(visited(&tree, &out), vec![20, 30, 40, 50, 60, 70, 80]);
        assert!(out.trace.iter().all(|s| s.line_numbers() == vec![4]));
    }

    #[test]
    fn test_search_path() {
        let tree = seeded();
        let out = TreeTracer.generate(&TreeOp::Search(60), &tree);
        assert_eq!(visited(&tree, &out), vec![50, 70, 60]);
        assert_eq!(out.trace.last().unwrap().kind, StepKind::Found);

        let miss = TreeTracer.generate(&TreeOp::Search(65), &tree);
        assert_eq!(miss.trace.len(), 4);
        assert_eq!(miss.trace.last().unwrap().kind, StepKind::NotFound);
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let out = TreeTracer.generate(&TreeOp::Insert(40), &seeded());
        assert!(out.commit.is_none());
        assert!(out.trace.last().unwrap().message.contains("already exists"));
    }

    #[test]
    fn test_insert_highlights_parent() {
        let tree = seeded();
        let out = TreeTracer.generate(&TreeOp::Insert(45), &tree);
        let last = out.trace.last().unwrap();
        let parent = tree.find(40).unwrap();
        assert!(last.highlights(parent));
        let next = out.commit.into_state().unwrap();
        assert_eq!(next.sorted_values(), vec![20, 30, 40, 45, 50, 60, 70, 80]);
    }

    #[test]
    fn test_delete_two_children_walks_successor() {
        let tree = seeded();
        let out = TreeTracer.generate(&TreeOp::Delete(50), &tree);
        let lines: Vec<Vec<u16>> = out.trace.iter().map(|s| s.line_numbers()).collect();
        assert!(lines.contains(&vec![11]));
        assert!(lines.contains(&vec![12]));
        let next = out.commit.into_state().unwrap();
        assert_eq!(next.sorted_values(), vec![20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn test_delete_missing_key() {
        let out = TreeTracer.generate(&TreeOp::Delete(99), &seeded());
        assert!(out.commit.is_none());
        assert_eq!(out.trace.last().unwrap().kind, StepKind::NotFound);
    }

    #[test]
    fn test_min_max() {
        let tree = seeded();
        let min = TreeTracer.generate(&TreeOp::Min, &tree);
        assert_eq!(min.trace.last().unwrap().message, "Minimum is 20");
        let max = TreeTracer.generate(&TreeOp::Max, &tree);
        assert_eq!(max.trace.last().unwrap().message, "Maximum is 80");
    }

    #[test]
    fn test_empty_tree() {
        for op in [TreeOp::InOrder, TreeOp::Search(1), TreeOp::Delete(1), TreeOp::Min] {
            let out = TreeTracer.generate(&op, &Bst::new());
            assert_eq!(out.trace.len(), 1);
            assert_eq!(out.trace[0].kind, StepKind::Empty);
        }
    }
}
