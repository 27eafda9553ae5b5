//! Singly and doubly linked list traces
//!
//! Every hop from one node to the next is its own step, and so is
//! every pointer rewrite. Doubly linked lists get the extra `prev`
//! rewrites; singly linked lists skip them.

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{LinkedList, Value};
use crate::trace::{Step, StepKind};

/// Linked list operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    /// New node becomes the head
    InsertHead(Value),
    /// New node appended after the last node
    InsertTail(Value),
    /// New node placed right after node `index`
    InsertAfter {
        /// Existing node position
        index: usize,
        /// Value of the new node
        value: Value,
    },
    /// New node placed right before node `index`
    InsertBefore {
        /// Existing node position
        index: usize,
        /// Value of the new node
        value: Value,
    },
    /// Unlink the head
    DeleteHead,
    /// Unlink the last node
    DeleteTail,
    /// Unlink node `index`
    DeleteAt(usize),
    /// Unlink the first node holding a value
    DeleteValue(Value),
    /// Walk from the head until a match
    Search(Value),
    /// Visit head to tail via `next`
    TraverseForward,
    /// Visit tail to head via `prev` (doubly linked only)
    TraverseBackward,
}

/// Trace generator for both linked list visualizations
#[derive(Debug, Clone, Copy, Default)]
pub struct ListTracer;

impl TraceGenerator for ListTracer {
    type Snapshot = LinkedList;
    type Operation = ListOp;

    fn name(&self) -> &'static str {
        "list"
    }

    fn algorithm(&self, operation: &ListOp) -> Algorithm {
        match operation {
            ListOp::InsertHead(_) => Algorithm::ListInsertHead,
            ListOp::InsertTail(_) => Algorithm::ListInsertTail,
            ListOp::InsertAfter { .. } => Algorithm::ListInsertAfter,
            ListOp::InsertBefore { .. } => Algorithm::ListInsertBefore,
            ListOp::DeleteHead => Algorithm::ListDeleteHead,
            ListOp::DeleteTail => Algorithm::ListDeleteTail,
            ListOp::DeleteAt(_) => Algorithm::ListDeleteAt,
            ListOp::DeleteValue(_) => Algorithm::ListDeleteValue,
            ListOp::Search(_) => Algorithm::ListSearch,
            ListOp::TraverseForward => Algorithm::ListTraverseForward,
            ListOp::TraverseBackward => Algorithm::ListTraverseBackward,
        }
    }

    fn generate(&self, operation: &ListOp, list: &LinkedList) -> Generated<LinkedList> {
        if let Some((value, action)) = value_argument(operation) {
            if value.is_blank() {
                return Generated::missing_value(self.algorithm(operation), action);
            }
        }
        match operation {
            ListOp::InsertHead(value) => insert_head(list, value),
            ListOp::InsertTail(value) => insert_tail(list, value),
            ListOp::InsertAfter { index, value } => insert_after(list, *index, value),
            ListOp::InsertBefore { index, value } => insert_before(list, *index, value),
            ListOp::DeleteHead => delete_head(list),
            ListOp::DeleteTail => delete_tail(list),
            ListOp::DeleteAt(index) => delete_at(list, *index),
            ListOp::DeleteValue(target) => delete_value(list, target),
            ListOp::Search(target) => search(list, target),
            ListOp::TraverseForward => traverse_forward(list),
            ListOp::TraverseBackward => traverse_backward(list),
        }
    }
}

fn value_argument(operation: &ListOp) -> Option<(&Value, &'static str)> {
    match operation {
        ListOp::InsertHead(value)
        | ListOp::InsertTail(value)
        | ListOp::InsertAfter { value, .. }
        | ListOp::InsertBefore { value, .. } => Some((value, "insert")),
        ListOp::DeleteValue(target) => Some((target, "delete")),
        ListOp::Search(target) => Some((target, "search for")),
        _ => None,
    }
}

fn node_label(list: &LinkedList, index: usize) -> String {
    match list.get(index) {
        Some(value) => format!("node {} ({})", index, value),
        None => "null".to_string(),
    }
}

fn invalid_index(algorithm: Algorithm, list: &LinkedList, index: usize) -> Generated<LinkedList> {
    Generated::rejected(
        algorithm,
        Step::new(
            StepKind::InvalidIndex,
            format!("Invalid index {} (list has {} nodes)", index, list.len()),
        )
        .line(1),
    )
}

// One step per hop from the head up to and including `last`.
fn walk_to(rec: &mut Recorder, list: &LinkedList, last: usize, line: u16) {
    for i in 0..=last.min(list.len().saturating_sub(1)) {
        let message = if i == 0 {
            format!("Start at head, {}", node_label(list, 0))
        } else {
            format!("Follow next to {}", node_label(list, i))
        };
        rec.push(Step::new(StepKind::Visit, message).cell(i).line(line));
    }
}

fn with_inserted(list: &LinkedList, index: usize, value: &Value) -> LinkedList {
    let mut next = list.clone();
    next.insert(index, value.clone());
    next
}

fn with_removed(list: &LinkedList, index: usize) -> LinkedList {
    let mut next = list.clone();
    next.remove(index);
    next
}

fn insert_head(list: &LinkedList, value: &Value) -> Generated<LinkedList> {
    let mut rec = Recorder::new(Algorithm::ListInsertHead);
    rec.push(Step::new(StepKind::Info, format!("Create new node {}", value)).line(1));

    let mut link = Step::new(
        StepKind::Relink,
        format!("new.next -> {}", node_label(list, 0)),
    )
    .line(2);
    if !list.is_empty() {
        link = link.cell(0);
    }
    rec.push(link);

    if list.is_doubly() && !list.is_empty() {
        rec.push(
            Step::new(StepKind::Relink, format!("{}.prev -> new", node_label(list, 0)))
                .cell(0)
                .line(2),
        );
    }
    rec.push(Step::new(StepKind::Relink, format!("head -> new node {}", value)).line(3));
    Generated::on_complete(rec.finish(), with_inserted(list, 0, value))
}

fn insert_tail(list: &LinkedList, value: &Value) -> Generated<LinkedList> {
    let mut rec = Recorder::new(Algorithm::ListInsertTail);
    rec.push(Step::new(StepKind::Info, format!("Create new node {}", value)).line(1));

    if list.is_empty() {
        rec.push(
            Step::new(StepKind::Relink, format!("List is empty: head -> new node {}", value))
                .line(2),
        );
        return Generated::on_complete(rec.finish(), with_inserted(list, 0, value));
    }

    let last = list.len() - 1;
    walk_to(&mut rec, list, last, 3);
    rec.push(
        Step::new(StepKind::Relink, format!("{}.next -> new", node_label(list, last)))
            .cell(last)
            .line(4),
    );
    if list.is_doubly() {
        rec.push(
            Step::new(StepKind::Relink, format!("new.prev -> {}", node_label(list, last)))
                .cell(last)
                .line(4),
        );
    }
    Generated::on_complete(rec.finish(), with_inserted(list, list.len(), value))
}

fn insert_after(list: &LinkedList, index: usize, value: &Value) -> Generated<LinkedList> {
    if index >= list.len() {
        return invalid_index(Algorithm::ListInsertAfter, list, index);
    }
    let mut rec = Recorder::new(Algorithm::ListInsertAfter);
    walk_to(&mut rec, list, index, 1);
    rec.push(Step::new(StepKind::Info, format!("Create new node {}", value)).line(2));

    let successor = index + 1;
    let mut link = Step::new(
        StepKind::Relink,
        format!("new.next -> {}", node_label(list, successor)),
    )
    .line(3);
    if successor < list.len() {
        link = link.cell(successor);
    }
    rec.push(link);

    if list.is_doubly() {
        rec.push(
            Step::new(StepKind::Relink, format!("new.prev -> {}", node_label(list, index)))
                .cell(index)
                .line(3),
        );
        if successor < list.len() {
            rec.push(
                Step::new(
                    StepKind::Relink,
                    format!("{}.prev -> new", node_label(list, successor)),
                )
                .cell(successor)
                .line(4),
            );
        }
    }
    rec.push(
        Step::new(StepKind::Relink, format!("{}.next -> new", node_label(list, index)))
            .cell(index)
            .line(4),
    );
    Generated::on_complete(rec.finish(), with_inserted(list, successor, value))
}

fn insert_before(list: &LinkedList, index: usize, value: &Value) -> Generated<LinkedList> {
    if index >= list.len() {
        return invalid_index(Algorithm::ListInsertBefore, list, index);
    }
    let mut rec = Recorder::new(Algorithm::ListInsertBefore);
    walk_to(&mut rec, list, index, 1);
    rec.push(Step::new(StepKind::Info, format!("Create new node {}", value)).line(2));
    rec.push(
        Step::new(StepKind::Relink, format!("new.next -> {}", node_label(list, index)))
            .cell(index)
            .line(3),
    );

    let predecessor = index.checked_sub(1);
    if list.is_doubly() {
        let mut link = Step::new(
            StepKind::Relink,
            format!(
                "new.prev -> {}",
                predecessor.map_or_else(|| "null".to_string(), |p| node_label(list, p))
            ),
        )
        .line(3);
        if let Some(p) = predecessor {
            link = link.cell(p);
        }
        rec.push(link);
    }

    match predecessor {
        Some(p) => rec.push(
            Step::new(StepKind::Relink, format!("{}.next -> new", node_label(list, p)))
                .cell(p)
                .line(4),
        ),
        None => rec.push(Step::new(StepKind::Relink, "head -> new").line(4)),
    }
    if list.is_doubly() {
        rec.push(
            Step::new(StepKind::Relink, format!("{}.prev -> new", node_label(list, index)))
                .cell(index)
                .line(4),
        );
    }
    Generated::on_complete(rec.finish(), with_inserted(list, index, value))
}

fn delete_head(list: &LinkedList) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListDeleteHead, "List", "delete");
    }
    let mut rec = Recorder::new(Algorithm::ListDeleteHead);
    rec.push(
        Step::new(StepKind::Info, format!("List has {} nodes", list.len()))
            .cell(0)
            .line(1),
    );
    rec.push(
        Step::new(StepKind::Info, format!("Save head {}", node_label(list, 0)))
            .cell(0)
            .line(2),
    );

    let mut link = Step::new(StepKind::Relink, format!("head -> {}", node_label(list, 1))).line(3);
    if list.len() > 1 {
        link = link.cell(1);
    }
    rec.push(link);
    if list.is_doubly() && list.len() > 1 {
        rec.push(
            Step::new(StepKind::Relink, format!("{}.prev -> null", node_label(list, 1)))
                .cell(1)
                .line(3),
        );
    }
    Generated::on_complete(rec.finish(), with_removed(list, 0))
}

fn delete_tail(list: &LinkedList) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListDeleteTail, "List", "delete");
    }
    let mut rec = Recorder::new(Algorithm::ListDeleteTail);
    let last = list.len() - 1;
    rec.push(
        Step::new(StepKind::Info, format!("List has {} nodes", list.len()))
            .cell(last)
            .line(1),
    );

    if last == 0 {
        rec.push(
            Step::new(
                StepKind::Relink,
                format!("head -> null (removed only {})", node_label(list, 0)),
            )
            .cell(0)
            .line(3),
        );
    } else {
        walk_to(&mut rec, list, last - 1, 2);
        rec.push(
            Step::new(
                StepKind::Relink,
                format!(
                    "{}.next -> null (removed {})",
                    node_label(list, last - 1),
                    node_label(list, last)
                ),
            )
            .cells([last - 1, last])
            .line(3),
        );
    }
    Generated::on_complete(rec.finish(), with_removed(list, last))
}

// Pointer rewrites that unlink node `index`; the caller has already located it.
fn unlink(rec: &mut Recorder, list: &LinkedList, index: usize) {
    let successor = node_label(list, index + 1);
    match index.checked_sub(1) {
        Some(p) => rec.push(
            Step::new(
                StepKind::Relink,
                format!("{}.next -> {}", node_label(list, p), successor),
            )
            .cells([p, index])
            .line(2),
        ),
        None => rec.push(
            Step::new(StepKind::Relink, format!("head -> {}", successor))
                .cell(index)
                .line(2),
        ),
    }

    if list.is_doubly() && index + 1 < list.len() {
        let predecessor = index
            .checked_sub(1)
            .map_or_else(|| "null".to_string(), |p| node_label(list, p));
        rec.push(
            Step::new(
                StepKind::Relink,
                format!("{}.prev -> {}", node_label(list, index + 1), predecessor),
            )
            .cells([index, index + 1])
            .line(3),
        );
    }

    rec.push(
        Step::new(StepKind::Done, format!("Removed {}", node_label(list, index)))
            .cell(index)
            .line(4),
    );
}

fn delete_at(list: &LinkedList, index: usize) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListDeleteAt, "List", "delete");
    }
    if index >= list.len() {
        return invalid_index(Algorithm::ListDeleteAt, list, index);
    }
    let mut rec = Recorder::new(Algorithm::ListDeleteAt);
    walk_to(&mut rec, list, index, 1);
    unlink(&mut rec, list, index);
    Generated::on_complete(rec.finish(), with_removed(list, index))
}

fn delete_value(list: &LinkedList, target: &Value) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListDeleteValue, "List", "delete");
    }
    let mut rec = Recorder::new(Algorithm::ListDeleteValue);
    for (i, value) in list.values().iter().enumerate() {
        if value.matches(target) {
            rec.push(
                Step::new(StepKind::Found, format!("Found {} at node {}", target, i))
                    .cell(i)
                    .line(1),
            );
            unlink(&mut rec, list, i);
            return Generated::on_complete(rec.finish(), with_removed(list, i));
        }
        rec.push(
            Step::new(StepKind::Compare, format!("node {} ({}) is not {}", i, value, target))
                .cell(i)
                .line(1),
        );
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("{} not found - nothing deleted", target)).line(1),
    );
    Generated::read_only(rec.finish())
}

fn search(list: &LinkedList, target: &Value) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListSearch, "List", "search");
    }
    let mut rec = Recorder::new(Algorithm::ListSearch);
    for (i, value) in list.values().iter().enumerate() {
        if value.matches(target) {
            rec.push(
                Step::new(StepKind::Found, format!("Found {} at node {}", target, i))
                    .cell(i)
                    .lines([2, 3]),
            );
            return Generated::read_only(rec.finish());
        }
        let lines: &[u16] = if i == 0 { &[1, 2] } else { &[2] };
        rec.push(
            Step::new(
                StepKind::Compare,
                format!("Compare node {} ({}) with {}", i, value, target),
            )
            .cell(i)
            .lines(lines.iter().copied()),
        );
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("Reached null - {} not found", target)).line(4),
    );
    Generated::read_only(rec.finish())
}

fn traverse_forward(list: &LinkedList) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListTraverseForward, "List", "traverse");
    }
    let mut rec = Recorder::new(Algorithm::ListTraverseForward);
    for (i, value) in list.values().iter().enumerate() {
        let lines: &[u16] = if i == 0 { &[1, 2] } else { &[2] };
        rec.push(
            Step::new(StepKind::Visit, format!("Visit node {} ({})", i, value))
                .cell(i)
                .lines(lines.iter().copied()),
        );
    }
    Generated::read_only(rec.finish())
}

fn traverse_backward(list: &LinkedList) -> Generated<LinkedList> {
    if list.is_empty() {
        return Generated::empty(Algorithm::ListTraverseBackward, "List", "traverse");
    }
    if !list.is_doubly() {
        return Generated::rejected(
            Algorithm::ListTraverseBackward,
            Step::new(
                StepKind::Info,
                "Backward traversal needs prev pointers - singly linked nodes only have next",
            )
            .line(1),
        );
    }
    let mut rec = Recorder::new(Algorithm::ListTraverseBackward);
    let last = list.len() - 1;
    for (i, value) in list.values().iter().enumerate().rev() {
        let lines: &[u16] = if i == last { &[1, 2] } else { &[2] };
        rec.push(
            Step::new(StepKind::Visit, format!("Visit node {} ({})", i, value))
                .cell(i)
                .lines(lines.iter().copied()),
        );
    }
    Generated::read_only(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{values, ListKind};

    fn singly(items: &[&str]) -> LinkedList {
        LinkedList::from_values(ListKind::Singly, values(items.iter().copied()))
    }

    fn doubly(items: &[&str]) -> LinkedList {
        LinkedList::from_values(ListKind::Doubly, values(items.iter().copied()))
    }

    fn kinds(out: &Generated<LinkedList>) -> Vec<StepKind> {
        out.trace.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_insert_tail_walks_every_node() {
        let out = ListTracer.generate(
            &ListOp::InsertTail(Value::from("D")),
            &singly(&["A", "B", "C"]),
        );
        use StepKind::*;
        assert_eq!(kinds(&out), vec![Info, Visit, Visit, Visit, Relink]);
        assert_eq!(
            out.commit.into_state().unwrap().values(),
            &values(["A", "B", "C", "D"])[..]
        );
    }

    #[test]
    fn test_doubly_insert_after_rewrites_four_pointers() {
        let out = ListTracer.generate(
            &ListOp::InsertAfter {
                index: 0,
                value: Value::from("X"),
            },
            &doubly(&["A", "B"]),
        );
        let relinks = out.trace.iter().filter(|s| s.kind == StepKind::Relink).count();
        assert_eq!(relinks, 4);
        assert_eq!(
            out.commit.into_state().unwrap().values(),
            &values(["A", "X", "B"])[..]
        );
    }

    #[test]
    fn test_singly_insert_before_head() {
        let out = ListTracer.generate(
            &ListOp::InsertBefore {
                index: 0,
                value: Value::from("X"),
            },
            &singly(&["A"]),
        );
        assert_eq!(out.trace.last().unwrap().message, "head -> new");
        assert_eq!(
            out.commit.into_state().unwrap().values(),
            &values(["X", "A"])[..]
        );
    }

    #[test]
    fn test_delete_value_removes_first_duplicate() {
        let out = ListTracer.generate(
            &ListOp::DeleteValue(Value::from("B")),
            &singly(&["A", "B", "B"]),
        );
        assert_eq!(out.trace[1].kind, StepKind::Found);
        assert!(out.trace[1].highlights(1));
        assert_eq!(
            out.commit.into_state().unwrap().values(),
            &values(["A", "B"])[..]
        );
    }

    #[test]
    fn test_delete_value_miss_commits_nothing() {
        let out = ListTracer.generate(&ListOp::DeleteValue(Value::from("Z")), &singly(&["A"]));
        assert_eq!(out.trace.last().unwrap().kind, StepKind::NotFound);
        assert!(out.commit.is_none());
    }

    #[test]
    fn test_search_stops_at_match() {
        let out = ListTracer.generate(
            &ListOp::Search(Value::from("C")),
            &singly(&["A", "B", "C", "D"]),
        );
        assert_eq!(out.trace.len(), 3);
        assert_eq!(out.trace[2].line_numbers(), vec![2, 3]);
    }

    #[test]
    fn test_backward_traversal() {
        let out = ListTracer.generate(&ListOp::TraverseBackward, &doubly(&["A", "B", "C"]));
        let order: Vec<bool> = (0..3).map(|i| out.trace[i].highlights(2 - i)).collect();
        assert_eq!(order, vec![true, true, true]);

        let refused = ListTracer.generate(&ListOp::TraverseBackward, &singly(&["A", "B"]));
        assert_eq!(refused.trace.len(), 1);
        assert!(refused.trace[0].message.contains("prev"));
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let out = ListTracer.generate(&ListOp::DeleteAt(3), &singly(&["A"]));
        assert_eq!(kinds(&out), vec![StepKind::InvalidIndex]);
    }

    #[test]
    fn test_delete_tail_single_node() {
        let out = ListTracer.generate(&ListOp::DeleteTail, &doubly(&["A"]));
        assert_eq!(out.trace.len(), 2);
        assert!(out.commit.into_state().unwrap().is_empty());
    }
}
