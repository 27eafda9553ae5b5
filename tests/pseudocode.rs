mod common;

use std::collections::BTreeSet;

use common::{array, grid_2x3, list, seeded_tree};
use proptest::prelude::*;
use signum_trace::structure::{
    values, Bst, BoundedStack, CircularQueue, LinkedList, ListKind, Matrix, Value,
};
use signum_trace::{
    Algorithm, ArrayOp, ArrayTracer, Generated, ListOp, ListTracer, MatrixOp, MatrixTracer,
    QueueOp, QueueTracer, StackOp, StackTracer, TraceGenerator, TreeOp, TreeTracer,
};

/// Checks every highlighted line against the listing the trace names
fn assert_lines_in_listing<G: TraceGenerator>(
    generator: &G,
    op: &G::Operation,
    snapshot: &G::Snapshot,
    seen: &mut BTreeSet<Algorithm>,
) {
    let Generated { trace, .. } = generator.generate(op, snapshot);
    let algorithm = trace.algorithm().expect("generated trace names its algorithm");
    assert_eq!(algorithm, generator.algorithm(op));
    seen.insert(algorithm);

    let listing = algorithm.listing();
    for (i, step) in trace.iter().enumerate() {
        for line in step.line_numbers() {
            assert!(
                line >= 1 && usize::from(line) <= listing.len(),
                "{:?} step {} highlights line {} of a {}-line listing",
                algorithm,
                i,
                line,
                listing.len()
            );
        }
    }
}

fn array_ops(len: usize) -> Vec<ArrayOp> {
    vec![
        ArrayOp::Get(0),
        ArrayOp::Get(len),
        ArrayOp::Set { index: 0, value: Value::from(9) },
        ArrayOp::Set { index: len + 1, value: Value::from(9) },
        ArrayOp::Set { index: 0, value: Value::blank() },
        ArrayOp::Fill(Value::from(0)),
        ArrayOp::Randomize { seed: 7 },
        ArrayOp::Traverse,
        ArrayOp::LinearSearch(Value::from(3)),
        ArrayOp::LinearSearch(Value::from(404)),
        ArrayOp::BinarySearch(Value::from(3)),
        ArrayOp::BinarySearch(Value::from(404)),
        ArrayOp::BinarySearch(Value::from(-1)),
        ArrayOp::Min,
        ArrayOp::Max,
        ArrayOp::Reverse,
        ArrayOp::BubbleSort,
    ]
}

fn matrix_ops() -> Vec<MatrixOp> {
    vec![
        MatrixOp::Get { row: 0, col: 0 },
        MatrixOp::Get { row: 9, col: 0 },
        MatrixOp::Set { row: 1, col: 1, value: Value::from(8) },
        MatrixOp::Set { row: 0, col: 9, value: Value::from(8) },
        MatrixOp::Fill(Value::from(1)),
        MatrixOp::Randomize { seed: 3 },
        MatrixOp::RowMajor,
        MatrixOp::ColumnMajor,
        MatrixOp::Spiral,
        MatrixOp::Search(Value::from(5)),
        MatrixOp::Search(Value::from(404)),
        MatrixOp::Transpose,
        MatrixOp::Rotate90,
    ]
}

fn list_ops() -> Vec<ListOp> {
    vec![
        ListOp::InsertHead(Value::from("Z")),
        ListOp::InsertTail(Value::from("Z")),
        ListOp::InsertAfter { index: 1, value: Value::from("Z") },
        ListOp::InsertAfter { index: 9, value: Value::from("Z") },
        ListOp::InsertBefore { index: 0, value: Value::from("Z") },
        ListOp::InsertBefore { index: 2, value: Value::from("Z") },
        ListOp::DeleteHead,
        ListOp::DeleteTail,
        ListOp::DeleteAt(1),
        ListOp::DeleteAt(9),
        ListOp::DeleteValue(Value::from("B")),
        ListOp::DeleteValue(Value::from("Q")),
        ListOp::Search(Value::from("C")),
        ListOp::Search(Value::from("Q")),
        ListOp::TraverseForward,
        ListOp::TraverseBackward,
    ]
}

fn tree_ops() -> Vec<TreeOp> {
    vec![
        TreeOp::Insert(45),
        TreeOp::Insert(50),
        TreeOp::Search(60),
        TreeOp::Search(65),
        TreeOp::Delete(20),
        TreeOp::Delete(30),
        TreeOp::Delete(50),
        TreeOp::Delete(99),
        TreeOp::InOrder,
        TreeOp::PreOrder,
        TreeOp::PostOrder,
        TreeOp::LevelOrder,
        TreeOp::Min,
        TreeOp::Max,
    ]
}

fn stack_ops() -> Vec<StackOp> {
    vec![
        StackOp::Push(Value::from(1)),
        StackOp::Pop,
        StackOp::Peek,
        StackOp::IsEmpty,
        StackOp::IsFull,
    ]
}

fn queue_ops() -> Vec<QueueOp> {
    vec![
        QueueOp::Enqueue(Value::from(1)),
        QueueOp::Dequeue,
        QueueOp::Front,
        QueueOp::IsEmpty,
        QueueOp::IsFull,
    ]
}

/// Queue whose front has wrapped past the end of the buffer
fn wrapped_queue() -> CircularQueue {
    let mut queue = CircularQueue::from_values(4, values([1, 2, 3, 4])).expect("fits");
    queue.dequeue();
    queue.dequeue();
    queue.enqueue(Value::from(5));
    queue
}

#[test]
fn every_listing_line_reference_is_in_range() {
    let mut seen = BTreeSet::new();

    for snapshot in [
        Vec::new(),
        array(&[4]),
        array(&[1, 3, 5, 7, 9]),
        array(&[9, 2, 7, 3, 3, 1]),
    ] {
        for op in array_ops(snapshot.len()) {
            assert_lines_in_listing(&ArrayTracer, &op, &snapshot, &mut seen);
        }
    }

    let single = Matrix::from_rows([[5]]).expect("rectangular");
    let column = Matrix::from_rows([[1], [2], [3]]).expect("rectangular");
    let square = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).expect("rectangular");
    for snapshot in [Matrix::default(), single, column, grid_2x3(), square] {
        for op in matrix_ops() {
            assert_lines_in_listing(&MatrixTracer, &op, &snapshot, &mut seen);
        }
    }

    for kind in [ListKind::Singly, ListKind::Doubly] {
        for snapshot in [
            LinkedList::new(kind),
            list(kind, &["A"]),
            list(kind, &["A", "B", "C", "B"]),
        ] {
            for op in list_ops() {
                assert_lines_in_listing(&ListTracer, &op, &snapshot, &mut seen);
            }
        }
    }

    for snapshot in [Bst::new(), Bst::from_values([50]), seeded_tree()] {
        for op in tree_ops() {
            assert_lines_in_listing(&TreeTracer, &op, &snapshot, &mut seen);
        }
    }

    let stacks = [
        BoundedStack::new(3).expect("positive capacity"),
        BoundedStack::from_values(3, values([1, 2])).expect("fits"),
        BoundedStack::from_values(3, values([1, 2, 3])).expect("fits"),
    ];
    for snapshot in &stacks {
        for op in stack_ops() {
            assert_lines_in_listing(&StackTracer, &op, snapshot, &mut seen);
        }
    }

    let queues = [
        CircularQueue::new(4).expect("positive capacity"),
        CircularQueue::from_values(4, values([1, 2])).expect("fits"),
        CircularQueue::from_values(4, values([1, 2, 3, 4])).expect("fits"),
        wrapped_queue(),
    ];
    for snapshot in &queues {
        for op in queue_ops() {
            assert_lines_in_listing(&QueueTracer, &op, snapshot, &mut seen);
        }
    }

    let missing: Vec<_> = Algorithm::ALL.iter().filter(|a| !seen.contains(a)).collect();
    assert!(missing.is_empty(), "algorithms never generated: {:?}", missing);
}

proptest! {
    #[test]
    fn bubble_sort_lines_stay_in_listing(items in prop::collection::vec(-50i64..50, 0..12)) {
        let mut seen = BTreeSet::new();
        assert_lines_in_listing(&ArrayTracer, &ArrayOp::BubbleSort, &array(&items), &mut seen);
    }

    #[test]
    fn tree_delete_lines_stay_in_listing(
        keys in prop::collection::vec(0i64..40, 0..15),
        target in 0i64..40,
    ) {
        let mut seen = BTreeSet::new();
        let tree = Bst::from_values(keys);
        assert_lines_in_listing(&TreeTracer, &TreeOp::Delete(target), &tree, &mut seen);
        assert_lines_in_listing(&TreeTracer, &TreeOp::Insert(target), &tree, &mut seen);
    }

    #[test]
    fn spiral_lines_stay_in_listing(rows in 1usize..6, cols in 1usize..6) {
        let mut seen = BTreeSet::new();
        let matrix = Matrix::new(rows, cols);
        assert_lines_in_listing(&MatrixTracer, &MatrixOp::Spiral, &matrix, &mut seen);
        assert_lines_in_listing(&MatrixTracer, &MatrixOp::Rotate90, &matrix, &mut seen);
    }
}
