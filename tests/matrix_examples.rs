mod common;

use signum_trace::structure::{Matrix, Value};
use signum_trace::{Commit, MatrixOp, MatrixTracer, StepKind, TraceGenerator};
use test_case::test_case;

fn visited_values(matrix: &Matrix, op: MatrixOp) -> Vec<String> {
    let out = MatrixTracer.generate(&op, matrix);
    out.trace
        .iter()
        .filter(|s| s.kind == StepKind::Visit)
        .filter_map(|s| s.highlighted_cells.iter().next().and_then(|c| c.as_cell()))
        .filter_map(|(r, c)| matrix.get(r, c).map(|v| v.as_str().to_string()))
        .collect()
}

#[test]
fn spiral_of_2x3_matches_reference_order() {
    let order = visited_values(&common::grid_2x3(), MatrixOp::Spiral);
    assert_eq!(order, vec!["1", "2", "3", "6", "5", "4"]);
}

#[test]
fn transpose_of_2x3() {
    let out = MatrixTracer.generate(&MatrixOp::Transpose, &common::grid_2x3());
    assert_eq!(
        out.commit,
        Commit::OnComplete(Matrix::from_rows([[1, 4], [2, 5], [3, 6]]).unwrap())
    );
}

#[test]
fn rotate_of_2x3() {
    let out = MatrixTracer.generate(&MatrixOp::Rotate90, &common::grid_2x3());
    assert_eq!(
        out.commit.into_state(),
        Some(Matrix::from_rows([[4, 1], [5, 2], [6, 3]]).unwrap())
    );
}

#[test_case(1, 1, &["1"] ; "single cell")]
#[test_case(1, 4, &["1", "2", "3", "4"] ; "single row")]
#[test_case(4, 1, &["1", "2", "3", "4"] ; "single column")]
#[test_case(3, 3, &["1", "2", "3", "6", "9", "8", "7", "4", "5"] ; "square")]
#[test_case(3, 4, &["1", "2", "3", "4", "8", "12", "11", "10", "9", "5", "6", "7"] ; "wide")]
fn spiral_shapes(rows: usize, cols: usize, expected: &[&str]) {
    let numbered =
        (0..rows).map(|r| (0..cols).map(move |c| Value::from((r * cols + c + 1) as i64)));
    let matrix = Matrix::from_rows(numbered).unwrap();
    assert_eq!(visited_values(&matrix, MatrixOp::Spiral), expected);
}

#[test]
fn row_and_column_major_cover_every_cell_once() {
    let matrix = common::grid_2x3();
    let rows = visited_values(&matrix, MatrixOp::RowMajor);
    let cols = visited_values(&matrix, MatrixOp::ColumnMajor);
    assert_eq!(rows, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(cols, vec!["1", "4", "2", "5", "3", "6"]);
}

#[test]
fn out_of_range_set_leaves_matrix_alone() {
    let out = MatrixTracer.generate(
        &MatrixOp::Set {
            row: 2,
            col: 0,
            value: Value::from("x"),
        },
        &common::grid_2x3(),
    );
    assert_eq!(out.trace.len(), 1);
    assert_eq!(out.trace[0].kind, StepKind::InvalidIndex);
    assert!(out.commit.is_none());
}
