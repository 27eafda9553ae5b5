//! 2-D matrix traces

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{Matrix, SpiralSide, Value};
use crate::trace::{Coordinate, Step, StepKind};

/// Matrix operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixOp {
    /// Read one cell
    Get {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },
    /// Write one cell
    Set {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// New value
        value: Value,
    },
    /// Overwrite every cell
    Fill(Value),
    /// Replace every cell with a seeded random number in `10..100`
    Randomize {
        /// RNG seed
        seed: u64,
    },
    /// Visit rows top to bottom, each left to right
    RowMajor,
    /// Visit columns left to right, each top to bottom
    ColumnMajor,
    /// Clockwise boundary spiral from the top-left corner
    Spiral,
    /// Row-major scan for the first textual match
    Search(Value),
    /// `B[j][i] = A[i][j]`
    Transpose,
    /// Rotate 90° clockwise
    Rotate90,
}

/// Trace generator for the matrix visualization
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixTracer;

impl TraceGenerator for MatrixTracer {
    type Snapshot = Matrix;
    type Operation = MatrixOp;

    fn name(&self) -> &'static str {
        "matrix"
    }

    fn algorithm(&self, operation: &MatrixOp) -> Algorithm {
        match operation {
            MatrixOp::Get { .. } => Algorithm::MatrixGet,
            MatrixOp::Set { .. } => Algorithm::MatrixSet,
            MatrixOp::Fill(_) => Algorithm::MatrixFill,
            MatrixOp::Randomize { .. } => Algorithm::MatrixRandomize,
            MatrixOp::RowMajor => Algorithm::MatrixRowMajor,
            MatrixOp::ColumnMajor => Algorithm::MatrixColumnMajor,
            MatrixOp::Spiral => Algorithm::MatrixSpiral,
            MatrixOp::Search(_) => Algorithm::MatrixSearch,
            MatrixOp::Transpose => Algorithm::MatrixTranspose,
            MatrixOp::Rotate90 => Algorithm::MatrixRotate90,
        }
    }

    fn generate(&self, operation: &MatrixOp, matrix: &Matrix) -> Generated<Matrix> {
        let algorithm = self.algorithm(operation);
        if let Some((value, action)) = value_argument(operation) {
            if value.is_blank() {
                return Generated::missing_value(algorithm, action);
            }
        }
        if matrix.is_empty() {
            return Generated::empty(algorithm, "Matrix", "process");
        }

        match operation {
            MatrixOp::Get { row, col } => get(matrix, *row, *col),
            MatrixOp::Set { row, col, value } => set(matrix, *row, *col, value),
            MatrixOp::Fill(value) => fill(matrix, algorithm, |_| value.clone()),
            MatrixOp::Randomize { seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                fill(matrix, algorithm, |_| Value::from(rng.gen_range(10i64..100)))
            }
            MatrixOp::RowMajor => sweep(matrix, algorithm, true),
            MatrixOp::ColumnMajor => sweep(matrix, algorithm, false),
            MatrixOp::Spiral => spiral(matrix),
            MatrixOp::Search(target) => search(matrix, target),
            MatrixOp::Transpose => transpose(matrix),
            MatrixOp::Rotate90 => rotate(matrix),
        }
    }
}

fn value_argument(operation: &MatrixOp) -> Option<(&Value, &'static str)> {
    match operation {
        MatrixOp::Set { value, .. } => Some((value, "write")),
        MatrixOp::Fill(value) => Some((value, "fill with")),
        MatrixOp::Search(target) => Some((target, "search for")),
        _ => None,
    }
}

fn invalid_cell(
    algorithm: Algorithm,
    matrix: &Matrix,
    row: usize,
    col: usize,
) -> Generated<Matrix> {
    Generated::rejected(
        algorithm,
        Step::new(
            StepKind::InvalidIndex,
            format!(
                "Invalid cell ({}, {}) for a {}x{} matrix",
                row,
                col,
                matrix.rows(),
                matrix.cols()
            ),
        )
        .line(1),
    )
}

fn get(matrix: &Matrix, row: usize, col: usize) -> Generated<Matrix> {
    let Some(value) = matrix.get(row, col) else {
        return invalid_cell(Algorithm::MatrixGet, matrix, row, col);
    };
    let mut rec = Recorder::new(Algorithm::MatrixGet);
    rec.push(
        Step::new(StepKind::Info, format!("A[{}][{}] = {}", row, col, value))
            .cell((row, col))
            .lines([1, 2]),
    );
    Generated::read_only(rec.finish())
}

fn set(matrix: &Matrix, row: usize, col: usize, value: &Value) -> Generated<Matrix> {
    let mut next = matrix.clone();
    if !next.set(row, col, value.clone()) {
        return invalid_cell(Algorithm::MatrixSet, matrix, row, col);
    }
    let mut rec = Recorder::new(Algorithm::MatrixSet);
    rec.push(
        Step::new(StepKind::Info, format!("Locate A[{}][{}]", row, col))
            .cell((row, col))
            .line(1),
    );
    rec.push(
        Step::new(StepKind::Write, format!("A[{}][{}] <- {}", row, col, value))
            .cell((row, col))
            .lines([2, 3]),
    );
    Generated::immediate(rec.finish(), next)
}

fn fill(
    matrix: &Matrix,
    algorithm: Algorithm,
    mut next_value: impl FnMut((usize, usize)) -> Value,
) -> Generated<Matrix> {
    let mut rec = Recorder::new(algorithm);
    let mut next = matrix.clone();
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let value = next_value((i, j));
            rec.push(
                Step::new(StepKind::Write, format!("A[{}][{}] <- {}", i, j, value))
                    .cell((i, j))
                    .lines([1, 2]),
            );
            next.set(i, j, value);
        }
    }
    Generated::on_complete(rec.finish(), next)
}

fn sweep(matrix: &Matrix, algorithm: Algorithm, by_rows: bool) -> Generated<Matrix> {
    let mut rec = Recorder::new(algorithm);
    let (outer, inner) = if by_rows {
        (matrix.rows(), matrix.cols())
    } else {
        (matrix.cols(), matrix.rows())
    };
    for a in 0..outer {
        for b in 0..inner {
            let (i, j) = if by_rows { (a, b) } else { (b, a) };
            let value = matrix.get(i, j).cloned().unwrap_or_default();
            rec.push(
                Step::new(StepKind::Visit, format!("Visit A[{}][{}] = {}", i, j, value))
                    .cell((i, j))
                    .line(2),
            );
        }
    }
    Generated::read_only(rec.finish())
}

fn spiral(matrix: &Matrix) -> Generated<Matrix> {
    let mut rec = Recorder::new(Algorithm::MatrixSpiral);
    for visit in matrix.spiral_walk() {
        let (direction, lines): (&str, &[u16]) = match visit.side {
            SpiralSide::Top => ("top row", &[1, 2]),
            SpiralSide::Right => ("right column", &[3]),
            SpiralSide::Bottom => ("bottom row", &[4]),
            SpiralSide::Left => ("left column", &[5]),
        };
        let value = matrix.get(visit.row, visit.col).cloned().unwrap_or_default();
        rec.push(
            Step::new(
                StepKind::Visit,
                format!("Visit A[{}][{}] = {} ({})", visit.row, visit.col, value, direction),
            )
            .cell((visit.row, visit.col))
            .lines(lines.iter().copied()),
        );
    }
    Generated::read_only(rec.finish())
}

fn search(matrix: &Matrix, target: &Value) -> Generated<Matrix> {
    let mut rec = Recorder::new(Algorithm::MatrixSearch);
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let Some(value) = matrix.get(i, j) else { continue };
            if value.matches(target) {
                rec.push(
                    Step::new(StepKind::Found, format!("Found {} at ({}, {})", target, i, j))
                        .cell((i, j))
                        .line(2),
                );
                return Generated::read_only(rec.finish());
            }
            rec.push(
                Step::new(
                    StepKind::Compare,
                    format!("A[{}][{}] = {} is not {}", i, j, value, target),
                )
                .cell((i, j))
                .lines([1, 3]),
            );
        }
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("{} not found in the matrix", target)).line(4),
    );
    Generated::read_only(rec.finish())
}

fn transpose(matrix: &Matrix) -> Generated<Matrix> {
    let mut rec = Recorder::new(Algorithm::MatrixTranspose);
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let value = matrix.get(i, j).cloned().unwrap_or_default();
            rec.push(
                Step::new(
                    StepKind::Write,
                    format!("B[{}][{}] <- A[{}][{}] = {}", j, i, i, j, value),
                )
                .cell(Coordinate::cell(i, j))
                .line(1),
            );
        }
    }
    let next = matrix.transposed();
    rec.push(
        Step::new(StepKind::Done, format!("Result is {}x{}", next.rows(), next.cols())).line(2),
    );
    Generated::on_complete(rec.finish(), next)
}

fn rotate(matrix: &Matrix) -> Generated<Matrix> {
    let mut rec = Recorder::new(Algorithm::MatrixRotate90);
    let rows = matrix.rows();
    rec.push(
        Step::new(
            StepKind::Info,
            format!("Create B of size {}x{}", matrix.cols(), rows),
        )
        .line(1),
    );
    for i in 0..rows {
        for j in 0..matrix.cols() {
            let value = matrix.get(i, j).cloned().unwrap_or_default();
            rec.push(
                Step::new(
                    StepKind::Write,
                    format!("B[{}][{}] <- A[{}][{}] = {}", j, rows - 1 - i, i, j, value),
                )
                .cell((i, j))
                .line(2),
            );
        }
    }
    Generated::on_complete(rec.finish(), matrix.rotated_clockwise())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Commit;

    fn grid() -> Matrix {
        Matrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap()
    }

    fn cells(out: &Generated<Matrix>) -> Vec<(usize, usize)> {
        out.trace
            .iter()
            .filter_map(|s| s.highlighted_cells.iter().next().and_then(Coordinate::as_cell))
            .collect()
    }

    #[test]
    fn test_spiral_order_and_lines() {
        let out = MatrixTracer.generate(&MatrixOp::Spiral, &grid());
        assert_eq!(cells(&out), vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]);
        assert_eq!(out.trace[3].line_numbers(), vec![3]);
        assert_eq!(out.trace[4].line_numbers(), vec![4]);
    }

    #[test]
    fn test_column_major_order() {
        let out = MatrixTracer.generate(&MatrixOp::ColumnMajor, &grid());
        assert_eq!(cells(&out), vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_set_is_two_steps_and_immediate() {
        let out = MatrixTracer.generate(
            &MatrixOp::Set {
                row: 1,
                col: 2,
                value: Value::from("x"),
            },
            &grid(),
        );
        assert_eq!(out.trace.len(), 2);
        assert_eq!(out.trace[1].line_numbers(), vec![2, 3]);
        let Commit::Immediate(next) = out.commit else {
            panic!("expected immediate commit");
        };
        assert_eq!(next.get(1, 2), Some(&Value::from("x")));
    }

    #[test]
    fn test_search_hit_ends_trace() {
        let out = MatrixTracer.generate(&MatrixOp::Search(Value::from(5)), &grid());
        assert_eq!(out.trace.len(), 5);
        assert_eq!(out.trace.last().unwrap().kind, StepKind::Found);
    }

    #[test]
    fn test_rotate_commits_on_complete() {
        let out = MatrixTracer.generate(&MatrixOp::Rotate90, &grid());
        assert_eq!(out.trace.len(), 7);
        assert_eq!(
            out.commit,
            Commit::OnComplete(Matrix::from_rows([[4, 1], [5, 2], [6, 3]]).unwrap())
        );
    }

    #[test]
    fn test_empty_matrix() {
        let out = MatrixTracer.generate(&MatrixOp::Spiral, &Matrix::default());
        assert_eq!(out.trace.len(), 1);
        assert_eq!(out.trace[0].kind, StepKind::Empty);
    }
}
