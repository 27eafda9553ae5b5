//! 1-D array traces

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Generated, Recorder, TraceGenerator};
use crate::pseudocode::Algorithm;
use crate::structure::{is_sorted, Value};
use crate::trace::{Step, StepKind};

/// Array operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayOp {
    /// Read `A[i]`
    Get(usize),
    /// Write `A[index] = value`
    Set {
        /// Target index
        index: usize,
        /// New value
        value: Value,
    },
    /// Overwrite every element
    Fill(Value),
    /// Replace every element with a seeded random number in `10..100`
    Randomize {
        /// RNG seed
        seed: u64,
    },
    /// Visit every element left to right
    Traverse,
    /// Scan for the first textual match
    LinearSearch(Value),
    /// Halving search over sorted input
    ///
    /// Stops at the first probed match, which among duplicates is not
    /// necessarily the leftmost: searching `[1, 7, 7, 7, 9]` for 7 finds index 2.
    BinarySearch(Value),
    /// Smallest element
    Min,
    /// Largest element
    Max,
    /// Two-pointer in-place reversal
    Reverse,
    /// Bubble sort with early exit
    BubbleSort,
}

/// Trace generator for the array visualization
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTracer;

impl TraceGenerator for ArrayTracer {
    type Snapshot = Vec<Value>;
    type Operation = ArrayOp;

    fn name(&self) -> &'static str {
        "array"
    }

    fn algorithm(&self, operation: &ArrayOp) -> Algorithm {
        match operation {
            ArrayOp::Get(_) => Algorithm::ArrayGet,
            ArrayOp::Set { .. } => Algorithm::ArraySet,
            ArrayOp::Fill(_) => Algorithm::ArrayFill,
            ArrayOp::Randomize { .. } => Algorithm::ArrayRandomize,
            ArrayOp::Traverse => Algorithm::ArrayTraverse,
            ArrayOp::LinearSearch(_) => Algorithm::ArrayLinearSearch,
            ArrayOp::BinarySearch(_) => Algorithm::ArrayBinarySearch,
            ArrayOp::Min => Algorithm::ArrayMin,
            ArrayOp::Max => Algorithm::ArrayMax,
            ArrayOp::Reverse => Algorithm::ArrayReverse,
            ArrayOp::BubbleSort => Algorithm::ArrayBubbleSort,
        }
    }

    fn generate(&self, operation: &ArrayOp, array: &Vec<Value>) -> Generated<Vec<Value>> {
        if let Some((value, action)) = value_argument(operation) {
            if value.is_blank() {
                return Generated::missing_value(self.algorithm(operation), action);
            }
        }
        match operation {
            ArrayOp::Get(index) => get(array, *index),
            ArrayOp::Set { index, value } => set(array, *index, value),
            ArrayOp::Fill(value) => fill(array, value),
            ArrayOp::Randomize { seed } => randomize(array, *seed),
            ArrayOp::Traverse => traverse(array),
            ArrayOp::LinearSearch(target) => linear_search(array, target),
            ArrayOp::BinarySearch(target) => binary_search(array, target),
            ArrayOp::Min => extreme(array, Ordering::Less),
            ArrayOp::Max => extreme(array, Ordering::Greater),
            ArrayOp::Reverse => reverse(array),
            ArrayOp::BubbleSort => bubble_sort(array),
        }
    }
}

fn value_argument(operation: &ArrayOp) -> Option<(&Value, &'static str)> {
    match operation {
        ArrayOp::Set { value, .. } => Some((value, "write")),
        ArrayOp::Fill(value) => Some((value, "fill with")),
        ArrayOp::LinearSearch(target) | ArrayOp::BinarySearch(target) => {
            Some((target, "search for"))
        }
        _ => None,
    }
}

fn invalid_index(algorithm: Algorithm, index: usize, len: usize) -> Generated<Vec<Value>> {
    Generated::rejected(
        algorithm,
        Step::new(
            StepKind::InvalidIndex,
            format!("Invalid index {} (array has {} elements)", index, len),
        )
        .line(1),
    )
}

fn get(array: &[Value], index: usize) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayGet, "Array", "read");
    }
    let Some(value) = array.get(index) else {
        return invalid_index(Algorithm::ArrayGet, index, array.len());
    };
    let mut rec = Recorder::new(Algorithm::ArrayGet);
    rec.push(
        Step::new(StepKind::Info, format!("Accessing A[{}] = {}", index, value))
            .cell(index)
            .lines([1, 2]),
    );
    Generated::read_only(rec.finish())
}

fn set(array: &[Value], index: usize, value: &Value) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArraySet, "Array", "write");
    }
    if index >= array.len() {
        return invalid_index(Algorithm::ArraySet, index, array.len());
    }
    let mut rec = Recorder::new(Algorithm::ArraySet);
    rec.push(
        Step::new(
            StepKind::Write,
            format!("Setting A[{}] = {} (was {})", index, value, array[index]),
        )
        .cell(index)
        .lines([1, 2]),
    );
    let mut next = array.to_vec();
    next[index] = value.clone();
    Generated::immediate(rec.finish(), next)
}

fn fill(array: &[Value], value: &Value) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayFill, "Array", "fill");
    }
    let mut rec = Recorder::new(Algorithm::ArrayFill);
    for i in 0..array.len() {
        rec.push(
            Step::new(StepKind::Write, format!("Fill A[{}] = {}", i, value))
                .cell(i)
                .lines([1, 2]),
        );
    }
    Generated::on_complete(rec.finish(), vec![value.clone(); array.len()])
}

fn randomize(array: &[Value], seed: u64) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayRandomize, "Array", "randomize");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rec = Recorder::new(Algorithm::ArrayRandomize);
    let mut next = Vec::with_capacity(array.len());
    for i in 0..array.len() {
        let value = Value::from(rng.gen_range(10i64..100));
        rec.push(
            Step::new(StepKind::Write, format!("Random A[{}] = {}", i, value))
                .cell(i)
                .lines([1, 2]),
        );
        next.push(value);
    }
    Generated::on_complete(rec.finish(), next)
}

fn traverse(array: &[Value]) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayTraverse, "Array", "traverse");
    }
    let mut rec = Recorder::new(Algorithm::ArrayTraverse);
    for (i, value) in array.iter().enumerate() {
        rec.push(
            Step::new(StepKind::Visit, format!("Visit A[{}] = {}", i, value))
                .cell(i)
                .line(2),
        );
    }
    Generated::read_only(rec.finish())
}

fn linear_search(array: &[Value], target: &Value) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayLinearSearch, "Array", "search");
    }
    let mut rec = Recorder::new(Algorithm::ArrayLinearSearch);
    for (i, value) in array.iter().enumerate() {
        if value.matches(target) {
            rec.push(
                Step::new(StepKind::Found, format!("Found {} at index {}", target, i))
                    .cell(i)
                    .lines([2, 3]),
            );
            return Generated::read_only(rec.finish());
        }
        rec.push(
            Step::new(
                StepKind::Compare,
                format!("Compare A[{}] = {} with {}: no match", i, value, target),
            )
            .cell(i)
            .lines([1, 2]),
        );
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("{} not found in the array", target)).line(4),
    );
    Generated::read_only(rec.finish())
}

fn binary_search(array: &[Value], target: &Value) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayBinarySearch, "Array", "search");
    }
    if !is_sorted(array) {
        return Generated::rejected(
            Algorithm::ArrayBinarySearch,
            Step::new(
                StepKind::Info,
                "Binary search requires a sorted array - sort it first",
            )
            .line(1),
        );
    }

    let mut rec = Recorder::new(Algorithm::ArrayBinarySearch);
    // half-open window [lo, hi)
    let (mut lo, mut hi) = (0usize, array.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probe = &array[mid];
        if probe.matches(target) {
            rec.push(
                Step::new(StepKind::Found, format!("Found {} at index {}", target, mid))
                    .cell(mid)
                    .lines([2, 3]),
            );
            return Generated::read_only(rec.finish());
        }
        if target.compare(probe) == Ordering::Less {
            rec.push(
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Middle A[{}] = {}: {} is smaller, search left half [{}..{})",
                        mid, probe, target, lo, mid
                    ),
                )
                .cell(mid)
                .lines([2, 4]),
            );
            hi = mid;
        } else {
            rec.push(
                Step::new(
                    StepKind::Compare,
                    format!(
                        "Middle A[{}] = {}: {} is larger, search right half [{}..{})",
                        mid,
                        probe,
                        target,
                        mid + 1,
                        hi
                    ),
                )
                .cell(mid)
                .lines([2, 5]),
            );
            lo = mid + 1;
        }
    }
    rec.push(
        Step::new(StepKind::NotFound, format!("{} not found in the array", target)).line(6),
    );
    Generated::read_only(rec.finish())
}

// `wanted` is the ordering a candidate must have against the current best
fn extreme(array: &[Value], wanted: Ordering) -> Generated<Vec<Value>> {
    let (algorithm, label) = if wanted == Ordering::Less {
        (Algorithm::ArrayMin, "minimum")
    } else {
        (Algorithm::ArrayMax, "maximum")
    };
    let Some(first) = array.first() else {
        return Generated::empty(algorithm, "Array", "scan");
    };

    let mut rec = Recorder::new(algorithm);
    rec.push(
        Step::new(StepKind::Info, format!("Start with A[0] = {} as the {}", first, label))
            .cell(0)
            .line(1),
    );
    let mut best = 0;
    for i in 1..array.len() {
        rec.push(
            Step::new(
                StepKind::Compare,
                format!("Compare A[{}] = {} with current {} {}", i, array[i], label, array[best]),
            )
            .cells([i, best])
            .line(2),
        );
        if array[i].compare(&array[best]) == wanted {
            best = i;
            rec.push(
                Step::new(StepKind::Info, format!("New {} at index {}", label, i))
                    .cell(i)
                    .line(3),
            );
        }
    }
    rec.push(
        Step::new(
            StepKind::Done,
            format!("The {} is A[{}] = {}", label, best, array[best]),
        )
        .cell(best)
        .line(4),
    );
    Generated::read_only(rec.finish())
}

fn reverse(array: &[Value]) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayReverse, "Array", "reverse");
    }
    let mut rec = Recorder::new(Algorithm::ArrayReverse);
    let mut work = array.to_vec();
    let n = work.len();
    if n == 1 {
        rec.push(Step::new(StepKind::Done, "Single element - already reversed").cell(0).line(5));
        return Generated::on_complete(rec.finish(), work);
    }

    rec.push(
        Step::new(StepKind::Info, format!("Set l = 0, r = {}", n - 1))
            .cells([0, n - 1])
            .line(1),
    );
    let (mut l, mut r) = (0, n - 1);
    while l < r {
        rec.push(
            Step::new(
                StepKind::Write,
                format!("Swap A[{}] = {} and A[{}] = {}", l, work[l], r, work[r]),
            )
            .cells([l, r])
            .lines([2, 3]),
        );
        work.swap(l, r);
        l += 1;
        r -= 1;
        if l < r {
            rec.push(
                Step::new(StepKind::Info, format!("Move pointers to l = {}, r = {}", l, r))
                    .cells([l, r])
                    .line(4),
            );
        }
    }
    rec.push(Step::new(StepKind::Done, "Array reversed").line(5));
    Generated::on_complete(rec.finish(), work)
}

fn bubble_sort(array: &[Value]) -> Generated<Vec<Value>> {
    if array.is_empty() {
        return Generated::empty(Algorithm::ArrayBubbleSort, "Array", "sort");
    }
    let mut rec = Recorder::new(Algorithm::ArrayBubbleSort);
    let mut work = array.to_vec();
    let n = work.len();
    rec.push(Step::new(StepKind::Info, format!("Bubble sort over {} elements", n)).line(1));

    for pass in 0..n.saturating_sub(1) {
        rec.push(Step::new(StepKind::Info, format!("Pass {}: swapped = false", pass + 1)).line(2));
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            rec.push(
                Step::new(
                    StepKind::Compare,
                    format!("Compare A[{}] = {} with A[{}] = {}", j, work[j], j + 1, work[j + 1]),
                )
                .cells([j, j + 1])
                .line(3),
            );
            if work[j].compare(&work[j + 1]) == Ordering::Greater {
                rec.push(
                    Step::new(
                        StepKind::Write,
                        format!("Swap {} and {}", work[j], work[j + 1]),
                    )
                    .cells([j, j + 1])
                    .line(4),
                );
                work.swap(j, j + 1);
                swapped = true;
            }
        }
        let fixed = n - 1 - pass;
        rec.push(
            Step::new(
                StepKind::Info,
                format!("End of pass {}: index {} is in final position", pass + 1, fixed),
            )
            .cell(fixed)
            .line(5),
        );
        if !swapped {
            rec.push(Step::new(StepKind::Info, "No swaps in this pass - early exit").line(6));
            break;
        }
    }
    rec.push(Step::new(StepKind::Done, "Array sorted"));
    Generated::on_complete(rec.finish(), work)
}
