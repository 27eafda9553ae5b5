use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use signum_trace::structure::{
    Bst, BoundedStack, CircularQueue, LinkedList, ListKind, Matrix, StructureKind, Value,
};
use signum_trace::{
    ArrayOp, ArrayTracer, FrameOutcome, ListOp, ListTracer, MatrixOp, MatrixTracer, PlaybackConfig,
    QueueOp, QueueTracer, SpeedMultiplier, StackOp, StackTracer, TraceGenerator, TreeOp,
    TreeTracer, Visualizer,
};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(
    name = "signum-trace",
    about = "Step-by-step algorithm traces for data-structure operations"
)]
struct Cli {
    /// Playback speed multiplier (0.5, 1, 2 or 4).
    #[arg(long, global = true, default_value = "1")]
    speed: SpeedMultiplier,
    /// Base delay between steps in milliseconds (default depends on the structure).
    #[arg(long, global = true)]
    base_ms: Option<u64>,
    /// Animate the trace in real time instead of printing it at once.
    #[arg(long, global = true)]
    play: bool,
    /// Debug logging (otherwise RUST_LOG, default warn).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 1-D array operations.
    Array(ArrayArgs),
    /// 2-D matrix operations.
    Matrix(MatrixArgs),
    /// Singly or doubly linked list operations.
    List(ListArgs),
    /// Binary search tree operations.
    Tree(TreeArgs),
    /// Bounded stack operations.
    Stack(StackArgs),
    /// Circular queue operations.
    Queue(QueueArgs),
}

#[derive(Args, Debug)]
struct ArrayArgs {
    /// Comma-separated elements.
    #[arg(long, value_delimiter = ',', default_value = "12,45,7,23,56,89,34")]
    values: Vec<String>,
    #[command(subcommand)]
    op: ArrayCmd,
}

#[derive(Subcommand, Debug)]
enum ArrayCmd {
    /// Read A[index].
    Get { index: usize },
    /// Write A[index] = value.
    Set { index: usize, value: String },
    /// Overwrite every element.
    Fill { value: String },
    /// Random values in 10..100.
    Randomize {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Visit every element.
    Traverse,
    /// Scan left to right.
    LinearSearch { value: String },
    /// Halving search (input must be sorted).
    BinarySearch { value: String },
    /// Smallest element.
    Min,
    /// Largest element.
    Max,
    /// Reverse in place.
    Reverse,
    /// Bubble sort.
    BubbleSort,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    /// Rows separated by ';', cells by ','.
    #[arg(long, default_value = "1,2,3;4,5,6;7,8,9")]
    rows: String,
    #[command(subcommand)]
    op: MatrixCmd,
}

#[derive(Subcommand, Debug)]
enum MatrixCmd {
    /// Read A[row][col].
    Get { row: usize, col: usize },
    /// Write A[row][col] = value.
    Set { row: usize, col: usize, value: String },
    /// Overwrite every cell.
    Fill { value: String },
    /// Random values in 10..100.
    Randomize {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Row by row.
    RowMajor,
    /// Column by column.
    ColumnMajor,
    /// Clockwise spiral.
    Spiral,
    /// Row-major search.
    Search { value: String },
    /// Transpose.
    Transpose,
    /// Rotate 90° clockwise.
    Rotate90,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Comma-separated node values, head first.
    #[arg(long, value_delimiter = ',', default_value = "A,B,C")]
    values: Vec<String>,
    /// Doubly linked (prev pointers).
    #[arg(long)]
    doubly: bool,
    #[command(subcommand)]
    op: ListCmd,
}

#[derive(Subcommand, Debug)]
enum ListCmd {
    /// Insert at head.
    InsertHead { value: String },
    /// Insert at tail.
    InsertTail { value: String },
    /// Insert after node `index`.
    InsertAfter { index: usize, value: String },
    /// Insert before node `index`.
    InsertBefore { index: usize, value: String },
    /// Delete the head.
    DeleteHead,
    /// Delete the tail.
    DeleteTail,
    /// Delete node `index`.
    DeleteAt { index: usize },
    /// Delete first node holding `value`.
    DeleteValue { value: String },
    /// Search from head.
    Search { value: String },
    /// Visit head to tail.
    Forward,
    /// Visit tail to head.
    Backward,
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Keys inserted in order.
    #[arg(long, value_delimiter = ',', default_value = "50,30,70,20,40,60,80")]
    values: Vec<i64>,
    #[command(subcommand)]
    op: TreeCmd,
}

#[derive(Subcommand, Debug)]
enum TreeCmd {
    /// Insert a key.
    Insert { value: i64 },
    /// Search for a key.
    Search { value: i64 },
    /// Delete a key.
    Delete { value: i64 },
    /// In-order traversal.
    InOrder,
    /// Pre-order traversal.
    PreOrder,
    /// Post-order traversal.
    PostOrder,
    /// Level-order traversal.
    LevelOrder,
    /// Minimum key.
    Min,
    /// Maximum key.
    Max,
}

#[derive(Args, Debug)]
struct StackArgs {
    /// Maximum number of items.
    #[arg(long, default_value_t = 8)]
    capacity: usize,
    /// Comma-separated items, bottom first.
    #[arg(long, value_delimiter = ',')]
    values: Vec<String>,
    #[command(subcommand)]
    op: StackCmd,
}

#[derive(Subcommand, Debug)]
enum StackCmd {
    /// Push a value.
    Push { value: String },
    /// Pop the top.
    Pop,
    /// Read the top.
    Peek,
    /// Is the stack empty?
    IsEmpty,
    /// Is the stack full?
    IsFull,
}

#[derive(Args, Debug)]
struct QueueArgs {
    /// Number of ring slots.
    #[arg(long, default_value_t = 8)]
    capacity: usize,
    /// Comma-separated items, front first.
    #[arg(long, value_delimiter = ',')]
    values: Vec<String>,
    #[command(subcommand)]
    op: QueueCmd,
}

#[derive(Subcommand, Debug)]
enum QueueCmd {
    /// Enqueue at the rear.
    Enqueue { value: String },
    /// Dequeue from the front.
    Dequeue,
    /// Read the front.
    Front,
    /// Is the queue empty?
    IsEmpty,
    /// Is the queue full?
    IsFull,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let playback = Playback {
        speed: cli.speed,
        base_ms: cli.base_ms,
        play: cli.play,
    };

    match cli.command {
        Commands::Array(args) => {
            let snapshot = to_values(&args.values);
            let op = array_op(args.op);
            run(ArrayTracer, snapshot, op, StructureKind::Array, &playback, |a| {
                let items: Vec<&str> = a.iter().map(Value::as_str).collect();
                format!("[{}]\n", items.join(", "))
            })?
        }
        Commands::Matrix(args) => {
            let snapshot = parse_matrix(&args.rows)?;
            let op = matrix_op(args.op);
            run(MatrixTracer, snapshot, op, StructureKind::Matrix, &playback, |m| m.to_string())?
        }
        Commands::List(args) => {
            let (kind, structure) = if args.doubly {
                (ListKind::Doubly, StructureKind::DoublyLinkedList)
            } else {
                (ListKind::Singly, StructureKind::SinglyLinkedList)
            };
            let snapshot = LinkedList::from_values(kind, to_values(&args.values));
            let op = list_op(args.op);
            run(ListTracer, snapshot, op, structure, &playback, |l| l.to_string())?
        }
        Commands::Tree(args) => {
            let snapshot = Bst::from_values(args.values.iter().copied());
            let op = tree_op(args.op);
            run(TreeTracer, snapshot, op, StructureKind::Tree, &playback, |t| t.to_string())?
        }
        Commands::Stack(args) => {
            let snapshot = BoundedStack::from_values(args.capacity, to_values(&args.values))
                .context("failed to build stack")?;
            let op = stack_op(args.op);
            run(StackTracer, snapshot, op, StructureKind::Stack, &playback, |s| s.to_string())?
        }
        Commands::Queue(args) => {
            let snapshot = CircularQueue::from_values(args.capacity, to_values(&args.values))
                .context("failed to build queue")?;
            let op = queue_op(args.op);
            run(QueueTracer, snapshot, op, StructureKind::Queue, &playback, |q| q.to_string())?
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Playback {
    speed: SpeedMultiplier,
    base_ms: Option<u64>,
    play: bool,
}

fn run<G, F>(
    generator: G,
    snapshot: G::Snapshot,
    op: G::Operation,
    kind: StructureKind,
    playback: &Playback,
    render: F,
) -> Result<()>
where
    G: TraceGenerator,
    F: Fn(&G::Snapshot) -> String,
{
    let mut config = PlaybackConfig::for_structure(kind).with_speed(playback.speed);
    if let Some(ms) = playback.base_ms {
        config = config
            .with_base_interval(Duration::from_millis(ms))
            .context("invalid --base-ms")?;
    }

    print!("before:\n{}", render(&snapshot));
    let mut vis = Visualizer::new(generator, snapshot, config);
    let trace = vis.run(op).clone();

    if let Some(algorithm) = trace.algorithm() {
        println!();
        print!("{}", algorithm.listing().render(&BTreeSet::new()));
    }
    println!();

    let total = trace.len();
    let print_step = |i: usize| {
        if let Some(step) = trace.get(i) {
            println!("{:>3}/{}  {}", i + 1, total, step);
        }
    };

    if playback.play {
        print_step(0);
        vis.play();
        while let Some(token) = vis.engine().pending_frame() {
            thread::sleep(FRAME);
            match vis.on_frame(token) {
                FrameOutcome::Advanced { step, .. } | FrameOutcome::Finished { step } => {
                    print_step(step)
                }
                FrameOutcome::Waiting { .. } | FrameOutcome::Stale => {}
            }
        }
    } else {
        (0..total).for_each(print_step);
        vis.go_to_step(usize::MAX);
    }

    print!("\nafter:\n{}", render(vis.snapshot()));
    Ok(())
}

fn to_values(items: &[String]) -> Vec<Value> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(Value::from)
        .collect()
}

fn parse_matrix(text: &str) -> Result<Matrix> {
    let rows: Vec<Vec<Value>> = text
        .split(';')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| r.split(',').map(|c| Value::from(c.trim())).collect())
        .collect();
    Matrix::from_rows(rows).context("failed to parse --rows")
}

fn array_op(cmd: ArrayCmd) -> ArrayOp {
    match cmd {
        ArrayCmd::Get { index } => ArrayOp::Get(index),
        ArrayCmd::Set { index, value } => ArrayOp::Set {
            index,
            value: Value::from(value),
        },
        ArrayCmd::Fill { value } => ArrayOp::Fill(Value::from(value)),
        ArrayCmd::Randomize { seed } => ArrayOp::Randomize { seed },
        ArrayCmd::Traverse => ArrayOp::Traverse,
        ArrayCmd::LinearSearch { value } => ArrayOp::LinearSearch(Value::from(value)),
        ArrayCmd::BinarySearch { value } => ArrayOp::BinarySearch(Value::from(value)),
        ArrayCmd::Min => ArrayOp::Min,
        ArrayCmd::Max => ArrayOp::Max,
        ArrayCmd::Reverse => ArrayOp::Reverse,
        ArrayCmd::BubbleSort => ArrayOp::BubbleSort,
    }
}

fn matrix_op(cmd: MatrixCmd) -> MatrixOp {
    match cmd {
        MatrixCmd::Get { row, col } => MatrixOp::Get { row, col },
        MatrixCmd::Set { row, col, value } => MatrixOp::Set {
            row,
            col,
            value: Value::from(value),
        },
        MatrixCmd::Fill { value } => MatrixOp::Fill(Value::from(value)),
        MatrixCmd::Randomize { seed } => MatrixOp::Randomize { seed },
        MatrixCmd::RowMajor => MatrixOp::RowMajor,
        MatrixCmd::ColumnMajor => MatrixOp::ColumnMajor,
        MatrixCmd::Spiral => MatrixOp::Spiral,
        MatrixCmd::Search { value } => MatrixOp::Search(Value::from(value)),
        MatrixCmd::Transpose => MatrixOp::Transpose,
        MatrixCmd::Rotate90 => MatrixOp::Rotate90,
    }
}

fn list_op(cmd: ListCmd) -> ListOp {
    match cmd {
        ListCmd::InsertHead { value } => ListOp::InsertHead(Value::from(value)),
        ListCmd::InsertTail { value } => ListOp::InsertTail(Value::from(value)),
        ListCmd::InsertAfter { index, value } => ListOp::InsertAfter {
            index,
            value: Value::from(value),
        },
        ListCmd::InsertBefore { index, value } => ListOp::InsertBefore {
            index,
            value: Value::from(value),
        },
        ListCmd::DeleteHead => ListOp::DeleteHead,
        ListCmd::DeleteTail => ListOp::DeleteTail,
        ListCmd::DeleteAt { index } => ListOp::DeleteAt(index),
        ListCmd::DeleteValue { value } => ListOp::DeleteValue(Value::from(value)),
        ListCmd::Search { value } => ListOp::Search(Value::from(value)),
        ListCmd::Forward => ListOp::TraverseForward,
        ListCmd::Backward => ListOp::TraverseBackward,
    }
}

fn tree_op(cmd: TreeCmd) -> TreeOp {
    match cmd {
        TreeCmd::Insert { value } => TreeOp::Insert(value),
        TreeCmd::Search { value } => TreeOp::Search(value),
        TreeCmd::Delete { value } => TreeOp::Delete(value),
        TreeCmd::InOrder => TreeOp::InOrder,
        TreeCmd::PreOrder => TreeOp::PreOrder,
        TreeCmd::PostOrder => TreeOp::PostOrder,
        TreeCmd::LevelOrder => TreeOp::LevelOrder,
        TreeCmd::Min => TreeOp::Min,
        TreeCmd::Max => TreeOp::Max,
    }
}

fn stack_op(cmd: StackCmd) -> StackOp {
    match cmd {
        StackCmd::Push { value } => StackOp::Push(Value::from(value)),
        StackCmd::Pop => StackOp::Pop,
        StackCmd::Peek => StackOp::Peek,
        StackCmd::IsEmpty => StackOp::IsEmpty,
        StackCmd::IsFull => StackOp::IsFull,
    }
}

fn queue_op(cmd: QueueCmd) -> QueueOp {
    match cmd {
        QueueCmd::Enqueue { value } => QueueOp::Enqueue(Value::from(value)),
        QueueCmd::Dequeue => QueueOp::Dequeue,
        QueueCmd::Front => QueueOp::Front,
        QueueCmd::IsEmpty => QueueOp::IsEmpty,
        QueueCmd::IsFull => QueueOp::IsFull,
    }
}
