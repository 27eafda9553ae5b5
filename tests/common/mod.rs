#![allow(dead_code)]

use std::time::Duration;

use signum_trace::structure::{values, Bst, LinkedList, ListKind, Matrix, Value};
use signum_trace::{ManualClock, PlaybackConfig, Trace, TraceGenerator, Visualizer};

pub const BASE: Duration = Duration::from_millis(100);

pub fn grid_2x3() -> Matrix {
    Matrix::from_rows([[1, 2, 3], [4, 5, 6]]).expect("rectangular")
}

pub fn seeded_tree() -> Bst {
    Bst::from_values([50, 30, 70, 20, 40, 60, 80])
}

pub fn list(kind: ListKind, items: &[&str]) -> LinkedList {
    LinkedList::from_values(kind, values(items.iter().copied()))
}

pub fn array(items: &[i64]) -> Vec<Value> {
    values(items.iter().copied())
}

/// Visualizer on a hand-driven clock with a 100 ms base interval
pub fn manual<G: TraceGenerator>(
    generator: G,
    snapshot: G::Snapshot,
) -> (Visualizer<G, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = PlaybackConfig::default()
        .with_base_interval(BASE)
        .expect("non-zero interval");
    (
        Visualizer::with_clock(generator, snapshot, config, clock.clone()),
        clock,
    )
}

/// Plain-text rendering of every step, one per line
pub fn render(trace: &Trace) -> String {
    trace.to_string()
}

/// Deliver frames every `frame` until playback stops; returns the
/// number of frames delivered
pub fn play_to_end<G: TraceGenerator>(
    vis: &mut Visualizer<G, ManualClock>,
    clock: &ManualClock,
    frame: Duration,
) -> usize {
    let mut frames = 0;
    vis.play();
    while let Some(token) = vis.engine().pending_frame() {
        clock.advance(frame);
        vis.on_frame(token);
        frames += 1;
        assert!(frames < 100_000, "playback never finished");
    }
    frames
}
