//! # Algorithm-trace animation for data-structure visualizations
//!
//! Every user operation on a visualized structure (array, matrix,
//! linked list, binary search tree, stack, queue) is turned into a
//! complete, immutable [`Trace`] before anything is shown. Each step in
//! the trace carries a message, the structure positions to highlight
//! and the pseudocode lines to highlight. An [`AnimationEngine`] then
//! plays the trace back at an adjustable speed.
//!
//! ## Pieces
//!
//! 1. **Generators** ([`generator`]): pure `(operation, snapshot) -> trace`
//!    functions, one per structure. New state is returned separately as
//!    a [`Commit`] and never written into the snapshot directly.
//! 2. **Engine** ([`engine`]): frame-driven playback with cancel-on-supersede
//!    scheduling and exact speed multipliers.
//! 3. **Visualizer**: owns one snapshot and one engine, and applies a
//!    deferred commit when its trace finishes playing.
//!
//! ## Usage Example
//!
//! ```ignore
//! use signum_trace::{ArrayOp, ArrayTracer, PlaybackConfig, Visualizer, StructureKind};
//! use signum_trace::structure::values;
//!
//! let config = PlaybackConfig::for_structure(StructureKind::Array);
//! let mut vis = Visualizer::new(ArrayTracer, values([5, 3, 8]), config);
//! vis.run(ArrayOp::BubbleSort);
//! while let Some(token) = vis.engine().pending_frame() {
//!     vis.on_frame(token);
//! }
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod engine; // Frame-driven playback
pub mod generator; // Per-structure trace generators
pub mod pseudocode; // Static pseudocode listings
pub mod structure; // Structure snapshots
pub mod trace; // Step / Trace data contract
pub mod view; // Presentation adapter

// Re-exports for convenience
pub use engine::{
    AnimationEngine, Clock, FrameOutcome, FrameToken, ManualClock, MonotonicClock, SpeedMultiplier,
};
pub use generator::{
    ArrayOp, ArrayTracer, Commit, Generated, ListOp, ListTracer, MatrixOp, MatrixTracer, QueueOp,
    QueueTracer, StackOp, StackTracer, TraceGenerator, TreeOp, TreeTracer,
};
pub use pseudocode::{Algorithm, Listing};
pub use structure::StructureKind;
pub use trace::{Coordinate, Step, StepKind, Trace};
pub use view::StepView;

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Playback parameters for one visualization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between steps at 1x
    pub base_interval: Duration,

    /// Initial speed multiplier
    pub speed: SpeedMultiplier,

    /// Start playing as soon as a trace is loaded
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(450),
            speed: SpeedMultiplier::One,
            autoplay: false,
        }
    }
}

impl PlaybackConfig {
    /// Default cadence of each visualization
    pub fn for_structure(kind: StructureKind) -> Self {
        let millis = match kind {
            StructureKind::Array => 450,
            StructureKind::Matrix | StructureKind::Tree => 500,
            StructureKind::SinglyLinkedList | StructureKind::DoublyLinkedList => 400,
            StructureKind::Stack | StructureKind::Queue => 380,
        };
        Self {
            base_interval: Duration::from_millis(millis),
            ..Self::default()
        }
    }

    /// Set the 1x delay; must be non-zero
    pub fn with_base_interval(mut self, base_interval: Duration) -> Result<Self, TraceError> {
        if base_interval.is_zero() {
            return Err(TraceError::InvalidConfiguration(
                "base interval must be > 0".to_string(),
            ));
        }
        self.base_interval = base_interval;
        Ok(self)
    }

    /// Set the initial speed
    pub fn with_speed(mut self, speed: SpeedMultiplier) -> Self {
        self.speed = speed;
        self
    }

    /// Enable autoplay
    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }
}

/// Errors raised while building snapshots and configuration.
///
/// Operations on a structure never fail; rejected input becomes an
/// explanatory step instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    /// Invalid playback or CLI configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Speed multiplier outside {0.5, 1, 2, 4}
    #[error("Unsupported speed multiplier {0} (expected 0.5, 1, 2 or 4)")]
    UnsupportedSpeed(f64),

    /// Matrix rows of differing length
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        /// Offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Bounded structure with zero capacity or more seed values than slots
    #[error("Invalid capacity {0}")]
    InvalidCapacity(usize),
}

/// One visualization: a generator, its snapshot and a playback engine.
///
/// Operations animate against the snapshot as it was when they ran.
/// New state from an operation is applied either right away or when the
/// engine reports that the trace has finished, whichever the generator
/// asked for. Starting another operation before that flushes the
/// pending state first, so no operation is ever lost.
#[derive(Debug)]
pub struct Visualizer<G: TraceGenerator, C: Clock = MonotonicClock> {
    generator: G,
    snapshot: G::Snapshot,
    engine: AnimationEngine<C>,
    pending: Option<G::Snapshot>,
    config: PlaybackConfig,
}

impl<G: TraceGenerator> Visualizer<G, MonotonicClock> {
    /// Create visualizer driven by the wall clock
    pub fn new(generator: G, snapshot: G::Snapshot, config: PlaybackConfig) -> Self {
        Self::with_clock(generator, snapshot, config, MonotonicClock::new())
    }
}

impl<G: TraceGenerator, C: Clock> Visualizer<G, C> {
    /// Create visualizer driven by `clock`
    pub fn with_clock(
        generator: G,
        snapshot: G::Snapshot,
        config: PlaybackConfig,
        clock: C,
    ) -> Self {
        Self {
            engine: AnimationEngine::with_clock(&config, clock),
            generator,
            snapshot,
            pending: None,
            config,
        }
    }

    /// Generate and load the trace for `operation`
    pub fn run(&mut self, operation: G::Operation) -> &Trace {
        if let Some(state) = self.pending.take() {
            debug!(generator = self.generator.name(), "flushing commit of superseded trace");
            self.apply(state);
        }

        let generated = self.generator.generate(&operation, &self.snapshot);
        debug!(
            generator = self.generator.name(),
            ?operation,
            steps = generated.trace.len(),
            "generated trace"
        );
        match generated.commit {
            Commit::None => {}
            Commit::Immediate(state) => self.apply(state),
            Commit::OnComplete(state) => self.pending = Some(state),
        }

        self.engine.load(generated.trace);
        self.settle();
        if self.config.autoplay {
            self.engine.play();
        }
        self.engine.trace()
    }

    fn apply(&mut self, state: G::Snapshot) {
        debug!(generator = self.generator.name(), "committed new snapshot");
        self.snapshot = state;
    }

    // Apply the deferred commit once the engine reports completion.
    fn settle(&mut self) {
        if self.engine.take_completion() {
            if let Some(state) = self.pending.take() {
                self.apply(state);
            }
        }
    }

    /// Replace the snapshot (seed, clear); drops any pending commit
    pub fn replace_snapshot(&mut self, snapshot: G::Snapshot) {
        self.pending = None;
        self.snapshot = snapshot;
        self.engine.load(Trace::empty());
    }

    /// Start playback
    pub fn play(&mut self) -> Option<FrameToken> {
        self.engine.play()
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Toggle playback
    pub fn toggle(&mut self) -> Option<FrameToken> {
        self.engine.toggle()
    }

    /// Deliver a frame callback
    pub fn on_frame(&mut self, token: FrameToken) -> FrameOutcome {
        let outcome = self.engine.on_frame(token);
        self.settle();
        outcome
    }

    /// Step forward
    pub fn next_step(&mut self) {
        self.engine.next_step();
        self.settle();
    }

    /// Step back
    pub fn prev_step(&mut self) {
        self.engine.prev_step();
    }

    /// Jump to a step (clamped)
    pub fn go_to_step(&mut self, index: usize) {
        self.engine.go_to_step(index);
        self.settle();
    }

    /// Back to the first step, paused
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Change speed
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.engine.set_speed(speed);
    }

    /// Change speed from a raw factor
    pub fn set_speed_multiplier(&mut self, factor: f64) -> Result<(), TraceError> {
        self.engine.set_speed_multiplier(factor)
    }

    /// Committed structure state
    pub fn snapshot(&self) -> &G::Snapshot {
        &self.snapshot
    }

    /// State waiting for the current trace to finish
    pub fn pending_commit(&self) -> Option<&G::Snapshot> {
        self.pending.as_ref()
    }

    /// Trace currently loaded
    pub fn trace(&self) -> &Trace {
        self.engine.trace()
    }

    /// Playback engine
    pub fn engine(&self) -> &AnimationEngine<C> {
        &self.engine
    }

    /// Renderer view of the active step
    pub fn view(&self) -> Option<StepView> {
        StepView::of(&self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{values, BoundedStack, Value};

    fn stack_visualizer(items: &[&str]) -> Visualizer<StackTracer, ManualClock> {
        let stack = BoundedStack::from_values(4, values(items.iter().copied())).unwrap();
        Visualizer::with_clock(StackTracer, stack, PlaybackConfig::default(), ManualClock::new())
    }

    #[test]
    fn test_default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.base_interval, Duration::from_millis(450));
        assert_eq!(config.speed, SpeedMultiplier::One);
        assert!(!config.autoplay);
    }

    #[test]
    fn test_per_structure_intervals() {
        let ms = |k| PlaybackConfig::for_structure(k).base_interval.as_millis();
        assert_eq!(ms(StructureKind::Matrix), 500);
        assert_eq!(ms(StructureKind::DoublyLinkedList), 400);
        assert_eq!(ms(StructureKind::Queue), 380);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = PlaybackConfig::default().with_base_interval(Duration::ZERO).unwrap_err();
        assert!(matches!(err, TraceError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_commit_waits_for_completion() {
        let mut vis = stack_visualizer(&["A"]);
        vis.run(StackOp::Push(Value::from("B")));
        assert_eq!(vis.snapshot().len(), 1);
        assert!(vis.pending_commit().is_some());

        vis.go_to_step(usize::MAX);
        assert_eq!(vis.snapshot().items(), &values(["A", "B"])[..]);
        assert!(vis.pending_commit().is_none());
    }

    #[test]
    fn test_superseding_run_flushes_pending_commit() {
        let mut vis = stack_visualizer(&["A"]);
        vis.run(StackOp::Push(Value::from("B")));
        vis.run(StackOp::Push(Value::from("C")));
        // second push animated against the first push's result
        assert_eq!(vis.pending_commit().unwrap().items(), &values(["A", "B", "C"])[..]);
    }

    #[test]
    fn test_replace_snapshot_drops_pending() {
        let mut vis = stack_visualizer(&["A"]);
        vis.run(StackOp::Pop);
        vis.replace_snapshot(BoundedStack::new(2).unwrap());
        assert!(vis.pending_commit().is_none());
        assert!(vis.trace().is_empty());
        assert!(vis.snapshot().is_empty());
    }
}
