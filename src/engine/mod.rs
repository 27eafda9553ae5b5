//! Animation engine
//!
//! Plays back any [`Trace`] one step at a time. The engine knows
//! nothing about what a trace represents; it only tracks the active
//! step index, whether playback is running and how fast.
//!
//! Scheduling is frame driven: the host calls [`AnimationEngine::on_frame`]
//! once per display refresh with the token it was handed, and the
//! engine advances at most one step when enough time has passed since
//! the previous advance. Loading a new trace cancels the armed frame,
//! so a late callback for the old trace is reported as stale.

mod clock;
mod scheduler;
mod speed;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scheduler::{FrameScheduler, FrameToken};
pub use speed::SpeedMultiplier;

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::trace::{Step, Trace};
use crate::{PlaybackConfig, TraceError};

/// Result of delivering one frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Token was not the armed frame (superseded or paused); nothing happened
    Stale,
    /// Not enough time has passed; the next frame is armed
    Waiting {
        /// Token for the next callback
        next: FrameToken,
    },
    /// Advanced one step; the next frame is armed
    Advanced {
        /// New active step
        step: usize,
        /// Token for the next callback
        next: FrameToken,
    },
    /// Reached the final step; playback stopped
    Finished {
        /// Final step index
        step: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Pending,
    Reached,
    Reported,
}

/// Step-by-step playback of a trace
#[derive(Debug)]
pub struct AnimationEngine<C: Clock = MonotonicClock> {
    trace: Trace,
    step: usize,
    playing: bool,
    speed: SpeedMultiplier,
    base_interval: Duration,
    scheduler: FrameScheduler,
    clock: C,
    completion: Completion,
}

impl AnimationEngine<MonotonicClock> {
    /// Create engine driven by the wall clock
    pub fn new(config: &PlaybackConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> AnimationEngine<C> {
    /// Create engine driven by `clock`
    pub fn with_clock(config: &PlaybackConfig, clock: C) -> Self {
        Self {
            trace: Trace::empty(),
            step: 0,
            playing: false,
            speed: config.speed,
            base_interval: config.base_interval,
            scheduler: FrameScheduler::new(),
            clock,
            completion: Completion::Pending,
        }
    }

    /// Install a new trace: step 0, paused, any armed frame cancelled
    pub fn load(&mut self, trace: Trace) {
        self.scheduler.stop();
        self.trace = trace;
        self.step = 0;
        self.playing = false;
        self.completion = Completion::Pending;
        debug!(
            algorithm = ?self.trace.algorithm(),
            steps = self.trace.len(),
            "trace loaded"
        );
        self.note_position();
    }

    /// Back to step 0, paused
    pub fn reset(&mut self) {
        self.pause();
        self.step = 0;
    }

    /// Start playback; returns the first frame token.
    ///
    /// No-op (returns `None`) on an empty trace, at the last step, or
    /// when already playing.
    pub fn play(&mut self) -> Option<FrameToken> {
        if self.playing || self.trace.is_empty() || self.is_at_end() {
            return None;
        }
        self.playing = true;
        Some(self.scheduler.start(self.clock.now()))
    }

    /// Stop playback
    pub fn pause(&mut self) {
        self.playing = false;
        self.scheduler.stop();
    }

    /// Play when paused, pause when playing
    pub fn toggle(&mut self) -> Option<FrameToken> {
        if self.playing {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// Deliver a frame callback
    pub fn on_frame(&mut self, token: FrameToken) -> FrameOutcome {
        if !self.scheduler.take(token) || !self.playing {
            return FrameOutcome::Stale;
        }
        if self.is_at_end() {
            self.pause();
            return FrameOutcome::Finished { step: self.step };
        }

        let now = self.clock.now();
        if self.scheduler.elapsed(now) < self.interval() {
            return FrameOutcome::Waiting {
                next: self.scheduler.reschedule(),
            };
        }

        self.step += 1;
        self.scheduler.mark_tick(now);
        trace!(step = self.step, of = self.trace.len(), "advanced");
        self.note_position();

        if self.is_at_end() {
            self.pause();
            FrameOutcome::Finished { step: self.step }
        } else {
            FrameOutcome::Advanced {
                step: self.step,
                next: self.scheduler.reschedule(),
            }
        }
    }

    /// Step forward once (clamped); playback state is untouched
    pub fn next_step(&mut self) {
        if let Some(last) = self.trace.last_index() {
            self.step = (self.step + 1).min(last);
            self.note_position();
        }
    }

    /// Step back once (clamped); playback state is untouched
    pub fn prev_step(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Jump to `index`, clamped to the trace
    pub fn go_to_step(&mut self, index: usize) {
        if let Some(last) = self.trace.last_index() {
            self.step = index.min(last);
            self.note_position();
        }
    }

    /// Change speed; takes effect on the next frame
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        debug!(%speed, "speed changed");
        self.speed = speed;
    }

    /// Change speed from a raw factor; only 0.5, 1, 2 and 4 are accepted
    pub fn set_speed_multiplier(&mut self, factor: f64) -> Result<(), TraceError> {
        match SpeedMultiplier::try_from(factor) {
            Ok(speed) => {
                self.set_speed(speed);
                Ok(())
            }
            Err(e) => {
                warn!(factor, "rejected unsupported speed multiplier");
                Err(e)
            }
        }
    }

    /// True once per trace, the first time this is asked after the
    /// final step became active
    pub fn take_completion(&mut self) -> bool {
        if self.completion == Completion::Reached {
            self.completion = Completion::Reported;
            true
        } else {
            false
        }
    }

    fn note_position(&mut self) {
        if self.completion == Completion::Pending && self.is_at_end() {
            self.completion = Completion::Reached;
        }
    }

    /// Loaded trace
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Active step index
    pub fn step(&self) -> usize {
        self.step
    }

    /// Active step, if the trace is not empty
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.step)
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the final step is active (false for an empty trace)
    pub fn is_at_end(&self) -> bool {
        self.trace.last_index() == Some(self.step)
    }

    /// Current speed
    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    /// Base delay at 1x
    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    /// Delay between advances at the current speed
    pub fn interval(&self) -> Duration {
        self.speed.interval(self.base_interval)
    }

    /// Armed frame the host should deliver next
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.scheduler.pending()
    }

    /// Clock driving this engine
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
