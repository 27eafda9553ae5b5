//! Frame scheduler
//!
//! Models a display-refresh callback loop: at most one frame is armed
//! at a time, and each armed frame is identified by a token. Stopping
//! or re-arming bumps the generation, so a callback holding an older
//! token can never advance anything.

use std::time::Duration;

/// Identity of one armed frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Single-slot frame scheduler with a last-tick timestamp
#[derive(Debug, Default)]
pub struct FrameScheduler {
    generation: u64,
    pending: Option<FrameToken>,
    last_tick: Option<Duration>,
}

impl FrameScheduler {
    /// Idle scheduler
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self) -> FrameToken {
        self.generation += 1;
        let token = FrameToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// Arm the first frame and restart the tick clock at `now`
    pub fn start(&mut self, now: Duration) -> FrameToken {
        self.last_tick = Some(now);
        self.issue()
    }

    /// Cancel any armed frame
    pub fn stop(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.last_tick = None;
    }

    /// Arm the next frame, keeping the tick clock
    pub fn reschedule(&mut self) -> FrameToken {
        self.issue()
    }

    /// Consume the armed frame if `token` is it; false for stale tokens
    pub fn take(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Currently armed frame
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Whether a frame is armed
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Record an advance at `now`
    pub fn mark_tick(&mut self, now: Duration) {
        self.last_tick = Some(now);
    }

    /// Time since the last advance (zero when idle)
    pub fn elapsed(&self, now: Duration) -> Duration {
        self.last_tick
            .map(|t| now.saturating_sub(t))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_tokens_are_ignored() {
        let mut scheduler = FrameScheduler::new();
        let first = scheduler.start(Duration::ZERO);
        scheduler.stop();
        let second = scheduler.start(Duration::ZERO);
        assert!(!scheduler.take(first));
        assert!(scheduler.take(second));
        // consumed
        assert!(!scheduler.take(second));
    }

    #[test]
    fn test_elapsed_tracks_last_tick() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start(Duration::from_millis(100));
        assert_eq!(scheduler.elapsed(Duration::from_millis(250)), Duration::from_millis(150));
        scheduler.mark_tick(Duration::from_millis(250));
        assert_eq!(scheduler.elapsed(Duration::from_millis(260)), Duration::from_millis(10));
        scheduler.stop();
        assert_eq!(scheduler.elapsed(Duration::from_millis(999)), Duration::ZERO);
        assert!(!scheduler.is_running());
    }
}
