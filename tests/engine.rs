mod common;

use std::time::Duration;

use signum_trace::{
    Algorithm, AnimationEngine, Clock, FrameOutcome, ManualClock, PlaybackConfig,
    SpeedMultiplier, Step, StepKind, Trace, TraceError,
};
use test_case::test_case;

fn trace(n: usize) -> Trace {
    let steps = (0..n)
        .map(|i| Step::new(StepKind::Visit, format!("visit {}", i)).cell(i))
        .collect();
    Trace::new(Algorithm::ArrayTraverse, steps)
}

fn engine() -> (AnimationEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = PlaybackConfig::default()
        .with_base_interval(common::BASE)
        .expect("non-zero interval");
    (AnimationEngine::with_clock(&config, clock.clone()), clock)
}

/// Times (relative to play) at which each step became active
fn advance_times(engine: &mut AnimationEngine<ManualClock>, clock: &ManualClock) -> Vec<Duration> {
    let frame = Duration::from_millis(5);
    let start = clock.now();
    let mut times = Vec::new();
    let mut token = engine.play();
    while let Some(t) = token {
        clock.advance(frame);
        token = match engine.on_frame(t) {
            FrameOutcome::Advanced { next, .. } => {
                times.push(clock.now() - start);
                Some(next)
            }
            FrameOutcome::Finished { .. } => {
                times.push(clock.now() - start);
                None
            }
            FrameOutcome::Waiting { next } => Some(next),
            FrameOutcome::Stale => None,
        };
    }
    times
}

#[test_case(SpeedMultiplier::Half, 200 ; "half speed")]
#[test_case(SpeedMultiplier::One, 100 ; "normal speed")]
#[test_case(SpeedMultiplier::Two, 50 ; "double speed")]
#[test_case(SpeedMultiplier::Four, 25 ; "quadruple speed")]
fn cadence_is_base_over_multiplier(speed: SpeedMultiplier, millis: u64) {
    let (mut engine, clock) = engine();
    engine.set_speed(speed);
    engine.load(trace(5));

    let times = advance_times(&mut engine, &clock);
    let expected: Vec<_> = (1..5).map(|k| Duration::from_millis(millis * k)).collect();
    assert_eq!(times, expected);
    assert!(engine.is_at_end());
    assert!(!engine.is_playing());
}

#[test]
fn speed_change_applies_to_next_advance() {
    let (mut engine, clock) = engine();
    engine.load(trace(4));
    let token = engine.play().unwrap();

    clock.advance(Duration::from_millis(100));
    let next = match engine.on_frame(token) {
        FrameOutcome::Advanced { step: 1, next } => next,
        other => panic!("expected advance to step 1, got {:?}", other),
    };

    engine.set_speed(SpeedMultiplier::Four);
    clock.advance(Duration::from_millis(25));
    assert!(matches!(
        engine.on_frame(next),
        FrameOutcome::Advanced { step: 2, .. }
    ));
}

#[test_case(0.25 ; "below range")]
#[test_case(3.0 ; "between values")]
#[test_case(8.0 ; "above range")]
fn unsupported_speeds_are_rejected(factor: f64) {
    let (mut engine, _) = engine();
    let err = engine.set_speed_multiplier(factor).unwrap_err();
    assert_eq!(err, TraceError::UnsupportedSpeed(factor));
    assert_eq!(engine.speed(), SpeedMultiplier::One);
}

#[test]
fn loading_mid_playback_resets_and_cancels() {
    let (mut engine, clock) = engine();
    engine.load(trace(6));
    let mut token = engine.play().unwrap();
    for _ in 0..3 {
        clock.advance(common::BASE);
        token = match engine.on_frame(token) {
            FrameOutcome::Advanced { next, .. } => next,
            other => panic!("unexpected {:?}", other),
        };
    }
    assert_eq!(engine.step(), 3);

    engine.load(trace(2));
    assert_eq!(engine.step(), 0);
    assert!(!engine.is_playing());
    assert_eq!(engine.pending_frame(), None);

    // the old trace's callback fires late and must not touch the new one
    clock.advance(common::BASE * 10);
    assert_eq!(engine.on_frame(token), FrameOutcome::Stale);
    assert_eq!(engine.step(), 0);
}

#[test]
fn paused_callback_is_stale() {
    let (mut engine, clock) = engine();
    engine.load(trace(3));
    let token = engine.play().unwrap();
    engine.pause();
    clock.advance(common::BASE);
    assert_eq!(engine.on_frame(token), FrameOutcome::Stale);
    assert_eq!(engine.step(), 0);
}

#[test]
fn long_stall_advances_one_step() {
    let (mut engine, clock) = engine();
    engine.load(trace(10));
    let token = engine.play().unwrap();
    clock.advance(Duration::from_secs(60));
    assert!(matches!(
        engine.on_frame(token),
        FrameOutcome::Advanced { step: 1, .. }
    ));
}

#[test]
fn navigation_clamps_to_trace() {
    let (mut engine, _) = engine();
    engine.load(trace(4));

    engine.prev_step();
    assert_eq!(engine.step(), 0);

    engine.go_to_step(99);
    assert_eq!(engine.step(), 3);

    engine.next_step();
    assert_eq!(engine.step(), 3);

    engine.go_to_step(1);
    engine.prev_step();
    assert_eq!(engine.step(), 0);
}

#[test]
fn play_at_last_step_is_noop() {
    let (mut engine, _) = engine();
    engine.load(trace(3));
    engine.go_to_step(2);
    assert_eq!(engine.play(), None);
    assert!(!engine.is_playing());
    assert_eq!(engine.step(), 2);
}

#[test]
fn empty_trace_is_inert() {
    let (mut engine, _) = engine();
    engine.load(Trace::empty());
    assert_eq!(engine.play(), None);
    engine.next_step();
    engine.go_to_step(5);
    assert_eq!(engine.step(), 0);
    assert!(engine.current().is_none());
    assert!(!engine.is_at_end());
    assert!(!engine.take_completion());
}

#[test]
fn reset_pauses_at_first_step() {
    let (mut engine, clock) = engine();
    engine.load(trace(5));
    let token = engine.play().unwrap();
    clock.advance(common::BASE);
    engine.on_frame(token);
    engine.reset();
    assert_eq!(engine.step(), 0);
    assert!(!engine.is_playing());
    assert_eq!(engine.pending_frame(), None);
}

#[test]
fn completion_is_reported_once() {
    let (mut engine, _) = engine();
    engine.load(trace(3));
    assert!(!engine.take_completion());
    engine.go_to_step(2);
    assert!(engine.take_completion());
    engine.prev_step();
    engine.next_step();
    assert!(!engine.take_completion());
}
