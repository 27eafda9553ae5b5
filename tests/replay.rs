use proptest::prelude::*;
use signum_trace::structure::values;
use signum_trace::{
    AnimationEngine, ArrayOp, ArrayTracer, ManualClock, PlaybackConfig, Trace, TraceGenerator,
};

#[derive(Debug, Clone)]
enum Nav {
    Next,
    Prev,
    GoTo(usize),
    Reset,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Next),
        Just(Nav::Prev),
        (0usize..80).prop_map(Nav::GoTo),
        Just(Nav::Reset),
    ]
}

fn sorting_trace(items: &[i64]) -> Trace {
    ArrayTracer
        .generate(&ArrayOp::BubbleSort, &values(items.iter().copied()))
        .trace
}

fn engine_with(trace: Trace) -> AnimationEngine<ManualClock> {
    let mut engine = AnimationEngine::with_clock(&PlaybackConfig::default(), ManualClock::new());
    engine.load(trace);
    engine
}

proptest! {
    #[test]
    fn random_access_matches_sequential(
        items in prop::collection::vec(0i64..100, 1..12),
        target in 0usize..200,
    ) {
        let trace = sorting_trace(&items);
        let last = trace.len() - 1;

        let mut jumped = engine_with(trace.clone());
        jumped.go_to_step(target);

        let mut walked = engine_with(trace);
        for _ in 0..target.min(last) {
            walked.next_step();
        }

        prop_assert_eq!(jumped.step(), walked.step());
        prop_assert_eq!(jumped.current(), walked.current());
    }

    #[test]
    fn navigation_matches_clamped_model(
        items in prop::collection::vec(0i64..100, 1..10),
        commands in prop::collection::vec(nav(), 0..60),
    ) {
        let trace = sorting_trace(&items);
        let last = trace.len() - 1;
        let mut engine = engine_with(trace.clone());
        let mut model = 0usize;

        for command in commands {
            match command {
                Nav::Next => {
                    engine.next_step();
                    model = (model + 1).min(last);
                }
                Nav::Prev => {
                    engine.prev_step();
                    model = model.saturating_sub(1);
                }
                Nav::GoTo(i) => {
                    engine.go_to_step(i);
                    model = i.min(last);
                }
                Nav::Reset => {
                    engine.reset();
                    model = 0;
                }
            }
            prop_assert_eq!(engine.step(), model);
            prop_assert_eq!(engine.current(), trace.get(model));
            prop_assert!(!engine.is_playing());
        }
    }
}
