//! Property-based tests for engine invariants.
//!
//! Tests validate:
//! 1. Any event sequence keeps the index in range
//! 2. Exactly one indicator is lit, at the current index
//! 3. Control enablement follows the index formulas
//! 4. The resting offset is always the snapped offset of the current index
//! 5. Snapped offsets are deterministic and strictly decreasing in the index

mod common;

use cardswipe::model::{CarouselEvent, LayoutMetrics, Measurement, PointerPosition};
use cardswipe::state::{resolve_swipe, snapped_offset, SwipeDecision};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn event_strategy(len: usize) -> impl Strategy<Value = CarouselEvent> {
    prop_oneof![
        (-500.0f32..1500.0).prop_map(|x| CarouselEvent::PointerDown(PointerPosition::new(x))),
        (-500.0f32..1500.0).prop_map(|x| CarouselEvent::PointerMove(PointerPosition::new(x))),
        Just(CarouselEvent::PointerUp),
        Just(CarouselEvent::PointerLeaveRegion),
        (0..len + 3).prop_map(CarouselEvent::IndicatorClicked),
        Just(CarouselEvent::PreviousControlClicked),
        Just(CarouselEvent::NextControlClicked),
        Just(CarouselEvent::ViewportResized),
        prop_oneof![
            Just(CarouselEvent::NativeDragStart),
            Just(CarouselEvent::ContextMenu),
        ],
    ]
}

fn scenario() -> impl Strategy<Value = (usize, usize, Vec<CarouselEvent>)> {
    (1usize..10).prop_flat_map(|len| {
        (
            Just(len),
            0..len,
            prop::collection::vec(event_strategy(len), 0..60),
        )
    })
}

// ===== Properties 1-4: Engine invariants under arbitrary input =====

proptest! {
    #[test]
    fn engine_invariants_hold_for_any_event_sequence((len, start, events) in scenario()) {
        let mut engine = common::engine(len, start);
        let t0 = Instant::now();

        for (step, event) in events.into_iter().enumerate() {
            let now = t0 + Duration::from_millis(step as u64 * 30);
            engine.handle_event(event, now);
            engine.poll_timers(now);
            if let Some(id) = engine.pending_frame() {
                engine.run_frame(id);
            }

            let index = engine.current_index();
            prop_assert!(index < len, "index {} out of range for {} slides", index, len);

            prop_assert_eq!(engine.indicators().active_count(), 1);
            prop_assert_eq!(engine.indicators().active_index(), Some(index));
            prop_assert_eq!(engine.surface().lit_indicators(), vec![index]);

            let controls = engine.controls();
            prop_assert_eq!(controls.previous_enabled, index > 0);
            prop_assert_eq!(controls.next_enabled, index < len - 1);

            let snapped = snapped_offset(index, &engine.metrics());
            prop_assert_eq!(engine.state().resting_offset(), snapped);
            if !engine.state().is_dragging() {
                prop_assert_eq!(engine.state().live_offset(), snapped);
                prop_assert_eq!(engine.surface().last_offset(), Some(snapped));
            }
        }
    }
}

// ===== Property 5: Layout calculation =====

proptest! {
    #[test]
    fn snapped_offset_is_deterministic(
        index in 0usize..50,
        slide in 1.0f32..1000.0,
        viewport in 1.0f32..2000.0,
        gap in 0.0f32..100.0,
    ) {
        let metrics = LayoutMetrics::from_measurement(Measurement::new(slide, viewport), gap);
        prop_assert_eq!(snapped_offset(index, &metrics), snapped_offset(index, &metrics));
    }

    #[test]
    fn snapped_offset_decreases_with_index(
        index in 0usize..50,
        slide in 1.0f32..1000.0,
        viewport in 1.0f32..2000.0,
        gap in 0.0f32..100.0,
    ) {
        let metrics = LayoutMetrics::from_measurement(Measurement::new(slide, viewport), gap);
        prop_assert!(snapped_offset(index + 1, &metrics) < snapped_offset(index, &metrics));
    }

    #[test]
    fn unmeasured_geometry_snaps_to_zero(index in 0usize..50, gap in 0.0f32..100.0) {
        let metrics = LayoutMetrics::from_measurement(Measurement::new(0.0, 0.0), gap);
        prop_assert_eq!(snapped_offset(index, &metrics), 0.0);
    }
}

// ===== Threshold rule =====

proptest! {
    #[test]
    fn swipe_within_threshold_never_moves(
        moved_by in -100.0f32..=100.0,
        current in 0usize..10,
    ) {
        prop_assert_eq!(resolve_swipe(moved_by, current, 9, 100.0), SwipeDecision::SnapBack);
    }

    #[test]
    fn swipe_result_stays_in_range(
        moved_by in -1000.0f32..1000.0,
        last in 0usize..10,
        current_seed in 0usize..10,
    ) {
        let current = current_seed.min(last);
        let next = resolve_swipe(moved_by, current, last, 100.0).apply(current);
        prop_assert!(next <= last);
        prop_assert!(next.abs_diff(current) <= 1);
    }
}
