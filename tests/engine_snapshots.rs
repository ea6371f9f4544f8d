//! Snapshot of a full navigation journey.
//!
//! Records what the surface shows after each user action, so any change to
//! snapping, the threshold rule or UI sync shows up as a snapshot diff.

mod common;

use cardswipe::model::CarouselEvent;
use common::{at, TestEngine};
use std::time::Instant;

#[derive(Debug)]
struct Step {
    action: &'static str,
    index: usize,
    painted: f32,
    dragging: bool,
    previous_enabled: bool,
    next_enabled: bool,
}

fn record(action: &'static str, engine: &TestEngine) -> Step {
    let controls = engine.controls();
    Step {
        action,
        index: engine.current_index(),
        painted: engine.surface().last_offset().unwrap(),
        dragging: engine.state().is_dragging(),
        previous_enabled: controls.previous_enabled,
        next_enabled: controls.next_enabled,
    }
}

fn frame(engine: &mut TestEngine) {
    if let Some(id) = engine.pending_frame() {
        engine.run_frame(id);
    }
}

#[test]
fn swipe_journey() {
    let mut engine = common::engine(4, 0);
    let now = Instant::now();
    let mut journey = vec![record("start", &engine)];

    engine.handle_event(CarouselEvent::PointerDown(at(500.0)), now);
    engine.handle_event(CarouselEvent::PointerMove(at(350.0)), now);
    frame(&mut engine);
    journey.push(record("drag left 150", &engine));

    engine.handle_event(CarouselEvent::PointerUp, now);
    journey.push(record("release", &engine));

    engine.handle_event(CarouselEvent::IndicatorClicked(3), now);
    journey.push(record("indicator 3", &engine));

    engine.handle_event(CarouselEvent::PreviousControlClicked, now);
    journey.push(record("previous", &engine));

    engine.handle_event(CarouselEvent::PointerDown(at(500.0)), now);
    engine.handle_event(CarouselEvent::PointerMove(at(560.0)), now);
    engine.handle_event(CarouselEvent::PointerUp, now);
    journey.push(record("short drag right", &engine));

    insta::assert_debug_snapshot!("swipe_journey", journey);
}
