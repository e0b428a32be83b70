// File: crates/chart-core/tests/hover.rs
// Purpose: Validate hover highlight, tooltip lifecycle and placement against an in-memory scene.

use chart_core::geometry::Point;
use chart_core::{Chart, ChartError, Color, HoverTracker, PointerEvent, Record, TooltipPosition};

fn chart() -> Chart {
    Chart::new(vec![
        Record::new(1994, 4684.0, "Rider A", "ITA"),
        Record::new(1998, 4455.0, "Rider B", "ESP").with_doping("EPO"),
    ])
    .expect("chart")
}

#[test]
fn enter_highlights_and_opens_one_tooltip() {
    let chart = chart();
    let mut scene = chart.scene();
    let hover = chart.hover();

    let record = chart.record(1).expect("record");
    let active = hover.enter(&mut scene, 1, record, Point::new(500.0, 220.0)).expect("enter");

    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Color::GREEN));
    assert_eq!(scene.tooltips.len(), 1);
    let tip = &scene.tooltips[0];
    assert_eq!(tip.content.year, 1998);
    assert_eq!(tip.content.allegation.as_deref(), Some("EPO"));
    assert_eq!(tip.position, TooltipPosition { left: 515.0, top: 220.0 });

    hover.leave(&mut scene, active).expect("leave");
    assert!(scene.tooltips.is_empty());
    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Color::RED));
}

#[test]
fn move_repositions_the_tooltip() {
    let chart = chart();
    let mut scene = chart.scene();
    let hover = chart.hover();
    let record = chart.record(0).expect("record");

    let mut active = hover.enter(&mut scene, 0, record, Point::new(10.0, 10.0)).expect("enter");
    hover.follow(&mut scene, &mut active, Point::new(40.0, 90.0)).expect("follow");
    assert_eq!(scene.tooltips[0].position, TooltipPosition { left: 55.0, top: 90.0 });

    hover.leave(&mut scene, active).expect("leave");
    assert_eq!(scene.dot(0).map(|d| d.fill), Some(Color::BLUE));
}

#[test]
fn leaving_restores_the_freshly_rendered_scene() {
    let chart = chart();
    let pristine = chart.scene();
    let mut scene = pristine.clone();
    let mut tracker = HoverTracker::new(chart.hover());
    let record = chart.record(0).expect("record");

    tracker.handle_event(&mut scene, 0, record, PointerEvent::Enter { page: Point::new(1.0, 2.0) }).expect("enter");
    tracker.handle_event(&mut scene, 0, record, PointerEvent::Move { page: Point::new(3.0, 4.0) }).expect("move");
    tracker.handle_event(&mut scene, 0, record, PointerEvent::Leave).expect("leave");

    assert_eq!(tracker.active_point(), None);
    assert_eq!(scene.nodes, pristine.nodes);
    assert!(scene.tooltips.is_empty());
}

#[test]
fn tracker_never_stacks_tooltips() {
    let chart = chart();
    let mut scene = chart.scene();
    let mut tracker = HoverTracker::new(chart.hover());
    let (a, b) = (chart.record(0).expect("a"), chart.record(1).expect("b"));

    tracker.handle_event(&mut scene, 0, a, PointerEvent::Enter { page: Point::new(1.0, 1.0) }).expect("enter a");
    // entering b without a leave for a first
    tracker.handle_event(&mut scene, 1, b, PointerEvent::Enter { page: Point::new(2.0, 2.0) }).expect("enter b");

    assert_eq!(scene.tooltips.len(), 1);
    assert_eq!(scene.tooltips[0].content.year, 1998);
    assert_eq!(tracker.active_point(), Some(1));
    assert_eq!(scene.dot(0).map(|d| d.fill), Some(Color::BLUE));
    assert_eq!(scene.dot(1).map(|d| d.fill), Some(Color::GREEN));

    // stale leave for a is ignored
    tracker.handle_event(&mut scene, 0, a, PointerEvent::Leave).expect("stale leave");
    assert_eq!(scene.tooltips.len(), 1);

    tracker.handle_event(&mut scene, 1, b, PointerEvent::Leave).expect("leave b");
    assert!(scene.tooltips.is_empty());
}

#[test]
fn unknown_point_is_an_error() {
    let chart = chart();
    let mut scene = chart.scene();
    let record = chart.record(0).expect("record");
    let err = chart.hover().enter(&mut scene, 42, record, Point::default()).err().expect("must fail");
    assert!(matches!(err, ChartError::UnknownPoint(42)));
    assert!(scene.tooltips.is_empty());
}
