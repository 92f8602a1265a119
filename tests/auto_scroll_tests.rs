//! Edge auto-scroll tests.
//!
//! Twenty 100px columns in an 840px viewport, so the grid can scroll by up
//! to 1160px.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{wide_layout, Harness};
use grid_reorder::{PointerEvent, ReorderConfig, Viewport};

const MAX_SCROLL: f64 = 1160.0;

fn dragging() -> Harness {
    let h = Harness::new(wide_layout(20, 100.0), Viewport::new(0.0, 840.0));
    h.controller
        .start_reordering("c0", &PointerEvent::mouse(400.0, 10.0))
        .unwrap();
    h
}

#[test]
fn test_no_scroll_in_the_middle() {
    let h = dragging();
    assert!(!h.controller.is_auto_scrolling());
    assert_eq!(h.timer.active_count(), 0);
    assert_eq!(h.target().as_deref(), Some("c3"));
}

#[test]
fn test_right_edge_increment() {
    let h = dragging();
    // 40px inside the right edge: weight 100 of a 140px cutoff
    h.events.mouse_move(800.0);

    assert!(h.controller.is_auto_scrolling());
    let increment = h.controller.session().increment;
    assert!((increment - 80.0 / 7.0).abs() < 1e-9);
    assert!(increment > 0.0);
}

#[test]
fn test_timer_uses_configured_period() {
    let h = dragging();
    h.events.mouse_move(800.0);
    assert_eq!(h.timer.periods(), [10]);

    let config = ReorderConfig {
        tick_interval_ms: 25,
        ..ReorderConfig::default()
    };
    let h = Harness::with_config(wide_layout(20, 100.0), Viewport::new(0.0, 840.0), config);
    h.controller
        .start_reordering("c0", &PointerEvent::mouse(820.0, 10.0))
        .unwrap();
    assert_eq!(h.timer.periods(), [25]);
}

#[test]
fn test_ticks_scroll_and_retarget() {
    let h = dragging();
    h.events.mouse_move(800.0);
    assert_eq!(h.target().as_deref(), Some("c7"));

    h.timer.tick();
    assert!((h.scroll_left() - 80.0 / 7.0).abs() < 1e-9);

    h.timer.tick_n(4);
    // Content x is now ~857, closer to c8's edge at 900
    assert_eq!(h.target().as_deref(), Some("c8"));
}

#[test]
fn test_scroll_clamps_at_max() {
    let h = dragging();
    h.events.mouse_move(800.0);
    for _ in 0..200 {
        h.timer.tick();
        let scroll = h.scroll_left();
        assert!((0.0..=MAX_SCROLL).contains(&scroll));
    }
    assert_eq!(h.scroll_left(), MAX_SCROLL);
    // Content x 1960 is nearest the last column's right edge
    assert_eq!(h.target().as_deref(), Some("c19"));
}

#[test]
fn test_left_edge_scrolls_back() {
    let h = dragging();
    h.grid.borrow_mut().scroll_by(500.0);
    h.events.mouse_move(30.0);

    let increment = h.controller.session().increment;
    assert!(increment < 0.0);
    for _ in 0..100 {
        h.timer.tick();
        let scroll = h.scroll_left();
        assert!((0.0..=MAX_SCROLL).contains(&scroll));
    }
    assert_eq!(h.scroll_left(), 0.0);
    assert_eq!(h.target(), None);
}

#[test]
fn test_single_timer_within_band() {
    let h = dragging();
    h.events.mouse_move(800.0);
    h.events.mouse_move(810.0);
    h.events.mouse_move(835.0);

    assert_eq!(h.timer.scheduled_count(), 1);
    assert_eq!(h.timer.active_count(), 1);
    // The step follows the latest pointer position
    let increment = h.controller.session().increment;
    assert!((increment - 135.0 / 140.0 * 16.0).abs() < 1e-9);
}

#[test]
fn test_leaving_band_stops_timer() {
    let h = dragging();
    h.events.mouse_move(800.0);
    h.events.mouse_move(400.0);

    assert!(!h.controller.is_auto_scrolling());
    assert_eq!(h.timer.active_count(), 0);

    // Re-entering schedules a fresh timer
    h.events.mouse_move(800.0);
    assert_eq!(h.timer.scheduled_count(), 2);
}

#[test]
fn test_release_stops_timer() {
    let mut h = dragging();
    h.events.mouse_move(800.0);
    h.timer.tick_n(3);
    h.events.mouse_up();
    h.run_pending();

    assert!(!h.controller.is_auto_scrolling());
    assert_eq!(h.timer.active_count(), 0);

    let scroll = h.scroll_left();
    h.timer.tick_n(3);
    assert_eq!(h.scroll_left(), scroll);
}

#[test]
fn test_commit_uses_scrolled_target() {
    let mut h = dragging();
    h.events.mouse_move(800.0);
    h.timer.tick_n(200);
    h.events.mouse_up();
    h.run_pending();

    let order = h.order();
    assert_eq!(order.last().map(String::as_str), Some("c0"));
    assert_eq!(order.first().map(String::as_str), Some("c1"));
}

#[test]
fn test_narrow_viewport_shrinks_cutoff() {
    let h = Harness::new(wide_layout(20, 100.0), Viewport::new(0.0, 300.0));
    h.controller
        .start_reordering("c0", &PointerEvent::mouse(150.0, 10.0))
        .unwrap();
    // Cutoff is 300 / 6 = 50, so the middle of a 300px grid is quiet
    assert!(!h.controller.is_auto_scrolling());

    h.events.mouse_move(275.0);
    let increment = h.controller.session().increment;
    assert!((increment - 25.0 / 50.0 * 16.0).abs() < 1e-9);
}
