// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the host screen: load-time initialization and pointer routing.

use draggable_panel::{InitError, PanelConfig, PanelEvent, RestState};
use draggable_panel_demos::HostScreen;
use kurbo::{Point, Rect};

fn screen() -> HostScreen {
    let mut screen = HostScreen::new(
        Rect::new(0.0, 0.0, 390.0, 800.0),
        40.0,
        PanelConfig::default(),
    );
    screen.load().unwrap();
    screen
}

fn run_until_rest(screen: &mut HostScreen) -> Option<PanelEvent> {
    let mut last = None;
    for _ in 0..120 {
        if let Some(event) = screen.tick(1.0 / 60.0) {
            last = Some(event);
        }
    }
    last
}

#[test]
fn panel_is_inert_until_loaded() {
    let mut screen = HostScreen::new(
        Rect::new(0.0, 0.0, 390.0, 800.0),
        40.0,
        PanelConfig::default(),
    );
    assert!(!screen.pointer_down(Point::new(10.0, 740.0), 0));
    assert_eq!(screen.panel_mut().open(), None);
    assert_eq!(screen.tick(1.0), None);

    screen.load().unwrap();
    assert_eq!(screen.panel().frame().unwrap().y0, 730.0);
}

#[test]
fn loading_twice_fails() {
    let mut screen = screen();
    assert_eq!(screen.load(), Err(InitError::AlreadyInitialized));
}

#[test]
fn loading_into_empty_container_fails() {
    let mut screen = HostScreen::new(Rect::ZERO, 40.0, PanelConfig::default());
    assert!(matches!(
        screen.load(),
        Err(InitError::InvalidContainer { .. })
    ));
}

#[test]
fn pointer_outside_handle_is_not_captured() {
    let mut screen = screen();
    assert!(!screen.pointer_down(Point::new(10.0, 500.0), 0));
    assert_eq!(screen.pointer_move(Point::new(10.0, 300.0), 10), None);
    assert_eq!(screen.pointer_up(Point::new(10.0, 300.0), 20), None);
    assert_eq!(screen.panel().frame().unwrap().y0, 730.0);
}

#[test]
fn handle_drag_opens_panel() {
    let mut screen = screen();
    assert!(screen.pointer_down(Point::new(10.0, 740.0), 0));
    screen.pointer_move(Point::new(10.0, 600.0), 10);
    assert_eq!(screen.panel().frame().unwrap().y0, 600.0);
    screen.pointer_move(Point::new(10.0, 400.0), 20);

    let snap = screen.pointer_up(Point::new(10.0, 400.0), 25).unwrap();

    assert_eq!(snap.target, RestState::Open);
    assert_eq!(
        run_until_rest(&mut screen),
        Some(PanelEvent::Settled(RestState::Open))
    );
    assert!(screen.panel().is_open());
}

#[test]
fn cancelled_drag_leaves_panel_where_it_was() {
    let mut screen = screen();
    screen.pointer_down(Point::new(10.0, 740.0), 0);
    screen.pointer_move(Point::new(10.0, 500.0), 10);

    screen.pointer_cancel(Point::new(10.0, 500.0));

    assert_eq!(screen.panel().frame().unwrap().y0, 500.0);
    assert!(!screen.panel().is_animating());
    assert_eq!(screen.pointer_up(Point::new(10.0, 500.0), 20), None);
}

#[test]
fn resize_moves_the_still_release_threshold() {
    let mut screen = screen();
    // Pull up to 300 and hold: 300 + 40 < 400, so it would open.
    screen.pointer_down(Point::new(10.0, 740.0), 0);
    screen.pointer_move(Point::new(10.0, 300.0), 10);
    screen.resize(Rect::new(0.0, 0.0, 390.0, 600.0));

    // With a 600 high container the center is 300, and 340 > 300 closes.
    let snap = screen.pointer_up(Point::new(10.0, 300.0), 500).unwrap();

    assert_eq!(snap.target, RestState::Closed);
    assert_eq!(screen.container().height(), 600.0);
}

#[test]
fn screen_offset_does_not_shift_the_threshold() {
    // The container sits 200 below the top of the window.
    let mut screen = HostScreen::new(
        Rect::new(0.0, 200.0, 390.0, 1000.0),
        40.0,
        PanelConfig::default(),
    );
    screen.load().unwrap();
    screen.pointer_down(Point::new(10.0, 740.0), 0);
    screen.pointer_move(Point::new(10.0, 380.0), 10);

    // 380 + 40 > 400: closes against the center of an 800 high container.
    let snap = screen.pointer_up(Point::new(10.0, 380.0), 500).unwrap();

    assert_eq!(snap.target, RestState::Closed);
}
