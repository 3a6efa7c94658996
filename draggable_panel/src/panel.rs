// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use draggable_panel_gesture::{PanEvent, PanPhase};
use draggable_panel_spring::{SpringCurve, SpringTimeline};
use kurbo::{Point, Rect};

use crate::config::PanelConfig;
use crate::error::InitError;
use crate::geometry::{RestFrames, RestState};
use crate::policy::Release;

/// Ticket for a snap transition.
///
/// The panel applies a completion only for the ticket of its current
/// generation; tickets from superseded snaps are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snap {
    /// Where the transition lands.
    pub target: RestState,
    /// Panel generation the snap was started in.
    pub generation: u64,
}

/// Notifications produced while advancing a panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    /// A snap transition finished and the panel rests in this state.
    Settled(RestState),
}

/// Whether a pan is currently moving the panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No pan in progress.
    #[default]
    Idle,
    /// The panel is following the pointer.
    Dragging,
}

#[derive(Copy, Clone, Debug)]
struct Transition {
    snap: Snap,
    from: Rect,
    to: Rect,
    timeline: SpringTimeline,
}

impl Transition {
    fn frame_at(&self, progress: f64) -> Rect {
        let origin = self.from.origin().lerp(self.to.origin(), progress);
        self.to.with_origin(origin)
    }
}

#[derive(Copy, Clone, Debug)]
struct Ready {
    frames: RestFrames,
    container: Rect,
    handle_height: f64,
    frame: Rect,
    is_open: bool,
    drag: DragPhase,
    generation: u64,
    transition: Option<Transition>,
}

impl Ready {
    /// Make the pointer the sole writer of the frame.
    fn follow_pointer(&mut self, y: f64) {
        if self.drag == DragPhase::Idle || self.transition.is_some() {
            self.generation += 1;
            if let Some(transition) = self.transition.take() {
                log::debug!(
                    "drag supersedes snap to {:?} (generation {})",
                    transition.snap.target,
                    transition.snap.generation
                );
            }
        }
        self.drag = DragPhase::Dragging;
        self.frame = self.frame.with_origin(Point::new(self.frame.x0, y));
    }

    fn start_snap(&mut self, target: RestState, config: &PanelConfig) -> Snap {
        self.generation += 1;
        let snap = Snap {
            target,
            generation: self.generation,
        };
        self.transition = Some(Transition {
            snap,
            from: self.frame,
            to: self.frames.frame(target),
            timeline: SpringTimeline::new(SpringCurve::new(config.spring)),
        });
        log::trace!("snap to {target:?} started (generation {})", self.generation);
        snap
    }

    fn complete(&mut self, snap: Snap) -> bool {
        if snap.generation != self.generation {
            log::debug!(
                "ignoring stale completion for {:?} (generation {}, current {})",
                snap.target,
                snap.generation,
                self.generation
            );
            return false;
        }
        self.transition = None;
        self.frame = self.frames.frame(snap.target);
        self.is_open = snap.target.is_open();
        true
    }
}

/// Container bounds moved to the local origin.
fn local(bounds: Rect) -> Rect {
    bounds.with_origin(Point::ORIGIN)
}

#[derive(Copy, Clone, Debug)]
enum Lifecycle {
    Uninitialized,
    Ready(Ready),
}

/// A panel that is dragged vertically by its handle and snaps open or closed.
///
/// The panel is headless: it owns geometry and state, consumes [`PanEvent`]s and
/// exposes its current [`frame`](Self::frame). Hosts step animations with
/// [`advance`](Self::advance) and draw the frame they read back.
///
/// Every operation other than [`initialize`](Self::initialize) is a no-op until
/// the panel has been initialized.
#[derive(Clone, Debug)]
pub struct DraggablePanel {
    config: PanelConfig,
    lifecycle: Lifecycle,
}

impl Default for DraggablePanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl DraggablePanel {
    /// Create an uninitialized panel.
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// The panel's configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Lay the panel out in its container and park it closed.
    ///
    /// Must be called once, after the host knows the container bounds and the
    /// handle height. Only the size of `container_bounds` is used; the panel
    /// works in container coordinates with the origin at the container's top left. The handle is the top strip of the panel, full width and
    /// `handle_height` tall.
    pub fn initialize(
        &mut self,
        container_bounds: Rect,
        handle_height: f64,
    ) -> Result<(), InitError> {
        if let Lifecycle::Ready(_) = self.lifecycle {
            return Err(InitError::AlreadyInitialized);
        }
        let container = local(container_bounds);
        let frames = RestFrames::compute(container, handle_height, &self.config)?;
        log::trace!(
            "panel initialized: open {:?}, closed {:?}",
            frames.open,
            frames.closed
        );
        self.lifecycle = Lifecycle::Ready(Ready {
            frames,
            container,
            handle_height,
            frame: frames.closed,
            is_open: false,
            drag: DragPhase::Idle,
            generation: 0,
            transition: None,
        });
        Ok(())
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready(_))
    }

    /// Whether the panel rests open. Only changes when a snap completes.
    pub fn is_open(&self) -> bool {
        self.ready().is_some_and(|ready| ready.is_open)
    }

    /// The panel's current frame in container coordinates.
    pub fn frame(&self) -> Option<Rect> {
        self.ready().map(|ready| ready.frame)
    }

    /// The open and closed rest frames.
    pub fn rest_frames(&self) -> Option<RestFrames> {
        self.ready().map(|ready| ready.frames)
    }

    /// Current container bounds in container coordinates, origin at zero.
    pub fn container_bounds(&self) -> Option<Rect> {
        self.ready().map(|ready| ready.container)
    }

    /// Update the container bounds used for the still-release fallback.
    ///
    /// As with [`initialize`](Self::initialize), only the size is used. Rest frames
    /// are fixed at initialization and are not recomputed.
    pub fn set_container_bounds(&mut self, bounds: Rect) {
        match self.ready_mut() {
            Some(ready) => ready.container = local(bounds),
            None => log::trace!("container bounds set before initialize; ignored"),
        }
    }

    /// The handle strip in container coordinates.
    pub fn handle_rect(&self) -> Option<Rect> {
        self.ready().map(|ready| {
            Rect::from_origin_size(
                ready.frame.origin(),
                (ready.frame.width(), ready.handle_height),
            )
        })
    }

    /// Returns `true` if `point` (container coordinates) hits the handle strip.
    pub fn handle_contains(&self, point: Point) -> bool {
        self.handle_rect().is_some_and(|handle| handle.contains(point))
    }

    /// Whether a pan is moving the panel.
    pub fn drag_phase(&self) -> DragPhase {
        self.ready().map_or(DragPhase::Idle, |ready| ready.drag)
    }

    /// Returns `true` while the panel follows the pointer.
    pub fn is_dragging(&self) -> bool {
        self.drag_phase() == DragPhase::Dragging
    }

    /// Returns `true` while a snap transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.pending_snap().is_some()
    }

    /// The snap currently in flight.
    pub fn pending_snap(&self) -> Option<Snap> {
        self.ready()?.transition.map(|transition| transition.snap)
    }

    /// Current generation. Advances when a drag begins and when a snap starts.
    pub fn generation(&self) -> u64 {
        self.ready().map_or(0, |ready| ready.generation)
    }

    /// Feed one pan sample from the handle.
    ///
    /// `Began` and `Changed` move the panel's top edge to the pointer y. `Ended`
    /// does the same, then decides where to settle and starts that snap, which is
    /// returned. `Other` is ignored.
    pub fn handle_pan(&mut self, event: &PanEvent) -> Option<Snap> {
        let config = self.config;
        let Some(ready) = self.ready_mut() else {
            log::trace!("pan {:?} before initialize; ignored", event.phase);
            return None;
        };
        let y = event.location.y;
        match event.phase {
            PanPhase::Began | PanPhase::Changed => {
                ready.follow_pointer(y);
                None
            }
            PanPhase::Ended if y.is_nan() => {
                log::debug!("release without a pointer position; ignored");
                None
            }
            PanPhase::Ended => {
                ready.follow_pointer(y);
                ready.drag = DragPhase::Idle;
                let release = Release {
                    is_open: ready.is_open,
                    pointer_y: y,
                    velocity_y: event.velocity.y,
                    open_y: ready.frames.open_y(),
                    closed_y: ready.frames.closed_y(),
                    handle_height: ready.handle_height,
                    container_center_y: ready.container.height() / 2.0,
                };
                let Some(target) = release.decide() else {
                    log::debug!("release at y = {y} matches no rest state");
                    return None;
                };
                Some(ready.start_snap(target, &config))
            }
            PanPhase::Other => {
                log::debug!("unhandled pan phase at {:?}; ignored", event.location);
                None
            }
        }
    }

    /// Snap open.
    pub fn open(&mut self) -> Option<Snap> {
        self.snap_to(RestState::Open)
    }

    /// Snap closed.
    pub fn close(&mut self) -> Option<Snap> {
        self.snap_to(RestState::Closed)
    }

    /// Start a snap transition to `target`.
    pub fn snap_to(&mut self, target: RestState) -> Option<Snap> {
        let config = self.config;
        match self.ready_mut() {
            Some(ready) => Some(ready.start_snap(target, &config)),
            None => {
                log::trace!("snap to {target:?} before initialize; ignored");
                None
            }
        }
    }

    /// Advance the in-flight snap by `dt` seconds.
    ///
    /// Returns [`PanelEvent::Settled`] on the step the snap completes.
    pub fn advance(&mut self, dt: f64) -> Option<PanelEvent> {
        let ready = self.ready_mut()?;
        let transition = ready.transition.as_mut()?;
        let progress = transition.timeline.advance(dt);
        let frame = transition.frame_at(progress);
        let finished = transition.timeline.is_finished().then_some(transition.snap);
        ready.frame = frame;
        let snap = finished?;
        ready
            .complete(snap)
            .then_some(PanelEvent::Settled(snap.target))
    }

    /// Land a snap: set the frame to its rest frame and update [`is_open`](Self::is_open).
    ///
    /// Hosts that animate the frame themselves call this from their completion
    /// callback. Returns `false` (and changes nothing) if the ticket belongs to
    /// a superseded generation or the panel is not initialized.
    pub fn complete(&mut self, snap: Snap) -> bool {
        self.ready_mut().is_some_and(|ready| ready.complete(snap))
    }

    fn ready(&self) -> Option<&Ready> {
        match &self.lifecycle {
            Lifecycle::Ready(ready) => Some(ready),
            Lifecycle::Uninitialized => None,
        }
    }

    fn ready_mut(&mut self) -> Option<&mut Ready> {
        match &mut self.lifecycle {
            Lifecycle::Ready(ready) => Some(ready),
            Lifecycle::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draggable_panel_spring::SpringConfig;
    use kurbo::Vec2;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 390.0, 800.0);

    fn panel() -> DraggablePanel {
        let mut panel = DraggablePanel::default();
        panel.initialize(CONTAINER, 40.0).unwrap();
        panel
    }

    fn pan(phase: PanPhase, y: f64, velocity_y: f64) -> PanEvent {
        PanEvent::new(phase, Point::new(20.0, y), Vec2::new(0.0, velocity_y))
    }

    fn settle(panel: &mut DraggablePanel) -> Option<PanelEvent> {
        let mut last = None;
        for _ in 0..120 {
            if let Some(event) = panel.advance(1.0 / 60.0) {
                last = Some(event);
            }
        }
        last
    }

    #[test]
    fn uninitialized_panel_is_inert() {
        let mut panel = DraggablePanel::default();
        assert!(!panel.is_initialized());
        assert!(!panel.is_open());
        assert_eq!(panel.frame(), None);
        assert_eq!(panel.handle_pan(&pan(PanPhase::Began, 100.0, 0.0)), None);
        assert_eq!(panel.handle_pan(&pan(PanPhase::Ended, 100.0, -1.0)), None);
        assert_eq!(panel.open(), None);
        assert_eq!(panel.close(), None);
        assert_eq!(panel.advance(1.0), None);
        assert!(!panel.complete(Snap {
            target: RestState::Open,
            generation: 0
        }));
        assert!(!panel.handle_contains(Point::new(1.0, 1.0)));
        assert_eq!(panel.generation(), 0);
    }

    #[test]
    fn initialize_parks_closed() {
        let panel = panel();
        let frames = panel.rest_frames().unwrap();
        assert_eq!(panel.frame(), Some(frames.closed));
        assert_eq!(frames.closed_y(), 730.0);
        assert_eq!(frames.open_y(), 60.0);
        assert!(!panel.is_open());
        assert!(!panel.is_dragging());
        assert!(!panel.is_animating());
    }

    #[test]
    fn initialize_twice_fails_and_keeps_state() {
        let mut panel = panel();
        panel.open();
        settle(&mut panel);

        let err = panel.initialize(Rect::new(0.0, 0.0, 10.0, 10.0), 1.0);

        assert_eq!(err, Err(InitError::AlreadyInitialized));
        assert!(panel.is_open());
        assert_eq!(panel.rest_frames().unwrap().closed_y(), 730.0);
    }

    #[test]
    fn initialize_rejects_degenerate_container() {
        let mut panel = DraggablePanel::default();
        assert!(panel.initialize(Rect::ZERO, 40.0).is_err());
        assert!(!panel.is_initialized());
    }

    #[test]
    fn handle_is_top_strip_of_panel() {
        let panel = panel();
        assert_eq!(panel.handle_rect(), Some(Rect::new(0.0, 730.0, 390.0, 770.0)));
        assert!(panel.handle_contains(Point::new(100.0, 750.0)));
        assert!(!panel.handle_contains(Point::new(100.0, 790.0)));
        assert!(!panel.handle_contains(Point::new(100.0, 700.0)));
    }

    #[test]
    fn drag_tracks_pointer_exactly() {
        let mut panel = panel();
        let width = panel.frame().unwrap().width();
        panel.handle_pan(&pan(PanPhase::Began, 720.0, 0.0));
        assert!(panel.is_dragging());
        for y in [700.0, 512.25, -40.0, 2000.0, 333.0] {
            panel.handle_pan(&pan(PanPhase::Changed, y, 0.0));
            let frame = panel.frame().unwrap();
            assert_eq!(frame.y0, y);
            assert_eq!(frame.x0, 0.0);
            assert_eq!(frame.width(), width);
            assert_eq!(frame.height(), 800.0);
        }
        assert!(!panel.is_open());
    }

    #[test]
    fn other_phase_is_ignored() {
        let mut panel = panel();
        let generation = panel.generation();
        assert_eq!(panel.handle_pan(&pan(PanPhase::Other, 100.0, 0.0)), None);
        assert_eq!(panel.frame().unwrap().y0, 730.0);
        assert_eq!(panel.generation(), generation);
        assert!(!panel.is_dragging());
    }

    #[test]
    fn release_upward_opens_after_settling() {
        let mut panel = panel();
        panel.handle_pan(&pan(PanPhase::Began, 700.0, -5.0));
        panel.handle_pan(&pan(PanPhase::Changed, 400.0, -5.0));
        let snap = panel.handle_pan(&pan(PanPhase::Ended, 400.0, -5.0)).unwrap();

        assert_eq!(snap.target, RestState::Open);
        assert!(!panel.is_dragging());
        assert!(!panel.is_open(), "state only changes on completion");

        assert_eq!(settle(&mut panel), Some(PanelEvent::Settled(RestState::Open)));
        assert!(panel.is_open());
        assert_eq!(panel.frame(), Some(panel.rest_frames().unwrap().open));
    }

    #[test]
    fn transition_moves_from_release_point() {
        let mut panel = panel();
        panel.handle_pan(&pan(PanPhase::Changed, 400.0, 0.0));
        panel.handle_pan(&pan(PanPhase::Ended, 400.0, -1.0));

        assert_eq!(panel.frame().unwrap().y0, 400.0);
        assert_eq!(panel.advance(0.1), None);
        let y = panel.frame().unwrap().y0;
        assert!(y < 400.0, "panel should move up, got {y}");
        assert!(panel.is_animating());
    }

    #[test]
    fn close_when_closed_is_idempotent() {
        let mut panel = panel();
        let snap = panel.close().unwrap();
        assert_eq!(snap.target, RestState::Closed);
        assert_eq!(settle(&mut panel), Some(PanelEvent::Settled(RestState::Closed)));
        assert!(!panel.is_open());
        assert_eq!(panel.frame(), Some(panel.rest_frames().unwrap().closed));
    }

    #[test]
    fn drag_during_snap_supersedes_it() {
        let mut panel = panel();
        let snap = panel.open().unwrap();
        panel.advance(0.1);

        panel.handle_pan(&pan(PanPhase::Began, 500.0, 0.0));
        assert!(!panel.is_animating());
        assert_eq!(settle(&mut panel), None);
        assert_eq!(panel.frame().unwrap().y0, 500.0);

        // A late completion for the superseded snap changes nothing.
        assert!(!panel.complete(snap));
        assert!(!panel.is_open());
        assert_eq!(panel.frame().unwrap().y0, 500.0);
    }

    #[test]
    fn newer_snap_invalidates_older_ticket() {
        let mut panel = panel();
        let open = panel.open().unwrap();
        let close = panel.close().unwrap();
        assert!(close.generation > open.generation);

        assert!(!panel.complete(open));
        assert!(!panel.is_open());
        assert!(panel.complete(close));
        assert!(!panel.is_animating());
    }

    #[test]
    fn external_completion_lands_immediately() {
        let mut panel = panel();
        let snap = panel.open().unwrap();
        assert!(panel.complete(snap));
        assert!(panel.is_open());
        assert_eq!(panel.frame().unwrap().y0, 60.0);
        assert_eq!(panel.advance(1.0), None);
    }

    #[test]
    fn still_release_uses_current_container_center() {
        let mut panel = panel();
        panel.open();
        settle(&mut panel);

        panel.set_container_bounds(Rect::new(0.0, 0.0, 390.0, 100.0));
        panel.handle_pan(&pan(PanPhase::Began, 60.0, 0.0));
        let snap = panel.handle_pan(&pan(PanPhase::Ended, 60.0, 0.0)).unwrap();

        // 60 + 40 > 50, and the rest frames are unchanged.
        assert_eq!(snap.target, RestState::Closed);
        assert_eq!(panel.rest_frames().unwrap().closed_y(), 730.0);
    }

    #[test]
    fn offset_container_is_treated_as_local() {
        let mut panel = DraggablePanel::default();
        panel
            .initialize(Rect::new(0.0, 200.0, 390.0, 1000.0), 40.0)
            .unwrap();
        assert_eq!(panel.rest_frames().unwrap().closed_y(), 730.0);
        assert_eq!(
            panel.container_bounds(),
            Some(Rect::new(0.0, 0.0, 390.0, 800.0))
        );
        panel.open();
        settle(&mut panel);

        panel.handle_pan(&pan(PanPhase::Began, 60.0, 0.0));
        panel.handle_pan(&pan(PanPhase::Changed, 400.0, 0.0));
        let snap = panel.handle_pan(&pan(PanPhase::Ended, 400.0, 0.0)).unwrap();

        // 400 + 40 is below the 400 center of an 800 high container.
        assert_eq!(snap.target, RestState::Closed);
    }

    #[test]
    fn offset_resize_keeps_local_center() {
        let mut panel = panel();
        panel.set_container_bounds(Rect::new(50.0, 300.0, 440.0, 1100.0));
        assert_eq!(panel.container_bounds(), Some(CONTAINER));

        panel.handle_pan(&pan(PanPhase::Began, 730.0, 0.0));
        panel.handle_pan(&pan(PanPhase::Changed, 340.0, 0.0));
        let snap = panel.handle_pan(&pan(PanPhase::Ended, 340.0, 0.0)).unwrap();

        // 340 + 40 < 400, so the still release opens.
        assert_eq!(snap.target, RestState::Open);
    }

    #[test]
    fn release_without_position_keeps_frame() {
        let mut panel = panel();
        panel.handle_pan(&pan(PanPhase::Began, 730.0, 0.0));
        panel.handle_pan(&pan(PanPhase::Changed, 500.0, 0.0));

        assert_eq!(panel.handle_pan(&pan(PanPhase::Ended, f64::NAN, -3.0)), None);

        assert_eq!(panel.frame().unwrap().y0, 500.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn zero_duration_spring_lands_on_next_advance() {
        let config =
            PanelConfig::default().with_spring(SpringConfig::default().with_duration(0.0));
        let mut panel = DraggablePanel::new(config);
        panel.initialize(CONTAINER, 40.0).unwrap();
        panel.open();

        assert_eq!(panel.advance(0.0), Some(PanelEvent::Settled(RestState::Open)));
        assert!(panel.is_open());
    }
}
