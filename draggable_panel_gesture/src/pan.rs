// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan recognition: turn raw pointer down/move/up/cancel into phased pan events.
//!
//! A pan begins on the first move after a pointer-down, continues with each
//! further move, and ends on pointer-up. A pointer that goes down and up without
//! moving is a tap and produces no pan events. Cancellation of an active pan
//! produces a single [`PanPhase::Other`] event.
//!
//! ```
//! use kurbo::Point;
//! use draggable_panel_gesture::pan::{PanPhase, PanRecognizer};
//!
//! let mut pan = PanRecognizer::new();
//!
//! pan.on_down(Point::new(20.0, 730.0), 0);
//! let began = pan.on_move(Point::new(20.0, 700.0), 16).unwrap();
//! assert_eq!(began.phase, PanPhase::Began);
//!
//! let changed = pan.on_move(Point::new(20.0, 400.0), 32).unwrap();
//! assert_eq!(changed.phase, PanPhase::Changed);
//!
//! let ended = pan.on_up(Point::new(20.0, 400.0), 40).unwrap();
//! assert_eq!(ended.phase, PanPhase::Ended);
//! assert!(ended.velocity.y < 0.0);
//! ```

use kurbo::{Point, Vec2};

use crate::drag::DragState;

/// Default window, in milliseconds, after which the last measured velocity is
/// considered stale at release.
pub const DEFAULT_VELOCITY_STALE_MS: u64 = 100;

/// Phase of a pan gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// The first movement of a new pan.
    Began,
    /// A subsequent movement.
    Changed,
    /// The pointer was released.
    Ended,
    /// Any other state, such as cancellation.
    Other,
}

/// A single pan sample delivered to a gesture consumer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanEvent {
    /// Phase of the gesture.
    pub phase: PanPhase,
    /// Pointer location in container coordinates.
    pub location: Point,
    /// Pointer velocity in units per second.
    pub velocity: Vec2,
}

impl PanEvent {
    /// Create a pan event.
    pub fn new(phase: PanPhase, location: Point, velocity: Vec2) -> Self {
        Self {
            phase,
            location,
            velocity,
        }
    }
}

/// Recognizes a pan from a single pointer's down/move/up stream.
#[derive(Clone, Debug)]
pub struct PanRecognizer {
    drag: DragState,
    began: bool,
    stale_after_ms: u64,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanRecognizer {
    /// Create a recognizer using [`DEFAULT_VELOCITY_STALE_MS`].
    pub fn new() -> Self {
        Self {
            drag: DragState::default(),
            began: false,
            stale_after_ms: DEFAULT_VELOCITY_STALE_MS,
        }
    }

    /// Override the velocity staleness window.
    #[must_use]
    pub fn with_velocity_stale_ms(mut self, stale_after_ms: u64) -> Self {
        self.stale_after_ms = stale_after_ms;
        self
    }

    /// Returns `true` while a pointer is down and being tracked.
    pub fn is_tracking(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` once the tracked pointer has moved and a pan is in progress.
    pub fn is_panning(&self) -> bool {
        self.began
    }

    /// Start tracking a pointer that went down at `pos`.
    ///
    /// A second pointer-down while tracking restarts the gesture without emitting
    /// an end for the previous one.
    pub fn on_down(&mut self, pos: Point, time_ms: u64) {
        self.drag.start(pos, time_ms);
        self.began = false;
    }

    /// Feed a pointer move. Returns `None` when no pointer is being tracked.
    pub fn on_move(&mut self, pos: Point, time_ms: u64) -> Option<PanEvent> {
        self.drag.update(pos, time_ms)?;
        let phase = if self.began {
            PanPhase::Changed
        } else {
            self.began = true;
            PanPhase::Began
        };
        Some(PanEvent::new(phase, pos, self.drag.velocity))
    }

    /// Feed a pointer release. Returns the `Ended` event if a pan was in progress.
    pub fn on_up(&mut self, pos: Point, time_ms: u64) -> Option<PanEvent> {
        if !self.began {
            if self.drag.is_dragging() {
                log::trace!("pointer released without movement; not a pan");
            }
            self.reset();
            return None;
        }
        let last_move = self.drag.last_pos.unwrap_or(pos);
        let velocity = if last_move == pos {
            self.drag.velocity_at(time_ms, self.stale_after_ms)
        } else {
            // The release carries movement of its own.
            self.drag.update(pos, time_ms);
            self.drag.velocity
        };
        self.reset();
        Some(PanEvent::new(PanPhase::Ended, pos, velocity))
    }

    /// Cancel the tracked pointer. Returns an `Other` event if a pan was in progress.
    pub fn on_cancel(&mut self, pos: Point) -> Option<PanEvent> {
        let began = self.began;
        self.reset();
        began.then(|| PanEvent::new(PanPhase::Other, pos, Vec2::ZERO))
    }

    fn reset(&mut self) {
        self.drag.end();
        self.began = false;
    }
}
