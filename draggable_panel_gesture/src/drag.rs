// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas, total offsets and release velocity.
//!
//! ## Usage
//!
//! 1) Start a drag by calling [`DragState::start`] with the initial position and a timestamp.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Query [`DragState::total_offset`] for the offset from the start, or
//!    [`DragState::velocity_at`] for the pointer velocity at a given time.
//! 4) End the drag with [`DragState::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use draggable_panel_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 700) at t = 0ms.
//! drag.start(Point::new(10.0, 700.0), 0);
//!
//! // 100ms later the pointer is 50 units higher.
//! let delta = drag.update(Point::new(10.0, 650.0), 100).unwrap();
//! assert_eq!(delta, Vec2::new(0.0, -50.0));
//!
//! // That is an upward velocity of 500 units per second.
//! assert_eq!(drag.velocity_at(100, 100), Vec2::new(0.0, -500.0));
//!
//! // Holding still for longer than the staleness window reads as no motion.
//! assert_eq!(drag.velocity_at(400, 100), Vec2::ZERO);
//! ```

use kurbo::{Point, Vec2};

/// Tracks drag state for move event processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    /// Timestamp (milliseconds) of the last recorded position
    pub last_time: Option<u64>,
    /// Velocity measured over the most recent update, in units per second
    pub velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(time_ms);
        self.velocity = Vec2::ZERO;
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    ///
    /// The velocity is re-measured from this delta. Updates that arrive with the same
    /// (or an earlier) timestamp keep the previous velocity.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<Vec2> {
        self.start_pos?;
        let Some(last_pos) = self.last_pos else {
            self.last_pos = Some(pos);
            self.last_time = Some(time_ms);
            return None;
        };
        let delta = pos - last_pos;
        if let Some(last_time) = self.last_time
            && time_ms > last_time
        {
            let per_second = 1000.0 / (time_ms - last_time) as f64;
            self.velocity = delta * per_second;
        }
        self.last_pos = Some(pos);
        self.last_time = Some(time_ms);
        Some(delta)
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Velocity at `time_ms`, in units per second.
    ///
    /// Reads as zero when no drag is active, or when the last update is more than
    /// `stale_after_ms` old.
    pub fn velocity_at(&self, time_ms: u64, stale_after_ms: u64) -> Vec2 {
        match self.last_time {
            Some(last_time)
                if self.start_pos.is_some()
                    && time_ms.saturating_sub(last_time) <= stale_after_ms =>
            {
                self.velocity
            }
            _ => Vec2::ZERO,
        }
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
