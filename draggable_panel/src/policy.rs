// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a released panel should settle.
//!
//! The choice is a two-step decision. First the release position is compared
//! against the rest edge of the panel's current state ([`Release::route`]):
//!
//! | open  | pointer y        | route          |
//! |-------|------------------|----------------|
//! | true  | `y >= open_y`    | by direction   |
//! | true  | `y <= open_y`    | open           |
//! | false | `y <= closed_y`  | by direction   |
//! | false | `y >= closed_y`  | closed         |
//!
//! Rows are tried in order, so a release exactly on the edge goes by direction.
//!
//! Then, when routed by direction, the vertical velocity decides: moving down
//! closes, moving up opens. A release with no vertical motion falls back to
//! position: the panel closes if `y + handle_height` is below the container's
//! vertical center, and opens otherwise.

use crate::geometry::RestState;

/// Vertical direction of the pointer at release.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// No vertical motion.
    None,
}

impl Direction {
    /// Classify a vertical velocity. Zero and NaN are [`Direction::None`].
    pub fn from_velocity(velocity_y: f64) -> Self {
        if velocity_y > 0.0 {
            Self::Down
        } else if velocity_y < 0.0 {
            Self::Up
        } else {
            Self::None
        }
    }
}

/// First-step outcome of the release decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Let the release direction (or position, when still) decide.
    ByDirection,
    /// Return to the open position.
    Open,
    /// Return to the closed position.
    Closed,
}

/// Everything the release decision looks at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Whether the panel was open when the drag started.
    pub is_open: bool,
    /// Pointer y at release, container coordinates.
    pub pointer_y: f64,
    /// Pointer vertical velocity at release.
    pub velocity_y: f64,
    /// Top edge of the open frame.
    pub open_y: f64,
    /// Top edge of the closed frame.
    pub closed_y: f64,
    /// Height of the handle strip.
    pub handle_height: f64,
    /// Vertical center of the container at release time.
    pub container_center_y: f64,
}

impl Release {
    /// Compare the release position with the current state's rest edge.
    ///
    /// Returns `None` only when `pointer_y` is NaN.
    pub fn route(&self) -> Option<Route> {
        let y = self.pointer_y;
        match self.is_open {
            true if y >= self.open_y => Some(Route::ByDirection),
            true if y <= self.open_y => Some(Route::Open),
            false if y <= self.closed_y => Some(Route::ByDirection),
            false if y >= self.closed_y => Some(Route::Closed),
            _ => None,
        }
    }

    /// Settle by release direction, falling back to position when still.
    pub fn by_direction(&self) -> RestState {
        match Direction::from_velocity(self.velocity_y) {
            Direction::Down => RestState::Closed,
            Direction::Up => RestState::Open,
            Direction::None => {
                if self.pointer_y + self.handle_height > self.container_center_y {
                    RestState::Closed
                } else {
                    RestState::Open
                }
            }
        }
    }

    /// The rest state to snap to, if any.
    pub fn decide(&self) -> Option<RestState> {
        Some(match self.route()? {
            Route::ByDirection => self.by_direction(),
            Route::Open => RestState::Open,
            Route::Closed => RestState::Closed,
        })
    }
}
