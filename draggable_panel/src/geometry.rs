// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::config::PanelConfig;
use crate::error::InitError;

/// One of the two positions a panel settles into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RestState {
    /// Pulled up on screen.
    Open,
    /// Parked at the bottom with only the handle strip showing.
    Closed,
}

impl RestState {
    /// Returns `true` for [`RestState::Open`].
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The open and closed rest frames, in container coordinates.
///
/// Both frames have the container's size; only their top edge differs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RestFrames {
    /// Frame of the open position.
    pub open: Rect,
    /// Frame of the closed position.
    pub closed: Rect,
}

impl RestFrames {
    /// Compute rest frames for a container and a handle strip of `handle_height`.
    ///
    /// The closed frame leaves the handle strip plus `config.margin` visible at the
    /// bottom of the container; the open frame starts at `config.open_y`.
    pub fn compute(
        container: Rect,
        handle_height: f64,
        config: &PanelConfig,
    ) -> Result<Self, InitError> {
        let width = container.width();
        let height = container.height();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(InitError::InvalidContainer { width, height });
        }
        if !(handle_height.is_finite() && handle_height >= 0.0) {
            return Err(InitError::InvalidHandleHeight(handle_height));
        }
        let size = (width, height);
        let closed_y = height - handle_height - config.margin;
        Ok(Self {
            open: Rect::from_origin_size(Point::new(0.0, config.open_y), size),
            closed: Rect::from_origin_size(Point::new(0.0, closed_y), size),
        })
    }

    /// The frame for a rest state.
    pub fn frame(&self, state: RestState) -> Rect {
        match state {
            RestState::Open => self.open,
            RestState::Closed => self.closed,
        }
    }

    /// Top edge of the open frame.
    pub fn open_y(&self) -> f64 {
        self.open.y0
    }

    /// Top edge of the closed frame.
    pub fn closed_y(&self) -> f64 {
        self.closed.y0
    }
}
