// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use draggable_panel_spring::SpringConfig;

/// Gap left below the handle strip when the panel is closed.
pub const DEFAULT_MARGIN: f64 = 30.0;

/// Top edge of the panel when it is open, in container coordinates.
pub const DEFAULT_OPEN_Y: f64 = 60.0;

/// Tunables for a [`DraggablePanel`](crate::DraggablePanel).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Gap below the handle strip in the closed position.
    pub margin: f64,
    /// Top edge of the open position.
    pub open_y: f64,
    /// Spring used for snap transitions.
    pub spring: SpringConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            open_y: DEFAULT_OPEN_Y,
            spring: SpringConfig::default(),
        }
    }
}

impl PanelConfig {
    /// Set the closed-position margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the open-position top edge.
    #[must_use]
    pub fn with_open_y(mut self, open_y: f64) -> Self {
        self.open_y = open_y;
        self
    }

    /// Set the snap spring.
    #[must_use]
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }
}
