// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host screen for the draggable panel.
//!
//! [`HostScreen`] plays the part of the screen that owns the panel: it holds the
//! container bounds, initializes the panel once at load, captures pointers that
//! go down on the handle, and steps the panel's spring each frame.
//!
//! Run:
//! - `cargo run -p draggable_panel_demos --example host_screen -- --drag 740,600,400`

use draggable_panel::{DraggablePanel, InitError, PanelConfig, PanelEvent, Snap};
use draggable_panel_gesture::PanRecognizer;
use kurbo::{Point, Rect};

/// A screen hosting one draggable panel.
#[derive(Clone, Debug)]
pub struct HostScreen {
    container: Rect,
    handle_height: f64,
    panel: DraggablePanel,
    pan: PanRecognizer,
}

impl HostScreen {
    /// Create a screen with the given container and handle height. The panel is
    /// attached but not initialized until [`load`](Self::load).
    pub fn new(container: Rect, handle_height: f64, config: PanelConfig) -> Self {
        Self {
            container,
            handle_height,
            panel: DraggablePanel::new(config),
            pan: PanRecognizer::new(),
        }
    }

    /// Initialize the panel against the current container.
    pub fn load(&mut self) -> Result<(), InitError> {
        self.panel.initialize(self.container, self.handle_height)?;
        log::info!(
            "panel loaded in {}x{} container",
            self.container.width(),
            self.container.height()
        );
        Ok(())
    }

    /// The hosted panel.
    pub fn panel(&self) -> &DraggablePanel {
        &self.panel
    }

    /// The hosted panel, mutably, for programmatic open/close.
    pub fn panel_mut(&mut self) -> &mut DraggablePanel {
        &mut self.panel
    }

    /// Current container bounds. Pointer positions are relative to its top left.
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Resize the container. The panel keeps its rest frames but uses the new
    /// center when deciding still releases.
    pub fn resize(&mut self, container: Rect) {
        self.container = container;
        self.panel.set_container_bounds(container);
    }

    /// Pointer down. Returns `true` if the handle captured it.
    pub fn pointer_down(&mut self, pos: Point, time_ms: u64) -> bool {
        if !self.panel.handle_contains(pos) {
            log::trace!("pointer down at {pos:?} missed the handle");
            return false;
        }
        self.pan.on_down(pos, time_ms);
        true
    }

    /// Pointer move. Ignored unless the handle captured the pointer.
    pub fn pointer_move(&mut self, pos: Point, time_ms: u64) -> Option<Snap> {
        let event = self.pan.on_move(pos, time_ms)?;
        self.panel.handle_pan(&event)
    }

    /// Pointer up. Returns the snap the release started, if any.
    pub fn pointer_up(&mut self, pos: Point, time_ms: u64) -> Option<Snap> {
        let event = self.pan.on_up(pos, time_ms)?;
        let snap = self.panel.handle_pan(&event);
        if let Some(snap) = snap {
            log::info!(
                "released at y = {} with velocity {}; snapping {:?}",
                pos.y,
                event.velocity.y,
                snap.target
            );
        }
        snap
    }

    /// Pointer cancelled by the platform.
    pub fn pointer_cancel(&mut self, pos: Point) {
        if let Some(event) = self.pan.on_cancel(pos) {
            self.panel.handle_pan(&event);
        }
    }

    /// Step one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Option<PanelEvent> {
        let event = self.panel.advance(dt);
        if let Some(PanelEvent::Settled(state)) = event {
            log::info!("panel settled {state:?}");
        }
        event
    }
}
