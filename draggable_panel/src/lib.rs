// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable Panel: a headless panel dragged vertically between open and closed.
//!
//! A [`DraggablePanel`] sits in a container. Closed, it is parked near the
//! bottom with only its handle strip (plus a small margin) showing. Dragging the
//! handle moves the panel's top edge with the pointer; releasing it snaps the
//! panel open or closed with a damped spring, depending on where and which way
//! the pointer was moving when it let go. See [`policy`] for the exact rules.
//!
//! The crate is framework-agnostic:
//! - Geometry is plain [`kurbo::Rect`]s in container coordinates.
//! - Input is [`PanEvent`]s, produced by
//!   [`PanRecognizer`](draggable_panel_gesture::PanRecognizer) or by any other
//!   gesture source that reports phase, location and velocity.
//! - Time is supplied by the host through [`DraggablePanel::advance`]; the panel
//!   never reads a clock.
//!
//! ## Lifecycle
//!
//! 1) Create the panel with a [`PanelConfig`].
//! 2) Once the container is laid out, call [`DraggablePanel::initialize`] with its
//!    bounds and the handle height. Until then every other operation is a no-op.
//! 3) Route handle pans to [`DraggablePanel::handle_pan`], step animations with
//!    [`DraggablePanel::advance`], and draw [`DraggablePanel::frame`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use draggable_panel::{DraggablePanel, PanEvent, PanPhase, PanelEvent, RestState};
//!
//! let mut panel = DraggablePanel::default();
//! panel.initialize(Rect::new(0.0, 0.0, 390.0, 800.0), 40.0).unwrap();
//! assert_eq!(panel.frame().unwrap().y0, 730.0);
//!
//! // Drag the handle up to y = 400 and flick upward.
//! let up = Vec2::new(0.0, -5.0);
//! panel.handle_pan(&PanEvent::new(PanPhase::Began, Point::new(20.0, 700.0), up));
//! panel.handle_pan(&PanEvent::new(PanPhase::Changed, Point::new(20.0, 400.0), up));
//! let snap = panel
//!     .handle_pan(&PanEvent::new(PanPhase::Ended, Point::new(20.0, 400.0), up))
//!     .unwrap();
//! assert_eq!(snap.target, RestState::Open);
//!
//! // The open state is only committed when the spring lands.
//! assert!(!panel.is_open());
//! let mut settled = None;
//! while panel.is_animating() {
//!     settled = panel.advance(1.0 / 60.0);
//! }
//! assert_eq!(settled, Some(PanelEvent::Settled(RestState::Open)));
//! assert!(panel.is_open());
//! assert_eq!(panel.frame().unwrap().y0, 60.0);
//! ```
//!
//! ## Superseded snaps
//!
//! Each snap is stamped with the panel's generation, which advances whenever a
//! drag begins or another snap starts. A drag that begins while a snap is in
//! flight drops the snap, and [`DraggablePanel::complete`] ignores tickets from
//! older generations, so a late completion never moves the panel out from under
//! the pointer or flips [`DraggablePanel::is_open`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod error;
mod geometry;
mod panel;
pub mod policy;

pub use config::{DEFAULT_MARGIN, DEFAULT_OPEN_Y, PanelConfig};
pub use error::InitError;
pub use geometry::{RestFrames, RestState};
pub use panel::{DragPhase, DraggablePanel, PanelEvent, Snap};

pub use draggable_panel_gesture::{PanEvent, PanPhase};
pub use draggable_panel_spring::SpringConfig;
