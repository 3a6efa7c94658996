// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable Panel Gesture: pointer drag tracking and pan recognition.
//!
//! This crate provides the small state machines that sit between raw pointer
//! input and the draggable panel:
//!
//! - [`drag`]: Track a drag with movement deltas, total offsets and velocity
//! - [`pan`]: Recognize a pan (began/changed/ended/other) from down/move/up/cancel
//!
//! Neither assumes a UI framework or event loop. Callers feed positions in
//! container coordinates along with millisecond timestamps, and forward the
//! resulting [`pan::PanEvent`]s to whatever consumes them.
//!
//! ## Pan recognition
//!
//! ```rust
//! use kurbo::Point;
//! use draggable_panel_gesture::pan::{PanPhase, PanRecognizer};
//!
//! let mut pan = PanRecognizer::new();
//!
//! // A tap is not a pan.
//! pan.on_down(Point::new(10.0, 10.0), 0);
//! assert!(pan.on_up(Point::new(10.0, 10.0), 80).is_none());
//!
//! // Moving after the down begins one.
//! pan.on_down(Point::new(10.0, 10.0), 100);
//! let event = pan.on_move(Point::new(10.0, 30.0), 110).unwrap();
//! assert_eq!(event.phase, PanPhase::Began);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pan;

pub use pan::{PanEvent, PanPhase, PanRecognizer};
