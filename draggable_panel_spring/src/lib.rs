// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable Panel Spring: fixed-duration damped spring curves.
//!
//! A [`SpringCurve`] maps elapsed time to progress along a transition. It is a
//! closed-form damped harmonic oscillator released from `0.0` toward `1.0`,
//! tuned from a duration, a damping ratio and an initial velocity so that it has
//! settled when the duration runs out. Under-damped curves overshoot `1.0`
//! slightly before settling; the progress at and after the duration is exactly
//! `1.0`, so callers can land on their target without residue.
//!
//! There is no clock or frame scheduling here. Callers own time and step a
//! [`SpringTimeline`] from whatever loop they already run.
//!
//! ```rust
//! use draggable_panel_spring::{SpringConfig, SpringCurve, SpringTimeline};
//!
//! let curve = SpringCurve::new(SpringConfig::default());
//! let mut timeline = SpringTimeline::new(curve);
//!
//! let mut progress = 0.0;
//! while !timeline.is_finished() {
//!     progress = timeline.advance(1.0 / 60.0);
//! }
//! assert_eq!(progress, 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod curve;

pub use config::{
    DEFAULT_DAMPING_RATIO, DEFAULT_DURATION, DEFAULT_INITIAL_VELOCITY, MIN_DAMPING_RATIO,
    SpringConfig,
};
pub use curve::{SpringCurve, SpringTimeline};
