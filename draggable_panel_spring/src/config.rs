// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default transition duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.5;

/// Default damping ratio: under-damped, a moderate bounce.
pub const DEFAULT_DAMPING_RATIO: f64 = 0.6;

/// Default initial velocity, as a fraction of the travel distance per second.
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.8;

/// Smallest damping ratio a curve will use; lower values are raised to this.
pub const MIN_DAMPING_RATIO: f64 = 0.05;

/// Parameters of a fixed-duration spring.
///
/// The spring is tuned so its oscillation has decayed to a negligible residue by
/// the end of `duration`, whatever the damping ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig {
    /// Total duration in seconds. Zero or negative means "jump to the end".
    pub duration: f64,
    /// Damping ratio. `< 1.0` bounces, `1.0` is critically damped, `> 1.0` is sluggish.
    pub damping_ratio: f64,
    /// Initial velocity as a fraction of the travel distance per second.
    pub initial_velocity: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            damping_ratio: DEFAULT_DAMPING_RATIO,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
        }
    }
}

impl SpringConfig {
    /// Set the duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the damping ratio.
    #[must_use]
    pub fn with_damping_ratio(mut self, damping_ratio: f64) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    /// Set the initial velocity.
    #[must_use]
    pub fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }
}
