// Copyright 2025 the Draggable Panel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::E;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::{MIN_DAMPING_RATIO, SpringConfig};

/// `ln(1000)`: the envelope decays to 0.1% of the travel by the end of the duration.
const SETTLE_DECAY: f64 = 6.907_755_278_982_137;

/// Closed-form damped spring mapping elapsed time to progress.
///
/// Progress is `0.0` at `t = 0`, may overshoot `1.0` for under-damped springs,
/// and is exactly `1.0` from `t = duration` onwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringCurve {
    duration: f64,
    damping_ratio: f64,
    initial_velocity: f64,
    /// Undamped angular frequency, rad/s.
    omega: f64,
}

impl SpringCurve {
    /// Build a curve from a configuration.
    pub fn new(config: SpringConfig) -> Self {
        let duration = if config.duration.is_finite() {
            config.duration.max(0.0)
        } else {
            0.0
        };
        let damping_ratio = config.damping_ratio.max(MIN_DAMPING_RATIO);
        let initial_velocity = if config.initial_velocity.is_finite() {
            config.initial_velocity
        } else {
            0.0
        };
        // Slowest decay rate per unit omega; the envelope is e^(-rate * omega * t).
        let rate = if damping_ratio < 1.0 {
            damping_ratio
        } else {
            1.0 / (damping_ratio + overdamped_root(damping_ratio))
        };
        let omega = if duration > 0.0 {
            SETTLE_DECAY / (rate * duration)
        } else {
            0.0
        };
        Self {
            duration,
            damping_ratio,
            initial_velocity,
            omega,
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Effective damping ratio.
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Returns `true` once `t` has reached the end of the curve.
    pub fn is_finished(&self, t: f64) -> bool {
        t >= self.duration || t.is_nan()
    }

    /// Progress at `t` seconds after the start.
    pub fn progress(&self, t: f64) -> f64 {
        if self.is_finished(t) {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }
        1.0 + self.displacement(t)
    }

    /// Signed distance from the target, starting at `-1` with velocity `initial_velocity`.
    fn displacement(&self, t: f64) -> f64 {
        let z = self.damping_ratio;
        let w = self.omega;
        let v0 = self.initial_velocity;
        if z < 1.0 {
            let wd = w * (1.0 - z * z).sqrt();
            let b = (v0 - z * w) / wd;
            exp(-z * w * t) * (b * (wd * t).sin() - (wd * t).cos())
        } else if z == 1.0 {
            exp(-w * t) * ((v0 - w) * t - 1.0)
        } else {
            let s = overdamped_root(z);
            // z - s cancels for large z; 1 / (z + s) is the same value.
            let r1 = -w / (z + s);
            let r2 = -w * (z + s);
            let c1 = (v0 + r2) / (r1 - r2);
            let c2 = -1.0 - c1;
            c1 * exp(r1 * t) + c2 * exp(r2 * t)
        }
    }
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

/// `sqrt(z^2 - 1)` without overflowing `z^2`.
fn overdamped_root(z: f64) -> f64 {
    (z - 1.0).sqrt() * (z + 1.0).sqrt()
}

fn exp(x: f64) -> f64 {
    E.powf(x)
}

/// Elapsed-time bookkeeping for one run of a [`SpringCurve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringTimeline {
    curve: SpringCurve,
    elapsed: f64,
}

impl SpringTimeline {
    /// Start a timeline at `t = 0`.
    pub fn new(curve: SpringCurve) -> Self {
        Self {
            curve,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new progress. Negative or
    /// non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.progress()
    }

    /// Current progress.
    pub fn progress(&self) -> f64 {
        self.curve.progress(self.elapsed)
    }

    /// Seconds elapsed since the start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns `true` once the curve has run its full duration.
    pub fn is_finished(&self) -> bool {
        self.curve.is_finished(self.elapsed)
    }

    /// The curve being followed.
    pub fn curve(&self) -> &SpringCurve {
        &self.curve
    }
}
