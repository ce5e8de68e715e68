//! Dead-reckoning position estimate
//!
//! Double integration of corrected acceleration, with no gravity removal,
//! no orientation and no drift correction. Any residual bias grows
//! quadratically in the position, so after a few seconds the estimate is
//! meaningless. It is kept for the live trajectory sketch and is never used
//! for detection or transport decisions. Reset it at the start of each swing
//! with [`DeadReckoning::reset`].

use nalgebra::Vector3;

use crate::sample::Sample;

/// Standard gravity (m/s² per g)
pub const STANDARD_GRAVITY_MS2: f32 = 9.80665;

/// Velocity (m/s) and position (m) integrated from acceleration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadReckoning {
    pub velocity: Vector3<f32>,
    pub position: Vector3<f32>,
    last_timestamp_ms: Option<u64>,
}

impl DeadReckoning {
    pub fn new() -> Self {
        Self {
            velocity: Vector3::zeros(),
            position: Vector3::zeros(),
            last_timestamp_ms: None,
        }
    }

    /// Integrate one sample
    ///
    /// The first sample after construction or reset only seeds the clock.
    /// A timestamp that does not advance contributes nothing.
    pub fn update(&mut self, sample: &Sample) {
        let Some(last) = self.last_timestamp_ms.replace(sample.timestamp_ms) else {
            return;
        };

        let dt = sample.timestamp_ms.saturating_sub(last) as f32 / 1000.0;
        if dt <= 0.0 {
            return;
        }

        let accel_ms2 = sample.accel * STANDARD_GRAVITY_MS2;
        self.velocity += accel_ms2 * dt;
        self.position += self.velocity * dt;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DeadReckoning {
    fn default() -> Self {
        Self::new()
    }
}
