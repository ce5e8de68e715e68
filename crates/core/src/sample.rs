//! Bias-corrected motion sample

use nalgebra::Vector3;

use crate::imu::{CalibrationOffsets, RawReading};

/// One corrected motion observation
///
/// Immutable once built. Downstream stages (swing detection, transport)
/// only ever read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Milliseconds since boot (monotonic, non-decreasing)
    pub timestamp_ms: u64,
    /// Corrected acceleration (g)
    pub accel: Vector3<f32>,
    /// Corrected angular rate (deg/s)
    pub gyro: Vector3<f32>,
}

impl Sample {
    pub fn new(timestamp_ms: u64, accel: Vector3<f32>, gyro: Vector3<f32>) -> Self {
        Self {
            timestamp_ms,
            accel,
            gyro,
        }
    }

    /// Build a sample by applying `offsets` to `raw`
    pub fn corrected(raw: &RawReading, offsets: &CalibrationOffsets, timestamp_ms: u64) -> Self {
        let (accel, gyro) = offsets.correct(raw);
        Self::new(timestamp_ms, accel, gyro)
    }

    /// Euclidean norm of the acceleration vector (g)
    pub fn accel_magnitude(&self) -> f32 {
        self.accel.norm()
    }

    /// Euclidean norm of the angular-rate vector (deg/s)
    pub fn gyro_magnitude(&self) -> f32 {
        self.gyro.norm()
    }
}
