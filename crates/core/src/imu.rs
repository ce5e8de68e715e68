//! Raw IMU readings and static bias estimation
//!
//! Bias offsets are estimated by averaging a burst of readings taken while
//! the device is held still. The accumulator here only does the arithmetic;
//! pacing the burst and talking to the sensor is the firmware's job.
//!
//! Gravity handling is decided once, when the offsets are computed:
//! with [`GravityHandling::Subtract`] the vertical (Z) accelerometer offset
//! is `mean - 1.0 g`, so a level device at rest reads `(0, 0, 1)` after
//! correction. With [`GravityHandling::KeepRaw`] the plain mean is used and
//! a level device reads `(0, 0, 0)`. Per-sample correction never looks at
//! gravity again.

use nalgebra::Vector3;

/// Number of static readings averaged by one calibration pass
pub const CALIBRATION_SAMPLES: u32 = 100;

/// Delay between calibration readings (ms)
pub const CALIBRATION_INTERVAL_MS: u32 = 10;

/// Gravity expressed in accelerometer units (g)
pub const STANDARD_GRAVITY_G: f32 = 1.0;

/// One uncorrected six-axis reading
///
/// - `accel`: g
/// - `gyro`: deg/s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawReading {
    pub accel: Vector3<f32>,
    pub gyro: Vector3<f32>,
}

impl RawReading {
    pub fn new(accel: Vector3<f32>, gyro: Vector3<f32>) -> Self {
        Self { accel, gyro }
    }
}

impl Default for RawReading {
    fn default() -> Self {
        Self {
            accel: Vector3::zeros(),
            gyro: Vector3::zeros(),
        }
    }
}

/// How the vertical accelerometer axis is treated during calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityHandling {
    /// Z offset is `mean - 1 g`; corrected Z reads +1 g at rest
    #[default]
    Subtract,
    /// Z offset is the plain mean; corrected Z reads 0 at rest
    KeepRaw,
}

/// Per-axis bias offsets subtracted from every raw reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationOffsets {
    /// Accelerometer bias (g)
    pub accel: Vector3<f32>,
    /// Gyroscope bias (deg/s)
    pub gyro: Vector3<f32>,
}

impl CalibrationOffsets {
    /// Offsets used before the first calibration pass completes
    pub fn zero() -> Self {
        Self {
            accel: Vector3::zeros(),
            gyro: Vector3::zeros(),
        }
    }

    /// Subtract the offsets component-wise
    ///
    /// Returns `(accel, gyro)`. No clamping or scaling is applied.
    pub fn correct(&self, raw: &RawReading) -> (Vector3<f32>, Vector3<f32>) {
        (raw.accel - self.accel, raw.gyro - self.gyro)
    }
}

impl Default for CalibrationOffsets {
    fn default() -> Self {
        Self::zero()
    }
}

/// Running per-axis sums for a calibration burst
#[derive(Debug, Clone, Copy)]
pub struct BiasAccumulator {
    accel_sum: Vector3<f32>,
    gyro_sum: Vector3<f32>,
    count: u32,
}

impl BiasAccumulator {
    pub fn new() -> Self {
        Self {
            accel_sum: Vector3::zeros(),
            gyro_sum: Vector3::zeros(),
            count: 0,
        }
    }

    /// Add one static reading
    pub fn push(&mut self, reading: &RawReading) {
        self.accel_sum += reading.accel;
        self.gyro_sum += reading.gyro;
        self.count += 1;
    }

    /// Number of readings accumulated so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Turn the sums into offsets
    ///
    /// An empty accumulator yields zero offsets regardless of `gravity`,
    /// since there is nothing to subtract gravity from.
    pub fn finish(&self, gravity: GravityHandling) -> CalibrationOffsets {
        if self.count == 0 {
            return CalibrationOffsets::zero();
        }

        let n = self.count as f32;
        let mut accel = self.accel_sum / n;
        let gyro = self.gyro_sum / n;

        if gravity == GravityHandling::Subtract {
            accel.z -= STANDARD_GRAVITY_G;
        }

        CalibrationOffsets { accel, gyro }
    }
}

impl Default for BiasAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate offsets from a slice of static readings
pub fn estimate_offsets(readings: &[RawReading], gravity: GravityHandling) -> CalibrationOffsets {
    let mut acc = BiasAccumulator::new();
    for reading in readings {
        acc.push(reading);
    }
    acc.finish(gravity)
}
