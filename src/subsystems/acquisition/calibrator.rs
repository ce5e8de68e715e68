//! Static bias calibration
//!
//! Averages a burst of readings taken while the device is held still. The
//! device must not move for the whole burst; nothing here checks that.

use crate::devices::traits::ImuSensor;
use crate::platform::traits::TimerInterface;
use crate::{log_error, log_info, log_warn};
use swing_sensor_core::imu::{
    BiasAccumulator, CalibrationOffsets, GravityHandling, CALIBRATION_INTERVAL_MS,
    CALIBRATION_SAMPLES,
};

/// Calibration burst settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibrator {
    /// Readings to average
    pub samples: u32,
    /// Delay after each reading (ms)
    pub interval_ms: u32,
    pub gravity: GravityHandling,
}

impl Calibrator {
    /// 100 readings at 10 ms with the given gravity handling
    pub fn new(gravity: GravityHandling) -> Self {
        Self {
            samples: CALIBRATION_SAMPLES,
            interval_ms: CALIBRATION_INTERVAL_MS,
            gravity,
        }
    }

    /// Run one calibration burst
    ///
    /// Failed reads are skipped and the mean is taken over the rest. If no
    /// read succeeds the result is zero offsets. This never fails.
    pub fn run<I, T>(&self, imu: &mut I, timer: &mut T) -> CalibrationOffsets
    where
        I: ImuSensor,
        T: TimerInterface,
    {
        log_info!(
            "Calibrating: {} samples at {} ms",
            self.samples,
            self.interval_ms
        );

        let mut acc = BiasAccumulator::new();
        let mut failures = 0u32;

        for _ in 0..self.samples {
            match imu.read_raw() {
                Ok(reading) => acc.push(&reading),
                Err(e) => {
                    failures += 1;
                    log_warn!("Calibration read failed: {}", e);
                }
            }
            if let Err(e) = timer.delay_ms(self.interval_ms) {
                log_warn!("Calibration delay failed: {}", e);
            }
        }

        if acc.count() == 0 {
            log_error!(
                "Calibration got no readings ({} failures), using zero offsets",
                failures
            );
        } else if failures > 0 {
            log_warn!(
                "Calibration used {} of {} readings",
                acc.count(),
                self.samples
            );
        }

        let offsets = acc.finish(self.gravity);
        log_info!(
            "Calibration done: accel=({}, {}, {}) gyro=({}, {}, {})",
            offsets.accel.x,
            offsets.accel.y,
            offsets.accel.z,
            offsets.gyro.x,
            offsets.gyro.y,
            offsets.gyro.z
        );
        offsets
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new(GravityHandling::default())
    }
}
