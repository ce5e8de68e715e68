//! Corrected sample reads

use crate::devices::traits::{ImuError, ImuSensor};
use crate::platform::traits::TimerInterface;
use crate::subsystems::acquisition::Calibrator;
use crate::log_debug;
use swing_sensor_core::{CalibrationOffsets, Sample};

/// Owns the IMU and the current bias offsets
pub struct SampleReader<I> {
    imu: I,
    offsets: CalibrationOffsets,
    calibrated: bool,
    last_timestamp_ms: u64,
}

impl<I: ImuSensor> SampleReader<I> {
    /// Reader with zero offsets
    pub fn new(imu: I) -> Self {
        Self {
            imu,
            offsets: CalibrationOffsets::zero(),
            calibrated: false,
            last_timestamp_ms: 0,
        }
    }

    /// Initialize the underlying sensor
    pub fn init(&mut self) -> Result<(), ImuError> {
        self.imu.init()
    }

    /// Read one sample and apply the current offsets
    ///
    /// Timestamps never go backwards, even if the clock does.
    ///
    /// # Errors
    ///
    /// Propagates the sensor's `ImuError`; no sample is produced.
    pub fn read<T: TimerInterface>(&mut self, clock: &T) -> Result<Sample, ImuError> {
        let raw = self.imu.read_raw()?;
        let timestamp_ms = clock.now_ms().max(self.last_timestamp_ms);
        self.last_timestamp_ms = timestamp_ms;
        Ok(Sample::corrected(&raw, &self.offsets, timestamp_ms))
    }

    /// Run a calibration burst and replace the offsets
    pub fn recalibrate<T: TimerInterface>(
        &mut self,
        calibrator: &Calibrator,
        timer: &mut T,
    ) -> CalibrationOffsets {
        self.offsets = calibrator.run(&mut self.imu, timer);
        self.calibrated = true;
        log_debug!("Offsets replaced");
        self.offsets
    }

    pub fn offsets(&self) -> CalibrationOffsets {
        self.offsets
    }

    /// Whether at least one calibration pass has completed
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    pub fn imu(&self) -> &I {
        &self.imu
    }

    pub fn imu_mut(&mut self) -> &mut I {
        &mut self.imu
    }
}
