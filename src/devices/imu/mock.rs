//! Mock IMU implementation for testing
//!
//! Provides a configurable mock IMU that implements `ImuSensor` trait.
//! Useful for unit testing calibration and the acquisition loop without
//! hardware.
//!
//! ## Usage
//!
//! ```ignore
//! use swing_sensor::devices::imu::MockImu;
//!
//! // Level device, no motion
//! let mut imu = MockImu::at_rest();
//!
//! // Queue a swing spike, then fall back to rest
//! imu.push_reading(RawReading::new(Vector3::new(2.5, 0.0, 1.0), Vector3::zeros()));
//! ```

use crate::devices::traits::{ImuError, ImuSensor};
use nalgebra::Vector3;
use swing_sensor_core::RawReading;

/// Queue depth for preset readings
const QUEUE_CAPACITY: usize = 128;

/// Mock IMU for testing
///
/// Returns queued readings in order, then the default reading forever.
pub struct MockImu {
    /// Queue of readings to return
    readings: heapless::Deque<RawReading, QUEUE_CAPACITY>,

    /// Default reading when queue is empty
    default_reading: RawReading,

    /// `init` fails when set
    init_fails: bool,

    initialized: bool,

    /// Number of upcoming reads that fail with `BusError`
    failing_reads: u32,

    /// Successful reads so far
    read_count: u32,
}

impl MockImu {
    /// Mock returning `reading` whenever the queue is empty
    pub fn with_default_reading(reading: RawReading) -> Self {
        Self {
            readings: heapless::Deque::new(),
            default_reading: reading,
            init_fails: false,
            initialized: false,
            failing_reads: 0,
            read_count: 0,
        }
    }

    /// Level device at rest: 1 g on Z, no rotation
    pub fn at_rest() -> Self {
        Self::with_default_reading(RawReading::new(
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::zeros(),
        ))
    }

    /// Mock whose `init` always fails
    pub fn absent() -> Self {
        Self {
            init_fails: true,
            ..Self::at_rest()
        }
    }

    /// Queue a reading; returns `false` if the queue is full
    pub fn push_reading(&mut self, reading: RawReading) -> bool {
        self.readings.push_back(reading).is_ok()
    }

    pub fn set_default_reading(&mut self, reading: RawReading) {
        self.default_reading = reading;
    }

    /// Make the next `count` reads fail
    pub fn fail_next_reads(&mut self, count: u32) {
        self.failing_reads = count;
    }

    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    pub fn pending_readings(&self) -> usize {
        self.readings.len()
    }
}

impl ImuSensor for MockImu {
    fn init(&mut self) -> Result<(), ImuError> {
        if self.init_fails {
            return Err(ImuError::BusError);
        }
        self.initialized = true;
        Ok(())
    }

    fn read_raw(&mut self) -> Result<RawReading, ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }
        if self.failing_reads > 0 {
            self.failing_reads -= 1;
            return Err(ImuError::BusError);
        }
        self.read_count += 1;
        Ok(self.readings.pop_front().unwrap_or(self.default_reading))
    }
}
