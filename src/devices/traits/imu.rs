//! IMU Sensor Trait
//!
//! Device-independent interface for the six-axis sensor feeding the
//! acquisition loop. Readings are uncorrected; bias removal happens in
//! [`crate::subsystems::acquisition`].
//!
//! ## Units
//!
//! - Accelerometer: g
//! - Gyroscope: deg/s
//!
//! ## Usage
//!
//! ```ignore
//! use swing_sensor::devices::traits::ImuSensor;
//!
//! fn sample<I: ImuSensor>(imu: &mut I) {
//!     imu.init()?;
//!     let raw = imu.read_raw()?;
//!     // raw.accel, raw.gyro
//! }
//! ```

use core::fmt;
use swing_sensor_core::RawReading;

/// IMU error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// I2C/SPI communication failed
    BusError,

    /// Driver not initialized
    NotInitialized,

    /// Data validation failed (e.g., stuck sensor)
    InvalidData,
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::BusError => write!(f, "IMU bus error"),
            ImuError::NotInitialized => write!(f, "IMU not initialized"),
            ImuError::InvalidData => write!(f, "IMU returned invalid data"),
        }
    }
}

/// Six-axis IMU
pub trait ImuSensor {
    /// Bring the sensor up
    ///
    /// # Errors
    ///
    /// Returns `ImuError::BusError` if the device does not answer.
    fn init(&mut self) -> Result<(), ImuError>;

    /// Read one raw accelerometer + gyroscope sample
    fn read_raw(&mut self) -> Result<RawReading, ImuError>;
}
