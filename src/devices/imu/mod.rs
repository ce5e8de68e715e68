//! IMU Drivers
//!
//! This module contains IMU sensor drivers implementing the `ImuSensor` trait.
//!
//! ## Available Drivers
//!
//! - `mock`: Mock IMU for testing (always available)
//!
//! ## Usage
//!
//! ```ignore
//! use swing_sensor::devices::imu::MockImu;
//! use swing_sensor::devices::traits::ImuSensor;
//!
//! let mut imu = MockImu::at_rest();
//! let raw = imu.read_raw()?;
//! ```

pub mod mock;

pub use mock::MockImu;
