//! Device traits

pub mod display;
pub mod imu;

pub use display::StatusDisplay;
pub use imu::{ImuError, ImuSensor};
