//! Device abstractions
//!
//! The IMU and the status display are reached through the traits in
//! [`traits`]. Board drivers implement them; [`imu::mock`] and
//! [`display`] provide host-side implementations.

pub mod display;
pub mod imu;
pub mod traits;

pub use traits::{ImuError, ImuSensor, StatusDisplay};
