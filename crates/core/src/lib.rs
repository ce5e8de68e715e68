//! swing_sensor_core - Pure no_std motion logic for the swing sensor
//!
//! This crate contains the platform-agnostic parts of the acquisition
//! pipeline. Everything here can be tested on host without feature flags,
//! hardware, or a time driver.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **No I/O**: Sensors, clocks and transports live in the firmware crate
//!
//! # Modules
//!
//! - [`imu`]: Raw readings, bias offsets and the bias accumulator
//! - [`sample`]: Bias-corrected, timestamped samples
//! - [`swing`]: Threshold swing detection and peak tracking
//! - [`record`]: Structured record shared by every transport
//! - [`export`]: CSV log rows and content-type lookup for the log server
//! - [`context`]: Equipment/operator labels and user control signals
//! - [`motion`]: Uncorrected dead-reckoning estimate

#![no_std]

pub mod context;
pub mod export;
pub mod imu;
pub mod motion;
pub mod record;
pub mod sample;
pub mod swing;

pub use imu::{CalibrationOffsets, GravityHandling, RawReading};
pub use record::{RecordLabels, SwingRecord};
pub use sample::Sample;
