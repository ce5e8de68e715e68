#![cfg_attr(not(test), no_std)]

//! swing_sensor - Wearable swing sensor firmware library
//!
//! Samples a six-axis IMU at a fixed rate, applies static bias offsets,
//! flags swing onsets and ships every sample as a structured record over a
//! local serial link, a network broker, or both.
//!
//! The pure data model lives in `swing_sensor_core`; this crate adds the
//! hardware seams, the transports and the acquisition loop.

#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer (timer, serial, radio, broker client)
pub mod platform;

// Sensor and display seams
pub mod devices;

// Logging and loop pacing
pub mod core;

// Build-time configuration
pub mod parameters;

// Calibration and sampling
pub mod subsystems;

// Serial / broker transports
pub mod communication;

// Acquisition loop
pub mod pipeline;

pub use swing_sensor_core as model;
