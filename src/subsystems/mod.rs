//! Subsystems
//!
//! - [`acquisition`]: bias calibration and corrected sample reads

pub mod acquisition;
