//! IMU acquisition
//!
//! Turns raw sensor reads into bias-corrected, timestamped [`Sample`]s.
//!
//! ## Flow
//!
//! ```text
//! ImuSensor ──read_raw──► SampleReader ──► Sample { timestamp_ms, accel, gyro }
//!     ▲                        │
//!     └──── Calibrator ────────┘  (offsets, replaced on recalibration)
//! ```
//!
//! Offsets start at zero, so samples read before the first calibration pass
//! are raw values. Recalibration runs synchronously inside the loop and
//! blocks sampling for its whole duration (100 × 10 ms by default).
//!
//! [`Sample`]: swing_sensor_core::Sample

pub mod calibrator;
pub mod reader;

pub use calibrator::Calibrator;
pub use reader::SampleReader;
