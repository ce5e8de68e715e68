//! Mock platform implementation for testing
//!
//! In-memory stand-ins for the platform traits, driven by simulated time.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use swing_sensor::platform::mock::MockUart;
//! use swing_sensor::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.write(b"{}\r\n").unwrap();
//! assert_eq!(uart.lines(), vec!["{}".to_string()]);
//! ```

#![cfg(any(test, feature = "mock"))]

mod broker;
mod radio;
mod timer;
mod uart;

pub use broker::{MockBroker, PublishedMessage};
pub use radio::MockRadio;
pub use timer::MockTimer;
pub use uart::MockUart;
