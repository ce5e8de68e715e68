//! Platform abstraction layer
//!
//! Every hardware or network dependency the firmware touches goes through
//! one of the traits here. Board support implements them; host tests use the
//! mock implementations.

pub mod error;
pub mod traits;

#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{NetworkError, PlatformError, Result, TimerError, UartError};
pub use traits::{BrokerClient, TimerInterface, UartInterface, WifiRadio};
