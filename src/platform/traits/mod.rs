//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod broker;
pub mod radio;
pub mod timer;
pub mod uart;

// Re-export trait interfaces
pub use broker::BrokerClient;
pub use radio::WifiRadio;
pub use timer::TimerInterface;
pub use uart::{UartConfig, UartInterface};
