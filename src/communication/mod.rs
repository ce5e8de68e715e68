//! Communication
//!
//! - [`transport`]: the local serial link, the network association and the
//!   broker session, each with its own state machine
//! - [`transmitter`]: fans one record out to the links selected by the
//!   transmission mode and keeps the broker session alive

pub mod transmitter;
pub mod transport;

pub use transmitter::{SwingTransmitter, TransmitterStats};
pub use transport::{TransmissionMode, TransportError};
