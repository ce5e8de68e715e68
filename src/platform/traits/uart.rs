//! UART interface trait
//!
//! Write side of the local serial link. Records are only ever sent, so the
//! trait has no receive path.

use crate::platform::Result;

/// Default link speed (bits per second)
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

/// UART interface trait
///
/// # Safety Invariants
///
/// - Only one owner per UART peripheral instance
/// - No concurrent access to the same UART from multiple contexts
pub trait UartInterface {
    /// Write data to UART
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Set UART baud rate
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidBaudRate)` if the baud rate
    /// cannot be achieved with the current clock configuration.
    fn set_baud_rate(&mut self, baud: u32) -> Result<()>;

    /// Block until all pending transmit data has been sent
    fn flush(&mut self) -> Result<()>;
}
