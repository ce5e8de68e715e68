//! Mock UART implementation for testing

use crate::platform::{
    error::UartError,
    traits::{UartConfig, UartInterface},
    PlatformError, Result,
};
use std::string::{String, ToString};
use std::vec::Vec;

/// Mock UART implementation
///
/// Collects everything written so tests can inspect the emitted lines.
/// Write and baud-rate failures can be injected.
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8>,
    fail_writes: bool,
    reject_baud: bool,
}

impl MockUart {
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            fail_writes: false,
            reject_baud: false,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Transmitted data split on `\r\n`, without the terminators
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.tx_buffer)
            .split("\r\n")
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect()
    }

    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Make every subsequent write fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make `set_baud_rate` fail
    pub fn set_reject_baud(&mut self, reject: bool) {
        self.reject_baud = reject;
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl Default for MockUart {
    fn default() -> Self {
        Self::new(UartConfig::default())
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(PlatformError::Uart(UartError::WriteFailed));
        }
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        if self.reject_baud {
            return Err(PlatformError::Uart(UartError::InvalidBaudRate));
        }
        self.config.baud_rate = baud;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
