//! Local serial link
//!
//! One record per line, terminated with `\r\n`.

use super::TransportError;
use crate::platform::traits::UartInterface;
use crate::{log_info, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Uninitialized,
    Ready,
}

pub struct LocalLink<U> {
    uart: U,
    state: LinkState,
}

impl<U: UartInterface> LocalLink<U> {
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            state: LinkState::Uninitialized,
        }
    }

    /// Configure the line speed and mark the link ready
    ///
    /// A rejected baud rate is logged and the link stays at whatever speed
    /// the driver was already using; opening always succeeds.
    pub fn open(&mut self, baud: u32) {
        if let Err(e) = self.uart.set_baud_rate(baud) {
            log_warn!("Serial baud {} rejected: {}", baud, e);
        }
        self.state = LinkState::Ready;
        log_info!("Serial link ready at {} baud", baud);
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LinkState::Ready
    }

    /// Write `line` followed by `\r\n`
    pub fn send_line(&mut self, line: &str) -> Result<(), TransportError> {
        if self.state != LinkState::Ready {
            return Err(TransportError::NotReady);
        }
        self.uart
            .write(line.as_bytes())
            .and_then(|_| self.uart.write(b"\r\n"))
            .map_err(|e| {
                log_warn!("Serial write failed: {}", e);
                TransportError::IoError
            })?;
        Ok(())
    }

    pub fn uart(&self) -> &U {
        &self.uart
    }

    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }
}
