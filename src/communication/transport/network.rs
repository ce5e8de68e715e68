//! Network association
//!
//! `connect` blocks the caller while it polls the radio, up to the
//! [`ConnectBudget`]. It runs once at startup; later losses and recoveries
//! are noticed by [`NetworkLink::check_link`] from the maintenance tick.

use super::{ConnectBudget, TransportError};
use crate::parameters::NetworkCredentials;
use crate::platform::traits::{TimerInterface, WifiRadio};
use crate::{log_debug, log_info, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetworkState {
    Disconnected,
    Associating,
    Associated,
}

pub struct NetworkLink<R> {
    radio: R,
    state: NetworkState,
}

impl<R: WifiRadio> NetworkLink<R> {
    pub fn new(radio: R) -> Self {
        Self {
            radio,
            state: NetworkState::Disconnected,
        }
    }

    /// Associate with the configured access point
    ///
    /// Polls the radio before each wait, so an immediately available network
    /// costs no delay. After `budget.attempts` waits one final poll decides.
    ///
    /// # Errors
    ///
    /// - `NotConfigured`: SSID is empty, radio untouched
    /// - `IoError`: radio refused to start association
    /// - `Timeout`: budget exhausted
    pub fn connect<T: TimerInterface>(
        &mut self,
        credentials: &NetworkCredentials,
        budget: ConnectBudget,
        timer: &mut T,
    ) -> Result<(), TransportError> {
        if !credentials.is_configured() {
            log_warn!("No SSID configured, skipping network");
            return Err(TransportError::NotConfigured);
        }

        log_info!("Associating with '{}'", credentials.ssid.as_str());
        if let Err(e) = self
            .radio
            .begin(credentials.ssid.as_str(), credentials.password.as_str())
        {
            log_warn!("Radio refused association: {}", e);
            self.state = NetworkState::Disconnected;
            return Err(TransportError::IoError);
        }
        self.state = NetworkState::Associating;

        for attempt in 0..budget.attempts {
            if self.radio.is_associated() {
                self.on_associated(attempt);
                return Ok(());
            }
            if let Err(e) = timer.delay_ms(budget.interval_ms) {
                log_warn!("Association delay failed: {}", e);
            }
        }
        if self.radio.is_associated() {
            self.on_associated(budget.attempts);
            return Ok(());
        }

        self.state = NetworkState::Disconnected;
        log_warn!("Association timed out after {} ms", budget.timeout_ms());
        Err(TransportError::Timeout)
    }

    fn on_associated(&mut self, waits: u32) {
        self.state = NetworkState::Associated;
        log_info!("Network associated after {} waits", waits);
    }

    /// Refresh the association state from the radio
    ///
    /// Returns whether the link is associated. A dropped link comes back as
    /// soon as the radio re-associates on its own; the join loop in
    /// [`NetworkLink::connect`] is never re-run from here.
    pub fn check_link(&mut self) -> bool {
        let associated = self.radio.is_associated();
        match (self.state, associated) {
            (NetworkState::Associated, false) => {
                log_warn!("Network association lost");
                self.state = NetworkState::Disconnected;
            }
            (NetworkState::Disconnected, true) => {
                log_info!("Network association restored");
                self.state = NetworkState::Associated;
            }
            _ => {}
        }
        self.state == NetworkState::Associated
    }

    pub fn disconnect(&mut self) {
        self.radio.disconnect();
        self.state = NetworkState::Disconnected;
        log_debug!("Network disconnected");
    }

    pub fn state(&self) -> NetworkState {
        self.state
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }
}
