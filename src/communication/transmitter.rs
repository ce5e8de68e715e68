//! Swing record transmitter
//!
//! Encodes each sample once and hands the same bytes to every channel the
//! transmission mode selects. In [`TransmissionMode::Both`] both channels
//! are always attempted and delivery succeeds if either accepts the record.
//!
//! # Maintenance
//!
//! [`SwingTransmitter::maintain`] runs once per loop tick:
//!
//! - network lost → broker marked disconnected, nothing else
//! - network back after a loss → link marked associated again, same tick
//!   continues as "network up"
//! - network up, broker down → exactly one reconnect attempt
//! - network up, broker up → one non-blocking service call
//!
//! A connected session is never reconnected, so calling `maintain`
//! repeatedly is harmless. Counters saturate instead of wrapping.

use super::transport::{
    BrokerLink, BrokerState, ConnectBudget, LocalLink, NetworkLink, NetworkState,
    TransmissionMode, TransportError,
};
use crate::parameters::{BrokerParams, NetworkCredentials};
use crate::platform::traits::{BrokerClient, TimerInterface, UartInterface, WifiRadio};
use crate::{log_debug, log_warn};
use swing_sensor_core::record::{EncodedRecord, SWING_TOPIC};
use swing_sensor_core::{RecordLabels, Sample, SwingRecord};

/// Transmitter statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransmitterStats {
    /// Records written to the serial link
    pub local_sent: u32,
    /// Records published to the broker
    pub network_sent: u32,
    /// Individual channel failures
    pub send_errors: u32,
    /// Samples no channel accepted
    pub dropped: u32,
    /// Broker reconnects made by `maintain`
    pub reconnect_attempts: u32,
}

pub struct SwingTransmitter<U, R, B> {
    local: LocalLink<U>,
    network: NetworkLink<R>,
    broker: BrokerLink<B>,
    stats: TransmitterStats,
}

impl<U, R, B> SwingTransmitter<U, R, B>
where
    U: UartInterface,
    R: WifiRadio,
    B: BrokerClient,
{
    pub fn new(uart: U, radio: R, broker: B) -> Self {
        Self {
            local: LocalLink::new(uart),
            network: NetworkLink::new(radio),
            broker: BrokerLink::new(broker),
            stats: TransmitterStats::default(),
        }
    }

    pub fn open_local_link(&mut self, baud: u32) {
        self.local.open(baud);
    }

    /// Associate with the access point, blocking up to `budget`
    pub fn connect_network<T: TimerInterface>(
        &mut self,
        credentials: &NetworkCredentials,
        budget: ConnectBudget,
        timer: &mut T,
    ) -> Result<(), TransportError> {
        self.network.connect(credentials, budget, timer)
    }

    /// One broker connect attempt; refused unless the network is associated
    pub fn connect_broker(&mut self, params: &BrokerParams) -> Result<(), TransportError> {
        self.broker.connect(self.network.state(), params)
    }

    /// Encode `sample` and send it on the channels `mode` selects
    ///
    /// # Errors
    ///
    /// - `Encoding` if the record does not fit its buffer; nothing is sent
    /// - otherwise the error of the last channel tried, when none succeeded
    pub fn send(
        &mut self,
        sample: &Sample,
        labels: &RecordLabels,
        mode: TransmissionMode,
    ) -> Result<(), TransportError> {
        let record = SwingRecord::from_sample(sample, labels)
            .encode()
            .map_err(|_| {
                log_warn!("Record for {} ms exceeds buffer", sample.timestamp_ms);
                self.stats.dropped = self.stats.dropped.saturating_add(1);
                TransportError::Encoding
            })?;

        let result = match mode {
            TransmissionMode::Local => self.send_local(&record),
            TransmissionMode::Network => self.send_network(&record),
            TransmissionMode::Both => {
                let local = self.send_local(&record);
                let network = self.send_network(&record);
                local.or(network)
            }
        };

        if let Err(e) = result {
            self.stats.dropped = self.stats.dropped.saturating_add(1);
            log_debug!("Sample {} dropped: {}", sample.timestamp_ms, e);
        }
        result
    }

    fn send_local(&mut self, record: &EncodedRecord) -> Result<(), TransportError> {
        let result = self.local.send_line(record.as_str());
        self.count(result, |stats| {
            stats.local_sent = stats.local_sent.saturating_add(1)
        });
        result
    }

    fn send_network(&mut self, record: &EncodedRecord) -> Result<(), TransportError> {
        let result = self.broker.publish(SWING_TOPIC, record.as_str());
        self.count(result, |stats| {
            stats.network_sent = stats.network_sent.saturating_add(1)
        });
        result
    }

    fn count(
        &mut self,
        result: Result<(), TransportError>,
        on_ok: impl FnOnce(&mut TransmitterStats),
    ) {
        match result {
            Ok(()) => on_ok(&mut self.stats),
            Err(_) => self.stats.send_errors = self.stats.send_errors.saturating_add(1),
        }
    }

    /// Keep the broker session alive; see the module docs
    pub fn maintain(&mut self) {
        if !self.network.check_link() {
            if self.broker.is_connected() {
                log_warn!("Network down, broker session dropped");
                self.broker.mark_disconnected();
            }
            return;
        }

        match self.broker.state() {
            BrokerState::Connected => {
                let _ = self.broker.service();
            }
            BrokerState::Disconnected if self.broker.is_configured() => {
                self.stats.reconnect_attempts = self.stats.reconnect_attempts.saturating_add(1);
                let _ = self.broker.reconnect();
            }
            BrokerState::Disconnected => {}
        }
    }

    pub fn stats(&self) -> TransmitterStats {
        self.stats
    }

    pub fn local(&self) -> &LocalLink<U> {
        &self.local
    }

    pub fn local_mut(&mut self) -> &mut LocalLink<U> {
        &mut self.local
    }

    pub fn network(&self) -> &NetworkLink<R> {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut NetworkLink<R> {
        &mut self.network
    }

    pub fn network_state(&self) -> NetworkState {
        self.network.state()
    }

    pub fn broker(&self) -> &BrokerLink<B> {
        &self.broker
    }

    pub fn broker_mut(&mut self) -> &mut BrokerLink<B> {
        &mut self.broker
    }
}
