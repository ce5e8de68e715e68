//! Broker session
//!
//! A session needs an associated network. Each connect is a single attempt
//! with the configured client id; retries come from the maintenance tick,
//! one per tick at most.

use super::{network::NetworkState, TransportError};
use crate::parameters::BrokerParams;
use crate::platform::traits::BrokerClient;
use crate::{log_info, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrokerState {
    Disconnected,
    Connected,
}

pub struct BrokerLink<B> {
    client: B,
    state: BrokerState,
    params: Option<BrokerParams>,
}

impl<B: BrokerClient> BrokerLink<B> {
    pub fn new(client: B) -> Self {
        Self {
            client,
            state: BrokerState::Disconnected,
            params: None,
        }
    }

    /// Point the client at `params` and make one connect attempt
    ///
    /// # Errors
    ///
    /// - `NotReady`: network is not associated; client untouched
    /// - `NotConfigured`: broker address is empty
    /// - `Disconnected`: broker refused the connect
    pub fn connect(
        &mut self,
        network: NetworkState,
        params: &BrokerParams,
    ) -> Result<(), TransportError> {
        if network != NetworkState::Associated {
            log_warn!("Broker connect skipped, network not associated");
            return Err(TransportError::NotReady);
        }
        if !params.is_configured() {
            log_warn!("No broker address configured");
            return Err(TransportError::NotConfigured);
        }

        self.client.set_server(params.address.as_str(), params.port);
        self.params = Some(params.clone());
        self.attempt()
    }

    /// One more attempt with the remembered parameters
    ///
    /// # Errors
    ///
    /// `NotConfigured` if [`BrokerLink::connect`] never ran.
    pub fn reconnect(&mut self) -> Result<(), TransportError> {
        if self.params.is_none() {
            return Err(TransportError::NotConfigured);
        }
        self.attempt()
    }

    fn attempt(&mut self) -> Result<(), TransportError> {
        let Some(params) = self.params.as_ref() else {
            return Err(TransportError::NotConfigured);
        };

        match self.client.connect(params.client_id.as_str()) {
            Ok(()) => {
                self.state = BrokerState::Connected;
                log_info!(
                    "Broker connected to {}:{}",
                    params.address.as_str(),
                    params.port
                );
                Ok(())
            }
            Err(e) => {
                self.state = BrokerState::Disconnected;
                log_warn!("Broker connect failed: {}", e);
                Err(TransportError::Disconnected)
            }
        }
    }

    /// Publish one payload
    ///
    /// Refused locally when not connected. A failure that leaves the client
    /// without a session moves the link to `Disconnected`.
    pub fn publish(&mut self, topic: &str, payload: &str) -> Result<(), TransportError> {
        if self.state != BrokerState::Connected {
            return Err(TransportError::NotReady);
        }
        if let Err(e) = self.client.publish(topic, payload.as_bytes()) {
            log_warn!("Publish failed: {}", e);
            if !self.client.is_connected() {
                self.mark_disconnected();
                return Err(TransportError::Disconnected);
            }
            return Err(TransportError::IoError);
        }
        Ok(())
    }

    /// One non-blocking service tick for a live session
    pub fn service(&mut self) -> Result<(), TransportError> {
        if self.state != BrokerState::Connected {
            return Err(TransportError::NotReady);
        }
        if let Err(e) = self.client.poll() {
            log_warn!("Broker session lost: {}", e);
            self.mark_disconnected();
            return Err(TransportError::Disconnected);
        }
        Ok(())
    }

    /// Drop to `Disconnected` without touching the client
    pub fn mark_disconnected(&mut self) {
        self.state = BrokerState::Disconnected;
    }

    pub fn state(&self) -> BrokerState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == BrokerState::Connected
    }

    /// Whether a connect has supplied parameters for reconnects
    pub fn is_configured(&self) -> bool {
        self.params.is_some()
    }

    pub fn client(&self) -> &B {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut B {
        &mut self.client
    }
}
