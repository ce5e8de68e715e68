//! Mock broker client implementation for testing

use crate::platform::{error::NetworkError, traits::BrokerClient, PlatformError, Result};
use std::string::{String, ToString};
use std::vec::Vec;

/// Message captured by [`MockBroker::publish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub topic: String,
    pub payload: String,
}

/// Mock broker client
///
/// Records the server, every connect attempt and every published message.
#[derive(Debug)]
pub struct MockBroker {
    accept_connect: bool,
    fail_publish: bool,
    connected: bool,
    server: Option<(String, u16)>,
    client_ids: Vec<String>,
    published: Vec<PublishedMessage>,
    polls: u32,
}

impl MockBroker {
    /// Broker that accepts every connect
    pub fn accepting() -> Self {
        Self {
            accept_connect: true,
            fail_publish: false,
            connected: false,
            server: None,
            client_ids: Vec::new(),
            published: Vec::new(),
            polls: 0,
        }
    }

    /// Broker that refuses every connect
    pub fn refusing() -> Self {
        Self {
            accept_connect: false,
            ..Self::accepting()
        }
    }

    pub fn set_accept_connect(&mut self, accept: bool) {
        self.accept_connect = accept;
    }

    pub fn set_fail_publish(&mut self, fail: bool) {
        self.fail_publish = fail;
    }

    /// Simulate the broker closing the session
    pub fn drop_connection(&mut self) {
        self.connected = false;
    }

    pub fn server(&self) -> Option<(&str, u16)> {
        self.server.as_ref().map(|(addr, port)| (addr.as_str(), *port))
    }

    pub fn connect_attempts(&self) -> usize {
        self.client_ids.len()
    }

    /// Client ids passed to each connect attempt
    pub fn client_ids(&self) -> &[String] {
        &self.client_ids
    }

    pub fn published(&self) -> &[PublishedMessage] {
        &self.published
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl Default for MockBroker {
    fn default() -> Self {
        Self::accepting()
    }
}

impl BrokerClient for MockBroker {
    fn set_server(&mut self, address: &str, port: u16) {
        self.server = Some((address.to_string(), port));
    }

    fn connect(&mut self, client_id: &str) -> Result<()> {
        self.client_ids.push(client_id.to_string());
        if self.accept_connect && self.server.is_some() {
            self.connected = true;
            Ok(())
        } else {
            self.connected = false;
            Err(PlatformError::Network(NetworkError::ConnectRefused))
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn publish(&mut self, topic: &str, payload: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(PlatformError::Network(NetworkError::NotConnected));
        }
        if self.fail_publish {
            return Err(PlatformError::Network(NetworkError::PublishFailed));
        }
        self.published.push(PublishedMessage {
            topic: topic.to_string(),
            payload: String::from_utf8_lossy(payload).to_string(),
        });
        Ok(())
    }

    fn poll(&mut self) -> Result<()> {
        self.polls += 1;
        if self.connected {
            Ok(())
        } else {
            Err(PlatformError::Network(NetworkError::NotConnected))
        }
    }
}
