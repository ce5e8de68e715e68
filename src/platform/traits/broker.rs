//! Publish/subscribe broker client trait
//!
//! Mirrors the small surface an embedded MQTT client exposes: point it at a
//! server, connect with a client id, publish, and service it once per loop.

use crate::platform::Result;

pub trait BrokerClient {
    /// Set the broker address used by the next `connect`
    fn set_server(&mut self, address: &str, port: u16);

    /// Single connect attempt
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Network(NetworkError::ConnectRefused)` when the
    /// broker cannot be reached or rejects the client.
    fn connect(&mut self, client_id: &str) -> Result<()>;

    /// Whether the client believes its session is alive
    fn is_connected(&self) -> bool;

    /// Publish `payload` on `topic`
    fn publish(&mut self, topic: &str, payload: &[u8]) -> Result<()>;

    /// Non-blocking keep-alive and inbound processing
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Network(NetworkError::NotConnected)` when the
    /// session was lost.
    fn poll(&mut self) -> Result<()>;
}
