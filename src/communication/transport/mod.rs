//! Record transports
//!
//! Three independent channels carry the same encoded record:
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │   SwingTransmitter   │
//!                 └───┬──────────────┬───┘
//!                     │              │
//!                     ▼              ▼
//!               LocalLink      NetworkLink ──► BrokerLink
//!             (serial line)   (association)    (publish)
//! ```
//!
//! The broker session can only exist on top of an associated network, so
//! `BrokerLink::connect` refuses to run otherwise.
//!
//! # State machines
//!
//! | Link          | States                                      |
//! |---------------|---------------------------------------------|
//! | `LocalLink`   | Uninitialized → Ready                       |
//! | `NetworkLink` | Disconnected → Associating → Associated     |
//! | `BrokerLink`  | Disconnected ⇄ Connected                    |

pub mod broker;
pub mod local;
pub mod network;

pub use broker::{BrokerLink, BrokerState};
pub use local::{LinkState, LocalLink};
pub use network::{NetworkLink, NetworkState};

use core::fmt;

/// Where records are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmissionMode {
    /// Local serial link only
    #[default]
    Local,
    /// Broker only
    Network,
    /// Both; delivery succeeds if either channel accepts the record
    Both,
}

impl TransmissionMode {
    pub fn uses_local(self) -> bool {
        matches!(self, TransmissionMode::Local | TransmissionMode::Both)
    }

    pub fn uses_network(self) -> bool {
        matches!(self, TransmissionMode::Network | TransmissionMode::Both)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransmissionMode::Local => "local",
            TransmissionMode::Network => "network",
            TransmissionMode::Both => "both",
        }
    }

    /// Parse `local`, `network` or `both` (case-insensitive)
    pub fn parse(text: &str) -> Option<Self> {
        [
            TransmissionMode::Local,
            TransmissionMode::Network,
            TransmissionMode::Both,
        ]
        .into_iter()
        .find(|mode| mode.as_str().eq_ignore_ascii_case(text))
    }
}

/// Transport error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Channel has not been brought up, or its prerequisite is missing
    NotReady,

    /// Required settings are empty (no SSID, no broker address)
    NotConfigured,

    /// Underlying driver reported a failure
    IoError,

    /// Association did not complete within its budget
    Timeout,

    /// Session was lost or refused
    Disconnected,

    /// Record could not be encoded
    Encoding,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotReady => write!(f, "Transport not ready"),
            TransportError::NotConfigured => write!(f, "Transport not configured"),
            TransportError::IoError => write!(f, "I/O error"),
            TransportError::Timeout => write!(f, "Operation timed out"),
            TransportError::Disconnected => write!(f, "Transport disconnected"),
            TransportError::Encoding => write!(f, "Record encoding failed"),
        }
    }
}

/// Association polling budget
///
/// The radio is polled up to `attempts` times, `interval_ms` apart, so the
/// worst case blocks for `attempts × interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectBudget {
    pub attempts: u32,
    pub interval_ms: u32,
}

impl ConnectBudget {
    /// Worst-case blocking time (ms)
    pub fn timeout_ms(&self) -> u64 {
        self.attempts as u64 * self.interval_ms as u64
    }
}

impl Default for ConnectBudget {
    fn default() -> Self {
        Self {
            attempts: 30,
            interval_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_channels() {
        assert!(TransmissionMode::Local.uses_local());
        assert!(!TransmissionMode::Local.uses_network());
        assert!(!TransmissionMode::Network.uses_local());
        assert!(TransmissionMode::Network.uses_network());
        assert!(TransmissionMode::Both.uses_local());
        assert!(TransmissionMode::Both.uses_network());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(TransmissionMode::parse("local"), Some(TransmissionMode::Local));
        assert_eq!(TransmissionMode::parse("Network"), Some(TransmissionMode::Network));
        assert_eq!(TransmissionMode::parse("BOTH"), Some(TransmissionMode::Both));
        assert_eq!(TransmissionMode::parse("dual"), None);
    }

    #[test]
    fn test_default_budget() {
        let budget = ConnectBudget::default();
        assert_eq!(budget.attempts, 30);
        assert_eq!(budget.interval_ms, 500);
        assert_eq!(budget.timeout_ms(), 15_000);
    }
}
