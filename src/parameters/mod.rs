//! Build-time configuration
//!
//! The device has no parameter storage, so every setting is baked in at
//! build time. `build.rs` exports the environment variables below as
//! `rustc-env` values, falling back to defaults when unset:
//!
//! | Variable        | Default  | Meaning                              |
//! |-----------------|----------|--------------------------------------|
//! | `WIFI_SSID`     | empty    | Access point; empty skips the network|
//! | `WIFI_PASSWORD` | empty    | WPA2 passphrase                      |
//! | `MQTT_BROKER`   | empty    | Broker host or address               |
//! | `MQTT_PORT`     | `1883`   | Broker port                          |
//! | `TX_MODE`       | `local`  | `local`, `network` or `both`         |
//! | `GRAVITY`       | `subtract` | `subtract` or `raw`                |

pub mod network;

pub use network::{BrokerParams, NetworkCredentials};

use crate::communication::transport::TransmissionMode;
use crate::platform::traits::uart::DEFAULT_BAUD_RATE;
use swing_sensor_core::GravityHandling;

/// Complete sensor configuration
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Local serial link speed
    pub link_baud: u32,
    pub network: NetworkCredentials,
    pub broker: BrokerParams,
    /// Where records go
    pub mode: TransmissionMode,
    /// How calibration treats the vertical axis
    pub gravity: GravityHandling,
    /// Flag swing onsets while sampling
    pub swing_detection: bool,
}

impl SensorConfig {
    /// Configuration baked in by `build.rs`
    pub fn from_build_env() -> Self {
        let mode = TransmissionMode::parse(env!("TX_MODE")).unwrap_or_else(|| {
            crate::log_warn!("Unknown TX_MODE, falling back to local");
            TransmissionMode::Local
        });
        let gravity = parse_gravity(env!("GRAVITY")).unwrap_or_default();

        Self {
            link_baud: DEFAULT_BAUD_RATE,
            network: NetworkCredentials::from_build_env(),
            broker: BrokerParams::from_build_env(),
            mode,
            gravity,
            swing_detection: true,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            link_baud: DEFAULT_BAUD_RATE,
            network: NetworkCredentials::default(),
            broker: BrokerParams::default(),
            mode: TransmissionMode::Local,
            gravity: GravityHandling::Subtract,
            swing_detection: true,
        }
    }
}

fn parse_gravity(text: &str) -> Option<GravityHandling> {
    if text.eq_ignore_ascii_case("subtract") {
        Some(GravityHandling::Subtract)
    } else if text.eq_ignore_ascii_case("raw") {
        Some(GravityHandling::KeepRaw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SensorConfig::default();
        assert_eq!(config.link_baud, 115_200);
        assert_eq!(config.mode, TransmissionMode::Local);
        assert_eq!(config.gravity, GravityHandling::Subtract);
        assert!(config.swing_detection);
        assert_eq!(config.broker.port, 1883);
    }

    #[test]
    fn test_build_env_config_is_usable() {
        // build.rs always exports every variable, so this cannot fail
        let config = SensorConfig::from_build_env();
        assert_eq!(config.link_baud, 115_200);
        assert!(!config.broker.client_id.is_empty());
    }

    #[test]
    fn test_parse_gravity() {
        assert_eq!(parse_gravity("subtract"), Some(GravityHandling::Subtract));
        assert_eq!(parse_gravity("RAW"), Some(GravityHandling::KeepRaw));
        assert_eq!(parse_gravity("sideways"), None);
    }
}
