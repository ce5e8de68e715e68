//! Network and broker settings
//!
//! # Security Note
//!
//! The WiFi password is compiled into the firmware image and can be
//! extracted from the binary.

use heapless::String;

/// Maximum SSID length (IEEE 802.11 standard)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WiFi password length (WPA2 standard)
pub const MAX_PASSWORD_LEN: usize = 63;

/// Maximum broker host length
pub const MAX_ADDRESS_LEN: usize = 64;

/// Maximum client id length (MQTT 3.1)
pub const MAX_CLIENT_ID_LEN: usize = 23;

/// Default broker port
pub const DEFAULT_BROKER_PORT: u16 = 1883;

/// Client id used when none is configured
pub const DEFAULT_CLIENT_ID: &str = "swing-sensor";

/// Access point credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCredentials {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
}

impl NetworkCredentials {
    /// Build credentials, truncating nothing
    ///
    /// Returns `None` if either value exceeds its limit.
    pub fn new(ssid: &str, password: &str) -> Option<Self> {
        Some(Self {
            ssid: String::try_from(ssid).ok()?,
            password: String::try_from(password).ok()?,
        })
    }

    pub fn from_build_env() -> Self {
        Self::new(env!("WIFI_SSID"), env!("WIFI_PASSWORD")).unwrap_or_else(|| {
            crate::log_warn!("WIFI_SSID or WIFI_PASSWORD too long, network disabled");
            Self::default()
        })
    }

    /// Empty SSID means no network is configured
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

/// Broker endpoint and client identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerParams {
    pub address: String<MAX_ADDRESS_LEN>,
    pub port: u16,
    /// Fixed for the lifetime of the device
    pub client_id: String<MAX_CLIENT_ID_LEN>,
}

impl BrokerParams {
    /// Returns `None` if `address` exceeds [`MAX_ADDRESS_LEN`]
    pub fn new(address: &str, port: u16) -> Option<Self> {
        Some(Self {
            address: String::try_from(address).ok()?,
            port,
            ..Self::default()
        })
    }

    pub fn from_build_env() -> Self {
        let port = env!("MQTT_PORT").parse::<u16>().unwrap_or_else(|_| {
            crate::log_warn!("Invalid MQTT_PORT, using {}", DEFAULT_BROKER_PORT);
            DEFAULT_BROKER_PORT
        });
        Self::new(env!("MQTT_BROKER"), port).unwrap_or_else(|| {
            crate::log_warn!("MQTT_BROKER too long, broker disabled");
            Self::default()
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.address.is_empty()
    }
}

impl Default for BrokerParams {
    fn default() -> Self {
        let mut client_id = String::new();
        let _ = client_id.push_str(DEFAULT_CLIENT_ID);
        Self {
            address: String::new(),
            port: DEFAULT_BROKER_PORT,
            client_id,
        }
    }
}
