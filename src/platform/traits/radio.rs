//! Wireless radio trait
//!
//! Station-mode association only. `begin` starts association and returns
//! immediately; callers poll `is_associated` at their own pace.

use crate::platform::Result;

pub trait WifiRadio {
    /// Start associating with an access point
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Network(NetworkError::AssociationRejected)` if
    /// the radio refuses the request outright.
    fn begin(&mut self, ssid: &str, password: &str) -> Result<()>;

    /// Non-blocking association status
    fn is_associated(&mut self) -> bool;

    /// Drop the association
    fn disconnect(&mut self);
}
