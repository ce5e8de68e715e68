//! Mock radio implementation for testing

use crate::platform::{error::NetworkError, traits::WifiRadio, PlatformError, Result};
use std::string::{String, ToString};

/// Mock radio
///
/// Associates after a configurable number of status polls, or never.
#[derive(Debug, Default)]
pub struct MockRadio {
    associate_after: Option<u32>,
    reject_begin: bool,
    associating: bool,
    associated: bool,
    polls: u32,
    begin_calls: u32,
    ssid: Option<String>,
}

impl MockRadio {
    /// Associates on the first poll after `begin`
    pub fn responsive() -> Self {
        Self::after_polls(1)
    }

    /// Never associates
    pub fn unresponsive() -> Self {
        Self::default()
    }

    /// Associates on the `polls`-th status poll after `begin`
    pub fn after_polls(polls: u32) -> Self {
        Self {
            associate_after: Some(polls),
            ..Self::default()
        }
    }

    /// Make `begin` fail outright
    pub fn rejecting() -> Self {
        Self {
            reject_begin: true,
            ..Self::default()
        }
    }

    /// Simulate the access point going away
    pub fn drop_link(&mut self) {
        self.associated = false;
        self.associating = false;
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn begin_calls(&self) -> u32 {
        self.begin_calls
    }

    /// SSID passed to the last `begin`
    pub fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref()
    }
}

impl WifiRadio for MockRadio {
    fn begin(&mut self, ssid: &str, _password: &str) -> Result<()> {
        self.begin_calls += 1;
        if self.reject_begin {
            return Err(PlatformError::Network(NetworkError::AssociationRejected));
        }
        self.ssid = Some(ssid.to_string());
        self.associating = true;
        self.associated = false;
        self.polls = 0;
        Ok(())
    }

    fn is_associated(&mut self) -> bool {
        if self.associating && !self.associated {
            self.polls += 1;
            if self.associate_after.is_some_and(|n| self.polls >= n) {
                self.associated = true;
                self.associating = false;
            }
        }
        self.associated
    }

    fn disconnect(&mut self) {
        self.drop_link();
    }
}
