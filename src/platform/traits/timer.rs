//! Timer interface trait
//!
//! Monotonic clock plus blocking delays. The acquisition loop, calibration
//! burst and network association all pace themselves through this trait, so
//! host tests run on simulated time.

use crate::platform::Result;

/// Timer interface trait
///
/// # Invariants
///
/// - Monotonic time source (never goes backwards)
/// - Delays block for at least the requested duration
pub trait TimerInterface {
    /// Block for at least `us` microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Microseconds since platform initialization
    fn now_us(&self) -> u64;

    /// Milliseconds since platform initialization
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
