//! Embassy-based timer implementation.
//!
//! Uses `embassy_time::Instant` for the clock and `block_for` for delays.
//! The acquisition loop is synchronous, so delays busy-wait on the time
//! driver rather than yielding to an executor.

use crate::platform::{traits::TimerInterface, Result};
use embassy_time::{block_for, Duration, Instant};

/// Embassy-based timer using the Embassy time driver.
///
/// # Example
///
/// ```ignore
/// use swing_sensor::platform::embassy::EmbassyTimer;
/// use swing_sensor::platform::traits::TimerInterface;
///
/// let mut timer = EmbassyTimer;
/// timer.delay_ms(20)?;
/// let now = timer.now_ms();
/// ```
#[derive(Clone, Copy, Default)]
pub struct EmbassyTimer;

impl TimerInterface for EmbassyTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        block_for(Duration::from_micros(us as u64));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        block_for(Duration::from_millis(ms as u64));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }

    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
