//! Fixed-rate loop pacing
//!
//! A [`Ticker`] holds the next deadline and sleeps until it on each call to
//! [`Ticker::next`]. When the loop body overruns, the deadline is re-anchored
//! to "now + period" instead of firing a burst of catch-up ticks.

use crate::platform::traits::TimerInterface;

pub struct Ticker {
    expires_at_ms: u64,
    pub period_ms: u32,
}

impl Ticker {
    /// Start a ticker whose first deadline is one period from now
    pub fn every<T: TimerInterface>(timer: &T, period_ms: u32) -> Self {
        Self {
            expires_at_ms: timer.now_ms() + period_ms as u64,
            period_ms,
        }
    }

    /// Wait for the next deadline
    ///
    /// Returns the time elapsed since the previous deadline (ms). A value
    /// above `period_ms` means the loop body overran.
    pub fn next<T: TimerInterface>(&mut self, timer: &mut T) -> u64 {
        let now = timer.now_ms();
        let period = self.period_ms as u64;
        let elapsed = (now + period).saturating_sub(self.expires_at_ms);

        if now >= self.expires_at_ms {
            self.expires_at_ms = now + period;
        } else {
            let remaining = (self.expires_at_ms - now) as u32;
            if let Err(e) = timer.delay_ms(remaining) {
                crate::log_warn!("Ticker delay failed: {}", e);
            }
            self.expires_at_ms += period;
        }
        elapsed
    }
}
