//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Time only moves when something delays or calls [`MockTimer::advance_ms`],
/// so a test that waits 15 s of association timeout finishes instantly.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delay_calls: u32,
}

impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward without counting a delay
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_us = self.now_us.saturating_add(ms * 1000);
    }

    /// Number of delay calls made so far
    pub fn delay_calls(&self) -> u32 {
        self.delay_calls
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.saturating_add(us as u64);
        self.delay_calls += 1;
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
