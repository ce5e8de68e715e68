//! Display implementations
//!
//! [`NullDisplay`] is for headless builds. [`RecordingDisplay`] keeps what it
//! was asked to show so tests can assert on prompts and plotted samples.

use crate::devices::traits::StatusDisplay;
use swing_sensor_core::context::AxisMode;
use swing_sensor_core::Sample;

/// Display that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl StatusDisplay for NullDisplay {
    fn show_message(&mut self, _message: &str) {}

    fn plot_sample(&mut self, _axis_mode: AxisMode, _sample: &Sample) {}
}

#[cfg(any(test, feature = "mock"))]
pub use recording::RecordingDisplay;

#[cfg(any(test, feature = "mock"))]
mod recording {
    use super::*;
    use std::string::{String, ToString};
    use std::vec::Vec;

    /// Display that records messages and plot calls
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        messages: Vec<String>,
        plotted: usize,
        last_axis_mode: Option<AxisMode>,
    }

    impl RecordingDisplay {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> &[String] {
            &self.messages
        }

        pub fn last_message(&self) -> Option<&str> {
            self.messages.last().map(String::as_str)
        }

        pub fn plotted(&self) -> usize {
            self.plotted
        }

        pub fn last_axis_mode(&self) -> Option<AxisMode> {
            self.last_axis_mode
        }
    }

    impl StatusDisplay for RecordingDisplay {
        fn show_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn plot_sample(&mut self, axis_mode: AxisMode, _sample: &Sample) {
            self.plotted += 1;
            self.last_axis_mode = Some(axis_mode);
        }
    }
}
