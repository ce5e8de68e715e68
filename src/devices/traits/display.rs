//! Status display trait
//!
//! Small screen used for prompts ("Calibrating...", club changes) and a
//! live plot of the selected axis pair.

use swing_sensor_core::context::AxisMode;
use swing_sensor_core::Sample;

pub trait StatusDisplay {
    /// Replace the status line
    fn show_message(&mut self, message: &str);

    /// Plot one corrected sample on the selected axis pair
    fn plot_sample(&mut self, axis_mode: AxisMode, sample: &Sample);
}
