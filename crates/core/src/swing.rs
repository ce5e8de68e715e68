//! Swing detection
//!
//! A swing start is declared when the corrected acceleration magnitude is
//! strictly above [`SWING_THRESHOLD_G`]. A magnitude exactly equal to the
//! threshold is not a swing.

use crate::sample::Sample;

/// Acceleration magnitude that marks the start of a swing (g)
pub const SWING_THRESHOLD_G: f32 = 2.0;

/// Stateless threshold test
pub fn is_swing_start(sample: &Sample) -> bool {
    sample.accel_magnitude() > SWING_THRESHOLD_G
}

/// Rising-edge filter over [`is_swing_start`]
///
/// Reports `true` only for the first sample of each run of
/// above-threshold samples, so one physical swing produces one event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwingEdge {
    above: bool,
}

impl SwingEdge {
    pub fn new() -> Self {
        Self { above: false }
    }

    /// Feed one sample, returns `true` on a below→above transition
    pub fn update(&mut self, sample: &Sample) -> bool {
        let above = is_swing_start(sample);
        let started = above && !self.above;
        self.above = above;
        started
    }

    /// Whether the last sample was above threshold
    pub fn in_swing(&self) -> bool {
        self.above
    }

    pub fn reset(&mut self) {
        self.above = false;
    }
}

/// Peak magnitudes seen since the last reset
///
/// The host-side simulator derives club-head speed from the peak angular
/// rate and impact force from the peak acceleration of a swing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwingPeaks {
    /// Largest acceleration magnitude (g)
    pub max_accel: f32,
    /// Largest angular-rate magnitude (deg/s)
    pub max_angular_rate: f32,
    /// Number of samples folded in
    pub samples: u32,
}

impl SwingPeaks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: &Sample) {
        self.max_accel = self.max_accel.max(sample.accel_magnitude());
        self.max_angular_rate = self.max_angular_rate.max(sample.gyro_magnitude());
        self.samples = self.samples.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn sample_with_accel(x: f32, y: f32, z: f32) -> Sample {
        Sample::new(0, Vector3::new(x, y, z), Vector3::zeros())
    }

    #[test]
    fn below_threshold_is_not_a_swing() {
        assert!(!is_swing_start(&sample_with_accel(0.0, 0.0, 1.0)));
        assert!(!is_swing_start(&sample_with_accel(1.0, 1.0, 1.0)));
    }

    #[test]
    fn exactly_threshold_is_not_a_swing() {
        // sqrt(0 + 0 + 4) == 2.0 exactly
        assert!(!is_swing_start(&sample_with_accel(0.0, 0.0, 2.0)));
        assert!(!is_swing_start(&sample_with_accel(0.0, -2.0, 0.0)));
    }

    #[test]
    fn above_threshold_is_a_swing() {
        assert!(is_swing_start(&sample_with_accel(0.0, 0.0, 2.0001)));
        // sqrt(1.5^2 * 3) ~= 2.598
        assert!(is_swing_start(&sample_with_accel(1.5, 1.5, 1.5)));
    }

    #[test]
    fn edge_fires_once_per_run() {
        let mut edge = SwingEdge::new();
        let quiet = sample_with_accel(0.0, 0.0, 1.0);
        let hard = sample_with_accel(3.0, 0.0, 0.0);

        assert!(!edge.update(&quiet));
        assert!(edge.update(&hard));
        assert!(edge.in_swing());
        assert!(!edge.update(&hard));
        assert!(!edge.update(&hard));
        assert!(!edge.update(&quiet));
        assert!(edge.update(&hard));
    }

    #[test]
    fn peaks_track_max_and_reset() {
        let mut peaks = SwingPeaks::new();
        peaks.update(&Sample::new(0, Vector3::new(0.0, 0.0, 1.0), Vector3::new(100.0, 0.0, 0.0)));
        peaks.update(&Sample::new(20, Vector3::new(0.0, 3.0, 4.0), Vector3::new(10.0, 0.0, 0.0)));

        assert!((peaks.max_accel - 5.0).abs() < 1e-6);
        assert!((peaks.max_angular_rate - 100.0).abs() < 1e-6);
        assert_eq!(peaks.samples, 2);

        peaks.reset();
        assert_eq!(peaks, SwingPeaks::default());
    }
}
