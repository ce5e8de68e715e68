//! Acquisition pipeline
//!
//! Owns every collaborator and all mutable loop state in one context
//! struct. Nothing is global; the loop runs on the caller's thread.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start()──► Running ──tick()/handle_signal()──► Running
//!   │
//!   └──start() with no sensor──► Halted (idles at 1 Hz forever)
//! ```
//!
//! # Per tick (50 Hz)
//!
//! 1. read + correct one sample (a failed read skips to step 5)
//! 2. swing onset check, peaks, dead reckoning
//! 3. plot on the display
//! 4. send on the configured channels
//! 5. transport maintenance
//!
//! Recalibration runs inline from [`Pipeline::handle_signal`] and blocks the
//! loop for the whole burst.

use core::fmt;

use crate::communication::transport::ConnectBudget;
use crate::communication::SwingTransmitter;
use crate::core::ticker::Ticker;
use crate::devices::traits::{ImuError, ImuSensor, StatusDisplay};
use crate::parameters::SensorConfig;
use crate::platform::traits::{BrokerClient, TimerInterface, UartInterface, WifiRadio};
use crate::subsystems::acquisition::{Calibrator, SampleReader};
use crate::{log_debug, log_error, log_info, log_warn};
use swing_sensor_core::context::{AxisMode, ControlSignal, SessionContext};
use swing_sensor_core::motion::DeadReckoning;
use swing_sensor_core::swing::{SwingEdge, SwingPeaks};
use swing_sensor_core::Sample;

/// Default loop period (ms), 50 Hz
pub const TICK_PERIOD_MS: u32 = 20;

/// Idle period after a fatal startup failure (ms)
pub const HALTED_IDLE_MS: u32 = 1000;

/// Fatal startup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Motion sensor did not initialize
    SensorUnavailable(ImuError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::SensorUnavailable(e) => write!(f, "Sensor unavailable: {}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PipelineState {
    /// Constructed, `start` not yet called
    Idle,
    Running,
    /// Startup failed; no sampling will ever happen
    Halted(InitError),
}

/// Pipeline settings
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub sensor: SensorConfig,
    pub tick_period_ms: u32,
    /// Association budget used by `start`
    pub connect_budget: ConnectBudget,
}

impl From<SensorConfig> for PipelineConfig {
    fn from(sensor: SensorConfig) -> Self {
        Self {
            sensor,
            tick_period_ms: TICK_PERIOD_MS,
            connect_budget: ConnectBudget::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        SensorConfig::default().into()
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Sample read this tick, `None` if the read failed or the loop is not running
    pub sample: Option<Sample>,
    /// This sample is the first of a swing
    pub swing_started: bool,
    /// At least one channel accepted the record
    pub delivered: bool,
}

/// Loop counters, saturating at `u32::MAX`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub ticks: u32,
    pub read_errors: u32,
    pub swings: u32,
}

pub struct Pipeline<I, T, U, R, B, D> {
    config: PipelineConfig,
    calibrator: Calibrator,
    reader: SampleReader<I>,
    timer: T,
    transmitter: SwingTransmitter<U, R, B>,
    display: D,
    context: SessionContext,
    swing: SwingEdge,
    peaks: SwingPeaks,
    motion: DeadReckoning,
    state: PipelineState,
    stats: PipelineStats,
}

impl<I, T, U, R, B, D> Pipeline<I, T, U, R, B, D>
where
    I: ImuSensor,
    T: TimerInterface,
    U: UartInterface,
    R: WifiRadio,
    B: BrokerClient,
    D: StatusDisplay,
{
    pub fn new(
        config: PipelineConfig,
        imu: I,
        timer: T,
        transmitter: SwingTransmitter<U, R, B>,
        display: D,
    ) -> Self {
        let calibrator = Calibrator::new(config.sensor.gravity);
        Self {
            config,
            calibrator,
            reader: SampleReader::new(imu),
            timer,
            transmitter,
            display,
            context: SessionContext::new(),
            swing: SwingEdge::new(),
            peaks: SwingPeaks::new(),
            motion: DeadReckoning::new(),
            state: PipelineState::Idle,
            stats: PipelineStats::default(),
        }
    }

    /// Bring up the sensor, calibrate, then the transports
    ///
    /// Transport failures are logged and leave the pipeline running with
    /// whatever channels came up. Calling `start` again has no effect.
    ///
    /// # Errors
    ///
    /// `InitError::SensorUnavailable` if the sensor does not initialize; the
    /// pipeline is then `Halted`.
    pub fn start(&mut self) -> Result<(), InitError> {
        match self.state {
            PipelineState::Running => return Ok(()),
            PipelineState::Halted(e) => return Err(e),
            PipelineState::Idle => {}
        }

        if let Err(e) = self.reader.init() {
            let err = InitError::SensorUnavailable(e);
            log_error!("Startup halted: {}", err);
            self.display.show_message("IMU Init Failed!");
            self.state = PipelineState::Halted(err);
            return Err(err);
        }

        self.calibrate();
        self.bring_up_transports();

        self.state = PipelineState::Running;
        log_info!("Pipeline running, mode {}", self.config.sensor.mode.as_str());
        self.display.show_message("Ready");
        Ok(())
    }

    fn bring_up_transports(&mut self) {
        let sensor = &self.config.sensor;

        if sensor.mode.uses_local() {
            self.transmitter.open_local_link(sensor.link_baud);
        }
        if !sensor.mode.uses_network() {
            return;
        }

        self.display.show_message("Connecting...");
        match self.transmitter.connect_network(
            &sensor.network,
            self.config.connect_budget,
            &mut self.timer,
        ) {
            Ok(()) => {
                if let Err(e) = self.transmitter.connect_broker(&sensor.broker) {
                    log_warn!("Broker unavailable at startup: {}", e);
                }
            }
            Err(e) => log_warn!("Network unavailable at startup: {}", e),
        }
    }

    fn calibrate(&mut self) {
        self.display.show_message("Calibrating...");
        self.reader.recalibrate(&self.calibrator, &mut self.timer);
    }

    /// Apply one user control signal
    pub fn handle_signal(&mut self, signal: ControlSignal) {
        log_debug!("Signal {}", signal_name(signal));
        match signal {
            ControlSignal::CycleEquipment => {
                self.context.next_club();
                self.display.show_message(self.context.club.name());
            }
            ControlSignal::CycleOperator => {
                self.context.next_operator();
                self.display.show_message(self.context.operator());
            }
            ControlSignal::CycleAxisMode => {
                self.context.next_axis_mode();
                self.display.show_message(axis_label(self.context.axis_mode));
            }
            ControlSignal::Recalibrate => {
                if self.state == PipelineState::Running {
                    self.calibrate();
                    self.display.show_message("Ready");
                }
            }
            ControlSignal::ResetAccumulated => {
                self.swing.reset();
                self.peaks.reset();
                self.motion.reset();
                self.display.show_message("Reset");
            }
        }
    }

    /// Run one loop iteration; a no-op unless `Running`
    pub fn tick(&mut self) -> TickReport {
        if self.state != PipelineState::Running {
            return TickReport::default();
        }
        self.stats.ticks = self.stats.ticks.saturating_add(1);

        let sample = match self.reader.read(&self.timer) {
            Ok(sample) => sample,
            Err(e) => {
                self.stats.read_errors = self.stats.read_errors.saturating_add(1);
                log_warn!("Sample skipped: {}", e);
                self.transmitter.maintain();
                return TickReport::default();
            }
        };

        let swing_started = self.config.sensor.swing_detection && self.swing.update(&sample);
        if swing_started {
            self.stats.swings = self.stats.swings.saturating_add(1);
            log_info!(
                "Swing detected at {} ms ({} g)",
                sample.timestamp_ms,
                sample.accel_magnitude()
            );
        }
        self.peaks.update(&sample);
        self.motion.update(&sample);

        self.display.plot_sample(self.context.axis_mode, &sample);

        let delivered = match self.context.labels() {
            Ok(labels) => self
                .transmitter
                .send(&sample, &labels, self.config.sensor.mode)
                .is_ok(),
            Err(_) => {
                log_warn!("Labels exceed record capacity");
                false
            }
        };

        self.transmitter.maintain();

        TickReport {
            sample: Some(sample),
            swing_started,
            delivered,
        }
    }

    /// Start (if needed) and loop forever at the configured rate
    ///
    /// `next_signal` is drained before every tick. After a fatal startup
    /// failure the loop only idles.
    pub fn run<F>(&mut self, mut next_signal: F) -> !
    where
        F: FnMut() -> Option<ControlSignal>,
    {
        if self.state == PipelineState::Idle {
            let _ = self.start();
        }

        let mut ticker = Ticker::every(&self.timer, self.config.tick_period_ms);
        loop {
            if let PipelineState::Halted(_) = self.state {
                if let Err(e) = self.timer.delay_ms(HALTED_IDLE_MS) {
                    log_warn!("Idle delay failed: {}", e);
                }
                continue;
            }

            while let Some(signal) = next_signal() {
                self.handle_signal(signal);
            }
            self.tick();

            let elapsed = ticker.next(&mut self.timer);
            if elapsed > u64::from(self.config.tick_period_ms) * 2 {
                log_debug!("Tick overran: {} ms", elapsed);
            }
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn peaks(&self) -> &SwingPeaks {
        &self.peaks
    }

    pub fn motion(&self) -> &DeadReckoning {
        &self.motion
    }

    pub fn reader(&self) -> &SampleReader<I> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut SampleReader<I> {
        &mut self.reader
    }

    pub fn transmitter(&self) -> &SwingTransmitter<U, R, B> {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut SwingTransmitter<U, R, B> {
        &mut self.transmitter
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

fn axis_label(mode: AxisMode) -> &'static str {
    match mode {
        AxisMode::Xy => "Axis X-Y",
        AxisMode::Yz => "Axis Y-Z",
        AxisMode::Xz => "Axis X-Z",
    }
}

fn signal_name(signal: ControlSignal) -> &'static str {
    match signal {
        ControlSignal::CycleEquipment => "cycle-equipment",
        ControlSignal::CycleOperator => "cycle-operator",
        ControlSignal::CycleAxisMode => "cycle-axis",
        ControlSignal::Recalibrate => "recalibrate",
        ControlSignal::ResetAccumulated => "reset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::transport::{NetworkState, TransmissionMode};
    use crate::devices::display::RecordingDisplay;
    use crate::devices::imu::MockImu;
    use crate::parameters::{BrokerParams, NetworkCredentials};
    use crate::platform::mock::{MockBroker, MockRadio, MockTimer, MockUart};
    use nalgebra::Vector3;
    use swing_sensor_core::{RawReading, SwingRecord};

    type TestPipeline =
        Pipeline<MockImu, MockTimer, MockUart, MockRadio, MockBroker, RecordingDisplay>;

    const EPSILON: f32 = 1e-4;

    fn pipeline_with(imu: MockImu, sensor: SensorConfig, radio: MockRadio) -> TestPipeline {
        Pipeline::new(
            sensor.into(),
            imu,
            MockTimer::new(),
            SwingTransmitter::new(MockUart::default(), radio, MockBroker::accepting()),
            RecordingDisplay::new(),
        )
    }

    fn local_pipeline() -> TestPipeline {
        pipeline_with(MockImu::at_rest(), SensorConfig::default(), MockRadio::responsive())
    }

    fn spike(accel_x: f32) -> RawReading {
        RawReading::new(Vector3::new(accel_x, 0.0, 1.0), Vector3::new(0.0, 0.0, 400.0))
    }

    #[test]
    fn test_start_calibrates_and_opens_local_link() {
        let mut pipeline = local_pipeline();

        pipeline.start().unwrap();

        assert_eq!(pipeline.state(), PipelineState::Running);
        assert!(pipeline.reader().is_calibrated());
        assert!(pipeline.transmitter().local().is_ready());
        assert_eq!(pipeline.timer().now_ms(), 1000);
        assert_eq!(pipeline.display().last_message(), Some("Ready"));
    }

    #[test]
    fn test_missing_sensor_halts() {
        let mut pipeline =
            pipeline_with(MockImu::absent(), SensorConfig::default(), MockRadio::responsive());

        let result = pipeline.start();

        let expected = InitError::SensorUnavailable(ImuError::BusError);
        assert_eq!(result, Err(expected));
        assert_eq!(pipeline.state(), PipelineState::Halted(expected));
        assert_eq!(pipeline.display().last_message(), Some("IMU Init Failed!"));

        // Halted pipeline never samples
        assert_eq!(pipeline.tick(), TickReport::default());
        assert_eq!(pipeline.stats().ticks, 0);
        assert_eq!(pipeline.start(), Err(expected));
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut pipeline = local_pipeline();
        assert_eq!(pipeline.tick(), TickReport::default());
        assert_eq!(pipeline.reader().imu().read_count(), 0);
    }

    #[test]
    fn test_tick_sends_corrected_sample() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();

        let report = pipeline.tick();

        let sample = report.sample.unwrap();
        assert!(report.delivered);
        assert!(!report.swing_started);
        assert!((sample.accel.z - 1.0).abs() < EPSILON);
        assert_eq!(pipeline.display().plotted(), 1);

        let lines = pipeline.transmitter().local().uart().lines();
        assert_eq!(lines.len(), 1);
        let record = SwingRecord::decode(&lines[0]).unwrap();
        assert_eq!(record.timestamp, sample.timestamp_ms);
        assert_eq!(record.equipment_label.as_str(), "Driver");
        assert_eq!(record.operator_label.as_str(), "Player1");
    }

    #[test]
    fn test_swing_onset_reported_once_per_swing() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();

        let imu = pipeline.reader_mut().imu_mut();
        imu.push_reading(spike(0.5));
        imu.push_reading(spike(2.5));
        imu.push_reading(spike(3.0));
        imu.push_reading(spike(0.2));
        imu.push_reading(spike(2.2));

        let onsets: std::vec::Vec<bool> = (0..5).map(|_| pipeline.tick().swing_started).collect();

        assert_eq!(onsets, [false, true, false, false, true]);
        assert_eq!(pipeline.stats().swings, 2);
        assert!(pipeline.peaks().max_accel > 3.0);
    }

    #[test]
    fn test_swing_detection_can_be_disabled() {
        let sensor = SensorConfig {
            swing_detection: false,
            ..SensorConfig::default()
        };
        let mut pipeline = pipeline_with(MockImu::at_rest(), sensor, MockRadio::responsive());
        pipeline.start().unwrap();
        pipeline.reader_mut().imu_mut().push_reading(spike(5.0));

        let report = pipeline.tick();

        assert!(!report.swing_started);
        assert!(report.delivered);
    }

    #[test]
    fn test_read_failure_skips_tick() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();
        pipeline.reader_mut().imu_mut().fail_next_reads(1);

        let report = pipeline.tick();

        assert_eq!(report.sample, None);
        assert!(!report.delivered);
        assert_eq!(pipeline.stats().read_errors, 1);
        assert!(pipeline.transmitter().local().uart().lines().is_empty());

        assert!(pipeline.tick().delivered);
    }

    #[test]
    fn test_counters_saturate() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();
        pipeline.stats.ticks = u32::MAX;
        pipeline.stats.read_errors = u32::MAX;
        pipeline.reader_mut().imu_mut().fail_next_reads(1);

        pipeline.tick();
        assert!(pipeline.tick().delivered);

        assert_eq!(pipeline.stats().ticks, u32::MAX);
        assert_eq!(pipeline.stats().read_errors, u32::MAX);
    }

    #[test]
    fn test_signals_change_record_labels() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();

        pipeline.handle_signal(ControlSignal::CycleEquipment);
        pipeline.handle_signal(ControlSignal::CycleOperator);
        assert_eq!(pipeline.display().last_message(), Some("Player2"));
        pipeline.tick();

        let lines = pipeline.transmitter().local().uart().lines();
        let record = SwingRecord::decode(&lines[0]).unwrap();
        assert_eq!(record.equipment_label.as_str(), "3-Iron");
        assert_eq!(record.operator_label.as_str(), "Player2");
    }

    #[test]
    fn test_axis_mode_signal_reaches_display() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();

        pipeline.handle_signal(ControlSignal::CycleAxisMode);
        pipeline.tick();

        assert_eq!(pipeline.display().last_axis_mode(), Some(AxisMode::Yz));
    }

    #[test]
    fn test_recalibrate_replaces_offsets() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();
        let before = pipeline.reader().offsets();

        pipeline
            .reader_mut()
            .imu_mut()
            .set_default_reading(RawReading::new(Vector3::new(0.1, 0.0, 1.0), Vector3::zeros()));
        pipeline.handle_signal(ControlSignal::Recalibrate);

        let after = pipeline.reader().offsets();
        assert!((after.accel.x - 0.1).abs() < EPSILON);
        assert!((before.accel.x).abs() < EPSILON);
        assert_eq!(pipeline.timer().now_ms(), 2000);
    }

    #[test]
    fn test_reset_clears_accumulated_state() {
        let mut pipeline = local_pipeline();
        pipeline.start().unwrap();
        pipeline.reader_mut().imu_mut().push_reading(spike(3.0));
        pipeline.tick();
        pipeline.timer_mut().advance_ms(20);
        pipeline.tick();
        assert!(pipeline.peaks().samples > 0);

        pipeline.handle_signal(ControlSignal::ResetAccumulated);

        assert_eq!(*pipeline.peaks(), SwingPeaks::default());
        assert_eq!(*pipeline.motion(), DeadReckoning::new());
    }

    #[test]
    fn test_network_failure_is_not_fatal() {
        let sensor = SensorConfig {
            mode: TransmissionMode::Both,
            network: NetworkCredentials::new("range", "pw").unwrap(),
            broker: BrokerParams::new("10.0.0.5", 1883).unwrap(),
            ..SensorConfig::default()
        };
        let mut pipeline = pipeline_with(MockImu::at_rest(), sensor, MockRadio::unresponsive());

        pipeline.start().unwrap();

        assert_eq!(pipeline.state(), PipelineState::Running);
        assert_eq!(pipeline.transmitter().network_state(), NetworkState::Disconnected);
        // 1 s calibration + 15 s association budget
        assert_eq!(pipeline.timer().now_ms(), 16_000);

        // Local channel still carries records in Both mode
        assert!(pipeline.tick().delivered);
    }

    #[test]
    fn test_network_mode_publishes() {
        let sensor = SensorConfig {
            mode: TransmissionMode::Network,
            network: NetworkCredentials::new("range", "pw").unwrap(),
            broker: BrokerParams::new("10.0.0.5", 1883).unwrap(),
            ..SensorConfig::default()
        };
        let mut pipeline = pipeline_with(MockImu::at_rest(), sensor, MockRadio::responsive());
        pipeline.start().unwrap();

        assert!(pipeline.tick().delivered);
        assert!(pipeline.tick().delivered);

        let broker = pipeline.transmitter().broker().client();
        assert_eq!(broker.published().len(), 2);
        assert_eq!(broker.connect_attempts(), 1);
        assert_eq!(broker.polls(), 2);
        assert!(!pipeline.transmitter().local().is_ready());
    }
}
