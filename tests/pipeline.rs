//! End-to-end pipeline tests on the mock platform
//!
//! Drives the full acquisition loop (calibration, sampling, swing detection,
//! record transport) through the public API only.

use nalgebra::Vector3;
use swing_sensor::communication::transport::{
    BrokerState, NetworkState, TransmissionMode, TransportError,
};
use swing_sensor::communication::SwingTransmitter;
use swing_sensor::devices::display::RecordingDisplay;
use swing_sensor::devices::imu::MockImu;
use swing_sensor::parameters::{BrokerParams, NetworkCredentials, SensorConfig};
use swing_sensor::pipeline::{Pipeline, PipelineConfig, PipelineState};
use swing_sensor::platform::mock::{MockBroker, MockRadio, MockTimer, MockUart};
use swing_sensor::platform::TimerInterface;
use swing_sensor_core::context::{signal_for, Button, ControlSignal, PressKind};
use swing_sensor_core::record::SWING_TOPIC;
use swing_sensor_core::{GravityHandling, RawReading, SwingRecord};

type MockPipeline =
    Pipeline<MockImu, MockTimer, MockUart, MockRadio, MockBroker, RecordingDisplay>;

fn networked_config(mode: TransmissionMode) -> SensorConfig {
    SensorConfig {
        mode,
        network: NetworkCredentials::new("driving-range", "fore!").unwrap(),
        broker: BrokerParams::new("192.168.1.20", 1883).unwrap(),
        ..SensorConfig::default()
    }
}

fn build(
    imu: MockImu,
    sensor: SensorConfig,
    radio: MockRadio,
    broker: MockBroker,
) -> MockPipeline {
    Pipeline::new(
        PipelineConfig::from(sensor),
        imu,
        MockTimer::new(),
        SwingTransmitter::new(MockUart::default(), radio, broker),
        RecordingDisplay::new(),
    )
}

/// Biased sensor held level: small offsets on every axis
fn biased_imu() -> MockImu {
    MockImu::with_default_reading(RawReading::new(
        Vector3::new(0.03, -0.02, 1.04),
        Vector3::new(1.5, -0.5, 0.75),
    ))
}

/// Run `n` ticks 20 ms apart
fn run_ticks(pipeline: &mut MockPipeline, n: usize) {
    for _ in 0..n {
        pipeline.tick();
        pipeline.timer_mut().delay_ms(20).unwrap();
    }
}

#[test]
fn dual_mode_session_delivers_on_both_channels() {
    let mut pipeline = build(
        biased_imu(),
        networked_config(TransmissionMode::Both),
        MockRadio::after_polls(3),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();

    assert_eq!(pipeline.transmitter().network_state(), NetworkState::Associated);
    assert_eq!(pipeline.transmitter().broker().state(), BrokerState::Connected);

    run_ticks(&mut pipeline, 10);

    let lines = pipeline.transmitter().local().uart().lines();
    let published = pipeline.transmitter().broker().client().published();
    assert_eq!(lines.len(), 10);
    assert_eq!(published.len(), 10);
    assert!(published.iter().all(|m| m.topic == SWING_TOPIC));

    // Same bytes on both channels
    for (line, message) in lines.iter().zip(published) {
        assert_eq!(line, &message.payload);
    }

    // Timestamps are non-decreasing and samples are bias corrected
    let records: Vec<SwingRecord> = lines
        .iter()
        .map(|line| SwingRecord::decode(line).unwrap())
        .collect();
    assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    for record in &records {
        let sample = record.to_sample();
        assert!((sample.accel - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-4);
        assert!(sample.gyro.norm() < 1e-4);
    }
}

#[test]
fn keep_raw_gravity_reads_zero_at_rest() {
    let sensor = SensorConfig {
        gravity: GravityHandling::KeepRaw,
        ..SensorConfig::default()
    };
    let mut pipeline = build(
        biased_imu(),
        sensor,
        MockRadio::responsive(),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();

    let sample = pipeline.tick().sample.unwrap();

    assert!(sample.accel.norm() < 1e-4);
}

#[test]
fn broker_outage_recovers_through_maintenance() {
    let mut pipeline = build(
        MockImu::at_rest(),
        networked_config(TransmissionMode::Network),
        MockRadio::responsive(),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();
    run_ticks(&mut pipeline, 3);

    // Broker goes away and refuses reconnects for a while
    let broker = pipeline.transmitter_mut().broker_mut().client_mut();
    broker.drop_connection();
    broker.set_accept_connect(false);

    let report = pipeline.tick();
    assert!(!report.delivered);
    assert_eq!(pipeline.transmitter().broker().state(), BrokerState::Disconnected);

    run_ticks(&mut pipeline, 4);
    let attempts_while_down = pipeline.transmitter().broker().client().connect_attempts();
    // Initial connect plus one attempt per tick since the failed publish
    assert_eq!(attempts_while_down, 1 + 5);

    pipeline
        .transmitter_mut()
        .broker_mut()
        .client_mut()
        .set_accept_connect(true);
    pipeline.tick();
    assert_eq!(pipeline.transmitter().broker().state(), BrokerState::Connected);

    assert!(pipeline.tick().delivered);
    let stats = pipeline.transmitter().stats();
    assert_eq!(stats.dropped, 6);
    assert_eq!(stats.reconnect_attempts, 6);
}

#[test]
fn unconfigured_network_falls_back_to_serial_in_dual_mode() {
    let sensor = SensorConfig {
        mode: TransmissionMode::Both,
        ..SensorConfig::default()
    };
    let mut pipeline = build(
        MockImu::at_rest(),
        sensor,
        MockRadio::responsive(),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();

    // No SSID: the radio is never touched and startup does not wait
    assert_eq!(pipeline.transmitter().network().radio().begin_calls(), 0);
    assert_eq!(pipeline.timer().now_ms(), 1000);

    assert!(pipeline.tick().delivered);
    assert_eq!(
        pipeline
            .transmitter_mut()
            .broker_mut()
            .publish(SWING_TOPIC, "{}"),
        Err(TransportError::NotReady)
    );
}

#[test]
fn button_presses_drive_the_session() {
    let mut pipeline = build(
        MockImu::at_rest(),
        SensorConfig::default(),
        MockRadio::responsive(),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();

    // Three short A presses: Driver → 3-Iron → 5-Iron → 7-Iron
    for _ in 0..3 {
        pipeline.handle_signal(signal_for(Button::A, PressKind::classify(120)));
    }
    // One short B press: Player1 → Player2
    pipeline.handle_signal(signal_for(Button::B, PressKind::classify(80)));

    pipeline.tick();
    let lines = pipeline.transmitter().local().uart().lines();
    let record = SwingRecord::decode(&lines[0]).unwrap();
    assert_eq!(record.equipment_label.as_str(), "7-Iron");
    assert_eq!(record.operator_label.as_str(), "Player2");

    // Long A press recalibrates (another 1 s burst)
    let before = pipeline.timer().now_ms();
    pipeline.handle_signal(signal_for(Button::A, PressKind::classify(1500)));
    assert_eq!(pipeline.timer().now_ms() - before, 1000);

    // Long B press resets accumulated swing state
    pipeline.handle_signal(signal_for(Button::B, PressKind::classify(1000)));
    assert_eq!(pipeline.peaks().samples, 0);
    assert_eq!(pipeline.display().last_message(), Some("Reset"));
}

#[test]
fn swing_burst_is_detected_once() {
    let mut pipeline = build(
        MockImu::at_rest(),
        SensorConfig::default(),
        MockRadio::responsive(),
        MockBroker::accepting(),
    );
    pipeline.start().unwrap();

    let imu = pipeline.reader_mut().imu_mut();
    for accel_x in [0.2, 1.0, 2.4, 3.5, 2.8, 1.1, 0.1] {
        imu.push_reading(RawReading::new(
            Vector3::new(accel_x, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 800.0 * accel_x),
        ));
    }

    let mut onsets = 0;
    for _ in 0..7 {
        if pipeline.tick().swing_started {
            onsets += 1;
        }
        pipeline.timer_mut().delay_ms(20).unwrap();
    }

    assert_eq!(onsets, 1);
    assert_eq!(pipeline.stats().swings, 1);
    assert!((pipeline.peaks().max_angular_rate - 2800.0).abs() < 1e-2);
    assert_eq!(pipeline.state(), PipelineState::Running);
}

#[test]
fn absent_sensor_halts_without_touching_transports() {
    let mut pipeline = build(
        MockImu::absent(),
        networked_config(TransmissionMode::Both),
        MockRadio::responsive(),
        MockBroker::accepting(),
    );

    assert!(pipeline.start().is_err());
    assert!(matches!(pipeline.state(), PipelineState::Halted(_)));
    assert!(!pipeline.transmitter().local().is_ready());
    assert_eq!(pipeline.transmitter().network().radio().begin_calls(), 0);

    pipeline.handle_signal(ControlSignal::Recalibrate);
    assert!(!pipeline.reader().is_calibrated());
}
