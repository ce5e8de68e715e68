//! Structured record shared by every transport
//!
//! One [`Sample`] plus two context labels is serialized as a compact JSON
//! object. The same bytes go out on the local serial link (one line per
//! record) and as the broker publish payload.
//!
//! ```text
//! {"timestamp":1200,"accel_x":0.01,"accel_y":-0.02,"accel_z":1.0,
//!  "gyro_x":0.5,"gyro_y":0.0,"gyro_z":-1.25,"equipment_label":"Driver",
//!  "operator_label":"Player1","device_id":"swing-sensor-001"}
//! ```
//!
//! Older host tools emit `club`/`player` instead of the label keys; the
//! decoder accepts both.

use heapless::String;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// Fixed identifier stamped into every record
pub const DEVICE_ID: &str = "swing-sensor-001";

/// Broker topic records are published on
pub const SWING_TOPIC: &str = "golf/swing_data";

/// Maximum length of a label or device id
pub const LABEL_CAPACITY: usize = 24;

/// Maximum length of one encoded record
pub const RECORD_CAPACITY: usize = 512;

/// Bounded text field used for labels
pub type Label = String<LABEL_CAPACITY>;

/// Encoded record, ready to write or publish
pub type EncodedRecord = String<RECORD_CAPACITY>;

/// Record encode/decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Label does not fit in [`LABEL_CAPACITY`]
    LabelTooLong,
    /// Encoded record does not fit in [`RECORD_CAPACITY`]
    Overflow,
    /// Input is not a valid record
    Malformed,
}

impl core::fmt::Display for RecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordError::LabelTooLong => write!(f, "label too long"),
            RecordError::Overflow => write!(f, "record exceeds buffer"),
            RecordError::Malformed => write!(f, "malformed record"),
        }
    }
}

/// Equipment and operator context attached to each record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLabels {
    pub equipment: Label,
    pub operator: Label,
}

impl RecordLabels {
    pub fn new(equipment: &str, operator: &str) -> Result<Self, RecordError> {
        Ok(Self {
            equipment: to_label(equipment)?,
            operator: to_label(operator)?,
        })
    }
}

fn to_label(text: &str) -> Result<Label, RecordError> {
    let mut label = Label::new();
    label
        .push_str(text)
        .map_err(|_| RecordError::LabelTooLong)?;
    Ok(label)
}

fn unknown_device() -> Label {
    let mut label = Label::new();
    let _ = label.push_str("unknown");
    label
}

/// Wire form of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingRecord {
    /// Milliseconds since boot
    pub timestamp: u64,
    pub accel_x: f32,
    pub accel_y: f32,
    pub accel_z: f32,
    pub gyro_x: f32,
    pub gyro_y: f32,
    pub gyro_z: f32,
    #[serde(alias = "club")]
    pub equipment_label: Label,
    #[serde(alias = "player")]
    pub operator_label: Label,
    #[serde(default = "unknown_device")]
    pub device_id: Label,
}

impl SwingRecord {
    /// Build the record for `sample` with this device's id
    pub fn from_sample(sample: &Sample, labels: &RecordLabels) -> Self {
        let mut device_id = Label::new();
        // DEVICE_ID is shorter than LABEL_CAPACITY
        let _ = device_id.push_str(DEVICE_ID);

        Self {
            timestamp: sample.timestamp_ms,
            accel_x: sample.accel.x,
            accel_y: sample.accel.y,
            accel_z: sample.accel.z,
            gyro_x: sample.gyro.x,
            gyro_y: sample.gyro.y,
            gyro_z: sample.gyro.z,
            equipment_label: labels.equipment.clone(),
            operator_label: labels.operator.clone(),
            device_id,
        }
    }

    /// Recover the numeric part as a [`Sample`]
    pub fn to_sample(&self) -> Sample {
        Sample::new(
            self.timestamp,
            Vector3::new(self.accel_x, self.accel_y, self.accel_z),
            Vector3::new(self.gyro_x, self.gyro_y, self.gyro_z),
        )
    }

    /// Serialize to compact JSON
    pub fn encode(&self) -> Result<EncodedRecord, RecordError> {
        serde_json_core::to_string(self).map_err(|_| RecordError::Overflow)
    }

    /// Parse one record, ignoring surrounding whitespace and line endings
    pub fn decode(line: &str) -> Result<Self, RecordError> {
        let (record, _) =
            serde_json_core::from_str::<Self>(line.trim()).map_err(|_| RecordError::Malformed)?;
        Ok(record)
    }
}
