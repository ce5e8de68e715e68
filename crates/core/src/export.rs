//! CSV log rows and file-serving helpers
//!
//! The on-device log is an append-only CSV file recreated at boot. Writing
//! the file and serving it are handled by the storage/network collaborators;
//! this module only fixes the row format and the extension → content-type
//! table they share.

use core::fmt::{self, Write};

use crate::sample::Sample;

/// First line of every log file
pub const CSV_HEADER: &str = "timestamp,accel_x,accel_y,accel_z,gyro_x,gyro_y,gyro_z";

/// Content type for paths with an unknown or missing extension
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("csv", "text/csv"),
    ("txt", "text/plain"),
    ("png", "image/png"),
    ("ico", "image/x-icon"),
];

/// Append one CSV row (with trailing newline) for `sample`
pub fn write_csv_row<W: Write>(out: &mut W, sample: &Sample) -> fmt::Result {
    writeln!(
        out,
        "{},{},{},{},{},{},{}",
        sample.timestamp_ms,
        sample.accel.x,
        sample.accel.y,
        sample.accel.z,
        sample.gyro.x,
        sample.gyro.y,
        sample.gyro.z
    )
}

/// Look up the content type for a served path by its extension
///
/// Matching is case-insensitive on the extension only.
pub fn content_type_for(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };
    if ext.contains('/') {
        return DEFAULT_CONTENT_TYPE;
    }

    CONTENT_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
