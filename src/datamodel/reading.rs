use super::attr_value::RawRecord;
use serde::{Deserialize, Serialize};

/// One normalized sound-level observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Device or source tag.
    pub partition: String,
    /// Seconds since epoch, the natural sort key.
    pub timestamp: i64,
    /// Sound level measurement.
    pub decibel: i64,
}

/// Leniency policy for malformed records: a missing or mistyped attribute
/// never rejects the record, the affected field falls back to its default.
/// Kept as a single named seam so tests can target the policy directly.
fn default_if_missing<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

impl Reading {
    /// Decode one raw record, defaulting per field.
    ///
    /// The decibel value sits behind the nested `payload.decibel` path;
    /// any missing link along it defaults the whole field.
    pub fn from_raw(record: &RawRecord) -> Self {
        let partition = default_if_missing(
            record
                .get("partition")
                .and_then(|value| value.as_s())
                .map(str::to_string),
        );
        let timestamp = default_if_missing(record.get("timestamp").and_then(|value| value.as_i64()));
        let decibel = default_if_missing(
            record
                .get("payload")
                .and_then(|payload| payload.get("decibel"))
                .and_then(|value| value.as_i64()),
        );

        Self {
            partition,
            timestamp,
            decibel,
        }
    }
}
