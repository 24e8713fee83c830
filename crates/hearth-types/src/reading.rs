//! Normalized temperature readings extracted from recorder state rows.

use time::PrimitiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// The timestamp layout the recorder writes into `last_changed`.
#[cfg(feature = "serde")]
time::serde::format_description!(
    recorder_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
);

/// A single normalized temperature reading.
///
/// Value object: constructed once from a raw state row and never mutated.
/// The timestamp is naive wall-clock time, consistent with how the recorder
/// stored it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureReading {
    /// Human-readable entity label, from the metadata blob's `friendly_name`.
    pub name: String,
    /// When the reading was recorded.
    #[cfg_attr(feature = "serde", serde(with = "recorder_timestamp"))]
    pub recorded_at: PrimitiveDateTime,
    /// The reading, expressed in the requested target unit.
    pub value: f64,
}
