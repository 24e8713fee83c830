//! Row models for the recorder schema.

use core::fmt;

use serde::Deserialize;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use hearth_types::{TemperatureReading, TemperatureUnit, convert};

use crate::error::{Error, Result};

/// Tables of the recorder schema this crate will count rows in.
///
/// Table names are compile-time constants; external input is only ever
/// matched against them, never spliced into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Platform event log.
    Events,
    /// One row per recorder process run.
    RecorderRuns,
    /// Recorder schema migration history.
    SchemaChanges,
    /// Entity state history, one row per recorded state change.
    States,
}

impl Table {
    /// All recognized recorder tables.
    pub const ALL: [Table; 4] = [
        Table::Events,
        Table::RecorderRuns,
        Table::SchemaChanges,
        Table::States,
    ];

    /// The table's name in the recorder schema.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Table::Events => "events",
            Table::RecorderRuns => "recorder_runs",
            Table::SchemaChanges => "schema_changes",
            Table::States => "states",
        }
    }

    /// Resolve a table name, failing with [`Error::UnknownTable`] for names
    /// outside the recorder schema.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| Error::UnknownTable(name.to_string()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Layout of `last_changed`: microsecond precision, no zone, and a fractional
// part whose digit count varies between rows (or is absent entirely).
const LAST_CHANGED: &[BorrowedFormatItem<'_>] = format_description!(
    version = 2,
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// One row of the `states` table, as fetched.
///
/// Transient: fetched per query and discarded after transformation into a
/// [`TemperatureReading`].
#[derive(Debug, Clone)]
pub struct StateRow {
    /// Entity identifier, e.g. `sensor.living_room_temperature`.
    pub entity_id: String,
    /// Raw state value as the recorder stored it.
    pub state: String,
    /// JSON-encoded metadata blob.
    pub attributes: String,
    /// Naive timestamp string, `YYYY-MM-DD HH:MM:SS.ffffff`.
    pub last_changed: String,
}

/// Metadata blob embedded in a state row's `attributes` column.
///
/// Unknown keys are ignored. A missing required key (or invalid JSON) is a
/// hard [`Error::MalformedMetadata`], not a skip.
#[derive(Debug, Clone, Deserialize)]
pub struct StateAttributes {
    /// Human-readable entity label.
    pub friendly_name: String,
    /// Unit the raw state value is expressed in.
    pub unit_of_measurement: String,
}

impl StateRow {
    /// Parse the row's `last_changed` column.
    ///
    /// The window filter compares parsed values, never the raw strings:
    /// fractional-second digit counts vary between rows, so lexical
    /// comparison would misorder them.
    pub fn recorded_at(&self) -> Result<PrimitiveDateTime> {
        PrimitiveDateTime::parse(&self.last_changed, LAST_CHANGED).map_err(|source| {
            Error::MalformedTimestamp {
                entity_id: self.entity_id.clone(),
                value: self.last_changed.clone(),
                source,
            }
        })
    }

    /// Transform the row into a normalized reading expressed in `unit`.
    pub fn into_reading(
        self,
        recorded_at: PrimitiveDateTime,
        unit: TemperatureUnit,
    ) -> Result<TemperatureReading> {
        let attributes: StateAttributes =
            serde_json::from_str(&self.attributes).map_err(|source| Error::MalformedMetadata {
                entity_id: self.entity_id.clone(),
                source,
            })?;

        let raw: f64 = self.state.parse().map_err(|_| Error::MalformedValue {
            entity_id: self.entity_id.clone(),
            value: self.state.clone(),
        })?;

        let value = convert(raw, &attributes.unit_of_measurement, unit.name())?;

        Ok(TemperatureReading {
            name: attributes.friendly_name,
            recorded_at,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn row(state: &str, attributes: &str, last_changed: &str) -> StateRow {
        StateRow {
            entity_id: "sensor.living_room_temperature".to_string(),
            state: state.to_string(),
            attributes: attributes.to_string(),
            last_changed: last_changed.to_string(),
        }
    }

    #[test]
    fn test_table_names_round_trip() {
        for table in Table::ALL {
            assert_eq!(Table::from_name(table.name()).unwrap(), table);
        }
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let err = Table::from_name("secrets").unwrap_err();
        assert!(matches!(err, Error::UnknownTable(name) if name == "secrets"));
    }

    #[test]
    fn test_recorded_at_parses_microseconds() {
        let row = row("21.5", "{}", "2023-04-01 12:30:45.123456");
        assert_eq!(row.recorded_at().unwrap(), datetime!(2023-04-01 12:30:45.123456));
    }

    #[test]
    fn test_recorded_at_accepts_short_and_missing_fractions() {
        let short = row("21.5", "{}", "2023-04-01 12:30:45.5");
        assert_eq!(short.recorded_at().unwrap(), datetime!(2023-04-01 12:30:45.5));

        let whole = row("21.5", "{}", "2023-04-01 12:30:45");
        assert_eq!(whole.recorded_at().unwrap(), datetime!(2023-04-01 12:30:45));
    }

    #[test]
    fn test_recorded_at_rejects_junk() {
        let junk = row("21.5", "{}", "last tuesday");
        assert!(matches!(
            junk.recorded_at().unwrap_err(),
            Error::MalformedTimestamp { value, .. } if value == "last tuesday"
        ));
    }

    #[test]
    fn test_into_reading_converts_units() {
        let row = row(
            "68.0",
            r#"{"friendly_name": "Porch", "unit_of_measurement": "°F"}"#,
            "2023-04-01 12:00:00.000000",
        );
        let at = row.recorded_at().unwrap();
        let reading = row.into_reading(at, TemperatureUnit::Celsius).unwrap();

        assert_eq!(reading.name, "Porch");
        assert_eq!(reading.value, 20.0);
        assert_eq!(reading.recorded_at, datetime!(2023-04-01 12:00:00));
    }

    #[test]
    fn test_into_reading_rejects_invalid_json() {
        let row = row("21.5", "not json", "2023-04-01 12:00:00.000000");
        let at = row.recorded_at().unwrap();
        assert!(matches!(
            row.into_reading(at, TemperatureUnit::Celsius).unwrap_err(),
            Error::MalformedMetadata { .. }
        ));
    }

    #[test]
    fn test_into_reading_rejects_missing_unit_key() {
        let row = row(
            "21.5",
            r#"{"friendly_name": "Porch"}"#,
            "2023-04-01 12:00:00.000000",
        );
        let at = row.recorded_at().unwrap();
        assert!(matches!(
            row.into_reading(at, TemperatureUnit::Celsius).unwrap_err(),
            Error::MalformedMetadata { .. }
        ));
    }

    #[test]
    fn test_into_reading_ignores_extra_metadata_keys() {
        let row = row(
            "21.5",
            r#"{"friendly_name": "Porch", "unit_of_measurement": "°C", "icon": "mdi:thermometer"}"#,
            "2023-04-01 12:00:00.000000",
        );
        let at = row.recorded_at().unwrap();
        assert_eq!(row.into_reading(at, TemperatureUnit::Celsius).unwrap().value, 21.5);
    }

    #[test]
    fn test_into_reading_rejects_non_numeric_state() {
        let row = row(
            "unavailable",
            r#"{"friendly_name": "Porch", "unit_of_measurement": "°C"}"#,
            "2023-04-01 12:00:00.000000",
        );
        let at = row.recorded_at().unwrap();
        assert!(matches!(
            row.into_reading(at, TemperatureUnit::Celsius).unwrap_err(),
            Error::MalformedValue { value, .. } if value == "unavailable"
        ));
    }

    #[test]
    fn test_into_reading_rejects_unknown_source_unit() {
        let row = row(
            "294.15",
            r#"{"friendly_name": "Porch", "unit_of_measurement": "°K"}"#,
            "2023-04-01 12:00:00.000000",
        );
        let at = row.recorded_at().unwrap();
        assert!(matches!(
            row.into_reading(at, TemperatureUnit::Celsius).unwrap_err(),
            Error::Unit(hearth_types::UnitError::UnsupportedConversion { .. })
        ));
    }
}
