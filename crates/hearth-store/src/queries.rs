//! Query builder for temperature extraction.
//!
//! [`TemperatureQuery`] follows the builder pattern: all filters are
//! optional and can be chained in any order.
//!
//! # Example
//!
//! ```
//! use hearth_store::TemperatureQuery;
//! use hearth_types::TemperatureUnit;
//! use time::macros::datetime;
//!
//! let query = TemperatureQuery::new()
//!     .since(datetime!(2023-04-01 00:00:00))
//!     .until(datetime!(2023-04-02 00:00:00))
//!     .unit(TemperatureUnit::Fahrenheit);
//! ```

use time::PrimitiveDateTime;

use hearth_types::TemperatureUnit;

/// Fluent query for [`Store::fetch_temperature_readings`](crate::Store::fetch_temperature_readings).
///
/// Both bounds are inclusive and either side may be left unbounded. Results
/// keep store iteration order — no explicit sort is applied, so callers must
/// not assume chronological order.
#[derive(Debug, Default, Clone)]
pub struct TemperatureQuery {
    /// Include only readings recorded at or after this time.
    pub since: Option<PrimitiveDateTime>,
    /// Include only readings recorded at or before this time.
    pub until: Option<PrimitiveDateTime>,
    /// Unit readings are converted into.
    pub unit: TemperatureUnit,
}

impl TemperatureQuery {
    /// Create a query with no time bounds, targeting Celsius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to readings recorded at or after this time.
    pub fn since(mut self, time: PrimitiveDateTime) -> Self {
        self.since = Some(time);
        self
    }

    /// Filter to readings recorded at or before this time.
    pub fn until(mut self, time: PrimitiveDateTime) -> Self {
        self.until = Some(time);
        self
    }

    /// Convert readings into the given unit.
    pub fn unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Whether an instant falls inside the window.
    pub(crate) fn contains(&self, recorded_at: PrimitiveDateTime) -> bool {
        if let Some(since) = self.since {
            if recorded_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if recorded_at > until {
                return false;
            }
        }
        true
    }
}
