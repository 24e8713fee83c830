//! Temperature units and conversion.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Temperature scale for recorder readings.
///
/// Only Celsius and Fahrenheit are recognized. The recorder never stores
/// Kelvin and this crate does not invent a conversion for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Resolve a unit name to a typed unit.
    ///
    /// Accepts the canonical lowercase names (`"celsius"`, `"fahrenheit"`)
    /// as well as the spellings Home Assistant writes into attribute blobs
    /// (`"°C"`, `"C"`, `"°F"`, `"F"`), all case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_types::TemperatureUnit;
    ///
    /// assert_eq!(TemperatureUnit::from_name("celsius")?, TemperatureUnit::Celsius);
    /// assert_eq!(TemperatureUnit::from_name("°F")?, TemperatureUnit::Fahrenheit);
    /// assert!(TemperatureUnit::from_name("kelvin").is_err());
    /// # Ok::<(), hearth_types::UnitError>(())
    /// ```
    pub fn from_name(name: &str) -> Result<Self, UnitError> {
        Self::resolve(name).ok_or_else(|| UnitError::UnsupportedUnit(name.to_string()))
    }

    pub(crate) fn resolve(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "celsius" | "°c" | "c" => Some(TemperatureUnit::Celsius),
            "fahrenheit" | "°f" | "f" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    /// The unit's canonical lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Convert a value in this unit to the target unit.
    ///
    /// Identity conversions return the value unchanged, exactly.
    #[must_use]
    pub fn convert_to(self, value: f64, target: TemperatureUnit) -> f64 {
        match (self, target) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
            _ => value,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "°C"),
            TemperatureUnit::Fahrenheit => write!(f, "°F"),
        }
    }
}

/// Convert `value` between two named temperature scales.
///
/// Fails with [`UnitError::UnsupportedConversion`] when either name does not
/// resolve to a recognized unit. Pure: no side effects, and total over the
/// two-unit domain.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    match (TemperatureUnit::resolve(from), TemperatureUnit::resolve(to)) {
        (Some(source), Some(target)) => Ok(source.convert_to(value, target)),
        _ => Err(UnitError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}
