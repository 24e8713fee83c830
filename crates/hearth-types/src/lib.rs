//! Platform-agnostic types for Home Assistant recorder readings.
//!
//! This crate provides the value types shared by the query layer
//! (hearth-store) and the command-line front end (hearth-cli).
//!
//! # Features
//!
//! - Temperature units with case-insensitive name resolution
//! - Pure Celsius/Fahrenheit conversion
//! - The normalized [`TemperatureReading`] record
//! - Error types for unit handling
//!
//! # Example
//!
//! ```
//! use hearth_types::{TemperatureUnit, convert};
//!
//! let unit = TemperatureUnit::from_name("Fahrenheit")?;
//! assert_eq!(unit, TemperatureUnit::Fahrenheit);
//!
//! let freezing = convert(32.0, "fahrenheit", "celsius")?;
//! assert_eq!(freezing, 0.0);
//! # Ok::<(), hearth_types::UnitError>(())
//! ```

pub mod error;
pub mod reading;
pub mod units;

pub use error::{UnitError, UnitResult};
pub use reading::TemperatureReading;
pub use units::{TemperatureUnit, convert};
