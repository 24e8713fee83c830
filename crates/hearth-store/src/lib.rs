//! Read-only queries over Home Assistant recorder databases.
//!
//! This crate opens an existing recorder SQLite file for reads, counts rows
//! in the known recorder tables, and extracts normalized temperature
//! readings over an optional time window, converting each reading into a
//! caller-requested unit.
//!
//! The database is owned by Home Assistant; this crate never creates,
//! migrates, or writes it.
//!
//! # Example
//!
//! ```no_run
//! use hearth_store::{Store, TemperatureQuery};
//! use hearth_types::TemperatureUnit;
//!
//! let store = Store::open("home-assistant_v2.db")?;
//!
//! let query = TemperatureQuery::new().unit(TemperatureUnit::Fahrenheit);
//! let readings = store.fetch_temperature_readings(&query)?;
//!
//! for reading in readings {
//!     println!("{} {} {:.1}", reading.recorded_at, reading.name, reading.value);
//! }
//! # Ok::<(), hearth_store::Error>(())
//! ```

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use models::{StateAttributes, StateRow, Table};
pub use queries::TemperatureQuery;
pub use store::Store;
