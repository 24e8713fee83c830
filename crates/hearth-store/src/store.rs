//! Main store implementation.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use hearth_types::TemperatureReading;

use crate::error::{Error, Result};
use crate::models::{StateRow, Table};
use crate::queries::TemperatureQuery;

/// Domain a state row must carry to count as a sensor reading.
const SENSOR_DOMAIN: &str = "sensor";
/// LIKE pattern selecting temperature entities.
const TEMPERATURE_ENTITIES: &str = "%temperature%";

/// Read-only handle to a Home Assistant recorder database.
///
/// The connection lives for the lifetime of the value and is released on
/// drop on every exit path; no write statements are ever issued. Concurrent
/// readers must open independent handles.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing recorder database for reads.
    ///
    /// Fails with [`Error::NotFound`] if the path does not exist before any
    /// connection is attempted; this store never creates or migrates a
    /// database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }

        info!("Opening recorder database at {}", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Self { conn })
    }

    /// Close the handle, surfacing any error from the underlying connection.
    ///
    /// Dropping a `Store` also closes the connection; this variant exists
    /// for callers that want the close error instead of a silent drop.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::Database(err))
    }
}

// Row-count operations
impl Store {
    /// Count rows in a named recorder table.
    ///
    /// The name must match one of the recognized tables; anything else fails
    /// with [`Error::UnknownTable`] before any SQL runs.
    pub fn count_table_entries(&self, name: &str) -> Result<u64> {
        self.count_table(Table::from_name(name)?)
    }

    /// Count rows in a recorder table.
    pub fn count_table(&self, table: Table) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table.name()),
            [],
            |row| row.get(0),
        )?;

        debug!("{} rows in {}", count, table.name());
        Ok(count as u64)
    }

    /// Count rows in the events table.
    pub fn count_events(&self) -> Result<u64> {
        self.count_table(Table::Events)
    }

    /// Count state rows, optionally restricted to one exact entity id.
    pub fn count_states(&self, entity_id: Option<&str>) -> Result<u64> {
        let count: i64 = match entity_id {
            Some(id) => self.conn.query_row(
                "SELECT COUNT(*) FROM states WHERE entity_id = ?",
                [id],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM states", [], |row| row.get(0))?,
        };

        Ok(count as u64)
    }
}

// Temperature extraction
impl Store {
    /// Fetch normalized temperature readings.
    ///
    /// Runs one parameterized query selecting sensor-domain rows whose
    /// entity id contains `temperature`, materializes the full result set,
    /// and transforms each row that falls inside the query's time window.
    /// The window is evaluated on parsed timestamps, equivalent to carrying
    /// the bounds in the WHERE clause.
    ///
    /// All-or-nothing: any malformed row aborts the call and no partial
    /// results are returned. An empty result set is valid output.
    pub fn fetch_temperature_readings(
        &self,
        query: &TemperatureQuery,
    ) -> Result<Vec<TemperatureReading>> {
        let mut stmt = self.conn.prepare(
            "SELECT entity_id, state, attributes, last_changed FROM states \
             WHERE domain = ?1 AND entity_id LIKE ?2",
        )?;

        let rows = stmt
            .query_map(
                rusqlite::params![SENSOR_DOMAIN, TEMPERATURE_ENTITIES],
                |row| {
                    Ok(StateRow {
                        entity_id: row.get(0)?,
                        state: row.get(1)?,
                        attributes: row.get(2)?,
                        last_changed: row.get(3)?,
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Fetched {} candidate temperature rows", rows.len());

        let mut readings = Vec::with_capacity(rows.len());
        for row in rows {
            let recorded_at = row.recorded_at()?;
            if !query.contains(recorded_at) {
                continue;
            }
            readings.push(row.into_reading(recorded_at, query.unit)?);
        }

        Ok(readings)
    }
}
