//! Temps command - extract temperature readings.

use std::path::Path;

use anyhow::{Context, Result};
use hearth_store::{Store, TemperatureQuery};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::cli::{OutputArgs, OutputFormat};
use crate::config::Config;
use crate::format::{
    FormatOptions, format_readings_csv, format_readings_json, format_readings_text,
};

/// Execute the temps command.
pub fn cmd_temps(
    database: &Path,
    since: Option<&str>,
    until: Option<&str>,
    output: &OutputArgs,
    no_color: bool,
    config: &Config,
) -> Result<()> {
    let unit = output.resolve_unit(config.unit.as_deref())?;

    let mut query = TemperatureQuery::new().unit(unit);
    if let Some(since) = since {
        query = query.since(parse_datetime(since)?);
    }
    if let Some(until) = until {
        query = query.until(parse_datetime(until)?);
    }

    let store = Store::open(database)
        .with_context(|| format!("Failed to open recorder database {}", database.display()))?;
    let readings = store.fetch_temperature_readings(&query)?;
    tracing::debug!("Extracted {} readings in {}", readings.len(), unit);

    if readings.is_empty() && output.format == OutputFormat::Text {
        println!("No temperature readings found");
        return Ok(());
    }

    let opts =
        FormatOptions::new(no_color || config.no_color, unit).with_no_header(output.no_header);

    let formatted = match output.format {
        OutputFormat::Json => format_readings_json(&readings)?,
        OutputFormat::Csv => format_readings_csv(&readings, &opts),
        OutputFormat::Text => format_readings_text(&readings, &opts),
    };
    print!("{}", formatted);

    Ok(())
}

/// Parse a window bound in the recorder's own timestamp layout, or as a
/// bare date meaning midnight.
fn parse_datetime(s: &str) -> Result<PrimitiveDateTime> {
    const DATETIME: &[BorrowedFormatItem<'_>] = format_description!(
        version = 2,
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
    );

    if let Ok(dt) = PrimitiveDateTime::parse(s, DATETIME) {
        return Ok(dt);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(s, date_only) {
        return Ok(date.with_hms(0, 0, 0)?);
    }

    anyhow::bail!(
        "Invalid date/time: {}. Use YYYY-MM-DD or \"YYYY-MM-DD HH:MM:SS[.ffffff]\"",
        s
    )
}
