//! Stats command - recorder table row counts.

use std::path::Path;

use anyhow::{Context, Result};
use hearth_store::{Store, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct StatsReport {
    events: u64,
    recorder_runs: u64,
    schema_changes: u64,
    states: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<EntityCount>,
}

#[derive(Debug, Serialize)]
struct EntityCount {
    entity_id: String,
    states: u64,
}

/// Execute the stats command.
pub fn cmd_stats(database: &Path, entity: Option<&str>, format: OutputFormat) -> Result<()> {
    let store = Store::open(database)
        .with_context(|| format!("Failed to open recorder database {}", database.display()))?;

    let report = StatsReport {
        events: store.count_table(Table::Events)?,
        recorder_runs: store.count_table(Table::RecorderRuns)?,
        schema_changes: store.count_table(Table::SchemaChanges)?,
        states: store.count_table(Table::States)?,
        entity: match entity {
            Some(id) => Some(EntityCount {
                entity_id: id.to_string(),
                states: store.count_states(Some(id))?,
            }),
            None => None,
        },
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => {
            println!("table,rows");
            println!("events,{}", report.events);
            println!("recorder_runs,{}", report.recorder_runs);
            println!("schema_changes,{}", report.schema_changes);
            println!("states,{}", report.states);
            if let Some(entity) = &report.entity {
                println!("states[{}],{}", entity.entity_id, entity.states);
            }
        }
        OutputFormat::Text => {
            println!("Recorder tables in {}:", database.display());
            println!("  events:          {}", report.events);
            println!("  recorder_runs:   {}", report.recorder_runs);
            println!("  schema_changes:  {}", report.schema_changes);
            println!("  states:          {}", report.states);
            if let Some(entity) = &report.entity {
                println!("  states for {}: {}", entity.entity_id, entity.states);
            }
        }
    }

    Ok(())
}
