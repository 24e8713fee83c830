//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hearth_types::TemperatureUnit;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Reusable output format and unit arguments
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Convert temperatures to Fahrenheit (overrides --celsius and config)
    #[arg(long, conflicts_with = "celsius")]
    pub fahrenheit: bool,

    /// Convert temperatures to Celsius (default, overrides config)
    #[arg(long, conflicts_with = "fahrenheit")]
    pub celsius: bool,

    /// Target unit by name (celsius or fahrenheit)
    #[arg(long, conflicts_with_all = ["fahrenheit", "celsius"])]
    pub unit: Option<String>,

    /// Omit header row in CSV output (useful for appending)
    #[arg(long)]
    pub no_header: bool,
}

impl OutputArgs {
    /// Resolve the target unit: explicit flags first, then `--unit`, then
    /// the config file. Unknown unit names fail here, before any query runs.
    pub fn resolve_unit(&self, config_unit: Option<&str>) -> anyhow::Result<TemperatureUnit> {
        if self.fahrenheit {
            return Ok(TemperatureUnit::Fahrenheit);
        }
        if self.celsius {
            return Ok(TemperatureUnit::Celsius);
        }
        if let Some(name) = self.unit.as_deref().or(config_unit) {
            return Ok(TemperatureUnit::from_name(name)?);
        }
        Ok(TemperatureUnit::Celsius)
    }
}

#[derive(Parser)]
#[command(name = "hearth")]
#[command(author, version, about = "CLI for Home Assistant recorder databases", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show row counts for the recorder tables
    Stats {
        /// Path to the recorder database (falls back to the config file)
        database: Option<PathBuf>,

        /// Also count state rows for this exact entity id
        #[arg(short, long)]
        entity: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract temperature readings
    Temps {
        /// Path to the recorder database (falls back to the config file)
        database: Option<PathBuf>,

        /// Include only readings at or after this time
        /// (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS[.ffffff]")
        #[arg(long)]
        since: Option<String>,

        /// Include only readings at or before this time
        #[arg(long)]
        until: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_args() -> OutputArgs {
        OutputArgs {
            format: OutputFormat::Text,
            fahrenheit: false,
            celsius: false,
            unit: None,
            no_header: false,
        }
    }

    #[test]
    fn test_resolve_unit_defaults_to_celsius() {
        let args = output_args();
        assert_eq!(args.resolve_unit(None).unwrap(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_resolve_unit_flag_wins_over_config() {
        let args = OutputArgs {
            fahrenheit: true,
            ..output_args()
        };
        assert_eq!(
            args.resolve_unit(Some("celsius")).unwrap(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn test_resolve_unit_name_wins_over_config() {
        let args = OutputArgs {
            unit: Some("fahrenheit".to_string()),
            ..output_args()
        };
        assert_eq!(
            args.resolve_unit(Some("celsius")).unwrap(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn test_resolve_unit_falls_back_to_config() {
        let args = output_args();
        assert_eq!(
            args.resolve_unit(Some("fahrenheit")).unwrap(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn test_resolve_unit_rejects_unknown_name() {
        let args = OutputArgs {
            unit: Some("kelvin".to_string()),
            ..output_args()
        };
        assert!(args.resolve_unit(None).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
