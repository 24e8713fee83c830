//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use hearth_types::{TemperatureReading, TemperatureUnit};
use owo_colors::OwoColorize;

/// Formatting options for output.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Unit the readings were converted into (display only).
    pub unit: TemperatureUnit,
    /// Omit header row in CSV output.
    pub no_header: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool, unit: TemperatureUnit) -> Self {
        Self {
            no_color,
            unit,
            no_header: false,
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }
}

/// Format readings as human-readable text, one line per reading.
pub fn format_readings_text(readings: &[TemperatureReading], opts: &FormatOptions) -> String {
    let mut out = String::new();
    for reading in readings {
        let temp = format!("{:.1}{}", reading.value, opts.unit);
        if opts.no_color {
            out.push_str(&format!("{}  {:>8}  {}\n", reading.recorded_at, temp, reading.name));
        } else {
            out.push_str(&format!(
                "{}  {:>8}  {}\n",
                reading.recorded_at,
                temp.bold(),
                reading.name.cyan()
            ));
        }
    }
    out
}

/// Format readings as pretty-printed JSON.
pub fn format_readings_json(readings: &[TemperatureReading]) -> Result<String> {
    Ok(serde_json::to_string_pretty(readings)? + "\n")
}

/// Format readings as CSV.
pub fn format_readings_csv(readings: &[TemperatureReading], opts: &FormatOptions) -> String {
    let mut out = String::new();
    if !opts.no_header {
        out.push_str("name,recorded_at,value\n");
    }
    for reading in readings {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_field(&reading.name),
            reading.recorded_at,
            reading.value
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn readings() -> Vec<TemperatureReading> {
        vec![
            TemperatureReading {
                name: "Living Room".to_string(),
                recorded_at: datetime!(2023-04-01 12:00:00),
                value: 21.5,
            },
            TemperatureReading {
                name: "Porch, North".to_string(),
                recorded_at: datetime!(2023-04-01 12:05:00),
                value: -3.0,
            },
        ]
    }

    #[test]
    fn test_text_one_line_per_reading() {
        let opts = FormatOptions::new(true, TemperatureUnit::Celsius);
        let text = format_readings_text(&readings(), &opts);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("21.5°C"));
        assert!(text.contains("Living Room"));
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let opts = FormatOptions::new(true, TemperatureUnit::Celsius);
        let csv = format_readings_csv(&readings(), &opts);

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,recorded_at,value"));
        assert!(csv.contains("\"Porch, North\""));
    }

    #[test]
    fn test_csv_no_header() {
        let opts = FormatOptions::new(true, TemperatureUnit::Celsius).with_no_header(true);
        let csv = format_readings_csv(&readings(), &opts);
        assert!(!csv.starts_with("name,"));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_json_parses_back() {
        let json = format_readings_json(&readings()).unwrap();
        let parsed: Vec<TemperatureReading> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, readings());
    }
}
