//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Print a collection projected into headers + rows; json/yaml fall back
    /// to the raw records.
    pub fn print_table<T: Serialize>(&self, headers: &[String], rows: Vec<Vec<String>>, raw: &T) {
        match self {
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(headers.iter().map(String::as_str));
                for row in rows {
                    builder.push_record(row);
                }
                println!("{}", builder.build().with(Style::rounded()));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(raw).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(raw).unwrap_or_default());
            }
        }
    }

    /// Print one record as label/value pairs.
    pub fn print_record<T: Serialize>(&self, pairs: &[(String, String)], raw: &T) {
        match self {
            OutputFormat::Table => {
                let mut builder = Builder::default();
                for (label, value) in pairs {
                    builder.push_record([label.as_str(), value.as_str()]);
                }
                println!("{}", builder.build().with(Style::rounded()));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(raw).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(raw).unwrap_or_default());
            }
        }
    }
}
