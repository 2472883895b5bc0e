//! Output rendering.
//!
//! The engine returns a tagged result shape; this module serializes it
//! in one of two interchangeable formats, strictly after resolution has
//! completed. JSON mode prints list shapes one item per line and
//! pretty-prints record shapes; YAML mode dumps the shape as-is.

use anyhow::Result;
use clap::ValueEnum;
use iam_metadata_query_core::QueryOutput;
use std::fmt::Write as _;

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Serialize a query result for printing.
pub fn render(output: &QueryOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(output)?),
        OutputFormat::Json => match output {
            QueryOutput::StringList(items) => {
                let mut text = String::new();
                for item in items {
                    writeln!(text, "{}", item)?;
                }
                Ok(text)
            }
            QueryOutput::RecordList(_) | QueryOutput::SingleRecord(_) => {
                let mut text = serde_json::to_string_pretty(output)?;
                text.push('\n');
                Ok(text)
            }
        },
    }
}
