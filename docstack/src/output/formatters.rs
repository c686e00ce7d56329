//! Stack formatter implementations.

use std::io;

use crate::{DocumentStack, Error, Result};

use super::StackFormatter;

/// Column headers for delimited output.
const COLUMN_HEADERS: [&str; 4] = ["depth", "uri", "display_name", "mime_type"];

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl StackFormatter for HumanFormatter {
    fn format(&self, stack: &DocumentStack) -> Result<String> {
        let mut lines = vec![stack.breadcrumb().join(" > ")];
        lines.push(format!("  root: {} ({})", stack.root().title, stack.root()));

        for (depth, doc) in stack.iter().enumerate() {
            let marker = if doc.is_directory() { "/" } else { "" };
            lines.push(format!(
                "  {}{}{marker}  {}",
                "  ".repeat(depth),
                doc.display_name,
                doc.uri
            ));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl StackFormatter for JsonFormatter {
    fn format(&self, stack: &DocumentStack) -> Result<String> {
        Ok(serde_json::to_string_pretty(stack)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl StackFormatter for YamlFormatter {
    fn format(&self, stack: &DocumentStack) -> Result<String> {
        Ok(serde_yaml::to_string(stack)?)
    }
}

/// Formatter for CSV output, one row per document with depth starting at 1.
pub struct CsvFormatter;

impl StackFormatter for CsvFormatter {
    fn format(&self, stack: &DocumentStack) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMN_HEADERS)?;

        for (index, doc) in stack.iter().enumerate() {
            writer.write_record([
                (index + 1).to_string().as_str(),
                doc.uri.as_str(),
                doc.display_name.as_str(),
                doc.mime_type.as_str(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
