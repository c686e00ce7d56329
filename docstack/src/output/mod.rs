//! Output formatting for resolved document stacks.
//!
//! A stack can be rendered as a human-readable breadcrumb, serialized as
//! JSON or YAML, or flattened into CSV rows.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DocumentStack, Error, Result};

pub use formatters::{CsvFormatter, HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for rendering a document stack.
pub trait StackFormatter {
    /// Format the given stack into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, stack: &DocumentStack) -> Result<String>;
}

/// Available output formats for document stacks.
///
/// # Examples
///
/// ```
/// use docstack::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(OutputFormat::default().to_string(), "human");
/// assert!("xml".parse::<OutputFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Breadcrumb followed by one line per document.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// One CSV row per document.
    Csv,
}

impl OutputFormat {
    /// All formats, in the order they are listed in help output.
    pub const ALL: [Self; 4] = [Self::Human, Self::Json, Self::Yaml, Self::Csv];

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn StackFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }

    /// The lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown format '{s}', expected human, json, yaml, or csv"),
            })
    }
}
