//! Row serialization with pluggable output formats.
//!
//! [`process_data`] takes the serializer as an argument instead of a format
//! tag, so a new format is a new [`RowSerializer`] and nothing else.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Turns a table of string rows into one string
pub trait RowSerializer {
    /// Serializes `rows`
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    fn serialize(&self, rows: &[Vec<String>]) -> Result<String>;
}

impl<F: Fn(&[Vec<String>]) -> String> RowSerializer for F {
    fn serialize(&self, rows: &[Vec<String>]) -> Result<String> {
        Ok(self(rows))
    }
}

/// JSON array of arrays, compact
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl RowSerializer for JsonSerializer {
    fn serialize(&self, rows: &[Vec<String>]) -> Result<String> {
        Ok(serde_json::to_string(rows)?)
    }
}

/// Fields joined by `,`, rows joined by `\n`; no quoting
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSerializer;

impl RowSerializer for CsvSerializer {
    fn serialize(&self, rows: &[Vec<String>]) -> Result<String> {
        Ok(rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// `<row>{fields}</row>` per row, everything concatenated; no escaping
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl RowSerializer for XmlSerializer {
    fn serialize(&self, rows: &[Vec<String>]) -> Result<String> {
        Ok(rows
            .iter()
            .map(|row| format!("<row>{}</row>", row.concat()))
            .collect())
    }
}

/// Serializes `rows` with whichever serializer the caller supplies
///
/// ```rust
/// use solid_patterns::export::{process_data, CsvSerializer};
///
/// let rows = vec![vec!["name".to_string(), "age".to_string()]];
/// assert_eq!(process_data(&rows, &CsvSerializer).unwrap(), "name,age");
/// ```
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn process_data<S: RowSerializer + ?Sized>(
    rows: &[Vec<String>],
    serializer: &S,
) -> Result<String> {
    serializer.serialize(rows)
}

/// Output formats known to the demo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// [`JsonSerializer`]
    Json,
    /// [`CsvSerializer`]
    #[default]
    Csv,
    /// [`XmlSerializer`]
    Xml,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Xml => write!(f, "xml"),
        }
    }
}
