//! Field list loader for JSON and delimited text, with format detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use super::record::{FieldRecord, RawValue};
use super::source::SourceMetadata;
use crate::error::{DiamondError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Column headers that name a field in delimited input, in priority order.
const NAME_HEADERS: &[&str] = &["name", "fieldName", "field_name", "field"];

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON array of objects, or an object with a `fields` array.
    Json,
    /// Header row plus one row per field.
    Delimited,
}

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Input format (None = detect from extension, then content).
    pub format: Option<InputFormat>,
    /// Delimiter for delimited input (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum records to read (None = all).
    pub max_records: Option<usize>,
}

/// Loads field lists from files or bytes.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return its field records and metadata.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Vec<FieldRecord>, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| DiamondError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| DiamondError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let format = match self.config.format {
            Some(f) => f,
            None => detect_format(path, &contents)?,
        };

        let (records, format_name) = match format {
            InputFormat::Json => (self.parse_json(&contents)?, "json".to_string()),
            InputFormat::Delimited => {
                let delimiter = match self.config.delimiter {
                    Some(d) => d,
                    None => detect_delimiter(&contents)?,
                };
                let name = match delimiter {
                    b'\t' => "tsv",
                    b',' => "csv",
                    b';' => "csv-semicolon",
                    b'|' => "psv",
                    _ => "delimited",
                };
                (self.parse_delimited(&contents, delimiter)?, name.to_string())
            }
        };

        debug!(records = records.len(), format = %format_name, "loaded field list");

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format_name,
            records.len(),
        );

        Ok((records, metadata))
    }

    /// Parse JSON bytes into field records.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<Vec<FieldRecord>> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;

        let items = match &value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(map) => match map.get("fields") {
                Some(serde_json::Value::Array(items)) => items,
                _ => {
                    return Err(DiamondError::UnsupportedFormat(
                        "JSON object without a 'fields' array".to_string(),
                    ));
                }
            },
            _ => {
                return Err(DiamondError::UnsupportedFormat(
                    "expected a JSON array of field objects".to_string(),
                ));
            }
        };

        let limit = self.config.max_records.unwrap_or(usize::MAX);
        let records = items
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, item)| match item {
                serde_json::Value::Object(object) => Ok(FieldRecord::from_json_object(index, object)),
                other => Err(DiamondError::UnsupportedFormat(format!(
                    "field entry {} is not an object: {}",
                    index + 1,
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        if records.is_empty() {
            return Err(DiamondError::EmptyData("No field records found".to_string()));
        }

        Ok(records)
    }

    /// Parse delimited bytes into field records.
    pub fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<FieldRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.trim().to_string()).collect();

        if headers.is_empty() {
            return Err(DiamondError::EmptyData("No columns found".to_string()));
        }

        let name_column = NAME_HEADERS
            .iter()
            .find_map(|candidate| headers.iter().position(|h| h == candidate));

        let mut records = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_records {
                if row_idx >= max {
                    break;
                }
            }

            let row = result?;

            let name = name_column
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .unwrap_or_else(|| format!("Field {}", row_idx + 1));

            let mut record = FieldRecord::new(name);
            for (i, header) in headers.iter().enumerate() {
                let cell = row.get(i).unwrap_or("");
                let value = if is_blank_cell(cell) {
                    RawValue::Absent
                } else {
                    RawValue::Text(cell.to_string())
                };
                record.insert(header.clone(), value);
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(DiamondError::EmptyData("No data rows found".to_string()));
        }

        Ok(records)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty or whitespace-only cell is a missing value. Words like "none"
/// or "n/a" are real answers and stay as text, matching JSON input.
fn is_blank_cell(value: &str) -> bool {
    value.trim().is_empty()
}

/// Pick a format from the file extension, falling back to the first
/// non-whitespace byte.
fn detect_format(path: &Path, bytes: &[u8]) -> Result<InputFormat> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => return Ok(InputFormat::Json),
        Some("csv" | "tsv" | "psv" | "txt") => return Ok(InputFormat::Delimited),
        _ => {}
    }

    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[' | b'{') => Ok(InputFormat::Json),
        Some(_) => Ok(InputFormat::Delimited),
        None => Err(DiamondError::EmptyData("File is empty".to_string())),
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(DiamondError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat raw frequency; tab gets a
        // small bonus since it rarely appears inside values
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
