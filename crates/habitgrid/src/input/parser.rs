//! CSV parser for habit-tracker exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{DailyTable, SourceMetadata};
use crate::error::{HabitgridError, Result};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Quote character.
    pub quote: u8,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Parses comma-delimited export files into a [`DailyTable`].
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

    /// Parse a file and return the daily table and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DailyTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| HabitgridError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| HabitgridError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = String::from_utf8_lossy(&contents);
        let table = self.parse_text(&text)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.date_count(),
            table.habit_count(),
        );

        Ok((table, metadata))
    }

    /// Parse raw CSV text.
    ///
    /// Empty records (zero fields, or a single empty field) are skipped.
    /// Data rows are padded or truncated to the header width. Empty input
    /// yields an empty table, not an error: "no data" is a valid state.
    pub fn parse_text(&self, text: &str) -> Result<DailyTable> {
        if let Some((line, context)) = unterminated_quote(text, self.config.quote) {
            return Err(HabitgridError::Parse {
                line,
                message: format!("unterminated quoted field in '{}'", context),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut headers: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        for result in reader.records() {
            let record = result?;

            // Blank-line skipping: a record with no fields, or a lone empty
            // field, never becomes a row.
            if record.is_empty() || (record.len() == 1 && record.get(0) == Some("")) {
                continue;
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            if headers.is_empty() {
                headers = row;
                continue;
            }

            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            // Ragged rows degrade to empty trailing cells.
            while row.len() < headers.len() {
                row.push(String::new());
            }
            row.truncate(headers.len());

            rows.push(row);
        }

        Ok(DailyTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan for a quoted field that never closes.
///
/// The csv crate reads an unterminated quote silently to end of input, so
/// the structural check happens up front. Returns the 1-based line where the
/// open quote sits and that line's text.
fn unterminated_quote(text: &str, quote: u8) -> Option<(usize, String)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut line = 1usize;
    let mut at_field_start = true;

    while i < bytes.len() {
        if at_field_start && bytes[i] == quote {
            let open_line = line;
            i += 1;
            loop {
                if i >= bytes.len() {
                    return Some((open_line, line_text(text, open_line)));
                }
                match bytes[i] {
                    b if b == quote => {
                        if bytes.get(i + 1) == Some(&quote) {
                            // Escaped quote inside the field.
                            i += 2;
                        } else {
                            i += 1;
                            break;
                        }
                    }
                    b'\n' => {
                        line += 1;
                        i += 1;
                    }
                    _ => i += 1,
                }
            }
            at_field_start = false;
        } else {
            match bytes[i] {
                b',' => at_field_start = true,
                b'\n' => {
                    line += 1;
                    at_field_start = true;
                }
                b'\r' => {}
                _ => at_field_start = false,
            }
            i += 1;
        }
    }

    None
}

/// Fetch a physical line for error context, trimmed of the line ending.
fn line_text(text: &str, line: usize) -> String {
    text.lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .trim_end_matches('\r')
        .to_string()
}
