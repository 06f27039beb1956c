use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::dataset::{CellValue, Dataset};
use crate::validator::ValidationError;

/// Classified upload failure.
///
/// Every variant's `Display` text is the exact status message the page
/// shows for that failure, "Error: " prefix included.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UploadError {
    #[error("Error: {0} is not a CSV file.")]
    InvalidExtension(String),

    #[error("Error: Uploaded file is empty.")]
    EmptyContent,

    #[error("Error: Invalid file contents.")]
    DecodeOrParse,

    #[error("Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Other(String),
}

/// Decode the transport encoding of an uploaded file into text.
///
/// The browser delivers file contents as a `data:<mime>;base64,<payload>`
/// URL; a bare base64 payload is accepted too. Malformed base64 surfaces
/// its own description, a payload that is not UTF-8 is classified as
/// invalid contents.
pub fn decode_contents(contents: &str) -> Result<String, UploadError> {
    // Strip the data-URL prefix if present
    let payload = match contents.split_once(',') {
        Some((_, payload)) => payload,
        None => contents,
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| UploadError::Other(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| UploadError::DecodeOrParse)
}

/// Parse comma-separated text into a [`Dataset`].
///
/// The first non-blank line is the header; blank lines are skipped. Rows
/// shorter than the header are padded with missing cells, rows longer
/// than the header are a parse failure.
///
/// # Examples
/// ```
/// use dataviewer::loader::parse_csv;
///
/// let dataset = parse_csv("a,b\n1,2\n3,4\n").unwrap();
/// assert_eq!(dataset.columns, vec!["a", "b"]);
/// assert_eq!(dataset.n_rows(), 2);
/// ```
pub fn parse_csv(text: &str) -> Result<Dataset, UploadError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => line,
        None => return Err(UploadError::EmptyContent),
    };

    let columns: Vec<String> = split_csv_line(header);
    let width = columns.len();

    let mut rows = Vec::new();
    for line in lines {
        let fields = split_csv_line(line);
        if fields.len() > width {
            return Err(UploadError::DecodeOrParse);
        }

        let mut row: Vec<CellValue> = fields.iter().map(|f| CellValue::parse(f)).collect();
        row.resize(width, CellValue::Missing);
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Decode and parse an upload in one step.
pub fn load_csv_upload(contents: &str) -> Result<Dataset, UploadError> {
    let text = decode_contents(contents)?;
    parse_csv(&text)
}

/// Check the filename extension gate for uploads.
pub fn has_csv_extension(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".csv")
}

// Split a CSV line into raw fields, honoring quoted fields and
// doubled-quote escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field - literal quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current);
                current = String::new();
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_commas() {
        let fields = split_csv_line(r#""a,b",c"#);
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn doubled_quotes_unescape() {
        let fields = split_csv_line(r#""say ""hi""",2"#);
        assert_eq!(fields, vec![r#"say "hi""#, "2"]);
    }
}
