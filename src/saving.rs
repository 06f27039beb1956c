use chrono::{Local, NaiveDateTime};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::dataset::Dataset;

/// Convert a dataset to CSV format.
///
/// This function exports a dataset to CSV (Comma-Separated Values) format.
/// It creates a string with the dataset contents where:
/// - The header row is the original column names
/// - Values are comma-separated, missing cells become empty fields
/// - Special characters (commas, quotes, newlines) are properly escaped
///
/// The synthetic row-index column the renderer prepends is display-only
/// and never written.
///
/// # Arguments
/// * `dataset` - Reference to the dataset to convert
///
/// # Returns
/// * `String` - CSV content, one line per row plus the header
///
/// # Examples
/// ```
/// use dataviewer::dataset::{CellValue, Dataset};
/// use dataviewer::saving::to_csv;
///
/// let dataset = Dataset::new(
///     vec!["a".into(), "b".into()],
///     vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]],
/// );
/// assert_eq!(to_csv(&dataset), "a,b\n1,2\n");
/// ```
pub fn to_csv(dataset: &Dataset) -> String {
    let mut csv_content = String::new();

    for (c, name) in dataset.columns.iter().enumerate() {
        if c > 0 {
            csv_content.push(',');
        }
        push_field(&mut csv_content, name);
    }
    csv_content.push('\n');

    for row in &dataset.rows {
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                csv_content.push(',');
            }
            push_field(&mut csv_content, &cell.to_field());
        }
        csv_content.push('\n');
    }

    csv_content
}

/// Build the timestamped output filename for a save.
///
/// Pure so the convention is testable without touching the clock:
/// `<YYYY-MM-DD_HH-MM-SS>_<original-filename>`.
pub fn save_filename(origin: &str, timestamp: NaiveDateTime) -> String {
    format!("{}_{}", timestamp.format("%Y-%m-%d_%H-%M-%S"), origin)
}

/// Write the dataset as CSV under `dir`, stamped with the current local
/// time, and return the filename.
///
/// No overwrite protection: a second save within the same second for the
/// same origin silently replaces the first.
pub fn save_dataset(
    dataset: &Dataset,
    origin: &str,
    dir: impl AsRef<Path>,
) -> std::io::Result<String> {
    let filename = save_filename(origin, Local::now().naive_local());

    let mut file = File::create(dir.as_ref().join(&filename))?;
    file.write_all(to_csv(dataset).as_bytes())?;

    Ok(filename)
}

// Escape a single field - quote it when it contains a comma, quote or
// newline.
fn push_field(out: &mut String, field: &str) {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        let escaped = field.replace('"', "\"\"");
        out.push('"');
        out.push_str(&escaped);
        out.push('"');
    } else {
        out.push_str(field);
    }
}
