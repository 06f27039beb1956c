use serde::{Deserialize, Serialize};

/// A single cell of the dataset.
///
/// Parsing never fails at the cell level: text that does not read as a
/// number becomes `Text`, an empty field becomes `Missing`. Whether a
/// `Text` cell is acceptable is the validator's call, not the parser's.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Parse a raw CSV field into a cell value.
    ///
    /// Surrounding whitespace is ignored for numeric detection, matching
    /// common CSV reader behaviour.
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(field.to_string()),
        }
    }

    /// `Missing` counts as numeric: an empty field is an absent number,
    /// not a textual value.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CellValue::Text(_))
    }

    /// The CSV text projection of this cell. `Missing` serializes as an
    /// empty field.
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

/// The in-memory tabular value the viewer operates on.
///
/// Columns are ordered and named; cells are stored row-major. Invariant:
/// every row holds exactly `columns.len()` cells. The parser enforces it
/// structurally, so the rest of the crate can index freely.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Dataset { columns, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Apply a function to every cell in place.
    ///
    /// This is the substrate of the "apply function" button; the closure
    /// is free to consume external state (e.g. an RNG) between cells.
    pub fn map_cells<F>(&mut self, mut f: F)
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                *cell = f(cell);
            }
        }
    }
}
