use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::dataset::{CellValue, Dataset};

/// Row count above which the frontend switches to a virtualized table.
pub const VIRTUALIZATION_THRESHOLD: usize = 100;

/// Name of the synthetic row-index column prepended on every render.
pub const INDEX_COLUMN: &str = "index";

/// Paging mode of the rendered table.
#[derive(Clone, Copy, Serialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PageAction {
    /// Paging off; the virtualized view scrolls instead.
    None,
    /// The table widget's own paging.
    Native,
}

/// Column descriptor as the table widget consumes it.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub id: String,
}

/// Display-only projection of a [`Dataset`].
///
/// Holds no identity of its own: it is recomputed from the dataset on
/// every render, index column included.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct RenderedTable {
    pub columns: Vec<ColumnSpec>,
    pub records: Vec<Map<String, Value>>,
    pub virtualization: bool,
    pub page_action: PageAction,
    pub editable: bool,
}

/// Format a dataset into a display-ready table description.
///
/// A synthetic row-index column is prepended (derived from the current
/// row order, not stored), virtualization switches on above
/// [`VIRTUALIZATION_THRESHOLD`] rows, and the table is always
/// non-editable. Deterministic: rendering the same dataset twice gives
/// identical output.
pub fn render(dataset: &Dataset) -> RenderedTable {
    let mut columns = Vec::with_capacity(dataset.n_cols() + 1);
    columns.push(ColumnSpec {
        name: INDEX_COLUMN.to_string(),
        id: INDEX_COLUMN.to_string(),
    });
    for name in &dataset.columns {
        columns.push(ColumnSpec {
            name: name.clone(),
            id: name.clone(),
        });
    }

    let records = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut record = Map::new();
            record.insert(INDEX_COLUMN.to_string(), Value::from(i as u64));
            for (name, cell) in dataset.columns.iter().zip(row) {
                record.insert(name.clone(), cell_to_json(cell));
            }
            record
        })
        .collect();

    let virtualization = dataset.n_rows() > VIRTUALIZATION_THRESHOLD;
    let page_action = if virtualization {
        PageAction::None
    } else {
        PageAction::Native
    };

    RenderedTable {
        columns,
        records,
        virtualization,
        page_action,
        editable: false,
    }
}

// Non-finite floats have no JSON representation; they render as null,
// like a missing cell.
fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Missing => Value::Null,
    }
}
