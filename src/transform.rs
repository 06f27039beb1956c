use rand::Rng;

use crate::dataset::{CellValue, Dataset};

/// Scale every numeric cell by an independent fresh draw in `[0, 1)`.
///
/// Intentionally non-deterministic and non-idempotent: each cell
/// consumes its own draw from the shared generator, so applying twice to
/// the same dataset changes the values again. Missing cells stay
/// missing (there is no number to scale).
pub fn apply_noise<R: Rng>(dataset: &mut Dataset, rng: &mut R) {
    dataset.map_cells(|cell| match cell {
        CellValue::Number(n) => CellValue::Number(n * rng.gen::<f64>()),
        other => other.clone(),
    });
}
