use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::dataset::Dataset;

/// Fixed seed for the per-process generator, so the draw sequence is
/// reproducible across runs.
const RNG_SEED: u64 = 12345;

/// Signal that apply or save was invoked with no dataset loaded.
///
/// An explicit result variant rather than an error path: the caller
/// treats it as a silent no-op and suppresses any visible update.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("no dataset loaded")]
pub struct NoDataset;

/// The single mutable slot the whole viewer operates on.
///
/// Holds at most one dataset and the filename it was loaded from, plus
/// the process RNG consumed by the transform handler. Designed for one
/// active user: callers that share a `ViewerState` across requests must
/// wrap it in their own lock (the web layer holds it in a `Mutex`), and
/// interleaved uploads from two clients still last-write-win on the slot.
pub struct ViewerState {
    pub dataset: Option<Dataset>,
    pub origin: Option<String>,
    pub rng: StdRng,
}

impl ViewerState {
    /// Fresh state with an empty slot and a newly seeded generator.
    pub fn new() -> Self {
        ViewerState {
            dataset: None,
            origin: None,
            rng: StdRng::seed_from_u64(RNG_SEED),
        }
    }

    /// Clear the dataset slot and its origin.
    ///
    /// Runs at the start of every upload attempt, including ones that go
    /// on to fail, so no residue of an earlier upload survives into an
    /// error state. The RNG is deliberately left alone: it is seeded once
    /// per process, not per upload.
    pub fn reset(&mut self) {
        self.dataset = None;
        self.origin = None;
    }

    /// Whether a dataset is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
