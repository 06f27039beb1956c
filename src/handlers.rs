use std::path::Path;

use crate::loader::{self, UploadError};
use crate::render::{render, RenderedTable};
use crate::saving;
use crate::state::{NoDataset, ViewerState};
use crate::transform::apply_noise;
use crate::validator::validate;

/// Outcome of an upload attempt, as the presentation layer consumes it.
///
/// Never persisted; the web layer projects it onto the page's control
/// states (status text, apply/save/upload disabled flags, table
/// content). The upload control stays enabled on both paths.
#[derive(Debug, PartialEq)]
pub enum UploadResult {
    Error { message: String },
    Success { message: String, table: RenderedTable },
}

impl UploadResult {
    pub fn message(&self) -> &str {
        match self {
            UploadResult::Error { message } => message,
            UploadResult::Success { message, .. } => message,
        }
    }

    pub fn table(&self) -> Option<&RenderedTable> {
        match self {
            UploadResult::Error { .. } => None,
            UploadResult::Success { table, .. } => Some(table),
        }
    }
}

/// Handle a file upload.
///
/// The state is reset before anything else, so a failed upload cannot
/// leave an earlier dataset behind. The filename is gated on a `.csv`
/// extension (case-insensitive), then the contents are base64-decoded,
/// parsed and validated. On success the dataset and its origin filename
/// move into the state slot and the rendered table comes back with the
/// status message.
pub fn on_upload(state: &mut ViewerState, contents: &str, filename: &str) -> UploadResult {
    // Reset behaviour if a new file is uploaded on the same page
    state.reset();

    match load_upload(contents, filename) {
        Ok(dataset) => {
            let table = render(&dataset);
            state.dataset = Some(dataset);
            state.origin = Some(filename.to_string());

            log::info!("loaded dataset from {}", filename);
            UploadResult::Success {
                message: format!("{} uploaded successfully", filename),
                table,
            }
        }
        Err(e) => {
            log::warn!("rejected upload of {}: {}", filename, e);
            UploadResult::Error {
                message: e.to_string(),
            }
        }
    }
}

fn load_upload(contents: &str, filename: &str) -> Result<crate::dataset::Dataset, UploadError> {
    if !loader::has_csv_extension(filename) {
        return Err(UploadError::InvalidExtension(filename.to_string()));
    }

    let dataset = loader::load_csv_upload(contents)?;
    validate(&dataset)?;

    Ok(dataset)
}

/// Apply the per-cell noise function to the loaded dataset in place and
/// re-render.
///
/// With no dataset loaded this is a no-op signalled by [`NoDataset`];
/// nothing changes and nothing is rendered. Reapplying to a loaded
/// dataset changes the values again - the transform is not idempotent.
pub fn on_apply(state: &mut ViewerState) -> Result<RenderedTable, NoDataset> {
    let dataset = state.dataset.as_mut().ok_or(NoDataset)?;

    apply_noise(dataset, &mut state.rng);

    Ok(render(dataset))
}

/// Write the loaded dataset to a timestamped CSV file under `dir` and
/// return the status message.
///
/// With no dataset loaded this is a no-op signalled by [`NoDataset`].
/// The save failing at the filesystem level is surfaced as a status
/// message too - no upload-level error ever escapes a handler.
pub fn on_save(state: &ViewerState, dir: impl AsRef<Path>) -> Result<String, NoDataset> {
    let dataset = state.dataset.as_ref().ok_or(NoDataset)?;
    let origin = state.origin.as_deref().ok_or(NoDataset)?;

    match saving::save_dataset(dataset, origin, dir) {
        Ok(filename) => {
            log::info!("saved dataset as {}", filename);
            Ok(format!("Data saved as {}", filename))
        }
        Err(e) => {
            log::warn!("failed to save dataset: {}", e);
            Ok(format!("Error: {}", e))
        }
    }
}
