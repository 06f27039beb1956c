/*!
# CSV Data Viewer

A browser-based CSV dataset viewer, built in Rust.

## Overview

The application serves a single interactive page: a user uploads a CSV
file, the server validates it and renders it as a table, an "Apply
Function" button scales every value by a fresh random draw, and a "Save
Data" button writes the current dataset back to disk under a timestamped
filename. There is exactly one dataset in memory at a time.

## Architecture

The application follows a client-server architecture:

### Frontend Layer
- **Technologies**: HTML, CSS, JavaScript (embedded single page)
- **Key Components**:
  - Upload control - reads the chosen file as a base64 data URL
  - Control buttons - apply / save, enabled only while a dataset is loaded
  - Table view - renders the column list and row records, switching to a
    virtualized scroll view for large datasets

### Backend Layer
- **Technologies**: Rust, axum
- **Core Components**:
  - Dataset - named columns over row-aligned tagged cell values
  - Validator - minimal shape/type check (non-empty, all-numeric)
  - Viewer State - the single mutable slot holding the dataset, its
    origin filename and the process RNG
  - Upload / Transform / Persist handlers - the three UI event handlers
  - Table Renderer - display projection with a synthetic row-index
    column and a virtualization policy

### Data Persistence Layer
- Flat CSV files in the working directory, one per save, named
  `<YYYY-MM-DD_HH-MM-SS>_<original-filename>`

## Modules

- **dataset**: tabular value and tagged cell type
- **validator**: dataset shape/type validation
- **loader**: upload decoding and CSV parsing, error classification
- **state**: the process-wide dataset slot
- **transform**: the per-cell noise function
- **render**: display-ready table projection
- **saving**: CSV serialization and timestamped persistence
- **handlers**: the upload/apply/save operations over a state slot
- **app**: routing and the shared application state

## REST API Endpoints

- `GET /` - the viewer page
- `GET /api/table` - current rendered table, if any
- `POST /api/upload` - upload a CSV file (base64 contents + filename)
- `POST /api/apply` - apply the noise function to the loaded dataset
- `POST /api/save` - persist the loaded dataset to a timestamped file
*/

pub mod app;
pub mod dataset;
pub mod handlers;
pub mod loader;
pub mod render;
pub mod saving;
pub mod state;
pub mod transform;
pub mod validator;

/// Re-export the core types to make the crate easier to use
pub use dataset::{CellValue, Dataset};
pub use handlers::{on_apply, on_save, on_upload, UploadResult};
pub use loader::UploadError;
pub use render::{render, RenderedTable};
pub use state::{NoDataset, ViewerState};
pub use validator::{validate, ValidationError};
