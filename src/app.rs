#![cfg(not(tarpaulin_include))]

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::handlers::{on_apply, on_save, on_upload, UploadResult};
use crate::render::{render, RenderedTable};
use crate::state::ViewerState;

pub struct AppState {
    viewer: Mutex<ViewerState>,
}

#[derive(Deserialize)]
struct UploadRequest {
    filename: String,
    /// Base64 file contents, bare or as a `data:` URL.
    contents: String,
}

/// Mirror of the page's five output slots: status line, the three
/// control disabled flags, and the table container.
#[derive(Serialize)]
struct UploadResponse {
    file_status: String,
    apply_disabled: bool,
    save_disabled: bool,
    upload_disabled: bool,
    table: Option<RenderedTable>,
}

#[derive(Serialize)]
struct ApplyResponse {
    /// False when no dataset is loaded; the page suppresses any update.
    updated: bool,
    table: Option<RenderedTable>,
}

#[derive(Serialize)]
struct SaveResponse {
    updated: bool,
    file_status: Option<String>,
}

#[derive(Serialize)]
struct TableResponse {
    table: Option<RenderedTable>,
}

/// Start the viewer on `127.0.0.1:{port}`.
pub async fn run(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // One dataset slot for the whole process
    let app_state = Arc::new(AppState {
        viewer: Mutex::new(ViewerState::new()),
    });

    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/table", get(get_table))
        .route("/api/upload", post(upload))
        .route("/api/apply", post(apply))
        .route("/api/save", post(save))
        .with_state(app_state);

    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    log::info!("Listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

/// Current table for a freshly (re)loaded page, or null when the slot is
/// empty.
async fn get_table(State(state): State<Arc<AppState>>) -> Json<TableResponse> {
    let viewer = state.viewer.lock().unwrap();

    Json(TableResponse {
        table: viewer.dataset.as_ref().map(render),
    })
}

async fn upload(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UploadRequest>,
) -> Json<UploadResponse> {
    let mut viewer = state.viewer.lock().unwrap();

    let response = match on_upload(&mut viewer, &payload.contents, &payload.filename) {
        UploadResult::Success { message, table } => UploadResponse {
            file_status: message,
            apply_disabled: false,
            save_disabled: false,
            upload_disabled: false,
            table: Some(table),
        },
        UploadResult::Error { message } => UploadResponse {
            file_status: message,
            apply_disabled: true,
            save_disabled: true,
            upload_disabled: false,
            table: None,
        },
    };

    Json(response)
}

async fn apply(State(state): State<Arc<AppState>>) -> Json<ApplyResponse> {
    let mut viewer = state.viewer.lock().unwrap();

    let response = match on_apply(&mut viewer) {
        Ok(table) => ApplyResponse {
            updated: true,
            table: Some(table),
        },
        Err(_) => ApplyResponse {
            updated: false,
            table: None,
        },
    };

    Json(response)
}

async fn save(State(state): State<Arc<AppState>>) -> Json<SaveResponse> {
    let viewer = state.viewer.lock().unwrap();

    // Saves land in the process's working directory
    let response = match on_save(&viewer, ".") {
        Ok(status) => SaveResponse {
            updated: true,
            file_status: Some(status),
        },
        Err(_) => SaveResponse {
            updated: false,
            file_status: None,
        },
    };

    Json(response)
}
