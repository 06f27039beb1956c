use base64::{engine::general_purpose::STANDARD, Engine as _};
use dataviewer::dataset::CellValue;
use dataviewer::handlers::{on_upload, UploadResult};
use dataviewer::loader::{decode_contents, parse_csv, UploadError};
use dataviewer::state::ViewerState;

// Encode text the way the browser's FileReader delivers it
fn as_data_url(text: &str) -> String {
    format!("data:text/csv;base64,{}", STANDARD.encode(text))
}

fn as_data_url_bytes(bytes: &[u8]) -> String {
    format!("data:text/csv;base64,{}", STANDARD.encode(bytes))
}

#[test]
fn uploads_a_valid_csv() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url("a,b\n1,2\n3,4\n"), "data.csv");

    match result {
        UploadResult::Success { message, table } => {
            assert_eq!(message, "data.csv uploaded successfully");
            // 2 rows x 3 columns, index column included
            assert_eq!(table.records.len(), 2);
            assert_eq!(table.columns.len(), 3);
        }
        UploadResult::Error { message } => panic!("upload rejected: {}", message),
    }

    assert!(state.is_loaded());
    assert_eq!(state.origin.as_deref(), Some("data.csv"));
}

#[test]
fn rejects_non_csv_extension() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url("a,b\n1,2\n"), "data.txt");

    assert_eq!(result.message(), "Error: data.txt is not a CSV file.");
    assert!(result.table().is_none());
    assert!(!state.is_loaded());
}

#[test]
fn extension_check_is_case_insensitive() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url("a,b\n1,2\n"), "DATA.CSV");

    assert!(matches!(result, UploadResult::Success { .. }));
}

#[test]
fn rejects_non_numeric_cells() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url("a,b\nx,2\n"), "data.csv");

    assert!(result
        .message()
        .contains("Dataset must be entirely numerical"));
    assert!(result.table().is_none());
    assert!(!state.is_loaded());
}

#[test]
fn rejects_empty_file() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url(""), "data.csv");

    assert_eq!(result.message(), "Error: Uploaded file is empty.");
}

#[test]
fn rejects_header_only_file() {
    let mut state = ViewerState::new();

    // Parses to a zero-row dataset, which the validator refuses
    let result = on_upload(&mut state, &as_data_url("a,b\n"), "data.csv");

    assert_eq!(
        result.message(),
        "Error: Dataset must have at least 1 row and 1 column, and a header."
    );
}

#[test]
fn rejects_non_utf8_contents() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url_bytes(&[0xff, 0xfe, 0x00]), "data.csv");

    assert_eq!(result.message(), "Error: Invalid file contents.");
}

#[test]
fn rejects_rows_wider_than_the_header() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, &as_data_url("a,b\n1,2,3\n"), "data.csv");

    assert_eq!(result.message(), "Error: Invalid file contents.");
}

#[test]
fn surfaces_malformed_base64_with_details() {
    let mut state = ViewerState::new();

    let result = on_upload(&mut state, "data:text/csv;base64,!!not-base64!!", "data.csv");

    match result {
        UploadResult::Error { message } => assert!(message.starts_with("Error: ")),
        UploadResult::Success { .. } => panic!("malformed base64 accepted"),
    }
}

#[test]
fn failed_upload_clears_the_previous_dataset() {
    let mut state = ViewerState::new();

    let first = on_upload(&mut state, &as_data_url("a,b\n1,2\n"), "data.csv");
    assert!(matches!(first, UploadResult::Success { .. }));
    assert!(state.is_loaded());

    // A rejected upload must not leave the earlier dataset behind
    let second = on_upload(&mut state, &as_data_url("a,b\n1,2\n"), "data.txt");
    assert!(matches!(second, UploadResult::Error { .. }));
    assert!(!state.is_loaded());
    assert_eq!(state.origin, None);
}

#[test]
fn decodes_bare_base64_without_a_data_url_prefix() {
    let text = decode_contents(&STANDARD.encode("a,b\n1,2\n")).unwrap();
    assert_eq!(text, "a,b\n1,2\n");
}

#[test]
fn short_rows_pad_with_missing_cells() {
    let dataset = parse_csv("a,b,c\n1,2\n").unwrap();
    assert_eq!(dataset.rows[0][2], CellValue::Missing);
}

#[test]
fn blank_lines_are_skipped() {
    let dataset = parse_csv("a,b\n\n1,2\n\n3,4\n").unwrap();
    assert_eq!(dataset.n_rows(), 2);
}

#[test]
fn whitespace_only_file_is_empty_content() {
    assert_eq!(parse_csv("\n\n  \n"), Err(UploadError::EmptyContent));
}
