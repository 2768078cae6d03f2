//! # REST API Interface Layer
//!
//! HTTP endpoints of the ledger. Page routes answer with JSON view models,
//! form posts and link actions answer with a 303 redirect back to the page
//! that triggered them, and export routes answer with an xlsx attachment.
//!
//! Validation failures become `400 Bad Request` with an [`ErrorResponse`]
//! body; every other failure becomes `500 Internal Server Error`.

pub mod admin_apis;
pub mod mappers;
pub mod payable_apis;
pub mod transaction_apis;

pub use admin_apis::*;
pub use payable_apis::*;
pub use transaction_apis::*;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::export::SpreadsheetFile;
use crate::errors::LedgerError;

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        error!("Request failed ({}): {}", status, self);

        let body = match &self {
            LedgerError::Validation(message) => message.clone(),
            _ => "Internal server error".to_string(),
        };
        (status, Json(ErrorResponse { error: body })).into_response()
    }
}

/// Serve a rendered workbook as a file download
pub(crate) fn spreadsheet_response(file: SpreadsheetFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.mime_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}
