//! # REST API for Administration

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use tracing::info;

use crate::storage::Connection;
use crate::AppState;

/// Wipe both tables and start over. There is no confirmation step.
pub async fn reset_database<C: Connection>(State(state): State<AppState<C>>) -> impl IntoResponse {
    info!("GET /limpar-banco");

    match state.admin_service.reset_database().await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => e.into_response(),
    }
}
