//! # REST API for Transactions
//!
//! Dashboard, transaction entry and deletion, and the filtered report with
//! its spreadsheet export.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect},
    Form,
};
use shared::{CreateTransactionForm, TransactionFilterQuery};
use tracing::info;

use crate::io::rest::spreadsheet_response;
use crate::storage::Connection;
use crate::AppState;

/// Home page data
pub async fn dashboard<C: Connection>(State(state): State<AppState<C>>) -> impl IntoResponse {
    info!("GET /");

    match state.transaction_service.dashboard().await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Store a transaction submitted from the dashboard form
pub async fn create_transaction<C: Connection>(
    State(state): State<AppState<C>>,
    Form(form): Form<CreateTransactionForm>,
) -> impl IntoResponse {
    info!("POST / - form: {:?}", form);

    match state.transaction_service.create_transaction(form).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_transaction<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /deletar-transacao/{}", id);

    match state.transaction_service.delete_transaction(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn transaction_report<C: Connection>(
    State(state): State<AppState<C>>,
    Query(query): Query<TransactionFilterQuery>,
) -> impl IntoResponse {
    info!("GET /relatorios - query: {:?}", query);

    match state.transaction_service.report(query).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Download the filtered transactions as xlsx
pub async fn export_transactions<C: Connection>(
    State(state): State<AppState<C>>,
    Query(query): Query<TransactionFilterQuery>,
) -> impl IntoResponse {
    info!("GET /exportar - query: {:?}", query);

    match state.transaction_service.export_report(query).await {
        Ok(file) => spreadsheet_response(file),
        Err(e) => e.into_response(),
    }
}
