//! # Finance Ledger Backend
//!
//! Records income and expense transactions and bills to pay, and builds
//! reports and spreadsheet exports over them.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum routes, handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, validation, reports, export)
//!     ↓
//! Storage Layer (SQLite file or PostgreSQL server)
//! ```
//!
//! The storage backend is chosen once from [`config::AppConfig`] and shared by
//! every service through a [`storage::Connection`].

pub mod config;
pub mod domain;
pub mod errors;
pub mod io;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::domain::{AdminService, PayableService, TransactionService};
use crate::storage::Connection;

pub use errors::{LedgerError, LedgerResult};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState<C: Connection> {
    pub transaction_service: TransactionService<C>,
    pub payable_service: PayableService<C>,
    pub admin_service: AdminService<C>,
}

/// Build the services over `connection` and make sure the tables exist.
///
/// A schema failure is logged and otherwise ignored so the server still
/// starts; requests will fail until the database is reachable.
pub async fn initialize_backend<C: Connection>(connection: Arc<C>) -> AppState<C> {
    info!("Setting up domain model");
    let app_state = AppState {
        transaction_service: TransactionService::new(connection.clone()),
        payable_service: PayableService::new(connection.clone()),
        admin_service: AdminService::new(connection),
    };

    if let Err(e) = app_state.admin_service.ensure_schema().await {
        error!("Failed to create database schema: {}", e);
    }

    app_state
}

/// Create the Axum router with all routes configured
pub fn create_router<C: Connection>(app_state: AppState<C>, static_dir: impl Into<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(io::dashboard::<C>).post(io::create_transaction::<C>))
        .route("/deletar-transacao/:id", get(io::delete_transaction::<C>))
        .route("/relatorios", get(io::transaction_report::<C>))
        .route("/exportar", get(io::export_transactions::<C>))
        .route("/contas-a-pagar", get(io::list_payables::<C>).post(io::create_payable::<C>))
        .route("/confirmar-pagamento/:id", get(io::confirm_payment::<C>))
        .route("/deletar-conta/:id", get(io::delete_payable::<C>))
        .route("/relatorios-contas", get(io::payable_report::<C>))
        .route("/exportar-contas", get(io::export_payables::<C>))
        .route("/limpar-banco", get(io::reset_database::<C>))
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::io::rest::test_utils::{get, test_app};
    use crate::storage::SqliteConnection;

    #[tokio::test]
    async fn test_unreachable_database_still_serves_errors() {
        let path = std::env::temp_dir()
            .join(format!("ledger_missing_{}", uuid::Uuid::new_v4().simple()))
            .join("sub")
            .join("database.db");
        let state = initialize_backend(Arc::new(SqliteConnection::new(&path))).await;
        let app = create_router(state, std::env::temp_dir().join("ledger-static-missing"));

        let response = get(&app, "/").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = get(&app, "/contas-a-pagar").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_static_files() {
        let app = test_app().await;
        let response = get(&app, "/nao-existe.css").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = test_app().await;
        let response = get(&app, "/deletar-conta/abc").await;
        assert!(response.status().is_client_error());
    }
}
