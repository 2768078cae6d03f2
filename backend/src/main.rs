use std::sync::Arc;

use finance_ledger_backend::config::{AppConfig, DatabaseConfig};
use finance_ledger_backend::storage::{Connection, SqliteConnection};
use finance_ledger_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    match &config.database {
        DatabaseConfig::Sqlite { path } => {
            info!("Setting up SQLite database");
            let connection = SqliteConnection::new(path);
            run(connection, &config).await
        }
        #[cfg(feature = "postgres")]
        DatabaseConfig::Postgres { url } => {
            info!("Setting up PostgreSQL connection");
            let connection = finance_ledger_backend::storage::PgConnection::new(url)?;
            run(connection, &config).await
        }
        #[cfg(not(feature = "postgres"))]
        DatabaseConfig::Postgres { .. } => Err(finance_ledger_backend::LedgerError::Configuration(
            "POSTGRES_URL is set but this build has no PostgreSQL support".to_string(),
        )
        .into()),
    }
}

async fn run<C: Connection>(connection: C, config: &AppConfig) -> anyhow::Result<()> {
    let app_state = initialize_backend(Arc::new(connection)).await;
    let app = create_router(app_state, config.static_dir.clone());

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
