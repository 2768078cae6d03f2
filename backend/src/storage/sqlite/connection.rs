use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;
use crate::storage::sqlite::{SqlitePayableRepository, SqliteTransactionRepository};
use crate::storage::traits::Connection;

/// SqliteConnection manages the embedded database file
#[derive(Clone)]
pub struct SqliteConnection {
    pool: Arc<SqlitePool>,
}

impl SqliteConnection {
    /// Configure a pool for the database file at `path`, created if needed.
    /// Nothing is opened until the first query, so an unusable path shows up
    /// as a storage error on that query rather than here.
    pub fn new(path: &Path) -> Self {
        info!("Using SQLite database at {}", path.display());
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);

        Self { pool: Arc::new(pool) }
    }

    /// Initialize a test database with a unique name, schema included
    #[cfg(test)]
    pub async fn init_test() -> LedgerResult<Self> {
        use std::str::FromStr;

        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().simple().to_string();
        let options = SqliteConnectOptions::from_str(&format!(
            "sqlite:memdb_{}?mode=memory&cache=shared",
            test_id
        ))?
        .create_if_missing(true);

        // The in-memory database lives as long as its single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let conn = Self { pool: Arc::new(pool) };
        conn.ensure_schema().await?;
        Ok(conn)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    type TransactionRepository = SqliteTransactionRepository;
    type PayableRepository = SqlitePayableRepository;

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        SqliteTransactionRepository::new(self.clone())
    }

    fn create_payable_repository(&self) -> Self::PayableRepository {
        SqlitePayableRepository::new(self.clone())
    }

    async fn ensure_schema(&self) -> LedgerResult<()> {
        for statement in self.dialect().create_table_statements() {
            sqlx::query(&statement).execute(self.pool()).await?;
        }
        Ok(())
    }

    async fn reset_schema(&self) -> LedgerResult<()> {
        for statement in self.dialect().drop_table_statements() {
            sqlx::query(&statement).execute(self.pool()).await?;
        }
        self.ensure_schema().await
    }
}
