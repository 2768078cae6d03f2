use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::commands::TransactionFilter;
use crate::domain::models::{NewTransaction, Transaction};
use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;
use crate::storage::queries;
use crate::storage::sqlite::SqliteConnection;
use crate::storage::traits::TransactionStorage;

/// Repository for `transacoes` rows in SQLite
#[derive(Clone)]
pub struct SqliteTransactionRepository {
    db: SqliteConnection,
}

impl SqliteTransactionRepository {
    pub fn new(db: SqliteConnection) -> Self {
        Self { db }
    }
}

/// Map a `transacoes` row; NULL text columns read as empty strings
pub(crate) fn transaction_from_row(row: &SqliteRow) -> Result<Transaction, sqlx::Error> {
    Ok(Transaction {
        id: row.try_get("id")?,
        date: row.try_get::<Option<String>, _>("data")?.unwrap_or_default(),
        kind: row.try_get::<Option<String>, _>("tipo")?.unwrap_or_default(),
        category: row.try_get::<Option<String>, _>("categoria")?.unwrap_or_default(),
        amount: row.try_get::<Option<f64>, _>("valor")?.unwrap_or_default(),
        description: row.try_get("descricao")?,
    })
}

#[async_trait]
impl TransactionStorage for SqliteTransactionRepository {
    async fn insert_transaction(&self, transaction: &NewTransaction) -> LedgerResult<i64> {
        let sql = queries::insert_transaction(Dialect::Sqlite);
        let result = sqlx::query(&sql)
            .bind(&transaction.date)
            .bind(&transaction.kind)
            .bind(&transaction.category)
            .bind(transaction.amount)
            .bind(&transaction.description)
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        let rows = sqlx::query(&queries::select_transactions(Dialect::Sqlite))
            .fetch_all(self.db.pool())
            .await?;
        let transactions = rows
            .iter()
            .map(transaction_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(transactions)
    }

    async fn delete_transaction(&self, id: i64) -> LedgerResult<bool> {
        let result = sqlx::query(&queries::delete_transaction(Dialect::Sqlite))
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn filter_transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        let filtered = queries::filter_transactions(Dialect::Sqlite, filter);
        let mut query = sqlx::query(&filtered.sql);
        for param in &filtered.params {
            query = query.bind(param);
        }

        let rows = query.fetch_all(self.db.pool()).await?;
        let transactions = rows
            .iter()
            .map(transaction_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(transactions)
    }
}
