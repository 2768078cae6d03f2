use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::commands::TransactionFilter;
use crate::domain::models::{NewTransaction, Transaction};
use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;
use crate::storage::postgres::PgConnection;
use crate::storage::queries;
use crate::storage::traits::TransactionStorage;

/// Repository for `transacoes` rows in PostgreSQL
#[derive(Clone)]
pub struct PgTransactionRepository {
    db: PgConnection,
}

impl PgTransactionRepository {
    pub fn new(db: PgConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn transaction_from_row(row: &PgRow) -> Result<Transaction, sqlx::Error> {
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
impl TransactionStorage for PgTransactionRepository {
    async fn insert_transaction(&self, transaction: &NewTransaction) -> LedgerResult<i64> {
        let sql = queries::insert_transaction(Dialect::Postgres);
        let id: i64 = sqlx::query_scalar(&sql)
            .bind(&transaction.date)
            .bind(&transaction.kind)
            .bind(&transaction.category)
            .bind(transaction.amount)
            .bind(&transaction.description)
            .fetch_one(self.db.pool())
            .await?;
        Ok(id)
    }

    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        let rows = sqlx::query(&queries::select_transactions(Dialect::Postgres))
            .fetch_all(self.db.pool())
            .await?;
        let transactions = rows
            .iter()
            .map(transaction_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(transactions)
    }

    async fn delete_transaction(&self, id: i64) -> LedgerResult<bool> {
        let result = sqlx::query(&queries::delete_transaction(Dialect::Postgres))
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn filter_transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>> {
        let filtered = queries::filter_transactions(Dialect::Postgres, filter);
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
