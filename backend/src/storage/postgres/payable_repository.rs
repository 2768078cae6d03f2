use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;
use tracing::warn;

use crate::domain::commands::PayableFilter;
use crate::domain::models::{NewPayable, Payable, PayableStatus, TransactionKind};
use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;
use crate::storage::postgres::PgConnection;
use crate::storage::queries;
use crate::storage::traits::PayableStorage;

/// Repository for `contas_a_pagar` rows in PostgreSQL
#[derive(Clone)]
pub struct PgPayableRepository {
    db: PgConnection,
}

impl PgPayableRepository {
    pub fn new(db: PgConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn payable_from_row(row: &PgRow) -> Result<Payable, sqlx::Error> {
    Ok(Payable {
        id: row.try_get("id")?,
        due_date: row.try_get::<Option<String>, _>("data_vencimento")?.unwrap_or_default(),
        category: row.try_get::<Option<String>, _>("categoria")?.unwrap_or_default(),
        amount: row.try_get::<Option<f64>, _>("valor")?.unwrap_or_default(),
        description: row.try_get("descricao")?,
        status: row.try_get::<Option<String>, _>("status")?.unwrap_or_default(),
    })
}

#[async_trait]
impl PayableStorage for PgPayableRepository {
    async fn insert_payable(&self, payable: &NewPayable) -> LedgerResult<i64> {
        let sql = queries::insert_payable(Dialect::Postgres);
        let id: i64 = sqlx::query_scalar(&sql)
            .bind(&payable.due_date)
            .bind(&payable.category)
            .bind(payable.amount)
            .bind(&payable.description)
            .bind(PayableStatus::Pending.as_str())
            .fetch_one(self.db.pool())
            .await?;
        Ok(id)
    }

    async fn list_pending_payables(&self) -> LedgerResult<Vec<Payable>> {
        let rows = sqlx::query(&queries::select_pending_payables(Dialect::Postgres))
            .bind(queries::pending_status())
            .fetch_all(self.db.pool())
            .await?;
        let payables = rows
            .iter()
            .map(payable_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(payables)
    }

    async fn get_payable(&self, id: i64) -> LedgerResult<Option<Payable>> {
        let row = sqlx::query(&queries::select_payable(Dialect::Postgres))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.as_ref().map(payable_from_row).transpose()?)
    }

    async fn confirm_payment(&self, id: i64, paid_on: &str) -> LedgerResult<Option<i64>> {
        // FOR UPDATE keeps a concurrent confirmation from paying the same bill twice
        let select_sql = format!("{} FOR UPDATE", queries::select_payable(Dialect::Postgres));
        let insert_sql = queries::insert_transaction(Dialect::Postgres);
        let update_sql = queries::update_payable_status(Dialect::Postgres);

        let mut tx = self.db.pool().begin().await?;

        let row = sqlx::query(&select_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let payable = match row.as_ref().map(payable_from_row).transpose()? {
            Some(payable) if payable.payable_status() == Some(PayableStatus::Pending) => payable,
            Some(payable) => {
                warn!("Payable {} has status '{}', not confirming again", id, payable.status);
                return Ok(None);
            }
            None => return Ok(None),
        };

        let transaction_id: i64 = sqlx::query_scalar(&insert_sql)
            .bind(paid_on)
            .bind(TransactionKind::Expense.as_str())
            .bind(&payable.category)
            .bind(payable.amount)
            .bind(payable.payment_description())
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(&update_sql)
            .bind(PayableStatus::Paid.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(transaction_id))
    }

    async fn delete_payable(&self, id: i64) -> LedgerResult<bool> {
        let result = sqlx::query(&queries::delete_payable(Dialect::Postgres))
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn filter_payables(&self, filter: &PayableFilter) -> LedgerResult<Vec<Payable>> {
        let filtered = queries::filter_payables(Dialect::Postgres, filter);
        let mut query = sqlx::query(&filtered.sql);
        for param in &filtered.params {
            query = query.bind(param);
        }

        let rows = query.fetch_all(self.db.pool()).await?;
        let payables = rows
            .iter()
            .map(payable_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(payables)
    }
}
