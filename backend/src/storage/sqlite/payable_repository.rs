use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::warn;

use crate::domain::commands::PayableFilter;
use crate::domain::models::{NewPayable, Payable, PayableStatus, TransactionKind};
use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;
use crate::storage::queries;
use crate::storage::sqlite::SqliteConnection;
use crate::storage::traits::PayableStorage;

/// Repository for `contas_a_pagar` rows in SQLite
#[derive(Clone)]
pub struct SqlitePayableRepository {
    db: SqliteConnection,
}

impl SqlitePayableRepository {
    pub fn new(db: SqliteConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn payable_from_row(row: &SqliteRow) -> Result<Payable, sqlx::Error> {
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
impl PayableStorage for SqlitePayableRepository {
    async fn insert_payable(&self, payable: &NewPayable) -> LedgerResult<i64> {
        let sql = queries::insert_payable(Dialect::Sqlite);
        let result = sqlx::query(&sql)
            .bind(&payable.due_date)
            .bind(&payable.category)
            .bind(payable.amount)
            .bind(&payable.description)
            .bind(PayableStatus::Pending.as_str())
            .execute(self.db.pool())
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_pending_payables(&self) -> LedgerResult<Vec<Payable>> {
        let rows = sqlx::query(&queries::select_pending_payables(Dialect::Sqlite))
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
        let row = sqlx::query(&queries::select_payable(Dialect::Sqlite))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.as_ref().map(payable_from_row).transpose()?)
    }

    async fn confirm_payment(&self, id: i64, paid_on: &str) -> LedgerResult<Option<i64>> {
        let select_sql = queries::select_payable(Dialect::Sqlite);
        let insert_sql = queries::insert_transaction(Dialect::Sqlite);
        let update_sql = queries::update_payable_status(Dialect::Sqlite);

        // Dropping `tx` on an early return or error rolls everything back
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

        let inserted = sqlx::query(&insert_sql)
            .bind(paid_on)
            .bind(TransactionKind::Expense.as_str())
            .bind(&payable.category)
            .bind(payable.amount)
            .bind(payable.payment_description())
            .execute(&mut *tx)
            .await?;

        sqlx::query(&update_sql)
            .bind(PayableStatus::Paid.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(inserted.last_insert_rowid()))
    }

    async fn delete_payable(&self, id: i64) -> LedgerResult<bool> {
        let result = sqlx::query(&queries::delete_payable(Dialect::Sqlite))
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn filter_payables(&self, filter: &PayableFilter) -> LedgerResult<Vec<Payable>> {
        let filtered = queries::filter_payables(Dialect::Sqlite, filter);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::MonthFilter;
    use crate::domain::models::PAYMENT_SUFFIX;
    use crate::storage::traits::{Connection, TransactionStorage};

    async fn setup_test() -> SqliteConnection {
        SqliteConnection::init_test().await.expect("Failed to create test database")
    }

    fn new_payable(due_date: &str, amount: f64, description: Option<&str>) -> NewPayable {
        NewPayable {
            due_date: due_date.to_string(),
            category: "4.1 Energia Elétrica".to_string(),
            amount,
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_insert_is_always_pending() {
        let db = setup_test().await;
        let repo = db.create_payable_repository();

        let id = repo.insert_payable(&new_payable("10-04-2024", 320.4, Some("Conta de luz"))).await.unwrap();
        let payable = repo.get_payable(id).await.unwrap().expect("Payable should exist");

        assert_eq!(payable.status, "pendente");
        assert_eq!(payable.due_date, "10-04-2024");
        assert_eq!(payable.amount, 320.4);
        assert_eq!(payable.description.as_deref(), Some("Conta de luz"));
    }

    #[tokio::test]
    async fn test_pending_list_uses_text_ordering_of_due_date() {
        let db = setup_test().await;
        let repo = db.create_payable_repository();
        repo.insert_payable(&new_payable("05-12-2024", 1.0, None)).await.unwrap();
        repo.insert_payable(&new_payable("20-01-2024", 2.0, None)).await.unwrap();
        repo.insert_payable(&new_payable("10-06-2025", 3.0, None)).await.unwrap();

        let dates: Vec<String> = repo
            .list_pending_payables()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.due_date)
            .collect();
        // Text order, not calendar order
        assert_eq!(dates, vec!["05-12-2024", "10-06-2025", "20-01-2024"]);
    }

    #[tokio::test]
    async fn test_confirm_payment_creates_expense_and_marks_paid() {
        let db = setup_test().await;
        let payables = db.create_payable_repository();
        let transactions = db.create_transaction_repository();

        let id = payables.insert_payable(&new_payable("10-04-2024", 320.4, Some("Conta de luz"))).await.unwrap();
        let other = payables.insert_payable(&new_payable("11-04-2024", 50.0, None)).await.unwrap();

        let tx_id = payables
            .confirm_payment(id, "12-04-2024")
            .await
            .unwrap()
            .expect("Payment should have been recorded");

        let pending: Vec<i64> = payables.list_pending_payables().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(pending, vec![other]);
        assert_eq!(payables.get_payable(id).await.unwrap().unwrap().status, "pago");

        let rows = transactions.list_transactions().await.unwrap();
        assert_eq!(rows.len(), 1);
        let expense = &rows[0];
        assert_eq!(expense.id, tx_id);
        assert_eq!(expense.kind, "saida");
        assert_eq!(expense.date, "12-04-2024");
        assert_eq!(expense.category, "4.1 Energia Elétrica");
        assert_eq!(expense.amount, 320.4);
        assert_eq!(expense.description.as_deref(), Some("Conta de luz (Pgto Conta)"));
        assert!(expense.description.as_deref().unwrap().ends_with(PAYMENT_SUFFIX));
    }

    #[tokio::test]
    async fn test_confirm_payment_missing_id_is_noop() {
        let db = setup_test().await;
        let payables = db.create_payable_repository();
        let transactions = db.create_transaction_repository();

        assert_eq!(payables.confirm_payment(42, "12-04-2024").await.unwrap(), None);
        assert!(transactions.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_payment_twice_records_once() {
        let db = setup_test().await;
        let payables = db.create_payable_repository();
        let transactions = db.create_transaction_repository();

        let id = payables.insert_payable(&new_payable("10-04-2024", 10.0, None)).await.unwrap();
        assert!(payables.confirm_payment(id, "12-04-2024").await.unwrap().is_some());
        assert!(payables.confirm_payment(id, "13-04-2024").await.unwrap().is_none());

        assert_eq!(transactions.list_transactions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_payable_regardless_of_status() {
        let db = setup_test().await;
        let repo = db.create_payable_repository();
        let id = repo.insert_payable(&new_payable("10-04-2024", 10.0, None)).await.unwrap();
        repo.confirm_payment(id, "12-04-2024").await.unwrap();

        assert!(repo.delete_payable(id).await.unwrap());
        assert!(repo.get_payable(id).await.unwrap().is_none());
        assert!(!repo.delete_payable(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_payables() {
        let db = setup_test().await;
        let repo = db.create_payable_repository();
        let paid = repo.insert_payable(&new_payable("10-04-2024", 10.0, None)).await.unwrap();
        repo.insert_payable(&new_payable("15-04-2024", 20.0, None)).await.unwrap();
        repo.insert_payable(&new_payable("15-04-2025", 30.0, None)).await.unwrap();
        repo.confirm_payment(paid, "12-04-2024").await.unwrap();

        let april_2024 = PayableFilter {
            status: None,
            month: MonthFilter::parse("2024-04").unwrap(),
        };
        assert_eq!(repo.filter_payables(&april_2024).await.unwrap().len(), 2);

        let paid_only = PayableFilter {
            status: Some(PayableStatus::Paid),
            month: None,
        };
        let rows = repo.filter_payables(&paid_only).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, paid);

        let pending_2025 = PayableFilter::from_raw(Some("pendente"), Some("2025-04")).unwrap();
        let rows = repo.filter_payables(&pending_2025).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 30.0);
    }
}
