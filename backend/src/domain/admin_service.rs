//! Administrative operations on the whole database.
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::LedgerResult;
use crate::storage::Connection;

#[derive(Clone)]
pub struct AdminService<C: Connection> {
    connection: Arc<C>,
}

impl<C: Connection> AdminService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self { connection }
    }

    /// Create any missing table. Safe to call on every start.
    pub async fn ensure_schema(&self) -> LedgerResult<()> {
        self.connection.ensure_schema().await?;
        info!("Schema ready ({:?})", self.connection.dialect());
        Ok(())
    }

    /// Drop and recreate both tables, deleting every transaction and payable
    pub async fn reset_database(&self) -> LedgerResult<()> {
        warn!("Resetting database: all transactions and payables will be deleted");
        self.connection.reset_schema().await?;
        info!("Database reset complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PayableService, TransactionService};
    use crate::storage::SqliteConnection;
    use shared::{CreatePayableForm, CreateTransactionForm};

    #[tokio::test]
    async fn test_reset_database_removes_everything() {
        let db = Arc::new(SqliteConnection::init_test().await.expect("Failed to create test database"));
        let admin = AdminService::new(db.clone());
        let transactions = TransactionService::new(db.clone());
        let payables = PayableService::new(db);

        transactions
            .create_transaction(CreateTransactionForm {
                data: "01-02-2024".to_string(),
                tipo: "entrada".to_string(),
                categoria: "1. Receitas".to_string(),
                valor: "10".to_string(),
                descricao: None,
            })
            .await
            .unwrap();
        payables
            .create_payable(CreatePayableForm {
                data_vencimento: "05-02-2024".to_string(),
                categoria: "4.3 Internet".to_string(),
                valor: "99".to_string(),
                descricao: None,
            })
            .await
            .unwrap();

        admin.reset_database().await.unwrap();

        assert!(transactions.dashboard().await.unwrap().transacoes.is_empty());
        assert!(payables.pending_payables().await.unwrap().contas.is_empty());

        // Still usable after the reset
        admin.ensure_schema().await.unwrap();
    }
}
