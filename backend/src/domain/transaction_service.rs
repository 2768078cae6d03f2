//! Transaction service domain logic for the ledger.
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use shared::{
    CreateTransactionForm, DashboardView, TransactionFilterQuery, TransactionReportView,
};
use tracing::{info, warn};

use crate::domain::categories::category_plan;
use crate::domain::commands::TransactionFilter;
use crate::domain::export::{to_spreadsheet, SpreadsheetFile, SpreadsheetTable, TRANSACTION_FILE_PREFIX};
use crate::domain::report::{expense_by_category, monthly_series, totals};
use crate::domain::validation::{validate_transaction_form, DATE_FORMAT};
use crate::errors::LedgerResult;
use crate::io::rest::mappers::{CategoryPlanMapper, TransactionMapper};
use crate::storage::{Connection, TransactionStorage};

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    transaction_repository: C::TransactionRepository,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let transaction_repository = connection.create_transaction_repository();
        Self { transaction_repository }
    }

    /// Validate the submitted form and store it, returning the new id
    pub async fn create_transaction(&self, form: CreateTransactionForm) -> LedgerResult<i64> {
        let new_transaction = validate_transaction_form(&form, category_plan())?;
        let id = self.transaction_repository.insert_transaction(&new_transaction).await?;
        info!(
            "Created transaction {} ({} {} on {})",
            id, new_transaction.kind, new_transaction.amount, new_transaction.date
        );
        Ok(id)
    }

    pub async fn delete_transaction(&self, id: i64) -> LedgerResult<()> {
        if self.transaction_repository.delete_transaction(id).await? {
            info!("Deleted transaction {}", id);
        } else {
            warn!("Transaction {} not found, nothing deleted", id);
        }
        Ok(())
    }

    pub async fn dashboard(&self) -> LedgerResult<DashboardView> {
        self.dashboard_on(Local::now().date_naive()).await
    }

    /// Home page data: every transaction with the overall totals
    pub async fn dashboard_on(&self, today: NaiveDate) -> LedgerResult<DashboardView> {
        let rows = self.transaction_repository.list_transactions().await?;
        let sums = totals(&rows);

        Ok(DashboardView {
            transacoes: rows.into_iter().map(TransactionMapper::to_dto).collect(),
            entrada: sums.income,
            saidas: sums.expense,
            saldo: sums.balance,
            categorias: CategoryPlanMapper::to_dto(category_plan()),
            hoje: today.format(DATE_FORMAT).to_string(),
        })
    }

    /// Filtered transactions with totals, expenses per category and the monthly bars
    pub async fn report(&self, query: TransactionFilterQuery) -> LedgerResult<TransactionReportView> {
        let filter = TransactionFilter::from_raw(query.tipo.as_deref(), query.mes.as_deref())?;
        let rows = self.transaction_repository.filter_transactions(&filter).await?;
        info!("Transaction report: {} rows for {:?}", rows.len(), filter);

        let sums = totals(&rows);
        let by_category = expense_by_category(&rows);
        let series = monthly_series(&rows);

        Ok(TransactionReportView {
            transacoes: rows.into_iter().map(TransactionMapper::to_dto).collect(),
            entrada: sums.income,
            saidas: sums.expense,
            saldo: sums.balance,
            gastos_por_categoria: by_category,
            barras_labels: series.labels,
            barras_entradas: series.income,
            barras_saidas: series.expense,
            filtro_tipo: query.tipo,
            filtro_mes: query.mes,
        })
    }

    pub async fn export_report(&self, query: TransactionFilterQuery) -> LedgerResult<SpreadsheetFile> {
        self.export_report_at(query, Local::now().naive_local()).await
    }

    /// Render the filtered transactions as an xlsx workbook named after `now`
    pub async fn export_report_at(
        &self,
        query: TransactionFilterQuery,
        now: NaiveDateTime,
    ) -> LedgerResult<SpreadsheetFile> {
        let filter = TransactionFilter::from_raw(query.tipo.as_deref(), query.mes.as_deref())?;
        let rows = self.transaction_repository.filter_transactions(&filter).await?;

        let file = to_spreadsheet(&SpreadsheetTable::from_transactions(&rows), TRANSACTION_FILE_PREFIX, now)?;
        info!("Exported {} transaction rows to {}", rows.len(), file.file_name);
        Ok(file)
    }
}
