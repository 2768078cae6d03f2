//! Payable service: bills to pay and their conversion into expenses.
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use shared::{CreatePayableForm, PayableFilterQuery, PayableReportView, PayablesView};
use tracing::{info, warn};

use crate::domain::categories::category_plan;
use crate::domain::commands::PayableFilter;
use crate::domain::export::{to_spreadsheet, SpreadsheetFile, SpreadsheetTable, PAYABLE_FILE_PREFIX};
use crate::domain::report::payable_totals;
use crate::domain::validation::{validate_payable_form, DATE_FORMAT};
use crate::errors::LedgerResult;
use crate::io::rest::mappers::{CategoryPlanMapper, PayableMapper};
use crate::storage::{Connection, PayableStorage};

#[derive(Clone)]
pub struct PayableService<C: Connection> {
    payable_repository: C::PayableRepository,
}

impl<C: Connection> PayableService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let payable_repository = connection.create_payable_repository();
        Self { payable_repository }
    }

    pub async fn create_payable(&self, form: CreatePayableForm) -> LedgerResult<i64> {
        let new_payable = validate_payable_form(&form, category_plan())?;
        let id = self.payable_repository.insert_payable(&new_payable).await?;
        info!("Created payable {} due {}", id, new_payable.due_date);
        Ok(id)
    }

    /// Pending bills plus the category plan for the entry form
    pub async fn pending_payables(&self) -> LedgerResult<PayablesView> {
        let rows = self.payable_repository.list_pending_payables().await?;
        Ok(PayablesView {
            contas: rows.into_iter().map(PayableMapper::to_dto).collect(),
            categorias: CategoryPlanMapper::to_dto(category_plan()),
        })
    }

    pub async fn confirm_payment(&self, id: i64) -> LedgerResult<Option<i64>> {
        self.confirm_payment_on(id, Local::now().date_naive()).await
    }

    /// Pay a pending bill, recording the expense dated `paid_on`
    pub async fn confirm_payment_on(&self, id: i64, paid_on: NaiveDate) -> LedgerResult<Option<i64>> {
        let paid_on = paid_on.format(DATE_FORMAT).to_string();
        let transaction_id = self.payable_repository.confirm_payment(id, &paid_on).await?;
        match transaction_id {
            Some(transaction_id) => info!("Payable {} paid on {} as transaction {}", id, paid_on, transaction_id),
            None => warn!("Payable {} not confirmed: missing or already paid", id),
        }
        Ok(transaction_id)
    }

    pub async fn delete_payable(&self, id: i64) -> LedgerResult<()> {
        if self.payable_repository.delete_payable(id).await? {
            info!("Deleted payable {}", id);
        } else {
            warn!("Payable {} not found, nothing deleted", id);
        }
        Ok(())
    }

    pub async fn report(&self, query: PayableFilterQuery) -> LedgerResult<PayableReportView> {
        let filter = PayableFilter::from_raw(query.status.as_deref(), query.mes.as_deref())?;
        let rows = self.payable_repository.filter_payables(&filter).await?;
        info!("Payable report: {} rows for {:?}", rows.len(), filter);

        let sums = payable_totals(&rows);
        Ok(PayableReportView {
            contas: rows.into_iter().map(PayableMapper::to_dto).collect(),
            total_pendente: sums.pending,
            total_pago: sums.paid,
            filtro_status: query.status,
            filtro_mes: query.mes,
        })
    }

    pub async fn export_report(&self, query: PayableFilterQuery) -> LedgerResult<SpreadsheetFile> {
        self.export_report_at(query, Local::now().naive_local()).await
    }

    pub async fn export_report_at(&self, query: PayableFilterQuery, now: NaiveDateTime) -> LedgerResult<SpreadsheetFile> {
        let filter = PayableFilter::from_raw(query.status.as_deref(), query.mes.as_deref())?;
        let rows = self.payable_repository.filter_payables(&filter).await?;

        let file = to_spreadsheet(&SpreadsheetTable::from_payables(&rows), PAYABLE_FILE_PREFIX, now)?;
        info!("Exported {} payable rows to {}", rows.len(), file.file_name);
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionService;
    use crate::storage::SqliteConnection;

    async fn setup_test() -> (PayableService<SqliteConnection>, TransactionService<SqliteConnection>) {
        let db = Arc::new(SqliteConnection::init_test().await.expect("Failed to create test database"));
        (PayableService::new(db.clone()), TransactionService::new(db))
    }

    fn form(data_vencimento: &str, valor: &str, descricao: Option<&str>) -> CreatePayableForm {
        CreatePayableForm {
            data_vencimento: data_vencimento.to_string(),
            categoria: "4.1 Energia Elétrica".to_string(),
            valor: valor.to_string(),
            descricao: descricao.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_payable_rejects_unknown_category() {
        let (payables, _) = setup_test().await;
        let mut bad = form("10-04-2024", "10", None);
        bad.categoria = "Lazer".to_string();

        assert!(payables.create_payable(bad).await.unwrap_err().is_validation());
        assert!(payables.pending_payables().await.unwrap().contas.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_payment_moves_bill_into_ledger() {
        let (payables, transactions) = setup_test().await;
        let id = payables.create_payable(form("10-04-2024", "320,40", Some("Conta de luz"))).await.unwrap();

        let paid_on = NaiveDate::from_ymd_opt(2024, 4, 12).unwrap();
        let tx_id = payables.confirm_payment_on(id, paid_on).await.unwrap();
        assert!(tx_id.is_some());

        assert!(payables.pending_payables().await.unwrap().contas.is_empty());

        let ledger = transactions.dashboard().await.unwrap();
        assert_eq!(ledger.transacoes.len(), 1);
        assert_eq!(ledger.transacoes[0].date, "12-04-2024");
        assert_eq!(ledger.transacoes[0].kind, "saida");
        assert_eq!(ledger.transacoes[0].description.as_deref(), Some("Conta de luz (Pgto Conta)"));
        assert!((ledger.saidas - 320.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_confirm_payment_without_description() {
        let (payables, transactions) = setup_test().await;
        let id = payables.create_payable(form("10-04-2024", "50", Some("   "))).await.unwrap();

        payables.confirm_payment(id).await.unwrap();

        let ledger = transactions.dashboard().await.unwrap();
        assert_eq!(ledger.transacoes[0].description.as_deref(), Some(" (Pgto Conta)"));
    }

    #[tokio::test]
    async fn test_confirm_missing_payable_is_noop() {
        let (payables, transactions) = setup_test().await;
        assert_eq!(payables.confirm_payment(77).await.unwrap(), None);
        assert!(transactions.dashboard().await.unwrap().transacoes.is_empty());
    }

    #[tokio::test]
    async fn test_report_totals_by_status() {
        let (payables, _) = setup_test().await;
        let paid = payables.create_payable(form("10-04-2024", "100", None)).await.unwrap();
        payables.create_payable(form("15-04-2024", "40", None)).await.unwrap();
        payables.create_payable(form("15-05-2024", "60", None)).await.unwrap();
        payables.confirm_payment(paid).await.unwrap();

        let view = payables.report(PayableFilterQuery::default()).await.unwrap();
        assert_eq!(view.contas.len(), 3);
        assert_eq!(view.total_pendente, 100.0);
        assert_eq!(view.total_pago, 100.0);

        let april = PayableFilterQuery {
            status: Some("pendente".to_string()),
            mes: Some("2024-04".to_string()),
        };
        let view = payables.report(april).await.unwrap();
        assert_eq!(view.contas.len(), 1);
        assert_eq!(view.total_pendente, 40.0);
        assert_eq!(view.total_pago, 0.0);
        assert_eq!(view.filtro_status.as_deref(), Some("pendente"));
    }

    #[tokio::test]
    async fn test_export_report() {
        let (payables, _) = setup_test().await;
        payables.create_payable(form("10-04-2024", "100", None)).await.unwrap();

        let now = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let file = payables.export_report_at(PayableFilterQuery::default(), now).await.unwrap();

        assert_eq!(file.file_name, "relatorio_contas_20241231_235959.xlsx");
        assert_eq!(file.row_count, 2);
        assert_eq!(file.mime_type(), crate::domain::export::XLSX_MIME_TYPE);
    }
}
