//! # REST API for Payables
//!
//! Bills to pay: listing, entry, payment confirmation, deletion, and the
//! payables report with its export.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect},
    Form,
};
use shared::{CreatePayableForm, PayableFilterQuery};
use tracing::info;

use crate::io::rest::spreadsheet_response;
use crate::storage::Connection;
use crate::AppState;

pub const PAYABLES_PAGE: &str = "/contas-a-pagar";

pub async fn list_payables<C: Connection>(State(state): State<AppState<C>>) -> impl IntoResponse {
    info!("GET {}", PAYABLES_PAGE);

    match state.payable_service.pending_payables().await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_payable<C: Connection>(
    State(state): State<AppState<C>>,
    Form(form): Form<CreatePayableForm>,
) -> impl IntoResponse {
    info!("POST {} - form: {:?}", PAYABLES_PAGE, form);

    match state.payable_service.create_payable(form).await {
        Ok(_) => Redirect::to(PAYABLES_PAGE).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Pay a bill today. Unknown or already paid ids just redirect.
pub async fn confirm_payment<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /confirmar-pagamento/{}", id);

    match state.payable_service.confirm_payment(id).await {
        Ok(_) => Redirect::to(PAYABLES_PAGE).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_payable<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /deletar-conta/{}", id);

    match state.payable_service.delete_payable(id).await {
        Ok(()) => Redirect::to(PAYABLES_PAGE).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn payable_report<C: Connection>(
    State(state): State<AppState<C>>,
    Query(query): Query<PayableFilterQuery>,
) -> impl IntoResponse {
    info!("GET /relatorios-contas - query: {:?}", query);

    match state.payable_service.report(query).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn export_payables<C: Connection>(
    State(state): State<AppState<C>>,
    Query(query): Query<PayableFilterQuery>,
) -> impl IntoResponse {
    info!("GET /exportar-contas - query: {:?}", query);

    match state.payable_service.export_report(query).await {
        Ok(file) => spreadsheet_response(file),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use shared::{DashboardView, PayableReportView, PayablesView};

    use crate::io::rest::test_utils::{get, json_body, location, post_form, test_app};

    const ENERGY_BILL: &str = "data_vencimento=10-04-2024&categoria=4.1+Energia+El%C3%A9trica&valor=320.40&descricao=Conta+de+luz";

    async fn first_pending_id(app: &axum::Router) -> i64 {
        let view: PayablesView = json_body(get(app, "/contas-a-pagar").await).await;
        view.contas[0].id
    }

    #[tokio::test]
    async fn test_create_payable_redirects_to_list() {
        let app = test_app().await;

        let response = post_form(&app, "/contas-a-pagar", ENERGY_BILL).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/contas-a-pagar");

        let view: PayablesView = json_body(get(&app, "/contas-a-pagar").await).await;
        assert_eq!(view.contas.len(), 1);
        assert_eq!(view.contas[0].status, "pendente");
        assert_eq!(view.contas[0].category, "4.1 Energia Elétrica");
        assert!(!view.categorias.saida.is_empty());
    }

    #[tokio::test]
    async fn test_create_payable_with_bad_date_is_bad_request() {
        let app = test_app().await;
        let response = post_form(
            &app,
            "/contas-a-pagar",
            "data_vencimento=31-02-2024&categoria=4.3+Internet&valor=10",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_confirm_payment_creates_expense() {
        let app = test_app().await;
        post_form(&app, "/contas-a-pagar", ENERGY_BILL).await;
        let id = first_pending_id(&app).await;

        let response = get(&app, &format!("/confirmar-pagamento/{}", id)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/contas-a-pagar");

        let view: PayablesView = json_body(get(&app, "/contas-a-pagar").await).await;
        assert!(view.contas.is_empty());

        let dashboard: DashboardView = json_body(get(&app, "/").await).await;
        assert_eq!(dashboard.transacoes.len(), 1);
        assert_eq!(dashboard.transacoes[0].kind, "saida");
        assert_eq!(dashboard.transacoes[0].date, dashboard.hoje);
        assert_eq!(dashboard.transacoes[0].description.as_deref(), Some("Conta de luz (Pgto Conta)"));

        // Confirming again changes nothing
        get(&app, &format!("/confirmar-pagamento/{}", id)).await;
        let dashboard: DashboardView = json_body(get(&app, "/").await).await;
        assert_eq!(dashboard.transacoes.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_payable() {
        let app = test_app().await;
        post_form(&app, "/contas-a-pagar", ENERGY_BILL).await;
        let id = first_pending_id(&app).await;

        let response = get(&app, &format!("/deletar-conta/{}", id)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let view: PayablesView = json_body(get(&app, "/contas-a-pagar").await).await;
        assert!(view.contas.is_empty());
    }

    #[tokio::test]
    async fn test_payable_report_and_export() {
        let app = test_app().await;
        post_form(&app, "/contas-a-pagar", ENERGY_BILL).await;
        post_form(&app, "/contas-a-pagar", "data_vencimento=2024-05-02&categoria=4.3+Internet&valor=99").await;

        let view: PayableReportView = json_body(get(&app, "/relatorios-contas?status=pendente&mes=2024-05").await).await;
        assert_eq!(view.contas.len(), 1);
        assert_eq!(view.contas[0].due_date, "02-05-2024");
        assert_eq!(view.total_pendente, 99.0);
        assert_eq!(view.total_pago, 0.0);

        let response = get(&app, "/exportar-contas?status=&mes=").await;
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()["content-disposition"].to_str().unwrap().to_string();
        assert!(disposition.contains("relatorio_contas_"));
    }
}
