use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A ledger entry as rendered to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Date as typed by the user ("DD-MM-YYYY")
    #[serde(rename = "data")]
    pub date: String,
    /// "entrada" or "saida"
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// A bill to be paid, as rendered to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payable {
    pub id: i64,
    /// Due date ("DD-MM-YYYY")
    #[serde(rename = "data_vencimento")]
    pub due_date: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// "pendente" or "pago"
    pub status: String,
}

/// The static chart of accounts, split by transaction kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPlan {
    pub entrada: Vec<String>,
    pub saida: Vec<String>,
}

/// Form submitted on `POST /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionForm {
    pub data: String,
    pub tipo: String,
    pub categoria: String,
    /// Raw amount text, parsed during validation
    pub valor: String,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// Form submitted on `POST /contas-a-pagar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayableForm {
    pub data_vencimento: String,
    pub categoria: String,
    pub valor: String,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// Query string of `/relatorios` and `/exportar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilterQuery {
    pub tipo: Option<String>,
    /// Month in "YYYY-MM" form (HTML month input)
    pub mes: Option<String>,
}

/// Query string of `/relatorios-contas` and `/exportar-contas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayableFilterQuery {
    pub status: Option<String>,
    pub mes: Option<String>,
}

/// Home page: every transaction plus the running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub transacoes: Vec<Transaction>,
    pub entrada: f64,
    pub saidas: f64,
    pub saldo: f64,
    pub categorias: CategoryPlan,
    /// Today's date, used as the form default
    pub hoje: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReportView {
    pub transacoes: Vec<Transaction>,
    pub entrada: f64,
    pub saidas: f64,
    pub saldo: f64,
    pub gastos_por_categoria: BTreeMap<String, f64>,
    pub barras_labels: Vec<String>,
    pub barras_entradas: Vec<f64>,
    pub barras_saidas: Vec<f64>,
    pub filtro_tipo: Option<String>,
    pub filtro_mes: Option<String>,
}

/// Payables page: only the pending bills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayablesView {
    pub contas: Vec<Payable>,
    pub categorias: CategoryPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayableReportView {
    pub contas: Vec<Payable>,
    pub total_pendente: f64,
    pub total_pago: f64,
    pub filtro_status: Option<String>,
    pub filtro_mes: Option<String>,
}

/// Body returned for rejected input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
