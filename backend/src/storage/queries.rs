//! SQL text shared by both backends. Placeholders, selected column types and
//! insert id retrieval differ, so every statement is rendered for a given
//! [`Dialect`].

use crate::domain::commands::{PayableFilter, TransactionFilter};
use crate::domain::models::PayableStatus;
use crate::storage::dialect::{Dialect, PAYABLES_TABLE, TRANSACTIONS_TABLE};

/// A statement plus the text parameters to bind, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredQuery {
    pub sql: String,
    pub params: Vec<String>,
}

fn placeholders(dialect: Dialect, count: usize) -> String {
    (1..=count)
        .map(|i| dialect.placeholder(i))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn insert_transaction(dialect: Dialect) -> String {
    format!(
        "INSERT INTO {} (data, tipo, categoria, valor, descricao) VALUES ({}){}",
        TRANSACTIONS_TABLE,
        placeholders(dialect, 5),
        dialect.returning_id()
    )
}

pub fn select_transactions(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY id DESC",
        dialect.transaction_select_columns(),
        TRANSACTIONS_TABLE
    )
}

pub fn delete_transaction(dialect: Dialect) -> String {
    format!("DELETE FROM {} WHERE id = {}", TRANSACTIONS_TABLE, dialect.placeholder(1))
}

pub fn insert_payable(dialect: Dialect) -> String {
    format!(
        "INSERT INTO {} (data_vencimento, categoria, valor, descricao, status) VALUES ({}){}",
        PAYABLES_TABLE,
        placeholders(dialect, 5),
        dialect.returning_id()
    )
}

pub fn select_pending_payables(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE status = {} ORDER BY data_vencimento ASC, id ASC",
        dialect.payable_select_columns(),
        PAYABLES_TABLE,
        dialect.placeholder(1)
    )
}

pub fn select_payable(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = {}",
        dialect.payable_select_columns(),
        PAYABLES_TABLE,
        dialect.placeholder(1)
    )
}

pub fn update_payable_status(dialect: Dialect) -> String {
    format!(
        "UPDATE {} SET status = {} WHERE id = {}",
        PAYABLES_TABLE,
        dialect.placeholder(1),
        dialect.placeholder(2)
    )
}

pub fn delete_payable(dialect: Dialect) -> String {
    format!("DELETE FROM {} WHERE id = {}", PAYABLES_TABLE, dialect.placeholder(1))
}

pub fn filter_transactions(dialect: Dialect, filter: &TransactionFilter) -> FilteredQuery {
    let mut sql = format!(
        "SELECT {} FROM {} WHERE 1=1",
        dialect.transaction_select_columns(),
        TRANSACTIONS_TABLE
    );
    let mut params = Vec::new();

    if let Some(kind) = filter.kind {
        params.push(kind.as_str().to_string());
        sql.push_str(&format!(" AND tipo = {}", dialect.placeholder(params.len())));
    }
    if let Some(month) = filter.month {
        params.push(month.like_pattern());
        sql.push_str(&format!(" AND data LIKE {}", dialect.placeholder(params.len())));
    }

    sql.push_str(" ORDER BY id DESC");
    FilteredQuery { sql, params }
}

pub fn filter_payables(dialect: Dialect, filter: &PayableFilter) -> FilteredQuery {
    let mut sql = format!(
        "SELECT {} FROM {} WHERE 1=1",
        dialect.payable_select_columns(),
        PAYABLES_TABLE
    );
    let mut params = Vec::new();

    if let Some(status) = filter.status {
        params.push(status.as_str().to_string());
        sql.push_str(&format!(" AND status = {}", dialect.placeholder(params.len())));
    }
    if let Some(month) = filter.month {
        params.push(month.like_pattern());
        sql.push_str(&format!(" AND data_vencimento LIKE {}", dialect.placeholder(params.len())));
    }

    sql.push_str(" ORDER BY data_vencimento ASC, id ASC");
    FilteredQuery { sql, params }
}

/// Status value stored for payables that are still open
pub fn pending_status() -> &'static str {
    PayableStatus::Pending.as_str()
}
