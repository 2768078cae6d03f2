//! Input validation for the entry forms.
//!
//! The repositories accept whatever they are given; everything coming from a
//! form passes through here first so that bad input becomes a 400 instead of a
//! storage row nobody can aggregate.

use chrono::NaiveDate;
use shared::{CreatePayableForm, CreateTransactionForm};

use crate::domain::categories::CategoryPlan;
use crate::domain::models::{NewPayable, NewTransaction, TransactionKind};
use crate::errors::{LedgerError, LedgerResult};

pub const DATE_FORMAT: &str = "%d-%m-%Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const CURRENCY_SYMBOL: &str = "R$";

/// Parse a user typed amount such as "150", "150.25", "1.234,56" or "R$ 10,00".
pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
    let cleaned = raw.trim().replace(CURRENCY_SYMBOL, "").replace(' ', "");
    if cleaned.is_empty() {
        return Err(LedgerError::validation("Amount is required"));
    }

    // A comma means Brazilian notation: dots group thousands, the comma is decimal
    let normalized = if let Some(decimal_at) = cleaned.rfind(',') {
        if cleaned[decimal_at..].contains('.') {
            return Err(LedgerError::validation(format!(
                "'{}' mixes separators; use 1.234,56 or 1234.56",
                raw.trim()
            )));
        }
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    let amount: f64 = normalized
        .parse()
        .map_err(|_| LedgerError::validation(format!("'{}' is not a valid amount", raw.trim())))?;

    if !amount.is_finite() {
        return Err(LedgerError::validation("Amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(LedgerError::validation("Amount cannot be negative"));
    }
    Ok(amount)
}

/// Accept "DD-MM-YYYY" (or the "YYYY-MM-DD" sent by HTML date inputs) and
/// return the canonical zero padded "DD-MM-YYYY" form.
pub fn normalize_date(raw: &str) -> LedgerResult<String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| LedgerError::validation(format!("'{}' is not a date in DD-MM-YYYY form", raw)))
}

fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

pub fn validate_transaction_form(form: &CreateTransactionForm, plan: &CategoryPlan) -> LedgerResult<NewTransaction> {
    let kind = TransactionKind::parse(form.tipo.trim())
        .ok_or_else(|| LedgerError::validation(format!("Type must be 'entrada' or 'saida', got '{}'", form.tipo)))?;

    let category = form.categoria.trim();
    if category.is_empty() {
        return Err(LedgerError::validation("Category is required"));
    }
    // Categories are matched untrimmed so entries like "2.6 Sinistro / Franquia " still match
    if !plan.contains(kind, &form.categoria) && !plan.contains(kind, category) {
        return Err(LedgerError::validation(format!(
            "Category '{}' is not part of the {} plan",
            category, kind
        )));
    }
    let category = if plan.contains(kind, &form.categoria) {
        form.categoria.clone()
    } else {
        category.to_string()
    };

    Ok(NewTransaction {
        date: normalize_date(&form.data)?,
        kind: kind.as_str().to_string(),
        category,
        amount: parse_amount(&form.valor)?,
        description: normalize_description(form.descricao.as_deref()),
    })
}

pub fn validate_payable_form(form: &CreatePayableForm, plan: &CategoryPlan) -> LedgerResult<NewPayable> {
    let category = form.categoria.trim();
    if category.is_empty() {
        return Err(LedgerError::validation("Category is required"));
    }
    let category = if plan.contains_any(&form.categoria) {
        form.categoria.clone()
    } else if plan.contains_any(category) {
        category.to_string()
    } else {
        return Err(LedgerError::validation(format!(
            "Category '{}' is not part of the plan",
            category
        )));
    };

    Ok(NewPayable {
        due_date: normalize_date(&form.data_vencimento)?,
        category,
        amount: parse_amount(&form.valor)?,
        description: normalize_description(form.descricao.as_deref()),
    })
}
