//! Report aggregation over already fetched rows.
//!
//! Everything here is pure: no storage access, no clock.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::models::{Payable, PayableStatus, Transaction, TransactionKind};
use crate::domain::validation::DATE_FORMAT;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    /// income - expense
    pub balance: f64,
}

/// Income and expense sums per month, sorted chronologically.
/// The three vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    /// "MM-YYYY"
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayableTotals {
    pub pending: f64,
    pub paid: f64,
}

pub fn totals(rows: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    for row in rows {
        match row.transaction_kind() {
            Some(TransactionKind::Income) => income += row.amount,
            Some(TransactionKind::Expense) => expense += row.amount,
            None => {}
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense sums keyed by category. Categories without expenses are absent.
pub fn expense_by_category(rows: &[Transaction]) -> BTreeMap<String, f64> {
    let mut by_category = BTreeMap::new();
    for row in rows
        .iter()
        .filter(|r| r.transaction_kind() == Some(TransactionKind::Expense))
    {
        *by_category.entry(row.category.clone()).or_insert(0.0) += row.amount;
    }
    by_category
}

/// Bucket rows by the month of their date. Rows whose date does not parse as
/// "DD-MM-YYYY" are skipped; rows of unknown kind still open their month.
pub fn monthly_series(rows: &[Transaction]) -> MonthlySeries {
    // (year, month) keys iterate in chronological order
    let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();

    for row in rows {
        let Ok(date) = NaiveDate::parse_from_str(&row.date, DATE_FORMAT) else {
            continue;
        };
        let bucket = buckets.entry((date.year(), date.month())).or_insert((0.0, 0.0));
        match row.transaction_kind() {
            Some(TransactionKind::Income) => bucket.0 += row.amount,
            Some(TransactionKind::Expense) => bucket.1 += row.amount,
            None => {}
        }
    }

    let mut series = MonthlySeries::default();
    for ((year, month), (income, expense)) in buckets {
        series.labels.push(format!("{:02}-{:04}", month, year));
        series.income.push(income);
        series.expense.push(expense);
    }
    series
}

pub fn payable_totals(rows: &[Payable]) -> PayableTotals {
    rows.iter().fold(PayableTotals::default(), |mut acc, row| {
        match row.payable_status() {
            Some(PayableStatus::Pending) => acc.pending += row.amount,
            Some(PayableStatus::Paid) => acc.paid += row.amount,
            None => {}
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, date: &str, kind: &str, category: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            date: date.to_string(),
            kind: kind.to_string(),
            category: category.to_string(),
            amount,
            description: None,
        }
    }

    fn payable(id: i64, status: &str, amount: f64) -> Payable {
        Payable {
            id,
            due_date: "10-01-2024".to_string(),
            category: "4.3 Internet".to_string(),
            amount,
            description: None,
            status: status.to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, "05-01-2024", "entrada", "1. Receitas", 1000.0),
            tx(2, "10-01-2024", "saida", "2.1 Combustível", 200.0),
            tx(3, "12-02-2024", "saida", "2.1 Combustível", 150.5),
            tx(4, "20-02-2024", "saida", "4.3 Internet", 99.9),
            tx(5, "01-12-2023", "entrada", "1.2 Redespacho", 300.0),
            tx(6, "02-12-2023", "transferencia", "Outros", 42.0),
        ]
    }

    #[test]
    fn test_totals() {
        let t = totals(&sample());
        assert_eq!(t.income, 1300.0);
        assert!((t.expense - 450.4).abs() < 1e-9);
        assert!((t.balance - (t.income - t.expense)).abs() < 1e-9);
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn test_totals_are_non_negative_for_non_negative_amounts() {
        let t = totals(&sample());
        assert!(t.income >= 0.0);
        assert!(t.expense >= 0.0);
    }

    #[test]
    fn test_expense_by_category() {
        let rows = sample();
        let by_category = expense_by_category(&rows);
        assert_eq!(by_category.len(), 2);
        assert!((by_category["2.1 Combustível"] - 350.5).abs() < 1e-9);
        assert!((by_category["4.3 Internet"] - 99.9).abs() < 1e-9);
        assert!(!by_category.contains_key("1. Receitas"));
        assert!(!by_category.contains_key("Outros"));

        let sum: f64 = by_category.values().sum();
        assert!((sum - totals(&rows).expense).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_is_chronological() {
        let series = monthly_series(&sample());
        assert_eq!(series.labels, vec!["12-2023", "01-2024", "02-2024"]);
        assert_eq!(series.income, vec![300.0, 1000.0, 0.0]);
        assert_eq!(series.expense[0], 0.0);
        assert_eq!(series.expense[1], 200.0);
        assert!((series.expense[2] - 250.4).abs() < 1e-9);
        assert_eq!(series.labels.len(), series.income.len());
        assert_eq!(series.labels.len(), series.expense.len());
    }

    #[test]
    fn test_monthly_series_orders_across_years_not_lexically() {
        let rows = vec![
            tx(1, "01-02-2025", "entrada", "1. Receitas", 1.0),
            tx(2, "01-11-2024", "entrada", "1. Receitas", 2.0),
            tx(3, "01-03-2024", "saida", "4.3 Internet", 3.0),
        ];
        let series = monthly_series(&rows);
        assert_eq!(series.labels, vec!["03-2024", "11-2024", "02-2025"]);
    }

    #[test]
    fn test_monthly_series_skips_unparseable_dates() {
        let rows = vec![
            tx(1, "2024-01-05", "entrada", "1. Receitas", 10.0),
            tx(2, "", "saida", "4.3 Internet", 20.0),
            tx(3, "31-02-2024", "saida", "4.3 Internet", 30.0),
            tx(4, "15-03-2024", "saida", "4.3 Internet", 40.0),
        ];
        let series = monthly_series(&rows);
        assert_eq!(series.labels, vec!["03-2024"]);
        assert_eq!(series.expense, vec![40.0]);
        assert_eq!(series.income, vec![0.0]);
    }

    #[test]
    fn test_monthly_series_unknown_kind_opens_empty_bucket() {
        let rows = vec![tx(1, "02-12-2023", "transferencia", "Outros", 42.0)];
        let series = monthly_series(&rows);
        assert_eq!(series.labels, vec!["12-2023"]);
        assert_eq!(series.income, vec![0.0]);
        assert_eq!(series.expense, vec![0.0]);
    }

    #[test]
    fn test_payable_totals() {
        let rows = vec![
            payable(1, "pendente", 100.0),
            payable(2, "pago", 50.0),
            payable(3, "pendente", 25.5),
            payable(4, "cancelado", 999.0),
        ];
        let t = payable_totals(&rows);
        assert_eq!(t.pending, 125.5);
        assert_eq!(t.paid, 50.0);
    }
}
