//! Domain model for a ledger transaction.
use std::fmt;

/// Recognised transaction kinds. Storage keeps the raw string, so rows with
/// any other value can exist and are simply left out of the aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// "entrada"
    Income,
    /// "saida"
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "entrada",
            TransactionKind::Expense => "saida",
        }
    }

    /// Parse the stored form; anything but the two known values yields None.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entrada" => Some(TransactionKind::Income),
            "saida" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// "DD-MM-YYYY", kept as text
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

impl Transaction {
    pub fn transaction_kind(&self) -> Option<TransactionKind> {
        TransactionKind::parse(&self.kind)
    }
}

/// A transaction that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}
