//! Domain model for a payable (conta a pagar).
use std::fmt;

/// Marker appended to the description of the expense created when a payable is paid
pub const PAYMENT_SUFFIX: &str = " (Pgto Conta)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayableStatus {
    /// "pendente"
    Pending,
    /// "pago"; there is no way back to pending
    Paid,
}

impl PayableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayableStatus::Pending => "pendente",
            PayableStatus::Paid => "pago",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pendente" => Some(PayableStatus::Pending),
            "pago" => Some(PayableStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payable {
    pub id: i64,
    /// "DD-MM-YYYY", kept as text
    pub due_date: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub status: String,
}

impl Payable {
    pub fn payable_status(&self) -> Option<PayableStatus> {
        PayableStatus::parse(&self.status)
    }

    /// Description given to the expense recorded when this payable is paid
    pub fn payment_description(&self) -> String {
        format!("{}{}", self.description.as_deref().unwrap_or_default(), PAYMENT_SUFFIX)
    }
}

/// A payable that has not been stored yet; it is always stored as pending
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayable {
    pub due_date: String,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payable(description: Option<&str>) -> Payable {
        Payable {
            id: 1,
            due_date: "10-05-2024".to_string(),
            category: "4.3 Internet".to_string(),
            amount: 99.9,
            description: description.map(str::to_string),
            status: "pendente".to_string(),
        }
    }

    #[test]
    fn test_payment_description_appends_marker() {
        assert_eq!(payable(Some("Fibra")).payment_description(), "Fibra (Pgto Conta)");
        assert_eq!(payable(None).payment_description(), " (Pgto Conta)");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(payable(None).payable_status(), Some(PayableStatus::Pending));
        assert_eq!(PayableStatus::parse("pago"), Some(PayableStatus::Paid));
        assert_eq!(PayableStatus::parse("cancelado"), None);
    }
}
