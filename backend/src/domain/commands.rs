//! Domain-level query types.
//! The REST layer maps the raw query strings from the `shared` crate into
//! these before calling the services.

use crate::domain::models::{PayableStatus, TransactionKind};
use crate::errors::{LedgerError, LedgerResult};

/// A calendar month selected in a report ("YYYY-MM" on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    pub year: u32,
    pub month: u32,
}

impl MonthFilter {
    /// Parse "YYYY-MM". Empty input means no filter.
    pub fn parse(raw: &str) -> LedgerResult<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let invalid = || LedgerError::validation(format!("Month must be in YYYY-MM form, got '{}'", raw));
        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: u32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Some(Self { year, month }))
    }

    /// The "MM-YYYY" tail that dates of this month end with
    pub fn date_suffix(&self) -> String {
        format!("{:02}-{:04}", self.month, self.year)
    }

    /// LIKE pattern matching any "DD-MM-YYYY" date of this month
    pub fn like_pattern(&self) -> String {
        format!("%{}", self.date_suffix())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub month: Option<MonthFilter>,
}

impl TransactionFilter {
    /// Unknown kinds are ignored rather than rejected.
    pub fn from_raw(tipo: Option<&str>, mes: Option<&str>) -> LedgerResult<Self> {
        Ok(Self {
            kind: tipo.and_then(TransactionKind::parse),
            month: match mes {
                Some(m) => MonthFilter::parse(m)?,
                None => None,
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayableFilter {
    pub status: Option<PayableStatus>,
    pub month: Option<MonthFilter>,
}

impl PayableFilter {
    pub fn from_raw(status: Option<&str>, mes: Option<&str>) -> LedgerResult<Self> {
        Ok(Self {
            status: status.and_then(PayableStatus::parse),
            month: match mes {
                Some(m) => MonthFilter::parse(m)?,
                None => None,
            },
        })
    }
}
