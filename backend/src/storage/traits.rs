//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against either
//! the embedded SQLite file or a PostgreSQL server without knowing which one
//! was picked at startup.

use async_trait::async_trait;

use crate::domain::commands::{PayableFilter, TransactionFilter};
use crate::domain::models::{NewPayable, NewTransaction, Payable, Transaction};
use crate::errors::LedgerResult;
use crate::storage::dialect::Dialect;

/// Trait defining the interface for transaction storage operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Store a new transaction and return its id. No validation happens here.
    async fn insert_transaction(&self, transaction: &NewTransaction) -> LedgerResult<i64>;

    /// All transactions, most recently inserted first (id descending)
    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>>;

    /// Returns true if a row was deleted; a missing id is not an error
    async fn delete_transaction(&self, id: i64) -> LedgerResult<bool>;

    /// Transactions matching the filter, id descending
    async fn filter_transactions(&self, filter: &TransactionFilter) -> LedgerResult<Vec<Transaction>>;
}

/// Trait defining the interface for payable storage operations
#[async_trait]
pub trait PayableStorage: Send + Sync {
    /// Store a new payable as pending and return its id
    async fn insert_payable(&self, payable: &NewPayable) -> LedgerResult<i64>;

    /// Pending payables ordered by the due date text, ascending.
    /// "DD-MM-YYYY" strings do not sort chronologically; this ordering is kept as is.
    async fn list_pending_payables(&self) -> LedgerResult<Vec<Payable>>;

    async fn get_payable(&self, id: i64) -> LedgerResult<Option<Payable>>;

    /// Record the payment of a payable: insert the matching expense dated
    /// `paid_on` and mark the payable as paid, atomically.
    /// Returns the id of the new transaction, or None when the payable does not
    /// exist or is no longer pending.
    async fn confirm_payment(&self, id: i64, paid_on: &str) -> LedgerResult<Option<i64>>;

    async fn delete_payable(&self, id: i64) -> LedgerResult<bool>;

    /// Payables matching the filter, due date text ascending
    async fn filter_payables(&self, filter: &PayableFilter) -> LedgerResult<Vec<Payable>>;
}

/// Trait defining the interface for storage connections
///
/// A connection owns the pool for one backend and creates the repositories
/// that run against it. Exactly one implementation is chosen at startup.
#[async_trait]
pub trait Connection: Send + Sync + Clone + 'static {
    type TransactionRepository: TransactionStorage + Clone + 'static;
    type PayableRepository: PayableStorage + Clone + 'static;

    fn dialect(&self) -> Dialect;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;

    fn create_payable_repository(&self) -> Self::PayableRepository;

    /// Create both tables when missing. Idempotent.
    async fn ensure_schema(&self) -> LedgerResult<()>;

    /// Drop both tables and recreate them empty. Destroys all data.
    async fn reset_schema(&self) -> LedgerResult<()>;
}
