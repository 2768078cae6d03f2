//! Embedded SQLite backend, used when no network database is configured.

pub mod connection;
pub mod payable_repository;
pub mod transaction_repository;

pub use connection::SqliteConnection;
pub use payable_repository::SqlitePayableRepository;
pub use transaction_repository::SqliteTransactionRepository;
