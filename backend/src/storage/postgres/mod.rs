//! PostgreSQL backend, selected when a connection string is configured.
//! Only compiled with the `postgres` feature.

pub mod connection;
pub mod payable_repository;
pub mod transaction_repository;

pub use connection::PgConnection;
pub use payable_repository::PgPayableRepository;
pub use transaction_repository::PgTransactionRepository;
