//! # Storage Module
//!
//! Persistence for the ledger. Two backends implement the same traits:
//!
//! - **sqlite**: an embedded database file, always available
//! - **postgres**: a PostgreSQL server, compiled with the `postgres` feature
//!
//! The backend is picked once at startup and handed to the services as a
//! [`Connection`]. SQL text is shared between them through [`queries`], with
//! the per-backend differences kept in [`dialect::Dialect`].

pub mod dialect;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod queries;
pub mod sqlite;
pub mod traits;

pub use dialect::Dialect;
#[cfg(feature = "postgres")]
pub use postgres::PgConnection;
pub use sqlite::SqliteConnection;
pub use traits::{Connection, PayableStorage, TransactionStorage};
