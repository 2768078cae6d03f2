//! # Domain Module
//!
//! Business logic of the finance ledger: transactions (`transacoes`),
//! payables (`contas_a_pagar`) and the reports built over them.
//!
//! ## Module Organization
//!
//! - **models**: Transaction and payable entities with their kind/status enums
//! - **categories**: The static chart of accounts (Plano de Contas)
//! - **commands**: Report filters parsed from query strings
//! - **validation**: Form checks applied before anything is stored
//! - **report**: Pure aggregation (totals, per category, per month)
//! - **export**: xlsx rendering of report rows
//! - **transaction_service** / **payable_service** / **admin_service**: Operations used by the REST layer
//!
//! ## Business Rules
//!
//! - Dates are "DD-MM-YYYY" text; month filters match on the "MM-YYYY" suffix
//! - A payable starts pending and can only move to paid, once
//! - Paying a payable records an expense dated on the payment day
//! - Rows of an unknown kind or status are stored but left out of every sum

pub mod admin_service;
pub mod categories;
pub mod commands;
pub mod export;
pub mod models;
pub mod payable_service;
pub mod report;
pub mod transaction_service;
pub mod validation;

pub use admin_service::AdminService;
pub use payable_service::PayableService;
pub use transaction_service::TransactionService;
