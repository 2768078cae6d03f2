//! # IO Module
//!
//! Interface layer between HTTP clients and the domain services.
//!
//! Requests are translated into service calls, and results into JSON views,
//! redirects or spreadsheet downloads. Domain errors are turned into status
//! codes here and nowhere else.

pub mod rest;

pub use rest::*;
