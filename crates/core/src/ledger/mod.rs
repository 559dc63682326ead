//! Activity ledger: validation, CRUD rules, and summary statistics.

pub mod ports;
pub mod service;
pub mod stats;
pub mod validate;

pub use service::LedgerService;
