//! Budget analysis engine for BudgetLens.
//!
//! This crate contains pure business logic with ZERO web, database, or I/O
//! dependencies. Callers fetch the project catalog and budget ledger and pass
//! both completed collections in.
//!
//! # Modules
//!
//! - `project` - Catalog and ledger record types
//! - `analysis` - Budget health metrics, trend, and top-spender ranking
//! - `history` - Month-by-month ledger totals

pub mod analysis;
pub mod history;
pub mod project;

pub use analysis::{BudgetAnalysis, BudgetAnalyzer};
