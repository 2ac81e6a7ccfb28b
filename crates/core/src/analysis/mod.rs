//! Budget analysis engine.
//!
//! Turns a project catalog and a budget ledger into financial health metrics:
//! - Aggregate totals and utilization
//! - Spending trend
//! - Per-project efficiency, overspend, and savings
//! - Top-spender ranking

pub mod health;
pub mod index;
pub mod ranking;
pub mod service;
pub mod trend;
pub mod types;


pub use index::ExpenseIndex;
pub use ranking::TOP_SPENDERS_LIMIT;
pub use service::BudgetAnalyzer;
pub use types::{
    BudgetAnalysis, BudgetHealthStatus, BudgetTrend, ProjectBudgetHealth, StatusCount,
};
