//! Spend history derived from the budget ledger.

pub mod monthly;

pub use monthly::{MonthlySpend, monthly_spend};
