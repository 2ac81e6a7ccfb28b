//! Shared types, errors, and configuration for BudgetLens.
//!
//! This crate provides common types used across all other crates:
//! - Typed string IDs for projects and ledger records
//! - Lenient amount parsing and display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, OutputFormat};
pub use error::{AppError, AppResult};
