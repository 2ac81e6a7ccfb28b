//! Project catalog and budget ledger records consumed by the analysis engine.

pub mod types;

pub use types::{BudgetRecord, BudgetRecordStatus, Project, ProjectStatus, UNASSIGNED_HOLDER};
