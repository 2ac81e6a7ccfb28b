//! Project catalog and budget ledger types.

use budgetlens_shared::types::amount::{amount_text, lenient_amount, parse_optional_amount};
use budgetlens_shared::types::{BudgetRecordId, ProjectId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display name used when a project has no assigned holder.
pub const UNASSIGNED_HOLDER: &str = "Unassigned";

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Not started yet.
    Planned,
    /// In progress.
    Active,
    /// Finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl ProjectStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 4] = [Self::Planned, Self::Active, Self::Completed, Self::Cancelled];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planned => write!(f, "PLANNED"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A project from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID, unique within one catalog.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Assigned holder's display name.
    #[serde(default)]
    pub holder_name: Option<String>,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Nominal budget as stored upstream (free text).
    #[serde(default, deserialize_with = "amount_text::deserialize")]
    pub budget: Option<String>,
}

impl Project {
    /// Returns the parsed budget; missing or unparsable text is zero.
    #[must_use]
    pub fn budget_amount(&self) -> Decimal {
        parse_optional_amount(self.budget.as_deref())
    }

    /// Returns the holder name, or `"Unassigned"`.
    #[must_use]
    pub fn holder_display(&self) -> &str {
        self.holder_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNASSIGNED_HOLDER)
    }
}

/// Approval state of a ledger record. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetRecordStatus {
    /// Awaiting approval.
    #[default]
    Pending,
    /// Approved.
    Approved,
    /// Rejected.
    Rejected,
}

/// A dated allocation/expense record from the budget ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    /// Record ID.
    pub id: BudgetRecordId,
    /// Project this record belongs to. May not exist in the catalog.
    pub project_id: ProjectId,
    /// Allocated amount.
    #[serde(default, deserialize_with = "lenient_amount::deserialize")]
    pub allocation: Decimal,
    /// Spent amount.
    #[serde(default, deserialize_with = "lenient_amount::deserialize")]
    pub expenses: Decimal,
    /// Record date.
    pub date: NaiveDate,
    /// Approval status.
    #[serde(default)]
    pub status: BudgetRecordStatus,
}
