//! Budget analysis result types.

use budgetlens_shared::types::ProjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::project::{Project, ProjectStatus};

/// Direction of spending relative to plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTrend {
    /// Spend is running above 80% of the baseline.
    Increasing,
    /// Spend is running below 40% of the baseline.
    Decreasing,
    /// Anything in between.
    Stable,
}

impl std::fmt::Display for BudgetTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increasing => write!(f, "increasing"),
            Self::Decreasing => write!(f, "decreasing"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Health classification of a single project's spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetHealthStatus {
    /// Expenses exceed the declared budget.
    OverBudget,
    /// Less than 60% of the declared budget spent.
    UnderUtilized,
    /// No declared budget and no spend against it.
    Unbudgeted,
    /// Spend is within the expected band.
    OnTrack,
}

/// Per-project budget health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBudgetHealth {
    /// Project ID.
    pub project_id: ProjectId,
    /// Project name.
    pub project_name: String,
    /// Parsed declared budget.
    pub budget: Decimal,
    /// Summed ledger expenses for the project.
    pub expenses: Decimal,
    /// Expenses as a percentage of budget (0 when unbudgeted).
    pub utilization_rate: Decimal,
    /// Efficiency score, 0 to 100.
    pub efficiency_score: Decimal,
    /// Amount spent beyond the budget.
    pub overspend: Decimal,
    /// Unspent budget on an under-utilized project.
    pub savings: Decimal,
    /// Health classification.
    pub status: BudgetHealthStatus,
}

/// Number of catalog projects in one lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Number of projects.
    pub count: usize,
}

/// Financial health metrics derived from a project catalog and budget ledger.
///
/// Recomputed from scratch on every analysis; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAnalysis {
    /// Sum of declared project budgets.
    pub total_budget: Decimal,
    /// Sum of all ledger expenses, including records for unknown projects.
    pub total_expenses: Decimal,
    /// `total_budget - total_expenses`; may be negative.
    pub remaining_budget: Decimal,
    /// Percentage of total budget spent.
    pub utilization_rate: Decimal,
    /// Mean declared budget per catalog project.
    pub average_budget_per_project: Decimal,
    /// Spending trend.
    pub budget_trend: BudgetTrend,
    /// Up to five projects with the highest expenses, highest first.
    pub top_spending_projects: Vec<Project>,
    /// Mean per-project efficiency score.
    pub budget_efficiency: Decimal,
    /// Total spend beyond budget across projects.
    pub forecasted_overspend: Decimal,
    /// Total unspent budget on under-utilized projects.
    pub savings_opportunities: Decimal,
    /// Per-project breakdown in catalog order.
    pub project_health: Vec<ProjectBudgetHealth>,
    /// Project counts per lifecycle status.
    pub status_breakdown: Vec<StatusCount>,
}
