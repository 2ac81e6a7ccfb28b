//! Budget analysis service.

use std::collections::HashMap;

use budgetlens_shared::types::{percent_of, ratio};
use rust_decimal::Decimal;
use tracing::debug;

use super::index::ExpenseIndex;
use super::ranking::top_spenders;
use super::types::{BudgetAnalysis, BudgetTrend, ProjectBudgetHealth, StatusCount};
use crate::project::{BudgetRecord, Project, ProjectStatus};

/// Service that derives financial health metrics from a project catalog and
/// a budget ledger.
///
/// Analysis is a pure, single-pass transform: no I/O, no shared state, and no
/// failure modes. Malformed amounts have already been read as zero, division
/// by zero resolves to zero, and ledger records for unknown projects count
/// toward ledger-wide totals only.
pub struct BudgetAnalyzer;

impl BudgetAnalyzer {
    /// Analyzes the catalog and ledger.
    ///
    /// Empty inputs yield a zeroed analysis with a stable trend.
    #[must_use]
    pub fn analyze(projects: &[Project], records: &[BudgetRecord]) -> BudgetAnalysis {
        let index = ExpenseIndex::build(records);

        let total_budget = sum(projects.iter().map(Project::budget_amount));
        let total_expenses = sum(records.iter().map(|r| r.expenses));
        let total_allocations = sum(records.iter().map(|r| r.allocation));
        let remaining_budget = total_budget.saturating_sub(total_expenses);
        let utilization_rate = percent_of(total_expenses, total_budget);
        let average_budget_per_project = ratio(total_budget, Decimal::from(projects.len()));
        let budget_trend = BudgetTrend::classify(total_expenses, total_allocations, total_budget);

        let project_health: Vec<ProjectBudgetHealth> = projects
            .iter()
            .map(|p| ProjectBudgetHealth::evaluate(p, index.expense_for(p.id.as_str())))
            .collect();

        let budget_efficiency = ratio(
            sum(project_health.iter().map(|h| h.efficiency_score)),
            Decimal::from(project_health.len()),
        );
        let forecasted_overspend = sum(project_health.iter().map(|h| h.overspend));
        let savings_opportunities = sum(project_health.iter().map(|h| h.savings));

        let mut catalog: HashMap<&str, &Project> = HashMap::with_capacity(projects.len());
        for project in projects {
            catalog.entry(project.id.as_str()).or_insert(project);
        }
        let top_spending_projects = top_spenders(&index, &catalog);

        debug!(
            projects = projects.len(),
            records = records.len(),
            dangling_records = dangling_records(records, &catalog),
            trend = %budget_trend,
            "Budget analysis computed"
        );

        BudgetAnalysis {
            total_budget,
            total_expenses,
            remaining_budget,
            utilization_rate,
            average_budget_per_project,
            budget_trend,
            top_spending_projects,
            budget_efficiency,
            forecasted_overspend,
            savings_opportunities,
            project_health,
            status_breakdown: status_breakdown(projects),
        }
    }
}

fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Counts ledger records whose project is missing from the catalog.
fn dangling_records(records: &[BudgetRecord], catalog: &HashMap<&str, &Project>) -> usize {
    records
        .iter()
        .filter(|r| !catalog.contains_key(r.project_id.as_str()))
        .count()
}

fn status_breakdown(projects: &[Project]) -> Vec<StatusCount> {
    ProjectStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: projects.iter().filter(|p| p.status == status).count(),
        })
        .collect()
}
