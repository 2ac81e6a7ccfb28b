//! Per-project efficiency, overspend, and savings calculations.

use budgetlens_shared::types::{percent_of, ratio};
use rust_decimal::Decimal;

use super::types::{BudgetHealthStatus, ProjectBudgetHealth};
use crate::project::Project;

/// Spend-to-budget rate below which unspent budget counts as a savings opportunity.
pub const SAVINGS_RATE_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Score given to a project with no declared budget.
pub const UNBUDGETED_SCORE: Decimal = Decimal::ONE_HUNDRED;

impl ProjectBudgetHealth {
    /// Evaluates a project against its summed ledger expenses.
    #[must_use]
    pub fn evaluate(project: &Project, expenses: Decimal) -> Self {
        let budget = project.budget_amount();
        let overspend = overspend(budget, expenses);
        let savings = savings(budget, expenses);

        let status = if overspend > Decimal::ZERO {
            BudgetHealthStatus::OverBudget
        } else if budget.is_zero() {
            BudgetHealthStatus::Unbudgeted
        } else if is_under_utilized(budget, expenses) {
            BudgetHealthStatus::UnderUtilized
        } else {
            BudgetHealthStatus::OnTrack
        };

        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            budget,
            expenses,
            utilization_rate: percent_of(expenses, budget),
            efficiency_score: efficiency_score(budget, expenses),
            overspend,
            savings,
            status,
        }
    }
}

/// Scores how closely expenses tracked the budget, from 0 to 100.
///
/// `100 - |expenses - budget| / budget * 100`, floored at zero. A zero budget
/// scores 100.
#[must_use]
pub fn efficiency_score(budget: Decimal, expenses: Decimal) -> Decimal {
    if budget.is_zero() {
        return UNBUDGETED_SCORE;
    }
    let variance = percent_of(expenses.saturating_sub(budget).abs(), budget);
    Decimal::ONE_HUNDRED
        .saturating_sub(variance)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Amount by which expenses exceed the budget, or zero.
#[must_use]
pub fn overspend(budget: Decimal, expenses: Decimal) -> Decimal {
    expenses.saturating_sub(budget).max(Decimal::ZERO)
}

/// Unspent budget when less than 60% of a positive budget has been spent.
#[must_use]
pub fn savings(budget: Decimal, expenses: Decimal) -> Decimal {
    if is_under_utilized(budget, expenses) {
        budget.saturating_sub(expenses).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

fn is_under_utilized(budget: Decimal, expenses: Decimal) -> bool {
    budget > Decimal::ZERO && ratio(expenses, budget) < SAVINGS_RATE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectStatus;
    use budgetlens_shared::types::ProjectId;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn project(budget: &str) -> Project {
        Project {
            id: ProjectId::from("p1"),
            name: "Road".to_string(),
            holder_name: None,
            status: ProjectStatus::Active,
            budget: Some(budget.to_string()),
        }
    }

    #[rstest]
    #[case(dec!(1000), dec!(1000), dec!(100))]
    #[case(dec!(1000), dec!(600), dec!(60))]
    #[case(dec!(1000), dec!(1500), dec!(50))]
    #[case(dec!(1000), dec!(2500), dec!(0))]
    #[case(dec!(1000), dec!(0), dec!(0))]
    #[case(dec!(0), dec!(800), dec!(100))]
    fn test_efficiency_score(
        #[case] budget: Decimal,
        #[case] expenses: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(efficiency_score(budget, expenses), expected);
    }

    #[test]
    fn test_overspend() {
        assert_eq!(overspend(dec!(1000), dec!(1500)), dec!(500));
        assert_eq!(overspend(dec!(1000), dec!(900)), Decimal::ZERO);
        assert_eq!(overspend(dec!(0), dec!(200)), dec!(200));
    }

    #[rstest]
    #[case(dec!(1000), dec!(300), dec!(700))]
    #[case(dec!(1000), dec!(599.99), dec!(400.01))]
    #[case(dec!(1000), dec!(600), dec!(0))]
    #[case(dec!(1000), dec!(1200), dec!(0))]
    #[case(dec!(0), dec!(0), dec!(0))]
    fn test_savings(
        #[case] budget: Decimal,
        #[case] expenses: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(savings(budget, expenses), expected);
    }

    #[rstest]
    #[case("1000", dec!(1200), BudgetHealthStatus::OverBudget)]
    #[case("1000", dec!(300), BudgetHealthStatus::UnderUtilized)]
    #[case("1000", dec!(0), BudgetHealthStatus::UnderUtilized)]
    #[case("1000", dec!(800), BudgetHealthStatus::OnTrack)]
    #[case("1000", dec!(1000), BudgetHealthStatus::OnTrack)]
    #[case("n/a", dec!(50), BudgetHealthStatus::OverBudget)]
    #[case("0", dec!(800), BudgetHealthStatus::OverBudget)]
    #[case("n/a", dec!(0), BudgetHealthStatus::Unbudgeted)]
    fn test_health_status(
        #[case] budget: &str,
        #[case] expenses: Decimal,
        #[case] expected: BudgetHealthStatus,
    ) {
        let health = ProjectBudgetHealth::evaluate(&project(budget), expenses);
        assert_eq!(health.status, expected);
    }

    #[test]
    fn test_unbudgeted_spend_is_reported_as_overspend() {
        let mut unbudgeted = project("");
        unbudgeted.budget = None;
        let health = ProjectBudgetHealth::evaluate(&unbudgeted, dec!(800));

        assert_eq!(health.overspend, dec!(800));
        assert_eq!(health.savings, Decimal::ZERO);
        assert_eq!(health.status, BudgetHealthStatus::OverBudget);
        assert_eq!(health.efficiency_score, UNBUDGETED_SCORE);
    }

    #[test]
    fn test_evaluate_fields() {
        let health = ProjectBudgetHealth::evaluate(&project("2000"), dec!(500));

        assert_eq!(health.project_id.as_str(), "p1");
        assert_eq!(health.budget, dec!(2000));
        assert_eq!(health.expenses, dec!(500));
        assert_eq!(health.utilization_rate, dec!(25));
        assert_eq!(health.efficiency_score, dec!(25));
        assert_eq!(health.overspend, Decimal::ZERO);
        assert_eq!(health.savings, dec!(1500));
    }
}
