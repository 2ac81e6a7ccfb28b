//! Spending trend classification.

use budgetlens_shared::types::percent_of;
use rust_decimal::Decimal;

use super::types::BudgetTrend;

/// Burn-rate percentage above which spending is increasing.
pub const INCREASING_ABOVE: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Burn-rate percentage below which spending is decreasing.
pub const DECREASING_BELOW: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

impl BudgetTrend {
    /// Classifies a burn-rate percentage.
    #[must_use]
    pub fn from_rate(rate: Decimal) -> Self {
        if rate > INCREASING_ABOVE {
            Self::Increasing
        } else if rate < DECREASING_BELOW {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    /// Classifies the ledger's trend.
    ///
    /// Uses expenses against the ledger's own allocations when any exist,
    /// otherwise expenses against the total declared budget. With neither
    /// baseline there is nothing to compare against and the trend is stable.
    #[must_use]
    pub fn classify(
        total_expenses: Decimal,
        total_allocations: Decimal,
        total_budget: Decimal,
    ) -> Self {
        if total_allocations > Decimal::ZERO {
            Self::from_rate(percent_of(total_expenses, total_allocations))
        } else if total_budget > Decimal::ZERO {
            Self::from_rate(percent_of(total_expenses, total_budget))
        } else {
            Self::Stable
        }
    }
}
