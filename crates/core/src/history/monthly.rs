//! Calendar-month grouping of ledger records.

use std::collections::BTreeMap;

use budgetlens_shared::types::percent_of;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::project::BudgetRecord;

/// Ledger totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpend {
    /// Month label, `YYYY-MM`.
    pub month: String,
    /// Summed allocations.
    pub allocation: Decimal,
    /// Summed expenses.
    pub expenses: Decimal,
    /// Number of records in the month.
    pub record_count: usize,
    /// Expenses as a percentage of allocations (0 when nothing was allocated).
    pub utilization_rate: Decimal,
}

#[derive(Default)]
struct MonthTotals {
    allocation: Decimal,
    expenses: Decimal,
    record_count: usize,
}

/// Groups the ledger by calendar month, oldest first.
///
/// Only months with at least one record are returned. Records for projects
/// missing from the catalog are included, like the ledger-wide totals.
#[must_use]
pub fn monthly_spend(records: &[BudgetRecord]) -> Vec<MonthlySpend> {
    let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();

    for record in records {
        let totals = months
            .entry((record.date.year(), record.date.month()))
            .or_default();
        totals.allocation = totals.allocation.saturating_add(record.allocation);
        totals.expenses = totals.expenses.saturating_add(record.expenses);
        totals.record_count += 1;
    }

    months
        .into_iter()
        .map(|((year, month), totals)| MonthlySpend {
            month: format!("{year:04}-{month:02}"),
            allocation: totals.allocation,
            expenses: totals.expenses,
            record_count: totals.record_count,
            utilization_rate: percent_of(totals.expenses, totals.allocation),
        })
        .collect()
}
