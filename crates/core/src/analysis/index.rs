//! Per-project expense index.

use std::collections::HashMap;

use budgetlens_shared::types::ProjectId;
use rust_decimal::Decimal;

use crate::project::BudgetRecord;

/// Summed expenses per project ID, in order of first appearance in the ledger.
///
/// Every record counts regardless of its approval status. Records for projects
/// missing from the catalog are indexed too; consumers decide whether to
/// resolve them.
#[derive(Debug, Clone, Default)]
pub struct ExpenseIndex {
    entries: Vec<(ProjectId, Decimal)>,
    positions: HashMap<ProjectId, usize>,
}

impl ExpenseIndex {
    /// Builds the index by folding over the ledger once.
    #[must_use]
    pub fn build(records: &[BudgetRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.add(&record.project_id, record.expenses);
        }
        index
    }

    fn add(&mut self, project_id: &ProjectId, amount: Decimal) {
        if let Some(&pos) = self.positions.get(project_id) {
            let total = &mut self.entries[pos].1;
            *total = total.saturating_add(amount);
        } else {
            self.positions.insert(project_id.clone(), self.entries.len());
            self.entries.push((project_id.clone(), amount));
        }
    }

    /// Returns the summed expenses for a project, zero if it has no records.
    #[must_use]
    pub fn expense_for(&self, project_id: &str) -> Decimal {
        self.positions
            .get(project_id)
            .map_or(Decimal::ZERO, |&pos| self.entries[pos].1)
    }

    /// Number of distinct project IDs seen in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, Decimal)> {
        self.entries.iter().map(|(id, total)| (id, *total))
    }

    /// Entries sorted by expense, highest first.
    ///
    /// The sort is stable, so equal expenses keep first-appearance order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&ProjectId, Decimal)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
