//! Top-spender ranking.

use std::collections::HashMap;

use tracing::debug;

use super::index::ExpenseIndex;
use crate::project::Project;

/// Maximum number of projects in the top-spender ranking.
pub const TOP_SPENDERS_LIMIT: usize = 5;

/// Returns up to five catalog projects with the highest summed expenses.
///
/// The five highest index entries are taken first, then resolved against the
/// catalog. Entries for projects missing from the catalog are dropped, so the
/// result can be shorter than five even when more projects exist.
#[must_use]
pub fn top_spenders(index: &ExpenseIndex, catalog: &HashMap<&str, &Project>) -> Vec<Project> {
    index
        .ranked()
        .into_iter()
        .take(TOP_SPENDERS_LIMIT)
        .filter_map(|(project_id, expenses)| {
            let project = catalog.get(project_id.as_str()).copied();
            if project.is_none() {
                debug!(%project_id, %expenses, "Dropping unresolved project from ranking");
            }
            project.cloned()
        })
        .collect()
}
