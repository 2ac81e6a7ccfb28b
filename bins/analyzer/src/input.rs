//! Loading the project catalog and budget ledger.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use budgetlens_core::project::{BudgetRecord, Project};
use budgetlens_shared::{AppError, AppResult};

/// Loads the catalog and ledger concurrently.
///
/// Both files must load before analysis starts; the first failure wins.
pub async fn load_inputs(
    projects: &Path,
    records: &Path,
) -> AppResult<(Vec<Project>, Vec<BudgetRecord>)> {
    tokio::try_join!(load_catalog(projects), load_ledger(records))
}

/// Loads a project catalog from a JSON file.
pub async fn load_catalog(path: &Path) -> AppResult<Vec<Project>> {
    parse_catalog(&read(path).await?)
}

/// Loads a budget ledger from a JSON file.
pub async fn load_ledger(path: &Path) -> AppResult<Vec<BudgetRecord>> {
    parse_ledger(&read(path).await?)
}

/// Parses a JSON array of projects, rejecting duplicate IDs.
pub fn parse_catalog(text: &str) -> AppResult<Vec<Project>> {
    let projects: Vec<Project> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(projects.len());
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate project id in catalog: {}",
                project.id
            )));
        }
    }

    Ok(projects)
}

/// Parses a JSON array of budget records.
pub fn parse_ledger(text: &str) -> AppResult<Vec<BudgetRecord>> {
    Ok(serde_json::from_str(text)?)
}

async fn read(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
            _ => AppError::Internal(format!("Failed to read {}: {err}", path.display())),
        })
}
