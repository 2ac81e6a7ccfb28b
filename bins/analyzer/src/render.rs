//! Rendering analysis results as text tables or JSON.

use budgetlens_core::BudgetAnalysis;
use budgetlens_core::analysis::BudgetHealthStatus;
use budgetlens_core::history::MonthlySpend;
use budgetlens_shared::AppResult;
use budgetlens_shared::types::format_amount;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use serde::Serialize;

/// Full analyzer output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    /// Engine result.
    pub analysis: &'a BudgetAnalysis,
    /// Month-by-month ledger totals.
    pub monthly_spend: &'a [MonthlySpend],
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &Report<'_>) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the report as text tables, amounts in `currency`.
pub fn render_text(report: &Report<'_>, currency: &str) -> String {
    let analysis = report.analysis;
    let money = |amount| format_amount(amount, currency);

    let summary = pretty_table(
        &["Metric", "Value"],
        vec![
            vec!["Total budget".into(), money(analysis.total_budget)],
            vec!["Total expenses".into(), money(analysis.total_expenses)],
            vec!["Remaining budget".into(), money(analysis.remaining_budget)],
            vec!["Utilization".into(), percent(analysis.utilization_rate)],
            vec![
                "Average per project".into(),
                money(analysis.average_budget_per_project),
            ],
            vec!["Trend".into(), analysis.budget_trend.to_string()],
            vec![
                "Efficiency".into(),
                analysis.budget_efficiency.round_dp(2).to_string(),
            ],
            vec![
                "Forecasted overspend".into(),
                money(analysis.forecasted_overspend),
            ],
            vec![
                "Savings opportunities".into(),
                money(analysis.savings_opportunities),
            ],
        ],
    );

    let top_rows = analysis
        .top_spending_projects
        .iter()
        .enumerate()
        .map(|(rank, project)| {
            let spent = analysis
                .project_health
                .iter()
                .find(|h| h.project_id == project.id)
                .map_or_else(String::new, |h| money(h.expenses));
            vec![
                (rank + 1).to_string(),
                project.name.clone(),
                project.holder_display().to_string(),
                project.status.to_string(),
                spent,
            ]
        })
        .collect();
    let top = pretty_table(&["#", "Project", "Holder", "Status", "Expenses"], top_rows);

    let health_rows = analysis
        .project_health
        .iter()
        .map(|h| {
            vec![
                h.project_name.clone(),
                money(h.budget),
                money(h.expenses),
                percent(h.utilization_rate),
                h.efficiency_score.round_dp(2).to_string(),
                health_label(h.status).to_string(),
            ]
        })
        .collect();
    let health = pretty_table(
        &["Project", "Budget", "Expenses", "Utilization", "Score", "Health"],
        health_rows,
    );

    let status_line = analysis
        .status_breakdown
        .iter()
        .map(|c| format!("{}: {}", c.status, c.count))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = format!(
        "Budget summary\n{summary}\n\nProjects by status  {status_line}\n\n\
         Top spending projects\n{top}\n\nProject budget health\n{health}\n"
    );

    if !report.monthly_spend.is_empty() {
        let month_rows = report
            .monthly_spend
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    money(m.allocation),
                    money(m.expenses),
                    m.record_count.to_string(),
                    percent(m.utilization_rate),
                ]
            })
            .collect();
        let months = pretty_table(
            &["Month", "Allocation", "Expenses", "Records", "Utilization"],
            month_rows,
        );
        out.push_str(&format!("\nMonthly spend\n{months}\n"));
    }

    out
}

fn percent(rate: Decimal) -> String {
    format!("{:.2}%", rate.round_dp(2))
}

fn health_label(status: BudgetHealthStatus) -> &'static str {
    match status {
        BudgetHealthStatus::OverBudget => "over budget",
        BudgetHealthStatus::UnderUtilized => "under-utilized",
        BudgetHealthStatus::Unbudgeted => "unbudgeted",
        BudgetHealthStatus::OnTrack => "on track",
    }
}

fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetlens_core::BudgetAnalyzer;
    use budgetlens_core::history::monthly_spend;
    use budgetlens_core::project::{BudgetRecord, BudgetRecordStatus, Project, ProjectStatus};
    use budgetlens_shared::types::{BudgetRecordId, ProjectId};
    use rust_decimal_macros::dec;

    fn sample() -> (Vec<Project>, Vec<BudgetRecord>) {
        let projects = vec![Project {
            id: ProjectId::from("p1"),
            name: "Health Post".to_string(),
            holder_name: Some("Meron".to_string()),
            status: ProjectStatus::Active,
            budget: Some("12345".to_string()),
        }];
        let records = vec![BudgetRecord {
            id: BudgetRecordId::from("r1"),
            project_id: ProjectId::from("p1"),
            allocation: dec!(12345),
            expenses: dec!(8000),
            date: "2026-07-15".parse().unwrap(),
            status: BudgetRecordStatus::Approved,
        }];
        (projects, records)
    }

    #[test]
    fn test_render_text_sections() {
        let (projects, records) = sample();
        let analysis = BudgetAnalyzer::analyze(&projects, &records);
        let history = monthly_spend(&records);
        let report = Report {
            analysis: &analysis,
            monthly_spend: &history,
        };

        let text = render_text(&report, "ETB");

        assert!(text.contains("ETB 12,345.00"));
        assert!(text.contains("ETB 8,000.00"));
        assert!(text.contains("Health Post"));
        assert!(text.contains("Meron"));
        assert!(text.contains("ACTIVE: 1"));
        assert!(text.contains("2026-07"));
        assert!(text.contains("on track"));
    }

    #[test]
    fn test_render_text_without_history() {
        let analysis = BudgetAnalyzer::analyze(&[], &[]);
        let report = Report {
            analysis: &analysis,
            monthly_spend: &[],
        };

        let text = render_text(&report, "USD");

        assert!(text.contains("USD 0.00"));
        assert!(text.contains("stable"));
        assert!(!text.contains("Monthly spend"));
    }

    #[test]
    fn test_render_json_shape() {
        let (projects, records) = sample();
        let analysis = BudgetAnalyzer::analyze(&projects, &records);
        let history = monthly_spend(&records);
        let report = Report {
            analysis: &analysis,
            monthly_spend: &history,
        };

        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["analysis"]["budgetTrend"], "stable");
        assert_eq!(json["analysis"]["topSpendingProjects"][0]["id"], "p1");
        assert_eq!(json["monthlySpend"][0]["month"], "2026-07");
    }
}
