use anyhow::Result;
use directory::{dashboard_summary, members};
use shared_types::Language;

use crate::render::render_dashboard;

pub fn dashboard(language: Language, json: bool) -> Result<String> {
    let summary = dashboard_summary(members());
    tracing::debug!(
        total_companies = summary.total_companies,
        total_employees = summary.total_employees,
        "Dashboard computed"
    );

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }
    Ok(render_dashboard(&summary, language))
}
