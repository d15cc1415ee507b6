use anyhow::Result;
use shared_types::{CompaniesResponse, CompanyType, Province, Selection};

use crate::render::{render_company_detail, render_directory};
use crate::state::{reduce, Action, AppState, View};

#[derive(Debug, Clone, Default)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub company_type: Option<CompanyType>,
    pub province: Option<Province>,
}

pub fn list_companies(state: AppState, query: DirectoryQuery, json: bool) -> Result<(AppState, String)> {
    let mut state = reduce(state, Action::Navigate(View::Directory));

    state.directory.set_search(query.search.unwrap_or_default());
    state
        .directory
        .set_company_type(Selection::from(query.company_type));
    state.directory.set_province(Selection::from(query.province));

    let language = state.language;
    let filter = state.directory.filter().clone();
    let results = state.directory.results();

    tracing::debug!(
        search = %filter.search,
        matched = results.len(),
        "Directory listing"
    );

    let output = if json {
        serde_json::to_string_pretty(&CompaniesResponse {
            total: results.len(),
            companies: results.iter().map(|c| (*c).clone()).collect(),
        })?
    } else {
        render_directory(&filter, results, language)
    };

    Ok((state, output))
}

pub fn show_company(state: AppState, id: &str, json: bool) -> Result<(AppState, String)> {
    let state = reduce(state, Action::SelectCompany(id.to_string()));

    let company = state
        .selected()
        .ok_or_else(|| anyhow::anyhow!("No company found with id {}", id))?;

    let output = if json {
        serde_json::to_string_pretty(company)?
    } else {
        render_company_detail(company, state.language)
    };

    Ok((state, output))
}
