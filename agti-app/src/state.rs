//! Application state and its transitions.

use directory::{find_by_id, members, FilterCache};
use shared_types::{Company, CompanyType, FilterState, Language, Province, Selection};
use std::fmt;

use crate::i18n::Strings;
use crate::session::ConsultSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Directory,
    Advisory,
    About,
}

impl View {
    pub fn title(&self, strings: &Strings) -> &'static str {
        match self {
            View::Dashboard => strings.sidebar.dashboard,
            View::Directory => strings.sidebar.directory,
            View::Advisory => strings.sidebar.ai,
            View::About => strings.sidebar.about,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Dashboard => "dashboard",
            View::Directory => "directory",
            View::Advisory => "advisory",
            View::About => "about",
        };
        f.write_str(name)
    }
}

/// Filter criteria of the directory view with a memoized result
pub struct DirectoryPage {
    filter: FilterState,
    cache: FilterCache<'static>,
}

impl Default for DirectoryPage {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            cache: FilterCache::new(members()),
        }
    }
}

impl DirectoryPage {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_company_type(&mut self, company_type: Selection<CompanyType>) {
        self.filter.company_type = company_type;
    }

    pub fn set_province(&mut self, province: Selection<Province>) {
        self.filter.province = province;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn results(&mut self) -> &[&'static Company] {
        self.cache.apply(&self.filter)
    }
}

pub enum Action {
    Navigate(View),
    SelectCompany(String),
    BackToDirectory,
    SetLanguage(Language),
    ResetConsultation,
}

/// Everything the shell remembers between user actions
pub struct AppState {
    pub view: View,
    pub selected_company: Option<String>,
    pub language: Language,
    pub directory: DirectoryPage,
    pub consultation: ConsultSession,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            view: View::default(),
            selected_company: None,
            language,
            directory: DirectoryPage::default(),
            consultation: ConsultSession::new(language),
        }
    }

    pub fn selected(&self) -> Option<&'static Company> {
        self.selected_company
            .as_deref()
            .and_then(|id| find_by_id(members(), id))
    }
}

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Navigate(view) => {
            tracing::debug!(from = %state.view, to = %view, "Navigate");
            if state.view == View::Directory && view != View::Directory {
                state.directory = DirectoryPage::default();
            }
            state.view = view;
            state.selected_company = None;
        }
        Action::SelectCompany(id) => {
            if find_by_id(members(), &id).is_some() {
                state.view = View::Directory;
                state.selected_company = Some(id);
            } else {
                tracing::warn!(company_id = %id, "Ignoring selection of unknown company");
            }
        }
        Action::BackToDirectory => {
            state.selected_company = None;
        }
        Action::SetLanguage(language) => {
            if language != state.language {
                state.language = language;
                state.consultation.reset(language);
            }
        }
        Action::ResetConsultation => {
            state.consultation.reset(state.language);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Language::default());
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.language, Language::Id);
        assert!(state.selected_company.is_none());
        assert_eq!(state.consultation.messages().len(), 1);
    }

    #[test]
    fn test_navigation_clears_selection() {
        let id = members()[0].id.clone();
        let state = reduce(AppState::new(Language::En), Action::SelectCompany(id.clone()));
        assert_eq!(state.view, View::Directory);
        assert_eq!(state.selected().map(|c| c.id.clone()), Some(id));

        let state = reduce(state, Action::Navigate(View::Directory));
        assert!(state.selected_company.is_none());
    }

    #[test]
    fn test_unknown_company_is_ignored() {
        let state = reduce(
            AppState::new(Language::En),
            Action::SelectCompany("does-not-exist".to_string()),
        );
        assert_eq!(state.view, View::Dashboard);
        assert!(state.selected_company.is_none());
    }

    #[test]
    fn test_back_to_directory() {
        let id = members()[1].id.clone();
        let state = reduce(AppState::new(Language::En), Action::SelectCompany(id));
        let state = reduce(state, Action::BackToDirectory);
        assert_eq!(state.view, View::Directory);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_language_change_resets_consultation() {
        let mut state = AppState::new(Language::Id);
        let ticket = state.consultation.begin("Halo").unwrap();
        state.consultation.complete(ticket, "Halo juga");
        assert_eq!(state.consultation.messages().len(), 3);

        // Same language: nothing happens
        let state = reduce(state, Action::SetLanguage(Language::Id));
        assert_eq!(state.consultation.messages().len(), 3);

        let state = reduce(state, Action::SetLanguage(Language::En));
        assert_eq!(state.language, Language::En);
        assert_eq!(state.consultation.messages().len(), 1);
        assert_eq!(state.consultation.language(), Language::En);
    }

    #[test]
    fn test_leaving_directory_discards_filters() {
        let mut state = reduce(AppState::new(Language::En), Action::Navigate(View::Directory));
        state.directory.set_search("denim");
        assert!(state.directory.filter().has_active_filters());

        let state = reduce(state, Action::Navigate(View::About));
        assert!(!state.directory.filter().has_active_filters());
    }

    #[test]
    fn test_directory_page_results() {
        let mut page = DirectoryPage::default();
        assert_eq!(page.results().len(), members().len());

        page.set_company_type(Selection::Only(CompanyType::Spinning));
        assert!(page
            .results()
            .iter()
            .all(|c| c.company_type == CompanyType::Spinning));

        page.clear_filters();
        assert_eq!(page.results().len(), members().len());
    }

    #[test]
    fn test_view_names() {
        let strings = crate::i18n::strings(Language::En);
        assert_eq!(View::Advisory.title(strings), "Consultation");
        assert_eq!(View::About.to_string(), "about");
    }
}
