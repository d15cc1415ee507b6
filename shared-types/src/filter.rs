use serde::{Deserialize, Serialize};

use crate::company::{CompanyType, Province};

/// A dropdown choice: either "match all" or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "Option<T>",
    into = "Option<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub enum Selection<T: Clone> {
    All,
    Only(T),
}

impl<T: Clone> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Clone> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }
}

impl<T: Clone> From<Selection<T>> for Option<T> {
    fn from(value: Selection<T>) -> Self {
        match value {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

/// Directory search criteria
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against name and specialization
    pub search: String,
    #[serde(rename = "type")]
    pub company_type: Selection<CompanyType>,
    pub province: Selection<Province>,
}

impl FilterState {
    pub fn new(
        search: impl Into<String>,
        company_type: Selection<CompanyType>,
        province: Selection<Province>,
    ) -> Self {
        Self {
            search: search.into(),
            company_type,
            province,
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.company_type.is_all() || !self.province.is_all()
    }

    /// Reset every criterion back to "match all"
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_filters() {
        let state = FilterState::default();
        assert!(!state.has_active_filters());
        assert!(state.company_type.is_all());
        assert!(state.province.is_all());
    }

    #[test]
    fn test_clear_restores_default() {
        let mut state = FilterState::new(
            "denim",
            Selection::Only(CompanyType::Textile),
            Selection::Only(Province::CentralJava),
        );
        assert!(state.has_active_filters());

        state.clear();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_selection_matches() {
        assert!(Selection::All.matches(&Province::Bali));
        assert!(Selection::Only(Province::Bali).matches(&Province::Bali));
        assert!(!Selection::Only(Province::Bali).matches(&Province::Banten));
    }

    #[test]
    fn test_selection_serialization() {
        let state = FilterState::new("", Selection::Only(CompanyType::Garment), Selection::All);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["type"], "Garment Manufacturer");
        assert!(json["province"].is_null());
    }
}
