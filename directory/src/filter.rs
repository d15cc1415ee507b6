use shared_types::{Company, FilterState};

/// Companies matching every criterion of `state`, in registry order.
///
/// The search term matches case-insensitively against the company name or
/// its specialization. An empty term matches everything.
pub fn filter_companies<'a>(companies: &'a [Company], state: &FilterState) -> Vec<&'a Company> {
    let needle = state.search.to_lowercase();

    companies
        .iter()
        .filter(|company| {
            let matches_search = needle.is_empty()
                || company.name.to_lowercase().contains(&needle)
                || company.specialization.to_lowercase().contains(&needle);

            matches_search
                && state.company_type.matches(&company.company_type)
                && state.province.matches(&company.province)
        })
        .collect()
}

pub fn find_by_id<'a>(companies: &'a [Company], id: &str) -> Option<&'a Company> {
    companies.iter().find(|company| company.id == id)
}

/// Remembers the last filter evaluation over a fixed dataset so that
/// re-rendering with unchanged criteria skips the scan.
pub struct FilterCache<'a> {
    companies: &'a [Company],
    last: Option<(FilterState, Vec<&'a Company>)>,
}

impl<'a> FilterCache<'a> {
    pub fn new(companies: &'a [Company]) -> Self {
        Self {
            companies,
            last: None,
        }
    }

    pub fn apply(&mut self, state: &FilterState) -> &[&'a Company] {
        let stale = match &self.last {
            Some((key, _)) => key != state,
            None => true,
        };

        if stale {
            let result = filter_companies(self.companies, state);
            tracing::debug!(
                search = %state.search,
                matched = result.len(),
                "Directory filter recomputed"
            );
            self.last = Some((state.clone(), result));
        }

        match &self.last {
            Some((_, result)) => result.as_slice(),
            None => &[],
        }
    }

    /// Result of the most recent evaluation, `None` before the first one.
    pub fn last_result(&self) -> Option<&[&'a Company]> {
        self.last.as_ref().map(|(_, result)| result.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::members;
    use shared_types::{CompanyType, Province, Selection};

    fn company(id: &str, name: &str, specialization: &str, t: CompanyType, p: Province) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            company_type: t,
            province: p,
            city: "Kota".to_string(),
            capacity: "1 pcs/month".to_string(),
            employees: 10,
            certifications: vec![],
            export_markets: vec![],
            specialization: specialization.to_string(),
            description: String::new(),
            contact_email: String::new(),
            phone: "62".to_string(),
            verified: false,
        }
    }

    fn sample() -> Vec<Company> {
        vec![
            company("a", "PT Alpha Garment", "Denim jeans", CompanyType::Garment, Province::WestJava),
            company("b", "PT Beta Mill", "Rayon fabric", CompanyType::Textile, Province::WestJava),
            company("c", "CV Gamma", "Zippers", CompanyType::Accessories, Province::Bali),
            company("d", "PT Delta DENIM", "Fabric", CompanyType::Textile, Province::CentralJava),
        ]
    }

    fn ids(result: &[&Company]) -> Vec<String> {
        result.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_default_state_returns_everything_in_order() {
        let result = filter_companies(members(), &FilterState::default());
        assert_eq!(result.len(), members().len());
        for (filtered, original) in result.iter().zip(members()) {
            assert!(std::ptr::eq(*filtered, original));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_specialization() {
        let companies = sample();
        let state = FilterState::new("denim", Selection::All, Selection::All);
        let result = filter_companies(&companies, &state);
        assert_eq!(ids(&result), vec!["a", "d"]);

        for company in &companies {
            let hit = company.name.to_lowercase().contains("denim")
                || company.specialization.to_lowercase().contains("denim");
            assert_eq!(hit, result.iter().any(|c| c.id == company.id));
        }
    }

    #[test]
    fn test_type_and_province_are_conjunctive() {
        let companies = sample();
        let state = FilterState::new(
            "",
            Selection::Only(CompanyType::Textile),
            Selection::Only(Province::WestJava),
        );
        assert_eq!(ids(&filter_companies(&companies, &state)), vec!["b"]);

        let state = FilterState::new(
            "fabric",
            Selection::Only(CompanyType::Textile),
            Selection::All,
        );
        assert_eq!(ids(&filter_companies(&companies, &state)), vec!["b", "d"]);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let companies = sample();
        let state = FilterState::new("silk", Selection::All, Selection::Only(Province::Bali));
        assert!(filter_companies(&companies, &state).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let companies = sample();
        assert_eq!(find_by_id(&companies, "c").map(|c| c.name.as_str()), Some("CV Gamma"));
        assert!(find_by_id(&companies, "zzz").is_none());
    }

    #[test]
    fn test_cache_matches_uncached_filter() {
        let companies = sample();
        let mut cache = FilterCache::new(&companies);
        assert!(cache.last_result().is_none());

        let states = [
            FilterState::default(),
            FilterState::new("mill", Selection::All, Selection::All),
            FilterState::new("mill", Selection::All, Selection::All),
            FilterState::new("", Selection::Only(CompanyType::Garment), Selection::All),
            FilterState::new("nothing-here", Selection::All, Selection::All),
        ];

        for state in &states {
            let expected = ids(&filter_companies(&companies, state));
            assert_eq!(ids(cache.apply(state)), expected);
        }

        // Empty result after a search is distinct from "not yet searched"
        assert_eq!(cache.last_result().map(|r| r.len()), Some(0));
    }
}
