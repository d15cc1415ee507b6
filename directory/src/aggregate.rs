use shared_types::{
    CategoryCount, Company, CompanyType, ComplianceStats, DashboardSummary, Province, RegionCount,
};

/// Certificate keywords tracked on the dashboard. Matching is a
/// case-sensitive substring test against each certification label.
pub const ISO_9001: &str = "ISO 9001";
pub const SNI_WAJIB: &str = "SNI Wajib";
pub const SNI_SUKARELA: &str = "SNI Sukarela";
pub const OEKO_TEX: &str = "OEKO-TEX";

/// Company count per industry category, in declaration order, without empty categories
pub fn category_breakdown(companies: &[Company]) -> Vec<CategoryCount> {
    CompanyType::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: companies
                .iter()
                .filter(|c| c.company_type == category)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect()
}

/// Company count per region, largest first. Regions with equal counts keep
/// their declaration order.
pub fn region_breakdown(companies: &[Company]) -> Vec<RegionCount> {
    let mut regions: Vec<RegionCount> = Province::ALL
        .into_iter()
        .map(|province| RegionCount {
            province,
            count: companies.iter().filter(|c| c.province == province).count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();

    // sort_by is stable
    regions.sort_by(|a, b| b.count.cmp(&a.count));
    regions
}

pub fn count_with_certification(companies: &[Company], keyword: &str) -> usize {
    companies
        .iter()
        .filter(|c| c.has_certification_containing(keyword))
        .count()
}

pub fn compliance_stats(companies: &[Company]) -> ComplianceStats {
    ComplianceStats {
        iso_9001: count_with_certification(companies, ISO_9001),
        sni_wajib: count_with_certification(companies, SNI_WAJIB),
        sni_sukarela: count_with_certification(companies, SNI_SUKARELA),
        oeko_tex: count_with_certification(companies, OEKO_TEX),
    }
}

pub fn total_employees(companies: &[Company]) -> u64 {
    companies.iter().map(|c| u64::from(c.employees)).sum()
}

pub fn dashboard_summary(companies: &[Company]) -> DashboardSummary {
    DashboardSummary {
        total_companies: companies.len(),
        total_employees: total_employees(companies),
        categories: category_breakdown(companies),
        regions: region_breakdown(companies),
        compliance: compliance_stats(companies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::members;
    use crate::filter::filter_companies;
    use shared_types::FilterState;

    fn company(id: &str, t: CompanyType, p: Province, certs: &[&str]) -> Company {
        Company {
            id: id.to_string(),
            name: format!("PT {id}"),
            company_type: t,
            province: p,
            city: "Kota".to_string(),
            capacity: "100 pcs/month".to_string(),
            employees: 100,
            certifications: certs.iter().map(|c| c.to_string()).collect(),
            export_markets: vec![],
            specialization: String::new(),
            description: String::new(),
            contact_email: String::new(),
            phone: "62".to_string(),
            verified: true,
        }
    }

    #[test]
    fn test_two_company_scenario() {
        let companies = vec![
            company("g", CompanyType::Garment, Province::WestJava, &["ISO 9001:2015"]),
            company("t", CompanyType::Textile, Province::WestJava, &[]),
        ];

        let listed: Vec<&str> = filter_companies(&companies, &FilterState::default())
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(listed, vec!["g", "t"]);

        let categories = category_breakdown(&companies);
        assert_eq!(
            categories,
            vec![
                CategoryCount { category: CompanyType::Garment, count: 1 },
                CategoryCount { category: CompanyType::Textile, count: 1 },
            ]
        );

        let regions = region_breakdown(&companies);
        assert_eq!(
            regions,
            vec![RegionCount { province: Province::WestJava, count: 2 }]
        );

        assert_eq!(compliance_stats(&companies).iso_9001, 1);
    }

    #[test]
    fn test_breakdowns_partition_the_dataset() {
        let companies = members();
        let by_category: usize = category_breakdown(companies).iter().map(|c| c.count).sum();
        let by_region: usize = region_breakdown(companies).iter().map(|r| r.count).sum();
        assert_eq!(by_category, companies.len());
        assert_eq!(by_region, companies.len());
    }

    #[test]
    fn test_region_breakdown_sorted_with_stable_ties() {
        let companies = vec![
            company("1", CompanyType::Garment, Province::Bali, &[]),
            company("2", CompanyType::Garment, Province::Banten, &[]),
            company("3", CompanyType::Garment, Province::EastJava, &[]),
            company("4", CompanyType::Garment, Province::EastJava, &[]),
            company("5", CompanyType::Garment, Province::WestJava, &[]),
        ];

        let order: Vec<Province> = region_breakdown(&companies)
            .into_iter()
            .map(|r| r.province)
            .collect();
        assert_eq!(
            order,
            vec![Province::EastJava, Province::WestJava, Province::Banten, Province::Bali]
        );

        let regions = region_breakdown(members());
        assert!(regions.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_empty_categories_are_excluded() {
        let companies = vec![company("1", CompanyType::Spinning, Province::Bali, &[])];
        let categories = category_breakdown(&companies);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].category, CompanyType::Spinning);
        assert!(category_breakdown(&[]).is_empty());
        assert!(region_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_compliance_counts_each_company_once() {
        let companies = vec![company(
            "1",
            CompanyType::Textile,
            Province::Banten,
            &["ISO 9001:2008", "ISO 9001:2015", "OEKO-TEX Standard 100"],
        )];
        let stats = compliance_stats(&companies);
        assert_eq!(stats.iso_9001, 1);
        assert_eq!(stats.oeko_tex, 1);
        assert_eq!(stats.sni_wajib, 0);
    }

    #[test]
    fn test_compliance_matching_is_case_sensitive() {
        let companies = vec![company(
            "1",
            CompanyType::Textile,
            Province::Banten,
            &["iso 9001", "Oeko-Tex", "sni wajib", "SNI Sukarela Kain"],
        )];
        let stats = compliance_stats(&companies);
        assert_eq!(
            stats,
            ComplianceStats { iso_9001: 0, sni_wajib: 0, sni_sukarela: 1, oeko_tex: 0 }
        );
    }

    #[test]
    fn test_compliance_is_monotonic_under_union() {
        let mut companies: Vec<Company> = members().to_vec();
        let before = compliance_stats(&companies);

        companies.push(company(
            "extra",
            CompanyType::Garment,
            Province::Bali,
            &["ISO 9001:2015", "ISO 9001:2015", "SNI Wajib"],
        ));
        let after = compliance_stats(&companies);

        assert_eq!(after.iso_9001, before.iso_9001 + 1);
        assert_eq!(after.sni_wajib, before.sni_wajib + 1);
        assert_eq!(after.sni_sukarela, before.sni_sukarela);
        assert_eq!(after.oeko_tex, before.oeko_tex);
    }

    #[test]
    fn test_dashboard_summary_totals() {
        let companies = vec![
            company("1", CompanyType::Garment, Province::Bali, &[]),
            company("2", CompanyType::Textile, Province::Bali, &[]),
        ];
        let summary = dashboard_summary(&companies);
        assert_eq!(summary.total_companies, 2);
        assert_eq!(summary.total_employees, 200);
        assert_eq!(summary.regions.len(), 1);
    }
}
