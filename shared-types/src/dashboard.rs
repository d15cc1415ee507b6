use serde::{Deserialize, Serialize};

use crate::company::{CompanyType, Province};

/// Label/count pair ready for a bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub count: usize,
}

/// Number of companies in one industry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: CompanyType,
    pub count: usize,
}

impl CategoryCount {
    pub fn datum(&self) -> ChartDatum {
        ChartDatum {
            label: self.category.short_label().to_string(),
            count: self.count,
        }
    }
}

/// Number of companies in one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub province: Province,
    pub count: usize,
}

impl RegionCount {
    pub fn datum(&self) -> ChartDatum {
        ChartDatum {
            label: self.province.label().to_string(),
            count: self.count,
        }
    }
}

/// Companies holding at least one certificate of each tracked kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceStats {
    pub iso_9001: usize,
    pub sni_wajib: usize,
    pub sni_sukarela: usize,
    pub oeko_tex: usize,
}

/// Everything the executive dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_companies: usize,
    pub total_employees: u64,
    pub categories: Vec<CategoryCount>,
    pub regions: Vec<RegionCount>,
    pub compliance: ComplianceStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_datum_uses_short_label() {
        let datum = CategoryCount {
            category: CompanyType::Accessories,
            count: 3,
        }
        .datum();
        assert_eq!(datum.label, "Accessories");
        assert_eq!(datum.count, 3);
    }

    #[test]
    fn test_region_datum_uses_display_name() {
        let datum = RegionCount {
            province: Province::EastJava,
            count: 2,
        }
        .datum();
        assert_eq!(datum.label, "Jawa Timur");
    }
}
