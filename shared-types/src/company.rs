use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Industry category of a member company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "Garment Manufacturer")]
    Garment,
    #[serde(rename = "Textile Mill")]
    Textile,
    #[serde(rename = "Spinning Mill")]
    Spinning,
    #[serde(rename = "Accessories Supplier")]
    Accessories,
}

impl CompanyType {
    /// All categories in declaration order
    pub const ALL: [CompanyType; 4] = [
        CompanyType::Garment,
        CompanyType::Textile,
        CompanyType::Spinning,
        CompanyType::Accessories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyType::Garment => "Garment Manufacturer",
            CompanyType::Textile => "Textile Mill",
            CompanyType::Spinning => "Spinning Mill",
            CompanyType::Accessories => "Accessories Supplier",
        }
    }

    /// Shortened label used for chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            CompanyType::Garment => "Garment",
            CompanyType::Textile => "Textile",
            CompanyType::Spinning => "Spinning",
            CompanyType::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompanyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        CompanyType::ALL
            .into_iter()
            .find(|t| normalize(t.label()) == key || normalize(t.short_label()) == key)
            .ok_or_else(|| ParseError::UnknownCompanyType(s.to_string()))
    }
}

/// Region a member company is registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Jawa Barat")]
    WestJava,
    #[serde(rename = "Jawa Tengah")]
    CentralJava,
    #[serde(rename = "Jawa Timur")]
    EastJava,
    #[serde(rename = "Banten")]
    Banten,
    #[serde(rename = "DKI Jakarta")]
    Dki,
    #[serde(rename = "Bali")]
    Bali,
}

impl Province {
    /// All regions in declaration order
    pub const ALL: [Province; 6] = [
        Province::WestJava,
        Province::CentralJava,
        Province::EastJava,
        Province::Banten,
        Province::Dki,
        Province::Bali,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Province::WestJava => "Jawa Barat",
            Province::CentralJava => "Jawa Tengah",
            Province::EastJava => "Jawa Timur",
            Province::Banten => "Banten",
            Province::Dki => "DKI Jakarta",
            Province::Bali => "Bali",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Province::WestJava => &["west-java"],
            Province::CentralJava => &["central-java"],
            Province::EastJava => &["east-java"],
            Province::Banten => &[],
            Province::Dki => &["dki", "jakarta"],
            Province::Bali => &[],
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Province {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Province::ALL
            .into_iter()
            .find(|p| normalize(p.label()) == key || p.aliases().contains(&key.as_str()))
            .ok_or_else(|| ParseError::UnknownProvince(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', ' '], "-")
}

/// Member company record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    pub province: Province,
    pub city: String,
    /// Free-text production rate, e.g. "500,000 pcs/month"
    pub capacity: String,
    pub employees: u32,
    pub certifications: Vec<String>,
    pub export_markets: Vec<String>,
    pub specialization: String,
    pub description: String,
    pub contact_email: String,
    /// Digits only, WhatsApp enabled
    pub phone: String,
    pub verified: bool,
}

impl Company {
    /// "City, Province"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.province)
    }

    pub fn has_certification_containing(&self, needle: &str) -> bool {
        self.certifications.iter().any(|cert| cert.contains(needle))
    }
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
    pub total: usize,
}
