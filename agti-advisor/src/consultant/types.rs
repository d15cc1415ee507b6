use serde::{Deserialize, Serialize};
use shared_types::{Company, CompanyType};

/// The slice of a member record the consultant is allowed to see
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberContext {
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    pub location: String,
    pub specialization: String,
    pub capacity: String,
    pub certificates: String,
    pub markets: String,
    pub phone: String,
    pub email: String,
}

impl From<&Company> for MemberContext {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            company_type: company.company_type,
            location: company.location(),
            specialization: company.specialization.clone(),
            capacity: company.capacity.clone(),
            certificates: company.certifications.join(", "),
            markets: company.export_markets.join(", "),
            phone: company.phone.clone(),
            email: company.contact_email.clone(),
        }
    }
}

/// Outcome of a consultation as seen by the application, not the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceStatus {
    /// The model produced text
    Answered,
    /// The call succeeded but returned no text
    Empty,
    /// The call failed; the error was logged
    Failed,
    /// Blank query, nothing was sent
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub status: AdviceStatus,
    /// What the user sees: model output or a localized fallback
    pub text: String,
}
