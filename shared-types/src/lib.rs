pub mod chat;
pub mod company;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod language;
pub mod settings;

pub use chat::{ChatMessage, ChatRole};
pub use company::{CompaniesResponse, Company, CompanyType, Province};
pub use dashboard::{CategoryCount, ChartDatum, ComplianceStats, DashboardSummary, RegionCount};
pub use error::ParseError;
pub use filter::{FilterState, Selection};
pub use language::Language;
pub use settings::{ApiKeyConfig, SettingsResponse};
