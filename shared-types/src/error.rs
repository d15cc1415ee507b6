/// Errors raised when parsing user-supplied enumeration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown company type: {0}")]
    UnknownCompanyType(String),

    #[error("unknown province: {0}")]
    UnknownProvince(String),

    #[error("unknown language: {0} (expected 'id' or 'en')")]
    UnknownLanguage(String),
}
