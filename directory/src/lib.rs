//! Directory Crate
//!
//! The AGTI member registry and the pure computations over it: directory
//! filtering and the aggregates behind the executive dashboard. Nothing in
//! this crate performs I/O or suspends.
//!
//! # Example
//!
//! ```rust
//! use directory::{dashboard_summary, filter_companies, members};
//! use shared_types::FilterState;
//!
//! let all = filter_companies(members(), &FilterState::default());
//! assert_eq!(all.len(), members().len());
//!
//! let summary = dashboard_summary(members());
//! assert_eq!(summary.total_companies, members().len());
//! ```

pub mod aggregate;
pub mod contact;
pub mod dataset;
pub mod filter;

pub use aggregate::{
    category_breakdown, compliance_stats, count_with_certification, dashboard_summary,
    region_breakdown, total_employees,
};
pub use contact::{display_phone, mailto_link, whatsapp_link};
pub use dataset::members;
pub use filter::{filter_companies, find_by_id, FilterCache};
