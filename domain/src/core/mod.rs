//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — reasons a search attempt is rejected

pub mod error;
