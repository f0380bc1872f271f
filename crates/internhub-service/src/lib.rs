//! # internhub-service
//!
//! Portal use cases built on top of the credential authority: browsing the
//! internship catalog and posting new internships.
//!
//! Services follow constructor injection; storage and configuration are
//! handed in at construction time.

pub mod internship;

pub use internship::{InternshipCatalog, InternshipDraft, InternshipFilter, InternshipPosting};
