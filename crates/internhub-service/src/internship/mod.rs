//! Internship listing and posting.

pub mod catalog;
pub mod posting;

pub use catalog::{InternshipCatalog, InternshipFilter};
pub use posting::{InternshipDraft, InternshipPosting};
