//! Internship listing entities.

pub mod model;
pub mod recent;

pub use model::{Internship, InternshipKind};
pub use recent::RecentInternship;
