//! Browsable internship catalog with search and filters.

use serde::{Deserialize, Serialize};
use tracing::info;

use internhub_core::error::AppError;
use internhub_core::types::InternshipId;
use internhub_entity::internship::{Internship, InternshipKind};
use internhub_entity::session::Session;

/// Duration choices offered by the listing filters.
pub const DURATIONS: [&str; 3] = ["3 months", "4 months", "6 months"];

/// Catalog search parameters. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternshipFilter {
    /// Case-insensitive substring of title, company or description.
    #[serde(default)]
    pub query: String,
    /// Exact company name.
    pub company: Option<String>,
    /// Case-insensitive substring of the title, e.g. `analyst`.
    pub role_keyword: Option<String>,
    /// Exact duration, e.g. `6 months`.
    pub duration: Option<String>,
}

impl InternshipFilter {
    /// Free-text filter.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Whether `internship` satisfies every set criterion.
    pub fn matches(&self, internship: &Internship) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = internship.title.to_lowercase().contains(&query)
            || internship.company.to_lowercase().contains(&query)
            || internship.description.to_lowercase().contains(&query);

        let matches_company = self
            .company
            .as_deref()
            .is_none_or(|company| internship.company == company);

        let matches_role = self.role_keyword.as_deref().is_none_or(|keyword| {
            internship
                .title
                .to_lowercase()
                .contains(&keyword.to_lowercase())
        });

        let matches_duration = self
            .duration
            .as_deref()
            .is_none_or(|duration| internship.duration == duration);

        matches_query && matches_company && matches_role && matches_duration
    }
}

/// The fixed set of open internships shown to students.
#[derive(Debug, Clone)]
pub struct InternshipCatalog {
    listings: Vec<Internship>,
}

impl Default for InternshipCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InternshipCatalog {
    /// Creates the catalog with the current listings.
    pub fn new() -> Self {
        Self {
            listings: default_listings(),
        }
    }

    /// Every listing, in catalog order.
    pub fn all(&self) -> &[Internship] {
        &self.listings
    }

    /// Listings matching `filter`, in catalog order.
    pub fn search(&self, filter: &InternshipFilter) -> Vec<Internship> {
        self.listings
            .iter()
            .filter(|internship| filter.matches(internship))
            .cloned()
            .collect()
    }

    /// Distinct companies, in order of first appearance.
    pub fn companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = Vec::new();
        for internship in &self.listings {
            if !companies.contains(&internship.company) {
                companies.push(internship.company.clone());
            }
        }
        companies
    }

    /// Duration filter choices.
    pub fn durations(&self) -> &'static [&'static str] {
        &DURATIONS
    }

    /// Looks up a listing by id.
    pub fn find(&self, id: &InternshipId) -> Option<&Internship> {
        self.listings.iter().find(|internship| &internship.id == id)
    }

    /// Records an application by `applicant` and returns the listing.
    pub fn apply(&self, applicant: &Session, id: &InternshipId) -> Result<Internship, AppError> {
        let internship = self
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("Internship '{id}' not found")))?;

        info!(
            account_id = %applicant.id,
            internship_id = %internship.id,
            title = %internship.title,
            "Application submitted"
        );
        Ok(internship.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    duration: &str,
    stipend: &str,
    deadline: &str,
    description: &str,
    requirements: [&str; 4],
    kind: InternshipKind,
    posted_date: &str,
) -> Internship {
    Internship {
        id: InternshipId::new(id),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
        deadline: deadline.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        kind,
        posted_date: posted_date.to_string(),
    }
}

fn default_listings() -> Vec<Internship> {
    vec![
        listing(
            "1",
            "Product Manager Intern",
            "TechCorp",
            "San Francisco, CA",
            "3 months",
            "$2000/month",
            "2025-12-31",
            "Join our product team to work on cutting-edge consumer applications. You will \
             collaborate with engineers, designers, and stakeholders to define product strategy \
             and roadmap.",
            [
                "Strong analytical skills",
                "Basic understanding of product lifecycle",
                "Excellent communication",
                "Knowledge of Agile methodologies",
            ],
            InternshipKind::FullTime,
            "2025-11-01",
        ),
        listing(
            "2",
            "Associate Product Manager",
            "StartupXYZ",
            "Remote",
            "6 months",
            "$1500/month",
            "2025-12-15",
            "Work directly with our founders to shape product vision. This role offers hands-on \
             experience in a fast-paced startup environment with real impact on business outcomes.",
            [
                "Problem-solving mindset",
                "User empathy",
                "Data-driven thinking",
                "Wireframing skills (Figma/Sketch)",
            ],
            InternshipKind::Remote,
            "2025-11-05",
        ),
        listing(
            "3",
            "Product Analyst Intern",
            "BigTech Inc",
            "New York, NY",
            "4 months",
            "$2500/month",
            "2025-12-20",
            "Analyze user data and market trends to inform product decisions. Support the product \
             team with metrics, dashboards, and actionable insights.",
            [
                "SQL proficiency",
                "Excel/Google Sheets expert",
                "Statistical analysis",
                "Python/R knowledge is a plus",
            ],
            InternshipKind::FullTime,
            "2025-11-08",
        ),
        listing(
            "4",
            "Product Strategy Fellow",
            "ConsultCo",
            "Boston, MA",
            "3 months",
            "$3000/month",
            "2025-12-25",
            "Develop strategic recommendations for Fortune 500 clients. Learn product strategy \
             frameworks and present insights to senior leadership.",
            [
                "MBA or equivalent experience",
                "Strategic thinking",
                "Presentation skills",
                "Business acumen",
            ],
            InternshipKind::FullTime,
            "2025-11-10",
        ),
        listing(
            "5",
            "Junior Product Manager",
            "FinanceApp",
            "Chicago, IL",
            "6 months",
            "$2200/month",
            "2026-01-05",
            "Help build the next generation of financial products for millennials. Work on mobile \
             app features and payment integrations.",
            [
                "Mobile app experience",
                "Financial tech interest",
                "User research skills",
                "Competitive analysis",
            ],
            InternshipKind::Hybrid,
            "2025-11-12",
        ),
        listing(
            "6",
            "Product Operations Intern",
            "CloudSolutions",
            "Seattle, WA",
            "4 months",
            "$1800/month",
            "2025-12-28",
            "Streamline product development processes and improve team efficiency. Create \
             documentation and manage product launches.",
            [
                "Project management",
                "Process optimization",
                "Technical writing",
                "Stakeholder management",
            ],
            InternshipKind::FullTime,
            "2025-11-13",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use internhub_core::types::AccountId;
    use internhub_entity::account::Role;

    fn ids(results: &[Internship]) -> Vec<&str> {
        results.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let catalog = InternshipCatalog::new();
        let results = catalog.search(&InternshipFilter::default());
        assert_eq!(ids(&results), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let catalog = InternshipCatalog::new();
        assert_eq!(ids(&catalog.search(&InternshipFilter::query("STARTUPxyz"))), ["2"]);
        assert_eq!(ids(&catalog.search(&InternshipFilter::query("fortune 500"))), ["4"]);
        assert!(catalog.search(&InternshipFilter::query("blockchain")).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let catalog = InternshipCatalog::new();
        let filter = InternshipFilter {
            query: "product".to_string(),
            role_keyword: Some("Intern".to_string()),
            duration: Some("4 months".to_string()),
            ..InternshipFilter::default()
        };
        assert_eq!(ids(&catalog.search(&filter)), ["3", "6"]);

        let filter = InternshipFilter {
            company: Some("CloudSolutions".to_string()),
            duration: Some("3 months".to_string()),
            ..InternshipFilter::default()
        };
        assert!(catalog.search(&filter).is_empty());
    }

    #[test]
    fn test_company_is_exact() {
        let catalog = InternshipCatalog::new();
        let filter = InternshipFilter {
            company: Some("techcorp".to_string()),
            ..InternshipFilter::default()
        };
        assert!(catalog.search(&filter).is_empty());
    }

    #[test]
    fn test_filter_choices() {
        let catalog = InternshipCatalog::new();
        assert_eq!(catalog.companies().len(), 6);
        assert_eq!(catalog.companies()[0], "TechCorp");
        assert_eq!(catalog.durations(), &["3 months", "4 months", "6 months"]);
    }

    #[test]
    fn test_apply() {
        let catalog = InternshipCatalog::new();
        let student = Session {
            id: AccountId::new("1"),
            email: "student@test.com".to_string(),
            display_name: "John Doe".to_string(),
            role: Role::Student,
        };

        let applied = catalog.apply(&student, &InternshipId::new("5")).unwrap();
        assert_eq!(applied.company, "FinanceApp");

        let missing = catalog.apply(&student, &InternshipId::new("99"));
        assert_eq!(missing.unwrap_err().kind, internhub_core::error::ErrorKind::NotFound);
    }
}
