//! The portal's protected routes and the roles each one admits.

use internhub_entity::account::Role;

/// A role-scoped area of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectedArea {
    /// `/student/dashboard`
    StudentDashboard,
    /// `/student/internships`
    StudentInternships,
    /// `/mentor/dashboard`
    MentorDashboard,
    /// `/mentor/post-internship`
    MentorPostInternship,
    /// `/admin/dashboard`
    AdminDashboard,
    /// `/admin/post-internship`
    AdminPostInternship,
}

impl ProtectedArea {
    /// Every protected area.
    pub const ALL: [ProtectedArea; 6] = [
        ProtectedArea::StudentDashboard,
        ProtectedArea::StudentInternships,
        ProtectedArea::MentorDashboard,
        ProtectedArea::MentorPostInternship,
        ProtectedArea::AdminDashboard,
        ProtectedArea::AdminPostInternship,
    ];

    /// Route path of the area.
    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "/student/dashboard",
            Self::StudentInternships => "/student/internships",
            Self::MentorDashboard => "/mentor/dashboard",
            Self::MentorPostInternship => "/mentor/post-internship",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminPostInternship => "/admin/post-internship",
        }
    }

    /// Roles admitted to the area.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Self::StudentDashboard | Self::StudentInternships => &[Role::Student],
            Self::MentorDashboard | Self::MentorPostInternship => &[Role::Mentor],
            Self::AdminDashboard | Self::AdminPostInternship => &[Role::Admin],
        }
    }

    /// Looks up the area served at `path`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.path() == path)
    }

    /// The internship posting area of `role`, if that role may post.
    pub fn posting_area(role: Role) -> Option<Self> {
        match role {
            Role::Student => None,
            Role::Mentor => Some(Self::MentorPostInternship),
            Role::Admin => Some(Self::AdminPostInternship),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        for area in ProtectedArea::ALL {
            assert_eq!(ProtectedArea::from_path(area.path()), Some(area));
        }
        assert_eq!(ProtectedArea::from_path("/student/settings"), None);
    }

    #[test]
    fn test_each_area_admits_its_own_role() {
        for area in ProtectedArea::ALL {
            let role: Role = area.path().split('/').nth(1).unwrap().parse().unwrap();
            assert_eq!(area.required_roles(), &[role]);
        }
    }

    #[test]
    fn test_students_cannot_post() {
        assert_eq!(ProtectedArea::posting_area(Role::Student), None);
        assert_eq!(
            ProtectedArea::posting_area(Role::Admin),
            Some(ProtectedArea::AdminPostInternship)
        );
    }
}
