//! Dashboard roles and the navigation surface each one sees.
//!
//! A role only selects which views and actions are offered; it is never an
//! access-control mechanism.

use crate::libs::error::CampusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hod,
    Teacher,
    Student,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: String,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hod, Role::Teacher, Role::Student];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hod => "hod",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Hod => "Head of Department",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    pub fn can_post_notice(self) -> bool {
        matches!(self, Role::Admin | Role::Hod)
    }

    /// Sidebar entries, in display order.
    pub fn nav_items(self) -> Vec<NavItem> {
        let base = format!("/{}", self.as_str());
        let extra: &[(&'static str, &'static str)] = match self {
            Role::Admin => &[("Department Heads", "hods"), ("Statistics", "statistics")],
            Role::Hod => &[
                ("Teachers", "teachers"),
                ("Students", "students"),
                ("Routine", "routine"),
                ("Leave Approval", "leave"),
            ],
            Role::Teacher => &[
                ("Attendance", "attendance"),
                ("Study Materials", "materials"),
                ("Exams", "exams"),
                ("Feedback", "feedback"),
                ("Leave", "leave"),
            ],
            Role::Student => &[
                ("Attendance", "attendance"),
                ("Study Materials", "materials"),
                ("Routine", "routine"),
                ("Exams", "exams"),
                ("Leave", "leave"),
                ("Feedback", "feedback"),
            ],
        };

        let mut items = vec![
            NavItem {
                title: "Dashboard",
                href: base.clone(),
            },
            NavItem {
                title: "Notice Board",
                href: format!("{}/notices", base),
            },
        ];
        items.extend(extra.iter().map(|&(title, path)| NavItem {
            title,
            href: format!("{}/{}", base, path),
        }));
        items
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == needle)
            .ok_or_else(|| CampusError::unknown("role", s))
    }
}

/// A view reachable from the navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard(Role),
    Notices(Role),
    LeaveApproval,
    StudentLeave,
    StudentExams,
    StudentAttendance,
    StudentRoutine,
    StudentFeedback,
    StudentMaterials,
    TeacherMaterials,
    TeacherExams,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.trim().trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

        let (role, rest) = match segments.split_first() {
            None => return Route::Login,
            Some((first, rest)) => match first.parse::<Role>() {
                Ok(role) => (role, rest),
                Err(_) => return Route::NotFound,
            },
        };

        match (role, rest) {
            (_, []) => Route::Dashboard(role),
            (_, ["notices"]) => Route::Notices(role),
            (Role::Hod, ["leave"]) => Route::LeaveApproval,
            (Role::Student, ["leave"]) => Route::StudentLeave,
            (Role::Student, ["exams"]) => Route::StudentExams,
            (Role::Student, ["attendance"]) => Route::StudentAttendance,
            (Role::Student, ["routine"]) => Route::StudentRoutine,
            (Role::Student, ["feedback"]) => Route::StudentFeedback,
            (Role::Student, ["materials"]) => Route::StudentMaterials,
            (Role::Teacher, ["materials"]) => Route::TeacherMaterials,
            (Role::Teacher, ["exams"]) => Route::TeacherExams,
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_role_view() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/teacher"), Route::Dashboard(Role::Teacher));
        assert_eq!(Route::parse("/admin/notices"), Route::Notices(Role::Admin));
        assert_eq!(Route::parse("/hod/leave"), Route::LeaveApproval);
        assert_eq!(Route::parse("/student/leave"), Route::StudentLeave);
        assert_eq!(Route::parse("/teacher/exams"), Route::TeacherExams);
        assert_eq!(Route::parse("/student/routine/"), Route::StudentRoutine);
    }

    #[test]
    fn views_are_scoped_to_their_role() {
        assert_eq!(Route::parse("/teacher/leave"), Route::NotFound);
        assert_eq!(Route::parse("/student/statistics"), Route::NotFound);
        assert_eq!(Route::parse("/guest"), Route::NotFound);
    }

    #[test]
    fn sidebar_starts_with_dashboard_and_notices() {
        for role in Role::ALL {
            let items = role.nav_items();
            assert_eq!(Route::parse(&items[0].href), Route::Dashboard(role));
            assert_eq!(Route::parse(&items[1].href), Route::Notices(role));
        }
        assert_eq!(Role::Student.nav_items().len(), 8);
    }

    #[test]
    fn only_admin_and_hod_post_notices() {
        assert!(Role::Admin.can_post_notice());
        assert!(Role::Hod.can_post_notice());
        assert!(!Role::Teacher.can_post_notice());
        assert!(!Role::Student.can_post_notice());
    }
}
