//! Per-role dashboard summary cards.

use crate::libs::attendance;
use crate::libs::role::Role;
use crate::libs::session::Session;
use crate::store::exams::ExamTab;
use crate::store::seed;

/// Head counts that come from outside the session's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusFigures {
    pub departments: u32,
    pub department_heads: u32,
    pub teachers: u32,
    pub students: u32,
    pub department_teachers: u32,
    pub department_students: u32,
    pub department_attendance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

fn stat(title: &'static str, value: impl ToString, description: &'static str) -> Stat {
    Stat {
        title,
        value: value.to_string(),
        description,
    }
}

pub fn summary(session: &Session) -> Vec<Stat> {
    let figures = seed::campus_figures();
    let pinned = session.notices.pinned().len();

    match session.role {
        Role::Admin => vec![
            stat("Total Departments", figures.departments, "Active academic departments"),
            stat("Department Heads", figures.department_heads, "Verified department heads"),
            stat("Teachers", figures.teachers, "Across all departments"),
            stat("Students", figures.students, "Currently enrolled"),
            stat("Pinned Notices", pinned, "Visible on every board"),
        ],
        Role::Hod => vec![
            stat("Teachers", figures.department_teachers, "In your department"),
            stat("Students", figures.department_students, "In your department"),
            stat("Attendance", format!("{}%", figures.department_attendance), "Department average"),
            stat("Leave Requests", session.leaves.pending().len(), "Pending approval"),
            stat("Pinned Notices", pinned, "Visible on every board"),
        ],
        Role::Teacher => {
            let downloads: u32 = session.materials.all().iter().map(|m| m.download_count).sum();
            vec![
                stat("Study Materials", session.materials.all().len(), "Uploaded by you"),
                stat("Downloads", downloads, "Across all materials"),
                stat("Scheduled Exams", session.exams.tab(ExamTab::Scheduled, "").len(), "Not yet started"),
                stat("In Progress", session.exams.tab(ExamTab::InProgress, "").len(), "Exams running now"),
                stat("Pinned Notices", pinned, "Visible on every board"),
            ]
        }
        Role::Student => {
            let attendance = attendance::summary(&session.attendance, &session.thresholds);
            vec![
                stat("Attendance", format!("{}%", attendance.percentage), "Overall this semester"),
                stat("Upcoming Exams", session.exams.tab(ExamTab::Upcoming, "").len(), "Scheduled or in progress"),
                stat("Study Materials", session.materials.all().len(), "Available to download"),
                stat("Pending Leave", session.leaves.pending().len(), "Awaiting approval"),
                stat("Pinned Notices", pinned, "Visible on every board"),
            ]
        }
    }
}
