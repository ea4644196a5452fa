//! One signed-in user's view of the campus.
//!
//! A session owns its own repositories; nothing is shared between
//! sessions and nothing outlives one.

use crate::libs::attendance::{CourseAttendance, DailyAttendance};
use crate::libs::config::{AttendanceConfig, Config};
use crate::libs::role::Role;
use crate::libs::routine::Routine;
use crate::store::exams::Exams;
use crate::store::feedback::{Course, Feedbacks};
use crate::store::leaves::LeaveRequests;
use crate::store::materials::Materials;
use crate::store::notices::Notices;
use crate::store::seed;

pub struct Session {
    pub role: Role,
    /// Shown as applicant / uploader on records this user creates.
    pub user: String,
    pub thresholds: AttendanceConfig,
    pub leaves: LeaveRequests,
    pub notices: Notices,
    pub materials: Materials,
    pub exams: Exams,
    pub feedbacks: Feedbacks,
    pub courses: Vec<Course>,
    pub attendance: Vec<CourseAttendance>,
    pub daily_attendance: Vec<DailyAttendance>,
    pub routine: Routine,
}

impl Session {
    /// Builds a session for `role`, seeded with that role's sample records
    /// unless the config turns sample data off.
    pub fn new(role: Role, config: &Config) -> Self {
        let user = config
            .accounts()
            .into_iter()
            .find(|account| account.role == role)
            .map(|account| account.email)
            .unwrap_or_else(|| role.label().to_string());

        if config.seed_sample_data() {
            Self::seeded(role, user, config.attendance())
        } else {
            Self::empty(role, user, config.attendance())
        }
    }

    fn seeded(role: Role, user: String, thresholds: AttendanceConfig) -> Self {
        let leaves = match role {
            Role::Hod => seed::department_leave_requests(),
            Role::Student => seed::student_leave_history(&user),
            Role::Admin | Role::Teacher => Vec::new(),
        };
        let (materials, exams) = match role {
            Role::Teacher => (seed::teacher_materials(), seed::teacher_exams()),
            Role::Student => (seed::student_materials(), seed::student_exams()),
            Role::Admin | Role::Hod => (Vec::new(), Vec::new()),
        };
        let feedback = match role {
            Role::Student => seed::feedback_history(),
            _ => Vec::new(),
        };

        tracing::debug!(%role, "session seeded with sample data");
        Session {
            role,
            user,
            thresholds,
            leaves: LeaveRequests::seeded(leaves),
            notices: Notices::seeded(seed::notices()),
            materials: Materials::seeded(materials),
            exams: Exams::seeded(exams),
            feedbacks: Feedbacks::seeded(feedback),
            courses: seed::courses(),
            attendance: seed::course_attendance(),
            daily_attendance: seed::daily_attendance(),
            routine: seed::routine(),
        }
    }

    fn empty(role: Role, user: String, thresholds: AttendanceConfig) -> Self {
        Session {
            role,
            user,
            thresholds,
            leaves: LeaveRequests::seeded(Vec::new()),
            notices: Notices::seeded(Vec::new()),
            materials: Materials::seeded(Vec::new()),
            exams: Exams::seeded(Vec::new()),
            feedbacks: Feedbacks::seeded(Vec::new()),
            courses: seed::courses(),
            attendance: Vec::new(),
            daily_attendance: Vec::new(),
            routine: Routine {
                current: Vec::new(),
                next: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::SessionConfig;

    #[test]
    fn hod_sees_department_requests() {
        let session = Session::new(Role::Hod, &Config::default());
        assert_eq!(session.leaves.pending().len(), 3);
        assert_eq!(session.user, "hod@demo.com");
        assert!(session.materials.all().is_empty());
    }

    #[test]
    fn sample_data_can_be_turned_off() {
        let config = Config {
            session: Some(SessionConfig { seed_sample_data: false }),
            ..Default::default()
        };
        let session = Session::new(Role::Teacher, &config);
        assert!(session.exams.all().is_empty());
        assert!(session.notices.all().is_empty());
        assert_eq!(session.courses.len(), 5);
    }
}
