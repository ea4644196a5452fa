#[cfg(test)]
mod tests {
    use campus::libs::config::{Config, SessionConfig};
    use campus::libs::dashboard;
    use campus::libs::role::{Role, Route};
    use campus::libs::routine::Week;
    use campus::libs::session::Session;
    use chrono::Weekday;

    fn seeded(role: Role) -> Session {
        Session::new(role, &Config::default())
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut first = seeded(Role::Hod);
        let second = seeded(Role::Hod);
        first.leaves.approve("1");
        assert_eq!(first.leaves.pending().len(), 2);
        assert_eq!(second.leaves.pending().len(), 3);
    }

    #[test]
    fn test_seed_follows_role() {
        assert_eq!(seeded(Role::Hod).leaves.all().len(), 5);
        assert!(seeded(Role::Teacher).leaves.all().is_empty());
        assert_eq!(seeded(Role::Teacher).materials.all().len(), 5);
        assert_eq!(seeded(Role::Student).materials.all().len(), 3);
        assert_eq!(seeded(Role::Admin).notices.all().len(), 9);
    }

    #[test]
    fn test_sample_data_can_be_turned_off() {
        let config = Config {
            session: Some(SessionConfig { seed_sample_data: false }),
            ..Default::default()
        };
        let session = Session::new(Role::Student, &config);
        assert!(session.notices.all().is_empty());
        assert!(session.exams.all().is_empty());
        assert!(session.leaves.all().is_empty());
    }

    #[test]
    fn test_user_comes_from_account_table() {
        assert_eq!(seeded(Role::Teacher).user, "teacher@demo.com");
    }

    #[test]
    fn test_every_role_dashboard_has_pinned_card() {
        for role in Role::ALL {
            let stats = dashboard::summary(&seeded(role));
            let pinned = stats.iter().find(|stat| stat.title == "Pinned Notices").unwrap();
            assert_eq!(pinned.value, "3");
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/hod"), Route::Dashboard(Role::Hod));
        assert_eq!(Route::parse("/admin/notices"), Route::Notices(Role::Admin));
        assert_eq!(Route::parse("/hod/leave"), Route::LeaveApproval);
        assert_eq!(Route::parse("/student/leave"), Route::StudentLeave);
        assert_eq!(Route::parse("/teacher/exams/"), Route::TeacherExams);
        assert_eq!(Route::parse("/teacher/attendance"), Route::NotFound);
        assert_eq!(Route::parse("/dean"), Route::NotFound);
    }

    #[test]
    fn test_routine_lists_whole_week() {
        let routine = &seeded(Role::Student).routine;
        assert_eq!(routine.week(Week::Next).len(), 7);
        assert_eq!(routine.classes_on(Week::Current, Weekday::Thu), 2);
        assert_eq!(routine.classes_on(Week::Next, Weekday::Thu), 1);
        assert_eq!(routine.classes_on(Week::Next, Weekday::Sun), 0);
        let friday = routine.day(Week::Next, Weekday::Fri).unwrap();
        assert_eq!(friday.sessions[1].teacher, "Guest Speaker");
    }
}
