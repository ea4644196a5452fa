#[cfg(test)]
mod tests {
    use campus::libs::error::CampusError;
    use campus::libs::filter::{Criteria, Selector};
    use campus::libs::workflow::{LeaveStatus, Status, WorkflowError};
    use campus::store::leaves::{LeaveRequests, LeaveTab, NewLeave};
    use campus::store::{seed, Transition};
    use chrono::NaiveDate;

    fn department() -> LeaveRequests {
        LeaveRequests::seeded(seed::department_leave_requests())
    }

    #[test]
    fn test_medical_leave_from_application_to_approval() {
        let mut leaves = LeaveRequests::seeded(Vec::new());
        let form = NewLeave {
            leave_type: "Medical".into(),
            from_date: NaiveDate::from_ymd_opt(2025, 4, 24),
            to_date: NaiveDate::from_ymd_opt(2025, 4, 28),
            reason: "x".into(),
            ..Default::default()
        };
        let request = leaves.apply(form).unwrap();
        assert_eq!(request.status.label(), "Pending");
        assert_eq!(request.days(), 5);
        let id = request.id.clone();

        leaves.approve(&id);
        assert!(leaves.pending().is_empty());
        let history = leaves.tab(LeaveTab::History);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, id);
        assert_eq!(history[0].status.label(), "Approved");
    }

    #[test]
    fn test_reversed_date_range_is_rejected() {
        let mut leaves = LeaveRequests::seeded(Vec::new());
        let form = NewLeave {
            leave_type: "Medical".into(),
            from_date: NaiveDate::from_ymd_opt(2025, 4, 28),
            to_date: NaiveDate::from_ymd_opt(2025, 4, 24),
            reason: "x".into(),
            ..Default::default()
        };
        let err = leaves.apply(form).unwrap_err();
        assert!(matches!(err, CampusError::InvalidField { field: "to date", .. }));
        assert!(leaves.all().is_empty());
    }

    #[test]
    fn test_single_day_leave_is_accepted() {
        let mut leaves = LeaveRequests::seeded(Vec::new());
        let day = NaiveDate::from_ymd_opt(2025, 4, 24);
        let form = NewLeave {
            leave_type: "Personal".into(),
            from_date: day,
            to_date: day,
            reason: "Family event".into(),
            ..Default::default()
        };
        assert_eq!(leaves.apply(form).unwrap().days(), 1);
    }

    #[test]
    fn test_approve_moves_request_to_history() {
        let mut leaves = department();
        assert_eq!(leaves.pending().len(), 3);

        let approved = leaves.approve("1").applied().unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.applicant, "Sarah Johnson");

        assert_eq!(leaves.pending().len(), 2);
        assert!(leaves.tab(LeaveTab::History).iter().any(|request| request.id == "1"));
    }

    #[test]
    fn test_reject_keeps_comment() {
        let mut leaves = department();
        leaves.reject("2", Some("Department is short-staffed that week".into()));
        let request = leaves.get("2").unwrap();
        assert_eq!(request.status, LeaveStatus::Rejected);
        assert_eq!(request.comment.as_deref(), Some("Department is short-staffed that week"));
    }

    #[test]
    fn test_decided_requests_are_final() {
        let mut leaves = department();
        leaves.approve("3");
        let before = leaves.all().to_vec();

        let outcome = leaves.reject("3", None);
        assert_eq!(outcome, Transition::Refused(WorkflowError::Terminal { state: "approved" }));
        assert_eq!(leaves.all(), before.as_slice());
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut leaves = department();
        let before = leaves.all().to_vec();
        assert_eq!(leaves.approve("404"), Transition::NotFound);
        assert_eq!(leaves.all(), before.as_slice());
    }

    #[test]
    fn test_application_lands_first_as_pending() {
        let mut leaves = department();
        let form = NewLeave {
            applicant: "student@demo.com".into(),
            department: seed::DEPARTMENT.into(),
            leave_type: "Academic".into(),
            from_date: NaiveDate::from_ymd_opt(2025, 5, 5),
            to_date: NaiveDate::from_ymd_opt(2025, 5, 7),
            reason: "Programming contest".into(),
            attachment: Some("invitation.pdf".into()),
        };
        let id = leaves.apply(form).unwrap().id.clone();

        assert_eq!(id, "6");
        let first = &leaves.all()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.status, LeaveStatus::Pending);
        assert!(first.has_attachment);
        assert_eq!(leaves.pending().len(), 4);
    }

    #[test]
    fn test_status_filter_and_search_combine() {
        let leaves = department();
        let criteria = Criteria {
            status: "pending".parse::<Selector>().unwrap(),
            search: "MEDICAL".into(),
            ..Default::default()
        };
        let hits = leaves.find(&criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].applicant, "Michael Chen");

        let everything = leaves.find(&Criteria::default());
        assert_eq!(everything.len(), leaves.all().len());
    }
}
