#[cfg(test)]
mod tests {
    use campus::libs::error::CampusError;
    use campus::libs::filter::Criteria;
    use campus::libs::workflow::FeedbackStatus;
    use campus::store::feedback::{Feedbacks, NewFeedback};
    use campus::store::seed;

    fn form(course_id: &str, rating: u8, comment: &str) -> NewFeedback {
        NewFeedback {
            course_id: course_id.into(),
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn test_submit_and_respond() {
        let courses = seed::courses();
        let mut feedbacks = Feedbacks::seeded(seed::feedback_history());
        let id = feedbacks
            .submit(form("1", 5, "Great labs"), &courses)
            .unwrap()
            .id
            .clone();

        let reviewed = feedbacks.respond(&id, "Thanks, more labs next term").applied().unwrap();
        assert_eq!(reviewed.status, FeedbackStatus::Reviewed);
        assert_eq!(reviewed.response.as_deref(), Some("Thanks, more labs next term"));
        assert!(!feedbacks.respond(&id, "again").is_applied());
    }

    #[test]
    fn test_rating_out_of_range() {
        let courses = seed::courses();
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let err = feedbacks.submit(form("2", 6, "Too good"), &courses).unwrap_err();
        assert!(matches!(err, CampusError::InvalidField { field: "rating", .. }));
        assert!(feedbacks.all().is_empty());
    }

    #[test]
    fn test_unknown_course() {
        let courses = seed::courses();
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let err = feedbacks.submit(form("42", 3, "Where am I"), &courses).unwrap_err();
        assert_eq!(err, CampusError::unknown("course", "42"));
    }

    #[test]
    fn test_search_and_average() {
        let feedbacks = Feedbacks::seeded(seed::feedback_history());
        assert_eq!(feedbacks.find(&Criteria::search("operating")).len(), 1);
        assert_eq!(feedbacks.average_rating(), Some(4.5));
        assert_eq!(Feedbacks::seeded(Vec::new()).average_rating(), None);
    }
}
