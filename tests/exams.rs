#[cfg(test)]
mod tests {
    use campus::libs::error::CampusError;
    use campus::libs::workflow::{ExamStatus, WorkflowError};
    use campus::store::exams::{letter_grade, ExamResult, ExamTab, Exams, NewExam};
    use campus::store::{seed, Transition};
    use chrono::NaiveDate;

    fn teacher() -> Exams {
        Exams::seeded(seed::teacher_exams())
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(letter_grade(100), "A+");
        assert_eq!(letter_grade(90), "A+");
        assert_eq!(letter_grade(89), "A");
        assert_eq!(letter_grade(80), "A");
        assert_eq!(letter_grade(75), "B+");
        assert_eq!(letter_grade(70), "B");
        assert_eq!(letter_grade(65), "C+");
        assert_eq!(letter_grade(60), "C");
        assert_eq!(letter_grade(59), "F");
        assert_eq!(letter_grade(0), "F");
    }

    #[test]
    fn test_result_rounds_percentage() {
        let result = ExamResult::compute(37, 40).unwrap();
        assert_eq!(result.percentage, 93);
        assert_eq!(result.grade, "A+");
        assert!(ExamResult::compute(10, 0).is_err());
    }

    #[test]
    fn test_lifecycle_is_one_step_at_a_time() {
        let mut exams = teacher();
        assert_eq!(
            exams.complete("1"),
            Transition::Refused(WorkflowError::InvalidTransition {
                from: "scheduled",
                to: "completed"
            })
        );
        assert!(exams.start("1").is_applied());
        assert!(exams.complete("1").is_applied());
        let graded = exams.grade("1", 72, 100).unwrap().applied().unwrap();
        assert_eq!(graded.status, ExamStatus::Graded);
        assert_eq!(graded.result.as_ref().map(|r| r.grade.as_str()), Some("B"));

        assert!(matches!(exams.start("1"), Transition::Refused(_)));
    }

    #[test]
    fn test_invalid_marks_leave_exam_untouched() {
        let mut exams = teacher();
        let err = exams.grade("4", 101, 100).unwrap_err();
        assert!(matches!(err, CampusError::InvalidField { field: "marks", .. }));
        assert_eq!(exams.get("4").unwrap().status, ExamStatus::Completed);
    }

    #[test]
    fn test_schedule_validates_in_form_order() {
        let mut exams = teacher();
        let form = NewExam {
            course: "Algorithms".into(),
            title: "Quiz 3".into(),
            ..Default::default()
        };
        assert_eq!(
            exams.schedule(form).unwrap_err(),
            CampusError::Validation(vec!["date", "time", "duration", "location", "type"])
        );

        let form = NewExam {
            course: "Algorithms".into(),
            title: "Quiz 3".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 30),
            time: "10:00 AM".into(),
            duration: "45 minutes".into(),
            location: "Room 103".into(),
            exam_type: "quiz".into(),
            notes: None,
        };
        let exam = exams.schedule(form).unwrap();
        assert_eq!(exam.status, ExamStatus::Scheduled);
        assert_eq!(exams.tab(ExamTab::Scheduled, "").len(), 3);
    }

    #[test]
    fn test_student_tabs_and_average() {
        let exams = Exams::seeded(seed::student_exams());
        assert_eq!(exams.tab(ExamTab::Upcoming, "").len(), 2);
        assert_eq!(exams.tab(ExamTab::Completed, "").len(), 3);
        // 85, 78 and 92 percent
        assert_eq!(exams.average_percentage(), Some(85));
    }
}
