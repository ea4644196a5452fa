#[cfg(test)]
mod tests {
    use campus::libs::error::CampusError;
    use campus::libs::role::Role;
    use campus::store::notices::{Board, NewNotice, Notices};
    use campus::store::seed;

    fn notices() -> Notices {
        Notices::seeded(seed::notices())
    }

    fn form(title: &str) -> NewNotice {
        NewNotice {
            title: title.into(),
            content: "Bring your student card.".into(),
            category: "Examination".into(),
            board: Board::Academic,
            is_pinned: false,
            has_attachment: false,
        }
    }

    #[test]
    fn test_each_board_shows_its_own_notices() {
        let notices = notices();
        for board in Board::ALL {
            let shown = notices.board(board, "");
            assert!(!shown.is_empty());
            assert!(shown.iter().all(|notice| notice.board == board));
        }
        let total: usize = Board::ALL.iter().map(|board| notices.board(*board, "").len()).sum();
        assert_eq!(total, notices.all().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let notices = notices();
        let lower = notices.search("library");
        let upper = notices.search("LIBRARY");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_maintenance_search() {
        let notices = notices();
        for term in ["maintenance", "MAINTENANCE"] {
            let titles: Vec<&str> = notices.search(term).iter().map(|notice| notice.title.as_str()).collect();
            assert_eq!(titles, vec!["System Maintenance"]);
        }
    }

    #[test]
    fn test_search_without_hits_is_empty() {
        assert!(notices().search("quidditch").is_empty());
    }

    #[test]
    fn test_posted_notice_is_listed_first() {
        let mut notices = notices();
        let posted = notices.post(Role::Hod, form("Exam hall rules")).unwrap();
        assert_eq!(posted.id, "10");
        assert!(posted.is_new);

        let academic = notices.board(Board::Academic, "");
        assert_eq!(academic[0].title, "Exam hall rules");
    }

    #[test]
    fn test_students_cannot_post() {
        let mut notices = notices();
        let err = notices.post(Role::Student, form("Party")).unwrap_err();
        assert!(matches!(err, CampusError::Forbidden { role: Role::Student, .. }));
        assert_eq!(notices.all().len(), 9);
    }

    #[test]
    fn test_post_requires_title_content_and_category() {
        let mut notices = notices();
        let empty = NewNotice {
            title: " ".into(),
            content: String::new(),
            ..form("")
        };
        let err = notices.post(Role::Admin, empty).unwrap_err();
        assert_eq!(err, CampusError::Validation(vec!["title", "content"]));
    }

    #[test]
    fn test_pinned_notices() {
        let notices = notices();
        let pinned = notices.pinned();
        assert_eq!(pinned.len(), 3);
        assert!(pinned.iter().all(|notice| notice.is_pinned));
    }
}
