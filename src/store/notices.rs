use super::table::Table;
use super::Repository;
use crate::libs::error::{required, CampusError};
use crate::libs::filter::{filter, Criteria};
use crate::libs::record::Record;
use crate::libs::role::Role;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notice board tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    Department,
    Admin,
    Academic,
    Campus,
}

impl Board {
    pub const ALL: [Board; 4] = [Board::Department, Board::Admin, Board::Academic, Board::Campus];

    pub fn as_str(self) -> &'static str {
        match self {
            Board::Department => "department",
            Board::Admin => "admin",
            Board::Academic => "academic",
            Board::Campus => "campus",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Board::Department => "Department",
            Board::Admin => "Administration",
            Board::Academic => "Academic",
            Board::Campus => "Campus",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Board {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Board::ALL
            .into_iter()
            .find(|board| board.as_str() == needle || board.title().to_lowercase() == needle)
            .ok_or_else(|| CampusError::unknown("notice board", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub category: String,
    pub board: Board,
    pub is_pinned: bool,
    pub is_new: bool,
    pub has_attachment: bool,
}

impl Record for Notice {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.content, &self.category]
    }

    fn kind_key(&self) -> Option<&str> {
        Some(self.board.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub category: String,
    pub board: Board,
    pub is_pinned: bool,
    pub has_attachment: bool,
}

pub struct Notices<S = Table<Notice>> {
    store: S,
}

impl Notices {
    pub fn seeded(rows: Vec<Notice>) -> Self {
        Self::with_store(Table::with_rows(rows))
    }
}

impl<S: Repository<Notice>> Notices<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Notice] {
        self.store.list()
    }

    /// Posts a notice on behalf of `author`. Only admins and department
    /// heads are offered this action.
    pub fn post(&mut self, author: Role, form: NewNotice) -> Result<&Notice, CampusError> {
        if !author.can_post_notice() {
            return Err(CampusError::Forbidden { role: author, action: "post notice" });
        }
        required(&[("title", &form.title), ("content", &form.content), ("category", &form.category)])?;

        let notice = Notice {
            id: String::new(),
            title: form.title.trim().to_string(),
            content: form.content.trim().to_string(),
            date: Local::now().naive_local(),
            category: form.category.trim().to_string(),
            board: form.board,
            is_pinned: form.is_pinned,
            is_new: true,
            has_attachment: form.has_attachment,
        };
        Ok(self.store.create(notice))
    }

    /// Notices on one board matching the search term.
    pub fn board(&self, board: Board, search: &str) -> Vec<&Notice> {
        filter(self.store.list(), &Criteria::search(search).with_kind(board.as_str()))
    }

    /// Searches across every board.
    pub fn search(&self, search: &str) -> Vec<&Notice> {
        filter(self.store.list(), &Criteria::search(search))
    }

    pub fn pinned(&self) -> Vec<&Notice> {
        self.store.list().iter().filter(|notice| notice.is_pinned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewNotice {
        NewNotice {
            title: "Exam Hall Change".into(),
            content: "Final exams move to the main hall.".into(),
            category: "Examination".into(),
            board: Board::Academic,
            is_pinned: false,
            has_attachment: false,
        }
    }

    #[test]
    fn board_parses_key_or_title() {
        assert_eq!("admin".parse::<Board>(), Ok(Board::Admin));
        assert_eq!("Administration".parse::<Board>(), Ok(Board::Admin));
        assert!("library".parse::<Board>().is_err());
    }

    #[test]
    fn students_cannot_post() {
        let mut notices = Notices::seeded(Vec::new());
        let err = notices.post(Role::Student, form()).unwrap_err();
        assert_eq!(err, CampusError::Forbidden { role: Role::Student, action: "post notice" });
        assert!(notices.all().is_empty());
    }

    #[test]
    fn hod_posts_new_notice_first() {
        let mut notices = Notices::seeded(Vec::new());
        let posted = notices.post(Role::Hod, form()).unwrap();
        assert_eq!(posted.id, "1");
        assert!(posted.is_new);
        assert_eq!(notices.board(Board::Academic, "").len(), 1);
        assert!(notices.board(Board::Campus, "").is_empty());
    }
}
