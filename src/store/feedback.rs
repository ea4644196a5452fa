use super::table::Table;
use super::{set_status, Repository, Transition};
use crate::libs::error::CampusError;
use crate::libs::filter::{filter, Criteria};
use crate::libs::formatter::rating_label;
use crate::libs::record::{Record, Tracked};
use crate::libs::workflow::{FeedbackStatus, Status};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A course offered on the feedback form, with its instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub teacher: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub course: String,
    pub teacher: String,
    pub rating: u8,
    pub comment: String,
    pub submitted_on: NaiveDate,
    pub status: FeedbackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl Feedback {
    pub fn rating_label(&self) -> &'static str {
        rating_label(self.rating)
    }
}

impl Record for Feedback {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.course, &self.teacher, &self.comment]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Tracked for Feedback {
    type Status = FeedbackStatus;

    fn status(&self) -> FeedbackStatus {
        self.status
    }

    fn apply_status(&mut self, status: FeedbackStatus, note: Option<String>) {
        self.status = status;
        if note.is_some() {
            self.response = note;
        }
    }
}

/// Feedback form. A rating of 0 means no star was picked.
#[derive(Debug, Clone, Default)]
pub struct NewFeedback {
    pub course_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewFeedback {
    fn validate<'c>(&self, catalog: &'c [Course]) -> Result<&'c Course, CampusError> {
        let mut missing = Vec::new();
        if self.course_id.trim().is_empty() {
            missing.push("course");
        }
        if self.rating == 0 {
            missing.push("rating");
        }
        if self.comment.trim().is_empty() {
            missing.push("comment");
        }
        if !missing.is_empty() {
            return Err(CampusError::Validation(missing));
        }

        if self.rating > 5 {
            return Err(CampusError::InvalidField {
                field: "rating",
                reason: format!("{} is outside 1-5", self.rating),
            });
        }
        catalog
            .iter()
            .find(|course| course.id == self.course_id.trim())
            .ok_or_else(|| CampusError::unknown("course", self.course_id.as_str()))
    }
}

pub struct Feedbacks<S = Table<Feedback>> {
    store: S,
}

impl Feedbacks {
    pub fn seeded(rows: Vec<Feedback>) -> Self {
        Self::with_store(Table::with_rows(rows))
    }
}

impl<S: Repository<Feedback>> Feedbacks<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Feedback] {
        self.store.list()
    }

    /// Submits feedback for one of the catalog's courses; the course and
    /// teacher names are copied from the catalog entry.
    pub fn submit(&mut self, form: NewFeedback, catalog: &[Course]) -> Result<&Feedback, CampusError> {
        let course = form.validate(catalog)?;
        let feedback = Feedback {
            id: String::new(),
            course: course.name.clone(),
            teacher: course.teacher.clone(),
            rating: form.rating,
            comment: form.comment.trim().to_string(),
            submitted_on: Local::now().date_naive(),
            status: FeedbackStatus::Submitted,
            response: None,
        };
        Ok(self.store.create(feedback))
    }

    /// Instructor reply; marks the submission reviewed.
    pub fn respond(&mut self, id: &str, response: impl Into<String>) -> Transition<'_, Feedback> {
        set_status(&mut self.store, id, FeedbackStatus::Reviewed, Some(response.into()))
    }

    pub fn find(&self, criteria: &Criteria) -> Vec<&Feedback> {
        filter(self.store.list(), criteria)
    }

    pub fn average_rating(&self) -> Option<f64> {
        let rows = self.store.list();
        if rows.is_empty() {
            return None;
        }
        let sum: u32 = rows.iter().map(|row| u32::from(row.rating)).sum();
        Some(f64::from(sum) / rows.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Course> {
        vec![Course {
            id: "3".into(),
            name: "Algorithms".into(),
            teacher: "Prof. Smith".into(),
        }]
    }

    #[test]
    fn zero_rating_counts_as_missing() {
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let err = feedbacks
            .submit(
                NewFeedback {
                    course_id: "3".into(),
                    rating: 0,
                    comment: String::new(),
                },
                &catalog(),
            )
            .unwrap_err();
        assert_eq!(err, CampusError::Validation(vec!["rating", "comment"]));
    }

    #[test]
    fn rating_above_five_is_invalid() {
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let form = NewFeedback {
            course_id: "3".into(),
            rating: 6,
            comment: "ok".into(),
        };
        assert!(matches!(feedbacks.submit(form, &catalog()), Err(CampusError::InvalidField { field: "rating", .. })));
    }

    #[test]
    fn submit_copies_course_and_teacher() {
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let form = NewFeedback {
            course_id: "3".into(),
            rating: 4,
            comment: "Clear lectures".into(),
        };
        let stored = feedbacks.submit(form, &catalog()).unwrap();
        assert_eq!(stored.course, "Algorithms");
        assert_eq!(stored.teacher, "Prof. Smith");
        assert_eq!(stored.status, FeedbackStatus::Submitted);
        assert_eq!(stored.rating_label(), "Very Good");
    }

    #[test]
    fn respond_reviews_once() {
        let mut feedbacks = Feedbacks::seeded(Vec::new());
        let form = NewFeedback {
            course_id: "3".into(),
            rating: 5,
            comment: "Great".into(),
        };
        let id = feedbacks.submit(form, &catalog()).unwrap().id.clone();

        let reviewed = feedbacks.respond(&id, "Thanks!").applied().cloned().unwrap();
        assert_eq!(reviewed.response.as_deref(), Some("Thanks!"));
        assert!(matches!(feedbacks.respond(&id, "Again"), Transition::Refused(_)));
        assert_eq!(feedbacks.all()[0].response.as_deref(), Some("Thanks!"));
    }
}
