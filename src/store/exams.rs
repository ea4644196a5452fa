use super::table::Table;
use super::{transition_with, Repository, Transition};
use crate::libs::error::CampusError;
use crate::libs::filter::{filter, Criteria};
use crate::libs::record::{Record, Tracked};
use crate::libs::workflow::{ExamStatus, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    Midterm,
    Final,
    Quiz,
}

impl ExamType {
    pub const ALL: [ExamType; 3] = [ExamType::Midterm, ExamType::Final, ExamType::Quiz];

    pub fn label(self) -> &'static str {
        match self {
            ExamType::Midterm => "Midterm",
            ExamType::Final => "Final",
            ExamType::Quiz => "Quiz",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExamType::Midterm => "midterm",
            ExamType::Final => "final",
            ExamType::Quiz => "quiz",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "quiz" => Ok(ExamType::Quiz),
            _ => Err(CampusError::unknown("exam type", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub marks: u32,
    pub total_marks: u32,
    pub percentage: u32,
    pub grade: String,
}

impl ExamResult {
    /// Builds a result from raw marks, rounding the percentage.
    pub fn compute(marks: u32, total_marks: u32) -> Result<Self, CampusError> {
        if total_marks == 0 {
            return Err(CampusError::InvalidField {
                field: "total marks",
                reason: "must be greater than zero".into(),
            });
        }
        if marks > total_marks {
            return Err(CampusError::InvalidField {
                field: "marks",
                reason: format!("{} exceeds the total of {}", marks, total_marks),
            });
        }

        let percentage = (f64::from(marks) * 100.0 / f64::from(total_marks)).round() as u32;
        Ok(Self {
            marks,
            total_marks,
            percentage,
            grade: letter_grade(percentage).to_string(),
        })
    }
}

pub fn letter_grade(percentage: u32) -> &'static str {
    match percentage {
        90.. => "A+",
        80..=89 => "A",
        75..=79 => "B+",
        70..=74 => "B",
        65..=69 => "C+",
        60..=64 => "C",
        _ => "F",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub course: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub exam_type: ExamType,
    pub status: ExamStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ExamResult>,
}

impl Record for Exam {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.course, &self.title, &self.location]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_key(&self) -> Option<&str> {
        Some(self.exam_type.as_str())
    }
}

impl Tracked for Exam {
    type Status = ExamStatus;

    fn status(&self) -> ExamStatus {
        self.status
    }

    fn apply_status(&mut self, status: ExamStatus, note: Option<String>) {
        self.status = status;
        if note.is_some() {
            self.notes = note;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewExam {
    pub course: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub exam_type: String,
    pub notes: Option<String>,
}

/// Tabs of the exam views. Teachers see scheduled / in progress /
/// completed; students see upcoming / completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamTab {
    Scheduled,
    InProgress,
    Completed,
    Upcoming,
}

impl ExamTab {
    pub fn includes(self, status: ExamStatus) -> bool {
        match self {
            ExamTab::Scheduled => status == ExamStatus::Scheduled,
            ExamTab::InProgress => status == ExamStatus::Ongoing,
            ExamTab::Completed => matches!(status, ExamStatus::Completed | ExamStatus::Graded),
            ExamTab::Upcoming => status.is_upcoming(),
        }
    }
}

impl FromStr for ExamTab {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(ExamTab::Scheduled),
            "in-progress" | "ongoing" => Ok(ExamTab::InProgress),
            "completed" => Ok(ExamTab::Completed),
            "upcoming" => Ok(ExamTab::Upcoming),
            _ => Err(CampusError::unknown("exam tab", s)),
        }
    }
}

pub struct Exams<S = Table<Exam>> {
    store: S,
}

impl Exams {
    pub fn seeded(rows: Vec<Exam>) -> Self {
        Self::with_store(Table::with_rows(rows))
    }
}

impl<S: Repository<Exam>> Exams<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Exam] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&Exam> {
        self.store.get(id)
    }

    pub fn schedule(&mut self, form: NewExam) -> Result<&Exam, CampusError> {
        let mut missing = Vec::new();
        for (name, value) in [("course", &form.course), ("title", &form.title)] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if form.date.is_none() {
            missing.push("date");
        }
        for (name, value) in [
            ("time", &form.time),
            ("duration", &form.duration),
            ("location", &form.location),
            ("type", &form.exam_type),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        let date = match form.date {
            Some(date) if missing.is_empty() => date,
            _ => return Err(CampusError::Validation(missing)),
        };
        let exam_type = form.exam_type.parse()?;

        let exam = Exam {
            id: String::new(),
            course: form.course,
            title: form.title,
            date,
            time: form.time,
            duration: form.duration,
            location: form.location,
            exam_type,
            status: ExamStatus::Scheduled,
            notes: form.notes,
            result: None,
        };
        Ok(self.store.create(exam))
    }

    pub fn start(&mut self, id: &str) -> Transition<'_, Exam> {
        transition_with(&mut self.store, id, ExamStatus::Ongoing, |exam, next| exam.apply_status(next, None))
    }

    pub fn complete(&mut self, id: &str) -> Transition<'_, Exam> {
        transition_with(&mut self.store, id, ExamStatus::Completed, |exam, next| exam.apply_status(next, None))
    }

    /// Records the result and moves a completed exam to graded.
    pub fn grade(&mut self, id: &str, marks: u32, total_marks: u32) -> Result<Transition<'_, Exam>, CampusError> {
        let result = ExamResult::compute(marks, total_marks)?;
        Ok(transition_with(&mut self.store, id, ExamStatus::Graded, |exam, next| {
            exam.apply_status(next, None);
            exam.result = Some(result);
        }))
    }

    pub fn tab(&self, tab: ExamTab, search: &str) -> Vec<&Exam> {
        filter(self.store.list(), &Criteria::search(search))
            .into_iter()
            .filter(|exam| tab.includes(exam.status))
            .collect()
    }

    /// Mean percentage across graded exams, if any.
    pub fn average_percentage(&self) -> Option<u32> {
        let percentages: Vec<u32> = self.store.list().iter().filter_map(|exam| exam.result.as_ref()).map(|r| r.percentage).collect();
        if percentages.is_empty() {
            return None;
        }
        let total: u32 = percentages.iter().sum();
        Some((f64::from(total) / percentages.len() as f64).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_scale() {
        assert_eq!(letter_grade(92), "A+");
        assert_eq!(letter_grade(85), "A");
        assert_eq!(letter_grade(78), "B+");
        assert_eq!(letter_grade(70), "B");
        assert_eq!(letter_grade(66), "C+");
        assert_eq!(letter_grade(60), "C");
        assert_eq!(letter_grade(59), "F");
    }

    #[test]
    fn result_rounds_percentage() {
        let result = ExamResult::compute(17, 20).unwrap();
        assert_eq!(result.percentage, 85);
        assert_eq!(result.grade, "A");
        let result = ExamResult::compute(2, 3).unwrap();
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn result_rejects_impossible_marks() {
        assert!(matches!(ExamResult::compute(5, 0), Err(CampusError::InvalidField { field: "total marks", .. })));
        assert!(matches!(ExamResult::compute(21, 20), Err(CampusError::InvalidField { field: "marks", .. })));
    }

    #[test]
    fn schedule_validates_in_form_order() {
        let mut exams = Exams::seeded(Vec::new());
        let err = exams
            .schedule(NewExam {
                course: "Algorithms".into(),
                time: "10:00 AM".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, CampusError::Validation(vec!["title", "date", "duration", "location", "type"]));
    }

    #[test]
    fn tab_aliases() {
        assert_eq!("ongoing".parse::<ExamTab>(), Ok(ExamTab::InProgress));
        assert_eq!("In-Progress".parse::<ExamTab>(), Ok(ExamTab::InProgress));
    }
}
