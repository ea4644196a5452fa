//! Per-course attendance and daily class marks.

use crate::libs::config::AttendanceConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Good,
    Warning,
    Danger,
}

impl Standing {
    pub fn label(self) -> &'static str {
        match self {
            Standing::Good => "Good",
            Standing::Warning => "Warning",
            Standing::Danger => "Danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAttendance {
    pub id: String,
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
}

impl CourseAttendance {
    /// Attended share, rounded to the nearest whole percent. A course with
    /// no classes yet counts as 0.
    pub fn percentage(&self) -> u32 {
        percent(self.attended_classes, self.total_classes)
    }

    pub fn standing(&self, thresholds: &AttendanceConfig) -> Standing {
        let percentage = self.percentage();
        if percentage >= thresholds.good_threshold {
            Standing::Good
        } else if percentage >= thresholds.warning_threshold {
            Standing::Warning
        } else {
            Standing::Danger
        }
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(whole)).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Present,
    Absent,
    Late,
}

impl Mark {
    pub fn label(self) -> &'static str {
        match self {
            Mark::Present => "Present",
            Mark::Absent => "Absent",
            Mark::Late => "Late",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMark {
    pub course: String,
    pub time: String,
    pub mark: Mark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub classes: Vec<ClassMark>,
}

impl DailyAttendance {
    pub fn weekday(&self) -> String {
        self.date.format("%A").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub total_classes: u32,
    pub attended_classes: u32,
    pub percentage: u32,
    /// Names of courses in the danger band.
    pub at_risk: Vec<String>,
}

pub fn summary(courses: &[CourseAttendance], thresholds: &AttendanceConfig) -> AttendanceSummary {
    let total_classes = courses.iter().map(|c| c.total_classes).sum();
    let attended_classes = courses.iter().map(|c| c.attended_classes).sum();
    let at_risk = courses
        .iter()
        .filter(|course| course.standing(thresholds) == Standing::Danger)
        .map(|course| course.name.clone())
        .collect();

    AttendanceSummary {
        total_classes,
        attended_classes,
        percentage: percent(attended_classes, total_classes),
        at_risk,
    }
}

/// Count of each mark across the given days.
pub fn mark_counts(days: &[DailyAttendance]) -> (usize, usize, usize) {
    days.iter().flat_map(|day| &day.classes).fold((0, 0, 0), |(present, late, absent), class| match class.mark {
        Mark::Present => (present + 1, late, absent),
        Mark::Late => (present, late + 1, absent),
        Mark::Absent => (present, late, absent + 1),
    })
}
