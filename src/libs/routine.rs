//! Weekly class routine.

use crate::libs::error::CampusError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Week {
    #[default]
    Current,
    Next,
}

impl Week {
    pub fn label(self) -> &'static str {
        match self {
            Week::Current => "Current Week",
            Week::Next => "Next Week",
        }
    }
}

impl FromStr for Week {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" | "this" => Ok(Week::Current),
            "next" => Ok(Week::Next),
            _ => Err(CampusError::unknown("week", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub subject: String,
    pub time: String,
    pub room: String,
    pub teacher: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    /// May be empty; a free day is still listed.
    pub sessions: Vec<ClassSession>,
}

impl DaySchedule {
    pub fn name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Two weeks of schedule, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub current: Vec<DaySchedule>,
    pub next: Vec<DaySchedule>,
}

impl Routine {
    pub fn week(&self, week: Week) -> &[DaySchedule] {
        match week {
            Week::Current => &self.current,
            Week::Next => &self.next,
        }
    }

    pub fn day(&self, week: Week, day: Weekday) -> Option<&DaySchedule> {
        self.week(week).iter().find(|schedule| schedule.day == day)
    }

    pub fn classes_on(&self, week: Week, day: Weekday) -> usize {
        self.day(week, day).map_or(0, |schedule| schedule.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn weekend_is_free_but_listed() {
        let routine = seed::routine();
        assert_eq!(routine.week(Week::Current).len(), 7);
        assert_eq!(routine.classes_on(Week::Current, Weekday::Sat), 0);
        assert!(routine.day(Week::Next, Weekday::Sun).is_some());
    }

    #[test]
    fn weeks_differ() {
        let routine = seed::routine();
        assert_eq!(routine.classes_on(Week::Current, Weekday::Mon), 3);
        assert_eq!(routine.classes_on(Week::Next, Weekday::Mon), 2);
        assert_eq!("next".parse::<Week>(), Ok(Week::Next));
    }
}
