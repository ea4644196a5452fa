use super::table::Table;
use super::{set_status, Repository, Transition};
use crate::libs::error::CampusError;
use crate::libs::filter::{filter, Criteria};
use crate::libs::record::{Record, Tracked};
use crate::libs::workflow::{LeaveStatus, Status};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Leave types offered on the application form.
pub const LEAVE_TYPES: &[&str] = &["Medical", "Personal", "Academic", "Emergency", "Official"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub applicant: String,
    pub department: String,
    pub reason: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
    pub has_attachment: bool,
    /// Reviewer remark, usually given with a rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl LeaveRequest {
    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days() + 1
    }
}

impl Record for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.applicant, &self.reason, &self.leave_type]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_key(&self) -> Option<&str> {
        Some(&self.leave_type)
    }
}

impl Tracked for LeaveRequest {
    type Status = LeaveStatus;

    fn status(&self) -> LeaveStatus {
        self.status
    }

    fn apply_status(&mut self, status: LeaveStatus, note: Option<String>) {
        self.status = status;
        if note.is_some() {
            self.comment = note;
        }
    }
}

/// Leave application form as submitted.
#[derive(Debug, Clone, Default)]
pub struct NewLeave {
    pub applicant: String,
    pub department: String,
    pub leave_type: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub reason: String,
    /// File name of the supporting document, if one was attached.
    pub attachment: Option<String>,
}

impl NewLeave {
    /// Checks required fields in form order and returns the date range.
    /// The range may be a single day but never runs backwards.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), CampusError> {
        let mut missing = Vec::new();
        if self.leave_type.trim().is_empty() {
            missing.push("leave type");
        }
        if self.from_date.is_none() {
            missing.push("from date");
        }
        if self.to_date.is_none() {
            missing.push("to date");
        }
        if self.reason.trim().is_empty() {
            missing.push("reason");
        }

        match (self.from_date, self.to_date) {
            (Some(from), Some(to)) if missing.is_empty() => {
                if to < from {
                    return Err(CampusError::InvalidField {
                        field: "to date",
                        reason: "must not be before the from date".into(),
                    });
                }
                Ok((from, to))
            }
            _ => Err(CampusError::Validation(missing)),
        }
    }
}

/// Tabs of the leave approval view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveTab {
    Pending,
    /// Every processed request, approved or rejected.
    History,
}

impl LeaveTab {
    pub fn includes(self, status: LeaveStatus) -> bool {
        match self {
            LeaveTab::Pending => status == LeaveStatus::Pending,
            LeaveTab::History => status != LeaveStatus::Pending,
        }
    }
}

impl std::str::FromStr for LeaveTab {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LeaveTab::Pending),
            "history" => Ok(LeaveTab::History),
            other => Err(CampusError::unknown("leave tab", other)),
        }
    }
}

/// Leave requests of one session.
pub struct LeaveRequests<S = Table<LeaveRequest>> {
    store: S,
}

impl LeaveRequests {
    pub fn seeded(rows: Vec<LeaveRequest>) -> Self {
        Self::with_store(Table::with_rows(rows))
    }
}

impl<S: Repository<LeaveRequest>> LeaveRequests<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[LeaveRequest] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&LeaveRequest> {
        self.store.get(id)
    }

    /// Submits an application. It starts out pending, dated today.
    pub fn apply(&mut self, form: NewLeave) -> Result<&LeaveRequest, CampusError> {
        let (from_date, to_date) = form.validate()?;
        let request = LeaveRequest {
            id: String::new(),
            applicant: form.applicant,
            department: form.department,
            reason: form.reason.trim().to_string(),
            leave_type: form.leave_type,
            from_date,
            to_date,
            status: LeaveStatus::Pending,
            applied_on: Local::now().date_naive(),
            has_attachment: form.attachment.is_some(),
            comment: None,
        };
        Ok(self.store.create(request))
    }

    pub fn approve(&mut self, id: &str) -> Transition<'_, LeaveRequest> {
        set_status(&mut self.store, id, LeaveStatus::Approved, None)
    }

    pub fn reject(&mut self, id: &str, comment: Option<String>) -> Transition<'_, LeaveRequest> {
        set_status(&mut self.store, id, LeaveStatus::Rejected, comment)
    }

    pub fn pending(&self) -> Vec<&LeaveRequest> {
        self.tab(LeaveTab::Pending)
    }

    pub fn tab(&self, tab: LeaveTab) -> Vec<&LeaveRequest> {
        self.store.list().iter().filter(|request| tab.includes(request.status)).collect()
    }

    /// Status dropdown plus free-text search.
    pub fn find(&self, criteria: &Criteria) -> Vec<&LeaveRequest> {
        filter(self.store.list(), criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_lists_missing_fields_in_form_order() {
        let form = NewLeave {
            reason: "x".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(CampusError::Validation(vec!["leave type", "from date", "to date"]))
        );
    }

    #[test]
    fn days_is_inclusive() {
        let mut leaves = LeaveRequests::seeded(Vec::new());
        let request = leaves
            .apply(NewLeave {
                leave_type: "Medical".into(),
                from_date: NaiveDate::from_ymd_opt(2025, 4, 24),
                to_date: NaiveDate::from_ymd_opt(2025, 4, 28),
                reason: "x".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(request.days(), 5);
        assert!(!request.has_attachment);
    }

    #[test]
    fn tab_parsing() {
        assert_eq!("History".parse::<LeaveTab>(), Ok(LeaveTab::History));
        assert!("archive".parse::<LeaveTab>().is_err());
    }
}
