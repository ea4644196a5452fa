//! Status workflows for tracked records.
//!
//! Every tracked record kind has a fixed set of states and a one-directional
//! set of single-step transitions, triggered only by the caller:
//!
//! ```text
//! Leave:    pending ──▶ approved
//!                   └─▶ rejected
//! Exam:     scheduled ──▶ ongoing ──▶ completed ──▶ graded
//! Feedback: submitted ──▶ reviewed
//! ```
//!
//! States without successors are terminal. A transition out of a terminal
//! state, or to a state that is not a direct successor, is refused with a
//! [`WorkflowError`].

use crate::libs::error::CampusError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Cannot move from '{from}' to '{to}'")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("'{state}' is a final state and cannot change")]
    Terminal { state: &'static str },
}

/// A fixed, closed set of workflow states.
pub trait Status: Copy + Eq + Debug + Display + FromStr<Err = CampusError> + 'static {
    /// Every state of the workflow, in lifecycle order.
    const ALL: &'static [Self];

    /// Machine value used for exact-match filtering.
    fn as_str(self) -> &'static str;

    /// Badge text shown next to a record.
    fn label(self) -> &'static str;

    /// States reachable in one step.
    fn successors(self) -> &'static [Self];

    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    fn can_transition_to(self, next: Self) -> bool {
        self.successors().contains(&next)
    }
}

/// Validates a single-step transition and returns the new state.
pub fn transition<S: Status>(current: S, target: S) -> Result<S, WorkflowError> {
    if current.is_terminal() {
        return Err(WorkflowError::Terminal { state: current.as_str() });
    }
    if !current.can_transition_to(target) {
        return Err(WorkflowError::InvalidTransition {
            from: current.as_str(),
            to: target.as_str(),
        });
    }
    Ok(target)
}

fn parse_status<S: Status>(kind: &'static str, value: &str) -> Result<S, CampusError> {
    let needle = value.trim().to_lowercase();
    S::ALL
        .iter()
        .copied()
        .find(|status| status.as_str() == needle)
        .ok_or_else(|| CampusError::unknown(kind, value))
}

macro_rules! status_traits {
    ($ty:ty, $kind:literal) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CampusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_status($kind, s)
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Status for LeaveStatus {
    const ALL: &'static [Self] = &[LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    fn successors(self) -> &'static [Self] {
        match self {
            LeaveStatus::Pending => &[LeaveStatus::Approved, LeaveStatus::Rejected],
            LeaveStatus::Approved | LeaveStatus::Rejected => &[],
        }
    }
}

status_traits!(LeaveStatus, "leave status");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    Scheduled,
    Ongoing,
    Completed,
    Graded,
}

impl ExamStatus {
    /// Shown to students under "Upcoming".
    pub fn is_upcoming(self) -> bool {
        matches!(self, ExamStatus::Scheduled | ExamStatus::Ongoing)
    }
}

impl Status for ExamStatus {
    const ALL: &'static [Self] = &[ExamStatus::Scheduled, ExamStatus::Ongoing, ExamStatus::Completed, ExamStatus::Graded];

    fn as_str(self) -> &'static str {
        match self {
            ExamStatus::Scheduled => "scheduled",
            ExamStatus::Ongoing => "ongoing",
            ExamStatus::Completed => "completed",
            ExamStatus::Graded => "graded",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ExamStatus::Scheduled => "Scheduled",
            ExamStatus::Ongoing => "In Progress",
            ExamStatus::Completed => "Completed",
            ExamStatus::Graded => "Graded",
        }
    }

    fn successors(self) -> &'static [Self] {
        match self {
            ExamStatus::Scheduled => &[ExamStatus::Ongoing],
            ExamStatus::Ongoing => &[ExamStatus::Completed],
            ExamStatus::Completed => &[ExamStatus::Graded],
            ExamStatus::Graded => &[],
        }
    }
}

status_traits!(ExamStatus, "exam status");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Submitted,
    Reviewed,
}

impl Status for FeedbackStatus {
    const ALL: &'static [Self] = &[FeedbackStatus::Submitted, FeedbackStatus::Reviewed];

    fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::Submitted => "submitted",
            FeedbackStatus::Reviewed => "reviewed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FeedbackStatus::Submitted => "Submitted",
            FeedbackStatus::Reviewed => "Reviewed",
        }
    }

    fn successors(self) -> &'static [Self] {
        match self {
            FeedbackStatus::Submitted => &[FeedbackStatus::Reviewed],
            FeedbackStatus::Reviewed => &[],
        }
    }
}

status_traits!(FeedbackStatus, "feedback status");
