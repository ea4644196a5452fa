//! In-memory record store for a campus session.
//!
//! Each record kind is held in its own insertion-ordered collection, owned by
//! the session that created it. Collections are reached through the
//! [`Repository`] trait so every per-kind service can be handed a different
//! backing store, and [`table::Table`] is the default in-memory one.
//!
//! ## Features
//!
//! - **Create**: assigns a fresh unique id and prepends (most recent first)
//! - **Update**: whole-record replacement by id, no-op for unknown ids
//! - **Remove**: deletion by id, no-op for unknown ids
//! - **Transitions**: status changes validated by [`crate::libs::workflow`]
//!
//! ## Usage
//!
//! ```rust
//! use campus::store::{leaves::LeaveRequests, Repository};
//! use campus::store::seed;
//!
//! let mut leaves = LeaveRequests::seeded(seed::department_leave_requests());
//! leaves.approve("1");
//! assert_eq!(leaves.pending().len(), 2);
//! ```

use crate::libs::messages::Message;
use crate::libs::record::{Record, Tracked};
use crate::libs::workflow::{self, WorkflowError};
use crate::msg_warning;

/// Sample data used to seed fresh sessions.
pub mod seed;

/// Generic insertion-ordered table.
pub mod table;

/// Exam scheduling, progress and grading.
pub mod exams;
/// Course feedback submissions and instructor responses.
pub mod feedback;
/// Leave applications and department-head approval.
pub mod leaves;
pub mod materials;
/// Notice boards.
pub mod notices;

/// Storage contract for one record kind.
pub trait Repository<R: Record> {
    /// All records, most recent first.
    fn list(&self) -> &[R];

    /// Assigns a fresh id, prepends the record and returns it.
    fn create(&mut self, record: R) -> &R;

    /// Replaces the record with the given id. The stored id is kept.
    fn update(&mut self, id: &str, record: R) -> Option<&R>;

    fn remove(&mut self, id: &str) -> Option<R>;

    fn get(&self, id: &str) -> Option<&R> {
        self.list().iter().find(|record| record.id() == id)
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Outcome of a status change requested by id.
#[derive(Debug, PartialEq)]
pub enum Transition<'a, R> {
    Applied(&'a R),
    /// No record with that id; nothing changed.
    NotFound,
    /// The workflow does not allow the change; nothing changed.
    Refused(WorkflowError),
}

impl<'a, R> Transition<'a, R> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    pub fn applied(self) -> Option<&'a R> {
        match self {
            Transition::Applied(record) => Some(record),
            _ => None,
        }
    }
}

/// Moves the record `id` to `target`, replacing its status (and note) as a
/// whole. Unknown ids and refused transitions leave the collection untouched;
/// refusals are reported as warnings.
pub fn set_status<'a, R, S>(repo: &'a mut S, id: &str, target: R::Status, note: Option<String>) -> Transition<'a, R>
where
    R: Tracked + Clone,
    S: Repository<R> + ?Sized,
{
    transition_with(repo, id, target, |record, next| record.apply_status(next, note))
}

/// Same contract as [`set_status`], with `apply` writing the new state and
/// any fields that travel with it (e.g. an exam result on grading).
pub fn transition_with<'a, R, S, F>(repo: &'a mut S, id: &str, target: R::Status, apply: F) -> Transition<'a, R>
where
    R: Tracked + Clone,
    S: Repository<R> + ?Sized,
    F: FnOnce(&mut R, R::Status),
{
    let mut record = match repo.get(id) {
        Some(record) => record.clone(),
        None => {
            tracing::debug!(id, "status change ignored: no such record");
            return Transition::NotFound;
        }
    };

    let from = record.status();
    match workflow::transition(from, target) {
        Ok(next) => {
            apply(&mut record, next);
            tracing::debug!(id, from = %from, to = %next, "status changed");
            match repo.update(id, record) {
                Some(stored) => Transition::Applied(stored),
                None => Transition::NotFound,
            }
        }
        Err(err) => {
            msg_warning!(Message::TransitionRefused(id.to_string(), err.to_string()));
            Transition::Refused(err)
        }
    }
}
