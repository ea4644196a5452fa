//! Filter and search engine.
//!
//! A pure function narrowing a record collection for display. Evaluation
//! order is fixed:
//!
//! 1. categorical selectors (status, type/tab) keep exact matches only,
//!    ignoring ASCII case, unless set to [`Selector::All`];
//! 2. a non-empty search term keeps records where at least one designated
//!    text field contains the term, case-insensitively, as a plain substring.
//!
//! An empty result is a normal outcome, not an error.
//!
//! ## Usage
//!
//! ```rust
//! use campus::libs::filter::{filter, Criteria};
//! use campus::store::seed;
//!
//! let notices = seed::notices();
//! let hits = filter(&notices, &Criteria::search("MAINTENANCE"));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "System Maintenance");
//! ```

use crate::libs::record::Record;
use crate::libs::workflow::Status;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel value accepted from the command line for "no restriction".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn only(value: impl Into<String>) -> Self {
        Selector::Only(value.into())
    }

    fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => value.is_some_and(|value| value.eq_ignore_ascii_case(expected)),
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(Selector::All)
        } else {
            Ok(Selector::Only(s.to_lowercase()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub status: Selector,
    pub kind: Selector,
    pub search: String,
}

impl Criteria {
    pub fn search(term: impl Into<String>) -> Self {
        Criteria {
            search: term.into(),
            ..Default::default()
        }
    }

    pub fn with_status<S: Status>(mut self, status: S) -> Self {
        self.status = Selector::only(status.as_str());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Selector::only(kind);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.status.accepts(record.status_key()) || !self.kind.accepts(record.kind_key()) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        record.search_fields().iter().any(|field| field.to_lowercase().contains(&term))
    }
}

/// Returns the visible subset of `records`, preserving their order.
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &Criteria) -> Vec<&'a R> {
    records.iter().filter(|record| criteria.matches(*record)).collect()
}
