//! Domain error types.
//!
//! Command handlers propagate failures through `anyhow`, while the record
//! store, workflow and login flow report the conditions below so callers can
//! decide whether to surface them as inline notices or abort.

use crate::libs::role::Role;
use crate::libs::workflow::WorkflowError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CampusError {
    /// One or more required form fields were left empty.
    #[error("Please fill all required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// A form value is present but unusable (e.g. marks above the total).
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid credentials. Please use the demo account details.")]
    InvalidCredentials,

    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The action is not offered in this role's views.
    #[error("'{action}' is not available for the {role} role")]
    Forbidden { role: Role, action: &'static str },
}

impl CampusError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        CampusError::UnknownValue { kind, value: value.into() }
    }
}

/// Collects the names of empty required fields.
///
/// ```rust
/// use campus::libs::error::{required, CampusError};
///
/// let missing = required(&[("title", ""), ("subject", "Algorithms")]);
/// assert_eq!(missing, Err(CampusError::Validation(vec!["title"])));
/// ```
pub fn required(fields: &[(&'static str, &str)]) -> Result<(), CampusError> {
    let missing: Vec<&'static str> = fields.iter().filter(|(_, value)| value.trim().is_empty()).map(|(name, _)| *name).collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CampusError::Validation(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_reports_every_blank_field() {
        let result = required(&[("type", ""), ("reason", "  "), ("from", "2025-04-24")]);
        assert_eq!(result, Err(CampusError::Validation(vec!["type", "reason"])));
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = CampusError::Validation(vec!["title", "file"]);
        assert_eq!(err.to_string(), "Please fill all required fields: title, file");
    }
}
