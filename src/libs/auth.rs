//! Login against a table of role accounts.
//!
//! This is a local equality check for choosing a dashboard, not a security
//! mechanism. The table is injected through [`Authenticator`] so nothing
//! here hardcodes credentials.

use crate::libs::config::{Account, Config};
use crate::libs::error::CampusError;
use crate::libs::role::Role;
use std::time::Duration;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Form-level checks run before any lookup.
    pub fn validate(&self) -> Result<(), CampusError> {
        if !is_valid_email(&self.email) {
            return Err(CampusError::InvalidField {
                field: "email",
                reason: "not a valid email address".into(),
            });
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CampusError::InvalidField {
                field: "password",
                reason: format!("must be at least {} characters", MIN_PASSWORD_LEN),
            });
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[allow(async_fn_in_trait)]
pub trait Authenticator {
    /// Resolves the credentials to the role whose dashboard opens.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Role, CampusError>;
}

/// Checks credentials against the accounts from [`Config`], after a
/// simulated network delay.
#[derive(Debug, Clone)]
pub struct AccountAuthenticator {
    accounts: Vec<Account>,
    delay: Duration,
}

impl AccountAuthenticator {
    pub fn new(accounts: Vec<Account>, delay: Duration) -> Self {
        Self { accounts, delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.accounts(), config.login_delay())
    }

    /// Account offered as the form default for `role`.
    pub fn account_for(&self, role: Role) -> Option<&Account> {
        self.accounts.iter().find(|account| account.role == role)
    }
}

impl Authenticator for AccountAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Role, CampusError> {
        credentials.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let matched = self.accounts.iter().any(|account| {
            account.role == credentials.role && account.email == credentials.email && account.password == credentials.password
        });

        if matched {
            tracing::debug!(role = %credentials.role, "login accepted");
            Ok(credentials.role)
        } else {
            tracing::debug!(role = %credentials.role, "login rejected");
            Err(CampusError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("hod@demo.com"));
        assert!(!is_valid_email("hod@demo"));
        assert!(!is_valid_email("@demo.com"));
        assert!(!is_valid_email("hod demo@demo.com"));
        assert!(!is_valid_email("hod@@demo.com"));
    }

    #[test]
    fn short_password_is_a_field_error() {
        let credentials = Credentials {
            role: Role::Hod,
            email: "hod@demo.com".into(),
            password: "hod".into(),
        };
        assert!(matches!(credentials.validate(), Err(CampusError::InvalidField { field: "password", .. })));
    }
}
