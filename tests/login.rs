#[cfg(test)]
mod tests {
    use campus::libs::auth::{AccountAuthenticator, Authenticator, Credentials};
    use campus::libs::config::{Account, Config};
    use campus::libs::error::CampusError;
    use campus::libs::role::Role;
    use std::time::{Duration, Instant};

    fn demo() -> AccountAuthenticator {
        AccountAuthenticator::new(Config::default().accounts(), Duration::ZERO)
    }

    fn credentials(role: Role, email: &str, password: &str) -> Credentials {
        Credentials {
            role,
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_every_demo_account_signs_in() {
        let authenticator = demo();
        for role in Role::ALL {
            let email = format!("{}@demo.com", role);
            let password = format!("{}123", role);
            let signed_in = authenticator.authenticate(&credentials(role, &email, &password)).await;
            assert_eq!(signed_in, Ok(role));
        }
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let result = demo().authenticate(&credentials(Role::Student, "student@demo.com", "wrong-pass")).await;
        assert_eq!(result, Err(CampusError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_account_of_another_role() {
        let result = demo().authenticate(&credentials(Role::Admin, "student@demo.com", "student123")).await;
        assert_eq!(result, Err(CampusError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_form_checks_run_first() {
        let authenticator = demo();
        let bad_email = authenticator.authenticate(&credentials(Role::Hod, "hod-at-demo", "hod123")).await;
        assert!(matches!(bad_email, Err(CampusError::InvalidField { field: "email", .. })));

        let short = authenticator.authenticate(&credentials(Role::Hod, "hod@demo.com", "hod")).await;
        assert!(matches!(short, Err(CampusError::InvalidField { field: "password", .. })));
    }

    #[tokio::test]
    async fn test_configured_accounts_replace_demo_table() {
        let accounts = vec![Account {
            role: Role::Teacher,
            email: "ada@campus.edu".into(),
            password: "engine42".into(),
        }];
        let authenticator = AccountAuthenticator::new(accounts, Duration::ZERO);
        assert!(authenticator.authenticate(&credentials(Role::Teacher, "ada@campus.edu", "engine42")).await.is_ok());
        assert!(authenticator.authenticate(&credentials(Role::Teacher, "teacher@demo.com", "teacher123")).await.is_err());
        assert_eq!(authenticator.account_for(Role::Teacher).map(|a| a.email.as_str()), Some("ada@campus.edu"));
        assert!(authenticator.account_for(Role::Admin).is_none());
    }

    #[tokio::test]
    async fn test_login_delay_is_applied() {
        let authenticator = AccountAuthenticator::new(Config::default().accounts(), Duration::from_millis(50));
        let started = Instant::now();
        let result = authenticator.authenticate(&credentials(Role::Hod, "hod@demo.com", "hod123")).await;
        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
