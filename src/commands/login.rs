use super::{attendance, dashboard, exams, feedback, leave, materials, notices, routine};
use crate::{
    libs::{
        auth::{is_valid_email, AccountAuthenticator, Authenticator, Credentials, MIN_PASSWORD_LEN},
        config::Config,
        messages::Message,
        role::{Role, Route},
        session::Session,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long, value_enum)]
    role: Option<Role>,
    #[arg(short, long)]
    email: Option<String>,
    /// Prompted for when omitted
    #[arg(short, long)]
    password: Option<String>,
}

pub async fn cmd(args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let authenticator = AccountAuthenticator::from_config(&config);
    // Credentials given in full on the command line get one attempt.
    let retry = args.email.is_none() || args.password.is_none();

    let mut credentials = Credentials {
        role: match args.role {
            Some(role) => role,
            None => select_role(Role::Student)?,
        },
        email: args.email.unwrap_or_default(),
        password: args.password.unwrap_or_default(),
    };
    if credentials.email.is_empty() {
        credentials.email = prompt_email(&authenticator, credentials.role)?;
    }
    if credentials.password.is_empty() {
        credentials.password = prompt_password()?;
    }

    let role = loop {
        match sign_in(&authenticator, &credentials).await {
            Some(role) => break role,
            None if retry => {
                credentials.role = select_role(credentials.role)?;
                credentials.email = prompt_email(&authenticator, credentials.role)?;
                credentials.password = prompt_password()?;
            }
            None => return Ok(()),
        }
    };

    msg_success!(Message::LoginSuccess(role.label().to_string()));
    if !config.seed_sample_data() {
        msg_info!(Message::SampleDataDisabled);
    }
    let mut session = Session::new(role, &config);
    navigate(&mut session)?;

    msg_info!(Message::LoggedOut);
    Ok(())
}

/// One authentication attempt. Failures are reported, not returned.
async fn sign_in<A: Authenticator>(authenticator: &A, credentials: &Credentials) -> Option<Role> {
    msg_info!(Message::SigningIn);
    match authenticator.authenticate(credentials).await {
        Ok(role) => Some(role),
        Err(err) => {
            msg_error!(err);
            None
        }
    }
}

fn select_role(default: Role) -> Result<Role> {
    let labels: Vec<&str> = Role::ALL.iter().map(|role| role.label()).collect();
    let current = Role::ALL.iter().position(|role| *role == default).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptRole.to_string())
        .items(&labels)
        .default(current)
        .interact()?;
    Ok(Role::ALL[selection])
}

/// Email input, pre-filled with the role's configured account.
fn prompt_email(authenticator: &AccountAuthenticator, role: Role) -> Result<String> {
    let initial = authenticator.account_for(role).map(|account| account.email.clone()).unwrap_or_default();
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .with_initial_text(initial)
        .validate_with(|input: &String| -> Result<(), String> {
            if is_valid_email(input.trim()) {
                Ok(())
            } else {
                Err(Message::InvalidEmail.to_string())
            }
        })
        .interact_text()?
        .trim()
        .to_string())
}

fn prompt_password() -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.chars().count() >= MIN_PASSWORD_LEN {
                Ok(())
            } else {
                Err(Message::PasswordTooShort(MIN_PASSWORD_LEN).to_string())
            }
        })
        .interact()?)
}

/// Sidebar loop of a signed-in session; returns on logout.
fn navigate(session: &mut Session) -> Result<()> {
    dashboard::show(session)?;

    let items = session.role.nav_items();
    let mut titles: Vec<&str> = items.iter().map(|item| item.title).collect();
    let logout = Message::MenuLogout.to_string();
    titles.push(&logout);

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNavigate.to_string())
            .items(&titles)
            .default(0)
            .interact()?;

        let Some(item) = items.get(selection) else {
            return Ok(());
        };
        tracing::debug!(href = %item.href, "navigating");
        open(session, &item.href)?;
    }
}

/// Renders the page behind a sidebar link.
fn open(session: &mut Session, href: &str) -> Result<()> {
    match Route::parse(href) {
        Route::Dashboard(_) => dashboard::show(session),
        Route::Notices(_) => notices::interactive(session),
        Route::LeaveApproval | Route::StudentLeave => leave::interactive(session),
        Route::StudentExams | Route::TeacherExams => exams::interactive(session),
        Route::StudentMaterials | Route::TeacherMaterials => materials::interactive(session),
        Route::StudentAttendance => attendance::show(session),
        Route::StudentRoutine => routine::interactive(session),
        Route::StudentFeedback => feedback::interactive(session),
        Route::Login | Route::NotFound => {
            msg_warning!(Message::PageNotFound(href.to_string()));
            Ok(())
        }
    }
}
