pub mod attendance;
pub mod dashboard;
pub mod exams;
pub mod feedback;
pub mod init;
pub mod leave;
pub mod login;
pub mod materials;
pub mod notices;
pub mod routine;

use crate::libs::config::Config;
use crate::libs::error::CampusError;
use crate::libs::messages::Message;
use crate::libs::role::Role;
use crate::libs::session::Session;
use crate::store::Transition;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in and browse the dashboard interactively")]
    Login(login::LoginArgs),
    #[command(about = "Show the dashboard summary for a role")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Browse, search and post notices")]
    Notices(notices::NoticesArgs),
    #[command(about = "Apply for leave or review leave requests")]
    Leave(leave::LeaveArgs),
    #[command(about = "Browse, upload and delete study materials")]
    Materials(materials::MaterialsArgs),
    #[command(about = "Schedule, run and grade exams")]
    Exams(exams::ExamsArgs),
    #[command(about = "Submit and review course feedback")]
    Feedback(feedback::FeedbackArgs),
    #[command(about = "Show course and daily attendance")]
    Attendance,
    #[command(about = "Show the weekly class routine")]
    Routine(routine::RoutineArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Notices(args) => notices::cmd(args),
            Commands::Leave(args) => leave::cmd(args),
            Commands::Materials(args) => materials::cmd(args),
            Commands::Exams(args) => exams::cmd(args),
            Commands::Feedback(args) => feedback::cmd(args),
            Commands::Attendance => attendance::cmd(),
            Commands::Routine(args) => routine::cmd(args),
        }
    }
}

/// Fresh session for one command invocation.
fn open_session(role: Role) -> Result<Session> {
    let config = Config::read()?;
    if !config.seed_sample_data() {
        msg_info!(Message::SampleDataDisabled);
    }
    msg_debug!(format!("opening {} session", role));
    Ok(Session::new(role, &config))
}

/// Reports an action the role's views do not offer. Returns whether the
/// action may proceed.
fn allowed(role: Role, roles: &[Role], action: &'static str) -> bool {
    if roles.contains(&role) {
        return true;
    }
    msg_error!(CampusError::Forbidden { role, action });
    false
}

/// Empty-state line for a filtered listing.
fn report_empty(kind: &str, search: &str) {
    if search.trim().is_empty() {
        msg_info!(Message::NothingFound(kind.to_string()));
    } else {
        msg_info!(Message::NothingFoundForSearch(kind.to_string(), search.trim().to_string()));
    }
}

/// Reports the outcome of a status change. Refusals are already reported
/// as warnings by the store.
fn report_transition<R>(outcome: Transition<'_, R>, kind: &str, id: &str, on_applied: impl FnOnce(&R)) {
    match outcome {
        Transition::Applied(record) => on_applied(record),
        Transition::NotFound => msg_warning!(Message::RecordNotFound(kind.to_string(), id.to_string())),
        Transition::Refused(_) => {}
    }
}

/// Parses a form date. Empty input means "not filled in"; an unparsable
/// value is reported and treated the same way.
fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            msg_error!(Message::InvalidDate(value.to_string()));
            None
        }
    }
}

/// Free-text form field; may be left empty so validation can report it.
fn prompt_text(prompt: Message) -> Result<String> {
    prompt_text_with(prompt, "")
}

/// Same as [`prompt_text`], pre-filled with the previous entry.
fn prompt_text_with(prompt: Message, initial: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

/// After a rejected form: offer to edit it again with its values kept.
fn retry_form() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptRetry.to_string())
        .default(true)
        .interact()?)
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
