use super::{allowed, open_session, optional, parse_date_input, prompt_text, prompt_text_with, report_empty, report_transition, retry_form};
use crate::{
    libs::{filter::Criteria, filter::Selector, messages::Message, role::Role, session::Session, view::View},
    msg_error, msg_print, msg_success,
    store::leaves::{LeaveRequest, LeaveTab, NewLeave, LEAVE_TYPES},
    store::seed::DEPARTMENT,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

const APPLICANTS: &[Role] = &[Role::Student, Role::Teacher];
const REVIEWERS: &[Role] = &[Role::Hod];

#[derive(Debug, Args)]
pub struct LeaveArgs {
    #[arg(short, long, value_enum)]
    role: Role,
    #[command(subcommand)]
    command: Option<LeaveCommand>,
}

#[derive(Debug, Subcommand)]
enum LeaveCommand {
    /// List leave requests
    List {
        /// pending, approved, rejected or all
        #[arg(long, default_value = "all")]
        status: Selector,
        /// pending or history
        #[arg(long)]
        tab: Option<LeaveTab>,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Apply for leave (students and teachers)
    Apply {
        #[arg(long = "type", default_value = "")]
        leave_type: String,
        /// First day, YYYY-MM-DD
        #[arg(long, default_value = "")]
        from: String,
        /// Last day, YYYY-MM-DD
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        reason: String,
        /// File name of a supporting document
        #[arg(long)]
        attachment: Option<String>,
    },
    /// Approve a pending request (hod)
    Approve { id: String },
    /// Reject a pending request (hod)
    Reject {
        id: String,
        #[arg(long)]
        comment: Option<String>,
    },
}

/// Raw form input, kept between attempts so a rejected form can be edited.
#[derive(Debug, Default)]
struct LeaveDraft {
    leave_type: String,
    from: String,
    to: String,
    reason: String,
    attachment: String,
}

impl LeaveDraft {
    fn to_form(&self, session: &Session) -> NewLeave {
        NewLeave {
            applicant: session.user.clone(),
            department: DEPARTMENT.to_string(),
            leave_type: self.leave_type.trim().to_string(),
            from_date: parse_date_input(&self.from),
            to_date: parse_date_input(&self.to),
            reason: self.reason.clone(),
            attachment: optional(self.attachment.clone()),
        }
    }
}

pub fn cmd(args: LeaveArgs) -> Result<()> {
    let mut session = open_session(args.role)?;
    match args.command {
        Some(LeaveCommand::List { status, tab, search }) => handle_list(&session, status, tab, &search),
        Some(LeaveCommand::Apply {
            leave_type,
            from,
            to,
            reason,
            attachment,
        }) => {
            let draft = LeaveDraft {
                leave_type,
                from,
                to,
                reason,
                attachment: attachment.unwrap_or_default(),
            };
            handle_apply(&mut session, &draft).map(|_| ())
        }
        Some(LeaveCommand::Approve { id }) => handle_approve(&mut session, &id),
        Some(LeaveCommand::Reject { id, comment }) => handle_reject(&mut session, &id, comment),
        None => interactive(&mut session),
    }
}

fn handle_list(session: &Session, status: Selector, tab: Option<LeaveTab>, search: &str) -> Result<()> {
    let criteria = Criteria {
        status,
        search: search.trim().to_string(),
        ..Default::default()
    };
    let requests: Vec<&LeaveRequest> = match tab {
        Some(tab) => session
            .leaves
            .tab(tab)
            .into_iter()
            .filter(|request| criteria.matches(*request))
            .collect(),
        None => session.leaves.find(&criteria),
    };

    let header = match tab {
        Some(LeaveTab::Pending) => "Pending",
        Some(LeaveTab::History) => "History",
        None => "All",
    };
    msg_print!(Message::LeaveHeader(header.to_string()), true);
    if requests.is_empty() {
        report_empty("leave requests", search);
        return Ok(());
    }
    View::leave_requests(&requests)
}

/// Returns whether the application was stored.
fn handle_apply(session: &mut Session, draft: &LeaveDraft) -> Result<bool> {
    if !allowed(session.role, APPLICANTS, "apply for leave") {
        return Ok(false);
    }
    let form = draft.to_form(session);
    match session.leaves.apply(form) {
        Ok(request) => {
            tracing::debug!(id = %request.id, days = request.days(), "leave application stored");
            msg_success!(Message::LeaveSubmitted);
            Ok(true)
        }
        Err(err) => {
            msg_error!(err);
            Ok(false)
        }
    }
}

fn handle_approve(session: &mut Session, id: &str) -> Result<()> {
    if !allowed(session.role, REVIEWERS, "approve leave") {
        return Ok(());
    }
    report_transition(session.leaves.approve(id), "leave request", id, |request| {
        msg_success!(Message::LeaveApproved(request.applicant.clone()))
    });
    Ok(())
}

fn handle_reject(session: &mut Session, id: &str, comment: Option<String>) -> Result<()> {
    if !allowed(session.role, REVIEWERS, "reject leave") {
        return Ok(());
    }
    let comment = comment.and_then(optional);
    report_transition(session.leaves.reject(id, comment), "leave request", id, |request| {
        msg_success!(Message::LeaveRejected(request.applicant.clone()))
    });
    Ok(())
}

pub fn interactive(session: &mut Session) -> Result<()> {
    let options: Vec<&str> = match session.role {
        Role::Hod => vec!["Pending requests", "Approve request", "Reject request", "History", "Search", "Back"],
        Role::Student | Role::Teacher => vec!["My requests", "Apply for leave", "Back"],
        Role::Admin => vec!["All requests", "Back"],
    };

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match options[selection] {
            "Pending requests" => handle_list(session, Selector::All, Some(LeaveTab::Pending), "")?,
            "History" => handle_list(session, Selector::All, Some(LeaveTab::History), "")?,
            "My requests" | "All requests" => handle_list(session, Selector::All, None, "")?,
            "Search" => {
                let search = prompt_text(Message::PromptSearch)?;
                handle_list(session, Selector::All, None, &search)?;
            }
            "Approve request" => {
                if let Some(id) = select_pending(session)? {
                    handle_approve(session, &id)?;
                }
            }
            "Reject request" => {
                if let Some(id) = select_pending(session)? {
                    let comment = prompt_text(Message::PromptRejectComment)?;
                    handle_reject(session, &id, Some(comment))?;
                }
            }
            "Apply for leave" => apply_form(session)?,
            _ => return Ok(()),
        }
    }
}

/// Application form; a rejected submission can be edited and resent.
fn apply_form(session: &mut Session) -> Result<()> {
    let mut draft = LeaveDraft::default();
    loop {
        let current = LEAVE_TYPES.iter().position(|kind| *kind == draft.leave_type).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLeaveType.to_string())
            .items(LEAVE_TYPES)
            .default(current)
            .interact()?;
        draft.leave_type = LEAVE_TYPES[selection].to_string();
        draft.from = prompt_text_with(Message::PromptFromDate, &draft.from)?;
        draft.to = prompt_text_with(Message::PromptToDate, &draft.to)?;
        draft.reason = prompt_text_with(Message::PromptLeaveReason, &draft.reason)?;
        draft.attachment = prompt_text_with(Message::PromptAttachment, &draft.attachment)?;

        if handle_apply(session, &draft)? || !retry_form()? {
            return Ok(());
        }
    }
}

fn select_pending(session: &Session) -> Result<Option<String>> {
    let pending = session.leaves.pending();
    if pending.is_empty() {
        report_empty("pending leave requests", "");
        return Ok(None);
    }
    let items: Vec<String> = pending
        .iter()
        .map(|request| {
            format!(
                "{} - {} ({} to {})",
                request.applicant, request.leave_type, request.from_date, request.to_date
            )
        })
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectLeave.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(pending[selection].id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use crate::libs::workflow::LeaveStatus;

    #[test]
    fn draft_keeps_unparsed_dates_out_of_the_form() {
        let session = Session::new(Role::Student, &Config::default());
        let draft = LeaveDraft {
            leave_type: "Medical".into(),
            from: "2025-05-02".into(),
            to: "next friday".into(),
            reason: "Surgery".into(),
            attachment: "  ".into(),
        };
        let form = draft.to_form(&session);
        assert!(form.from_date.is_some());
        assert!(form.to_date.is_none());
        assert!(form.attachment.is_none());
        assert_eq!(form.department, DEPARTMENT);
    }

    #[test]
    fn hod_decisions_leave_pending_queue() {
        let mut session = Session::new(Role::Hod, &Config::default());
        let pending = session.leaves.pending().len();

        handle_approve(&mut session, "1").unwrap();
        handle_reject(&mut session, "2", Some("No cover available".into())).unwrap();

        assert_eq!(session.leaves.pending().len(), pending - 2);
        assert_eq!(session.leaves.get("1").map(|r| r.status), Some(LeaveStatus::Approved));
        let rejected = session.leaves.get("2").unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.comment.as_deref(), Some("No cover available"));
    }

    #[test]
    fn students_cannot_review_requests() {
        let mut session = Session::new(Role::Student, &Config::default());
        let before: Vec<LeaveStatus> = session.leaves.all().iter().map(|r| r.status).collect();
        handle_approve(&mut session, "1").unwrap();
        let after: Vec<LeaveStatus> = session.leaves.all().iter().map(|r| r.status).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn apply_stores_pending_request_for_session_user() {
        let mut session = Session::new(Role::Student, &Config::default());
        let count = session.leaves.all().len();
        let draft = LeaveDraft {
            leave_type: "Personal".into(),
            from: "2025-06-01".into(),
            to: "2025-06-03".into(),
            reason: "Sister's wedding".into(),
            attachment: String::new(),
        };
        assert!(handle_apply(&mut session, &draft).unwrap());
        let newest = &session.leaves.all()[0];
        assert_eq!(session.leaves.all().len(), count + 1);
        assert_eq!(newest.status, LeaveStatus::Pending);
        assert_eq!(newest.applicant, session.user);
        assert_eq!(newest.days(), 3);
    }
}
