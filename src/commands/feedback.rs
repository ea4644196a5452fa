use super::{allowed, open_session, prompt_text, prompt_text_with, report_empty, retry_form};
use crate::{
    libs::{filter::Criteria, formatter, messages::Message, role::Role, session::Session, view::View},
    msg_error, msg_info, msg_print, msg_success,
    store::feedback::NewFeedback,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

const REVIEWERS: &[Role] = &[Role::Student];

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    command: Option<FeedbackCommand>,
}

#[derive(Debug, Subcommand)]
enum FeedbackCommand {
    /// Show submitted feedback
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Rate a course
    Submit {
        /// Course id from the course catalog (1-5)
        #[arg(long, default_value = "")]
        course: String,
        /// 1 to 5 stars
        #[arg(long, default_value_t = 0)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

pub fn cmd(args: FeedbackArgs) -> Result<()> {
    let mut session = open_session(Role::Student)?;
    match args.command {
        Some(FeedbackCommand::List { search }) => handle_list(&session, &search),
        Some(FeedbackCommand::Submit { course, rating, comment }) => {
            let form = NewFeedback {
                course_id: course,
                rating,
                comment,
            };
            handle_submit(&mut session, form).map(|_| ())
        }
        None => interactive(&mut session),
    }
}

fn handle_list(session: &Session, search: &str) -> Result<()> {
    msg_print!(Message::FeedbackHeader, true);
    let entries = session.feedbacks.find(&Criteria::search(search.trim()));
    if entries.is_empty() {
        report_empty("feedback", search);
        return Ok(());
    }
    View::feedback(&entries)?;
    if let Some(average) = session.feedbacks.average_rating() {
        msg_info!(Message::AverageRating(format!("{:.1}", average)));
    }
    Ok(())
}

fn handle_submit(session: &mut Session, form: NewFeedback) -> Result<bool> {
    if !allowed(session.role, REVIEWERS, "submit feedback") {
        return Ok(false);
    }
    match session.feedbacks.submit(form, &session.courses) {
        Ok(entry) => {
            msg_success!(Message::FeedbackSubmitted(entry.course.clone()));
            Ok(true)
        }
        Err(err) => {
            msg_error!(err);
            Ok(false)
        }
    }
}

pub fn interactive(session: &mut Session) -> Result<()> {
    let options = ["Submit feedback", "Feedback history", "Search", "Back"];
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match options[selection] {
            "Submit feedback" => submit_form(session)?,
            "Feedback history" => handle_list(session, "")?,
            "Search" => {
                let search = prompt_text(Message::PromptSearch)?;
                handle_list(session, &search)?;
            }
            _ => return Ok(()),
        }
    }
}

fn submit_form(session: &mut Session) -> Result<()> {
    let mut form = NewFeedback::default();
    loop {
        let names: Vec<String> = session
            .courses
            .iter()
            .map(|course| format!("{} ({})", course.name, course.teacher))
            .collect();
        let current = session
            .courses
            .iter()
            .position(|course| course.id == form.course_id)
            .unwrap_or(0);
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFeedbackCourse.to_string())
            .items(&names)
            .default(current)
            .interact_opt()?;
        form.course_id = picked
            .and_then(|index| session.courses.get(index))
            .map(|course| course.id.clone())
            .unwrap_or_default();

        let stars: Vec<String> = (1..=5u8)
            .map(|rating| format!("{} {}", formatter::format_stars(rating), formatter::rating_label(rating)))
            .collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRating.to_string())
            .items(&stars)
            .default(usize::from(form.rating.saturating_sub(1)))
            .interact_opt()?;
        form.rating = picked.map(|index| index as u8 + 1).unwrap_or(0);

        form.comment = prompt_text_with(Message::PromptFeedbackComment, &form.comment)?;

        if handle_submit(session, form.clone())? || !retry_form()? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use crate::libs::workflow::FeedbackStatus;

    #[test]
    fn submission_copies_course_and_teacher() {
        let mut session = Session::new(Role::Student, &Config::default());
        let count = session.feedbacks.all().len();
        let form = NewFeedback {
            course_id: "3".into(),
            rating: 4,
            comment: "Clear explanations of dynamic programming".into(),
        };
        assert!(handle_submit(&mut session, form).unwrap());

        let newest = &session.feedbacks.all()[0];
        assert_eq!(session.feedbacks.all().len(), count + 1);
        assert_eq!(newest.course, "Algorithms");
        assert_eq!(newest.teacher, "Prof. Smith");
        assert_eq!(newest.status, FeedbackStatus::Submitted);
    }

    #[test]
    fn incomplete_form_is_not_stored() {
        let mut session = Session::new(Role::Student, &Config::default());
        let count = session.feedbacks.all().len();
        let form = NewFeedback {
            course_id: "1".into(),
            rating: 0,
            comment: String::new(),
        };
        assert!(!handle_submit(&mut session, form).unwrap());
        assert_eq!(session.feedbacks.all().len(), count);
    }
}
