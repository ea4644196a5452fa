use super::{allowed, open_session, optional, parse_date_input, prompt_text, prompt_text_with, report_empty, report_transition, retry_form};
use crate::{
    libs::{messages::Message, role::Role, session::Session, view::View},
    msg_error, msg_info, msg_print, msg_success,
    store::exams::{Exam, ExamTab, ExamType, NewExam},
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

const EXAMINERS: &[Role] = &[Role::Teacher];

#[derive(Debug, Args)]
pub struct ExamsArgs {
    #[arg(short, long, value_enum)]
    role: Role,
    #[command(subcommand)]
    command: Option<ExamsCommand>,
}

#[derive(Debug, Subcommand)]
enum ExamsCommand {
    /// List exams, one table per tab
    List {
        /// scheduled, in-progress, completed or upcoming
        #[arg(long)]
        tab: Option<ExamTab>,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Schedule an exam (teachers)
    Schedule {
        #[arg(long, default_value = "")]
        course: String,
        #[arg(long, default_value = "")]
        title: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long, default_value = "")]
        duration: String,
        #[arg(long, default_value = "")]
        location: String,
        /// midterm, final or quiz
        #[arg(long = "type", default_value = "")]
        exam_type: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Move a scheduled exam to in progress (teachers)
    Start { id: String },
    /// Mark an exam in progress as completed (teachers)
    Complete { id: String },
    /// Record marks for a completed exam (teachers)
    Grade {
        id: String,
        #[arg(long)]
        marks: u32,
        #[arg(long, default_value_t = 100)]
        total: u32,
    },
}

#[derive(Debug, Default)]
struct ExamDraft {
    course: String,
    title: String,
    date: String,
    time: String,
    duration: String,
    location: String,
    exam_type: String,
    notes: String,
}

impl ExamDraft {
    fn to_form(&self) -> NewExam {
        NewExam {
            course: self.course.trim().to_string(),
            title: self.title.trim().to_string(),
            date: parse_date_input(&self.date),
            time: self.time.trim().to_string(),
            duration: self.duration.trim().to_string(),
            location: self.location.trim().to_string(),
            exam_type: self.exam_type.trim().to_string(),
            notes: optional(self.notes.clone()),
        }
    }
}

pub fn cmd(args: ExamsArgs) -> Result<()> {
    let mut session = open_session(args.role)?;
    match args.command {
        Some(ExamsCommand::List { tab, search }) => handle_list(&session, tab, &search),
        Some(ExamsCommand::Schedule {
            course,
            title,
            date,
            time,
            duration,
            location,
            exam_type,
            notes,
        }) => {
            let draft = ExamDraft {
                course,
                title,
                date,
                time,
                duration,
                location,
                exam_type,
                notes: notes.unwrap_or_default(),
            };
            handle_schedule(&mut session, &draft).map(|_| ())
        }
        Some(ExamsCommand::Start { id }) => handle_start(&mut session, &id),
        Some(ExamsCommand::Complete { id }) => handle_complete(&mut session, &id),
        Some(ExamsCommand::Grade { id, marks, total }) => handle_grade(&mut session, &id, marks, total),
        None => interactive(&mut session),
    }
}

fn tab_title(tab: ExamTab) -> &'static str {
    match tab {
        ExamTab::Scheduled => "Scheduled",
        ExamTab::InProgress => "In Progress",
        ExamTab::Completed => "Completed",
        ExamTab::Upcoming => "Upcoming",
    }
}

/// Tabs of the role's exam view, in display order.
fn tabs_for(role: Role) -> &'static [ExamTab] {
    match role {
        Role::Student => &[ExamTab::Upcoming, ExamTab::Completed],
        _ => &[ExamTab::Scheduled, ExamTab::InProgress, ExamTab::Completed],
    }
}

fn handle_list(session: &Session, tab: Option<ExamTab>, search: &str) -> Result<()> {
    let tabs = match tab {
        Some(tab) => vec![tab],
        None => tabs_for(session.role).to_vec(),
    };
    for tab in tabs {
        msg_print!(Message::ExamsHeader(tab_title(tab).to_string()), true);
        let exams = session.exams.tab(tab, search.trim());
        if exams.is_empty() {
            report_empty("exams", search);
            continue;
        }
        View::exams(&exams)?;
    }

    if session.role == Role::Student {
        if let Some(average) = session.exams.average_percentage() {
            msg_info!(Message::AverageScore(average));
        }
    }
    Ok(())
}

fn handle_schedule(session: &mut Session, draft: &ExamDraft) -> Result<bool> {
    if !allowed(session.role, EXAMINERS, "schedule exam") {
        return Ok(false);
    }
    match session.exams.schedule(draft.to_form()) {
        Ok(exam) => {
            msg_success!(Message::ExamScheduled(exam.title.clone()));
            Ok(true)
        }
        Err(err) => {
            msg_error!(err);
            Ok(false)
        }
    }
}

fn handle_start(session: &mut Session, id: &str) -> Result<()> {
    if !allowed(session.role, EXAMINERS, "start exam") {
        return Ok(());
    }
    report_transition(session.exams.start(id), "exam", id, |exam| {
        msg_success!(Message::ExamStarted(exam.title.clone()))
    });
    Ok(())
}

fn handle_complete(session: &mut Session, id: &str) -> Result<()> {
    if !allowed(session.role, EXAMINERS, "complete exam") {
        return Ok(());
    }
    report_transition(session.exams.complete(id), "exam", id, |exam| {
        msg_success!(Message::ExamCompleted(exam.title.clone()))
    });
    Ok(())
}

fn handle_grade(session: &mut Session, id: &str, marks: u32, total: u32) -> Result<()> {
    if !allowed(session.role, EXAMINERS, "grade exam") {
        return Ok(());
    }
    match session.exams.grade(id, marks, total) {
        Ok(outcome) => report_transition(outcome, "exam", id, |exam| {
            let grade = exam.result.as_ref().map(|result| result.grade.clone()).unwrap_or_default();
            msg_success!(Message::ExamGraded(exam.title.clone(), grade))
        }),
        Err(err) => msg_error!(err),
    }
    Ok(())
}

pub fn interactive(session: &mut Session) -> Result<()> {
    let options: Vec<&str> = match session.role {
        Role::Teacher => vec![
            "Show tab",
            "Search",
            "Schedule exam",
            "Start exam",
            "Complete exam",
            "Grade exam",
            "Back",
        ],
        _ => vec!["Show tab", "Search", "Back"],
    };

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match options[selection] {
            "Show tab" => {
                let tabs = tabs_for(session.role);
                let titles: Vec<&str> = tabs.iter().map(|tab| tab_title(*tab)).collect();
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .items(&titles)
                    .default(0)
                    .interact()?;
                handle_list(session, Some(tabs[picked]), "")?;
            }
            "Search" => {
                let search = prompt_text(Message::PromptSearch)?;
                handle_list(session, None, &search)?;
            }
            "Schedule exam" => schedule_form(session)?,
            "Start exam" => {
                if let Some(id) = select_exam(session, ExamTab::Scheduled)? {
                    handle_start(session, &id)?;
                }
            }
            "Complete exam" => {
                if let Some(id) = select_exam(session, ExamTab::InProgress)? {
                    handle_complete(session, &id)?;
                }
            }
            "Grade exam" => {
                if let Some(id) = select_exam(session, ExamTab::Completed)? {
                    let marks: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptMarks.to_string())
                        .interact_text()?;
                    let total: u32 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTotalMarks.to_string())
                        .default(100)
                        .interact_text()?;
                    handle_grade(session, &id, marks, total)?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn schedule_form(session: &mut Session) -> Result<()> {
    let mut draft = ExamDraft::default();
    loop {
        draft.course = prompt_text_with(Message::PromptExamCourse, &draft.course)?;
        draft.title = prompt_text_with(Message::PromptExamTitle, &draft.title)?;
        draft.date = prompt_text_with(Message::PromptExamDate, &draft.date)?;
        draft.time = prompt_text_with(Message::PromptExamTime, &draft.time)?;
        draft.duration = prompt_text_with(Message::PromptExamDuration, &draft.duration)?;
        draft.location = prompt_text_with(Message::PromptExamLocation, &draft.location)?;

        let labels: Vec<&str> = ExamType::ALL.iter().map(|kind| kind.label()).collect();
        let current = ExamType::ALL
            .iter()
            .position(|kind| kind.as_str() == draft.exam_type)
            .unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExamType.to_string())
            .items(&labels)
            .default(current)
            .interact()?;
        draft.exam_type = ExamType::ALL[selection].as_str().to_string();
        draft.notes = prompt_text_with(Message::PromptExamNotes, &draft.notes)?;

        if handle_schedule(session, &draft)? || !retry_form()? {
            return Ok(());
        }
    }
}

/// Picks an exam from one tab, the ones the next action applies to.
fn select_exam(session: &Session, tab: ExamTab) -> Result<Option<String>> {
    let exams: Vec<&Exam> = session
        .exams
        .tab(tab, "")
        .into_iter()
        .filter(|exam| tab != ExamTab::Completed || exam.result.is_none())
        .collect();
    if exams.is_empty() {
        report_empty("exams", "");
        return Ok(None);
    }
    let items: Vec<String> = exams
        .iter()
        .map(|exam| format!("{} - {} ({})", exam.course, exam.title, exam.date))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectExam.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(exams[selection].id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use crate::libs::workflow::ExamStatus;

    fn teacher() -> Session {
        Session::new(Role::Teacher, &Config::default())
    }

    #[test]
    fn exam_runs_from_schedule_to_grade() {
        let mut session = teacher();
        let draft = ExamDraft {
            course: "Algorithms".into(),
            title: "Quiz 3".into(),
            date: "2025-05-30".into(),
            time: "10:00 AM".into(),
            duration: "45 minutes".into(),
            location: "Room 103".into(),
            exam_type: "quiz".into(),
            notes: String::new(),
        };
        assert!(handle_schedule(&mut session, &draft).unwrap());
        let id = session.exams.all()[0].id.clone();

        handle_start(&mut session, &id).unwrap();
        handle_complete(&mut session, &id).unwrap();
        handle_grade(&mut session, &id, 45, 50).unwrap();

        let exam = session.exams.get(&id).unwrap();
        assert_eq!(exam.status, ExamStatus::Graded);
        let result = exam.result.as_ref().unwrap();
        assert_eq!(result.percentage, 90);
        assert_eq!(result.grade, "A+");
        assert!(exam.notes.is_none());
    }

    #[test]
    fn grading_a_scheduled_exam_changes_nothing() {
        let mut session = teacher();
        handle_grade(&mut session, "1", 80, 100).unwrap();
        let exam = session.exams.get("1").unwrap();
        assert_eq!(exam.status, ExamStatus::Scheduled);
        assert!(exam.result.is_none());
    }

    #[test]
    fn marks_above_total_are_rejected() {
        let mut session = teacher();
        handle_grade(&mut session, "4", 120, 100).unwrap();
        assert!(session.exams.get("4").unwrap().result.is_none());
    }

    #[test]
    fn students_see_upcoming_and_completed_tabs() {
        assert_eq!(tabs_for(Role::Student), &[ExamTab::Upcoming, ExamTab::Completed]);
        assert_eq!(tabs_for(Role::Teacher).len(), 3);
    }
}
