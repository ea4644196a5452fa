use super::open_session;
use crate::{
    libs::{messages::Message, role::Role, routine::Week, session::Session, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct RoutineArgs {
    /// current or next
    #[arg(short, long, default_value = "current")]
    week: Week,
}

pub fn cmd(args: RoutineArgs) -> Result<()> {
    let session = open_session(Role::Student)?;
    show(&session, args.week)
}

/// One week of classes. Today is only highlighted in the current week.
pub fn show(session: &Session, week: Week) -> Result<()> {
    msg_print!(Message::RoutineHeader(week.label().to_string()), true);
    let today = match week {
        Week::Current => Some(Local::now().weekday()),
        Week::Next => None,
    };
    View::routine(session.routine.week(week), today, &Message::NoClassesScheduled.to_string())
}

pub fn interactive(session: &Session) -> Result<()> {
    let options = [Week::Current.label(), Week::Next.label(), "Back"];
    let mut current = 0;
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(current)
            .interact()?;

        match selection {
            0 => show(session, Week::Current)?,
            1 => show(session, Week::Next)?,
            _ => return Ok(()),
        }
        current = 1 - selection;
    }
}
