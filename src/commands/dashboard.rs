use super::open_session;
use crate::{
    libs::{dashboard, messages::Message, role::Role, session::Session, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(short, long, value_enum)]
    role: Role,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let session = open_session(args.role)?;
    show(&session)
}

/// Summary cards, pinned notices and the sidebar for the session's role.
pub fn show(session: &Session) -> Result<()> {
    msg_print!(Message::DashboardHeader(session.role.label().to_string()), true);
    View::stats(&dashboard::summary(session))?;

    let pinned = session.notices.pinned();
    if !pinned.is_empty() {
        msg_print!(Message::NoticesHeader("Pinned".to_string()), true);
        View::notices(&pinned, &Local::now().naive_local())?;
    }

    msg_print!(Message::NavigationHeader, true);
    View::nav(&session.role.nav_items())?;
    Ok(())
}
