use super::{allowed, open_session, prompt_text, report_empty};
use crate::{
    libs::{messages::Message, role::Role, session::Session, view::View},
    msg_error, msg_print, msg_success,
    store::notices::{Board, NewNotice},
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct NoticesArgs {
    #[arg(short, long, value_enum)]
    role: Role,
    /// Board tab: department, admin, academic or campus
    #[arg(short, long)]
    board: Option<Board>,
    #[arg(short, long, default_value = "")]
    search: String,
    #[command(subcommand)]
    command: Option<NoticesCommand>,
}

#[derive(Debug, Subcommand)]
enum NoticesCommand {
    /// Post a notice (admin and hod)
    Post {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "department")]
        board: Board,
        #[arg(long)]
        pinned: bool,
        #[arg(long)]
        attachment: bool,
    },
}

pub fn cmd(args: NoticesArgs) -> Result<()> {
    let mut session = open_session(args.role)?;
    match args.command {
        Some(NoticesCommand::Post {
            title,
            content,
            category,
            board,
            pinned,
            attachment,
        }) => handle_post(
            &mut session,
            NewNotice {
                title,
                content,
                category,
                board,
                is_pinned: pinned,
                has_attachment: attachment,
            },
        ),
        None => handle_list(&session, args.board, &args.search),
    }
}

/// One board, or every board when none is picked.
fn handle_list(session: &Session, board: Option<Board>, search: &str) -> Result<()> {
    let boards = match board {
        Some(board) => vec![board],
        None => Board::ALL.to_vec(),
    };
    let now = Local::now().naive_local();

    for board in boards {
        msg_print!(Message::NoticesHeader(board.title().to_string()), true);
        let notices = session.notices.board(board, search);
        if notices.is_empty() {
            report_empty("notices", search);
            continue;
        }
        View::notices(&notices, &now)?;
    }
    Ok(())
}

fn handle_post(session: &mut Session, form: NewNotice) -> Result<()> {
    if !allowed(session.role, &[Role::Admin, Role::Hod], "post notice") {
        return Ok(());
    }
    match session.notices.post(session.role, form) {
        Ok(notice) => msg_success!(Message::NoticePosted(notice.title.clone())),
        Err(err) => msg_error!(err),
    }
    Ok(())
}

pub fn interactive(session: &mut Session) -> Result<()> {
    let mut options = vec!["Browse board", "Search all boards"];
    if session.role.can_post_notice() {
        options.push("Post notice");
    }
    options.push("Back");

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match options[selection] {
            "Browse board" => {
                let board = select_board()?;
                let search = prompt_text(Message::PromptSearch)?;
                handle_list(session, Some(board), &search)?;
            }
            "Search all boards" => {
                let search = prompt_text(Message::PromptSearch)?;
                let now = Local::now().naive_local();
                let hits = session.notices.search(&search);
                if hits.is_empty() {
                    report_empty("notices", &search);
                } else {
                    View::notices(&hits, &now)?;
                }
            }
            "Post notice" => {
                let form = NewNotice {
                    title: prompt_text(Message::PromptNoticeTitle)?,
                    content: prompt_text(Message::PromptNoticeContent)?,
                    category: prompt_text(Message::PromptNoticeCategory)?,
                    board: select_board()?,
                    is_pinned: Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPinNotice.to_string())
                        .default(false)
                        .interact()?,
                    has_attachment: Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptHasAttachment.to_string())
                        .default(false)
                        .interact()?,
                };
                handle_post(session, form)?;
            }
            _ => return Ok(()),
        }
    }
}

fn select_board() -> Result<Board> {
    let titles: Vec<&str> = Board::ALL.iter().map(|board| board.title()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBoard.to_string())
        .items(&titles)
        .default(0)
        .interact()?;
    Ok(Board::ALL[selection])
}
