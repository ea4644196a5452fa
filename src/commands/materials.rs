use super::{allowed, open_session, prompt_text, prompt_text_with, report_empty, retry_form};
use crate::{
    libs::{filter::Selector, messages::Message, role::Role, session::Session, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
    store::materials::{MaterialType, NewMaterial, Upload, SUBJECTS},
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use std::fs;
use std::path::Path;

const UPLOADERS: &[Role] = &[Role::Teacher];

#[derive(Debug, Args)]
pub struct MaterialsArgs {
    #[arg(short, long, value_enum)]
    role: Role,
    #[command(subcommand)]
    command: Option<MaterialsCommand>,
}

#[derive(Debug, Subcommand)]
enum MaterialsCommand {
    /// List materials
    List {
        /// notes, video, document or all
        #[arg(long = "type", default_value = "all")]
        kind: Selector,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Upload a material (teachers)
    Upload {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// notes, video or document
        #[arg(long = "type", default_value = "")]
        kind: String,
        #[arg(long, default_value = "")]
        subject: String,
        /// Path of the file to upload
        #[arg(long)]
        file: Option<String>,
    },
    /// Delete a material (teachers)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Default)]
struct MaterialDraft {
    title: String,
    description: String,
    kind: String,
    subject: String,
    file: String,
}

impl MaterialDraft {
    fn to_form(&self, session: &Session) -> NewMaterial {
        NewMaterial {
            title: self.title.clone(),
            description: self.description.clone(),
            material_type: self.kind.clone(),
            subject: self.subject.trim().to_string(),
            file: pick_file(&self.file),
            uploaded_by: Some(session.user.clone()),
        }
    }
}

pub fn cmd(args: MaterialsArgs) -> Result<()> {
    let mut session = open_session(args.role)?;
    match args.command {
        Some(MaterialsCommand::List { kind, search }) => handle_list(&session, &kind, &search),
        Some(MaterialsCommand::Upload {
            title,
            description,
            kind,
            subject,
            file,
        }) => {
            let draft = MaterialDraft {
                title,
                description,
                kind,
                subject,
                file: file.unwrap_or_default(),
            };
            handle_upload(&mut session, &draft).map(|_| ())
        }
        Some(MaterialsCommand::Delete { id, yes }) => handle_delete(&mut session, &id, yes),
        None => interactive(&mut session),
    }
}

/// Reads the picked file's name and size. An unreadable path counts as no
/// file picked.
fn pick_file(path: &str) -> Option<Upload> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            let file_name = Path::new(path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string());
            Some(Upload {
                file_name,
                size_bytes: meta.len(),
            })
        }
        _ => {
            msg_error!(Message::FileNotReadable(path.to_string()));
            None
        }
    }
}

fn handle_list(session: &Session, kind: &Selector, search: &str) -> Result<()> {
    let tab = match kind {
        Selector::All => "All".to_string(),
        Selector::Only(value) => value
            .parse::<MaterialType>()
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|_| value.clone()),
    };
    msg_print!(Message::MaterialsHeader(tab), true);

    let materials = session.materials.browse(kind, search.trim());
    if materials.is_empty() {
        report_empty("materials", search);
        return Ok(());
    }
    View::materials(&materials)
}

fn handle_upload(session: &mut Session, draft: &MaterialDraft) -> Result<bool> {
    if !allowed(session.role, UPLOADERS, "upload material") {
        return Ok(false);
    }
    let form = draft.to_form(session);
    match session.materials.upload(form) {
        Ok(material) => {
            msg_success!(Message::MaterialUploaded(material.title.clone()));
            Ok(true)
        }
        Err(err) => {
            msg_error!(err);
            Ok(false)
        }
    }
}

/// Deletion asks for confirmation unless `confirmed` is set.
fn handle_delete(session: &mut Session, id: &str, confirmed: bool) -> Result<()> {
    if !allowed(session.role, UPLOADERS, "delete material") {
        return Ok(());
    }
    let title = match session.materials.get(id) {
        Some(material) => material.title.clone(),
        None => {
            msg_warning!(Message::RecordNotFound("material".to_string(), id.to_string()));
            return Ok(());
        }
    };

    let confirmed = confirmed
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteMaterial(title).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if let Some(removed) = session.materials.delete(id) {
        msg_success!(Message::MaterialDeleted(removed.title));
    }
    Ok(())
}

pub fn interactive(session: &mut Session) -> Result<()> {
    let mut options = vec!["Browse by type", "Search"];
    if session.role == Role::Teacher {
        options.extend(["Upload material", "Delete material"]);
    }
    options.push("Back");

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&options)
            .default(0)
            .interact()?;

        match options[selection] {
            "Browse by type" => {
                let kind = select_type_tab()?;
                handle_list(session, &kind, "")?;
            }
            "Search" => {
                let search = prompt_text(Message::PromptSearch)?;
                handle_list(session, &Selector::All, &search)?;
            }
            "Upload material" => upload_form(session)?,
            "Delete material" => {
                if let Some(id) = select_material(session)? {
                    handle_delete(session, &id, false)?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn upload_form(session: &mut Session) -> Result<()> {
    let mut draft = MaterialDraft::default();
    loop {
        draft.title = prompt_text_with(Message::PromptMaterialTitle, &draft.title)?;
        draft.description = prompt_text_with(Message::PromptMaterialDescription, &draft.description)?;

        let labels: Vec<&str> = MaterialType::ALL.iter().map(|kind| kind.label()).collect();
        let current = MaterialType::ALL
            .iter()
            .position(|kind| kind.as_str() == draft.kind)
            .unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMaterialType.to_string())
            .items(&labels)
            .default(current)
            .interact()?;
        draft.kind = MaterialType::ALL[selection].as_str().to_string();

        let current = SUBJECTS.iter().position(|subject| *subject == draft.subject).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSubject.to_string())
            .items(SUBJECTS)
            .default(current)
            .interact()?;
        draft.subject = SUBJECTS[selection].to_string();

        draft.file = prompt_text_with(Message::PromptMaterialFile, &draft.file)?;

        if handle_upload(session, &draft)? || !retry_form()? {
            return Ok(());
        }
    }
}

fn select_type_tab() -> Result<Selector> {
    let mut labels = vec!["All"];
    labels.extend(MaterialType::ALL.iter().map(|kind| kind.label()));
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMaterialType.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Selector::All,
        n => Selector::only(MaterialType::ALL[n - 1].as_str()),
    })
}

fn select_material(session: &Session) -> Result<Option<String>> {
    let materials = session.materials.all();
    if materials.is_empty() {
        report_empty("materials", "");
        return Ok(None);
    }
    let items: Vec<String> = materials
        .iter()
        .map(|material| format!("{} ({}, {})", material.title, material.subject, material.material_type.label()))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectMaterial.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(materials[selection].id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::config::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn picked_file_reports_name_and_size() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 2048]).unwrap();
        let upload = pick_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(upload.size_bytes, 2048);
        assert!(!upload.file_name.is_empty());
    }

    #[test]
    fn missing_file_is_not_picked() {
        assert!(pick_file("").is_none());
        assert!(pick_file("/definitely/not/here.pdf").is_none());
    }

    #[test]
    fn teacher_uploads_and_deletes() {
        let mut session = Session::new(Role::Teacher, &Config::default());
        let count = session.materials.all().len();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"lecture notes").unwrap();

        let draft = MaterialDraft {
            title: "Normal Forms".into(),
            description: "1NF to BCNF".into(),
            kind: "notes".into(),
            subject: "Database Systems".into(),
            file: file.path().to_string_lossy().into_owned(),
        };
        assert!(handle_upload(&mut session, &draft).unwrap());
        assert_eq!(session.materials.all().len(), count + 1);

        let id = session.materials.all()[0].id.clone();
        assert_eq!(session.materials.all()[0].uploaded_by.as_deref(), Some(session.user.as_str()));
        handle_delete(&mut session, &id, true).unwrap();
        assert_eq!(session.materials.all().len(), count);
        assert!(session.materials.get(&id).is_none());
    }

    #[test]
    fn students_cannot_upload() {
        let mut session = Session::new(Role::Student, &Config::default());
        let count = session.materials.all().len();
        let draft = MaterialDraft {
            title: "x".into(),
            ..Default::default()
        };
        assert!(!handle_upload(&mut session, &draft).unwrap());
        assert_eq!(session.materials.all().len(), count);
    }
}
