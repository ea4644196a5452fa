//! Study materials uploaded by teachers and browsed by students.
//!
//! Materials are the only record kind that supports physical removal.

use super::table::Table;
use super::Repository;
use crate::libs::error::CampusError;
use crate::libs::filter::{filter, Criteria, Selector};
use crate::libs::formatter::format_file_size;
use crate::libs::record::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subjects offered on the upload form.
pub const SUBJECTS: &[&str] = &["Database Systems", "Data Structures", "Algorithms", "Web Development", "Operating Systems"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Notes,
    Video,
    Document,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [MaterialType::Notes, MaterialType::Video, MaterialType::Document];

    pub fn as_str(self) -> &'static str {
        match self {
            MaterialType::Notes => "notes",
            MaterialType::Video => "video",
            MaterialType::Document => "document",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialType::Notes => "Notes",
            MaterialType::Video => "Video",
            MaterialType::Document => "Document",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        MaterialType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| CampusError::unknown("material type", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub title: String,
    pub description: String,
    pub material_type: MaterialType,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    pub upload_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    pub download_count: u32,
}

impl Record for Material {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.subject]
    }

    fn kind_key(&self) -> Option<&str> {
        Some(self.material_type.as_str())
    }
}

/// The file picked on the upload form. Only its metadata is kept.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct NewMaterial {
    pub title: String,
    pub description: String,
    /// Raw value of the type dropdown; empty when nothing was picked.
    pub material_type: String,
    pub subject: String,
    pub file: Option<Upload>,
    pub uploaded_by: Option<String>,
}

impl NewMaterial {
    fn validate(&self) -> Result<MaterialType, CampusError> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("type", &self.material_type),
            ("subject", &self.subject),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if self.file.is_none() {
            missing.push("file");
        }
        if !missing.is_empty() {
            return Err(CampusError::Validation(missing));
        }
        self.material_type.parse()
    }
}

pub struct Materials<S = Table<Material>> {
    store: S,
}

impl Materials {
    pub fn seeded(rows: Vec<Material>) -> Self {
        Self::with_store(Table::with_rows(rows))
    }
}

impl<S: Repository<Material>> Materials<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> &[Material] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&Material> {
        self.store.get(id)
    }

    pub fn upload(&mut self, form: NewMaterial) -> Result<&Material, CampusError> {
        let material_type = form.validate()?;
        let size = form.file.as_ref().map(|file| format_file_size(file.size_bytes));

        let material = Material {
            id: String::new(),
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            material_type,
            subject: form.subject,
            uploaded_by: form.uploaded_by,
            upload_date: Local::now().date_naive(),
            file_size: size,
            download_count: 0,
        };
        Ok(self.store.create(material))
    }

    /// Removes a material. Deleting an unknown id does nothing.
    pub fn delete(&mut self, id: &str) -> Option<Material> {
        self.store.remove(id)
    }

    /// Type tab (or `all`) combined with the search box.
    pub fn browse(&self, kind: &Selector, search: &str) -> Vec<&Material> {
        let criteria = Criteria {
            kind: kind.clone(),
            search: search.to_string(),
            ..Default::default()
        };
        filter(self.store.list(), &criteria)
    }

    pub fn count_of(&self, kind: MaterialType) -> usize {
        self.store.list().iter().filter(|material| material.material_type == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewMaterial {
        NewMaterial {
            title: "Graph Traversal".into(),
            description: "BFS and DFS walkthrough".into(),
            material_type: "notes".into(),
            subject: "Algorithms".into(),
            file: Some(Upload {
                file_name: "graphs.pdf".into(),
                size_bytes: 2_621_440,
            }),
            uploaded_by: None,
        }
    }

    #[test]
    fn upload_formats_size_and_starts_at_zero_downloads() {
        let mut materials = Materials::seeded(Vec::new());
        let material = materials.upload(form()).unwrap();
        assert_eq!(material.file_size.as_deref(), Some("2.5 MB"));
        assert_eq!(material.download_count, 0);
        assert_eq!(material.material_type, MaterialType::Notes);
    }

    #[test]
    fn upload_requires_file() {
        let mut materials = Materials::seeded(Vec::new());
        let err = materials.upload(NewMaterial { file: None, ..form() }).unwrap_err();
        assert_eq!(err, CampusError::Validation(vec!["file"]));
    }

    #[test]
    fn upload_rejects_unknown_type() {
        let mut materials = Materials::seeded(Vec::new());
        let err = materials
            .upload(NewMaterial {
                material_type: "podcast".into(),
                ..form()
            })
            .unwrap_err();
        assert!(matches!(err, CampusError::UnknownValue { kind: "material type", .. }));
    }
}
