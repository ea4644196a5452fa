#[cfg(test)]
mod tests {
    use campus::libs::error::CampusError;
    use campus::libs::filter::Selector;
    use campus::store::materials::{MaterialType, Materials, NewMaterial, Upload};
    use campus::store::seed;

    fn materials() -> Materials {
        Materials::seeded(seed::teacher_materials())
    }

    fn upload_form() -> NewMaterial {
        NewMaterial {
            title: "Indexing Strategies".into(),
            description: "B-trees, hash indexes and when to use them".into(),
            material_type: "document".into(),
            subject: "Database Systems".into(),
            file: Some(Upload {
                file_name: "indexing.pdf".into(),
                size_bytes: 3 * 1024 * 1024 + 200 * 1024,
            }),
            uploaded_by: Some("teacher@demo.com".into()),
        }
    }

    #[test]
    fn test_type_tab_and_search() {
        let materials = materials();
        let documents = materials.browse(&Selector::only("document"), "");
        assert_eq!(documents.len(), 2);
        assert!(documents.iter().all(|m| m.material_type == MaterialType::Document));

        let sql = materials.browse(&Selector::All, "sql");
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].title, "SQL Joins Tutorial");

        assert!(materials.browse(&Selector::only("video"), "recursion").is_empty());
    }

    #[test]
    fn test_upload_records_size_and_date() {
        let mut materials = materials();
        let uploaded = materials.upload(upload_form()).unwrap();
        assert_eq!(uploaded.id, "6");
        assert_eq!(uploaded.file_size.as_deref(), Some("3.2 MB"));
        assert_eq!(uploaded.download_count, 0);
        assert_eq!(materials.all()[0].title, "Indexing Strategies");
        assert_eq!(materials.count_of(MaterialType::Document), 3);
    }

    #[test]
    fn test_upload_without_file_is_rejected() {
        let mut materials = materials();
        let form = NewMaterial {
            file: None,
            subject: String::new(),
            ..upload_form()
        };
        assert_eq!(materials.upload(form).unwrap_err(), CampusError::Validation(vec!["subject", "file"]));
        assert_eq!(materials.all().len(), 5);
    }

    #[test]
    fn test_delete_removes_only_that_material() {
        let mut materials = materials();
        let removed = materials.delete("3").unwrap();
        assert_eq!(removed.title, "SQL Joins Tutorial");
        assert_eq!(materials.all().len(), 4);
        assert!(materials.get("3").is_none());

        assert!(materials.delete("3").is_none());
        assert_eq!(materials.all().len(), 4);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut materials = materials();
        materials.delete("2");
        let id = materials.upload(upload_form()).unwrap().id.clone();
        assert_eq!(id, "6");
        let ids: Vec<&str> = materials.all().iter().map(|m| m.id.as_str()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(ids.len(), unique.len());
    }
}
