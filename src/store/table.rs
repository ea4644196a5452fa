use super::Repository;
use crate::libs::record::Record;

/// Insertion-ordered, in-memory collection. Index 0 is the newest record.
#[derive(Debug, Clone, Default)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Wraps existing records as-is, keeping their ids and order.
    pub fn with_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Next id: one above the largest numeric id in use.
    ///
    /// Ids that are not numeric are ignored, so imported records with
    /// custom keys never block allocation.
    fn next_id(&self) -> String {
        let max = self.rows.iter().filter_map(|row| row.id().parse::<u64>().ok()).max().unwrap_or(0);
        max.saturating_add(1).to_string()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

impl<R: Record> Repository<R> for Table<R> {
    fn list(&self) -> &[R] {
        &self.rows
    }

    fn create(&mut self, mut record: R) -> &R {
        let id = self.next_id();
        tracing::debug!(id = %id, "record created");
        record.set_id(id);
        self.rows.insert(0, record);
        &self.rows[0]
    }

    fn update(&mut self, id: &str, mut record: R) -> Option<&R> {
        let index = self.position(id)?;
        record.set_id(id.to_string());
        self.rows[index] = record;
        tracing::debug!(id, "record replaced");
        Some(&self.rows[index])
    }

    fn remove(&mut self, id: &str) -> Option<R> {
        let index = self.position(id)?;
        tracing::debug!(id, "record removed");
        Some(self.rows.remove(index))
    }
}
