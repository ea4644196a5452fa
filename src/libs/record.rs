//! Common shape shared by every record kind held in a session.

use crate::libs::workflow::Status;

/// A single domain entity stored in an in-memory collection.
pub trait Record {
    /// Identifier, unique within the owning collection.
    fn id(&self) -> &str;

    /// Only the store calls this, when it assigns a fresh id on create.
    fn set_id(&mut self, id: String);

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical status value, compared exactly by the filter engine.
    fn status_key(&self) -> Option<&str> {
        None
    }

    /// Categorical type or tab value, compared exactly by the filter engine.
    fn kind_key(&self) -> Option<&str> {
        None
    }
}

/// A record that follows a status workflow.
pub trait Tracked: Record {
    type Status: Status;

    fn status(&self) -> Self::Status;

    /// Replaces the status field and, when given, the accompanying note
    /// (leave comment, feedback response).
    fn apply_status(&mut self, status: Self::Status, note: Option<String>);
}
