use serde::{Deserialize, Serialize};

/// A user-defined label, many-to-many associated with entries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Result of `POST /entries/{id}/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagAttachment {
    pub entry_id: String,
    pub tag_id: String,
}
