use serde::{Deserialize, Serialize};

/// A media attachment belonging to exactly one entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /entries/{id}/photos`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPhoto {
    pub url: String,
}
