use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single journal record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Body for `POST /entries`.
#[derive(Debug, Clone, Serialize)]
pub struct NewEntry {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update body for `PUT /entries/{id}`. Absent fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
