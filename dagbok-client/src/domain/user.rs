use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET /users/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Body for `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}
