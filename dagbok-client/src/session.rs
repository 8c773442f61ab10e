use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ApiError, DagbokUrl};

/// An authenticated session against the journal backend.
///
/// Constructed once (from a stored token or via [`Session::login`]) and handed
/// to [`crate::DagbokClient::new`]. The client never reads ambient storage;
/// whoever owns the session decides when it is stale and logs in again.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub valid_until: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl Session {
    /// Wrap an already-issued bearer token, e.g. one loaded from disk.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            valid_until: None,
        }
    }

    /// Authenticate against `POST /users/login` and build a session from the
    /// returned access token.
    pub async fn login(url: &DagbokUrl, email: &str, password: &str) -> Result<Session, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let client = Client::new();
        let resp = client
            .post(url.append_path("/users/login").as_ref())
            .json(&Body { email, password })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status().as_u16()));
        }

        let login: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Parsing(format!("Failed to parse login response: {}", e)))?;

        Ok(Session {
            token: login.access_token,
            valid_until: None,
        })
    }

    /// Whether the session is known to have expired. A session without an
    /// expiry timestamp is assumed live until the backend rejects it.
    pub fn is_expired(&self) -> bool {
        match self.valid_until {
            Some(valid_until) => valid_until < OffsetDateTime::now_utc(),
            None => false,
        }
    }

    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
