use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    Entry, NewEntry, NewPhoto, NewUser, Photo, Tag, TagAttachment, UpdateEntry, UserProfile,
};
use crate::{DagbokUrl, Session};

/// HTTP client for the journal backend. One method per backend operation;
/// no retries, no response transformation beyond JSON decoding.
///
/// Authentication is decided at construction: with a [`Session`], every
/// request carries its bearer token; without one, requests go out
/// unauthenticated and rejection is the backend's call.
#[derive(Debug, Clone)]
pub struct DagbokClient {
    client: Client,
    base_url: DagbokUrl,
    session: Option<Session>,
}

impl DagbokClient {
    pub fn new(base_url: DagbokUrl, session: Option<Session>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    /// Replace the session, e.g. after a re-login.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn url(&self, path: &str) -> DagbokUrl {
        self.base_url.append_path(path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(session) => req.header(AUTHORIZATION, session.as_bearer_header()),
            None => req,
        }
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if !status.is_success() => Err(ApiError::Status(status.as_u16())),
            _ => Ok(resp),
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(format!("Failed to parse response as JSON: {}", e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.execute(self.client.get(self.url(path).as_ref())).await?;
        Self::decode(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let resp = self
            .execute(self.client.post(self.url(path).as_ref()).json(body))
            .await?;
        Self::decode(resp).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "PUT");
        let resp = self
            .execute(self.client.put(self.url(path).as_ref()).json(body))
            .await?;
        Self::decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        self.execute(self.client.delete(self.url(path).as_ref()))
            .await?;
        Ok(())
    }

    // Entries

    pub async fn fetch_entries(&self) -> Result<Vec<Entry>, ApiError> {
        self.get("/entries").await
    }

    pub async fn fetch_entry(&self, id: &str) -> Result<Entry, ApiError> {
        self.get(&format!("/entries/{}", id)).await
    }

    pub async fn create_entry(&self, entry: &NewEntry) -> Result<Entry, ApiError> {
        self.post("/entries", entry).await
    }

    pub async fn update_entry(&self, id: &str, update: &UpdateEntry) -> Result<Entry, ApiError> {
        self.put(&format!("/entries/{}", id), update).await
    }

    pub async fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/entries/{}", id)).await
    }

    // Photos

    pub async fn fetch_entry_photos(&self, entry_id: &str) -> Result<Vec<Photo>, ApiError> {
        self.get(&format!("/entries/{}/photos", entry_id)).await
    }

    pub async fn upload_photo(&self, entry_id: &str, photo: &NewPhoto) -> Result<Photo, ApiError> {
        self.post(&format!("/entries/{}/photos", entry_id), photo)
            .await
    }

    pub async fn delete_photo(&self, entry_id: &str, photo_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/entries/{}/photos/{}", entry_id, photo_id))
            .await
    }

    // Tags

    pub async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get("/tags").await
    }

    pub async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }
        self.post("/tags", &Body { name }).await
    }

    pub async fn attach_tag(&self, entry_id: &str, tag_id: &str) -> Result<TagAttachment, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            tag_id: &'a str,
        }
        self.post(&format!("/entries/{}/tags", entry_id), &Body { tag_id })
            .await
    }

    pub async fn detach_tag(&self, entry_id: &str, tag_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/entries/{}/tags/{}", entry_id, tag_id))
            .await
    }

    pub async fn delete_tag(&self, tag_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/tags/{}", tag_id)).await
    }

    // Users

    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/users/profile").await
    }

    pub async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        self.execute(self.client.post(self.url("/users/register").as_ref()).json(user))
            .await?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("NotFound")]
    NotFound,
    #[error("Status: {0}")]
    Status(u16),
    #[error("Transport: {0}")]
    Transport(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
}
