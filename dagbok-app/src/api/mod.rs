//! Seam between the controllers and the HTTP client.

#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockApi;

use async_trait::async_trait;
use dagbok_client::domain::{Entry, NewPhoto, Photo, Tag, TagAttachment};
use dagbok_client::{ApiError, DagbokClient};

/// The backend operations the view-state controllers depend on. Controllers
/// are generic over this so their state transitions can be exercised with a
/// scripted mock instead of a live server.
#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn fetch_entry(&self, id: &str) -> Result<Entry, ApiError>;
    async fn fetch_entry_photos(&self, entry_id: &str) -> Result<Vec<Photo>, ApiError>;
    async fn upload_photo(&self, entry_id: &str, photo: &NewPhoto) -> Result<Photo, ApiError>;
    async fn delete_photo(&self, entry_id: &str, photo_id: &str) -> Result<(), ApiError>;

    async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError>;
    async fn create_tag(&self, name: &str) -> Result<Tag, ApiError>;
    async fn attach_tag(&self, entry_id: &str, tag_id: &str) -> Result<TagAttachment, ApiError>;
    async fn detach_tag(&self, entry_id: &str, tag_id: &str) -> Result<(), ApiError>;
    async fn delete_tag(&self, tag_id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl JournalApi for DagbokClient {
    async fn fetch_entry(&self, id: &str) -> Result<Entry, ApiError> {
        DagbokClient::fetch_entry(self, id).await
    }

    async fn fetch_entry_photos(&self, entry_id: &str) -> Result<Vec<Photo>, ApiError> {
        DagbokClient::fetch_entry_photos(self, entry_id).await
    }

    async fn upload_photo(&self, entry_id: &str, photo: &NewPhoto) -> Result<Photo, ApiError> {
        DagbokClient::upload_photo(self, entry_id, photo).await
    }

    async fn delete_photo(&self, entry_id: &str, photo_id: &str) -> Result<(), ApiError> {
        DagbokClient::delete_photo(self, entry_id, photo_id).await
    }

    async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        DagbokClient::fetch_tags(self).await
    }

    async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        DagbokClient::create_tag(self, name).await
    }

    async fn attach_tag(&self, entry_id: &str, tag_id: &str) -> Result<TagAttachment, ApiError> {
        DagbokClient::attach_tag(self, entry_id, tag_id).await
    }

    async fn detach_tag(&self, entry_id: &str, tag_id: &str) -> Result<(), ApiError> {
        DagbokClient::detach_tag(self, entry_id, tag_id).await
    }

    async fn delete_tag(&self, tag_id: &str) -> Result<(), ApiError> {
        DagbokClient::delete_tag(self, tag_id).await
    }
}
