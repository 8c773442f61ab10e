//! Scripted mock backend for controller tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use dagbok_client::domain::{Entry, NewPhoto, Photo, Tag, TagAttachment};
use dagbok_client::ApiError;

use super::JournalApi;

/// Mock [`JournalApi`] returning pre-scripted results per operation, in order.
/// Every call is recorded as `"METHOD path"` so tests can assert which
/// requests went out (and which did not, e.g. no re-fetch after an upload).
#[derive(Default)]
pub struct MockApi {
    entries: Mutex<VecDeque<Result<Entry, ApiError>>>,
    photo_lists: Mutex<VecDeque<Result<Vec<Photo>, ApiError>>>,
    uploads: Mutex<VecDeque<Result<Photo, ApiError>>>,
    photo_deletes: Mutex<VecDeque<Result<(), ApiError>>>,
    tag_lists: Mutex<VecDeque<Result<Vec<Tag>, ApiError>>>,
    tag_creates: Mutex<VecDeque<Result<Tag, ApiError>>>,
    attaches: Mutex<VecDeque<Result<TagAttachment, ApiError>>>,
    detaches: Mutex<VecDeque<Result<(), ApiError>>>,
    tag_deletes: Mutex<VecDeque<Result<(), ApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fetch_entry(self, result: Result<Entry, ApiError>) -> Self {
        self.entries.lock().unwrap().push_back(result);
        self
    }

    pub fn on_fetch_photos(self, result: Result<Vec<Photo>, ApiError>) -> Self {
        self.photo_lists.lock().unwrap().push_back(result);
        self
    }

    pub fn on_upload_photo(self, result: Result<Photo, ApiError>) -> Self {
        self.uploads.lock().unwrap().push_back(result);
        self
    }

    pub fn on_delete_photo(self, result: Result<(), ApiError>) -> Self {
        self.photo_deletes.lock().unwrap().push_back(result);
        self
    }

    pub fn on_fetch_tags(self, result: Result<Vec<Tag>, ApiError>) -> Self {
        self.tag_lists.lock().unwrap().push_back(result);
        self
    }

    pub fn on_create_tag(self, result: Result<Tag, ApiError>) -> Self {
        self.tag_creates.lock().unwrap().push_back(result);
        self
    }

    pub fn on_attach_tag(self, result: Result<TagAttachment, ApiError>) -> Self {
        self.attaches.lock().unwrap().push_back(result);
        self
    }

    pub fn on_detach_tag(self, result: Result<(), ApiError>) -> Self {
        self.detaches.lock().unwrap().push_back(result);
        self
    }

    pub fn on_delete_tag(self, result: Result<(), ApiError>) -> Self {
        self.tag_deletes.lock().unwrap().push_back(result);
        self
    }

    /// All calls made so far, as `"METHOD path"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>, op: &str) -> Result<T, ApiError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted result left for {}", op))
    }
}

#[async_trait]
impl JournalApi for MockApi {
    async fn fetch_entry(&self, id: &str) -> Result<Entry, ApiError> {
        self.record(format!("GET /entries/{}", id));
        Self::next(&self.entries, "fetch_entry")
    }

    async fn fetch_entry_photos(&self, entry_id: &str) -> Result<Vec<Photo>, ApiError> {
        self.record(format!("GET /entries/{}/photos", entry_id));
        Self::next(&self.photo_lists, "fetch_entry_photos")
    }

    async fn upload_photo(&self, entry_id: &str, photo: &NewPhoto) -> Result<Photo, ApiError> {
        self.record(format!("POST /entries/{}/photos {}", entry_id, photo.url));
        Self::next(&self.uploads, "upload_photo")
    }

    async fn delete_photo(&self, entry_id: &str, photo_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /entries/{}/photos/{}", entry_id, photo_id));
        Self::next(&self.photo_deletes, "delete_photo")
    }

    async fn fetch_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.record("GET /tags".to_string());
        Self::next(&self.tag_lists, "fetch_tags")
    }

    async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        self.record(format!("POST /tags {}", name));
        Self::next(&self.tag_creates, "create_tag")
    }

    async fn attach_tag(&self, entry_id: &str, tag_id: &str) -> Result<TagAttachment, ApiError> {
        self.record(format!("POST /entries/{}/tags {}", entry_id, tag_id));
        Self::next(&self.attaches, "attach_tag")
    }

    async fn detach_tag(&self, entry_id: &str, tag_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /entries/{}/tags/{}", entry_id, tag_id));
        Self::next(&self.detaches, "detach_tag")
    }

    async fn delete_tag(&self, tag_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /tags/{}", tag_id));
        Self::next(&self.tag_deletes, "delete_tag")
    }
}
