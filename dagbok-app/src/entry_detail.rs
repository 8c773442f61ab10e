use std::mem;
use std::sync::Arc;

use dagbok_client::domain::{Entry, NewPhoto, Photo};
use dagbok_client::ApiError;

use crate::api::JournalApi;
use crate::reducers;
use crate::view_state::{LoadEpoch, LoadToken, ViewState};

/// Everything the entry detail view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetailView {
    pub entry: Entry,
    pub photos: Vec<Photo>,
}

/// View-state controller for a single entry and its photos.
///
/// `load` fetches the entry and its photo list concurrently; the view is
/// either fully ready or in error, never a partial render. After confirmed
/// mutations the photo projection is reconciled locally (no re-fetch).
/// In-flight deduplication is the caller's job: disable the control while a
/// request is pending.
pub struct EntryDetailController<A: JournalApi> {
    api: Arc<A>,
    entry_id: String,
    epoch: LoadEpoch,
    state: ViewState<EntryDetailView>,
    op_error: Option<String>,
}

impl<A: JournalApi> EntryDetailController<A> {
    pub fn new(api: Arc<A>, entry_id: impl Into<String>) -> Self {
        Self {
            api,
            entry_id: entry_id.into(),
            epoch: LoadEpoch::default(),
            state: ViewState::Idle,
            op_error: None,
        }
    }

    pub fn state(&self) -> &ViewState<EntryDetailView> {
        &self.state
    }

    pub fn photos(&self) -> Option<&[Photo]> {
        self.state.ready().map(|view| view.photos.as_slice())
    }

    /// Last failed user action, if any. Cleared by the next successful one.
    pub fn op_error(&self) -> Option<&str> {
        self.op_error.as_deref()
    }

    /// Invalidate any in-flight load, e.g. when the view is torn down.
    pub fn cancel(&mut self) {
        self.epoch.cancel();
    }

    /// Enter `Loading` and mint the token the eventual completion must
    /// present to [`Self::apply_load`].
    pub fn begin_load(&mut self) -> LoadToken {
        self.state = ViewState::Loading;
        self.epoch.begin()
    }

    /// Fetch the entry and its photos concurrently. Borrows nothing from the
    /// controller, so a host can run this on the side and `cancel` in the
    /// meantime.
    pub async fn fetch(api: Arc<A>, entry_id: String) -> Result<EntryDetailView, ApiError> {
        let (entry, photos) = tokio::try_join!(
            api.fetch_entry(&entry_id),
            api.fetch_entry_photos(&entry_id),
        )?;
        Ok(EntryDetailView { entry, photos })
    }

    /// Apply a load completion. Dropped if the token is stale, i.e. the view
    /// was cancelled or a newer load began while this one was in flight.
    pub fn apply_load(&mut self, token: LoadToken, result: Result<EntryDetailView, ApiError>) {
        if !self.epoch.is_current(token) {
            return;
        }

        self.state = match result {
            Ok(view) => ViewState::Ready(view),
            Err(e) => {
                tracing::error!(entry_id = %self.entry_id, error = %e, "failed to load entry detail");
                ViewState::Error("Error fetching entry and photos.".to_string())
            }
        };
    }

    /// Fetch and apply in one step. Both requests must succeed before the
    /// view leaves `Loading`; either failure resolves to `Error`.
    pub async fn load(&mut self) {
        let token = self.begin_load();
        let result = Self::fetch(self.api.clone(), self.entry_id.clone()).await;
        self.apply_load(token, result);
    }

    /// Upload a photo by URL. Blank input is rejected before any request goes
    /// out. On success the returned photo is appended to the local list.
    pub async fn upload_photo(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            self.op_error = Some("Photo URL cannot be empty.".to_string());
            return;
        }

        let photo = NewPhoto {
            url: url.to_string(),
        };
        match self.api.upload_photo(&self.entry_id, &photo).await {
            Ok(created) => {
                self.op_error = None;
                match self.state.ready_mut() {
                    Some(view) => {
                        view.photos = reducers::append_photo(mem::take(&mut view.photos), created);
                    }
                    None => {
                        tracing::warn!(photo_id = %created.id, "photo confirmed while view not ready; local list not updated");
                    }
                }
            }
            Err(e) => {
                tracing::error!(entry_id = %self.entry_id, error = %e, "failed to upload photo");
                self.op_error = Some("Error uploading photo.".to_string());
            }
        }
    }

    /// Delete a photo by id. On success the matching photo is removed from
    /// the local list; on failure the list is left exactly as it was.
    pub async fn delete_photo(&mut self, photo_id: &str) {
        match self.api.delete_photo(&self.entry_id, photo_id).await {
            Ok(()) => {
                self.op_error = None;
                match self.state.ready_mut() {
                    Some(view) => {
                        view.photos = reducers::remove_photo(mem::take(&mut view.photos), photo_id);
                    }
                    None => {
                        tracing::warn!(photo_id, "photo deletion confirmed while view not ready");
                    }
                }
            }
            Err(e) => {
                tracing::error!(photo_id, error = %e, "failed to delete photo");
                self.op_error = Some("Error deleting photo.".to_string());
            }
        }
    }
}
