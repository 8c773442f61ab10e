use std::mem;
use std::sync::Arc;

use dagbok_client::domain::Tag;
use dagbok_client::ApiError;

use crate::api::JournalApi;
use crate::reducers;
use crate::view_state::{LoadEpoch, LoadToken, ViewState};

/// View-state controller for the tag catalog of one entry's page.
///
/// Adding a tag is a two-step saga: create the tag, then attach it to the
/// entry. If attachment fails the created tag is deleted again (best effort)
/// so no orphan is left behind, and the whole operation reports failure.
/// Load failures surface the same way as everywhere else; they are not
/// swallowed.
pub struct TagsController<A: JournalApi> {
    api: Arc<A>,
    entry_id: String,
    epoch: LoadEpoch,
    state: ViewState<Vec<Tag>>,
    op_error: Option<String>,
    input: String,
}

impl<A: JournalApi> TagsController<A> {
    pub fn new(api: Arc<A>, entry_id: impl Into<String>) -> Self {
        Self {
            api,
            entry_id: entry_id.into(),
            epoch: LoadEpoch::default(),
            state: ViewState::Idle,
            op_error: None,
            input: String::new(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Tag>> {
        &self.state
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.state.ready().map(|tags| tags.as_slice())
    }

    pub fn op_error(&self) -> Option<&str> {
        self.op_error.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn cancel(&mut self) {
        self.epoch.cancel();
    }

    /// Enter `Loading` and mint the token the eventual completion must
    /// present to [`Self::apply_load`].
    pub fn begin_load(&mut self) -> LoadToken {
        self.state = ViewState::Loading;
        self.epoch.begin()
    }

    /// Fetch the full tag catalog without borrowing the controller.
    pub async fn fetch(api: Arc<A>) -> Result<Vec<Tag>, ApiError> {
        api.fetch_tags().await
    }

    /// Apply a load completion. Dropped if the token is stale.
    pub fn apply_load(&mut self, token: LoadToken, result: Result<Vec<Tag>, ApiError>) {
        if !self.epoch.is_current(token) {
            return;
        }

        self.state = match result {
            Ok(tags) => ViewState::Ready(tags),
            Err(e) => {
                tracing::error!(error = %e, "failed to load tags");
                ViewState::Error("Error fetching tags.".to_string())
            }
        };
    }

    /// Fetch and apply in one step.
    pub async fn load(&mut self) {
        let token = self.begin_load();
        let result = Self::fetch(self.api.clone()).await;
        self.apply_load(token, result);
    }

    /// Create the tag named in the input and attach it to the entry. Succeeds
    /// or fails as a whole; on success the tag is appended locally and the
    /// input cleared.
    pub async fn add_tag(&mut self) {
        let name = self.input.trim().to_string();
        if name.is_empty() {
            self.op_error = Some("Tag name cannot be empty.".to_string());
            return;
        }

        let created = match self.api.create_tag(&name).await {
            Ok(tag) => tag,
            Err(e) => {
                tracing::error!(name = %name, error = %e, "failed to create tag");
                self.op_error = Some("Error adding tag.".to_string());
                return;
            }
        };

        if let Err(e) = self.api.attach_tag(&self.entry_id, &created.id).await {
            tracing::error!(tag_id = %created.id, error = %e, "failed to attach tag");
            // Compensate: remove the tag so it doesn't linger unassociated.
            if let Err(cleanup) = self.api.delete_tag(&created.id).await {
                tracing::warn!(tag_id = %created.id, error = %cleanup, "failed to clean up unattached tag");
            }
            self.op_error = Some("Error adding tag.".to_string());
            return;
        }

        self.op_error = None;
        match self.state.ready_mut() {
            Some(tags) => *tags = reducers::append_tag(mem::take(tags), created),
            None => {
                tracing::warn!(tag_id = %created.id, "tag confirmed while catalog not ready; local list not updated");
            }
        }
        self.input.clear();
    }

    /// Detach a tag from the entry and drop it from the local list.
    pub async fn remove_tag(&mut self, tag_id: &str) {
        match self.api.detach_tag(&self.entry_id, tag_id).await {
            Ok(()) => {
                self.op_error = None;
                match self.state.ready_mut() {
                    Some(tags) => *tags = reducers::remove_tag(mem::take(tags), tag_id),
                    None => {
                        tracing::warn!(tag_id, "tag detachment confirmed while catalog not ready");
                    }
                }
            }
            Err(e) => {
                tracing::error!(tag_id, error = %e, "failed to detach tag");
                self.op_error = Some("Error removing tag.".to_string());
            }
        }
    }
}
