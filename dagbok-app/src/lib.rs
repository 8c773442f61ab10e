pub mod api;
pub mod config;
pub mod reducers;
pub mod session_store;

mod entry_detail;
mod tags;
mod view_state;

pub use entry_detail::{EntryDetailController, EntryDetailView};
pub use tags::TagsController;
pub use view_state::{LoadEpoch, LoadToken, ViewState};
