mod client;
mod dagbok_url;
mod session;

pub mod domain;

pub use client::*;
pub use dagbok_url::*;
pub use session::*;
