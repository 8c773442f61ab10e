mod entry;
mod photo;
mod tag;
mod user;

pub use entry::*;
pub use photo::*;
pub use tag::*;
pub use user::*;
