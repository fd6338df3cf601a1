pub mod api;
pub mod bookmarks;
pub mod config;
pub mod selection;
pub mod session;
pub mod settle;

pub use api::ApiClient;
pub use bookmarks::BookmarkSet;
pub use selection::Selection;
pub use session::Session;
pub use settle::settle;
