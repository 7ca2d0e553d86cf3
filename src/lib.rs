pub mod backend;
pub mod backends;
pub mod list_view;

pub use header_filter_core;
pub use list_view::ListView;
pub use rusqlite;
