//! Views: the scrolling containers that consume row adapters.

mod list_view;

pub use list_view::ListView;
