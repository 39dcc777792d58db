//! The demo screens.
//!
//! One module per demo. Every screen is independent: it builds its own
//! widgets from the [`ScreenConfig`](crate::config::ScreenConfig) it is
//! given and never reaches into another screen.

mod checkable_list;
mod drag_reorder;
mod hover;
mod list;
mod pointer_icon;
mod progress;
mod rating;
mod spinner;
mod tabs;

pub use checkable_list::CheckableListScreen;
pub use drag_reorder::DragReorderScreen;
pub use hover::HoverScreen;
pub use list::ListScreen;
pub use pointer_icon::PointerIconScreen;
pub use progress::ProgressScreen;
pub use rating::RatingScreen;
pub use spinner::SpinnerScreen;
pub use tabs::TabsScreen;
