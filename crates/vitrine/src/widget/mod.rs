//! State-only widgets exercised by the demo screens.
//!
//! These types carry widget state and change signals; painting, layout,
//! and input hit-testing belong to the external toolkit. Setters are
//! no-ops on unchanged values, so connected slots only see real changes.

mod checkable;
mod hover;
mod pointer;
mod progress;
mod rating;
mod spinner;
mod tab_bar;

pub use checkable::CheckableRow;
pub use hover::HoverInterceptor;
pub use pointer::PointerRegion;
pub use progress::ProgressBar;
pub use rating::RatingBar;
pub use spinner::Spinner;
pub use tab_bar::TabBar;
