//! # Vitrine
//!
//! The toolkit surface the Vitrine gallery exercises: a model layer built
//! around a recycling row adapter, a headless recycling list view, and a
//! set of state-only widgets.
//!
//! ## Module Organization
//!
//! - [`model`]: roles, item data, the [`RowAdapter`](model::RowAdapter)
//!   contract, the slot arena, and the generic
//!   [`ListAdapter`](model::ListAdapter)
//! - [`view`]: the recycling [`ListView`](view::ListView)
//! - [`widget`]: spinner, progress bar, rating bar, tab bar, checkable
//!   row, hover interceptor, pointer regions
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::ListAdapter;
//! use vitrine::view::ListView;
//!
//! let adapter = Arc::new(ListAdapter::new(vec![
//!     "Alpha".to_string(),
//!     "Beta".to_string(),
//!     "Gamma".to_string(),
//! ]));
//!
//! let mut view = ListView::new(adapter);
//! view.refresh();
//! assert_eq!(view.visible_rows().len(), 3);
//! ```

pub mod model;
pub mod view;
pub mod widget;

pub use vitrine_core::{ConnectionGuard, ConnectionId, Signal};
