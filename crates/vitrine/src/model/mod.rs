//! The model layer: roles, row adapters, and the slot arena.
//!
//! This module is the one genuinely reusable component in Vitrine: a
//! data-to-view binding layer that reuses previously constructed view slots
//! rather than inflating new ones for every visible row.
//!
//! # Core Types
//!
//! - [`ItemRole`] / [`ItemData`]: what aspect of a row is requested, and
//!   the type-erased answer
//! - [`SlotArena`] / [`SlotId`] / [`ViewSlot`] / [`SlotCache`]: reusable
//!   visual units and their resolved sub-element records
//! - [`RowAdapter`]: the recycling adapter contract
//! - [`AdapterSignals`]: change notifications views subscribe to
//! - [`ListAdapter`]: the generic `Vec<T>`-backed implementation
//!
//! # Example
//!
//! ```
//! use vitrine::model::{ListAdapter, RowAdapter, SlotArena};
//!
//! let adapter = ListAdapter::new(vec![
//!     "Apple".to_string(),
//!     "Banana".to_string(),
//!     "Cherry".to_string(),
//! ]);
//! let mut arena = SlotArena::new();
//!
//! let slot = adapter.bind(1, None, &mut arena);
//! assert_eq!(arena.slot(slot).unwrap().text, "Banana");
//! ```
//!
//! # Architecture
//!
//! ```text
//! backing Vec<T>  --RowAdapter::row_data-->  ItemData
//!        |                                      |
//!        |   RowAdapter::bind(position, reuse)  v
//!        +---------------------------->  SlotArena[SlotId] = ViewSlot
//!                                        (SlotCache in a side table)
//! ```
//!
//! The scrolling container (see [`crate::view::ListView`]) decides which
//! positions are visible and when to hand a slot back for reuse; the
//! adapter is the sole authority on what a bound slot shows.

mod adapter;
mod list_adapter;
mod role;
mod slot;

pub use adapter::{AdapterSignals, RowAdapter};
pub use list_adapter::{DataExtractor, ExtractorListAdapter, ListAdapter, RowItem};
pub use role::{CheckState, IconId, ItemData, ItemRole};
pub use slot::{SlotArena, SlotCache, SlotId, SlotTemplate, ViewSlot};
