//! The recycling row adapter contract.
//!
//! A row adapter is the sole authority translating a position in its
//! backing sequence into bound view-slot content. Views ask the adapter how
//! many positions exist, which rows carry what data, and hand previously
//! used slots back through [`bind`](RowAdapter::bind) instead of inflating
//! new ones on every scroll frame.
//!
//! # Example
//!
//! ```
//! use vitrine::model::{ListAdapter, RowAdapter, SlotArena};
//!
//! let adapter = ListAdapter::new(vec!["A".to_string(), "B".to_string()]);
//! let mut arena = SlotArena::new();
//!
//! // Fresh bind inflates a slot
//! let slot = adapter.bind(0, None, &mut arena);
//! assert_eq!(arena.slot(slot).unwrap().text, "A");
//!
//! // Reuse rebinds the same slot to another row
//! let same = adapter.bind(1, Some(slot), &mut arena);
//! assert_eq!(same, slot);
//! assert_eq!(arena.slot(slot).unwrap().text, "B");
//! ```

use vitrine_core::Signal;

use super::role::{ItemData, ItemRole};
use super::slot::{SlotArena, SlotId, SlotTemplate};

/// Notifications emitted by row adapters.
///
/// Views connect to these signals to stay synchronized with the backing
/// sequence. Already-bound slots are considered stale after any of them
/// fires and must be rebound before their content is trusted again;
/// off-screen slots are simply rebuilt lazily on next use.
pub struct AdapterSignals {
    /// Emitted after the backing sequence changed in a way that is not
    /// covered by a finer-grained signal (reset, reorder, exterior
    /// mutation via [`notify_changed`](RowAdapter::notify_changed)).
    pub changed: Signal<()>,

    /// Emitted after rows have been inserted.
    /// Args: (first row, last row), inclusive.
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row), inclusive.
    pub rows_removed: Signal<(usize, usize)>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            changed: Signal::new(),
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
        }
    }
}

/// The core trait for recycling row adapters.
///
/// Implementors supply the backing sequence's length, per-row data by role,
/// and the slot template their rows are inflated from; the binding logic
/// itself is provided.
///
/// # Failure semantics
///
/// Out-of-range positions are programmer errors, not recoverable
/// conditions: [`row_data`](Self::row_data), [`row_id`](Self::row_id) and
/// [`bind`](Self::bind) fail fast. The scrolling container is responsible
/// for never requesting positions outside `0..len()`.
///
/// # Concurrency
///
/// All operations are synchronous and expected to be fast enough to run
/// per-frame on the UI-owning thread. The `Send + Sync` bound follows the
/// rest of the crate's types; it does not imply concurrent use.
pub trait RowAdapter: Send + Sync {
    /// Returns the number of bindable positions.
    ///
    /// Must be consistent with the backing sequence's length at call time;
    /// no side effects.
    fn len(&self) -> usize;

    /// Returns the data for the row at `position` under the given role.
    ///
    /// Returns [`ItemData::None`] for unsupported roles.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    fn row_data(&self, position: usize, role: ItemRole) -> ItemData;

    /// Returns a stable identifier for the row at `position`.
    ///
    /// The default uses the position itself. That is only a valid identity
    /// while the backing sequence never reorders or filters; adapters over
    /// reorderable data should override this with a real identity.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    fn row_id(&self, position: usize) -> u64 {
        assert!(
            position < self.len(),
            "row_id position {position} out of range (len {})",
            self.len()
        );
        position as u64
    }

    /// The slot template this adapter's rows are inflated from.
    fn template(&self) -> SlotTemplate;

    /// Returns the signals for this adapter.
    fn signals(&self) -> &AdapterSignals;

    /// Returns `true` if the adapter has no bindable positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Signals that the backing sequence has been mutated.
    ///
    /// All previously bound slots must be considered stale and rebound by
    /// their owner before their content is trusted again.
    fn notify_changed(&self) {
        tracing::debug!(target: "vitrine::model", len = self.len(), "adapter changed");
        self.signals().changed.emit(());
    }

    /// Binds the row at `position` to a view slot and returns the slot id.
    ///
    /// With `reuse == None`, a fresh slot is inflated from
    /// [`template`](Self::template) (its cache is attached before the id
    /// exists, so a reused slot can never be missing one). With
    /// `reuse == Some(id)`, the previously inflated slot and its cache are
    /// reused as-is.
    ///
    /// In both cases every cached sub-element is overwritten from the row
    /// at `position`: the text label always, the icon and check indicator
    /// whenever the cache says the slot has them (written or cleared), so
    /// no content from a previously bound row survives.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`, or if `reuse` names a slot that is
    /// not live in `arena`. Both are caller bugs.
    fn bind(&self, position: usize, reuse: Option<SlotId>, arena: &mut SlotArena) -> SlotId {
        assert!(
            position < self.len(),
            "bind position {position} out of range (len {})",
            self.len()
        );

        let id = match reuse {
            Some(id) => {
                assert!(arena.slot(id).is_some(), "bind given a dead slot id");
                id
            }
            None => arena.inflate(&self.template()),
        };

        let cache = *arena.cache(id).expect("live slot always has a cache");

        let text = self
            .row_data(position, ItemRole::Display)
            .into_text()
            .unwrap_or_default();
        let icon = if cache.has_icon {
            self.row_data(position, ItemRole::Decoration).as_icon()
        } else {
            None
        };
        let check = if cache.has_check {
            self.row_data(position, ItemRole::CheckState).as_check_state()
        } else {
            None
        };

        let slot = arena.slot_mut(id).expect("slot checked live above");
        slot.text = text;
        slot.icon = icon;
        slot.check = check;
        slot.bound_position = Some(position);

        tracing::trace!(target: "vitrine::model", ?id, position, "bound slot");
        id
    }
}
