//! ListView: the scrolling container that recycles view slots.
//!
//! `ListView` decides which positions of a [`RowAdapter`] are visible and
//! when to hand a slot back for reuse. Slots that scroll out of the window
//! go to a recycle pool; newly visible positions are bound through
//! [`RowAdapter::bind`] with a pooled slot whenever one is available, so
//! steady-state scrolling inflates nothing.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::model::ListAdapter;
//! use vitrine::view::ListView;
//!
//! let words: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
//! let adapter = Arc::new(ListAdapter::new(words));
//!
//! let mut view = ListView::new(adapter).with_viewport_rows(8);
//! view.refresh();
//!
//! assert_eq!(view.visible_rows().len(), 8);
//! view.scroll_to(50);
//! assert_eq!(view.slot_text(view.visible_rows()[0].1), Some("row 50".into()));
//! ```

use std::sync::Arc;

use vitrine_core::Signal;

use crate::model::{RowAdapter, SlotArena, SlotId};

/// A headless scrolling list over a [`RowAdapter`].
///
/// The view owns the slot arena and the recycle pool; the adapter decides
/// slot content. The visible window is `first_visible..first_visible +
/// viewport_rows`, clamped to the adapter's length.
///
/// # Signals
///
/// - `clicked(usize)`: Emitted when a visible row is clicked
/// - `activated(usize)`: Emitted when a visible row is activated
pub struct ListView {
    adapter: Arc<dyn RowAdapter>,
    arena: SlotArena,

    /// Bound slots for the visible window, in position order.
    visible: Vec<(usize, SlotId)>,
    /// Slots that scrolled out and are waiting for reuse.
    recycle_pool: Vec<SlotId>,

    first_visible: usize,
    viewport_rows: usize,
    dirty: bool,

    /// Emitted when a visible row is clicked.
    pub clicked: Signal<usize>,
    /// Emitted when a visible row is activated (double-click or Enter in a
    /// real toolkit; driven directly here).
    pub activated: Signal<usize>,
}

impl ListView {
    /// Creates a view over the given adapter with a 10-row viewport.
    pub fn new(adapter: Arc<dyn RowAdapter>) -> Self {
        Self {
            adapter,
            arena: SlotArena::new(),
            visible: Vec::new(),
            recycle_pool: Vec::new(),
            first_visible: 0,
            viewport_rows: 10,
            dirty: true,
            clicked: Signal::new(),
            activated: Signal::new(),
        }
    }

    /// Sets the number of rows the viewport shows.
    pub fn with_viewport_rows(mut self, rows: usize) -> Self {
        self.viewport_rows = rows;
        self.dirty = true;
        self
    }

    /// The adapter this view displays.
    pub fn adapter(&self) -> &Arc<dyn RowAdapter> {
        &self.adapter
    }

    /// The slot arena backing this view.
    pub fn arena(&self) -> &SlotArena {
        &self.arena
    }

    /// First visible position.
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Number of rows the viewport shows.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Marks the visible window stale, forcing the next
    /// [`refresh`](Self::refresh) to rebind it.
    ///
    /// Call this from a subscription on the adapter's
    /// [`signals`](RowAdapter::signals); the view does not hold the
    /// subscription itself so that it stays plain mutable state.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the visible window needs rebinding.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Scrolls so that `row` is the first visible position.
    ///
    /// The offset is clamped so the viewport never extends past the end of
    /// the adapter (and to 0 when everything fits).
    pub fn scroll_to(&mut self, row: usize) {
        let max_first = self.adapter.len().saturating_sub(self.viewport_rows);
        let clamped = row.min(max_first);
        if clamped != self.first_visible {
            self.first_visible = clamped;
            self.dirty = true;
        }
        self.refresh();
    }

    /// Scrolls by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.first_visible.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Rebinds the visible window if it is stale.
    ///
    /// Slots leaving the window are pooled; every visible position is
    /// bound with a pooled slot when one is available. The window is
    /// clamped to the adapter's current length first, so a shrink (clear,
    /// remove) can never bind out of range.
    pub fn refresh(&mut self) {
        if !self.dirty {
            return;
        }

        let len = self.adapter.len();
        let max_first = len.saturating_sub(self.viewport_rows);
        self.first_visible = self.first_visible.min(max_first);

        // Everything currently bound goes back to the pool; binding will
        // pull slots out again. Rebinding through the pool keeps this a
        // two-phase move with no per-row bookkeeping.
        for (_, id) in self.visible.drain(..) {
            self.recycle_pool.push(id);
        }

        let end = (self.first_visible + self.viewport_rows).min(len);
        for position in self.first_visible..end {
            let reuse = self.recycle_pool.pop();
            let id = self.adapter.bind(position, reuse, &mut self.arena);
            self.visible.push((position, id));
        }

        // Surplus pooled slots are kept for the next window growth; they
        // hold stale content but are never shown unbound.
        self.dirty = false;
        tracing::trace!(
            target: "vitrine::widget",
            first = self.first_visible,
            shown = self.visible.len(),
            pooled = self.recycle_pool.len(),
            "refreshed list viewport"
        );
    }

    /// The currently bound `(position, slot)` pairs, in position order.
    pub fn visible_rows(&self) -> &[(usize, SlotId)] {
        &self.visible
    }

    /// Convenience: the visible text of a bound slot.
    pub fn slot_text(&self, id: SlotId) -> Option<String> {
        self.arena.slot(id).map(|slot| slot.text.clone())
    }

    /// Number of slots waiting in the recycle pool.
    pub fn pooled_slots(&self) -> usize {
        self.recycle_pool.len()
    }

    /// Delivers a click on a visible row, emitting [`clicked`](Self::clicked).
    ///
    /// Clicks outside the visible window are ignored (the external toolkit
    /// only hit-tests what is on screen).
    pub fn click(&self, position: usize) {
        if self.visible.iter().any(|&(p, _)| p == position) {
            self.clicked.emit(position);
        }
    }

    /// Delivers an activation on a visible row.
    pub fn activate(&self, position: usize) {
        if self.visible.iter().any(|&(p, _)| p == position) {
            self.activated.emit(position);
        }
    }
}

static_assertions::assert_impl_all!(ListView: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListAdapter;
    use parking_lot::Mutex;

    fn words(n: usize) -> Arc<ListAdapter<String>> {
        Arc::new(ListAdapter::new(
            (0..n).map(|i| format!("word {i}")).collect(),
        ))
    }

    #[test]
    fn test_initial_window() {
        let mut view = ListView::new(words(100)).with_viewport_rows(5);
        view.refresh();

        let rows = view.visible_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].0, 0);
        assert_eq!(view.slot_text(rows[0].1), Some("word 0".into()));
        assert_eq!(view.slot_text(rows[4].1), Some("word 4".into()));
        assert_eq!(view.arena().len(), 5);
    }

    #[test]
    fn test_scroll_recycles_instead_of_inflating() {
        let mut view = ListView::new(words(100)).with_viewport_rows(5);
        view.refresh();
        assert_eq!(view.arena().len(), 5);

        view.scroll_to(50);
        // Steady-state scrolling reuses the same five slots
        assert_eq!(view.arena().len(), 5);
        assert_eq!(view.pooled_slots(), 0);

        let rows = view.visible_rows();
        assert_eq!(rows[0].0, 50);
        assert_eq!(view.slot_text(rows[0].1), Some("word 50".into()));
        assert_eq!(view.slot_text(rows[4].1), Some("word 54".into()));
    }

    #[test]
    fn test_scroll_clamps_to_end() {
        let mut view = ListView::new(words(10)).with_viewport_rows(4);
        view.refresh();

        view.scroll_to(9999);
        assert_eq!(view.first_visible(), 6);
        let rows = view.visible_rows();
        assert_eq!(rows.last().unwrap().0, 9);
    }

    #[test]
    fn test_scroll_by() {
        let mut view = ListView::new(words(20)).with_viewport_rows(5);
        view.refresh();

        view.scroll_by(3);
        assert_eq!(view.first_visible(), 3);
        view.scroll_by(-10);
        assert_eq!(view.first_visible(), 0);
    }

    #[test]
    fn test_short_list_smaller_window() {
        let mut view = ListView::new(words(3)).with_viewport_rows(10);
        view.refresh();
        assert_eq!(view.visible_rows().len(), 3);
    }

    #[test]
    fn test_adapter_shrink_then_refresh() {
        let adapter = words(20);
        let mut view = ListView::new(adapter.clone()).with_viewport_rows(5);
        view.refresh();
        view.scroll_to(15);

        adapter.set_items((0..4).map(|i| format!("word {i}")).collect());
        view.invalidate();
        view.refresh();

        let rows = view.visible_rows();
        assert_eq!(view.first_visible(), 0);
        assert_eq!(rows.len(), 4);
        assert_eq!(view.slot_text(rows[3].1), Some("word 3".into()));
    }

    #[test]
    fn test_adapter_clear_empties_window() {
        let adapter = words(8);
        let mut view = ListView::new(adapter.clone()).with_viewport_rows(5);
        view.refresh();

        adapter.clear();
        view.invalidate();
        view.refresh();

        assert!(view.visible_rows().is_empty());
        // Former window slots are pooled, not leaked
        assert_eq!(view.pooled_slots(), 5);
    }

    #[test]
    fn test_refresh_without_invalidate_is_noop() {
        let adapter = words(8);
        let mut view = ListView::new(adapter.clone()).with_viewport_rows(5);
        view.refresh();

        // Exterior mutation without notification: visible content stays
        // stale until the caller invalidates. Documented caller obligation.
        adapter.items_mut()[0] = "mutated".to_string();
        view.refresh();
        let first = view.visible_rows()[0].1;
        assert_eq!(view.slot_text(first), Some("word 0".into()));

        view.invalidate();
        view.refresh();
        let first = view.visible_rows()[0].1;
        assert_eq!(view.slot_text(first), Some("mutated".into()));
    }

    #[test]
    fn test_click_only_visible() {
        let mut view = ListView::new(words(50)).with_viewport_rows(5);
        view.refresh();

        let hits = Arc::new(Mutex::new(Vec::new()));
        let recv = hits.clone();
        view.clicked.connect(move |&pos| {
            recv.lock().push(pos);
        });

        view.click(2);
        view.click(30); // off-screen, ignored
        assert_eq!(*hits.lock(), vec![2]);
    }
}
