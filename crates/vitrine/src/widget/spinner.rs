//! Spinner widget state.
//!
//! A dropdown selector over a fixed table of entries. The entry table is
//! passed in at construction; the widget never reaches for ambient
//! resources.
//!
//! # Example
//!
//! ```
//! use vitrine::widget::Spinner;
//!
//! let mut planets = Spinner::new(vec![
//!     "Mercury".to_string(),
//!     "Venus".to_string(),
//!     "Earth".to_string(),
//! ]);
//!
//! planets.set_current_index(2);
//! assert_eq!(planets.current_text(), Some("Earth"));
//! ```

use vitrine_core::Signal;

/// State of a dropdown selector.
///
/// The popup itself is drawn by the external toolkit; this type tracks the
/// entry table, the selection, and whether the popup is open.
///
/// # Signals
///
/// - `selection_changed(usize)`: Emitted when the current index changes
pub struct Spinner {
    entries: Vec<String>,
    current_index: usize,
    open: bool,

    /// Emitted when the current index changes.
    pub selection_changed: Signal<usize>,
}

impl Spinner {
    /// Create a spinner over the given entries, selecting the first.
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            current_index: 0,
            open: false,
            selection_changed: Signal::new(),
        }
    }

    /// The entry table.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the entry table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The selected index.
    ///
    /// Meaningless when the table is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Select an entry by index.
    ///
    /// The index is clamped to the table; the signal fires only on change.
    pub fn set_current_index(&mut self, index: usize) {
        let clamped = index.min(self.entries.len().saturating_sub(1));
        if clamped != self.current_index {
            self.current_index = clamped;
            self.selection_changed.emit(clamped);
        }
    }

    /// Set the selection using builder pattern.
    pub fn with_current_index(mut self, index: usize) -> Self {
        self.set_current_index(index);
        self
    }

    /// The selected entry's text, or `None` when the table is empty.
    pub fn current_text(&self) -> Option<&str> {
        self.entries.get(self.current_index).map(String::as_str)
    }

    /// Open the dropdown popup.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dropdown popup.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Select an entry from the open popup and close it.
    pub fn pick(&mut self, index: usize) {
        self.set_current_index(index);
        self.close();
    }
}

static_assertions::assert_impl_all!(Spinner: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn planets() -> Spinner {
        Spinner::new(vec![
            "Mercury".to_string(),
            "Venus".to_string(),
            "Earth".to_string(),
            "Mars".to_string(),
        ])
    }

    #[test]
    fn test_initial_selection() {
        let spinner = planets();
        assert_eq!(spinner.current_index(), 0);
        assert_eq!(spinner.current_text(), Some("Mercury"));
        assert!(!spinner.is_open());
    }

    #[test]
    fn test_selection_clamped() {
        let mut spinner = planets();
        spinner.set_current_index(999);
        assert_eq!(spinner.current_index(), 3);
        assert_eq!(spinner.current_text(), Some("Mars"));
    }

    #[test]
    fn test_signal_only_on_change() {
        let mut spinner = planets();
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        spinner.selection_changed.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        spinner.set_current_index(0); // unchanged
        assert_eq!(count.load(Ordering::SeqCst), 0);
        spinner.set_current_index(2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pick_selects_and_closes() {
        let mut spinner = planets();
        spinner.open();
        assert!(spinner.is_open());
        spinner.pick(1);
        assert_eq!(spinner.current_text(), Some("Venus"));
        assert!(!spinner.is_open());
    }

    #[test]
    fn test_empty_table() {
        let mut spinner = Spinner::new(Vec::new());
        assert!(spinner.is_empty());
        assert_eq!(spinner.current_text(), None);
        spinner.set_current_index(5); // clamps to 0, no panic
        assert_eq!(spinner.current_index(), 0);
    }
}
