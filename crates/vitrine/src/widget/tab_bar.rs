//! Tab bar widget state.
//!
//! A horizontal row of tabs with one current tab. Tabs can be disabled;
//! selecting a disabled tab does nothing.
//!
//! # Example
//!
//! ```
//! use vitrine::widget::TabBar;
//!
//! let mut tabs = TabBar::new();
//! tabs.add_tab("Overview");
//! tabs.add_tab("Details");
//! tabs.add_tab("History");
//!
//! tabs.set_current_index(1);
//! assert_eq!(tabs.tab_text(1), Some("Details"));
//! ```

use vitrine_core::Signal;

/// One tab in a [`TabBar`].
#[derive(Debug, Clone)]
struct Tab {
    text: String,
    enabled: bool,
}

/// State of a tab row.
///
/// # Signals
///
/// - `current_changed(usize)`: Emitted when the current tab changes
pub struct TabBar {
    tabs: Vec<Tab>,
    current_index: usize,

    /// Emitted when the current tab changes.
    pub current_changed: Signal<usize>,
}

impl TabBar {
    /// Create an empty tab bar.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            current_index: 0,
            current_changed: Signal::new(),
        }
    }

    /// Append a tab and return its index.
    pub fn add_tab(&mut self, text: impl Into<String>) -> usize {
        self.tabs.push(Tab {
            text: text.into(),
            enabled: true,
        });
        self.tabs.len() - 1
    }

    /// Remove the tab at `index`.
    ///
    /// Out-of-range indices are ignored. If the current tab is removed the
    /// selection moves to the nearest remaining tab and the signal fires.
    pub fn remove_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.tabs.remove(index);

        let new_current = if self.tabs.is_empty() {
            0
        } else if index < self.current_index || self.current_index >= self.tabs.len() {
            self.current_index.saturating_sub(1)
        } else {
            self.current_index
        };

        if new_current != self.current_index {
            self.current_index = new_current;
            if !self.tabs.is_empty() {
                self.current_changed.emit(new_current);
            }
        } else if index == self.current_index && !self.tabs.is_empty() {
            // Same index, different tab under it
            self.current_changed.emit(new_current);
        }
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the bar has no tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Text of the tab at `index`.
    pub fn tab_text(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.text.as_str())
    }

    /// Whether the tab at `index` is enabled. Out of range reads as false.
    pub fn is_tab_enabled(&self, index: usize) -> bool {
        self.tabs.get(index).map(|t| t.enabled).unwrap_or(false)
    }

    /// Enable or disable the tab at `index`.
    pub fn set_tab_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.enabled = enabled;
        }
    }

    /// The current tab index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current tab's text.
    pub fn current_text(&self) -> Option<&str> {
        self.tab_text(self.current_index)
    }

    /// Select the tab at `index`.
    ///
    /// Out-of-range or disabled tabs are a no-op; the signal fires only on
    /// change.
    pub fn set_current_index(&mut self, index: usize) {
        if index >= self.tabs.len() || !self.tabs[index].enabled {
            return;
        }
        if index != self.current_index {
            self.current_index = index;
            self.current_changed.emit(index);
        }
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(TabBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn three_tabs() -> TabBar {
        let mut tabs = TabBar::new();
        tabs.add_tab("One");
        tabs.add_tab("Two");
        tabs.add_tab("Three");
        tabs
    }

    #[test]
    fn test_add_and_select() {
        let mut tabs = three_tabs();
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs.current_text(), Some("One"));

        tabs.set_current_index(2);
        assert_eq!(tabs.current_text(), Some("Three"));
    }

    #[test]
    fn test_disabled_tab_not_selectable() {
        let mut tabs = three_tabs();
        tabs.set_tab_enabled(1, false);

        tabs.set_current_index(1);
        assert_eq!(tabs.current_index(), 0);

        tabs.set_tab_enabled(1, true);
        tabs.set_current_index(1);
        assert_eq!(tabs.current_index(), 1);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let mut tabs = three_tabs();
        tabs.set_current_index(10);
        assert_eq!(tabs.current_index(), 0);
    }

    #[test]
    fn test_signal_only_on_change() {
        let mut tabs = three_tabs();
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        tabs.current_changed.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tabs.set_current_index(0); // unchanged
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tabs.set_current_index(2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_before_current_shifts_selection() {
        let mut tabs = three_tabs();
        tabs.set_current_index(2);

        tabs.remove_tab(0);
        assert_eq!(tabs.current_index(), 1);
        assert_eq!(tabs.current_text(), Some("Three"));
    }

    #[test]
    fn test_remove_current_moves_to_neighbor() {
        let mut tabs = three_tabs();
        tabs.set_current_index(2);

        tabs.remove_tab(2);
        assert_eq!(tabs.current_index(), 1);
        assert_eq!(tabs.current_text(), Some("Two"));
    }

    #[test]
    fn test_remove_all() {
        let mut tabs = three_tabs();
        tabs.remove_tab(0);
        tabs.remove_tab(0);
        tabs.remove_tab(0);
        assert!(tabs.is_empty());
        assert_eq!(tabs.current_text(), None);
    }
}
