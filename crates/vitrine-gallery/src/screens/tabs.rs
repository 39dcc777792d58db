//! Tab host demo.
//!
//! A tab bar with one content string per tab; the current content follows
//! the selection.

use vitrine::widget::TabBar;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

pub struct TabsScreen {
    tabs: TabBar,
    contents: Vec<String>,
}

impl TabsScreen {
    pub fn new(_config: &ScreenConfig) -> Self {
        let mut tabs = TabBar::new();
        let mut contents = Vec::new();
        for (title, content) in [
            ("Overview", "Welcome to the gallery."),
            ("Details", "Each tab hosts its own content."),
            ("History", "Selecting a tab swaps the content below."),
        ] {
            tabs.add_tab(title);
            contents.push(content.to_string());
        }
        Self { tabs, contents }
    }

    /// The content string for the current tab.
    pub fn current_content(&self) -> &str {
        self.contents
            .get(self.tabs.current_index())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Screen for TabsScreen {
    fn title(&self) -> &str {
        "Tabs"
    }

    fn activate(&mut self) {
        // Visit every tab, ending on the last
        for index in 0..self.tabs.len() {
            self.tabs.set_current_index(index);
        }
        tracing::info!(
            target: targets::GALLERY,
            tab = ?self.tabs.current_text(),
            "visited all tabs"
        );
    }

    fn deactivate(&mut self) {
        self.tabs.set_current_index(0);
    }

    fn status(&self) -> String {
        format!(
            "tab {:?}: {}",
            self.tabs.current_text().unwrap_or(""),
            self.current_content()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_follows_selection() {
        let mut screen = TabsScreen::new(&ScreenConfig::default());
        assert_eq!(screen.current_content(), "Welcome to the gallery.");

        screen.tabs.set_current_index(1);
        assert_eq!(screen.current_content(), "Each tab hosts its own content.");
    }

    #[test]
    fn test_disabled_tab_keeps_content() {
        let mut screen = TabsScreen::new(&ScreenConfig::default());
        screen.tabs.set_tab_enabled(2, false);
        screen.tabs.set_current_index(2);
        assert_eq!(screen.tabs.current_index(), 0);
        assert_eq!(screen.current_content(), "Welcome to the gallery.");
    }

    #[test]
    fn test_activate_ends_on_last_tab() {
        let mut screen = TabsScreen::new(&ScreenConfig::default());
        screen.activate();
        assert_eq!(screen.tabs.current_text(), Some("History"));
    }
}
