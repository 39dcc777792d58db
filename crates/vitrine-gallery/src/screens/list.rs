//! Recycling list demo.
//!
//! The canonical adapter demo: a large word table behind a
//! `ListAdapter<String>`, scrolled through a small viewport so slots get
//! recycled rather than re-inflated.

use std::sync::Arc;

use vitrine::model::{ListAdapter, RowAdapter};
use vitrine::view::ListView;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

const VIEWPORT_ROWS: usize = 6;

pub struct ListScreen {
    adapter: Arc<ListAdapter<String>>,
    view: ListView,
}

impl ListScreen {
    pub fn new(config: &ScreenConfig) -> Self {
        let adapter = Arc::new(ListAdapter::new(config.words().to_vec()));
        let view =
            ListView::new(adapter.clone() as Arc<dyn RowAdapter>).with_viewport_rows(VIEWPORT_ROWS);
        Self { adapter, view }
    }

    /// The view, for driving scrolling from outside.
    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }
}

impl Screen for ListScreen {
    fn title(&self) -> &str {
        "Recycling list"
    }

    fn activate(&mut self) {
        self.view.refresh();
        // Page through the whole table once; the arena should stay at one
        // viewport's worth of slots throughout.
        let mut pages = 0;
        while self.view.first_visible() + VIEWPORT_ROWS < self.adapter.len() {
            self.view.scroll_by(VIEWPORT_ROWS as isize);
            pages += 1;
        }
        tracing::info!(
            target: targets::GALLERY,
            pages,
            slots = self.view.arena().len(),
            "scrolled through word table"
        );
    }

    fn deactivate(&mut self) {
        self.view.scroll_to(0);
    }

    fn status(&self) -> String {
        let rows = self.view.visible_rows();
        let first = rows.first().map(|&(p, _)| p).unwrap_or(0);
        let last = rows.last().map(|&(p, _)| p).unwrap_or(0);
        format!(
            "rows {}..={} of {} ({} live slots)",
            first,
            last,
            self.adapter.len(),
            self.view.arena().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolling_keeps_slot_count_flat() {
        let config = ScreenConfig::default();
        let mut screen = ListScreen::new(&config);
        screen.activate();

        assert_eq!(screen.view.arena().len(), VIEWPORT_ROWS);
        let last = screen.view.visible_rows().last().unwrap().0;
        assert_eq!(last, config.words().len() - 1);
    }

    #[test]
    fn test_deactivate_rewinds() {
        let config = ScreenConfig::default();
        let mut screen = ListScreen::new(&config);
        screen.activate();
        screen.deactivate();
        assert_eq!(screen.view.first_visible(), 0);

        let first = screen.view.visible_rows()[0].1;
        assert_eq!(
            screen.view.slot_text(first).as_deref(),
            Some(config.words()[0].as_str())
        );
    }
}
