//! Checkable settings list demo.
//!
//! Rows carry a check state through the adapter's `CheckState` role and a
//! checkable slot template; toggling a row mutates the record and the view
//! rebinds it on refresh.

use std::sync::Arc;

use vitrine::model::{
    CheckState, ItemData, ListAdapter, RowAdapter, RowItem, SlotTemplate,
};
use vitrine::view::ListView;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

struct SettingRow {
    label: String,
    state: CheckState,
}

impl RowItem for SettingRow {
    fn display(&self) -> ItemData {
        ItemData::from(self.label.as_str())
    }

    fn check(&self) -> Option<CheckState> {
        Some(self.state)
    }
}

pub struct CheckableListScreen {
    adapter: Arc<ListAdapter<SettingRow>>,
    view: ListView,
}

impl CheckableListScreen {
    pub fn new(config: &ScreenConfig) -> Self {
        let rows = config
            .settings()
            .iter()
            .map(|label| SettingRow {
                label: label.clone(),
                state: CheckState::Unchecked,
            })
            .collect();
        let adapter = Arc::new(
            ListAdapter::new(rows).with_template(SlotTemplate::checkable()),
        );
        let view = ListView::new(adapter.clone() as Arc<dyn RowAdapter>)
            .with_viewport_rows(config.settings().len().max(1));
        Self { adapter, view }
    }

    /// Toggle the row at `position` and rebind the visible window.
    pub fn toggle(&mut self, position: usize) {
        self.adapter.modify(position, |row| {
            row.state = row.state.toggle();
        });
        self.view.invalidate();
        self.view.refresh();
    }

    fn checked_count(&self) -> usize {
        self.adapter
            .items()
            .iter()
            .filter(|row| row.state.is_checked())
            .count()
    }
}

impl Screen for CheckableListScreen {
    fn title(&self) -> &str {
        "Checkable list"
    }

    fn activate(&mut self) {
        self.view.refresh();
        // Switch on every other setting
        for position in (0..self.adapter.len()).step_by(2) {
            self.toggle(position);
        }
        tracing::info!(
            target: targets::GALLERY,
            checked = self.checked_count(),
            "toggled alternate settings"
        );
    }

    fn deactivate(&mut self) {
        for position in 0..self.adapter.len() {
            self.adapter.modify(position, |row| {
                row.state = CheckState::Unchecked;
            });
        }
        self.view.invalidate();
        self.view.refresh();
    }

    fn status(&self) -> String {
        format!("{} of {} checked", self.checked_count(), self.adapter.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_rebinds_slot() {
        let config = ScreenConfig::default();
        let mut screen = CheckableListScreen::new(&config);
        screen.view.refresh();

        let (_, id) = screen.view.visible_rows()[0];
        assert_eq!(
            screen.view.arena().slot(id).unwrap().check,
            Some(CheckState::Unchecked)
        );

        screen.toggle(0);
        let (_, id) = screen.view.visible_rows()[0];
        assert_eq!(
            screen.view.arena().slot(id).unwrap().check,
            Some(CheckState::Checked)
        );
    }

    #[test]
    fn test_activate_checks_alternate_rows() {
        let config = ScreenConfig::default();
        let mut screen = CheckableListScreen::new(&config);
        screen.activate();

        let expected = (config.settings().len() + 1) / 2;
        assert_eq!(screen.checked_count(), expected);

        screen.deactivate();
        assert_eq!(screen.checked_count(), 0);
    }
}
