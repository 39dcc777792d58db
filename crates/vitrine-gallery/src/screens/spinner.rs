//! Dropdown selector demo.
//!
//! The planet-picker: a spinner over a passed-in entry table, mirroring
//! the selection into a label.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine::widget::Spinner;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

pub struct SpinnerScreen {
    spinner: Spinner,
    label: Arc<Mutex<String>>,
}

impl SpinnerScreen {
    pub fn new(config: &ScreenConfig) -> Self {
        let mut spinner = Spinner::new(config.planets().to_vec());
        let label = Arc::new(Mutex::new(String::new()));

        let entries = config.planets().to_vec();
        let mirror = label.clone();
        spinner.selection_changed.connect(move |&index| {
            if let Some(text) = entries.get(index) {
                *mirror.lock() = text.clone();
            }
        });

        Self { spinner, label }
    }

    /// Open the popup, pick `index`, close it.
    pub fn pick(&mut self, index: usize) {
        self.spinner.open();
        self.spinner.pick(index);
    }
}

impl Screen for SpinnerScreen {
    fn title(&self) -> &str {
        "Spinner"
    }

    fn activate(&mut self) {
        let last = self.spinner.len().saturating_sub(1);
        self.pick(last);
        tracing::info!(
            target: targets::GALLERY,
            selected = ?self.spinner.current_text(),
            "picked dropdown entry"
        );
    }

    fn deactivate(&mut self) {
        self.spinner.close();
    }

    fn status(&self) -> String {
        format!(
            "selected {:?} (label {:?})",
            self.spinner.current_text().unwrap_or(""),
            self.label.lock()
        )
    }
}
