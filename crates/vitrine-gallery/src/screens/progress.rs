//! Progress demo.
//!
//! A determinate bar stepped to completion next to an indeterminate one.

use vitrine::widget::ProgressBar;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

const STEP: i32 = 10;

pub struct ProgressScreen {
    determinate: ProgressBar,
    busy: ProgressBar,
}

impl ProgressScreen {
    pub fn new(_config: &ScreenConfig) -> Self {
        Self {
            determinate: ProgressBar::new().with_format("%p% (%v/%m)"),
            busy: ProgressBar::new().with_range(0, 0),
        }
    }

    /// Step the determinate bar forward.
    pub fn advance(&mut self) {
        self.determinate.set_value(self.determinate.value() + STEP);
    }
}

impl Screen for ProgressScreen {
    fn title(&self) -> &str {
        "Progress"
    }

    fn activate(&mut self) {
        while self.determinate.value() < self.determinate.maximum() {
            self.advance();
        }
        tracing::info!(
            target: targets::GALLERY,
            text = %self.determinate.text(),
            "determinate bar completed"
        );
    }

    fn deactivate(&mut self) {
        self.determinate.reset();
    }

    fn status(&self) -> String {
        format!(
            "determinate: {}; busy: indeterminate={}",
            self.determinate.text(),
            self.busy.is_indeterminate()
        )
    }
}
