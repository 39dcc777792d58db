//! Hover interception demo.
//!
//! A container sweeps the pointer over its child twice, once passing the
//! hover through and once intercepting it.

use vitrine::widget::HoverInterceptor;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

pub struct HoverScreen {
    container: HoverInterceptor,
    child_saw_hover: bool,
}

impl HoverScreen {
    pub fn new(_config: &ScreenConfig) -> Self {
        Self {
            container: HoverInterceptor::new(),
            child_saw_hover: false,
        }
    }

    /// Move the pointer across the container and record what the child saw.
    fn sweep(&mut self) {
        self.container.pointer_entered();
        self.child_saw_hover = self.container.child_hovered();
        self.container.pointer_left();
    }
}

impl Screen for HoverScreen {
    fn title(&self) -> &str {
        "Hover interception"
    }

    fn activate(&mut self) {
        self.container.set_intercept(false);
        self.sweep();
        let passed_through = self.child_saw_hover;

        self.container.set_intercept(true);
        self.sweep();
        tracing::info!(
            target: targets::GALLERY,
            passed_through,
            intercepted = !self.child_saw_hover,
            "hover sweeps complete"
        );
    }

    fn deactivate(&mut self) {
        self.container.pointer_left();
        self.container.set_intercept(false);
    }

    fn status(&self) -> String {
        format!(
            "intercepting={}, child saw last hover: {}",
            self.container.intercepts(),
            self.child_saw_hover
        )
    }
}
