//! Pointer icon customization demo.
//!
//! Named regions with distinct pointer icons, plus a busy override pushed
//! over all of them.

use cursor_icon::CursorIcon;
use vitrine::widget::PointerRegion;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

pub struct PointerIconScreen {
    regions: PointerRegion,
    probe: CursorIcon,
}

impl PointerIconScreen {
    pub fn new(_config: &ScreenConfig) -> Self {
        let mut regions = PointerRegion::new();
        regions.set_icon("link", CursorIcon::Pointer);
        regions.set_icon("text", CursorIcon::Text);
        regions.set_icon("canvas", CursorIcon::Crosshair);
        regions.set_icon("resize", CursorIcon::EwResize);
        Self {
            regions,
            probe: CursorIcon::Default,
        }
    }

    /// The icon currently shown over `region`.
    pub fn icon_at(&self, region: &str) -> CursorIcon {
        self.regions.icon_at(region)
    }
}

impl Screen for PointerIconScreen {
    fn title(&self) -> &str {
        "Pointer icons"
    }

    fn activate(&mut self) {
        // Simulate a blocking operation: every region shows the wait icon
        // until the override is popped.
        self.regions.push_override(CursorIcon::Wait);
        self.probe = self.regions.icon_at("link");
        self.regions.pop_override();
        tracing::info!(
            target: targets::GALLERY,
            during_override = ?self.probe,
            after = ?self.regions.icon_at("link"),
            "override cycle complete"
        );
    }

    fn deactivate(&mut self) {
        while self.regions.pop_override().is_some() {}
    }

    fn status(&self) -> String {
        format!(
            "link={:?} text={:?} canvas={:?} (override {:?})",
            self.regions.icon_at("link"),
            self.regions.icon_at("text"),
            self.regions.icon_at("canvas"),
            self.regions.active_override()
        )
    }
}
