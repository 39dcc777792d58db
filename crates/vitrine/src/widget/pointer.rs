//! Pointer icon regions.
//!
//! Maps named regions of a screen to pointer icons, with an
//! application-level override stack for transient operations such as
//! drag-and-drop.
//!
//! # Example
//!
//! ```
//! use cursor_icon::CursorIcon;
//! use vitrine::widget::PointerRegion;
//!
//! let mut regions = PointerRegion::new();
//! regions.set_icon("link", CursorIcon::Pointer);
//!
//! assert_eq!(regions.icon_at("link"), CursorIcon::Pointer);
//! assert_eq!(regions.icon_at("elsewhere"), CursorIcon::Default);
//!
//! regions.push_override(CursorIcon::Grabbing);
//! assert_eq!(regions.icon_at("link"), CursorIcon::Grabbing);
//! regions.pop_override();
//! assert_eq!(regions.icon_at("link"), CursorIcon::Pointer);
//! ```

use std::collections::HashMap;

use cursor_icon::CursorIcon;

/// Per-region pointer icons with an override stack.
///
/// Overrides take precedence over all region icons. They stack, so nested
/// operations restore the outer override when they finish.
pub struct PointerRegion {
    regions: HashMap<String, CursorIcon>,
    overrides: Vec<CursorIcon>,
}

impl PointerRegion {
    /// Create an empty region map.
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            overrides: Vec::new(),
        }
    }

    /// Assign an icon to a named region, replacing any previous one.
    pub fn set_icon(&mut self, region: impl Into<String>, icon: CursorIcon) {
        self.regions.insert(region.into(), icon);
    }

    /// Remove a region's icon, returning it to the default.
    pub fn clear_icon(&mut self, region: &str) {
        self.regions.remove(region);
    }

    /// Named regions with an explicit icon.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// The icon to show over `region`.
    ///
    /// The top of the override stack wins; otherwise the region's own icon;
    /// otherwise [`CursorIcon::Default`].
    pub fn icon_at(&self, region: &str) -> CursorIcon {
        if let Some(&icon) = self.overrides.last() {
            return icon;
        }
        self.regions
            .get(region)
            .copied()
            .unwrap_or(CursorIcon::Default)
    }

    /// Push an application-wide override icon.
    pub fn push_override(&mut self, icon: CursorIcon) {
        self.overrides.push(icon);
    }

    /// Pop the top override, returning it if one was set.
    pub fn pop_override(&mut self) -> Option<CursorIcon> {
        self.overrides.pop()
    }

    /// The active override, if any.
    pub fn active_override(&self) -> Option<CursorIcon> {
        self.overrides.last().copied()
    }
}

impl Default for PointerRegion {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(PointerRegion: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        let mut regions = PointerRegion::new();
        regions.set_icon("text", CursorIcon::Text);
        regions.set_icon("busy", CursorIcon::Wait);

        assert_eq!(regions.icon_at("text"), CursorIcon::Text);
        assert_eq!(regions.icon_at("busy"), CursorIcon::Wait);
        assert_eq!(regions.icon_at("unknown"), CursorIcon::Default);
    }

    #[test]
    fn test_clear_icon() {
        let mut regions = PointerRegion::new();
        regions.set_icon("text", CursorIcon::Text);
        regions.clear_icon("text");
        assert_eq!(regions.icon_at("text"), CursorIcon::Default);
    }

    #[test]
    fn test_override_stack() {
        let mut regions = PointerRegion::new();
        regions.set_icon("canvas", CursorIcon::Crosshair);

        regions.push_override(CursorIcon::Wait);
        regions.push_override(CursorIcon::NotAllowed);
        assert_eq!(regions.icon_at("canvas"), CursorIcon::NotAllowed);

        assert_eq!(regions.pop_override(), Some(CursorIcon::NotAllowed));
        assert_eq!(regions.icon_at("canvas"), CursorIcon::Wait);

        assert_eq!(regions.pop_override(), Some(CursorIcon::Wait));
        assert_eq!(regions.icon_at("canvas"), CursorIcon::Crosshair);
        assert_eq!(regions.pop_override(), None);
    }
}
