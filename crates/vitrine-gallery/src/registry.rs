//! The gallery registry.
//!
//! Maps screen names to constructors, in registration order, so the
//! binary can walk every demo and callers can build one by name.

use thiserror::Error;

use crate::config::ScreenConfig;
use crate::screen::Screen;

/// Errors from gallery lookup.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// No screen is registered under the requested name.
    #[error("unknown screen: {name}")]
    UnknownScreen { name: String },
}

type ScreenCtor = Box<dyn Fn(&ScreenConfig) -> Box<dyn Screen> + Send + Sync>;

/// An ordered collection of named screen constructors.
pub struct GalleryRegistry {
    screens: Vec<(String, ScreenCtor)>,
}

impl GalleryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    /// Register a screen constructor under `name`.
    ///
    /// Registration order is the order `screen_names` reports.
    pub fn register<F>(&mut self, name: impl Into<String>, ctor: F)
    where
        F: Fn(&ScreenConfig) -> Box<dyn Screen> + Send + Sync + 'static,
    {
        self.screens.push((name.into(), Box::new(ctor)));
    }

    /// Names of all registered screens, in registration order.
    pub fn screen_names(&self) -> Vec<&str> {
        self.screens.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of registered screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Build the screen registered under `name`.
    pub fn build(&self, name: &str, config: &ScreenConfig) -> Result<Box<dyn Screen>, GalleryError> {
        self.screens
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ctor)| ctor(config))
            .ok_or_else(|| GalleryError::UnknownScreen {
                name: name.to_string(),
            })
    }
}

impl Default for GalleryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard registry with every demo screen.
pub fn standard_registry() -> GalleryRegistry {
    use crate::screens;

    let mut registry = GalleryRegistry::new();
    registry.register("list", |c| Box::new(screens::ListScreen::new(c)));
    registry.register("checkable-list", |c| {
        Box::new(screens::CheckableListScreen::new(c))
    });
    registry.register("spinner", |c| Box::new(screens::SpinnerScreen::new(c)));
    registry.register("progress", |c| Box::new(screens::ProgressScreen::new(c)));
    registry.register("rating", |c| Box::new(screens::RatingScreen::new(c)));
    registry.register("tabs", |c| Box::new(screens::TabsScreen::new(c)));
    registry.register("hover", |c| Box::new(screens::HoverScreen::new(c)));
    registry.register("pointer-icon", |c| {
        Box::new(screens::PointerIconScreen::new(c))
    });
    registry.register("drag-reorder", |c| {
        Box::new(screens::DragReorderScreen::new(c))
    });
    registry
}
