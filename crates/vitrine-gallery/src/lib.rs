//! # Vitrine Gallery
//!
//! Standalone demonstration screens for the Vitrine widget surface. Each
//! screen is independent and exercises exactly one widget or interaction
//! pattern; the `gallery` binary walks every registered screen headlessly.
//!
//! ```
//! use vitrine_gallery::config::ScreenConfig;
//! use vitrine_gallery::registry::standard_registry;
//!
//! let registry = standard_registry();
//! let config = ScreenConfig::default();
//!
//! let mut screen = registry.build("spinner", &config).unwrap();
//! screen.activate();
//! println!("{}: {}", screen.title(), screen.status());
//! screen.deactivate();
//! ```

pub mod config;
pub mod registry;
pub mod screen;
pub mod screens;

pub use config::ScreenConfig;
pub use registry::{standard_registry, GalleryError, GalleryRegistry};
pub use screen::Screen;
