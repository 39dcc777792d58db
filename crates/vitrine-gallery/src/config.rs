//! Screen configuration.
//!
//! All display resources a screen needs arrive through this struct. No
//! screen reads ambient globals for its strings or icons; tests construct
//! a `ScreenConfig` with whatever tables they want to observe.

use vitrine::model::IconId;

/// The resource tables handed to every screen constructor.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    words: Vec<String>,
    planets: Vec<String>,
    settings: Vec<String>,
    icons: Vec<IconId>,
}

impl ScreenConfig {
    /// Build a config from explicit tables.
    pub fn new(
        words: Vec<String>,
        planets: Vec<String>,
        settings: Vec<String>,
        icons: Vec<IconId>,
    ) -> Self {
        Self {
            words,
            planets,
            settings,
            icons,
        }
    }

    /// The word table the list demos scroll through.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The entry table for the dropdown demo.
    pub fn planets(&self) -> &[String] {
        &self.planets
    }

    /// Labels for the checkable settings demo.
    pub fn settings(&self) -> &[String] {
        &self.settings
    }

    /// Icon handles available to decorated rows.
    pub fn icons(&self) -> &[IconId] {
        &self.icons
    }
}

impl Default for ScreenConfig {
    /// The stock tables the gallery binary ships with.
    fn default() -> Self {
        let words = [
            "Apple", "Banana", "Cherry", "Damson", "Elderberry", "Fig", "Grape", "Hackberry",
            "Imbe", "Jackfruit", "Kiwi", "Lime", "Mango", "Nectarine", "Olive", "Papaya",
            "Quince", "Raspberry", "Strawberry", "Tamarind", "Ugli", "Vanilla", "Walnut",
            "Ximenia", "Yuzu", "Zucchini",
        ];
        let planets = [
            "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
        ];
        let settings = ["Wi-Fi", "Bluetooth", "Mobile data", "Airplane mode", "NFC"];

        Self {
            words: words.iter().map(|s| s.to_string()).collect(),
            planets: planets.iter().map(|s| s.to_string()).collect(),
            settings: settings.iter().map(|s| s.to_string()).collect(),
            icons: (1..=4).map(IconId).collect(),
        }
    }
}
