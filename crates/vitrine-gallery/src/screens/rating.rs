//! Rating demo.
//!
//! An editable half-star rating bar mirrored into a read-only indicator.

use std::sync::Arc;

use parking_lot::Mutex;
use vitrine::widget::RatingBar;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

pub struct RatingScreen {
    editable: RatingBar,
    indicator: Arc<Mutex<RatingBar>>,
}

impl RatingScreen {
    pub fn new(_config: &ScreenConfig) -> Self {
        let mut editable = RatingBar::new().with_step(0.5);
        let indicator = Arc::new(Mutex::new(
            RatingBar::new().with_step(0.5).with_indicator(true),
        ));

        let mirror = indicator.clone();
        editable.rating_changed.connect(move |&rating| {
            mirror.lock().force_rating(rating);
        });

        Self { editable, indicator }
    }

    /// Set the editable bar; the indicator follows through the signal.
    pub fn rate(&mut self, rating: f32) {
        self.editable.set_rating(rating);
    }
}

impl Screen for RatingScreen {
    fn title(&self) -> &str {
        "Rating"
    }

    fn activate(&mut self) {
        self.rate(3.5);
        tracing::info!(
            target: targets::GALLERY,
            rating = self.editable.rating(),
            "rated"
        );
    }

    fn deactivate(&mut self) {
        self.rate(0.0);
    }

    fn status(&self) -> String {
        format!(
            "rating {:.1}/{} (indicator {:.1})",
            self.editable.rating(),
            self.editable.max_stars(),
            self.indicator.lock().rating()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_editable() {
        let mut screen = RatingScreen::new(&ScreenConfig::default());
        screen.rate(2.3);
        assert_eq!(screen.editable.rating(), 2.5);
        assert_eq!(screen.indicator.lock().rating(), 2.5);
    }

    #[test]
    fn test_activate_then_deactivate() {
        let mut screen = RatingScreen::new(&ScreenConfig::default());
        screen.activate();
        assert_eq!(screen.editable.rating(), 3.5);

        screen.deactivate();
        assert_eq!(screen.editable.rating(), 0.0);
        assert_eq!(screen.indicator.lock().rating(), 0.0);
    }
}
