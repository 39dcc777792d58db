//! Rating bar widget state.
//!
//! A row of stars the user fills in, or a read-only indicator mirroring a
//! stored score.
//!
//! # Example
//!
//! ```
//! use vitrine::widget::RatingBar;
//!
//! let mut bar = RatingBar::new().with_step(0.5);
//! bar.set_rating(2.3);
//! assert_eq!(bar.rating(), 2.5); // snapped to the step grid
//! ```

use vitrine_core::Signal;

/// State of a star-rating control.
///
/// Ratings are fractional, snapped to a configurable step (1.0 for whole
/// stars, 0.5 for half stars), and clamped to `0.0..=max_stars`.
///
/// # Signals
///
/// - `rating_changed(f32)`: Emitted when the rating changes
pub struct RatingBar {
    max_stars: u32,
    rating: f32,
    step: f32,
    indicator: bool,

    /// Emitted when the rating changes.
    pub rating_changed: Signal<f32>,
}

impl RatingBar {
    /// Create a rating bar with 5 stars, whole-star steps, rating 0.
    pub fn new() -> Self {
        Self {
            max_stars: 5,
            rating: 0.0,
            step: 1.0,
            indicator: false,
            rating_changed: Signal::new(),
        }
    }

    /// Number of stars.
    pub fn max_stars(&self) -> u32 {
        self.max_stars
    }

    /// Set the number of stars, re-clamping the current rating.
    pub fn set_max_stars(&mut self, stars: u32) {
        self.max_stars = stars;
        let clamped = self.rating.min(stars as f32);
        if clamped != self.rating {
            self.rating = clamped;
            self.rating_changed.emit(clamped);
        }
    }

    /// Set star count using builder pattern.
    pub fn with_max_stars(mut self, stars: u32) -> Self {
        self.set_max_stars(stars);
        self
    }

    /// The step granularity (1.0 whole stars, 0.5 half stars).
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Set the step granularity. Non-positive steps are ignored.
    pub fn set_step(&mut self, step: f32) {
        if step > 0.0 {
            self.step = step;
        }
    }

    /// Set step using builder pattern.
    pub fn with_step(mut self, step: f32) -> Self {
        self.set_step(step);
        self
    }

    /// The current rating.
    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Set the rating.
    ///
    /// Snapped to the step grid, clamped to `0.0..=max_stars`; the signal
    /// fires only on change. Ignored in indicator mode.
    pub fn set_rating(&mut self, rating: f32) {
        if self.indicator {
            return;
        }
        self.force_rating(rating);
    }

    /// Set rating using builder pattern.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.force_rating(rating);
        self
    }

    /// Set the rating regardless of indicator mode.
    ///
    /// This is the path for mirroring a stored score into a read-only bar.
    pub fn force_rating(&mut self, rating: f32) {
        let snapped = (rating / self.step).round() * self.step;
        let clamped = snapped.clamp(0.0, self.max_stars as f32);
        if (clamped - self.rating).abs() > f32::EPSILON {
            self.rating = clamped;
            self.rating_changed.emit(clamped);
        }
    }

    /// Whether the bar is a read-only indicator.
    pub fn is_indicator(&self) -> bool {
        self.indicator
    }

    /// Set indicator (read-only) mode.
    pub fn set_indicator(&mut self, indicator: bool) {
        self.indicator = indicator;
    }

    /// Set indicator mode using builder pattern.
    pub fn with_indicator(mut self, indicator: bool) -> Self {
        self.indicator = indicator;
        self
    }
}

impl Default for RatingBar {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(RatingBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let bar = RatingBar::new();
        assert_eq!(bar.max_stars(), 5);
        assert_eq!(bar.rating(), 0.0);
        assert_eq!(bar.step(), 1.0);
        assert!(!bar.is_indicator());
    }

    #[test]
    fn test_whole_star_snapping() {
        let mut bar = RatingBar::new();
        bar.set_rating(3.4);
        assert_eq!(bar.rating(), 3.0);
        bar.set_rating(3.6);
        assert_eq!(bar.rating(), 4.0);
    }

    #[test]
    fn test_half_star_snapping() {
        let mut bar = RatingBar::new().with_step(0.5);
        bar.set_rating(2.3);
        assert_eq!(bar.rating(), 2.5);
    }

    #[test]
    fn test_clamping() {
        let mut bar = RatingBar::new();
        bar.set_rating(9.0);
        assert_eq!(bar.rating(), 5.0);
        bar.set_rating(-2.0);
        assert_eq!(bar.rating(), 0.0);
    }

    #[test]
    fn test_indicator_ignores_user_input() {
        let mut bar = RatingBar::new().with_indicator(true);
        bar.set_rating(4.0);
        assert_eq!(bar.rating(), 0.0);

        bar.force_rating(4.0);
        assert_eq!(bar.rating(), 4.0);
    }

    #[test]
    fn test_signal_emissions() {
        let mut bar = RatingBar::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let recv = seen.clone();
        bar.rating_changed.connect(move |&r| {
            recv.lock().push(r);
        });

        bar.set_rating(3.0);
        bar.set_rating(3.2); // snaps to 3.0, unchanged
        bar.set_rating(4.0);
        assert_eq!(*seen.lock(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_shrinking_max_reclamps() {
        let mut bar = RatingBar::new().with_rating(5.0);
        bar.set_max_stars(3);
        assert_eq!(bar.rating(), 3.0);
    }
}
