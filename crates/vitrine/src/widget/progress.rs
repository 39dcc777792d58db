//! Progress bar widget state.
//!
//! Supports determinate progress over an arbitrary range, an indeterminate
//! (busy) mode, and customizable text with format placeholders.
//!
//! # Example
//!
//! ```
//! use vitrine::widget::ProgressBar;
//!
//! let mut progress = ProgressBar::new();
//! progress.set_value(50); // 50%
//! assert_eq!(progress.text(), "50%");
//!
//! // Custom range and format
//! let mut download = ProgressBar::new()
//!     .with_range(0, 1000)
//!     .with_format("%v/%m bytes");
//!
//! // Indeterminate (busy) mode
//! let busy = ProgressBar::new().with_range(0, 0); // min == max
//! assert!(busy.is_indeterminate());
//! ```

use vitrine_core::Signal;

/// State of a progress indicator.
///
/// # Progress Range
///
/// By default the bar ranges from 0 to 100. The progress fraction is
/// `(value - minimum) / (maximum - minimum)`.
///
/// # Indeterminate Mode
///
/// When `minimum == maximum` (typically both 0), the bar is indeterminate:
/// the external toolkit animates a busy indicator and no text is shown.
///
/// # Text Format
///
/// - `%p` - Percentage complete (e.g. "50")
/// - `%v` - Current value
/// - `%m` - Maximum value
///
/// The default format is `"%p%"`.
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the value changes
pub struct ProgressBar {
    minimum: i32,
    maximum: i32,
    value: i32,
    format: String,
    text_visible: bool,

    /// Emitted when the value changes.
    pub value_changed: Signal<i32>,
}

impl ProgressBar {
    /// Create a progress bar with range 0..=100, value 0, format `"%p%"`.
    pub fn new() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            value: 0,
            format: "%p%".to_string(),
            text_visible: true,
            value_changed: Signal::new(),
        }
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current progress value.
    ///
    /// The value is clamped to the range; the signal fires only on change.
    pub fn set_value(&mut self, value: i32) {
        let clamped = if self.minimum <= self.maximum {
            value.clamp(self.minimum, self.maximum)
        } else {
            value.clamp(self.maximum, self.minimum)
        };

        if self.value != clamped {
            self.value = clamped;
            self.value_changed.emit(clamped);
        }
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the progress range.
    ///
    /// Setting `minimum == maximum` enables indeterminate mode. The current
    /// value is clamped into the new range.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        if self.minimum != minimum || self.maximum != maximum {
            self.minimum = minimum;
            self.maximum = maximum;
            self.value = if minimum <= maximum {
                self.value.clamp(minimum, maximum)
            } else {
                self.value.clamp(maximum, minimum)
            };
        }
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    /// Check if the bar is in indeterminate mode (`minimum == maximum`).
    pub fn is_indeterminate(&self) -> bool {
        self.minimum == self.maximum
    }

    /// Get the progress fraction (0.0 to 1.0).
    ///
    /// Returns 0.0 in indeterminate mode.
    pub fn progress(&self) -> f32 {
        if self.is_indeterminate() {
            return 0.0;
        }
        let range = (self.maximum - self.minimum) as f32;
        ((self.value - self.minimum) as f32 / range).clamp(0.0, 1.0)
    }

    /// Reset the bar to its minimum value.
    pub fn reset(&mut self) {
        self.set_value(self.minimum);
    }

    /// Whether the external toolkit should display progress text.
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    /// Set whether progress text is displayed.
    pub fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }

    /// Set text visibility using builder pattern.
    pub fn with_text_visible(mut self, visible: bool) -> Self {
        self.text_visible = visible;
        self
    }

    /// Get the format string.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Set the format string for progress text (`%p`, `%v`, `%m`).
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    /// Set format using builder pattern.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Get the formatted progress text.
    ///
    /// Empty in indeterminate mode.
    pub fn text(&self) -> String {
        if self.is_indeterminate() {
            return String::new();
        }

        let percentage = (self.progress() * 100.0).round() as i32;
        self.format
            .replace("%p", &percentage.to_string())
            .replace("%v", &self.value.to_string())
            .replace("%m", &self.maximum.to_string())
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(ProgressBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_creation() {
        let bar = ProgressBar::new();
        assert_eq!(bar.minimum(), 0);
        assert_eq!(bar.maximum(), 100);
        assert_eq!(bar.value(), 0);
        assert_eq!(bar.format(), "%p%");
        assert!(bar.text_visible());
    }

    #[test]
    fn test_progress_fraction() {
        let mut bar = ProgressBar::new();
        bar.set_value(50);
        assert!((bar.progress() - 0.5).abs() < 0.001);

        let mut custom = ProgressBar::new().with_range(10, 20);
        custom.set_value(15);
        assert!((custom.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_value_clamping() {
        let mut bar = ProgressBar::new().with_range(0, 100);
        bar.set_value(-10);
        assert_eq!(bar.value(), 0);
        bar.set_value(150);
        assert_eq!(bar.value(), 100);
    }

    #[test]
    fn test_indeterminate_mode() {
        let bar = ProgressBar::new().with_range(0, 0);
        assert!(bar.is_indeterminate());
        assert_eq!(bar.progress(), 0.0);
        assert_eq!(bar.text(), "");
    }

    #[test]
    fn test_text_formatting() {
        let bar = ProgressBar::new()
            .with_range(0, 200)
            .with_value(100)
            .with_format("%p% (%v of %m)");
        assert_eq!(bar.text(), "50% (100 of 200)");
    }

    #[test]
    fn test_signal_only_on_change() {
        let mut bar = ProgressBar::new().with_value(50);
        let count = Arc::new(AtomicI32::new(0));

        let c = count.clone();
        bar.value_changed.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        bar.set_value(50); // no change
        assert_eq!(count.load(Ordering::SeqCst), 0);
        bar.set_value(51);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reset() {
        let mut bar = ProgressBar::new().with_range(5, 50).with_value(30);
        bar.reset();
        assert_eq!(bar.value(), 5);
    }

    #[test]
    fn test_range_change_reclamps_value() {
        let mut bar = ProgressBar::new().with_value(80);
        bar.set_range(0, 50);
        assert_eq!(bar.value(), 50);
    }
}
