//! Hover interception container state.
//!
//! A container that may claim pointer hover before its child sees it. Used
//! to demonstrate event interception: when intercepting, the container's
//! own hover flag tracks the pointer and the child's stays false.

use vitrine_core::Signal;

/// State of a container that can intercept hover from its child.
///
/// `pointer_entered()` / `pointer_left()` are driven by the external
/// toolkit's hit testing. The container decides at delivery time whether
/// the child observes the hover.
///
/// # Signals
///
/// - `hover_changed(bool)`: Emitted when the container's hover flag changes
pub struct HoverInterceptor {
    intercept: bool,
    hovered: bool,
    child_hovered: bool,

    /// Emitted when the container's hover flag changes.
    pub hover_changed: Signal<bool>,
}

impl HoverInterceptor {
    /// Create a non-intercepting container with no hover.
    pub fn new() -> Self {
        Self {
            intercept: false,
            hovered: false,
            child_hovered: false,
            hover_changed: Signal::new(),
        }
    }

    /// Whether hover is intercepted before the child.
    pub fn intercepts(&self) -> bool {
        self.intercept
    }

    /// Enable or disable interception.
    ///
    /// Enabling interception while the child is hovered takes the hover
    /// away from the child immediately.
    pub fn set_intercept(&mut self, intercept: bool) {
        self.intercept = intercept;
        if intercept && self.child_hovered {
            self.child_hovered = false;
        }
    }

    /// Set interception using builder pattern.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.set_intercept(intercept);
        self
    }

    /// Whether the container itself is hovered.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the child currently observes the hover.
    pub fn child_hovered(&self) -> bool {
        self.child_hovered
    }

    /// The pointer entered the container's bounds.
    pub fn pointer_entered(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.hover_changed.emit(true);
        }
        if !self.intercept {
            self.child_hovered = true;
        }
    }

    /// The pointer left the container's bounds.
    pub fn pointer_left(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.hover_changed.emit(false);
        }
        self.child_hovered = false;
    }
}

impl Default for HoverInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(HoverInterceptor: Send, Sync);
