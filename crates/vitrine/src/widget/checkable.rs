//! Checkable row container state.
//!
//! A container row that owns a check state and toggles it when the row is
//! activated (tapped anywhere on the row, not just on the check element).
//!
//! # Example
//!
//! ```
//! use vitrine::model::CheckState;
//! use vitrine::widget::CheckableRow;
//!
//! let mut row = CheckableRow::new("Wi-Fi");
//! row.activate();
//! assert_eq!(row.check_state(), CheckState::Checked);
//! ```

use vitrine_core::Signal;

use crate::model::CheckState;

/// State of a row that toggles a check mark on activation.
///
/// With `tristate` enabled, activation cycles Unchecked, PartiallyChecked,
/// Checked; otherwise it alternates Unchecked and Checked.
///
/// # Signals
///
/// - `toggled(CheckState)`: Emitted when the check state changes
pub struct CheckableRow {
    text: String,
    state: CheckState,
    tristate: bool,
    enabled: bool,

    /// Emitted when the check state changes.
    pub toggled: Signal<CheckState>,
}

impl CheckableRow {
    /// Create an unchecked, enabled row with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: CheckState::Unchecked,
            tristate: false,
            enabled: true,
            toggled: Signal::new(),
        }
    }

    /// The row label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the row label.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current check state.
    pub fn check_state(&self) -> CheckState {
        self.state
    }

    /// Whether the row is checked (fully).
    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Set the check state directly; the signal fires only on change.
    pub fn set_check_state(&mut self, state: CheckState) {
        if state != self.state {
            self.state = state;
            self.toggled.emit(state);
        }
    }

    /// Set the check state using builder pattern.
    pub fn with_check_state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    /// Whether activation cycles through the partially-checked state.
    pub fn is_tristate(&self) -> bool {
        self.tristate
    }

    /// Enable or disable tri-state cycling.
    pub fn set_tristate(&mut self, tristate: bool) {
        self.tristate = tristate;
    }

    /// Set tri-state using builder pattern.
    pub fn with_tristate(mut self, tristate: bool) -> Self {
        self.tristate = tristate;
        self
    }

    /// Whether the row reacts to activation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the row.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Activate the row (a tap anywhere on it), toggling the check state.
    ///
    /// Disabled rows ignore activation.
    pub fn activate(&mut self) {
        if !self.enabled {
            return;
        }
        let next = if self.tristate {
            match self.state {
                CheckState::Unchecked => CheckState::PartiallyChecked,
                CheckState::PartiallyChecked => CheckState::Checked,
                CheckState::Checked => CheckState::Unchecked,
            }
        } else {
            self.state.toggle()
        };
        self.set_check_state(next);
    }
}

static_assertions::assert_impl_all!(CheckableRow: Send, Sync);
