//! Data roles for row adapters.
//!
//! Roles define what aspect of a row is being requested when a view binds
//! it. Each row can carry several pieces of data, distinguished by role.

/// Standard roles for accessing different aspects of row data.
///
/// When a view binds a row via [`RowAdapter::row_data`], the role specifies
/// what information is being requested.
///
/// [`RowAdapter::row_data`]: crate::model::RowAdapter::row_data
///
/// # Example
///
/// ```ignore
/// use vitrine::model::{ItemRole, RowAdapter};
///
/// // Get the display text for row 3
/// let text = adapter.row_data(3, ItemRole::Display);
///
/// // Get application-specific data
/// let custom = adapter.row_data(3, ItemRole::User(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display. Should return [`ItemData::Text`].
    Display,
    /// Icon or decoration to show. Should return [`ItemData::Icon`].
    Decoration,
    /// Tooltip text shown on hover. Should return [`ItemData::Text`].
    ToolTip,
    /// Value for editing (may be richer than display text).
    Edit,
    /// Check state for checkable rows. Should return [`ItemData::CheckState`].
    CheckState,
    /// Application-specific data.
    User(u32),
}

/// An opaque identifier for a drawable resource.
///
/// Vitrine does not own image decoding or rendering; screens hand icon
/// identifiers through to the external toolkit untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// Check state for checkable rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// Row is unchecked.
    #[default]
    Unchecked,
    /// Row is partially checked (for tri-state checkboxes).
    PartiallyChecked,
    /// Row is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the row is checked (fully or partially).
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Toggles between Unchecked and Checked.
    /// PartiallyChecked becomes Unchecked.
    pub fn toggle(&self) -> CheckState {
        match self {
            CheckState::Unchecked => CheckState::Checked,
            CheckState::PartiallyChecked | CheckState::Checked => CheckState::Unchecked,
        }
    }
}

/// Type-erased container for row data.
///
/// Adapters return `ItemData` from [`row_data`] for whatever role a view
/// asks about; `ItemData::None` means the role is not supported or the row
/// has no data for it.
///
/// [`row_data`]: crate::model::RowAdapter::row_data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemData {
    /// No data for the requested role.
    #[default]
    None,
    /// Text data (display, tooltip, edit).
    Text(String),
    /// Integer data.
    Int(i64),
    /// An opaque drawable identifier.
    Icon(IconId),
    /// A check state.
    CheckState(CheckState),
}

impl ItemData {
    /// Returns `true` if there is no data.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns the text content, if this is text data.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ItemData::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Consumes the data, returning the text content if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            ItemData::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is integer data.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the icon identifier, if this is icon data.
    pub fn as_icon(&self) -> Option<IconId> {
        match self {
            ItemData::Icon(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the check state, if this is check-state data.
    pub fn as_check_state(&self) -> Option<CheckState> {
        match self {
            ItemData::CheckState(state) => Some(*state),
            _ => None,
        }
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::Text(s.to_string())
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::Text(s)
    }
}

impl From<&String> for ItemData {
    fn from(s: &String) -> Self {
        ItemData::Text(s.clone())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<IconId> for ItemData {
    fn from(id: IconId) -> Self {
        ItemData::Icon(id)
    }
}

impl From<CheckState> for ItemData {
    fn from(state: CheckState) -> Self {
        ItemData::CheckState(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_data_accessors() {
        assert!(ItemData::None.is_none());
        assert_eq!(ItemData::from("hello").as_text(), Some("hello"));
        assert_eq!(ItemData::from(7i64).as_int(), Some(7));
        assert_eq!(ItemData::from(IconId(3)).as_icon(), Some(IconId(3)));
        assert_eq!(
            ItemData::from(CheckState::Checked).as_check_state(),
            Some(CheckState::Checked)
        );
        assert_eq!(ItemData::from("x").as_int(), None);
    }

    #[test]
    fn test_check_state_toggle() {
        assert_eq!(CheckState::Unchecked.toggle(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggle(), CheckState::Unchecked);
        assert_eq!(CheckState::PartiallyChecked.toggle(), CheckState::Unchecked);
        assert!(CheckState::PartiallyChecked.is_checked());
        assert!(!CheckState::Unchecked.is_checked());
    }

    #[test]
    fn test_into_text() {
        assert_eq!(
            ItemData::Text("abc".into()).into_text(),
            Some("abc".to_string())
        );
        assert_eq!(ItemData::Int(1).into_text(), None);
    }
}
