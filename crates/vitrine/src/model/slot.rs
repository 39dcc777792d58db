//! View slots and the slot arena.
//!
//! A view slot is a reusable visual unit bound to one row at a time. Each
//! slot carries a slot cache: a small record of its resolved sub-elements,
//! built once when the slot is inflated so rebinding never re-resolves
//! sub-elements by identifier.
//!
//! The cache is deliberately not stored on the slot itself. Slots live in a
//! [`SlotArena`] keyed by [`SlotId`], and caches live in a parallel side
//! table keyed by the same id. This keeps row data decoupled from the
//! visual object's lifetime: the arena owns both, and a cache can never
//! outlive or go missing for a live slot.
//!
//! # Example
//!
//! ```
//! use vitrine::model::{SlotArena, SlotTemplate};
//!
//! let mut arena = SlotArena::new();
//! let id = arena.inflate(&SlotTemplate::text_icon());
//!
//! // Freshly inflated slots are blank and unbound
//! let slot = arena.slot(id).unwrap();
//! assert!(slot.text.is_empty());
//! assert_eq!(slot.bound_position, None);
//!
//! // The cache exists from the moment the id is handed out
//! assert!(arena.cache(id).unwrap().has_icon);
//! ```

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use super::role::{CheckState, IconId};

new_key_type! {
    /// A stable identifier for a view slot within a [`SlotArena`].
    pub struct SlotId;
}

/// Describes which sub-elements a view slot carries.
///
/// From the slot consumer's point of view this is the opaque "inflate
/// template": the adapter picks one, and every slot inflated from it has
/// the same sub-element structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTemplate {
    /// Slot has a text label. Always true in the current templates.
    pub text: bool,
    /// Slot has an icon sub-element.
    pub icon: bool,
    /// Slot has a check indicator sub-element.
    pub check: bool,
}

impl SlotTemplate {
    /// A plain single-line text slot.
    pub const fn text_only() -> Self {
        Self {
            text: true,
            icon: false,
            check: false,
        }
    }

    /// A text slot with a leading icon.
    pub const fn text_icon() -> Self {
        Self {
            text: true,
            icon: true,
            check: false,
        }
    }

    /// A text slot with a check indicator.
    pub const fn checkable() -> Self {
        Self {
            text: true,
            icon: false,
            check: true,
        }
    }

    /// Adds or removes the icon sub-element.
    pub const fn with_icon(mut self, icon: bool) -> Self {
        self.icon = icon;
        self
    }

    /// Adds or removes the check indicator.
    pub const fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

impl Default for SlotTemplate {
    fn default() -> Self {
        Self::text_only()
    }
}

/// The visible state of one reusable view slot.
///
/// A slot reflects exactly one row at a time. After a bind, every field
/// holds the bound row's data and nothing else; rebinding overwrites all
/// sub-elements, so no stale content from a prior row survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSlot {
    /// The template this slot was inflated from.
    pub template: SlotTemplate,
    /// Text label content.
    pub text: String,
    /// Icon content, when the template has an icon sub-element.
    pub icon: Option<IconId>,
    /// Check indicator content, when the template has one.
    pub check: Option<CheckState>,
    /// The position this slot currently reflects, if bound.
    pub bound_position: Option<usize>,
}

impl ViewSlot {
    fn blank(template: SlotTemplate) -> Self {
        Self {
            template,
            text: String::new(),
            icon: None,
            check: None,
            bound_position: None,
        }
    }
}

/// The resolved sub-element record attached to a slot.
///
/// Built once at inflate time from the slot's template; rebinding consults
/// this record instead of re-inspecting the template. The ordinals are the
/// positions of the sub-elements within the inflated slot, in the order
/// icon, text, check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCache {
    /// Ordinal of the text sub-element.
    pub text_ordinal: usize,
    /// Whether the slot has an icon sub-element.
    pub has_icon: bool,
    /// Whether the slot has a check indicator.
    pub has_check: bool,
}

impl SlotCache {
    fn resolve(template: &SlotTemplate) -> Self {
        Self {
            // The icon, when present, sits before the text label.
            text_ordinal: usize::from(template.icon),
            has_icon: template.icon,
            has_check: template.check,
        }
    }
}

/// Arena of view slots with their attached slot caches.
///
/// The arena is owned by whichever view recycles slots (see
/// [`ListView`](crate::view::ListView)); adapters only ever borrow it for
/// the duration of a bind.
///
/// Invariant: for every live [`SlotId`] there is exactly one slot and
/// exactly one cache; [`inflate`](Self::inflate) installs both before the
/// id is handed out.
#[derive(Default)]
pub struct SlotArena {
    slots: SlotMap<SlotId, ViewSlot>,
    caches: SecondaryMap<SlotId, SlotCache>,
}

impl SlotArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inflates a new blank slot from the template and attaches its cache.
    pub fn inflate(&mut self, template: &SlotTemplate) -> SlotId {
        let id = self.slots.insert(ViewSlot::blank(*template));
        self.caches.insert(id, SlotCache::resolve(template));
        tracing::trace!(target: "vitrine::model", ?id, "inflated slot");
        id
    }

    /// Returns the slot for `id`, if it is live.
    pub fn slot(&self, id: SlotId) -> Option<&ViewSlot> {
        self.slots.get(id)
    }

    /// Returns the slot for `id` mutably, if it is live.
    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut ViewSlot> {
        self.slots.get_mut(id)
    }

    /// Returns the cache for `id`, if it is live.
    pub fn cache(&self, id: SlotId) -> Option<&SlotCache> {
        self.caches.get(id)
    }

    /// Discards a slot and its cache. Returns `true` if `id` was live.
    pub fn discard(&mut self, id: SlotId) -> bool {
        self.caches.remove(id);
        self.slots.remove(id).is_some()
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the arena holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
