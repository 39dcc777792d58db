//! Generic list adapter implementation.
//!
//! `ListAdapter<T>` binds a plain `Vec<T>` to view slots. It supports both
//! trait-based and closure-based data extraction.

use parking_lot::RwLock;
use std::sync::Arc;

use super::adapter::{AdapterSignals, RowAdapter};
use super::role::{CheckState, ItemData, ItemRole};
use super::slot::SlotTemplate;

/// Trait for items that can provide their own row data.
///
/// Implement this trait for types that should be directly usable in a
/// `ListAdapter` without requiring an external data extractor.
///
/// # Example
///
/// ```
/// use vitrine::model::{RowItem, ItemData};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl RowItem for Person {
///     fn display(&self) -> ItemData {
///         ItemData::from(&self.name)
///     }
///
///     fn tooltip(&self) -> ItemData {
///         ItemData::from(format!("Age: {}", self.age))
///     }
/// }
/// ```
pub trait RowItem: Send + Sync {
    /// Returns the primary display text for this item.
    fn display(&self) -> ItemData;

    /// Returns the decoration (icon) for this item.
    fn decoration(&self) -> ItemData {
        ItemData::None
    }

    /// Returns the tooltip text for this item.
    fn tooltip(&self) -> ItemData {
        ItemData::None
    }

    /// Returns the edit value for this item.
    fn edit(&self) -> ItemData {
        self.display()
    }

    /// Returns the check state for this item, if it is checkable.
    fn check(&self) -> Option<CheckState> {
        None
    }

    /// Returns data for a custom role.
    fn data(&self, _role: ItemRole) -> ItemData {
        ItemData::None
    }
}

/// Implement RowItem for String for convenience.
impl RowItem for String {
    fn display(&self) -> ItemData {
        ItemData::from(self.as_str())
    }
}

/// Type alias for a data extractor function.
pub type DataExtractor<T> = Arc<dyn Fn(&T, ItemRole) -> ItemData + Send + Sync>;

/// A generic adapter exposing a list of items by position.
///
/// `ListAdapter<T>` can be used in two ways:
///
/// 1. **Trait-based**: Items implement [`RowItem`] and provide their own data.
/// 2. **Closure-based**: A data extractor is provided at construction.
///
/// Every mutator on the adapter pairs the mutation with the matching
/// notification, so slots bound through this adapter can always trust the
/// signal stream. The only exception is [`items_mut`](Self::items_mut),
/// which hands out raw mutable access and leaves the
/// [`notify_changed`](RowAdapter::notify_changed) call to the caller.
///
/// # Example (trait-based)
///
/// ```
/// use vitrine::model::{ListAdapter, RowAdapter};
///
/// let adapter = ListAdapter::new(vec![
///     "Buy groceries".to_string(),
///     "Walk dog".to_string(),
/// ]);
/// assert_eq!(adapter.len(), 2);
/// ```
///
/// # Example (closure-based)
///
/// ```
/// use vitrine::model::{ExtractorListAdapter, ItemRole, ItemData, RowAdapter};
///
/// struct Person {
///     name: String,
///     email: String,
/// }
///
/// let adapter = ExtractorListAdapter::new(
///     vec![Person {
///         name: "Alice".into(),
///         email: "alice@example.com".into(),
///     }],
///     |person, role| match role {
///         ItemRole::Display => ItemData::from(&person.name),
///         ItemRole::ToolTip => ItemData::from(&person.email),
///         _ => ItemData::None,
///     },
/// );
/// assert_eq!(
///     adapter.row_data(0, ItemRole::Display).as_text(),
///     Some("Alice")
/// );
/// ```
pub struct ListAdapter<T> {
    items: RwLock<Vec<T>>,
    extractor: Option<DataExtractor<T>>,
    template: SlotTemplate,
    signals: AdapterSignals,
}

impl<T: Send + Sync + 'static> ListAdapter<T> {
    /// Creates a list adapter with a data extractor.
    ///
    /// The extractor function is called to get data for each item and role.
    pub fn with_extractor<F>(items: Vec<T>, extractor: F) -> Self
    where
        F: Fn(&T, ItemRole) -> ItemData + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            extractor: Some(Arc::new(extractor)),
            template: SlotTemplate::text_only(),
            signals: AdapterSignals::new(),
        }
    }

    /// Sets the slot template rows are inflated from.
    pub fn with_template(mut self, template: SlotTemplate) -> Self {
        self.template = template;
        self
    }

    /// Returns the number of items in the adapter.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        let row = {
            let mut items = self.items.write();
            items.push(item);
            items.len() - 1
        };
        self.signals.rows_inserted.emit((row, row));
    }

    /// Inserts an item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        self.items.write().insert(index, item);
        self.signals.rows_inserted.emit((index, index));
    }

    /// Removes and returns the item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&self, index: usize) -> T {
        let removed = self.items.write().remove(index);
        self.signals.rows_removed.emit((index, index));
        removed
    }

    /// Removes all items from the adapter.
    pub fn clear(&self) {
        self.items.write().clear();
        self.signals.changed.emit(());
    }

    /// Replaces all items in the adapter.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.signals.changed.emit(());
    }

    /// Swaps two items in the list.
    ///
    /// Out-of-range indices make this a no-op.
    pub fn swap(&self, a: usize, b: usize) {
        {
            let mut items = self.items.write();
            if a >= items.len() || b >= items.len() {
                return;
            }
            items.swap(a, b);
        }
        self.signals.changed.emit(());
    }

    /// Moves the item at `from` so it ends up at index `to`.
    ///
    /// Out-of-range indices make this a no-op, as does `from == to`.
    pub fn move_row(&self, from: usize, to: usize) {
        {
            let mut items = self.items.write();
            if from >= items.len() || to >= items.len() || from == to {
                return;
            }
            let item = items.remove(from);
            items.insert(to, item);
        }
        tracing::debug!(target: "vitrine::model", from, to, "moved row");
        self.signals.changed.emit(());
    }

    /// Provides mutable access to an item via a closure.
    ///
    /// Emits the `changed` signal after modification. Returns `None` if
    /// `index` is out of range.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            if index >= items.len() {
                return None;
            }
            f(&mut items[index])
        };
        self.signals.changed.emit(());
        Some(result)
    }

    /// Returns a read guard over the items.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Returns a write guard over the items.
    ///
    /// Exterior mutation through this guard does NOT notify; the caller
    /// must follow it with [`notify_changed`](RowAdapter::notify_changed)
    /// before any bound slot content is trusted again. Prefer the adapter's
    /// own mutators, which notify for you.
    pub fn items_mut(&self) -> impl std::ops::DerefMut<Target = Vec<T>> + '_ {
        self.items.write()
    }

    fn extract(&self, position: usize, role: ItemRole) -> Option<ItemData> {
        let items = self.items.read();
        assert!(
            position < items.len(),
            "row_data position {position} out of range (len {})",
            items.len()
        );
        self.extractor
            .as_ref()
            .map(|extractor| extractor(&items[position], role))
    }
}

impl<T: RowItem + 'static> ListAdapter<T> {
    /// Creates a new list adapter with items that implement [`RowItem`].
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            extractor: None,
            template: SlotTemplate::text_only(),
            signals: AdapterSignals::new(),
        }
    }

    /// Creates an empty list adapter.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: RowItem + 'static> RowAdapter for ListAdapter<T> {
    fn len(&self) -> usize {
        self.items.read().len()
    }

    fn row_data(&self, position: usize, role: ItemRole) -> ItemData {
        if let Some(data) = self.extract(position, role) {
            return data;
        }

        let items = self.items.read();
        let item = &items[position];
        match role {
            ItemRole::Display => item.display(),
            ItemRole::Decoration => item.decoration(),
            ItemRole::ToolTip => item.tooltip(),
            ItemRole::Edit => item.edit(),
            ItemRole::CheckState => item
                .check()
                .map(ItemData::CheckState)
                .unwrap_or(ItemData::None),
            _ => item.data(role),
        }
    }

    fn template(&self) -> SlotTemplate {
        self.template
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

/// A list adapter that uses closures for data extraction.
///
/// This is a separate type for when items don't implement [`RowItem`].
/// Construct via [`ExtractorListAdapter::new`]; all the `ListAdapter`
/// mutators are reachable through `Deref`.
pub struct ExtractorListAdapter<T> {
    inner: ListAdapter<T>,
}

impl<T: Send + Sync + 'static> ExtractorListAdapter<T> {
    /// Creates a new extractor-based list adapter.
    pub fn new<F>(items: Vec<T>, extractor: F) -> Self
    where
        F: Fn(&T, ItemRole) -> ItemData + Send + Sync + 'static,
    {
        Self {
            inner: ListAdapter::with_extractor(items, extractor),
        }
    }

    /// Sets the slot template rows are inflated from.
    pub fn with_template(mut self, template: SlotTemplate) -> Self {
        self.inner.template = template;
        self
    }
}

impl<T: Send + Sync + 'static> RowAdapter for ExtractorListAdapter<T> {
    fn len(&self) -> usize {
        self.inner.items.read().len()
    }

    fn row_data(&self, position: usize, role: ItemRole) -> ItemData {
        self.inner
            .extract(position, role)
            .expect("extractor adapter always has an extractor")
    }

    fn template(&self) -> SlotTemplate {
        self.inner.template
    }

    fn signals(&self) -> &AdapterSignals {
        &self.inner.signals
    }
}

impl<T: Send + Sync + 'static> std::ops::Deref for ExtractorListAdapter<T> {
    type Target = ListAdapter<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlotArena;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone)]
    struct TestItem {
        name: String,
        value: i64,
    }

    impl RowItem for TestItem {
        fn display(&self) -> ItemData {
            ItemData::from(self.name.as_str())
        }

        fn tooltip(&self) -> ItemData {
            ItemData::from(format!("Value: {}", self.value))
        }
    }

    fn abc() -> ListAdapter<String> {
        ListAdapter::new(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    }

    #[test]
    fn test_trait_based_adapter() {
        let adapter = ListAdapter::new(vec![
            TestItem {
                name: "First".into(),
                value: 1,
            },
            TestItem {
                name: "Second".into(),
                value: 2,
            },
        ]);

        assert_eq!(adapter.len(), 2);
        assert_eq!(
            adapter.row_data(0, ItemRole::Display).as_text(),
            Some("First")
        );
        assert_eq!(
            adapter.row_data(0, ItemRole::ToolTip).as_text(),
            Some("Value: 1")
        );
        assert!(adapter.row_data(0, ItemRole::Decoration).is_none());
    }

    #[test]
    fn test_closure_based_adapter() {
        struct Person {
            name: String,
            age: i64,
        }

        let adapter = ExtractorListAdapter::new(
            vec![
                Person {
                    name: "Alice".into(),
                    age: 30,
                },
                Person {
                    name: "Bob".into(),
                    age: 25,
                },
            ],
            |person, role| match role {
                ItemRole::Display => ItemData::from(person.name.as_str()),
                ItemRole::User(0) => ItemData::from(person.age),
                _ => ItemData::None,
            },
        );

        assert_eq!(adapter.len(), 2);
        assert_eq!(adapter.row_data(1, ItemRole::Display).as_text(), Some("Bob"));
        assert_eq!(adapter.row_data(1, ItemRole::User(0)).as_int(), Some(25));
    }

    #[test]
    fn test_push_signals_insertion() {
        let adapter = ListAdapter::<String>::empty();
        let inserted = Arc::new(Mutex::new(Vec::new()));

        let recv = inserted.clone();
        adapter.signals().rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        adapter.push("New".to_string());
        adapter.push("Newer".to_string());

        assert_eq!(adapter.len(), 2);
        assert_eq!(*inserted.lock(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_remove_signals_removal() {
        let adapter = abc();
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        adapter.signals().rows_removed.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        let item = adapter.remove(1);
        assert_eq!(item, "B");
        assert_eq!(adapter.len(), 2);
        assert_eq!(*removed.lock(), vec![(1, 1)]);
    }

    #[test]
    fn test_append_then_bind_last() {
        // ["A","B","C"] + "D" -> count 4, bind(3) shows "D".
        let adapter = abc();
        let mut arena = SlotArena::new();

        adapter.push("D".to_string());
        assert_eq!(adapter.len(), 4);

        let id = adapter.bind(adapter.len() - 1, None, &mut arena);
        assert_eq!(arena.slot(id).unwrap().text, "D");
    }

    #[test]
    fn test_clear_then_empty() {
        let adapter = abc();
        adapter.clear();
        assert_eq!(adapter.len(), 0);
        assert!(adapter.is_empty());
    }

    #[test]
    fn test_bind_reuse_across_positions() {
        // bind(0) -> "A", rebind the same slot at 2 -> "C".
        let adapter = abc();
        let mut arena = SlotArena::new();

        let id = adapter.bind(0, None, &mut arena);
        assert_eq!(arena.slot(id).unwrap().text, "A");

        adapter.bind(2, Some(id), &mut arena);
        assert_eq!(arena.slot(id).unwrap().text, "C");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_exterior_mutation_requires_manual_notify() {
        let adapter = abc();
        let changed = Arc::new(Mutex::new(0usize));

        let recv = changed.clone();
        adapter.signals().changed.connect(move |_| {
            *recv.lock() += 1;
        });

        adapter.items_mut().push("D".to_string());
        assert_eq!(*changed.lock(), 0);

        adapter.notify_changed();
        assert_eq!(*changed.lock(), 1);
        assert_eq!(adapter.len(), 4);
    }

    #[test]
    fn test_move_row() {
        let adapter = abc();
        adapter.move_row(0, 2);
        assert_eq!(*adapter.items(), vec!["B", "C", "A"]);

        // No-ops
        adapter.move_row(5, 0);
        adapter.move_row(1, 1);
        assert_eq!(*adapter.items(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_modify_notifies() {
        let adapter = ListAdapter::new(vec![TestItem {
            name: "Original".into(),
            value: 1,
        }]);
        let changed = Arc::new(Mutex::new(false));

        let recv = changed.clone();
        adapter.signals().changed.connect(move |_| {
            *recv.lock() = true;
        });

        adapter.modify(0, |item| {
            item.name = "Modified".into();
        });

        assert!(*changed.lock());
        assert_eq!(
            adapter.row_data(0, ItemRole::Display).as_text(),
            Some("Modified")
        );
        assert_eq!(adapter.modify(9, |_| ()), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_data_out_of_range_panics() {
        let adapter = abc();
        adapter.row_data(3, ItemRole::Display);
    }
}
