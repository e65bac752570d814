//! The in-memory item collection.
//!
//! # Responsibilities
//! - Own the authoritative item collection
//! - Assign ids on create
//! - Serialize concurrent access (one lock per operation)
//!
//! # Design Decisions
//! - Vec rather than a map: listing must preserve insertion order
//! - Id assignment is `collection length + 125`, kept for wire
//!   compatibility with existing consumers; after deletes the length
//!   shrinks, so previously-assigned ids can be handed out again
//! - A caller-supplied integer `id` wins over the assigned one (merge
//!   order: assigned first, body second)

use std::sync::Mutex;

use serde_json::{Map, Value};

use crate::store::item::Item;

/// Offset added to the collection length when assigning ids.
pub const ID_BASE: i64 = 125;

/// Owned, lock-guarded collection of items.
///
/// Shared via `Arc` between handlers; every method takes the lock for the
/// duration of the whole read-modify-write sequence.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the two sample items.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.insert_seed(123, "Sample Item", "An example item.");
        store.insert_seed(124, "Another Item", "A second example item.");
        store
    }

    fn insert_seed(&self, id: i64, name: &str, description: &str) {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::from(name));
        fields.insert("description".into(), Value::from(description));
        self.lock().push(Item::new(id, fields));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Item>> {
        self.items.lock().expect("item store lock poisoned")
    }

    /// Look up an item by id.
    pub fn get(&self, id: i64) -> Option<Item> {
        self.lock().iter().find(|item| item.id == id).cloned()
    }

    /// Insert a new item built from the caller's fields and return its id.
    ///
    /// The id is `current length + 125` unless the fields carry their own
    /// integer `id`, which takes precedence.
    pub fn create(&self, mut fields: Map<String, Value>) -> i64 {
        let mut items = self.lock();
        let assigned = items.len() as i64 + ID_BASE;
        let id = match fields.remove("id").as_ref().and_then(Value::as_i64) {
            Some(explicit) => explicit,
            None => assigned,
        };
        items.push(Item::new(id, fields));
        id
    }

    /// Shallow-merge `fields` onto the item with the given id.
    ///
    /// Request fields win on key collision, including `id` itself when the
    /// body carries an integer one. Returns false if no item matched.
    pub fn update(&self, id: i64, fields: Map<String, Value>) -> bool {
        let mut items = self.lock();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        for (key, value) in fields {
            if key == "id" {
                if let Some(new_id) = value.as_i64() {
                    item.id = new_id;
                }
            } else {
                item.fields.insert(key, value);
            }
        }
        true
    }

    /// Remove the item with the given id. Returns false if no item matched.
    pub fn remove(&self, id: i64) -> bool {
        let mut items = self.lock();
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot the full collection in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.lock().clone()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_seeded_store_assigns_126() {
        let store = ItemStore::seeded();
        assert_eq!(store.len(), 2);

        let id = store.create(fields(&[("name", json!("X")), ("description", json!("Y"))]));
        assert_eq!(id, 126);

        let item = store.get(126).unwrap();
        assert_eq!(item.fields.get("name"), Some(&json!("X")));
        assert_eq!(item.fields.get("description"), Some(&json!("Y")));
    }

    #[test]
    fn test_create_on_empty_store_assigns_125() {
        let store = ItemStore::new();
        assert_eq!(store.create(Map::new()), 125);
    }

    #[test]
    fn test_create_keeps_arbitrary_fields_verbatim() {
        let store = ItemStore::new();
        let id = store.create(fields(&[
            ("name", json!("widget")),
            ("tags", json!(["a", "b"])),
            ("weight", json!(1.5)),
        ]));

        let item = store.get(id).unwrap();
        assert_eq!(item.fields.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(item.fields.get("weight"), Some(&json!(1.5)));
    }

    #[test]
    fn test_create_with_explicit_id_wins() {
        let store = ItemStore::new();
        let id = store.create(fields(&[("id", json!(999)), ("name", json!("X"))]));
        assert_eq!(id, 999);
        assert!(store.get(999).is_some());
    }

    #[test]
    fn test_update_merges_and_preserves_unspecified_fields() {
        let store = ItemStore::seeded();
        assert!(store.update(123, fields(&[("name", json!("Renamed"))])));

        let item = store.get(123).unwrap();
        assert_eq!(item.fields.get("name"), Some(&json!("Renamed")));
        // Untouched field survives the merge.
        assert_eq!(
            item.fields.get("description"),
            Some(&json!("An example item."))
        );
    }

    #[test]
    fn test_update_missing_id_is_a_miss() {
        let store = ItemStore::seeded();
        assert!(!store.update(999, fields(&[("name", json!("X"))])));
    }

    #[test]
    fn test_second_remove_misses() {
        let store = ItemStore::seeded();
        assert!(store.remove(123));
        assert!(!store.remove(123));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_can_repeat_after_delete() {
        // The length-derived scheme hands out the same id again once the
        // collection shrinks back.
        let store = ItemStore::new();
        let first = store.create(Map::new());
        assert_eq!(first, 125);
        assert!(store.remove(125));
        let second = store.create(Map::new());
        assert_eq!(second, 125);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = ItemStore::seeded();
        store.create(fields(&[("name", json!("third"))]));

        let ids: Vec<i64> = store.list().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![123, 124, 126]);
    }
}
