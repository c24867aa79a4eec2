//! Event Order Store
//!
//! Keeps the user's drag-and-drop order of events across sessions.
//!
//! The saved record is a JSON array of ids. When a fresh list arrives it is
//! laid out in record order; ids the record doesn't know about are appended in
//! list order, and ids the list no longer contains are skipped. The record is
//! only ever written by an explicit reorder or save.

use std::collections::{HashMap, HashSet};

use crate::config::ORDER_STORAGE_KEY;
use crate::storage::KeyValueStore;

/// Stable identifier of an orderable item
pub type EventId = u32;

/// Anything the order store can arrange
pub trait Keyed {
    fn key(&self) -> EventId;
}

/// Integer value of a JSON number; `2.0` counts, `1.5` doesn't
fn integer_of(number: &serde_json::Number) -> Option<i128> {
    if let Some(i) = number.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(i128::from(u));
    }
    let f = number.as_f64()?;
    (f.is_finite() && f.fract() == 0.0).then(|| f as i128)
}

/// Parse a saved order record.
/// Anything other than a JSON array of integers counts as no record.
/// Integers that can't be an id are dropped, like any other unmatched id.
pub fn parse_order_record(raw: &str) -> Option<Vec<EventId>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    let mut record = Vec::with_capacity(values.len());
    for value in &values {
        let number = match value {
            serde_json::Value::Number(number) => number,
            _ => return None,
        };
        if let Ok(id) = EventId::try_from(integer_of(number)?) {
            record.push(id);
        }
    }
    Some(record)
}

/// Lay out `canonical` following `record`, new items last
pub fn apply_order<T: Keyed + Clone>(record: &[EventId], canonical: &[T]) -> Vec<T> {
    let by_id: HashMap<EventId, &T> = canonical.iter().map(|item| (item.key(), item)).collect();
    let mut ordered = Vec::with_capacity(canonical.len());
    let mut used = HashSet::with_capacity(canonical.len());

    for id in record {
        if let Some(item) = by_id.get(id) {
            // First occurrence wins
            if used.insert(*id) {
                ordered.push((*item).clone());
            }
        }
    }

    ordered.extend(canonical.iter().filter(|item| !used.contains(&item.key())).cloned());
    ordered
}

/// Move `moved_id` to the current index of `target_id`.
/// Returns None when either id is missing or both are the same item.
pub fn reorder<T: Keyed + Clone>(list: &[T], moved_id: EventId, target_id: EventId) -> Option<Vec<T>> {
    if moved_id == target_id {
        return None;
    }
    let old_index = list.iter().position(|item| item.key() == moved_id)?;
    let new_index = list.iter().position(|item| item.key() == target_id)?;

    let mut reordered = list.to_vec();
    let item = reordered.remove(old_index);
    reordered.insert(new_index, item);
    Some(reordered)
}

/// Displayed order backed by a persisted id record
pub struct OrderStore<T, S> {
    storage: S,
    key: String,
    displayed: Vec<T>,
}

impl<T: Keyed + Clone, S: KeyValueStore> OrderStore<T, S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, ORDER_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
            displayed: Vec::new(),
        }
    }

    /// Current displayed list
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn displayed(&self) -> &[T] {
        &self.displayed
    }

    /// Merge a freshly loaded list with the saved order.
    /// Never writes to storage and never fails.
    pub fn reconcile(&mut self, canonical: &[T]) -> &[T] {
        // An empty load leaves the saved record alone
        if canonical.is_empty() {
            self.displayed.clear();
            return &self.displayed;
        }

        self.displayed = match self.load_record() {
            Some(record) => apply_order(&record, canonical),
            None => canonical.to_vec(),
        };
        &self.displayed
    }

    /// Drag-and-drop move: `moved_id` takes the position of `target_id`.
    /// Unknown ids leave both the list and the saved record untouched.
    pub fn move_item(&mut self, moved_id: EventId, target_id: EventId) -> &[T] {
        match reorder(&self.displayed, moved_id, target_id) {
            Some(reordered) => {
                log::debug!("moved {} onto {}", moved_id, target_id);
                self.persist(&reordered);
                self.displayed = reordered;
            }
            None => log::debug!("ignored move {} -> {}", moved_id, target_id),
        }
        &self.displayed
    }

    /// Adopt and persist a complete new ordering
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn save_order(&mut self, ordered: Vec<T>) {
        self.persist(&ordered);
        self.displayed = ordered;
    }

    fn load_record(&self) -> Option<Vec<EventId>> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("could not read saved order: {}", e);
                return None;
            }
        };
        let record = parse_order_record(&raw);
        if record.is_none() {
            log::warn!("ignoring malformed saved order");
        }
        record
    }

    fn persist(&self, ordered: &[T]) {
        let ids: Vec<EventId> = ordered.iter().map(Keyed::key).collect();
        let encoded = match serde_json::to_string(&ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("could not encode order: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &encoded) {
            log::warn!("could not save order: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError, StorageResult};

    #[derive(Debug, Clone, PartialEq)]
    struct Card(EventId);

    impl Keyed for Card {
        fn key(&self) -> EventId {
            self.0
        }
    }

    fn cards(ids: &[EventId]) -> Vec<Card> {
        ids.iter().copied().map(Card).collect()
    }

    fn ids(list: &[Card]) -> Vec<EventId> {
        list.iter().map(|c| c.0).collect()
    }

    fn saved(storage: &MemoryStore) -> Option<String> {
        storage.get(ORDER_STORAGE_KEY).unwrap()
    }

    /// Store that fails every call
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Access("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_reconcile_without_record_keeps_canonical_order() {
        let storage = MemoryStore::new();
        let mut store = OrderStore::new(&storage);

        let shown = store.reconcile(&cards(&[5, 3, 9]));
        assert_eq!(ids(shown), vec![5, 3, 9]);
        assert_eq!(saved(&storage), None);
    }

    #[test]
    fn test_reconcile_applies_saved_record() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[3,1,2]").unwrap();
        let mut store = OrderStore::new(&storage);

        assert_eq!(ids(store.reconcile(&cards(&[1, 2, 3]))), vec![3, 1, 2]);
    }

    #[test]
    fn test_reconcile_appends_new_items() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[2,1]").unwrap();
        let mut store = OrderStore::new(&storage);

        // 4 and 3 are unseen; they keep their canonical relative order
        assert_eq!(ids(store.reconcile(&cards(&[1, 4, 2, 3]))), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_reconcile_drops_removed_items() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[1,2,3]").unwrap();
        let mut store = OrderStore::new(&storage);

        assert_eq!(ids(store.reconcile(&cards(&[1, 3]))), vec![1, 3]);
        // Reading never prunes the record
        assert_eq!(saved(&storage).as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_reconcile_ignores_duplicate_ids_in_record() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[2,2,1,2]").unwrap();
        let mut store = OrderStore::new(&storage);

        assert_eq!(ids(store.reconcile(&cards(&[1, 2, 3]))), vec![2, 1, 3]);
    }

    #[test]
    fn test_reconcile_malformed_record_falls_back() {
        for raw in ["nope", "{\"a\":1}", "[1,\"2\"]", "[1.5]", "[2,true]", "null", ""] {
            let storage = MemoryStore::new();
            storage.set(ORDER_STORAGE_KEY, raw).unwrap();
            let mut store = OrderStore::new(&storage);

            assert_eq!(ids(store.reconcile(&cards(&[1, 2, 3]))), vec![1, 2, 3], "record {:?}", raw);
        }
    }

    #[test]
    fn test_reconcile_skips_out_of_range_ids() {
        for raw in ["[-1,2,1]", "[4294967296,2,1]", "[2.0,1]"] {
            let storage = MemoryStore::new();
            storage.set(ORDER_STORAGE_KEY, raw).unwrap();
            let mut store = OrderStore::new(&storage);

            assert_eq!(ids(store.reconcile(&cards(&[1, 2]))), vec![2, 1], "record {:?}", raw);
        }
    }

    #[test]
    fn test_reconcile_unreadable_storage_falls_back() {
        let mut store = OrderStore::new(BrokenStore);
        assert_eq!(ids(store.reconcile(&cards(&[4, 2]))), vec![4, 2]);
    }

    #[test]
    fn test_reconcile_empty_list_keeps_record() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[2,1]").unwrap();
        let mut store = OrderStore::new(&storage);
        store.reconcile(&cards(&[1, 2]));

        assert!(store.reconcile(&[]).is_empty());
        assert_eq!(saved(&storage).as_deref(), Some("[2,1]"));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[3,7,1]").unwrap();
        let mut store = OrderStore::new(&storage);
        let canonical = cards(&[1, 2, 3, 4]);

        let first = store.reconcile(&canonical).to_vec();
        let second = store.reconcile(&canonical).to_vec();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_reconcile_is_a_permutation() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[9,4,4,1,8,2]").unwrap();
        let mut store = OrderStore::new(&storage);
        let canonical = cards(&[1, 2, 3, 4, 5]);

        let mut shown = ids(store.reconcile(&canonical));
        shown.sort();
        assert_eq!(shown, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_move_relocates_and_persists() {
        let storage = MemoryStore::new();
        let mut store = OrderStore::new(&storage);
        let canonical = cards(&[1, 2, 3, 4]);
        store.reconcile(&canonical);

        assert_eq!(ids(store.move_item(4, 2)), vec![1, 4, 2, 3]);
        assert_eq!(saved(&storage).as_deref(), Some("[1,4,2,3]"));

        // A later load picks the saved order back up
        let mut reloaded = OrderStore::new(&storage);
        assert_eq!(ids(reloaded.reconcile(&canonical)), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_move_downwards() {
        let storage = MemoryStore::new();
        let mut store = OrderStore::new(&storage);
        store.reconcile(&cards(&[1, 2, 3, 4]));

        assert_eq!(ids(store.move_item(1, 3)), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let storage = MemoryStore::new();
        let mut store = OrderStore::new(&storage);
        store.reconcile(&cards(&[1, 2, 3]));

        assert_eq!(ids(store.move_item(42, 2)), vec![1, 2, 3]);
        assert_eq!(ids(store.move_item(1, 42)), vec![1, 2, 3]);
        assert_eq!(saved(&storage), None);
    }

    #[test]
    fn test_move_onto_itself_is_noop() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[3,2,1]").unwrap();
        let mut store = OrderStore::new(&storage);
        store.reconcile(&cards(&[1, 2, 3]));

        assert_eq!(ids(store.move_item(2, 2)), vec![3, 2, 1]);
        assert_eq!(saved(&storage).as_deref(), Some("[3,2,1]"));
    }

    #[test]
    fn test_move_survives_write_failure() {
        let mut store = OrderStore::new(BrokenStore);
        store.reconcile(&cards(&[1, 2, 3]));

        assert_eq!(ids(store.move_item(3, 1)), vec![3, 1, 2]);
    }

    #[test]
    fn test_save_order_overwrites_record() {
        let storage = MemoryStore::new();
        storage.set(ORDER_STORAGE_KEY, "[1,2,3]").unwrap();
        let mut store = OrderStore::new(&storage);

        store.save_order(cards(&[2, 3, 1]));
        assert_eq!(ids(store.displayed()), vec![2, 3, 1]);
        assert_eq!(saved(&storage).as_deref(), Some("[2,3,1]"));
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStore::new();
        let mut store = OrderStore::with_key(&storage, "other");
        store.save_order(cards(&[2, 1]));

        assert_eq!(saved(&storage), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("[2,1]"));
    }

    #[test]
    fn test_reorder_helper() {
        let list = cards(&[1, 2, 3, 4]);
        assert_eq!(reorder(&list, 4, 2).map(|l| ids(&l)), Some(vec![1, 4, 2, 3]));
        assert_eq!(reorder(&list, 2, 4).map(|l| ids(&l)), Some(vec![1, 3, 4, 2]));
        assert_eq!(reorder(&list, 2, 2), None);
        assert_eq!(reorder(&list, 9, 2), None);
    }

    #[test]
    fn test_parse_order_record() {
        assert_eq!(parse_order_record("[3,1,2,7]"), Some(vec![3, 1, 2, 7]));
        assert_eq!(parse_order_record("[]"), Some(vec![]));
        assert_eq!(parse_order_record("[\"1\"]"), None);
        assert_eq!(parse_order_record("[-5,3,4294967296]"), Some(vec![3]));
        assert_eq!(parse_order_record("[7.0]"), Some(vec![7]));
        assert_eq!(parse_order_record("[7.5]"), None);
    }
}
