// File: src/field_array.rs
// Purpose: Repeatable sub-records with stable per-entry identity

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Opaque identifier of one array entry
///
/// Assigned at append time from a per-array counter and never reused, even
/// after the entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryId(u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena-backed ordered sequence
///
/// Values live in `items` keyed by [`EntryId`]; `order` is the display order.
/// Removing or moving an entry never changes another entry's id or value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArray<T> {
    items: BTreeMap<EntryId, T>,
    order: Vec<EntryId>,
    next_id: u64,
}

impl<T> FieldArray<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            order: Vec::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a value and return its new identifier
    pub fn push(&mut self, value: T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, value);
        self.order.push(id);
        id
    }

    /// Remove the entry with `id`, returning its value
    pub fn remove(&mut self, id: EntryId) -> Option<T> {
        let value = self.items.remove(&id)?;
        self.order.retain(|entry| *entry != id);
        Some(value)
    }

    /// Move the entry with `id` to position `to` (clamped to the end)
    ///
    /// Returns false when no such entry exists.
    pub fn move_to(&mut self, id: EntryId, to: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        self.order.remove(from);
        let to = to.min(self.order.len());
        self.order.insert(to, id);
        true
    }

    /// Drop every entry and append `values` under fresh identifiers
    pub fn replace(&mut self, values: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.order.clear();
        for value in values {
            self.push(value);
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.items.get_mut(&id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.items.contains_key(&id)
    }

    /// Identifier currently displayed at `index`
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.order.get(index).copied()
    }

    /// Current display position of `id`
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.order.iter().position(|entry| *entry == id)
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.order
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> + '_ {
        self.order.iter().map(move |id| (*id, &self.items[id]))
    }

    /// Values in display order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Default for FieldArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for FieldArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::new();
        array.replace(values);
        array
    }
}

impl<T> FromIterator<T> for FieldArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.replace(iter);
        array
    }
}

// On the wire an array is just its values in display order; identifiers are
// session-local and assigned again on load.
impl<T: Serialize> Serialize for FieldArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(array: &FieldArray<&'static str>) -> Vec<&'static str> {
        array.values().copied().collect()
    }

    #[test]
    fn test_push_assigns_monotonic_ids() {
        let mut array = FieldArray::new();
        let a = array.push("a");
        let b = array.push("b");

        assert!(a < b);
        assert_eq!(array.len(), 2);
        assert_eq!(array.id_at(0), Some(a));
        assert_eq!(array.id_at(1), Some(b));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut array = FieldArray::new();
        let a = array.push("a");
        array.remove(a);
        let b = array.push("b");

        assert_ne!(a, b);
        assert!(array.get(a).is_none());
    }

    #[test]
    fn test_remove_keeps_other_entries() {
        let mut array = FieldArray::new();
        let a = array.push("a");
        let b = array.push("b");
        let c = array.push("c");

        assert_eq!(array.remove(b), Some("b"));
        assert_eq!(array.ids(), &[a, c]);
        assert_eq!(array.get(c), Some(&"c"));
        assert_eq!(array.position(c), Some(1));
        assert_eq!(array.remove(b), None);
    }

    #[test]
    fn test_move_to() {
        let mut array = FieldArray::new();
        let a = array.push("a");
        array.push("b");
        array.push("c");

        assert!(array.move_to(a, 10));
        assert_eq!(names(&array), vec!["b", "c", "a"]);
        assert_eq!(array.get(a), Some(&"a"));
    }

    #[test]
    fn test_replace_uses_fresh_ids() {
        let mut array: FieldArray<&str> = vec!["a", "b"].into();
        let old = array.ids().to_vec();
        array.replace(vec!["x"]);

        assert_eq!(names(&array), vec!["x"]);
        assert!(!old.contains(&array.ids()[0]));
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let array: FieldArray<String> = vec!["a".to_string(), "b".to_string()].into();
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let back: FieldArray<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
    }
}
