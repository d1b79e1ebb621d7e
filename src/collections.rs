//! Containers: Sequence, OrderedMap
//!
//! The two concrete container kinds the traversal protocol is implemented
//! against: an ordered sequence and a key-unique mapping that iterates in
//! insertion order. Both implement [`Enumerable`] and [`Rebuild`], and each
//! carries a kind-preserving `map`.

use crate::traverse::{EmptyReduce, Enumerable, Rebuild};
use std::ops::ControlFlow;

/// Ordered sequence of values
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create new empty sequence
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    /// Create sequence with capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push element at the end
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Get element by index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over references in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Transform every element, preserving sequence kind and ordering.
    /// Output length equals input length.
    pub fn map<U, F>(&self, transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map_into(transform)
    }
}

impl<T> Enumerable for Sequence<T> {
    type Item = T;

    fn try_each<F>(&self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&T) -> ControlFlow<()>,
    {
        for item in &self.items {
            if let ControlFlow::Break(()) = f(item) {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn inject<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut accumulator = seed;
        for item in &self.items {
            accumulator = combine(accumulator, item);
        }
        accumulator
    }

    fn inject_first<F>(&self, mut combine: F) -> Result<T, EmptyReduce>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut rest = self.items.iter();
        let mut accumulator = rest.next().ok_or(EmptyReduce)?.clone();
        for item in rest {
            accumulator = combine(accumulator, item);
        }
        Ok(accumulator)
    }
}

impl<T> Rebuild<T> for Sequence<T> {
    fn empty() -> Self {
        Sequence::new()
    }

    fn append(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Sequence {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

/// Key-unique mapping that iterates in insertion order. Backed by a vector
/// of pairs with linear key lookup; inserting an existing key replaces the
/// value in place and keeps the original position.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    /// Create new empty map
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
        }
    }

    /// Length
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// Insert key-value pair. Returns the replaced value when the key was
    /// already present; the entry keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        for entry in &mut self.entries {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Get value by key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Contains key
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove entry, preserving the order of the remaining entries
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Transform every pair, preserving mapping kind and insertion order.
    /// When the transform makes two keys collide, the later pair replaces
    /// the earlier value in place.
    pub fn map<K2, V2, F>(&self, mut transform: F) -> OrderedMap<K2, V2>
    where
        K2: PartialEq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.map_into(|(key, value)| transform(key, value))
    }
}

impl<K: Clone, V> OrderedMap<K, V> {
    /// Get all keys in insertion order
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K, V: Clone> OrderedMap<K, V> {
    /// Get all values in insertion order
    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<K, V> Enumerable for OrderedMap<K, V> {
    type Item = (K, V);

    fn try_each<F>(&self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&(K, V)) -> ControlFlow<()>,
    {
        for entry in &self.entries {
            if let ControlFlow::Break(()) = f(entry) {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn inject<A, F>(&self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, &(K, V)) -> A,
    {
        let mut accumulator = seed;
        for entry in &self.entries {
            accumulator = combine(accumulator, entry);
        }
        accumulator
    }

    fn inject_first<F>(&self, mut combine: F) -> Result<(K, V), EmptyReduce>
    where
        (K, V): Clone,
        F: FnMut((K, V), &(K, V)) -> (K, V),
    {
        let mut rest = self.entries.iter();
        let mut accumulator = rest.next().ok_or(EmptyReduce)?.clone();
        for entry in rest {
            accumulator = combine(accumulator, entry);
        }
        Ok(accumulator)
    }
}

impl<K: PartialEq, V> Rebuild<(K, V)> for OrderedMap<K, V> {
    fn empty() -> Self {
        OrderedMap::new()
    }

    fn append(&mut self, item: (K, V)) {
        self.insert(item.0, item.1);
    }
}

impl<K: PartialEq, V> From<Vec<(K, V)>> for OrderedMap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_creation() {
        let seq: Sequence<i32> = Sequence::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());

        let seq: Sequence<i32> = Sequence::with_capacity(8);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_sequence_push_get() {
        let mut seq = Sequence::new();
        seq.push(10);
        seq.push(20);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(0), Some(&10));
        assert_eq!(seq.get(5), None);
    }

    #[test]
    fn test_sequence_from_array_keeps_order() {
        let seq = Sequence::from([3, 1, 2]);
        let collected: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(collected, vec![3, 1, 2]);
    }

    #[test]
    fn test_sequence_map_preserves_length() {
        let seq = Sequence::from([1, 2, 3, 4]);
        let doubled = seq.map(|x| x * 2);
        assert_eq!(doubled.len(), seq.len());
        assert_eq!(doubled, Sequence::from([2, 4, 6, 8]));
    }

    #[test]
    fn test_sequence_map_can_change_element_type() {
        let seq = Sequence::from([1, 2, 3]);
        let labeled = seq.map(|x| format!("#{x}"));
        assert_eq!(labeled, Sequence::from(["#1".to_string(), "#2".to_string(), "#3".to_string()]));
    }

    #[test]
    fn test_ordered_map_creation() {
        let map: OrderedMap<String, i32> = OrderedMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_ordered_map_insert_get() {
        let mut map = OrderedMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&"a"));
        assert!(!map.contains_key(&"b"));
    }

    #[test]
    fn test_ordered_map_insert_replaces_in_place() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys(), vec!["a", "b"]);
        assert_eq!(map.get(&"a"), Some(&10));
    }

    #[test]
    fn test_ordered_map_iterates_in_insertion_order() {
        let map = OrderedMap::from([("z", 1), ("a", 2), ("m", 3)]);
        assert_eq!(map.keys(), vec!["z", "a", "m"]);
        assert_eq!(map.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ordered_map_remove_preserves_order() {
        let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(map.remove(&"b"), Some(2));
        assert_eq!(map.remove(&"b"), None);
        assert_eq!(map.keys(), vec!["a", "c"]);
    }

    #[test]
    fn test_ordered_map_map_rebuilds_pairs() {
        let map = OrderedMap::from([("a", 2), ("b", 4)]);
        let doubled = map.map(|key, value| (*key, value * 2));
        assert_eq!(doubled, OrderedMap::from([("a", 4), ("b", 8)]));
    }

    #[test]
    fn test_ordered_map_map_colliding_keys_keep_first_position() {
        let map = OrderedMap::from([(1, "one"), (2, "two"), (3, "three")]);
        let collapsed = map.map(|key, value| (key % 2, *value));
        assert_eq!(collapsed.keys(), vec![1, 0]);
        assert_eq!(collapsed.get(&1), Some(&"three"));
    }
}
