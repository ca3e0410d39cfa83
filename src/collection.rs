use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// swap_values could not find one of its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("first value not present in the slice")]
    FirstMissing,
    #[error("second value not present in the slice")]
    SecondMissing,
}

/// the index after current, wrapping back to 0 past the end. 0 for an empty
/// slice
pub fn next_index_circular<T>(items: &[T], current: usize) -> usize {
    if items.is_empty() {
        0
    } else {
        (current + 1) % items.len()
    }
}

/// find a and b in the slice and exchange their positions. uses the first
/// occurrence of each
pub fn swap_values<T: PartialEq>(items: &mut [T], a: &T, b: &T) -> Result<(), SwapError> {
    let i = items
        .iter()
        .position(|v| v == a)
        .ok_or(SwapError::FirstMissing)?;
    let j = items
        .iter()
        .position(|v| v == b)
        .ok_or(SwapError::SecondMissing)?;
    items.swap(i, j);
    Ok(())
}

/// append item unless an equal element is already present. true if appended
pub fn push_if_missing<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}

/// insert unless the key is already present, leaving an existing value
/// alone. true if inserted
pub fn insert_if_missing<K: Eq + Hash, V>(map: &mut HashMap<K, V>, key: K, value: V) -> bool {
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

/// insert or overwrite. true if the key was newly added
///
/// note: HashMap::insert already does this. only worth calling over the
/// plain insert when the returned bool is wanted
pub fn insert_or_set<K: Eq + Hash, V>(map: &mut HashMap<K, V>, key: K, value: V) -> bool {
    map.insert(key, value).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_index_wraps() {
        let items = [10, 20, 30];
        assert_eq!(next_index_circular(&items, 0), 1);
        assert_eq!(next_index_circular(&items, 1), 2);
        assert_eq!(next_index_circular(&items, 2), 0);
    }

    #[test]
    fn circular_index_empty() {
        let items: [u8; 0] = [];
        assert_eq!(next_index_circular(&items, 0), 0);
        assert_eq!(next_index_circular(&items, 5), 0);
    }

    #[test]
    fn swap_values_exchanges_positions() {
        let mut items = vec!["a", "b", "c", "d"];
        swap_values(&mut items, &"b", &"d").unwrap();
        assert_eq!(items, vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn swap_values_reports_which_is_missing() {
        let mut items = vec![1, 2, 3];
        assert_eq!(
            swap_values(&mut items, &9, &2),
            Err(SwapError::FirstMissing)
        );
        assert_eq!(
            swap_values(&mut items, &1, &9),
            Err(SwapError::SecondMissing)
        );
        // a failed swap must not have reordered anything
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn push_if_missing_deduplicates() {
        let mut items = vec![1, 2];
        assert!(push_if_missing(&mut items, 3));
        assert!(!push_if_missing(&mut items, 2));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn insert_if_missing_keeps_existing() {
        let mut map = HashMap::new();
        assert!(insert_if_missing(&mut map, "k", 1));
        assert!(!insert_if_missing(&mut map, "k", 2));
        assert_eq!(map["k"], 1);
    }

    #[test]
    fn insert_or_set_overwrites() {
        let mut map = HashMap::new();
        assert!(insert_or_set(&mut map, "k", 1));
        assert!(!insert_or_set(&mut map, "k", 2));
        assert_eq!(map["k"], 2);
    }
}
