//! Hash map construction with a shared hasher
//!
//! All maps in the crate (section maps, property maps, record templates and
//! the rule registry) use ahash with random seeds, which keeps lookups fast
//! and `DoS` resistant on untrusted script input.

use ahash::RandomState;

/// `HashMap` using the crate's hasher
pub type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

/// Create a new `HashMap` with the crate's hasher
///
/// # Example
///
/// ```rust
/// use ass_parser::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashMap` with pre-allocated capacity
///
/// Used where the number of entries is known up front, such as record
/// templates sized to their `Format` line.
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_hash_map_works() {
        let mut map = create_hash_map::<&str, i32>();
        map.insert("test", 42);
        assert_eq!(map.get("test"), Some(&42));
    }

    #[test]
    fn create_hash_map_with_capacity_works() {
        let map = create_hash_map_with_capacity::<String, i32>(100);
        assert!(map.capacity() >= 100);
        assert!(map.is_empty());
    }

    #[test]
    fn maps_compare_by_content() {
        let mut first = create_hash_map::<&str, i32>();
        let mut second = create_hash_map::<&str, i32>();
        first.insert("a", 1);
        second.insert("a", 1);
        assert_eq!(first, second);
    }
}
