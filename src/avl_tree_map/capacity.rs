use super::AvlTreeMap;
use crate::compare::Natural;
use crate::raw::RawAvlTreeMap;

impl<K, V> AvlTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before the
    /// node and value arenas reallocate.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = AvlTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeMap::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator` with room for at least
    /// `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlTreeMap, Reverse};
    ///
    /// let mut map = AvlTreeMap::with_capacity_and_comparator(8, Reverse);
    /// map.extend([(1, 'a'), (2, 'b')]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        AvlTreeMap {
            raw: RawAvlTreeMap::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
