use super::AvlTreeSet;
use crate::AvlTreeMap;

impl<T> AvlTreeSet<T> {
    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set: AvlTreeSet<i32> = AvlTreeSet::with_capacity(32);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeSet {
            map: AvlTreeMap::with_capacity(capacity),
        }
    }
}

impl<T, C> AvlTreeSet<T, C> {
    /// Returns the number of elements the set can hold without reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
