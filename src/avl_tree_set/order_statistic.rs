use core::borrow::Borrow;
use core::ops::Index;

use super::AvlTreeSet;
use crate::Rank;
use crate::compare::Comparator;

impl<T, C> AvlTreeSet<T, C> {
    /// Returns the element at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([30, 10, 20]);
    /// assert_eq!(set.get_by_rank(0), Some(&10));
    /// assert_eq!(set.get_by_rank(2), Some(&30));
    /// assert_eq!(set.get_by_rank(3), None);
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.select(rank)
    }

    /// Returns the `index`-th smallest element (zero-based), or `None` when
    /// `index >= len()`. Same as [`get_by_rank`](AvlTreeSet::get_by_rank).
    #[must_use]
    pub fn select(&self, index: usize) -> Option<&T> {
        self.map.select(index)
    }

    /// Returns the number of elements in the set strictly less than `value`,
    /// which does not have to be present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([1, 3, 4, 5, 7, 8, 9]);
    /// assert_eq!(set.rank(&1), 0);
    /// assert_eq!(set.rank(&6), 4);
    /// assert_eq!(set.rank(&100), 7);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.rank(value)
    }

    /// Returns the zero-based rank of `value` in sorted order, or `None` if the
    /// value is not present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTreeSet;
    ///
    /// let set = AvlTreeSet::from([10, 20]);
    /// assert_eq!(set.rank_of(&20), Some(1));
    /// assert_eq!(set.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.rank_of(value)
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeSet, Rank};
///
/// let set = AvlTreeSet::from(["b", "a"]);
/// assert_eq!(set[Rank(0)], "a");
/// ```
impl<T, C> Index<Rank> for AvlTreeSet<T, C> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
