/// A zero-based position in the sorted order of a map or set.
///
/// Indexing an [`AvlTreeMap`](crate::AvlTreeMap) or [`AvlTreeSet`](crate::AvlTreeSet)
/// with a `Rank` selects the entry with exactly `Rank.0` smaller keys.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, Rank};
///
/// let mut map = AvlTreeMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

impl From<usize> for Rank {
    fn from(rank: usize) -> Self {
        Rank(rank)
    }
}
