//! Key orderings.
//!
//! Both collections are generic over a [`Comparator`], which defaults to [`Natural`]
//! (the key type's [`Ord`] implementation).

use core::cmp::Ordering;
use core::fmt;

/// A total order over `T`.
///
/// Implementations must be consistent: `compare(a, b)` must be the reverse of
/// `compare(b, a)`, and the relation must be transitive. A comparator that breaks
/// these rules is a logic error; the collection will not exhibit undefined behavior
/// but may return wrong results or panic.
///
/// A comparator over `T` is used for lookups by any borrowed form `Q` of the key type
/// for which it also implements `Comparator<Q>`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use avl_ost::{AvlTreeMap, Comparator};
///
/// /// Orders strings by length, then lexicographically.
/// #[derive(Default)]
/// struct ByLength;
///
/// impl Comparator<str> for ByLength {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.len().cmp(&b.len()).then_with(|| a.cmp(b))
///     }
/// }
///
/// impl Comparator<String> for ByLength {
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         Comparator::<str>::compare(self, a, b)
///     }
/// }
///
/// let mut map = AvlTreeMap::with_comparator(ByLength);
/// map.insert(String::from("ccc"), 3);
/// map.insert(String::from("a"), 1);
/// map.insert(String::from("bb"), 2);
///
/// assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["a", "bb", "ccc"]);
/// assert_eq!(map.get("bb"), Some(&2));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
///
/// ```
/// use avl_ost::{AvlTreeSet, Reverse};
///
/// let mut set = AvlTreeSet::with_comparator(Reverse);
/// set.extend([1, 3, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: ?Sized + Ord> Comparator<T> for Reverse {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders keys by their [`PartialOrd`] implementation, panicking on incomparable keys.
///
/// This lets types such as `f64` be used as keys. Incomparable keys (for example
/// `f64::NAN`) cannot be placed in a total order, so the comparison fails fast
/// instead of silently corrupting the tree.
///
/// # Panics
///
/// [`compare`](Comparator::compare) panics when `partial_cmp` returns `None`.
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTreeMap, PartialOrder};
///
/// let mut temperatures = AvlTreeMap::with_comparator(PartialOrder);
/// temperatures.insert(21.5, "lounge");
/// temperatures.insert(-3.0, "freezer");
/// assert_eq!(temperatures.first_key_value(), Some((&-3.0, &"freezer")));
/// ```
///
/// ```should_panic
/// use avl_ost::{AvlTreeMap, PartialOrder};
///
/// let mut map = AvlTreeMap::with_comparator(PartialOrder);
/// map.insert(1.0, ());
/// map.insert(f64::NAN, ()); // panics
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PartialOrder;

impl<T: ?Sized + PartialOrd> Comparator<T> for PartialOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).expect("`PartialOrder::compare()` - keys are not comparable!")
    }
}

/// Adapts a closure `Fn(&T, &T) -> Ordering` into a [`Comparator`].
///
/// ```
/// use avl_ost::{AvlTreeSet, FnComparator};
///
/// let by_abs = FnComparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
/// let mut set = AvlTreeSet::with_comparator(by_abs);
/// set.extend([-3, 1, -2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, -2, -3]);
/// // `2` and `-2` are equal under this order.
/// assert!(set.contains(&2));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for FnComparator<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}
