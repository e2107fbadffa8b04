use super::handle::Handle;
use super::size::Size;

/// Which child link of a node a descent followed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// An AVL tree node.
///
/// Values live in a separate arena; the node only holds a handle to its value so that
/// key comparisons during descent touch as little memory as possible.
pub(crate) struct Node<K> {
    key: K,
    value: Handle,
    left: Option<Handle>,
    right: Option<Handle>,
    // Height of the subtree rooted here; a leaf has height 1.
    height: u8,
    // Number of nodes in the subtree rooted here, for order-statistic queries.
    size: Size,
}

impl<K> Node<K> {
    /// Creates a detached leaf.
    pub(crate) fn new(key: K, value: Handle) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> Handle {
        self.value
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, direction: Direction) -> Option<Handle> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, direction: Direction, child: Option<Handle>) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub(crate) fn set_height(&mut self, height: u8) {
        self.height = height;
    }

    #[inline]
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Moves another node's entry into this one, returning the entry it held.
    ///
    /// Used when a two-child node is deleted by splicing in its in-order successor.
    pub(crate) fn replace_entry(&mut self, key: K, value: Handle) -> (K, Handle) {
        let old_key = core::mem::replace(&mut self.key, key);
        let old_value = core::mem::replace(&mut self.value, value);
        (old_key, old_value)
    }

    /// Consumes the node, returning its entry.
    pub(crate) fn into_entry(self) -> (K, Handle) {
        (self.key, self.value)
    }
}
