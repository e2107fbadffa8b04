use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Direction, Node};

type Stack = SmallVec<[Handle; 64]>;

/// A double-ended in-order traversal that yields node handles.
///
/// The traversal holds no borrow of the tree: every step takes the node arena as an
/// argument, which lets the public iterators decide how entries are borrowed. The
/// front and back cursors each keep the stack of ancestors still to be visited, and
/// `remaining` stops both once they meet.
#[derive(Clone, Debug, Default)]
pub(crate) struct RawIter {
    front: Stack,
    back: Stack,
    remaining: usize,
}

impl RawIter {
    pub(crate) fn new<K>(nodes: &Arena<Node<K>>, root: Option<Handle>, len: usize) -> Self {
        let mut iter = Self {
            front: Stack::new(),
            back: Stack::new(),
            remaining: len,
        };
        Self::descend(&mut iter.front, nodes, root, Direction::Left);
        Self::descend(&mut iter.back, nodes, root, Direction::Right);
        iter
    }

    /// Pushes `current` and its chain of children in `direction` onto `stack`.
    fn descend<K>(stack: &mut Stack, nodes: &Arena<Node<K>>, mut current: Option<Handle>, direction: Direction) {
        while let Some(handle) = current {
            stack.push(handle);
            current = nodes.get(handle).child(direction);
        }
    }

    pub(crate) fn next<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        Self::descend(&mut self.front, nodes, nodes.get(handle).right(), Direction::Left);
        self.remaining -= 1;
        Some(handle)
    }

    pub(crate) fn next_back<K>(&mut self, nodes: &Arena<Node<K>>) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        Self::descend(&mut self.back, nodes, nodes.get(handle).left(), Direction::Right);
        self.remaining -= 1;
        Some(handle)
    }

    pub(crate) const fn len(&self) -> usize {
        self.remaining
    }
}
