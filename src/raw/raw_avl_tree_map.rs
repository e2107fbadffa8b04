use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::RawIter;
use super::node::{Direction, Node};
use super::size::Size;
use crate::compare::Comparator;

/// The core AVL tree backing `AvlTreeMap` and `AvlTreeSet`.
///
/// Nodes own their children through arena handles; there are no parent links.
/// Mutations record the root-to-node [`Path`] they descend and retrace it
/// bottom-up to restore heights, subtree sizes and balance.
pub(crate) struct RawAvlTreeMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Arena storing all values, kept apart from the nodes so descents stay compact.
    values: Arena<V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

/// One step of a descent: the node visited and the child link followed out of it.
#[derive(Clone, Copy, Debug)]
struct PathElement {
    node: Handle,
    direction: Direction,
}

/// A root-to-node descent. An AVL tree addressable by `u32` handles is at most
/// 46 levels deep, which fits in the 64 inline slots.
type Path = SmallVec<[PathElement; 64]>;

impl<K, V> RawAvlTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity().min(self.nodes.capacity())
    }

    /// Height of the tree; an empty tree has height 0 and a single node height 1.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.height_of(self.root))
    }

    pub(crate) fn clear(&mut self) {
        debug!("clearing tree of {} entries", self.len);
        self.nodes.clear();
        self.values.clear();
        self.root = None;
        self.len = 0;
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn nodes(&self) -> &Arena<Node<K>> {
        &self.nodes
    }

    /// Returns the key and value stored at `handle`.
    #[inline]
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    /// Returns the key and a mutable reference to the value stored at `handle`.
    #[inline]
    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    /// Splits the tree into shared node access and a base pointer into the value slots,
    /// for iterators that hand out many disjoint `&mut V` at once.
    pub(crate) fn iter_mut_parts(&mut self) -> (&Arena<Node<K>>, *mut Option<V>) {
        (&self.nodes, self.values.slots_mut_ptr())
    }

    /// Returns a fresh in-order traversal over the tree.
    pub(crate) fn raw_iter(&self) -> RawIter {
        RawIter::new(&self.nodes, self.root, self.len)
    }

    #[inline]
    fn height_of(&self, handle: Option<Handle>) -> u8 {
        handle.map_or(0, |h| self.nodes.get(h).height())
    }

    #[inline]
    fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).size().to_usize())
    }

    /// Height of the left subtree minus height of the right subtree.
    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height_of(node.left())) - i16::from(self.height_of(node.right()))
    }

    /// Recomputes the height and size of `handle` from its children.
    fn update(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let (left, right) = (node.left(), node.right());
        let height = 1 + self.height_of(left).max(self.height_of(right));
        let size = Size::join(self.size_of(left), self.size_of(right));
        let node = self.nodes.get_mut(handle);
        node.set_height(height);
        node.set_size(size);
    }

    /// Rotates the subtree at `handle` so that `handle` moves down in `direction`
    /// and its child on the opposite side takes its place. Returns the new subtree root.
    fn rotate(&mut self, handle: Handle, direction: Direction) -> Handle {
        trace!("rotate {:?} at {:?}", direction, handle);
        let rising = direction.opposite();
        let pivot = self.nodes.get(handle).child(rising).expect("`RawAvlTreeMap::rotate()` - pivot is missing!");
        let inner = self.nodes.get(pivot).child(direction);
        self.nodes.get_mut(handle).set_child(rising, inner);
        self.nodes.get_mut(pivot).set_child(direction, Some(handle));
        self.update(handle);
        self.update(pivot);
        pivot
    }

    /// Restores the AVL invariant at `handle`, assuming both subtrees satisfy it and
    /// their heights differ by at most two. Returns the new subtree root.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update(handle);
        let (heavy, light) = match self.balance_factor(handle) {
            2 => (Direction::Left, Direction::Right),
            -2 => (Direction::Right, Direction::Left),
            factor => {
                debug_assert!(factor.abs() <= 1, "rebalance: balance factor {factor} out of range at {handle:?}");
                return handle;
            }
        };

        // A child leaning away from its parent needs a rotation of its own first.
        if let Some(child) = self.nodes.get(handle).child(heavy) {
            let leans_away = match heavy {
                Direction::Left => self.balance_factor(child) < 0,
                Direction::Right => self.balance_factor(child) > 0,
            };
            if leans_away {
                let child = self.rotate(child, heavy);
                self.nodes.get_mut(handle).set_child(heavy, Some(child));
            }
        }
        self.rotate(handle, light)
    }

    /// Links `child` under `parent` (or as the root when `parent` is `None`).
    fn replace_child(&mut self, parent: Option<PathElement>, child: Option<Handle>) {
        match parent {
            Some(parent) => self.nodes.get_mut(parent.node).set_child(parent.direction, child),
            None => self.root = child,
        }
    }

    /// Walks `path` bottom-up, rebalancing every node on it and relinking subtrees
    /// whose root changed.
    fn retrace(&mut self, path: &[PathElement]) {
        for (depth, element) in path.iter().enumerate().rev() {
            let subtree = self.rebalance(element.node);
            if subtree != element.node {
                let parent = depth.checked_sub(1).map(|parent| path[parent]);
                self.replace_child(parent, Some(subtree));
            }
        }
    }

    /// Removes `target`, the last node reached by `path`, and rebalances.
    ///
    /// A node with two children is replaced by its in-order successor, which has no
    /// left child and is therefore cheap to unlink.
    fn unlink(&mut self, mut path: Path, target: Handle) -> (K, V) {
        let node = self.nodes.get(target);
        let (left, right) = (node.left(), node.right());

        let (key, value) = if let (Some(_), Some(right)) = (left, right) {
            path.push(PathElement {
                node: target,
                direction: Direction::Right,
            });
            let mut successor = right;
            while let Some(next) = self.nodes.get(successor).left() {
                path.push(PathElement {
                    node: successor,
                    direction: Direction::Left,
                });
                successor = next;
            }
            let orphan = self.nodes.get(successor).right();
            self.replace_child(path.last().copied(), orphan);
            let (key, value) = self.nodes.take(successor).into_entry();
            self.nodes.get_mut(target).replace_entry(key, value)
        } else {
            self.replace_child(path.last().copied(), left.or(right));
            self.nodes.take(target).into_entry()
        };

        self.len -= 1;
        self.retrace(&path);
        let value = self.values.take(value);
        if self.len == 0 {
            // Drop the free lists along with the last node.
            self.clear();
        }
        (key, value)
    }

    /// Returns the handle of the outermost node in `direction`, with the path to it.
    fn extreme(&self, direction: Direction) -> Option<(Path, Handle)> {
        let mut path = Path::new();
        let mut current = self.root?;
        while let Some(child) = self.nodes.get(current).child(direction) {
            path.push(PathElement {
                node: current,
                direction,
            });
            current = child;
        }
        Some((path, current))
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let (_, handle) = self.extreme(Direction::Left)?;
        Some(self.entry(handle))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let (_, handle) = self.extreme(Direction::Right)?;
        Some(self.entry(handle))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let (path, handle) = self.extreme(Direction::Left)?;
        Some(self.unlink(path, handle))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let (path, handle) = self.extreme(Direction::Right)?;
        Some(self.unlink(path, handle))
    }

    /// Returns the handle of the node at zero-based position `rank` in sorted order.
    pub(crate) fn handle_by_rank(&self, rank: usize) -> Option<Handle> {
        if rank >= self.len {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;
        loop {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left());
            match remaining.cmp(&left_size) {
                Ordering::Less => current = node.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    let right = node.right();
                    debug_assert!(
                        right.is_some(),
                        "handle_by_rank: size invariant violated - rank {rank} beyond subtree at {current:?}"
                    );
                    current = right?;
                }
            }
        }
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let handle = self.handle_by_rank(rank)?;
        Some(self.entry(handle))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.handle_by_rank(rank)?;
        Some(self.entry_mut(handle))
    }

    /// Removes every entry and returns them in sorted order, without rebalancing.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.len);
        let mut iter = self.raw_iter();
        while let Some(handle) = iter.next(&self.nodes) {
            handles.push(handle);
        }

        let entries = handles
            .into_iter()
            .map(|handle| {
                let (key, value) = self.nodes.take(handle).into_entry();
                (key, self.values.take(value))
            })
            .collect();
        self.clear();
        entries
    }

    /// Replaces the contents of the tree with `entries`, which must already be sorted
    /// and free of duplicates under the tree's comparator. Builds a perfectly
    /// balanced tree in O(n) without comparing keys.
    pub(crate) fn rebuild_from_sorted(&mut self, entries: Vec<(K, V)>) {
        self.clear();
        let count = entries.len();
        debug!("rebuilding balanced tree from {} sorted entries", count);
        let mut entries = entries.into_iter();
        self.root = self.build_balanced(&mut entries, count);
        self.len = count;
    }

    fn build_balanced<I: Iterator<Item = (K, V)>>(&mut self, entries: &mut I, count: usize) -> Option<Handle> {
        if count == 0 {
            return None;
        }

        // Subtree sizes differ by at most one, so heights do too.
        let left_count = (count - 1) / 2;
        let left = self.build_balanced(entries, left_count);
        let (key, value) = entries.next().expect("`RawAvlTreeMap::build_balanced()` - ran out of entries!");
        let value = self.values.alloc(value);
        let handle = self.nodes.alloc(Node::new(key, value));
        let right = self.build_balanced(entries, count - left_count - 1);

        let node = self.nodes.get_mut(handle);
        node.set_child(Direction::Left, left);
        node.set_child(Direction::Right, right);
        self.update(handle);
        Some(handle)
    }

    /// Keeps only the entries for which `f` returns `true`, visiting them in order.
    ///
    /// `f` runs against the intact tree; if it panics, no entry has been removed.
    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut keep = Vec::with_capacity(self.len);
        let mut iter = self.raw_iter();
        while let Some(handle) = iter.next(&self.nodes) {
            let (key, value) = self.entry_mut(handle);
            keep.push(f(key, value));
        }

        let removed = keep.iter().filter(|kept| !**kept).count();
        if removed == 0 {
            return;
        }
        debug!("retain removed {} of {} entries", removed, self.len);
        let kept: Vec<(K, V)> = self
            .drain_to_vec()
            .into_iter()
            .zip(keep)
            .filter_map(|(entry, kept)| kept.then_some(entry))
            .collect();
        self.rebuild_from_sorted(kept);
    }
}

impl<K, V> RawAvlTreeMap<K, V> {
    /// Finds the node holding a key equal to `key` under `comparator`.
    pub(crate) fn search<Q, C>(&self, key: &Q, comparator: &C) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match comparator.compare(key, node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q, C>(&self, key: &Q, comparator: &C) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.search(key, comparator)?;
        Some(self.entry(handle).1)
    }

    pub(crate) fn get_mut<Q, C>(&mut self, key: &Q, comparator: &C) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.search(key, comparator)?;
        Some(self.entry_mut(handle).1)
    }

    pub(crate) fn get_key_value<Q, C>(&self, key: &Q, comparator: &C) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let handle = self.search(key, comparator)?;
        Some(self.entry(handle))
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    /// An existing key is kept as is; only its value is replaced.
    pub(crate) fn insert<C>(&mut self, key: K, value: V, comparator: &C) -> Option<V>
    where
        C: Comparator<K>,
    {
        let Some(root) = self.root else {
            let value = self.values.alloc(value);
            self.root = Some(self.nodes.alloc(Node::new(key, value)));
            self.len = 1;
            return None;
        };

        let mut path = Path::new();
        let mut current = root;
        let direction = loop {
            let node = self.nodes.get(current);
            let direction = match comparator.compare(&key, node.key()) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    let slot = self.values.get_mut(node.value());
                    return Some(core::mem::replace(slot, value));
                }
            };
            path.push(PathElement {
                node: current,
                direction,
            });
            match node.child(direction) {
                Some(child) => current = child,
                None => break direction,
            }
        };

        let value = self.values.alloc(value);
        let leaf = self.nodes.alloc(Node::new(key, value));
        self.nodes.get_mut(current).set_child(direction, Some(leaf));
        self.len += 1;
        self.retrace(&path);
        None
    }

    /// Swaps the stored key equal to `key` for `key` itself, leaving the value and the
    /// tree shape untouched. Hands `key` back as `Err` when no equal key is stored.
    pub(crate) fn replace_key<C>(&mut self, key: K, comparator: &C) -> Result<K, K>
    where
        C: Comparator<K>,
    {
        let Some(handle) = self.search(&key, comparator) else {
            return Err(key);
        };
        let node = self.nodes.get_mut(handle);
        let value = node.value();
        let (old, _) = node.replace_entry(key, value);
        Ok(old)
    }

    /// Removes the entry equal to `key`, returning the stored key and value.
    pub(crate) fn remove_entry<Q, C>(&mut self, key: &Q, comparator: &C) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut path = Path::new();
        let mut current = self.root?;
        loop {
            let node = self.nodes.get(current);
            let direction = match comparator.compare(key, node.key().borrow()) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => return Some(self.unlink(path, current)),
            };
            path.push(PathElement {
                node: current,
                direction,
            });
            current = node.child(direction)?;
        }
    }

    /// Counts the keys strictly less than `key`, and reports whether `key` is present.
    fn locate<Q, C>(&self, key: &Q, comparator: &C) -> (usize, bool)
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match comparator.compare(key, node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => {
                    rank += self.size_of(node.left()) + 1;
                    current = node.right();
                }
                Ordering::Equal => return (rank + self.size_of(node.left()), true),
            }
        }
        (rank, false)
    }

    /// Number of keys strictly less than `key`; `key` need not be present.
    pub(crate) fn rank<Q, C>(&self, key: &Q, comparator: &C) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.locate(key, comparator).0
    }

    /// Zero-based position of `key` in sorted order, if present.
    pub(crate) fn rank_of<Q, C>(&self, key: &Q, comparator: &C) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        match self.locate(key, comparator) {
            (rank, true) => Some(rank),
            (_, false) => None,
        }
    }
}

impl<K: Clone, V: Clone> Clone for RawAvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        // Recursion depth is bounded by the tree height.
        fn clone_subtree<K: Clone, V: Clone>(
            old: &RawAvlTreeMap<K, V>,
            new_nodes: &mut Arena<Node<K>>,
            new_values: &mut Arena<V>,
            handle: Handle,
        ) -> Handle {
            let node = old.nodes.get(handle);
            let left = node.left().map(|child| clone_subtree(old, new_nodes, new_values, child));
            let right = node.right().map(|child| clone_subtree(old, new_nodes, new_values, child));

            let value = new_values.alloc(old.values.get(node.value()).clone());
            let mut copy = Node::new(node.key().clone(), value);
            copy.set_child(Direction::Left, left);
            copy.set_child(Direction::Right, right);
            copy.set_height(node.height());
            copy.set_size(node.size());
            new_nodes.alloc(copy)
        }

        let mut nodes = Arena::with_capacity(self.len);
        let mut values = Arena::with_capacity(self.len);
        let root = self.root.map(|root| clone_subtree(self, &mut nodes, &mut values, root));
        Self {
            nodes,
            values,
            root,
            len: self.len,
        }
    }
}
