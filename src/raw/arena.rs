use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage addressed by [`Handle`], recycling freed slots through a free list.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            handle
        } else {
            // Strictly less-than: at most `Handle::MAX` live slots after the push.
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Returns a pointer to the first slot, for handing out disjoint `&mut T`s.
    ///
    /// The pointer is invalidated by any call that takes `&mut self`.
    #[inline]
    pub(crate) fn slots_mut_ptr(&mut self) -> *mut Option<T> {
        self.slots.as_mut_ptr()
    }

    /// Returns a mutable reference to an element through a pointer obtained from
    /// [`Arena::slots_mut_ptr`].
    ///
    /// # Safety
    /// - `base` must come from `slots_mut_ptr` on an arena that has not been mutated since.
    /// - `handle` must be live in that arena.
    /// - No other reference to the same element may exist for `'a`.
    #[inline]
    pub(crate) unsafe fn get_mut_from_ptr<'a>(base: *mut Option<T>, handle: Handle) -> &'a mut T {
        // SAFETY: caller guarantees `handle` indexes a live slot of the arena behind `base`
        // and that the slot is not aliased.
        unsafe { (*base.add(handle.to_index())).as_mut().expect("`Arena::get_mut_from_ptr()` - `handle` is invalid!") }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
