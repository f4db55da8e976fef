use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use core::slice;

use crate::allocator::{Allocator, HeapAllocator, Pointer};
use crate::vector::Vector;

/// Owning iterator over the elements of a `Vector`
///
/// Elements not yielded are destroyed, and the buffer is released through the
/// vector's allocator, when the iterator is dropped.
pub struct IntoIter<T, A: Allocator<T> = HeapAllocator<T>> {
    alloc: A,
    buffer: Pointer<T>,
    capacity: usize,
    start: usize,
    end: usize,
    marker: PhantomData<T>,
}

// SAFETY: the iterator uniquely owns the buffer it took from the vector
unsafe impl<T: Send, A: Allocator<T> + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    pub(crate) fn new(vector: Vector<T, A>) -> Self {
        let (alloc, buffer, size, capacity) = vector.into_raw_parts();
        Self {
            alloc,
            buffer,
            capacity,
            start: 0,
            end: size,
            marker: PhantomData,
        }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are live
        unsafe { slice::from_raw_parts(self.slot(self.start).as_ptr(), self.end - self.start) }
    }

    fn slot(&self, index: usize) -> NonNull<T> {
        let base = self.buffer.unwrap_or(NonNull::dangling());
        // SAFETY: index <= end <= capacity, or the buffer is dangling and index is 0
        unsafe { NonNull::new_unchecked(base.as_ptr().add(index)) }
    }
}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let slot = self.slot(self.start);
        self.start += 1;
        // SAFETY: the slot was live and is no longer in [start, end)
        Some(unsafe { ptr::read(slot.as_ptr()) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: the slot was live and is no longer in [start, end)
        Some(unsafe { ptr::read(self.slot(self.end).as_ptr()) })
    }
}

impl<T, A: Allocator<T>> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator<T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        while self.start < self.end {
            let slot = self.slot(self.start);
            self.start += 1;
            // SAFETY: the slot was live and is no longer in [start, end)
            unsafe { self.alloc.destroy(slot) };
        }
        // SAFETY: the buffer came from `allocate(capacity)` and holds no live elements
        unsafe { self.alloc.deallocate(self.buffer.take(), self.capacity) };
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator<T>> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
