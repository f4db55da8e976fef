#![allow(dead_code)]

use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use allocvec::{AllocVecError, Allocator, HeapAllocator, Pointer};

/// Lifecycle counters shared by every `Tracked` created from them
#[derive(Debug, Default)]
pub struct Lifecycle {
    pub live: Cell<usize>,
    pub clones: Cell<usize>,
    pub drops: Cell<usize>,
}

/// Element that records its clones and drops in a shared `Lifecycle`
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    lifecycle: Rc<Lifecycle>,
}

impl Tracked {
    pub fn new(value: i32, lifecycle: &Rc<Lifecycle>) -> Self {
        lifecycle.live.set(lifecycle.live.get() + 1);
        Self {
            value,
            lifecycle: Rc::clone(lifecycle),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.lifecycle.clones.set(self.lifecycle.clones.get() + 1);
        Self::new(self.value, &self.lifecycle)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.lifecycle.live.set(self.lifecycle.live.get() - 1);
        self.lifecycle.drops.set(self.lifecycle.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Element whose `clone` panics once the shared budget is used up
#[derive(Debug, PartialEq)]
pub struct FragileClone {
    pub value: i32,
    pub budget: Rc<Cell<usize>>,
}

impl Clone for FragileClone {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        assert!(left > 0, "clone budget exhausted");
        self.budget.set(left - 1);
        Self {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}

/// Counters shared by clones of a `CountingAllocator`
#[derive(Debug, Default)]
pub struct AllocStats {
    pub allocations: Cell<usize>,
    pub deallocations: Cell<usize>,
    pub constructs: Cell<usize>,
    pub destroys: Cell<usize>,
    pub outstanding_slots: Cell<usize>,
    /// Number of further `allocate` calls that succeed; `None` for unlimited
    pub fail_after: Cell<Option<usize>>,
    /// Number of further `construct` calls that complete before one panics
    pub constructs_left: Cell<Option<usize>>,
}

/// Allocator that counts every call and can be told to start failing
#[derive(Debug, Clone, Default)]
pub struct CountingAllocator {
    pub stats: Rc<AllocStats>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_after(&self, successes: usize) {
        self.stats.fail_after.set(Some(successes));
    }

    pub fn panic_after_constructs(&self, successes: usize) {
        self.stats.constructs_left.set(Some(successes));
    }
}

// SAFETY: storage comes from `HeapAllocator`; `construct` panics before
// touching the slot
unsafe impl<T> Allocator<T> for CountingAllocator {
    fn allocate(&self, n: usize) -> Result<Pointer<T>, AllocVecError> {
        if let Some(left) = self.stats.fail_after.get() {
            if left == 0 {
                return Err(AllocVecError::AllocationFailure {
                    count: n,
                    element_size: std::mem::size_of::<T>(),
                });
            }
            self.stats.fail_after.set(Some(left - 1));
        }
        let ptr = HeapAllocator::<T>::new().allocate(n)?;
        if ptr.is_some() {
            self.stats.allocations.set(self.stats.allocations.get() + 1);
            self.stats
                .outstanding_slots
                .set(self.stats.outstanding_slots.get() + n);
        }
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: Pointer<T>, n: usize) {
        if ptr.is_some() {
            self.stats.deallocations.set(self.stats.deallocations.get() + 1);
            self.stats
                .outstanding_slots
                .set(self.stats.outstanding_slots.get() - n);
        }
        unsafe { HeapAllocator::<T>::new().deallocate(ptr, n) }
    }

    unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        if let Some(left) = self.stats.constructs_left.get() {
            assert!(left > 0, "construct budget exhausted");
            self.stats.constructs_left.set(Some(left - 1));
        }
        self.stats.constructs.set(self.stats.constructs.get() + 1);
        unsafe { ptr.as_ptr().write(value) }
    }

    unsafe fn destroy(&self, ptr: NonNull<T>) {
        self.stats.destroys.set(self.stats.destroys.get() + 1);
        unsafe { std::ptr::drop_in_place(ptr.as_ptr()) }
    }
}
