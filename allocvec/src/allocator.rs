use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::alloc::{alloc, dealloc};

use crate::error::AllocVecError;

/// Non-null pointer to `T`; `None` is the null handle.
///
/// Containers keep their buffer as a `Pointer<T>` so the compiler forces the
/// empty case to be handled wherever the buffer is touched.
pub type Pointer<T> = Option<NonNull<T>>;

/// Raw memory provider plus per-element construct/destroy hooks.
///
/// `Vector` never calls the global allocator directly: every buffer it owns
/// comes from `allocate`, goes back through `deallocate`, and every element
/// it holds is placed with `construct` and torn down with `destroy`.
///
/// # Safety
///
/// Containers write elements into whatever `allocate` hands out, so an
/// implementation must uphold:
///
/// - `allocate(0)` returns `Ok(None)`, and `deallocate(None, _)` is a no-op.
/// - For `n > 0`, `allocate(n)` returns `Ok(Some(ptr))` with `ptr` aligned for
///   `T` and valid for reads and writes of `n` elements until it is passed to
///   `deallocate`, or an error. `Vector` still rejects `Ok(None)` for `n > 0`
///   as an `AllocationFailure`.
/// - `construct` places the value exactly once before returning. If it
///   unwinds, `Vector` leaks the elements it was moving instead of dropping
///   them twice.
pub unsafe trait Allocator<T> {
    /// Requests uninitialized storage for `n` elements.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the memory provider
    /// cannot satisfy the request.
    fn allocate(&self, n: usize) -> Result<Pointer<T>, AllocVecError>;

    /// Releases storage obtained from `allocate`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate(n)` on an allocator equal to this one,
    /// with the same `n`, and must not be used afterwards. Live elements in
    /// the storage are not destroyed.
    unsafe fn deallocate(&self, ptr: Pointer<T>, n: usize);

    /// Places `value` into the raw slot at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes and point at a slot that holds no live
    /// element (a previous value there would be leaked).
    unsafe fn construct(&self, ptr: NonNull<T>, value: T) {
        unsafe { ptr.as_ptr().write(value) }
    }

    /// Runs the teardown of the element at `ptr`, leaving the slot raw.
    ///
    /// # Safety
    ///
    /// `ptr` must point at a live element that is not used afterwards.
    unsafe fn destroy(&self, ptr: NonNull<T>) {
        unsafe { ptr::drop_in_place(ptr.as_ptr()) }
    }

    /// Largest element count `allocate` could possibly satisfy.
    fn max_size(&self) -> usize {
        max_elements::<T>()
    }
}

/// Largest number of `T` that fits in an allocation.
#[must_use]
pub const fn max_elements<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// Builds the `AllocationFailure` error for a request of `count` elements.
pub(crate) fn allocation_failure<T>(count: usize) -> AllocVecError {
    AllocVecError::AllocationFailure {
        count,
        element_size: mem::size_of::<T>(),
    }
}

/// Stateless allocator backed by the global heap.
///
/// Every instance is interchangeable with every other instance of the same
/// element type, so two `HeapAllocator<T>` always compare equal.
pub struct HeapAllocator<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> HeapAllocator<T> {
    /// The heap allocator for `T`. All instances are interchangeable.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Converts into the allocator for another element type.
    #[must_use]
    pub const fn rebind<U>(self) -> HeapAllocator<U> {
        HeapAllocator::new()
    }
}

// SAFETY: buffers come from the global allocator with `Layout::array::<T>(n)`,
// and zero-sized requests get an aligned dangling pointer
unsafe impl<T> Allocator<T> for HeapAllocator<T> {
    fn allocate(&self, n: usize) -> Result<Pointer<T>, AllocVecError> {
        if n == 0 {
            return Ok(None);
        }
        let layout = Layout::array::<T>(n).map_err(|_| allocation_failure::<T>(n))?;
        if layout.size() == 0 {
            // Zero-sized elements need an aligned address, not memory
            return Ok(Some(NonNull::dangling()));
        }

        // SAFETY: layout has a non-zero size
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Some(ptr)),
            None => Err(allocation_failure::<T>(n)),
        }
    }

    unsafe fn deallocate(&self, ptr: Pointer<T>, n: usize) {
        let Some(ptr) = ptr else {
            return;
        };
        let Ok(layout) = Layout::array::<T>(n) else {
            return;
        };
        if layout.size() != 0 {
            // SAFETY: caller guarantees `ptr` came from `allocate(n)`, which
            // used this exact layout
            unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> Clone for HeapAllocator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HeapAllocator<T> {}

impl<T> Default for HeapAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for HeapAllocator<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for HeapAllocator<T> {}

impl<T> fmt::Debug for HeapAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HeapAllocator")
    }
}
