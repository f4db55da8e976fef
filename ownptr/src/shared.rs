use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Deref;
use core::ptr::NonNull;

use tracing::trace;

use crate::deleter::{DefaultDelete, Deleter};

/// Heap block shared by every `SharedPtr` copy of one pointee.
///
/// The reference count lives in the `Rc` holding the block; dropping the last
/// `Rc` drops the block, which hands the pointee to the deleter.
struct ControlBlock<T: ?Sized, D: Deleter<T>> {
    ptr: Option<NonNull<T>>,
    deleter: D,
    marker: PhantomData<T>,
}

impl<T: ?Sized, D: Deleter<T>> Drop for ControlBlock<T, D> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            trace!("last shared owner released, deleting pointee");
            // SAFETY: the block owns the pointee and nothing refers to it anymore
            unsafe { self.deleter.delete(ptr) };
        }
    }
}

/// Shared-ownership pointer with a reference-counted control block
///
/// Copies made with `clone` (or `assign`) share one control block. The
/// deleter runs exactly once, when the last handle referencing the block is
/// reset or dropped. A null handle has no control block and a use count of 0.
///
/// The count is not atomic, so `SharedPtr` is neither `Send` nor `Sync`.
pub struct SharedPtr<T: ?Sized, D: Deleter<T> = DefaultDelete> {
    block: Option<Rc<ControlBlock<T, D>>>,
}

impl<T> SharedPtr<T> {
    /// Moves `value` to the heap and takes shared ownership of it.
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }
}

impl<T> SharedPtr<[T]> {
    /// Shared ownership of an array, indexed through the slice it dereferences to.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_box(values.into_boxed_slice())
    }
}

impl<T: ?Sized> SharedPtr<T> {
    pub fn from_box(value: Box<T>) -> Self {
        // SAFETY: the pointer comes straight from `Box::into_raw`
        unsafe { Self::from_raw(Box::into_raw(value)) }
    }

    /// Takes ownership of a pointer produced by `Box::into_raw`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or come from `Box::into_raw`, and no one else may
    /// release it.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        unsafe { Self::from_raw_with_deleter(ptr, DefaultDelete) }
    }

    /// Releases the current pointee (if this was its last owner) and takes
    /// ownership of `value` with a fresh control block.
    pub fn reset_with(&mut self, value: Box<T>) {
        self.reset();
        *self = Self::from_box(value);
    }
}

impl<T: ?Sized, D: Deleter<T>> SharedPtr<T, D> {
    /// A handle without a control block.
    #[must_use]
    pub const fn null() -> Self {
        Self { block: None }
    }

    /// Takes ownership of `ptr`, to be released with `deleter`.
    ///
    /// A null `ptr` still gets a control block (with a use count of 1), but
    /// the deleter is never called for it.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or valid for reads for as long as any handle
    /// exists, and releasable by `deleter`. No one else may release it.
    pub unsafe fn from_raw_with_deleter(ptr: *mut T, deleter: D) -> Self {
        Self {
            block: Some(Rc::new(ControlBlock {
                ptr: NonNull::new(ptr),
                deleter,
                marker: PhantomData,
            })),
        }
    }

    /// The pointee, or `None` without a control block or with a null pointer.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        let ptr = self.as_ptr()?;
        // SAFETY: the pointee lives as long as the control block we hold
        Some(unsafe { ptr.as_ref() })
    }

    #[must_use]
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.block.as_ref()?.ptr
    }

    /// Number of handles sharing this control block; 0 for a null handle.
    #[must_use]
    pub fn use_count(&self) -> usize {
        self.block.as_ref().map_or(0, Rc::strong_count)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.as_ptr().is_none()
    }

    /// Whether both handles share the same control block (or both have none).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.block, &other.block) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Detaches from the control block, deleting the pointee if this was
    /// the last handle.
    pub fn reset(&mut self) {
        self.block = None;
    }

    /// Like `reset`, then takes ownership of `ptr` with a fresh control block.
    ///
    /// # Safety
    ///
    /// Same contract as `from_raw_with_deleter`.
    pub unsafe fn reset_with_deleter(&mut self, ptr: *mut T, deleter: D) {
        self.reset();
        *self = unsafe { Self::from_raw_with_deleter(ptr, deleter) };
    }

    /// Releases the current control block first, then shares `other`'s.
    pub fn assign(&mut self, other: &Self) {
        self.reset();
        self.block = other.block.clone();
    }

    /// Moves the control block out, leaving `self` null. The count is unchanged.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.block, &mut other.block);
    }
}

impl<T: ?Sized, D: Deleter<T>> Clone for SharedPtr<T, D> {
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> Default for SharedPtr<T, D> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized, D: Deleter<T>> Deref for SharedPtr<T, D> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the handle is null.
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a null SharedPtr"),
        }
    }
}

impl<T: ?Sized + fmt::Debug, D: Deleter<T>> fmt::Debug for SharedPtr<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPtr")
            .field("value", &self.get())
            .field("use_count", &self.use_count())
            .finish()
    }
}
