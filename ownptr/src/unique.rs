use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use tracing::trace;

use crate::deleter::{DefaultDelete, Deleter};

/// Exclusive-ownership pointer with an embedded deleter
///
/// Move-only: there is no `Clone`, so at most one `UniquePtr` owns a given
/// pointee. With `DefaultDelete` it is exactly as large as a raw pointer.
///
/// Comparisons look at the pointee address, not the pointee value.
pub struct UniquePtr<T: ?Sized, D: Deleter<T> = DefaultDelete> {
    ptr: Option<NonNull<T>>,
    deleter: D,
    marker: PhantomData<T>,
}

// SAFETY: the pointee is uniquely owned, like `Box<T>`
unsafe impl<T: ?Sized + Send, D: Deleter<T> + Send> Send for UniquePtr<T, D> {}
unsafe impl<T: ?Sized + Sync, D: Deleter<T> + Sync> Sync for UniquePtr<T, D> {}

impl<T> UniquePtr<T> {
    /// Moves `value` to the heap and takes exclusive ownership of it.
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }
}

impl<T> UniquePtr<[T]> {
    /// Exclusive ownership of an array, indexed through the slice it dereferences to.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_box(values.into_boxed_slice())
    }
}

impl<T: ?Sized> UniquePtr<T> {
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

    /// Gives up ownership, returning the pointee as a `Box`.
    pub fn release_box(&mut self) -> Option<Box<T>> {
        let ptr = self.release()?;
        // SAFETY: with `DefaultDelete` the pointee came from `Box::into_raw`
        Some(unsafe { Box::from_raw(ptr.as_ptr()) })
    }

    /// Deletes the current pointee (if any) and takes ownership of `value`.
    pub fn reset_with(&mut self, value: Box<T>) {
        // SAFETY: the pointer comes straight from `Box::into_raw`
        unsafe { self.reset_raw(Box::into_raw(value)) }
    }
}

impl<T: ?Sized, D: Deleter<T>> UniquePtr<T, D> {
    #[must_use]
    pub fn null() -> Self
    where
        D: Default,
    {
        Self::null_with_deleter(D::default())
    }

    #[must_use]
    pub fn null_with_deleter(deleter: D) -> Self {
        Self {
            ptr: None,
            deleter,
            marker: PhantomData,
        }
    }

    /// Takes ownership of `ptr`, to be released with `deleter`.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or valid for reads and writes until released, and
    /// releasable by `deleter`. No one else may release it.
    pub unsafe fn from_raw_with_deleter(ptr: *mut T, deleter: D) -> Self {
        Self {
            ptr: NonNull::new(ptr),
            deleter,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: the pointee is owned by `self` and alive while it is borrowed
        self.ptr.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as above, and `&mut self` makes the borrow unique
        self.ptr.map(|ptr| unsafe { &mut *ptr.as_ptr() })
    }

    #[must_use]
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    #[must_use]
    pub fn get_deleter(&self) -> &D {
        &self.deleter
    }

    pub fn get_deleter_mut(&mut self) -> &mut D {
        &mut self.deleter
    }

    /// Gives up ownership without deleting; the caller now owns the pointer.
    pub fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Deletes the current pointee (if any), leaving the pointer null.
    pub fn reset(&mut self) {
        self.replace(None);
    }

    /// Adopts `ptr`, then deletes the previously owned pointee (if any).
    ///
    /// Resetting to the pointer already owned does nothing.
    ///
    /// # Safety
    ///
    /// Same contract as `from_raw_with_deleter`.
    pub unsafe fn reset_raw(&mut self, ptr: *mut T) {
        self.replace(NonNull::new(ptr));
    }

    /// Exchanges both the pointers and the deleters.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn replace(&mut self, ptr: Option<NonNull<T>>) {
        if address(ptr) == address(self.ptr) {
            return;
        }
        let old = mem::replace(&mut self.ptr, ptr);
        if let Some(old) = old {
            trace!("exclusive owner reset, deleting previous pointee");
            // SAFETY: `old` was owned by `self` and is no longer reachable from it
            unsafe { self.deleter.delete(old) };
        }
    }
}

fn address<T: ?Sized>(ptr: Option<NonNull<T>>) -> *const u8 {
    ptr.map_or(ptr::null(), |ptr| ptr.cast::<u8>().as_ptr().cast_const())
}

impl<T: ?Sized, D: Deleter<T>> Drop for UniquePtr<T, D> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            trace!("exclusive owner dropped, deleting pointee");
            // SAFETY: the pointee is owned by `self`, which is going away
            unsafe { self.deleter.delete(ptr) };
        }
    }
}

impl<T: ?Sized, D: Deleter<T> + Default> Default for UniquePtr<T, D> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized, D: Deleter<T>> Deref for UniquePtr<T, D> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the pointer is null.
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("dereferenced a null UniquePtr"),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> DerefMut for UniquePtr<T, D> {
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => panic!("dereferenced a null UniquePtr"),
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> PartialEq for UniquePtr<T, D> {
    fn eq(&self, other: &Self) -> bool {
        address(self.ptr) == address(other.ptr)
    }
}

impl<T: ?Sized, D: Deleter<T>> Eq for UniquePtr<T, D> {}

impl<T: ?Sized, D: Deleter<T>> PartialOrd for UniquePtr<T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized, D: Deleter<T>> Ord for UniquePtr<T, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        address(self.ptr).cmp(&address(other.ptr))
    }
}

impl<T: ?Sized + fmt::Debug, D: Deleter<T>> fmt::Debug for UniquePtr<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UniquePtr").field(&self.get()).finish()
    }
}
