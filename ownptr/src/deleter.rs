use alloc::boxed::Box;
use core::ptr::NonNull;

/// Releases a pointee once its owner lets go of it
///
/// Closures taking `NonNull<T>` are deleters too.
pub trait Deleter<T: ?Sized> {
    /// Releases the pointee at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be owned by the caller, be releasable the way this deleter
    /// releases it, and not be used afterwards.
    unsafe fn delete(&mut self, ptr: NonNull<T>);
}

/// Releases pointees that were allocated as a `Box`
///
/// Covers single objects (`T`) and whole arrays (`[T]`) alike: an array
/// pointee is a boxed slice and is released with all its elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDelete;

impl<T: ?Sized> Deleter<T> for DefaultDelete {
    unsafe fn delete(&mut self, ptr: NonNull<T>) {
        // SAFETY: caller guarantees `ptr` came from `Box::into_raw` and is unused
        drop(unsafe { Box::from_raw(ptr.as_ptr()) });
    }
}

impl<T: ?Sized, F: FnMut(NonNull<T>)> Deleter<T> for F {
    unsafe fn delete(&mut self, ptr: NonNull<T>) {
        self(ptr);
    }
}
