#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! `SharedPtr` and `UniquePtr`: owning pointers that release their pointee
//! through a pluggable `Deleter`.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Shared Ownership
//!
//! Every copy of a `SharedPtr` refers to one heap control block holding the
//! pointee, the use count and the deleter. The deleter runs exactly once,
//! when the use count drops from 1 to 0.
//!
//! ```
//! # use ownptr::SharedPtr;
//! let mut a = SharedPtr::new(5);
//! let b = a.clone();
//! assert_eq!(a.use_count(), 2);
//!
//! a.reset();
//! assert_eq!(a.use_count(), 0);
//! assert!(a.is_null());
//! assert_eq!(b.use_count(), 1);
//! assert_eq!(*b, 5);
//! ```
//!
//! The count is a plain (non-atomic) integer: `SharedPtr` is neither `Send`
//! nor `Sync`.
//!
//! # Exclusive Ownership
//!
//! `UniquePtr` owns its pointee alone. It can be moved but not copied:
//!
//! ```compile_fail
//! # use ownptr::UniquePtr;
//! fn copy<T: Clone>(value: &T) -> T {
//!     value.clone()
//! }
//!
//! let a = UniquePtr::new(5);
//! let b = copy(&a);
//! ```
//!
//! `release()` hands the raw pointer to the caller without deleting it;
//! `reset()` deletes the pointee and leaves the pointer null.
//!
//! ```
//! # use ownptr::UniquePtr;
//! let mut up = UniquePtr::new(String::from("owned"));
//! up.push('!');
//! assert_eq!(up.as_str(), "owned!");
//!
//! let boxed = up.release_box().unwrap();
//! assert!(up.is_null());
//! assert_eq!(*boxed, "owned!");
//! ```
//!
//! # Arrays
//!
//! The array forms are `SharedPtr<[T]>` and `UniquePtr<[T]>`. They dereference
//! to a slice, so elements are reached by index, and the default deleter
//! releases the whole array.
//!
//! ```
//! # use ownptr::{SharedPtr, UniquePtr};
//! let shared = SharedPtr::from_vec(vec![1, 2, 3]);
//! assert_eq!(shared[2], 3);
//!
//! let mut unique = UniquePtr::from_vec(vec![3, 5, 8]);
//! unique[0] = 4;
//! assert_eq!(&*unique, &[4, 5, 8]);
//! ```
//!
//! # Custom Deleters
//!
//! Any `FnMut(NonNull<T>)` closure can release the pointee:
//!
//! ```
//! # use ownptr::UniquePtr;
//! use std::cell::Cell;
//! use std::ptr::NonNull;
//!
//! let deleted = Cell::new(0);
//! let raw = Box::into_raw(Box::new(4));
//! {
//!     let deleter = |ptr: NonNull<i32>| {
//!         deleted.set(deleted.get() + 1);
//!         drop(unsafe { Box::from_raw(ptr.as_ptr()) });
//!     };
//!     let up = unsafe { UniquePtr::from_raw_with_deleter(raw, deleter) };
//!     assert_eq!(*up, 4);
//! }
//! assert_eq!(deleted.get(), 1);
//! ```
//!
//! # Null Handles
//!
//! Dereferencing a null pointer is a precondition violation and panics; use
//! `get()` to check first.

extern crate alloc;

mod deleter;
mod shared;
mod unique;

// Re-export public types and traits
pub use deleter::{DefaultDelete, Deleter};
pub use shared::SharedPtr;
pub use unique::UniquePtr;
