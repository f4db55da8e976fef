#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! `Vector`: a growable array that performs all memory management through a
//! pluggable `Allocator`.
//!
//! The vector owns one raw buffer. Slots `[0, size)` hold live elements and
//! slots `[size, capacity)` are uninitialized storage. The buffer is obtained
//! from the allocator, elements are placed into it with `Allocator::construct`
//! and torn down with `Allocator::destroy`; the vector never calls the global
//! allocator itself.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth Policy
//!
//! When a full vector needs one more slot, the capacity becomes
//! `max(1, 2 × capacity)`. When a caller asks for more than that (`reserve`,
//! `resize`), the requested capacity is used exactly.
//!
//! ```
//! # use allocvec::Vector;
//! let mut v = Vector::new();
//! assert_eq!((v.size(), v.capacity()), (0, 0));
//!
//! v.push_back("a").unwrap();
//! assert_eq!(v.capacity(), 1);
//! v.push_back("b").unwrap();
//! assert_eq!(v.capacity(), 2);
//! v.push_back("c").unwrap();
//! assert_eq!(v.capacity(), 4);
//!
//! v.reserve(10).unwrap();
//! assert_eq!(v.capacity(), 10);
//! v.shrink_to_fit().unwrap();
//! assert_eq!(v.capacity(), 3);
//! ```
//!
//! ## Time Complexity
//! - `push_back()`, `emplace_back()`: amortized O(1)
//! - `pop_back()`, `at()`, indexing: O(1)
//! - `insert()`, `erase()`: O(n) - the tail is shifted by one slot
//! - `reserve()`, `shrink_to_fit()`: O(n) - every live element is moved once
//!
//! # Error Handling
//!
//! Two kinds of failure are reported through `AllocVecError`:
//!
//! - `OutOfRange` from the checked accessors `at()` and `at_mut()`.
//! - `AllocationFailure` from every operation that may allocate. Such an
//!   operation either completes or leaves the vector exactly as it was.
//!
//! ```
//! # use allocvec::{vector, AllocVecError};
//! let v = vector![1, 2, 3].unwrap();
//! assert_eq!(v.at(1), Ok(&2));
//! assert_eq!(v.at(5), Err(AllocVecError::OutOfRange { index: 5, size: 3 }));
//! ```
//!
//! Indexing (`v[i]`), `insert` past the end and `erase` of a missing element
//! are precondition violations and panic.
//!
//! # Insertion and Removal
//!
//! ```
//! # use allocvec::vector;
//! let mut v = vector![1, 2, 3].unwrap();
//! let position = v.insert(1, 99).unwrap();
//! assert_eq!(v, [1, 99, 2, 3]);
//!
//! v.erase(position);
//! assert_eq!(v, [1, 2, 3]);
//!
//! assert_eq!(v.pop_back(), Some(3));
//! assert_eq!(v.to_string(), "1 2");
//! ```
//!
//! # Copy and Move
//!
//! `try_clone` and `assign_from` make independent deep copies; `assign_from`
//! builds the copy before swapping it in. `take` moves the buffer out in
//! constant time and leaves the source empty, without a buffer.
//!
//! ```
//! # use allocvec::vector;
//! let mut source = vector![String::from("x"), String::from("y")].unwrap();
//! let copy = source.try_clone().unwrap();
//! let moved = source.take();
//!
//! assert_eq!(copy, moved);
//! assert_eq!((source.size(), source.capacity()), (0, 0));
//! assert!(source.data().is_none());
//! ```
//!
//! # Custom Allocators
//!
//! Any type implementing `Allocator<T>` can back a vector. The trait is
//! `unsafe` to implement: the vector writes elements into whatever buffer
//! `allocate` returns.
//!
//! ```
//! # use allocvec::{Allocator, AllocVecError, HeapAllocator, Pointer, Vector};
//! use std::cell::Cell;
//!
//! #[derive(Default)]
//! struct Counting {
//!     inner: HeapAllocator<u32>,
//!     allocations: Cell<usize>,
//! }
//!
//! // SAFETY: every request is forwarded to `HeapAllocator`
//! unsafe impl Allocator<u32> for Counting {
//!     fn allocate(&self, n: usize) -> Result<Pointer<u32>, AllocVecError> {
//!         self.allocations.set(self.allocations.get() + 1);
//!         self.inner.allocate(n)
//!     }
//!
//!     unsafe fn deallocate(&self, ptr: Pointer<u32>, n: usize) {
//!         unsafe { self.inner.deallocate(ptr, n) }
//!     }
//! }
//!
//! let mut v = Vector::new_in(Counting::default());
//! for i in 0..5u32 {
//!     v.push_back(i).unwrap();
//! }
//! // capacities 1, 2, 4, 8
//! assert_eq!(v.allocator().allocations.get(), 4);
//! ```

extern crate alloc;

mod allocator;
mod error;
mod iter;
mod vector;

// Re-export public types and traits
pub use allocator::{max_elements, Allocator, HeapAllocator, Pointer};
pub use error::AllocVecError;
pub use iter::IntoIter;
pub use vector::{grown_capacity, Vector, GROWTH_FACTOR, MIN_NON_EMPTY_CAPACITY};
