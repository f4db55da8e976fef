use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use tracing::trace;

use crate::allocator::{allocation_failure, Allocator, HeapAllocator, Pointer};
use crate::error::AllocVecError;

/// Multiplier applied to the capacity when a full vector grows
pub const GROWTH_FACTOR: usize = 2;
/// Capacity of the first buffer of a vector that grows from empty
pub const MIN_NON_EMPTY_CAPACITY: usize = 1;

/// Capacity a buffer of `current` slots grows to when `required` slots are needed.
///
/// Doubles (starting from 1), unless `required` is larger, in which case
/// `required` is used exactly.
#[must_use]
pub fn grown_capacity(current: usize, required: usize) -> usize {
    current
        .saturating_mul(GROWTH_FACTOR)
        .max(MIN_NON_EMPTY_CAPACITY)
        .max(required)
}

/// A growable array whose memory is managed by an `Allocator`
///
/// Slots `[0, size)` of the buffer hold live elements, slots
/// `[size, capacity)` are raw storage. The buffer is the null handle exactly
/// when the capacity is 0.
pub struct Vector<T, A: Allocator<T> = HeapAllocator<T>> {
    alloc: A,
    buffer: Pointer<T>,
    size: usize,
    capacity: usize,
    marker: PhantomData<T>,
}

// SAFETY: the vector uniquely owns its buffer, like `Vec<T>`
unsafe impl<T: Send, A: Allocator<T> + Send> Send for Vector<T, A> {}
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T> {
    /// Creates an empty vector. Nothing is allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(HeapAllocator::new())
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocVecError> {
        Self::with_capacity_in(capacity, HeapAllocator::new())
    }

    /// Creates a vector of `size` default-constructed elements.
    ///
    /// Both size and capacity are `size`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn with_size(size: usize) -> Result<Self, AllocVecError>
    where
        T: Default,
    {
        Self::with_size_in(size, HeapAllocator::new())
    }

    /// Creates a vector of `size` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_elem(size: usize, value: T) -> Result<Self, AllocVecError>
    where
        T: Clone,
    {
        Self::from_elem_in(size, value, HeapAllocator::new())
    }

    /// Creates a vector holding clones of `values`, in order.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self, AllocVecError>
    where
        T: Clone,
    {
        Self::from_slice_in(values, HeapAllocator::new())
    }

    /// Creates a vector by moving `values` in, in order. Used by `vector![]`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_array<const N: usize>(values: [T; N]) -> Result<Self, AllocVecError> {
        Self::from_array_in(values, HeapAllocator::new())
    }
}

impl<T, A: Allocator<T>> Vector<T, A> {
    #[must_use]
    pub fn new_in(alloc: A) -> Self {
        Self {
            alloc,
            buffer: None,
            size: 0,
            capacity: 0,
            marker: PhantomData,
        }
    }

    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocVecError> {
        let buffer = allocate_buffer(&alloc, capacity)?;
        Ok(Self {
            alloc,
            buffer,
            size: 0,
            capacity,
            marker: PhantomData,
        })
    }

    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn with_size_in(size: usize, alloc: A) -> Result<Self, AllocVecError>
    where
        T: Default,
    {
        let mut vector = Self::with_capacity_in(size, alloc)?;
        vector.fill_within_capacity(size, T::default);
        Ok(vector)
    }

    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_elem_in(size: usize, value: T, alloc: A) -> Result<Self, AllocVecError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity_in(size, alloc)?;
        vector.fill_within_capacity(size, || value.clone());
        Ok(vector)
    }

    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_slice_in(values: &[T], alloc: A) -> Result<Self, AllocVecError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity_in(values.len(), alloc)?;
        for value in values {
            // SAFETY: one slot was allocated per source element
            unsafe { vector.push_unchecked(value.clone()) };
        }
        Ok(vector)
    }

    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn from_array_in<const N: usize>(values: [T; N], alloc: A) -> Result<Self, AllocVecError> {
        let mut vector = Self::with_capacity_in(N, alloc)?;
        for value in values {
            // SAFETY: exactly N slots were allocated for N values
            unsafe { vector.push_unchecked(value) };
        }
        Ok(vector)
    }

    /// Number of live elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots in the current buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The raw buffer; `None` when the capacity is 0.
    #[must_use]
    pub fn data(&self) -> Pointer<T> {
        self.buffer
    }

    #[must_use]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Raw pointer to the first slot, dangling (never null) when there is no buffer.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.base().as_ptr()
    }

    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.base().as_ptr()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, size) are live; base() is aligned and non-null
        unsafe { slice::from_raw_parts(self.base().as_ptr(), self.size) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees uniqueness
        unsafe { slice::from_raw_parts_mut(self.base().as_ptr(), self.size) }
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::OutOfRange` if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&T, AllocVecError> {
        self.as_slice().get(index).ok_or(AllocVecError::OutOfRange {
            index,
            size: self.size,
        })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::OutOfRange` if `index >= size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, AllocVecError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(AllocVecError::OutOfRange { index, size })
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Ensures room for at least `new_capacity` elements.
    ///
    /// A request at or below the current capacity does nothing; otherwise the
    /// buffer is reallocated to exactly `new_capacity` slots. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the new buffer cannot be
    /// allocated. The vector is left unchanged in that case.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), AllocVecError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        self.reallocate(new_capacity)
    }

    /// Reallocates so that the capacity equals the size.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the new buffer cannot be
    /// allocated. The vector is left unchanged in that case.
    pub fn shrink_to_fit(&mut self) -> Result<(), AllocVecError> {
        if self.capacity == self.size {
            return Ok(());
        }
        self.reallocate(self.size)
    }

    /// Grows with default-constructed elements or destroys the tail, so that
    /// `size() == new_size`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if growing needs a buffer
    /// that cannot be allocated. The vector is left unchanged in that case.
    pub fn resize(&mut self, new_size: usize) -> Result<(), AllocVecError>
    where
        T: Default,
    {
        self.resize_with(new_size, T::default)
    }

    /// Like `resize`, producing new elements with `f`.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if growing needs a buffer
    /// that cannot be allocated. The vector is left unchanged in that case.
    pub fn resize_with<F>(&mut self, new_size: usize, f: F) -> Result<(), AllocVecError>
    where
        F: FnMut() -> T,
    {
        if new_size <= self.size {
            self.truncate(new_size);
            return Ok(());
        }
        if new_size > self.capacity {
            self.reallocate(grown_capacity(self.capacity, new_size))?;
        }
        self.fill_within_capacity(new_size, f);
        Ok(())
    }

    /// Destroys the elements at `[new_size, size)` in place. The capacity is unchanged.
    pub fn truncate(&mut self, new_size: usize) {
        if new_size >= self.size {
            return;
        }
        // Shrink first so a panicking destructor cannot cause a double drop
        let old_size = mem::replace(&mut self.size, new_size);
        for index in new_size..old_size {
            // SAFETY: the slot was live and is no longer counted in `size`
            unsafe { self.alloc.destroy(self.slot(index)) };
        }
    }

    /// Destroys all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value`, growing the buffer by the doubling policy when full.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the vector is full and a
    /// larger buffer cannot be allocated. The vector is left unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), AllocVecError> {
        self.grow_for(1)?;
        // SAFETY: grow_for made room for one more element
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends the element produced by `make` and returns a reference to it.
    ///
    /// The buffer is grown before `make` runs.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the vector is full and a
    /// larger buffer cannot be allocated. `make` is not called in that case.
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, AllocVecError>
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1)?;
        let index = self.size;
        // SAFETY: grow_for made room for one more element
        unsafe {
            self.push_unchecked(make());
            Ok(&mut *self.slot(index).as_ptr())
        }
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        // SAFETY: the slot was live and is no longer counted in `size`
        Some(unsafe { ptr::read(self.slot(self.size).as_ptr()) })
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// When the vector is full, a grown buffer is allocated and the elements
    /// are moved into their final slots around `value` in one pass.
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the vector is full and a
    /// larger buffer cannot be allocated. The vector is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > size()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, AllocVecError> {
        assert!(
            index <= self.size,
            "Insertion index {} out of bounds for vector of size {}",
            index,
            self.size
        );

        let size = self.size;
        if size == self.capacity {
            let new_capacity = grown_capacity(self.capacity, self.required(1)?);
            let new_buffer = allocate_buffer(&self.alloc, new_capacity)?;
            let destination = new_buffer.ok_or_else(|| allocation_failure::<T>(new_capacity))?;
            // Nothing counts as live while elements are in flight
            self.size = 0;
            // SAFETY: the new buffer holds size + 1 slots; every live element
            // is moved exactly once, the old slots become raw
            unsafe {
                self.move_elements(0, destination, 0, index);
                self.alloc.construct(offset(destination, index), value);
                self.move_elements(index, destination, index + 1, size - index);
            }
            self.size = size;
            self.replace_buffer(new_buffer, new_capacity);
        } else {
            let base = self.base().as_ptr();
            // Slots from `index` on are in flight until the shift completes
            self.size = index;
            // SAFETY: size < capacity, so slot `size` is raw and in bounds
            unsafe {
                if index < size {
                    let last = ptr::read(base.add(size - 1));
                    self.alloc.construct(self.slot(size), last);
                    ptr::copy(base.add(index), base.add(index + 1), size - 1 - index);
                }
                // Slot `index` now holds a stale bitwise copy, overwrite without dropping
                self.alloc.construct(self.slot(index), value);
            }
        }
        self.size = size + 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.size,
            "Index {} out of bounds for vector of size {}",
            index,
            self.size
        );
        let base = self.base().as_ptr();
        // SAFETY: index < size; the tail is shifted over the moved-out slot
        // and the last slot stops being counted
        unsafe {
            let removed = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.size - index - 1);
            self.size -= 1;
            removed
        }
    }

    /// Destroys the element at `index`, shifting later elements one slot left.
    ///
    /// Returns `index`, which now refers to the element that followed the
    /// erased one (or to `size()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "Index {} out of bounds for vector of size {}",
            index,
            self.size
        );
        let base = self.base().as_ptr();
        // A panicking destructor leaks the tail instead of dropping it twice
        let size = mem::replace(&mut self.size, index);
        // SAFETY: index < size; the erased slot is torn down in place, then
        // the tail is shifted over it
        unsafe {
            self.alloc.destroy(self.slot(index));
            ptr::copy(base.add(index + 1), base.add(index), size - index - 1);
        }
        self.size = size - 1;
        index
    }

    /// Exchanges contents, capacity and buffer with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` empty with no buffer.
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }

    /// Deep copy with its own buffer of exactly `size()` slots.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, AllocVecError>
    where
        T: Clone,
        A: Clone,
    {
        Self::from_slice_in(self.as_slice(), self.alloc.clone())
    }

    /// Replaces the contents with a copy of `other`.
    ///
    /// The copy is built completely before it is swapped in, so on failure
    /// (or a panicking `clone`) `self` keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns `AllocVecError::AllocationFailure` if the copy cannot be allocated.
    pub fn assign_from(&mut self, other: &Self) -> Result<(), AllocVecError>
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = other.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Disassembles the vector without running its destructor.
    pub(crate) fn into_raw_parts(self) -> (A, Pointer<T>, usize, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped again
        let alloc = unsafe { ptr::read(&this.alloc) };
        (alloc, this.buffer, this.size, this.capacity)
    }

    fn base(&self) -> NonNull<T> {
        self.buffer.unwrap_or(NonNull::dangling())
    }

    /// # Safety
    ///
    /// `index` must be below the capacity.
    unsafe fn slot(&self, index: usize) -> NonNull<T> {
        unsafe { offset(self.base(), index) }
    }

    /// # Safety
    ///
    /// `size < capacity`.
    unsafe fn push_unchecked(&mut self, value: T) {
        unsafe { self.alloc.construct(self.slot(self.size), value) };
        self.size += 1;
    }

    fn fill_within_capacity<F>(&mut self, new_size: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(new_size <= self.capacity);
        while self.size < new_size {
            let value = f();
            // SAFETY: size < new_size <= capacity
            unsafe { self.push_unchecked(value) };
        }
    }

    fn required(&self, additional: usize) -> Result<usize, AllocVecError> {
        self.size
            .checked_add(additional)
            .ok_or_else(|| allocation_failure::<T>(usize::MAX))
    }

    fn grow_for(&mut self, additional: usize) -> Result<(), AllocVecError> {
        let required = self.required(additional)?;
        if required <= self.capacity {
            return Ok(());
        }
        self.reallocate(grown_capacity(self.capacity, required))
    }

    /// Moves the live elements into a fresh buffer of exactly `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), AllocVecError> {
        debug_assert!(new_capacity >= self.size);
        let new_buffer = allocate_buffer(&self.alloc, new_capacity)?;
        // Nothing counts as live while elements are in flight
        let size = mem::replace(&mut self.size, 0);
        if let Some(destination) = new_buffer {
            // SAFETY: the new buffer holds at least `size` slots
            unsafe { self.move_elements(0, destination, 0, size) };
        }
        self.size = size;
        self.replace_buffer(new_buffer, new_capacity);
        Ok(())
    }

    /// Moves `count` elements starting at slot `from` into `destination`
    /// starting at slot `to`. The source slots become raw.
    ///
    /// # Safety
    ///
    /// The source range must hold initialized elements that are not counted
    /// in `size`, the destination range must be raw and in bounds of a
    /// different buffer.
    unsafe fn move_elements(&self, from: usize, destination: NonNull<T>, to: usize, count: usize) {
        for i in 0..count {
            unsafe {
                let value = ptr::read(self.slot(from + i).as_ptr());
                self.alloc.construct(offset(destination, to + i), value);
            }
        }
    }

    /// Adopts `new_buffer` after the live elements were moved into it and
    /// releases the old buffer.
    fn replace_buffer(&mut self, new_buffer: Pointer<T>, new_capacity: usize) {
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            size = self.size,
            "reallocated vector buffer"
        );
        let old_buffer = mem::replace(&mut self.buffer, new_buffer);
        let old_capacity = mem::replace(&mut self.capacity, new_capacity);
        // SAFETY: the old buffer came from `allocate(old_capacity)` and holds no live elements
        unsafe { self.alloc.deallocate(old_buffer, old_capacity) };
    }
}

/// Requests `n` slots, treating a null buffer for `n > 0` as a failure.
fn allocate_buffer<T, A: Allocator<T>>(alloc: &A, n: usize) -> Result<Pointer<T>, AllocVecError> {
    match alloc.allocate(n)? {
        None if n > 0 => Err(allocation_failure::<T>(n)),
        buffer => Ok(buffer),
    }
}

/// # Safety
///
/// The result must stay within (or one past) the allocation of `base`.
unsafe fn offset<T>(base: NonNull<T>, count: usize) -> NonNull<T> {
    unsafe { NonNull::new_unchecked(base.as_ptr().add(count)) }
}

impl<T, A: Allocator<T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.clear();
        if self.buffer.is_some() {
            trace!(capacity = self.capacity, "released vector buffer");
        }
        let buffer = self.buffer.take();
        // SAFETY: all elements were destroyed; the buffer came from `allocate(capacity)`
        unsafe { self.alloc.deallocate(buffer, self.capacity) };
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: Allocator<T> + Clone> Clone for Vector<T, A> {
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{err}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("{err}");
        }
    }
}

impl<T, A: Allocator<T>> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<T>> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator<T>> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
    B: Allocator<U>,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator<T>, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator<T>> Eq for Vector<T, A> {}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements separated by single spaces.
impl<T: fmt::Display, A: Allocator<T>> fmt::Display for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
        }
        for element in elements {
            write!(f, " {element}")?;
        }
        Ok(())
    }
}

/// Builds a `Vector` from a literal sequence, like `vec!`.
///
/// Evaluates to `Result<Vector<T>, AllocVecError>`.
///
/// ```
/// use allocvec::vector;
///
/// let v = vector![1, 2, 3].unwrap();
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = vector![0u8; 4].unwrap();
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        ::core::result::Result::<_, $crate::AllocVecError>::Ok($crate::Vector::new())
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from_array([$($x),+])
    };
}
