mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use allocvec::{AllocVecError, Allocator, Pointer, Vector};
use common::{CountingAllocator, Lifecycle, Tracked};

#[test]
fn test_every_buffer_goes_through_the_allocator() {
    let alloc = CountingAllocator::new();
    {
        let mut v = Vector::new_in(alloc.clone());
        for i in 0..10 {
            v.push_back(i).unwrap();
        }
        v.shrink_to_fit().unwrap();
        v.reserve(32).unwrap();

        // 1, 2, 4, 8, 16, then shrink to 10, then reserve 32
        assert_eq!(alloc.stats.allocations.get(), 7);
        assert_eq!(alloc.stats.deallocations.get(), 6);
        assert_eq!(alloc.stats.outstanding_slots.get(), 32);
    }
    assert_eq!(alloc.stats.deallocations.get(), 7);
    assert_eq!(alloc.stats.outstanding_slots.get(), 0);
}

#[test]
fn test_construct_and_destroy_are_balanced() {
    let alloc = CountingAllocator::new();
    {
        let mut v = Vector::with_capacity_in(2, alloc.clone()).unwrap();
        v.push_back("a".to_string()).unwrap();
        v.push_back("b".to_string()).unwrap();
        assert_eq!(alloc.stats.constructs.get(), 2);

        // Reallocation moves both elements, then places the new one
        v.push_back("c".to_string()).unwrap();
        assert_eq!(alloc.stats.constructs.get(), 5);
        assert_eq!(alloc.stats.destroys.get(), 0);
    }
    assert_eq!(alloc.stats.destroys.get(), 3);
}

#[test]
fn test_insert_into_full_vector_moves_each_element_once() {
    let alloc = CountingAllocator::new();
    let mut v = Vector::with_capacity_in(3, alloc.clone()).unwrap();
    for i in 1..=3 {
        v.push_back(i).unwrap();
    }

    v.insert(1, 99).unwrap();

    // 3 initial constructs, 3 moves, 1 inserted value
    assert_eq!(alloc.stats.constructs.get(), 7);
    assert_eq!(v, [1, 99, 2, 3]);
}

#[test]
fn test_zero_capacity_never_allocates() {
    let alloc = CountingAllocator::new();
    let v: Vector<i32, _> = Vector::with_capacity_in(0, alloc.clone()).unwrap();
    assert!(v.data().is_none());
    drop(v);

    assert_eq!(alloc.stats.allocations.get(), 0);
    assert_eq!(alloc.stats.deallocations.get(), 0);
}

#[test]
fn test_failed_growth_leaves_vector_unchanged() {
    let alloc = CountingAllocator::new();
    let mut v = Vector::new_in(alloc.clone());
    for i in 0..4 {
        v.push_back(i).unwrap();
    }
    assert_eq!(v.capacity(), 4);
    let buffer = v.data();

    alloc.fail_after(0);

    let expected = AllocVecError::AllocationFailure {
        count: 8,
        element_size: 4,
    };
    assert_eq!(v.push_back(4).unwrap_err(), expected);
    assert_eq!(v.insert(0, 4).unwrap_err(), expected);
    assert_eq!(v.emplace_back(|| unreachable!()).unwrap_err(), expected);
    assert!(v.resize(5).is_err());
    assert!(v.reserve(100).is_err());

    assert_eq!(v, [0, 1, 2, 3]);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.data(), buffer);
}

#[test]
fn test_failed_copy_leaves_target_unchanged() {
    let alloc = CountingAllocator::new();
    let source = Vector::from_array_in([1, 2, 3], alloc.clone()).unwrap();
    let mut target = Vector::from_array_in([9], alloc.clone()).unwrap();

    alloc.fail_after(0);

    assert!(source.try_clone().is_err());
    assert!(target.assign_from(&source).is_err());
    assert_eq!(target, [9]);
}

#[test]
fn test_elements_destroyed_exactly_once() {
    let lifecycle = Rc::new(Lifecycle::default());
    {
        let mut v = Vector::new();
        for i in 0..50 {
            v.push_back(Tracked::new(i, &lifecycle)).unwrap();
        }
        v.insert(10, Tracked::new(-1, &lifecycle)).unwrap();
        v.erase(20);
        v.shrink_to_fit().unwrap();
        assert_eq!(lifecycle.live.get(), 50);
        assert_eq!(lifecycle.drops.get(), 1);
    }
    assert_eq!(lifecycle.live.get(), 0);
    assert_eq!(lifecycle.drops.get(), 51);
    assert_eq!(lifecycle.clones.get(), 0);
}

#[test]
fn test_erase_destroys_through_the_allocator() {
    let alloc = CountingAllocator::new();
    let mut v = Vector::with_capacity_in(4, alloc.clone()).unwrap();
    for s in ["a", "b", "c", "d"] {
        v.push_back(s.to_string()).unwrap();
    }

    v.erase(1);

    assert_eq!(alloc.stats.constructs.get(), 4);
    assert_eq!(alloc.stats.destroys.get(), 1);
    assert_eq!(v, ["a", "c", "d"]);

    v.erase(2);
    assert_eq!(alloc.stats.destroys.get(), 2);
    assert_eq!(v, ["a", "c"]);
}

/// Hands out no storage at all, even for non-empty requests
struct NullAllocator;

// SAFETY: never hands out storage, so nothing can be written through it
unsafe impl<T> Allocator<T> for NullAllocator {
    fn allocate(&self, _n: usize) -> Result<Pointer<T>, AllocVecError> {
        Ok(None)
    }

    unsafe fn deallocate(&self, _ptr: Pointer<T>, _n: usize) {}
}

#[test]
fn test_null_buffer_for_nonempty_request_is_a_failure() {
    let mut v: Vector<u32, NullAllocator> = Vector::new_in(NullAllocator);

    assert_eq!(
        v.reserve(4).unwrap_err(),
        AllocVecError::AllocationFailure {
            count: 4,
            element_size: 4
        }
    );
    assert_eq!(
        v.push_back(1).unwrap_err(),
        AllocVecError::AllocationFailure {
            count: 1,
            element_size: 4
        }
    );
    assert!(v.insert(0, 1).is_err());
    assert!(v.resize(3).is_err());

    assert_eq!(v.capacity(), 0);
    assert!(v.data().is_none());
    assert!(v.is_empty());

    assert!(Vector::<u32, _>::with_capacity_in(3, NullAllocator).is_err());
    assert!(Vector::<u32, _>::with_capacity_in(0, NullAllocator).is_ok());
}

#[test]
fn test_panicking_construct_during_growth_never_drops_twice() {
    let lifecycle = Rc::new(Lifecycle::default());
    let alloc = CountingAllocator::new();
    let mut v = Vector::with_capacity_in(2, alloc.clone()).unwrap();
    v.push_back(Tracked::new(1, &lifecycle)).unwrap();
    v.push_back(Tracked::new(2, &lifecycle)).unwrap();

    // The first element moves, the second construct panics
    alloc.panic_after_constructs(1);
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.push_back(Tracked::new(3, &lifecycle))
    }));

    assert!(result.is_err());
    assert!(v.is_empty());
    drop(v);
    // Elements 2 and 3 died with the unwind, element 1 is leaked in the new buffer
    assert_eq!(lifecycle.drops.get(), 2);
    assert_eq!(lifecycle.live.get(), 1);
}

#[test]
fn test_panicking_construct_during_shift_never_drops_twice() {
    let lifecycle = Rc::new(Lifecycle::default());
    let alloc = CountingAllocator::new();
    let mut v = Vector::with_capacity_in(4, alloc.clone()).unwrap();
    for i in 0..3 {
        v.push_back(Tracked::new(i, &lifecycle)).unwrap();
    }

    // Moving the last element into the spare slot panics
    alloc.panic_after_constructs(0);
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.insert(1, Tracked::new(9, &lifecycle))
    }));

    assert!(result.is_err());
    assert_eq!(v.size(), 1);
    assert_eq!(v[0].value, 0);
    drop(v);
    // The moved last element and the inserted one died with the unwind,
    // element 1 is leaked, element 0 dropped with the vector
    assert_eq!(lifecycle.drops.get(), 3);
    assert_eq!(lifecycle.live.get(), 1);
}
