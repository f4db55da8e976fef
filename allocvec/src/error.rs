use thiserror::Error;

/// Error types for `Vector` and `Allocator` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AllocVecError {
    /// Checked access outside of the live elements
    #[error("Index out of range: index {index} is beyond vector size {size}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Number of live elements at the time of access
        size: usize,
    },
    /// The memory provider could not satisfy a request
    #[error("Allocation failure: cannot allocate {count} elements of {element_size} bytes")]
    AllocationFailure {
        /// Number of elements requested
        count: usize,
        /// Size of one element in bytes
        element_size: usize,
    },
}
