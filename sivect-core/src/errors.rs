use thiserror::Error;

/// Error type for sparse vector operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseIntVectError {
    /// Index is negative or not below the vector length.
    #[error("Index {index} out of range for vector of length {length}")]
    OutOfRange { index: isize, length: usize },

    /// Both operands are vectors, but their declared lengths differ.
    #[error("Vector lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A value could not be truncated into the vector's element type.
    #[error("Value can't be stored in the vector: {0}")]
    ValueNotRepresentable(String),

    /// An elementwise result or a running sum does not fit in the element type.
    #[error("Arithmetic overflow at index {index}")]
    Overflow { index: usize },
}

/// Result type alias for sivect-core operations.
pub type Result<T> = std::result::Result<T, SparseIntVectError>;
