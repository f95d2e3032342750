pub mod arithmetic;
pub mod sparse_int_vect;

// re-export for cleaner imports
pub use self::sparse_int_vect::{SparseIntVect, SparseIntVectIter};
