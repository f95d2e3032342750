//! Core data model for sivect: a fixed-length, sparse, integer-valued vector.
//!
//! A [`SparseIntVect`] maps indices in `[0, length)` to non-zero counts. Absent
//! indices read as zero and are never stored, so iteration only ever yields
//! populated entries, in ascending index order.
//!
//! ## Quick Start
//!
//! ```rust
//! use sivect_core::SparseIntVect;
//!
//! // build a histogram from a multiset of observations
//! let mut counts: SparseIntVect = SparseIntVect::new(10);
//! counts.update_from_sequence([0, 1, 1, 5]).unwrap();
//!
//! let pairs: Vec<(usize, i64)> = counts.iter().collect();
//! assert_eq!(pairs, vec![(0, 1), (1, 2), (5, 1)]);
//! assert_eq!(counts.sum().unwrap(), 4);
//! ```
//!
//! Elementwise arithmetic requires both operands to share a length and an
//! element type. A length mismatch is reported as an error; an element type
//! mismatch does not compile.
//!
//! ```rust
//! use sivect_core::{SparseIntVect, SparseIntVectError};
//!
//! let a: SparseIntVect = SparseIntVect::from_pairs(10, [(0, 3), (4, 5)]).unwrap();
//! let b: SparseIntVect = SparseIntVect::from_pairs(10, [(0, 2), (5, 6)]).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.iter().collect::<Vec<_>>(), vec![(0, 5), (4, 5), (5, 6)]);
//!
//! let short: SparseIntVect = SparseIntVect::new(5);
//! assert_eq!(
//!     (&a + &short).unwrap_err(),
//!     SparseIntVectError::LengthMismatch { left: 10, right: 5 }
//! );
//! ```

pub mod errors;
pub mod models;

// re-exports
pub use self::errors::{Result, SparseIntVectError};
pub use self::models::{SparseIntVect, SparseIntVectIter};
