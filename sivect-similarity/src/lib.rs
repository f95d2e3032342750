//! Similarity metrics over [`SparseIntVect`] count signatures.
//!
//! The metric here is the Dice coefficient generalized to weighted counts:
//! `2 * sum(min(a, b)) / (sum(a) + sum(b))`. It only relies on the public
//! contract of [`SparseIntVect`] (sums and intersection), never on how the
//! entries are stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use sivect_core::SparseIntVect;
//! use sivect_similarity::dice_similarity;
//!
//! let v1: SparseIntVect = SparseIntVect::from_sequence(10, [1, 2, 3, 4]).unwrap();
//! let v2: SparseIntVect = SparseIntVect::from_sequence(10, [1, 3, 5, 7]).unwrap();
//!
//! assert_eq!(dice_similarity(&v1, &v2, None).unwrap(), 0.5);
//! ```
//!
//! ## Screening a collection
//!
//! ```rust
//! use sivect_core::SparseIntVect;
//! use sivect_similarity::dice_neighbors;
//!
//! let query: SparseIntVect = SparseIntVect::from_sequence(10, [1, 2, 3]).unwrap();
//! let targets: Vec<SparseIntVect> = vec![
//!     SparseIntVect::from_sequence(10, [5, 6]).unwrap(),
//!     SparseIntVect::from_sequence(10, [1, 2, 3]).unwrap(),
//! ];
//!
//! let hits = dice_neighbors(&query, &targets, 0.5).unwrap();
//! assert_eq!(hits, vec![(1, 1.0)]);
//! ```
//!
//! [`SparseIntVect`]: sivect_core::SparseIntVect

/// Dice coefficient and its bulk forms.
///
/// See [`dice_similarity`] for details.
pub mod dice;

// re-exports
pub use self::dice::{bulk_dice_similarity, dice_neighbors, dice_similarity};
pub use sivect_core::{Result, SparseIntVectError};
