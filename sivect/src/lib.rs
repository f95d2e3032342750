//! Fixed-length sparse integer count vectors and the Dice similarity.
//!
//! This crate re-exports the workspace crates behind cargo features:
//!
//! - `core`: [`core::SparseIntVect`] and its error type
//! - `similarity`: [`similarity::dice_similarity`] and its bulk forms

#[cfg(feature = "core")]
#[doc(inline)]
pub use sivect_core as core;

#[cfg(feature = "similarity")]
#[doc(inline)]
pub use sivect_similarity as similarity;
