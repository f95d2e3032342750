//! Elementwise set and multiset arithmetic for [SparseIntVect].
//!
//! Every operation validates lengths and computes into a fresh entry map
//! before touching the receiver, so a failed call never leaves a partially
//! updated vector behind.

use std::collections::BTreeMap;
use std::ops::{Add, BitAnd, BitOr, Mul, Sub};

use num_traits::{PrimInt, Signed};

use crate::errors::{Result, SparseIntVectError};
use crate::models::sparse_int_vect::{SparseIntVect, store};

/// Which indices an elementwise operation visits.
enum Domain {
    /// Only indices populated on the left operand.
    Left,
    /// Indices populated on either operand.
    Either,
}

impl<T> SparseIntVect<T>
where
    T: PrimInt + Signed,
{
    fn check_length(&self, other: &Self) -> Result<()> {
        if self.length != other.length {
            return Err(SparseIntVectError::LengthMismatch {
                left: self.length,
                right: other.length,
            });
        }
        Ok(())
    }

    ///
    /// Combine `other` into `self` index by index.
    ///
    /// `op` receives the left and right values (`None` when not populated)
    /// and returns the result, or `None` on overflow.
    fn merge_with<F>(&mut self, other: &Self, domain: Domain, op: F) -> Result<&mut Self>
    where
        F: Fn(Option<T>, Option<T>) -> Option<T>,
    {
        self.check_length(other)?;

        let mut merged = BTreeMap::new();
        for (&index, &left) in &self.entries {
            let value = op(Some(left), other.entries.get(&index).copied())
                .ok_or(SparseIntVectError::Overflow { index })?;
            store(&mut merged, index, value);
        }

        if let Domain::Either = domain {
            for (&index, &right) in &other.entries {
                if self.entries.contains_key(&index) {
                    continue;
                }
                let value =
                    op(None, Some(right)).ok_or(SparseIntVectError::Overflow { index })?;
                store(&mut merged, index, value);
            }
        }

        self.entries = merged;
        Ok(self)
    }

    ///
    /// Keep `min(left, right)` for indices populated on both sides; drop
    /// everything else.
    ///
    pub fn intersect_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.merge_with(other, Domain::Left, |left, right| match (left, right) {
            (Some(left), Some(right)) => Some(left.min(right)),
            _ => Some(T::zero()),
        })
    }

    ///
    /// Keep `max(left, right)` for indices populated on the left, where an
    /// absent right value counts as zero; copy right-only entries as they are.
    ///
    pub fn union_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.merge_with(other, Domain::Either, |left, right| match (left, right) {
            (Some(left), right) => Some(left.max(right.unwrap_or_else(T::zero))),
            (None, right) => right,
        })
    }

    /// Pointwise sum over indices populated on either side.
    pub fn add_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.merge_with(other, Domain::Either, |left, right| {
            left.unwrap_or_else(T::zero)
                .checked_add(&right.unwrap_or_else(T::zero))
        })
    }

    /// Pointwise difference `left - right` over indices populated on either side.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.merge_with(other, Domain::Either, |left, right| {
            left.unwrap_or_else(T::zero)
                .checked_sub(&right.unwrap_or_else(T::zero))
        })
    }

    /// Pointwise product over indices populated on the left.
    pub fn mul_in_place(&mut self, other: &Self) -> Result<&mut Self> {
        self.merge_with(other, Domain::Left, |left, right| {
            left.unwrap_or_else(T::zero)
                .checked_mul(&right.unwrap_or_else(T::zero))
        })
    }

    /// Non-mutating form of [SparseIntVect::intersect_in_place].
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        res.intersect_in_place(other)?;
        Ok(res)
    }

    /// Non-mutating form of [SparseIntVect::union_in_place].
    pub fn union(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        res.union_in_place(other)?;
        Ok(res)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        res.add_in_place(other)?;
        Ok(res)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        res.sub_in_place(other)?;
        Ok(res)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        let mut res = self.clone();
        res.mul_in_place(other)?;
        Ok(res)
    }
}

// operators on references return a Result, since lengths are only known at runtime
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl<'a, 'b, T> $trait<&'b SparseIntVect<T>> for &'a SparseIntVect<T>
        where
            T: PrimInt + Signed,
        {
            type Output = Result<SparseIntVect<T>>;

            fn $method(self, rhs: &'b SparseIntVect<T>) -> Self::Output {
                self.$inherent(rhs)
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, intersection);
impl_binary_op!(BitOr, bitor, union);
impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);
