use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;

use num_traits::{NumCast, PrimInt, Signed, ToPrimitive};

use crate::errors::{Result, SparseIntVectError};

///
/// A fixed-length vector of integer counts where only the non-zero
/// positions are stored.
///
/// The length is set at construction and never changes. Every stored index
/// lies in `[0, length)` and every stored value is non-zero: writing a zero,
/// or producing one through arithmetic, removes the index.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseIntVect<T = i64>
where
    T: PrimInt + Signed,
{
    pub(crate) length: usize,
    pub(crate) entries: BTreeMap<usize, T>,
}

/// Iterator over the populated `(index, value)` pairs of a [SparseIntVect],
/// in ascending index order.
pub struct SparseIntVectIter<'a, T> {
    inner: btree_map::Iter<'a, usize, T>,
}

/// Store `value` at `index`, or drop the index when the value is zero.
pub(crate) fn store<T: PrimInt>(entries: &mut BTreeMap<usize, T>, index: usize, value: T) {
    if value.is_zero() {
        entries.remove(&index);
    } else {
        entries.insert(index, value);
    }
}

impl<T> SparseIntVect<T>
where
    T: PrimInt + Signed,
{
    ///
    /// Create an empty vector with a fixed logical length.
    ///
    pub fn new(length: usize) -> Self {
        SparseIntVect {
            length,
            entries: BTreeMap::new(),
        }
    }

    ///
    /// Create a vector of `length` holding the histogram of `seq`.
    ///
    /// # Arguments:
    /// - length: logical length of the vector
    /// - seq: indices to count, repeats allowed
    pub fn from_sequence<I>(length: usize, seq: I) -> Result<Self>
    where
        I: IntoIterator<Item = isize>,
    {
        let mut vect = Self::new(length);
        vect.update_from_sequence(seq)?;
        Ok(vect)
    }

    ///
    /// Create a vector of `length` from `(index, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same index; zero values
    /// are not stored.
    pub fn from_pairs<I>(length: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (isize, T)>,
    {
        let mut vect = Self::new(length);
        for (index, value) in pairs {
            vect.set(index, value)?;
        }
        Ok(vect)
    }

    /// The fixed logical length, not the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of populated (non-zero) entries.
    #[inline]
    pub fn populated_len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is populated, i.e. every position reads as zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.length)
            .ok_or(SparseIntVectError::OutOfRange {
                index,
                length: self.length,
            })
    }

    ///
    /// Read the count stored at `index`, or zero when nothing is stored.
    ///
    /// Negative indices are rejected, there is no tail indexing.
    pub fn get(&self, index: isize) -> Result<T> {
        let index = self.check_index(index)?;
        Ok(self.entries.get(&index).copied().unwrap_or_else(T::zero))
    }

    ///
    /// Store `value` at `index`. Storing zero removes the entry.
    ///
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        let index = self.check_index(index)?;
        store(&mut self.entries, index, value);
        Ok(())
    }

    ///
    /// Store any primitive number at `index`, truncating it toward zero.
    ///
    /// Fails with [SparseIntVectError::ValueNotRepresentable] for NaN,
    /// infinities and values outside the range of `T`.
    pub fn set_value<V>(&mut self, index: isize, value: V) -> Result<()>
    where
        V: ToPrimitive + Copy + Debug,
    {
        let index = self.check_index(index)?;
        let value = <T as NumCast>::from(value)
            .ok_or_else(|| SparseIntVectError::ValueNotRepresentable(format!("{value:?}")))?;
        store(&mut self.entries, index, value);
        Ok(())
    }

    ///
    /// Add one to the count of every index in `seq`, once per occurrence.
    ///
    /// The sequence is applied to a working copy, so an out of range index
    /// anywhere in it leaves the vector unchanged.
    pub fn update_from_sequence<I>(&mut self, seq: I) -> Result<()>
    where
        I: IntoIterator<Item = isize>,
    {
        let mut entries = self.entries.clone();
        for index in seq {
            let index = self.check_index(index)?;
            let current = entries.get(&index).copied().unwrap_or_else(T::zero);
            let next = current
                .checked_add(&T::one())
                .ok_or(SparseIntVectError::Overflow { index })?;
            store(&mut entries, index, next);
        }
        self.entries = entries;
        Ok(())
    }

    ///
    /// Replace the contents with the histogram of `seq`.
    ///
    pub fn init_from_sequence<I>(&mut self, seq: I) -> Result<()>
    where
        I: IntoIterator<Item = isize>,
    {
        let fresh = Self::from_sequence(self.length, seq)?;
        self.entries = fresh.entries;
        Ok(())
    }

    /// Drop every entry. The length is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    ///
    /// Total of all stored values.
    ///
    /// Fails with [SparseIntVectError::Overflow] at the entry where the
    /// running total leaves the range of `T`.
    pub fn sum(&self) -> Result<T> {
        self.entries.iter().try_fold(T::zero(), |acc, (&index, &v)| {
            acc.checked_add(&v)
                .ok_or(SparseIntVectError::Overflow { index })
        })
    }

    /// Iterate over populated `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> SparseIntVectIter<'_, T> {
        SparseIntVectIter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a, T> Iterator for SparseIntVectIter<'a, T>
where
    T: Copy,
{
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, &value)| (index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> DoubleEndedIterator for SparseIntVectIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&index, &value)| (index, value))
    }
}

impl<T: Copy> ExactSizeIterator for SparseIntVectIter<'_, T> {}

impl<T: Copy> FusedIterator for SparseIntVectIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SparseIntVect<T>
where
    T: PrimInt + Signed,
{
    type Item = (usize, T);
    type IntoIter = SparseIntVectIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Display for SparseIntVect<T>
where
    T: PrimInt + Signed + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparseIntVect(length={}, [", self.length)?;
        for (n, (index, value)) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({index}, {value})")?;
        }
        write!(f, "])")
    }
}
