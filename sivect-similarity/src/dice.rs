use log::{debug, trace};
use num_traits::{PrimInt, Signed};

use sivect_core::{Result, SparseIntVect};

/// Sum of all stored values, accumulated as floating point so large
/// signatures can't overflow the element type.
fn total<T>(v: &SparseIntVect<T>) -> f64
where
    T: PrimInt + Signed,
{
    v.iter()
        .map(|(_, value)| value.to_f64().unwrap_or_default())
        .sum()
}

///
/// Compute the Dice similarity of two count vectors.
///
/// The result is `2 * sum(v1 & v2) / (sum(v1) + sum(v2))`, and `0.0` when
/// both sums add up to zero.
///
/// When `lower_bound` is given and `min(v1.len(), v2.len()) / denominator`
/// falls below it, the intersection is skipped and the result is `0.0`.
/// The bound compares against the declared lengths, not the populated
/// entry counts, so it only fires when the total count exceeds the length
/// by the inverse of the bound.
///
/// # Arguments:
/// - v1, v2: vectors of the same length
/// - lower_bound: optional early-exit threshold
///
/// # Errors
/// [sivect_core::SparseIntVectError::LengthMismatch] when the lengths differ and the
/// intersection has to be computed. A zero denominator or a fired bound
/// yields `0.0` without comparing lengths.
pub fn dice_similarity<T>(
    v1: &SparseIntVect<T>,
    v2: &SparseIntVect<T>,
    lower_bound: Option<f64>,
) -> Result<f64>
where
    T: PrimInt + Signed,
{
    let denom = total(v1) + total(v2);
    if denom == 0.0 {
        return Ok(0.0);
    }

    // a zero bound disables the check
    if let Some(bound) = lower_bound.filter(|&b| b != 0.0) {
        let ratio = v1.len().min(v2.len()) as f64 / denom;
        if ratio < bound {
            trace!("dice early exit: length/denominator {ratio} below bound {bound}");
            return Ok(0.0);
        }
    }

    let numer = 2.0 * total(&v1.intersection(v2)?);
    Ok(numer / denom)
}

///
/// Score `query` against every target, in order.
///
/// Stops at the first target whose intersection with the query fails on a
/// length mismatch.
pub fn bulk_dice_similarity<'a, T, I>(
    query: &SparseIntVect<T>,
    targets: I,
    lower_bound: Option<f64>,
) -> Result<Vec<f64>>
where
    T: PrimInt + Signed + 'a,
    I: IntoIterator<Item = &'a SparseIntVect<T>>,
{
    let scores = targets
        .into_iter()
        .map(|target| dice_similarity(query, target, lower_bound))
        .collect::<Result<Vec<f64>>>()?;

    debug!("scored {} targets", scores.len());
    Ok(scores)
}

///
/// Find the targets whose Dice similarity to `query` is at least `threshold`.
///
/// The threshold doubles as the early-exit bound. Hits are returned as
/// `(position, score)`, best score first, ties broken by position.
pub fn dice_neighbors<'a, T, I>(
    query: &SparseIntVect<T>,
    targets: I,
    threshold: f64,
) -> Result<Vec<(usize, f64)>>
where
    T: PrimInt + Signed + 'a,
    I: IntoIterator<Item = &'a SparseIntVect<T>>,
{
    let mut hits = Vec::new();
    let mut screened = 0;
    for (position, target) in targets.into_iter().enumerate() {
        screened += 1;
        let score = dice_similarity(query, target, Some(threshold))?;
        if score >= threshold {
            hits.push((position, score));
        }
    }

    hits.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    debug!("{} of {} targets at or above {threshold}", hits.len(), screened);
    Ok(hits)
}
