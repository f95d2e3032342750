use sivect::core::{SparseIntVect, SparseIntVectError};
use sivect::similarity::{bulk_dice_similarity, dice_neighbors, dice_similarity};

use rstest::*;

#[fixture]
fn c1() -> SparseIntVect {
    let mut c1 = SparseIntVect::new(10);
    c1.set(0, 3).unwrap();
    c1.set(2, 2).unwrap();
    c1.set(4, 5).unwrap();
    c1
}

#[fixture]
fn c2() -> SparseIntVect {
    let mut c2 = SparseIntVect::new(10);
    c2.set(0, 2).unwrap();
    c2.set(2, -2).unwrap();
    c2.set(5, 6).unwrap();
    c2
}

fn pairs(v: &SparseIntVect) -> Vec<(usize, i64)> {
    v.iter().collect()
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_set_get_round_trip() {
        let mut v: SparseIntVect = SparseIntVect::new(10);
        for (index, value) in [(0, 7), (3, -2), (9, 1), (3, 0)] {
            v.set(index, value).unwrap();
            assert_eq!(v.get(index).unwrap(), value);
        }
        assert_eq!(pairs(&v), vec![(0, 7), (9, 1)]);
    }

    #[rstest]
    fn test_histogram_property() {
        let v: SparseIntVect = SparseIntVect::from_sequence(10, [0, 1, 1, 5]).unwrap();
        assert_eq!(pairs(&v), vec![(0, 1), (1, 2), (5, 1)]);
    }

    #[rstest]
    fn test_operators(c1: SparseIntVect, c2: SparseIntVect) {
        assert_eq!(pairs(&(&c1 & &c2).unwrap()), vec![(0, 2), (2, -2)]);
        assert_eq!(pairs(&(&c1 | &c2).unwrap()), vec![(0, 3), (2, 2), (4, 5), (5, 6)]);
        assert_eq!(pairs(&(&c1 + &c2).unwrap()), vec![(0, 5), (4, 5), (5, 6)]);
    }

    #[rstest]
    fn test_operator_errors(c1: SparseIntVect) {
        let short: SparseIntVect = SparseIntVect::new(5);
        let expected = SparseIntVectError::LengthMismatch { left: 10, right: 5 };
        assert_eq!((&c1 & &short).unwrap_err(), expected);
        assert_eq!((&c1 | &short).unwrap_err(), expected);
        assert_eq!((&c1 + &short).unwrap_err(), expected);
        assert_eq!((&c1 - &short).unwrap_err(), expected);
        assert_eq!((&c1 * &short).unwrap_err(), expected);
    }

    #[rstest]
    #[case(10)]
    #[case(-10)]
    fn test_out_of_range(c1: SparseIntVect, #[case] index: isize) {
        assert_eq!(
            c1.get(index).unwrap_err(),
            SparseIntVectError::OutOfRange { index, length: 10 }
        );
    }

    #[rstest]
    fn test_dice_scenario() {
        let v1: SparseIntVect = SparseIntVect::from_sequence(10, [1, 2, 3, 4]).unwrap();
        let v2: SparseIntVect = SparseIntVect::from_sequence(10, [1, 3, 5, 7]).unwrap();
        assert_eq!(dice_similarity(&v1, &v2, None).unwrap(), 0.5);
    }

    #[rstest]
    fn test_dice_reinitialized_vectors() {
        let mut v1: SparseIntVect = SparseIntVect::new(10);
        let mut v2: SparseIntVect = SparseIntVect::new(10);

        v1.init_from_sequence([1, 2, 3]).unwrap();
        v2.init_from_sequence([1, 2, 3]).unwrap();
        assert_eq!(dice_similarity(&v1, &v2, None).unwrap(), 1.0);

        v2.init_from_sequence([5, 6]).unwrap();
        assert_eq!(dice_similarity(&v1, &v2, None).unwrap(), 0.0);

        v1.init_from_sequence([1, 2, 3, 4, 5, 6]).unwrap();
        v2.init_from_sequence([1, 3]).unwrap();
        assert_eq!(dice_similarity(&v1, &v2, None).unwrap(), 0.5);
    }

    #[rstest]
    fn test_self_and_disjoint_similarity(c1: SparseIntVect) {
        assert_eq!(dice_similarity(&c1, &c1, None).unwrap(), 1.0);

        let other: SparseIntVect = SparseIntVect::from_pairs(10, [(1, 4), (9, 2)]).unwrap();
        assert!((&c1 & &other).unwrap().is_zero());
        assert_eq!(dice_similarity(&c1, &other, None).unwrap(), 0.0);
    }

    #[rstest]
    fn test_screening_collection(c1: SparseIntVect, c2: SparseIntVect) {
        let targets = vec![c2.clone(), c1.clone()];

        let scores = bulk_dice_similarity(&c1, &targets, None).unwrap();
        assert_eq!(scores[1], 1.0);

        let hits = dice_neighbors(&c1, &targets, 0.4).unwrap();
        assert_eq!(hits, vec![(1, 1.0)]);
    }

    #[rstest]
    fn test_element_type_is_generic() {
        let a: SparseIntVect<i32> = SparseIntVect::from_sequence(8, [1, 1, 2]).unwrap();
        let b: SparseIntVect<i32> = SparseIntVect::from_sequence(8, [1, 2, 2]).unwrap();
        assert_eq!(pairs_i32(&(&a & &b).unwrap()), vec![(1, 1), (2, 1)]);
        assert_eq!(dice_similarity(&a, &b, None).unwrap(), 4.0 / 6.0);
    }

    fn pairs_i32(v: &SparseIntVect<i32>) -> Vec<(usize, i32)> {
        v.iter().collect()
    }
}
