//! Element-wise sums of two numeric sequences.
//!
//! Three variants share the arithmetic and differ only in how they treat
//! sequences of different lengths:
//!
//! - [`sum_unchecked`] trusts the caller and indexes the right sequence blindly;
//! - [`sum_checked`] reports a mismatch through its return value;
//! - [`sum_strict`] fails with [`ListError::LengthMismatch`].

use crate::domain::model::{SumOutcome, SumPolicy};
use crate::utils::error::{ListError, Result};
use std::ops::Add;

/// Sums `a[i] + b[i]` for every index of `a`.
///
/// Extra elements in `b` are ignored.
///
/// # Panics
///
/// Panics with an out-of-range index when `b` is shorter than `a`.
pub fn sum_unchecked<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Add<Output = T>,
{
    a.iter().enumerate().map(|(i, &x)| x + b[i]).collect()
}

/// Sums two sequences, returning the [`SumOutcome::LengthMismatch`] sentinel
/// instead of failing when their lengths differ.
pub fn sum_checked<T>(a: &[T], b: &[T]) -> SumOutcome<T>
where
    T: Copy + Add<Output = T>,
{
    if a.len() != b.len() {
        tracing::debug!(left = a.len(), right = b.len(), "length mismatch, returning sentinel");
        return SumOutcome::LengthMismatch {
            left: a.len(),
            right: b.len(),
        };
    }
    SumOutcome::Sum(add_pairs(a, b))
}

/// Sums two sequences of equal length.
pub fn sum_strict<T>(a: &[T], b: &[T]) -> Result<Vec<T>>
where
    T: Copy + Add<Output = T>,
{
    if a.len() != b.len() {
        return Err(ListError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(add_pairs(a, b))
}

/// Largest element of the strict element-wise sum.
pub fn max_of_sum<T>(a: &[T], b: &[T]) -> Result<T>
where
    T: Copy + Add<Output = T> + PartialOrd,
{
    let sums = sum_strict(a, b)?;
    maximum(&sums).ok_or_else(|| ListError::EmptyInput {
        operation: "max_of_sum".to_string(),
    })
}

/// Runs the variant selected by `policy` behind a single fallible signature.
///
/// A short right-hand sequence under [`SumPolicy::Unchecked`] is refused with
/// `LengthMismatch` here rather than reaching the panicking index.
pub fn sum_with_policy<T>(policy: SumPolicy, a: &[T], b: &[T]) -> Result<Vec<T>>
where
    T: Copy + Add<Output = T>,
{
    tracing::debug!(policy = policy.as_str(), left = a.len(), right = b.len(), "summing");
    match policy {
        SumPolicy::Unchecked => {
            if b.len() < a.len() {
                return Err(ListError::LengthMismatch {
                    left: a.len(),
                    right: b.len(),
                });
            }
            if b.len() > a.len() {
                tracing::warn!(
                    "ignoring {} trailing element(s) of the right sequence",
                    b.len() - a.len()
                );
            }
            Ok(sum_unchecked(a, b))
        }
        SumPolicy::Checked => sum_checked(a, b).into_result(),
        SumPolicy::Strict => sum_strict(a, b),
    }
}

fn add_pairs<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Add<Output = T>,
{
    a.iter().zip(b).map(|(&x, &y)| x + y).collect()
}

// First element wins ties; a later value replaces it only when strictly greater.
fn maximum<T>(values: &[T]) -> Option<T>
where
    T: Copy + PartialOrd,
{
    values
        .iter()
        .copied()
        .reduce(|best, x| if x > best { x } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Number;

    fn pairs() -> Vec<(Vec<i64>, Vec<i64>)> {
        vec![
            (vec![], vec![]),
            (vec![1], vec![-1]),
            (vec![1, 2, 3], vec![4, 5, 6]),
            (vec![-10, 0, 10, 20], vec![3, 3, 3, 3]),
            (vec![i64::MIN, 0], vec![0, i64::MAX]),
        ]
    }

    #[test]
    fn test_strict_sum_is_element_wise() {
        for (a, b) in pairs() {
            let sums = sum_strict(&a, &b).unwrap();
            assert_eq!(sums.len(), a.len());
            for i in 0..a.len() {
                assert_eq!(sums[i], a[i] + b[i]);
            }
        }
    }

    #[test]
    fn test_all_variants_agree_on_equal_lengths() {
        for (a, b) in pairs() {
            let strict = sum_strict(&a, &b).unwrap();
            assert_eq!(sum_unchecked(&a, &b), strict);
            assert_eq!(sum_checked(&a, &b), SumOutcome::Sum(strict));
        }
    }

    #[test]
    fn test_mismatch_reporting() {
        let cases: Vec<(Vec<i64>, Vec<i64>)> = vec![
            (vec![1, 2], vec![1, 2, 3]),
            (vec![1], vec![]),
            (vec![], vec![9]),
        ];
        for (a, b) in cases {
            assert_eq!(
                sum_checked(&a, &b),
                SumOutcome::LengthMismatch {
                    left: a.len(),
                    right: b.len()
                }
            );
            assert!(matches!(
                sum_strict(&a, &b),
                Err(ListError::LengthMismatch { left, right }) if left == a.len() && right == b.len()
            ));
        }
    }

    #[test]
    fn test_checked_empty_is_not_sentinel() {
        let empty: [i64; 0] = [];
        assert_eq!(sum_checked(&empty, &empty), SumOutcome::Sum(vec![]));
    }

    #[test]
    fn test_unchecked_ignores_longer_right() {
        assert_eq!(sum_unchecked(&[1, 2], &[1, 2, 3]), vec![2, 4]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_unchecked_panics_on_shorter_right() {
        let _ = sum_unchecked(&[1, 2, 3], &[1, 2]);
    }

    #[test]
    fn test_max_of_sum() {
        assert_eq!(max_of_sum(&[1, 2, 3], &[4, 5, 6]).unwrap(), 9);
        assert_eq!(max_of_sum(&[-5, -1], &[-5, -1]).unwrap(), -2);
    }

    #[test]
    fn test_max_of_sum_errors() {
        let empty: [i64; 0] = [];
        assert!(matches!(
            max_of_sum(&empty, &empty),
            Err(ListError::EmptyInput { .. })
        ));
        assert!(matches!(
            max_of_sum(&[1, 2], &[1, 2, 3]),
            Err(ListError::LengthMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_max_keeps_first_when_incomparable() {
        assert_eq!(maximum(&[1.0, f64::NAN, 0.5]), Some(1.0));
        assert!(maximum(&[f64::NAN, 2.0]).unwrap().is_nan());
        assert_eq!(maximum::<f64>(&[]), None);
    }

    #[test]
    fn test_mixed_numbers() {
        let a = [Number::Int(1), Number::Float(0.5)];
        let b = [Number::Int(2), Number::Int(2)];
        let sums = sum_strict(&a, &b).unwrap();
        assert_eq!(sums, vec![Number::Int(3), Number::Float(2.5)]);
        assert_eq!(max_of_sum(&a, &b).unwrap(), Number::Int(3));
    }

    #[test]
    fn test_sum_with_policy() {
        let a = [1, 2];
        let b = [10, 20, 30];
        assert_eq!(sum_with_policy(SumPolicy::Unchecked, &a, &b).unwrap(), vec![11, 22]);
        assert!(sum_with_policy(SumPolicy::Unchecked, &b, &a).is_err());
        assert!(sum_with_policy(SumPolicy::Checked, &a, &b).is_err());
        assert!(sum_with_policy(SumPolicy::Strict, &a, &b).is_err());
        assert_eq!(sum_with_policy(SumPolicy::Strict, &a, &a).unwrap(), vec![2, 4]);
    }
}
