//! Distance functions between two equal-length real vectors.
//!
//! All functions are generic over [`Float`] so they work on `f32` and `f64`
//! feature vectors alike. An empty vector stands in for an absent one and is
//! rejected with [`KnnError::InvalidArgument`]; vectors of different lengths are
//! rejected with [`KnnError::LengthMismatch`] rather than truncated.
use std::fmt;

use num_traits::{Float, NumCast};

use crate::error::{KnnError, Result};

/// Distance metric selectable through [`crate::KnnConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    /// Minkowski distance of order `p` (must be positive).
    Minkowski(u32),
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    pub fn distance<F: Float>(&self, a: &[F], b: &[F]) -> Result<F> {
        match *self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
            Metric::Minkowski(p) => minkowski(a, b, p),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Manhattan => write!(f, "manhattan"),
            Metric::Minkowski(p) => write!(f, "minkowski(p={})", p),
        }
    }
}

/// Returns `sqrt(sum((a_i - b_i)^2))`.
///
/// # Example
///
/// ```
/// use sdr_knn::distance::euclidean;
///
/// let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 5.0);
/// ```
pub fn euclidean<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    check_pair(a, b)?;
    let sum = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - y) * (x - y))
        .fold(F::zero(), |acc, v| acc + v);
    Ok(sum.sqrt())
}

/// Returns `sum(|a_i - b_i|)`.
pub fn manhattan<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    check_pair(a, b)?;
    Ok(a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).abs())
        .fold(F::zero(), |acc, v| acc + v))
}

/// Returns `(sum(|a_i - b_i|^p))^(1/p)`.
///
/// `p = 1` and `p = 2` give the Manhattan and Euclidean distances; prefer
/// [`manhattan`] and [`euclidean`] for those.
///
/// # Errors
///
/// - [`KnnError::InvalidArgument`] if `p == 0` or either vector is empty.
/// - [`KnnError::LengthMismatch`] if the vectors differ in length.
pub fn minkowski<F: Float>(a: &[F], b: &[F], p: u32) -> Result<F> {
    if p == 0 {
        return Err(KnnError::InvalidArgument(
            "minkowski order p must be positive".to_string(),
        ));
    }
    check_pair(a, b)?;

    let exponent = i32::try_from(p).map_err(|_| {
        KnnError::InvalidArgument(format!("minkowski order p = {} is too large", p))
    })?;
    let order: F = <F as NumCast>::from(p).ok_or_else(|| {
        KnnError::InvalidArgument(format!("minkowski order p = {} is not representable", p))
    })?;

    // Scale by the largest difference so |d|^p neither overflows nor
    // underflows for large p: m * (sum((|d_i| / m)^p))^(1/p).
    let diffs = a.iter().zip(b).map(|(&x, &y)| (x - y).abs());
    let largest = diffs
        .clone()
        .fold(F::zero(), |acc, d| if d > acc || d.is_nan() { d } else { acc });
    if largest.is_nan() || largest.is_infinite() || largest.is_zero() {
        return Ok(largest);
    }

    let sum = diffs
        .map(|d| (d / largest).powi(exponent))
        .fold(F::zero(), |acc, v| acc + v);
    Ok(largest * sum.powf(order.recip()))
}

fn check_pair<F>(a: &[F], b: &[F]) -> Result<()> {
    if a.is_empty() || b.is_empty() {
        return Err(KnnError::InvalidArgument(
            "feature vector is empty".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(KnnError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
