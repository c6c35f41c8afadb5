use log::info;

use crate::error::{KnnError, Result};

/// A batch classifier over real-valued feature vectors.
///
/// Orchestration code is written against this trait, so a classifier with a
/// different metric or voting scheme can be swapped in without touching it.
pub trait Classifier<L: PartialEq> {
    /// Predict one label per test vector, in the order of `test_features`.
    ///
    /// Test and training rows may use different containers, e.g. borrowed
    /// `&[f64]` rows against owned `Vec<f64>` training rows.
    fn classify<T, V>(
        &self,
        test_features: &[T],
        train_features: &[V],
        train_labels: &[L],
        k: usize,
    ) -> Result<Vec<L>>
    where
        T: AsRef<[f64]> + Sync,
        V: AsRef<[f64]> + Sync;

    /// Percentage of positions where `predicted` equals `actual`.
    fn accuracy(&self, predicted: &[L], actual: &[L]) -> Result<f64> {
        accuracy(predicted, actual)
    }
}

/// Returns `correct / total * 100`.
///
/// # Errors
///
/// - [`KnnError::CardinalityMismatch`] if the sequences differ in length.
/// - [`KnnError::EmptyInput`] if both are empty.
///
/// # Example
///
/// ```
/// use sdr_knn::accuracy;
///
/// let pct = accuracy(&["a", "b", "b", "a"], &["a", "b", "a", "a"]).unwrap();
/// assert_eq!(pct, 75.0);
/// ```
pub fn accuracy<L: PartialEq>(predicted: &[L], actual: &[L]) -> Result<f64> {
    if predicted.len() != actual.len() {
        return Err(KnnError::CardinalityMismatch {
            what: "predicted vs actual labels",
            left: predicted.len(),
            right: actual.len(),
        });
    }
    if predicted.is_empty() {
        return Err(KnnError::EmptyInput("accuracy over zero predictions"));
    }

    let correct = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    let pct = correct as f64 / predicted.len() as f64 * 100.0;
    info!(
        "accuracy: {}/{} correct ({:.2}%)",
        correct,
        predicted.len(),
        pct
    );
    Ok(pct)
}
