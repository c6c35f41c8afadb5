//! In-memory dataset splits and the loader seam used by experiment code.
//!
//! Reading datasets from storage lives outside this crate. [`DatasetLoader`] is
//! the seam a storage backend implements; [`UnimplementedLoader`] stands in
//! until one exists and fails loudly instead of returning empty data.
use std::collections::HashMap;

use log::warn;

use crate::error::{KnnError, Result};

/// Training and testing halves of a dataset with their labels.
///
/// Features and labels are paired by position. The pairing is checked once at
/// construction and the split is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit<L> {
    train_features: Vec<Vec<f64>>,
    train_labels: Vec<L>,
    test_features: Vec<Vec<f64>>,
    test_labels: Option<Vec<L>>,
}

impl<L> DatasetSplit<L> {
    /// Builds a split, rejecting unpaired features and labels.
    ///
    /// `test_labels` is `None` when the ground truth is unknown.
    pub fn new(
        train_features: Vec<Vec<f64>>,
        train_labels: Vec<L>,
        test_features: Vec<Vec<f64>>,
        test_labels: Option<Vec<L>>,
    ) -> Result<Self> {
        if train_features.len() != train_labels.len() {
            return Err(KnnError::CardinalityMismatch {
                what: "training features vs labels",
                left: train_features.len(),
                right: train_labels.len(),
            });
        }
        if let Some(actual) = &test_labels {
            if test_features.len() != actual.len() {
                return Err(KnnError::CardinalityMismatch {
                    what: "testing features vs labels",
                    left: test_features.len(),
                    right: actual.len(),
                });
            }
        }
        Ok(Self {
            train_features,
            train_labels,
            test_features,
            test_labels,
        })
    }

    pub fn train_features(&self) -> &[Vec<f64>] {
        &self.train_features
    }

    pub fn train_labels(&self) -> &[L] {
        &self.train_labels
    }

    pub fn test_features(&self) -> &[Vec<f64>] {
        &self.test_features
    }

    pub fn test_labels(&self) -> Option<&[L]> {
        self.test_labels.as_deref()
    }

    pub fn train_len(&self) -> usize {
        self.train_features.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_features.len()
    }
}

/// Output of [`crate::KNNClassifier::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<L> {
    /// One predicted label per test vector, in test order.
    pub predictions: Vec<L>,
    /// Accuracy percentage, present when the split carried actual labels.
    pub accuracy: Option<f64>,
}

/// Source of named dataset splits.
pub trait DatasetLoader<L> {
    fn load(&self, name: &str) -> Result<DatasetSplit<L>>;
}

/// Loader with no backing storage. Every call fails with
/// [`KnnError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedLoader;

impl<L> DatasetLoader<L> for UnimplementedLoader {
    fn load(&self, name: &str) -> Result<DatasetSplit<L>> {
        warn!("no dataset backend configured; cannot load '{}'", name);
        Err(KnnError::NotImplemented("dataset loading"))
    }
}

/// Loader serving splits registered in memory, mostly for tests and demos.
#[derive(Debug, Clone)]
pub struct InMemoryLoader<L> {
    splits: HashMap<String, DatasetSplit<L>>,
}

impl<L> Default for InMemoryLoader<L> {
    fn default() -> Self {
        Self {
            splits: HashMap::new(),
        }
    }
}

impl<L> InMemoryLoader<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `split` under `name`, replacing any previous split.
    pub fn with_split(mut self, name: impl Into<String>, split: DatasetSplit<L>) -> Self {
        self.splits.insert(name.into(), split);
        self
    }
}

impl<L: Clone> DatasetLoader<L> for InMemoryLoader<L> {
    fn load(&self, name: &str) -> Result<DatasetSplit<L>> {
        self.splits
            .get(name)
            .cloned()
            .ok_or_else(|| KnnError::InvalidArgument(format!("unknown dataset '{}'", name)))
    }
}
