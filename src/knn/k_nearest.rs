use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, log_enabled, trace, warn, Level};
use rayon::prelude::*;

use super::config::KnnConfig;
use super::neighbors::{rank_neighbors, NeighborCandidate};
use super::vote::VoteTally;
use crate::classifier::Classifier;
use crate::dataset::{DatasetSplit, Evaluation};
use crate::error::{KnnError, Result};

/// A k-NN classifier that ranks every training vector by distance and resolves
/// the label by majority vote among the `k` closest.
///
/// The classifier holds no training data; each call borrows the training set
/// immutably, so one instance can serve any number of dataset splits.
///
/// # Example
///
/// ```
/// use sdr_knn::{Classifier, KNNClassifier};
///
/// let train = vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 3.0], vec![6.0, 7.0]];
/// let labels = vec!["A", "A", "B", "B"];
/// let test = vec![vec![2.1, 2.9]];
///
/// let knn = KNNClassifier::new();
/// let predicted = knn.classify(&test, &train, &labels, 3).unwrap();
/// assert_eq!(predicted, vec!["A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KNNClassifier {
    config: KnnConfig,
}

impl KNNClassifier {
    /// Euclidean metric, first-seen tie-break, sequential.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KnnConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// The `k` training vectors closest to `query`, nearest first.
    pub fn nearest_neighbors<V: AsRef<[f64]>>(
        &self,
        query: &[f64],
        train_features: &[V],
        k: usize,
    ) -> Result<Vec<NeighborCandidate>> {
        validate(std::iter::once(query), train_features, train_features.len(), k)?;
        let mut ranked = rank_neighbors(query, train_features, self.config.metric)?;
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Predict the label of a single query vector.
    pub fn predict<V, L>(
        &self,
        query: &[f64],
        train_features: &[V],
        train_labels: &[L],
        k: usize,
    ) -> Result<L>
    where
        V: AsRef<[f64]>,
        L: Eq + Hash + Clone + Debug,
    {
        validate(std::iter::once(query), train_features, train_labels.len(), k)?;
        let mut tally = VoteTally::new(train_labels);
        self.predict_with_tally(0, query, train_features, train_labels, k, &mut tally)
    }

    /// Classify the test half of `split` and, when it carries actual labels,
    /// score the predictions against them.
    pub fn evaluate<L>(&self, split: &DatasetSplit<L>, k: usize) -> Result<Evaluation<L>>
    where
        L: Eq + Hash + Clone + Debug + Send + Sync,
    {
        let predictions = self.classify(
            split.test_features(),
            split.train_features(),
            split.train_labels(),
            k,
        )?;
        let accuracy = match split.test_labels() {
            Some(actual) => Some(self.accuracy(&predictions, actual)?),
            None => None,
        };
        Ok(Evaluation {
            predictions,
            accuracy,
        })
    }

    /// Rank, vote and resolve for one query. Inputs are already validated.
    fn predict_with_tally<'a, V, L>(
        &self,
        position: usize,
        query: &[f64],
        train_features: &[V],
        train_labels: &'a [L],
        k: usize,
        tally: &mut VoteTally<'a, L>,
    ) -> Result<L>
    where
        V: AsRef<[f64]>,
        L: Eq + Hash + Clone + Debug,
    {
        let ranked = rank_neighbors(query, train_features, self.config.metric)?;
        let neighbors = &ranked[..k];

        if log_enabled!(Level::Debug) {
            for (rank, n) in neighbors.iter().enumerate() {
                debug!(
                    "test[{}] neighbor {}: index={} distance={:.6} label={:?}",
                    position, rank, n.index, n.distance, train_labels[n.index]
                );
            }
        }

        tally.reset();
        for n in neighbors {
            tally.vote(&train_labels[n.index]);
        }
        trace!(
            "test[{}] tally: {:?}",
            position,
            tally.iter().collect::<Vec<_>>()
        );

        let (label, votes) = tally
            .winner(self.config.tie_break, neighbors, train_labels)
            .ok_or(KnnError::EmptyInput("no training labels to vote with"))?;
        debug!(
            "test[{}] predicted {:?} with {}/{} votes",
            position, label, votes, k
        );
        Ok(label.clone())
    }
}

impl<L> Classifier<L> for KNNClassifier
where
    L: Eq + Hash + Clone + Debug + Send + Sync,
{
    fn classify<T, V>(
        &self,
        test_features: &[T],
        train_features: &[V],
        train_labels: &[L],
        k: usize,
    ) -> Result<Vec<L>>
    where
        T: AsRef<[f64]> + Sync,
        V: AsRef<[f64]> + Sync,
    {
        validate(
            test_features.iter().map(|v| v.as_ref()),
            train_features,
            train_labels.len(),
            k,
        )?;

        info!(
            "classifying {} test vectors against {} training vectors (k={}, metric={})",
            test_features.len(),
            train_features.len(),
            k,
            self.config.metric
        );

        let universe = VoteTally::new(train_labels);
        if universe.len() == 1 {
            warn!("training set has a single label; every prediction will be the same");
        }

        if self.config.parallel {
            test_features
                .par_iter()
                .enumerate()
                .map_init(
                    || universe.clone(),
                    |tally, (i, t)| {
                        self.predict_with_tally(i, t.as_ref(), train_features, train_labels, k, tally)
                    },
                )
                .collect()
        } else {
            let mut tally = universe;
            test_features
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    self.predict_with_tally(
                        i,
                        t.as_ref(),
                        train_features,
                        train_labels,
                        k,
                        &mut tally,
                    )
                })
                .collect()
        }
    }
}

/// Checks every precondition up front so classification never returns
/// partial results.
fn validate<'q, V: AsRef<[f64]>>(
    queries: impl IntoIterator<Item = &'q [f64]>,
    train_features: &[V],
    label_count: usize,
    k: usize,
) -> Result<()> {
    if train_features.len() != label_count {
        return Err(KnnError::CardinalityMismatch {
            what: "training features vs labels",
            left: train_features.len(),
            right: label_count,
        });
    }
    if k == 0 || k > train_features.len() {
        return Err(KnnError::InvalidK {
            k,
            training: train_features.len(),
        });
    }

    // k >= 1 guarantees a non-empty training set here.
    let dim = train_features[0].as_ref().len();
    let check = |features: &[f64]| -> Result<()> {
        if features.is_empty() {
            return Err(KnnError::InvalidArgument(
                "feature vector is empty".to_string(),
            ));
        }
        if features.len() != dim {
            return Err(KnnError::LengthMismatch {
                left: dim,
                right: features.len(),
            });
        }
        Ok(())
    };
    for features in train_features {
        check(features.as_ref())?;
    }
    for query in queries {
        check(query)?;
    }
    Ok(())
}
