use crate::distance::Metric;

/// How a vote between equally-tallied labels is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The label that appears first in the training labels wins.
    ///
    /// Deterministic, but carries no meaning about the query: it depends only
    /// on the order of the training set.
    #[default]
    FirstSeenInTraining,
    /// The label carried by the closest of the tied neighbors wins.
    NearestNeighbor,
}

/// Configuration options for [`crate::KNNClassifier`].
#[derive(Debug, Clone, Default)]
pub struct KnnConfig {
    /// Metric used to rank training vectors. Euclidean unless overridden.
    pub metric: Metric,
    /// Rule applied when several labels share the highest vote count.
    pub tie_break: TieBreak,
    /// Classify test vectors on the rayon thread pool.
    pub parallel: bool,
}

impl KnnConfig {
    /// Create a config with the Euclidean metric, first-seen tie-break and
    /// sequential classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Customize the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Customize the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Enable or disable parallel classification across test vectors.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
