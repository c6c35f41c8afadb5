//! K-nearest-neighbors classification of feature vectors derived from sparse
//! distributed representations.
//!
//! [`distance`] holds the metrics, [`KNNClassifier`] ranks training vectors and
//! votes, and [`accuracy`] scores a batch of predictions.
pub mod classifier;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod knn;

pub use classifier::{accuracy, Classifier};
pub use dataset::{DatasetLoader, DatasetSplit, Evaluation, InMemoryLoader, UnimplementedLoader};
pub use distance::Metric;
pub use error::{KnnError, Result};
pub use knn::*;
