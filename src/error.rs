use thiserror::Error;

/// Errors raised by the distance functions, the classifier and the dataset layer.
///
/// Every variant is detected before any per-vector work starts, so a failed call
/// never leaves partial predictions behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnnError {
    /// A feature vector is missing (empty) or a parameter is out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two vectors being compared have different dimensionality.
    #[error("length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// `k` is outside `[1, training]`.
    #[error("invalid k = {k}: must be in [1, {training}]")]
    InvalidK { k: usize, training: usize },

    /// Two sequences that must be parallel have different lengths.
    #[error("{what}: {left} vs {right}")]
    CardinalityMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// An aggregate was requested over zero elements.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A collaborator operation has no concrete implementation behind it.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, KnnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KnnError::LengthMismatch { left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "length mismatch: left has 2 elements, right has 3"
        );

        let err = KnnError::InvalidK { k: 0, training: 4 };
        assert_eq!(err.to_string(), "invalid k = 0: must be in [1, 4]");

        let err = KnnError::CardinalityMismatch {
            what: "training features vs labels",
            left: 3,
            right: 2,
        };
        assert_eq!(err.to_string(), "training features vs labels: 3 vs 2");

        let err = KnnError::NotImplemented("dataset loading");
        assert_eq!(err.to_string(), "not implemented: dataset loading");
    }
}
