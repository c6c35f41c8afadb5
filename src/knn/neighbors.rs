use std::cmp::Ordering;

use crate::distance::Metric;
use crate::error::Result;

/// A training index paired with its distance to one query vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborCandidate {
    pub index: usize,
    pub distance: f64,
}

impl NeighborCandidate {
    /// Total order: ascending distance, then ascending training index.
    ///
    /// NaN distances of either sign rank after every other distance,
    /// including `+inf`, and among themselves by index.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        let (a_nan, b_nan) = (self.distance.is_nan(), other.distance.is_nan());
        a_nan
            .cmp(&b_nan)
            .then_with(|| {
                if a_nan {
                    Ordering::Equal
                } else {
                    self.distance.total_cmp(&other.distance)
                }
            })
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Computes the distance from `query` to every training vector and returns
/// the candidates sorted nearest first.
pub fn rank_neighbors<V: AsRef<[f64]>>(
    query: &[f64],
    train: &[V],
    metric: Metric,
) -> Result<Vec<NeighborCandidate>> {
    let mut candidates = train
        .iter()
        .enumerate()
        .map(|(index, features)| {
            metric
                .distance(query, features.as_ref())
                .map(|distance| NeighborCandidate { index, distance })
        })
        .collect::<Result<Vec<_>>>()?;

    candidates.sort_by(NeighborCandidate::rank_cmp);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnnError;

    #[test]
    fn test_sorted_by_distance() {
        let train = vec![vec![5.0, 5.0], vec![1.0, 1.0], vec![0.0, 0.0]];
        let ranked = rank_neighbors(&[0.0, 0.0], &train, Metric::Euclidean).unwrap();
        let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(ranked[0].distance, 0.0);
    }

    #[test]
    fn test_ties_keep_training_order() {
        // Indices 0, 2 and 3 are all at distance 1 from the origin.
        let train = vec![[1.0, 0.0], [3.0, 0.0], [0.0, 1.0], [-1.0, 0.0]];
        let ranked = rank_neighbors(&[0.0, 0.0], &train, Metric::Euclidean).unwrap();
        let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_metric_changes_ranking() {
        // Euclidean: [2,2] (2.83) is closer than [3,0] (3.0).
        // Manhattan: [3,0] (3.0) is closer than [2,2] (4.0).
        let train = vec![vec![2.0, 2.0], vec![3.0, 0.0]];
        let euclid = rank_neighbors(&[0.0, 0.0], &train, Metric::Euclidean).unwrap();
        let manhat = rank_neighbors(&[0.0, 0.0], &train, Metric::Manhattan).unwrap();
        assert_eq!(euclid[0].index, 0);
        assert_eq!(manhat[0].index, 1);
    }

    #[test]
    fn test_dimension_mismatch_propagates() {
        let train = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        let err = rank_neighbors(&[0.0, 0.0], &train, Metric::Euclidean).unwrap_err();
        assert_eq!(err, KnnError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_nan_sorts_last() {
        let neg_nan = NeighborCandidate {
            index: 0,
            distance: -f64::NAN,
        };
        let pos_nan = NeighborCandidate {
            index: 1,
            distance: f64::NAN,
        };
        let neg_inf = NeighborCandidate {
            index: 2,
            distance: f64::NEG_INFINITY,
        };
        let pos_inf = NeighborCandidate {
            index: 3,
            distance: f64::INFINITY,
        };
        assert_eq!(neg_nan.rank_cmp(&neg_inf), Ordering::Greater);
        assert_eq!(neg_nan.rank_cmp(&pos_inf), Ordering::Greater);
        assert_eq!(pos_nan.rank_cmp(&pos_inf), Ordering::Greater);
        assert_eq!(neg_nan.rank_cmp(&pos_nan), Ordering::Less);
        assert_eq!(pos_nan.rank_cmp(&neg_nan), Ordering::Greater);
    }

    #[test]
    fn test_computed_nan_is_not_nearest() {
        // inf - inf yields NaN; its sign depends on the platform.
        let train = vec![[0.0], [f64::INFINITY]];
        let ranked = rank_neighbors(&[f64::INFINITY], &train, Metric::Euclidean).unwrap();
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[0].distance, f64::INFINITY);
        assert_eq!(ranked[1].index, 1);
        assert!(ranked[1].distance.is_nan());
    }
}
