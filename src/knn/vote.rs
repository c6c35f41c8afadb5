use std::collections::HashMap;
use std::hash::Hash;

use super::config::TieBreak;
use super::neighbors::NeighborCandidate;

/// Vote counts over every distinct training label.
///
/// Labels are registered in order of first appearance in the training labels
/// and start at zero votes, so the tally covers the whole label universe and not
/// just the labels present among one query's neighbors. The registration order
/// is what [`TieBreak::FirstSeenInTraining`] resolves ties with.
#[derive(Debug, Clone)]
pub struct VoteTally<'a, L> {
    labels: Vec<&'a L>,
    slots: HashMap<&'a L, usize>,
    counts: Vec<usize>,
}

impl<'a, L: Eq + Hash> VoteTally<'a, L> {
    /// Registers every distinct label of `train_labels` with zero votes.
    pub fn new(train_labels: &'a [L]) -> Self {
        let mut labels = Vec::new();
        let mut slots = HashMap::new();
        for label in train_labels {
            slots.entry(label).or_insert_with(|| {
                labels.push(label);
                labels.len() - 1
            });
        }
        let counts = vec![0; labels.len()];
        Self {
            labels,
            slots,
            counts,
        }
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Zero every count, keeping the registered labels.
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    /// Add one vote for `label`. Returns `false` if the label was never
    /// registered.
    pub fn vote(&mut self, label: &L) -> bool {
        match self.slots.get(label) {
            Some(&slot) => {
                self.counts[slot] += 1;
                true
            }
            None => false,
        }
    }

    /// Current vote count for `label`, `None` if it is not registered.
    pub fn count(&self, label: &L) -> Option<usize> {
        self.slots.get(label).map(|&slot| self.counts[slot])
    }

    /// `(label, votes)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a L, usize)> + '_ {
        self.labels.iter().copied().zip(self.counts.iter().copied())
    }

    /// The label with the highest count, or `None` if no labels are registered.
    ///
    /// `neighbors` are the ranked neighbors that cast the votes; they are only
    /// consulted by [`TieBreak::NearestNeighbor`], and neighbors whose index is
    /// outside `train_labels` are skipped. `train_labels` should be the slice
    /// the tally was built from.
    pub fn winner(
        &self,
        tie_break: TieBreak,
        neighbors: &[NeighborCandidate],
        train_labels: &'a [L],
    ) -> Option<(&'a L, usize)> {
        // Strictly-greater scan: the earliest registered label keeps a tie.
        let mut best: Option<(&'a L, usize)> = None;
        for (label, votes) in self.iter() {
            if best.map_or(true, |(_, top)| votes > top) {
                best = Some((label, votes));
            }
        }

        match tie_break {
            TieBreak::FirstSeenInTraining => best,
            TieBreak::NearestNeighbor => {
                let (_, top) = best?;
                neighbors
                    .iter()
                    .filter_map(|n| train_labels.get(n.index))
                    .find(|label| self.count(label) == Some(top))
                    .map(|label| (label, top))
                    .or(best)
            }
        }
    }
}
