pub mod config;
pub mod k_nearest;
pub mod neighbors;
pub mod vote;


// Re-export public types and functions
pub use config::{KnnConfig, TieBreak};
pub use k_nearest::KNNClassifier;
pub use neighbors::{rank_neighbors, NeighborCandidate};
pub use vote::VoteTally;
