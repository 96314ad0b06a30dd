pub mod engine;
pub mod pairwise;
pub mod types;

pub use engine::RatingEngine;
pub use pairwise::PairwiseRater;
pub use types::{ReplayPhase, ReplaySummary};
