pub mod lookup;
pub mod processing;

pub use lookup::LookupService;
pub use processing::{ProcessingService, RankingRun, replay_batch};
