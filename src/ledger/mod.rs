mod registry;
mod player;

pub use registry::{PlayerLedger, TagMap};
pub use player::{MatchResult, MatchTally, Player};
