mod aggregator;
pub mod report;
mod store;
pub mod table;

pub use aggregator::aggregate_matchups;
pub use store::MatchupStore;
pub use table::{MatchupEntry, MatchupTable, format_tally, win_percentage};
