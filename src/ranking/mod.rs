mod activity;
pub mod leaderboard;
pub mod render;

pub use activity::ActivityFilter;
pub use leaderboard::{Leaderboard, LeaderboardRow, RankedPlayer, rank_active_players};
pub use render::{RankMovement, render_text};
