use colored::{ColoredString, Colorize};

use super::leaderboard::{Leaderboard, LeaderboardRow};
use crate::domain::format_date;

/// How far a player moved since the previous ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMovement {
    Up(u64),
    Down(u64),
    Same,
    New,
}

impl RankMovement {
    pub fn of(row: &LeaderboardRow) -> Self {
        match row.rank_delta {
            None => RankMovement::New,
            Some(0) => RankMovement::Same,
            Some(d) if d > 0 => RankMovement::Up(d.unsigned_abs()),
            Some(d) => RankMovement::Down(d.unsigned_abs()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RankMovement::Up(n) => format!("▲{}", n),
            RankMovement::Down(n) => format!("▼{}", n),
            RankMovement::Same => "=".to_string(),
            RankMovement::New => "new".to_string(),
        }
    }

    fn paint(&self) -> ColoredString {
        let label = self.label();
        let label = label.as_str();
        match self {
            RankMovement::Up(_) => label.green(),
            RankMovement::Down(_) => label.red(),
            RankMovement::Same => label.dimmed(),
            RankMovement::New => label.cyan(),
        }
    }
}

/// `{rank}. {name} ({mean:.2})` per line, then the last-updated footer.
pub fn render_text(board: &Leaderboard<'_>) -> String {
    let mut out = String::new();

    for row in board.rows() {
        out.push_str(&format!(
            "{}. {} ({:.2}) {}\n",
            row.rank,
            row.name,
            row.rating_mean,
            RankMovement::of(&row).paint()
        ));
    }

    if let Some(date) = board.last_updated {
        out.push_str(&format!("\nLast updated: {}\n", format_date(date)));
    }

    out
}
