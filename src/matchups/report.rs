use super::table::{MatchupEntry, MatchupTable, format_tally};

/// Alphabetical list of every player with a matchup record.
pub fn render_index(table: &MatchupTable) -> String {
    let mut out = String::from("Players\n");
    for name in table.names() {
        out.push_str(&format!("  {}\n", name));
    }
    out
}

/// `Name (xx.xx%)` followed by one `Opponent: W - L` line per opponent.
pub fn render_player(name: &str, entry: &MatchupEntry) -> String {
    let mut out = format!("{} ({:.2}%)\n", name, entry.win_pct);
    for (opponent, tally) in &entry.opponents {
        out.push_str(&format!("  {}: {}\n", opponent, format_tally(tally)));
    }
    out
}
