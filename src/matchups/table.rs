use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RankingError;
use crate::identity::capitalize_first;
use crate::ledger::MatchTally;

/// One player's record against active opponents.
///
/// Serialised flat: opponent names map to tallies, next to `win_pct`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    #[serde(flatten)]
    pub opponents: BTreeMap<String, MatchTally>,
    pub win_pct: f64,
}

impl MatchupEntry {
    pub fn new(opponents: BTreeMap<String, MatchTally>) -> Self {
        let win_pct = win_percentage(&opponents);
        Self { opponents, win_pct }
    }

    pub fn wins(&self) -> u32 {
        self.opponents.values().map(|t| t.win).sum()
    }

    pub fn losses(&self) -> u32 {
        self.opponents.values().map(|t| t.loss).sum()
    }
}

/// Percentage of matches won; 0.0 when there are none.
pub fn win_percentage(opponents: &BTreeMap<String, MatchTally>) -> f64 {
    let wins: u32 = opponents.values().map(|t| t.win).sum();
    let total: u32 = opponents.values().map(MatchTally::total).sum();

    if total == 0 {
        return 0.0;
    }
    f64::from(wins) / f64::from(total) * 100.0
}

/// `"W - L"` as shown next to each opponent.
pub fn format_tally(tally: &MatchTally) -> String {
    format!("{} - {}", tally.win, tally.loss)
}

/// Matchup entries for every active player, keyed by canonical name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchupTable {
    entries: BTreeMap<String, MatchupEntry>,
}

impl MatchupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: MatchupEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&MatchupEntry> {
        self.entries.get(name)
    }

    /// Find a player by a loosely typed name.
    pub fn lookup(&self, raw_name: &str) -> Result<(&str, &MatchupEntry), RankingError> {
        let key = lookup_key(raw_name);
        self.entries
            .get_key_value(&key)
            .map(|(name, entry)| (name.as_str(), entry))
            .ok_or(RankingError::PlayerNotFound { name: key })
    }

    /// Player names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchupEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn lookup_key(raw_name: &str) -> String {
    capitalize_first(&raw_name.trim().to_lowercase())
}
