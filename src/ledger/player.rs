use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillRating;

/// Wins and losses against one opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub loss: u32,
}

impl MatchTally {
    pub fn new(win: u32, loss: u32) -> Self {
        Self { win, loss }
    }

    pub fn total(&self) -> u32 {
        self.win + self.loss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
}

/// Everything tracked for one canonical name across the batch.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub rating: TrueSkillRating,
    /// Rating before the final tournament; `None` until the snapshot is taken.
    pub previous_rating: Option<TrueSkillRating>,
    pub last_played: NaiveDate,
    /// First seen in the final tournament of the batch.
    pub is_new: bool,
    /// Number of participant entries that resolved to this player.
    pub appearances: u32,
    pub record: BTreeMap<String, MatchTally>,
}

impl Player {
    pub fn new(name: impl Into<String>, prior: TrueSkillRating, first_seen: NaiveDate) -> Self {
        Self {
            name: name.into(),
            rating: prior,
            previous_rating: None,
            last_played: first_seen,
            is_new: false,
            appearances: 1,
            record: BTreeMap::new(),
        }
    }

    /// The rating to rank by for "last time" positions.
    pub fn old_rating(&self) -> TrueSkillRating {
        self.previous_rating.unwrap_or(self.rating)
    }

    pub fn mean(&self) -> f64 {
        self.rating.rating
    }

    pub fn mark_seen(&mut self, seen_on: NaiveDate) {
        self.appearances += 1;
        self.last_played = self.last_played.max(seen_on);
    }

    pub fn snapshot_rating(&mut self) {
        self.previous_rating = Some(self.rating);
    }

    /// Count one decided match from this player's side.
    pub fn add_match(&mut self, winner: &str, loser: &str) {
        let (result, other) = if self.name == winner {
            (MatchResult::Win, loser)
        } else {
            (MatchResult::Loss, winner)
        };

        let tally = self.record.entry(other.to_string()).or_default();
        match result {
            MatchResult::Win => tally.win += 1,
            MatchResult::Loss => tally.loss += 1,
        }
    }

    pub fn record_against(&self, opponent: &str) -> Option<&MatchTally> {
        self.record.get(opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str) -> Player {
        Player::new(
            name,
            TrueSkillRating::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_add_match_counts_from_both_sides() {
        let mut alice = player("Alice");
        let mut bob = player("Bob");

        alice.add_match("Alice", "Bob");
        bob.add_match("Alice", "Bob");

        assert_eq!(alice.record_against("Bob"), Some(&MatchTally::new(1, 0)));
        assert_eq!(bob.record_against("Alice"), Some(&MatchTally::new(0, 1)));
    }

    #[test]
    fn test_rematches_accumulate() {
        let mut alice = player("Alice");
        alice.add_match("Alice", "Bob");
        alice.add_match("Bob", "Alice");
        alice.add_match("Alice", "Bob");

        assert_eq!(alice.record_against("Bob"), Some(&MatchTally::new(2, 1)));
        assert_eq!(alice.record.len(), 1);
    }

    #[test]
    fn test_last_played_never_moves_back() {
        let mut alice = player("Alice");
        alice.mark_seen(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        alice.mark_seen(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        assert_eq!(alice.last_played, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(alice.appearances, 3);
    }

    #[test]
    fn test_old_rating_falls_back_to_current() {
        let mut alice = player("Alice");
        assert_eq!(alice.old_rating(), alice.rating);

        alice.snapshot_rating();
        alice.rating.rating = 30.0;
        assert_eq!(alice.old_rating().rating, 25.0);
    }
}
