use std::collections::BTreeMap;

use log::debug;

use super::table::{MatchupEntry, MatchupTable};
use crate::ranking::Leaderboard;

/// Build matchup records for every listed player, counting only opponents
/// that are listed too. Ledger records are left untouched.
pub fn aggregate_matchups(board: &Leaderboard<'_>) -> MatchupTable {
    let active = board.active_names();
    let mut table = MatchupTable::new();

    for entry in &board.entries {
        let opponents: BTreeMap<_, _> = entry
            .player
            .record
            .iter()
            .filter(|(opponent, _)| active.contains(opponent.as_str()))
            .map(|(opponent, tally)| (opponent.clone(), *tally))
            .collect();

        let dropped = entry.player.record.len() - opponents.len();
        if dropped > 0 {
            debug!("{}: dropped {} inactive opponents", entry.name(), dropped);
        }

        table.insert(entry.name(), MatchupEntry::new(opponents));
    }

    table
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use skillratings::trueskill::TrueSkillRating;

    use super::*;
    use crate::config::AliasTable;
    use crate::domain::ParticipantRecord;
    use crate::identity::NameNormalizer;
    use crate::ledger::{MatchTally, PlayerLedger};
    use crate::ranking::ActivityFilter;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn play(ledger: &mut PlayerLedger, winner: &str, loser: &str) {
        for name in [winner, loser] {
            ledger.get_mut(name).unwrap().add_match(winner, loser);
        }
    }

    fn ledger() -> PlayerLedger {
        let normalizer = NameNormalizer::new(AliasTable::new()).unwrap();
        let mut ledger = PlayerLedger::new(normalizer, TrueSkillRating::new());

        ledger.get_or_create(&ParticipantRecord::new(1, "Alice", today()));
        ledger.get_or_create(&ParticipantRecord::new(2, "Bob", today()));
        ledger.get_or_create(&ParticipantRecord::new(3, "Gone", today() - Duration::weeks(10)));

        play(&mut ledger, "Alice", "Bob");
        play(&mut ledger, "Alice", "Bob");
        play(&mut ledger, "Bob", "Alice");
        play(&mut ledger, "Alice", "Gone");
        play(&mut ledger, "Gone", "Bob");
        ledger
    }

    #[test]
    fn test_inactive_opponents_are_filtered() {
        let ledger = ledger();
        let filter = ActivityFilter::new(today(), Duration::weeks(4));
        let board = Leaderboard::build(&ledger, &filter, None);

        let table = aggregate_matchups(&board);

        assert_eq!(table.len(), 2);
        assert!(table.get("Gone").is_none());

        let alice = table.get("Alice").unwrap();
        assert_eq!(alice.opponents.len(), 1);
        assert_eq!(alice.opponents["Bob"], MatchTally::new(2, 1));
        assert!((alice.win_pct - 200.0 / 3.0).abs() < 1e-9);

        let bob = table.get("Bob").unwrap();
        assert_eq!(bob.opponents["Alice"], MatchTally::new(1, 2));
    }

    #[test]
    fn test_aggregation_leaves_ledger_intact() {
        let ledger = ledger();
        let filter = ActivityFilter::new(today(), Duration::weeks(4));
        let board = Leaderboard::build(&ledger, &filter, None);

        let first = aggregate_matchups(&board);
        let second = aggregate_matchups(&board);

        assert_eq!(first, second);
        assert_eq!(ledger.get("Alice").unwrap().record.len(), 2);
    }

    #[test]
    fn test_records_are_symmetric() {
        let ledger = ledger();
        let filter = ActivityFilter::new(today(), Duration::weeks(4));
        let board = Leaderboard::build(&ledger, &filter, None);
        let table = aggregate_matchups(&board);

        for (name, entry) in table.iter() {
            for (opponent, tally) in &entry.opponents {
                let mirror = table.get(opponent).unwrap().opponents[name];
                assert_eq!(mirror, MatchTally::new(tally.loss, tally.win));
            }
        }
    }
}
