use std::collections::HashMap;

use super::models::Tournament;
use crate::errors::RankingError;

/// Collection of tournaments indexed by ID
#[derive(Debug)]
pub struct TournamentCollection {
    tournaments: HashMap<String, Tournament>,
}

impl TournamentCollection {
    pub fn new() -> Self {
        Self {
            tournaments: HashMap::new(),
        }
    }

    pub fn add(&mut self, tournament: Tournament) {
        self.tournaments.insert(tournament.id.clone(), tournament);
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// Tournaments oldest first, ties broken by ID.
    pub fn into_chronological(self) -> Result<Vec<Tournament>, RankingError> {
        let mut keyed = self
            .tournaments
            .into_values()
            .map(|t| Ok((t.started_on()?, t)))
            .collect::<Result<Vec<_>, RankingError>>()?;

        keyed.sort_by(|(a_date, a), (b_date, b)| a_date.cmp(b_date).then_with(|| a.id.cmp(&b.id)));

        Ok(keyed.into_iter().map(|(_, t)| t).collect())
    }
}

impl Default for TournamentCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Tournament> for TournamentCollection {
    fn from_iter<I: IntoIterator<Item = Tournament>>(iter: I) -> Self {
        let mut collection = Self::new();
        for tournament in iter {
            collection.add(tournament);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{MatchRecord, ParticipantRecord};

    fn bracket(id: &str, day: u32) -> Tournament {
        let date = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        Tournament::new(
            id,
            vec![MatchRecord::decided(1, 1, 2, date)],
            vec![
                ParticipantRecord::new(1, "A", date),
                ParticipantRecord::new(2, "B", date),
            ],
        )
    }

    #[test]
    fn test_chronological_order() {
        let collection: TournamentCollection =
            vec![bracket("c", 20), bracket("a", 6), bracket("b", 13)]
                .into_iter()
                .collect();

        let ids: Vec<String> = collection
            .into_chronological()
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_same_day_sorted_by_id() {
        let collection: TournamentCollection =
            vec![bracket("zeta", 6), bracket("alpha", 6)].into_iter().collect();

        let ordered = collection.into_chronological().unwrap();
        assert_eq!(ordered[0].id, "alpha");
        assert_eq!(ordered[1].id, "zeta");
    }

    #[test]
    fn test_readding_replaces() {
        let mut collection = TournamentCollection::new();
        collection.add(bracket("a", 6));
        collection.add(bracket("a", 7));
        assert_eq!(collection.len(), 1);

        let ordered = collection.into_chronological().unwrap();
        assert_eq!(ordered[0].started_on().unwrap(), NaiveDate::from_ymd_opt(2024, 2, 7).unwrap());
    }
}
