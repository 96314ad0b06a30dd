use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::dates::flexible;
use crate::errors::RankingError;

/// Participant-local identifier assigned by the bracket service.
pub type ParticipantId = i64;

/// One cached bracket: its matches in listed order plus its participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub id: String,
    pub matches: Vec<MatchRecord>,
    pub participants: Vec<ParticipantRecord>,
}

impl Tournament {
    pub fn new(
        id: impl Into<String>,
        matches: Vec<MatchRecord>,
        participants: Vec<ParticipantRecord>,
    ) -> Self {
        Self {
            id: id.into(),
            matches,
            participants,
        }
    }

    /// Chronological key: the first listed match's creation date.
    ///
    /// A bracket without matches falls back to its earliest registration.
    pub fn started_on(&self) -> Result<NaiveDate, RankingError> {
        if let Some(first) = self.matches.first() {
            return Ok(first.created_at);
        }

        self.participants
            .iter()
            .map(|p| p.created_at)
            .min()
            .ok_or_else(|| RankingError::malformed(&self.id, "no matches and no participants"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatchRecord {
    #[serde(default)]
    pub winner_id: Option<ParticipantId>,
    #[serde(deserialize_with = "nullable")]
    pub player1_id: Option<ParticipantId>,
    #[serde(deserialize_with = "nullable")]
    pub player2_id: Option<ParticipantId>,
    #[serde(with = "flexible")]
    pub created_at: NaiveDate,
}

impl MatchRecord {
    pub fn decided(
        winner_id: ParticipantId,
        player1_id: ParticipantId,
        player2_id: ParticipantId,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            winner_id: Some(winner_id),
            player1_id: Some(player1_id),
            player2_id: Some(player2_id),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParticipantRecord {
    pub id: ParticipantId,
    pub name: String,
    #[serde(with = "flexible")]
    pub created_at: NaiveDate,
}

impl ParticipantRecord {
    pub fn new(id: ParticipantId, name: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }
}

/// The field must be present, but may be `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_deserialize_bracket_fields() {
        let json = r#"{
            "matches": [
                {"winner-id": 1, "player1-id": 1, "player2-id": 2, "created-at": "2024-01-01"},
                {"winner-id": null, "player1-id": null, "player2-id": 2, "created-at": "2024-01-01"}
            ],
            "participants": [
                {"id": 1, "name": "Alice", "created-at": "2023-12-30"},
                {"id": 2, "name": "Bob", "created-at": "2023-12-31"}
            ]
        }"#;

        let tournament: Tournament = serde_json::from_str(json).unwrap();
        assert_eq!(tournament.matches.len(), 2);
        assert_eq!(tournament.matches[0].winner_id, Some(1));
        assert_eq!(tournament.matches[1].winner_id, None);
        assert_eq!(tournament.matches[1].player1_id, None);
        assert_eq!(
            tournament.participants[1].created_at,
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_missing_player_field_is_rejected() {
        let json = r#"{"winner-id": 1, "player1-id": 1, "created-at": "2024-01-01"}"#;
        assert!(serde_json::from_str::<MatchRecord>(json).is_err());
    }

    #[test]
    fn test_missing_winner_is_allowed() {
        let json = r#"{"player1-id": 1, "player2-id": 2, "created-at": "2024-01-01"}"#;
        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.winner_id, None);
    }

    #[test]
    fn test_started_on_uses_first_match() {
        let tournament = Tournament::new(
            "t",
            vec![
                MatchRecord::decided(1, 1, 2, day(5)),
                MatchRecord::decided(1, 1, 2, day(3)),
            ],
            vec![ParticipantRecord::new(1, "A", day(1))],
        );
        assert_eq!(tournament.started_on().unwrap(), day(5));
    }

    #[test]
    fn test_started_on_falls_back_to_registrations() {
        let tournament = Tournament::new(
            "t",
            vec![],
            vec![
                ParticipantRecord::new(1, "A", day(4)),
                ParticipantRecord::new(2, "B", day(2)),
            ],
        );
        assert_eq!(tournament.started_on().unwrap(), day(2));

        let empty = Tournament::new("empty", vec![], vec![]);
        assert!(matches!(
            empty.started_on(),
            Err(RankingError::MalformedInput { .. })
        ));
    }
}
