use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the ranking pipeline itself.
///
/// Void matches are not errors; they are skipped during replay.
#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("tournament {tournament}: {reason}")]
    MalformedInput { tournament: String, reason: String },

    #[error("tournament {tournament} ({date}) is older than the previously replayed one ({previous})")]
    OutOfOrder {
        tournament: String,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("unrecognised date: {value}")]
    InvalidDate { value: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}

impl RankingError {
    pub fn malformed(tournament: &str, reason: impl Into<String>) -> Self {
        RankingError::MalformedInput {
            tournament: tournament.to_string(),
            reason: reason.into(),
        }
    }
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_tournament() {
        let err = RankingError::malformed("sdhs31", "player1-id 7 is not a participant");
        assert_eq!(
            err.to_string(),
            "tournament sdhs31: player1-id 7 is not a participant"
        );
    }

    #[test]
    fn test_context_helpers() {
        assert_eq!(parse_context("tournament"), "Failed to parse tournament");
        assert_eq!(cache_context("read", "abc"), "Failed to read cache for key: abc");
    }
}
