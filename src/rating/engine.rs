use chrono::NaiveDate;
use log::{debug, info, warn};

use super::pairwise::PairwiseRater;
use super::types::{ReplayPhase, ReplaySummary};
use crate::config::settings::RatingSettings;
use crate::domain::{MatchRecord, ParticipantId, Tournament};
use crate::errors::RankingError;
use crate::ledger::{PlayerLedger, TagMap};

/// Replays match outcomes, oldest tournament first, into the ledger.
pub struct RatingEngine {
    rater: PairwiseRater,
}

enum MatchOutcome {
    Decided,
    Void,
}

impl RatingEngine {
    pub fn new(settings: &RatingSettings) -> Self {
        Self {
            rater: PairwiseRater::new(settings),
        }
    }

    /// Replay all but the last tournament, snapshot, then replay the last.
    ///
    /// `tournaments` must already be in chronological order; nothing is
    /// touched if it is not.
    pub fn replay(
        &self,
        ledger: &mut PlayerLedger,
        tournaments: &[Tournament],
    ) -> Result<ReplaySummary, RankingError> {
        ensure_chronological(tournaments)?;

        let mut summary = ReplaySummary::default();
        let Some((last, history)) = tournaments.split_last() else {
            warn!("No tournaments to replay");
            return Ok(summary);
        };

        for tournament in history {
            self.replay_tournament(ledger, tournament, ReplayPhase::History, &mut summary)?;
        }

        if !history.is_empty() {
            ledger.snapshot_ratings();
            summary.snapshot_taken = true;
            info!("  → Snapshot of {} ratings before {}", ledger.len(), last.id);
        }

        self.replay_tournament(ledger, last, ReplayPhase::Final, &mut summary)?;
        summary.last_updated = Some(last_updated(ledger, last)?);

        info!(
            "  → Replayed {} tournaments ({} decided, {} void matches)",
            summary.tournaments, summary.decided_matches, summary.void_matches
        );
        Ok(summary)
    }

    fn replay_tournament(
        &self,
        ledger: &mut PlayerLedger,
        tournament: &Tournament,
        phase: ReplayPhase,
        summary: &mut ReplaySummary,
    ) -> Result<(), RankingError> {
        let tag = register_participants(ledger, tournament, phase);

        for record in &tournament.matches {
            match self.replay_match(ledger, &tag, tournament, record)? {
                MatchOutcome::Decided => summary.decided_matches += 1,
                MatchOutcome::Void => summary.void_matches += 1,
            }
        }

        summary.tournaments += 1;
        debug!(
            "{}: {} participants, {} matches",
            tournament.id,
            tag.len(),
            tournament.matches.len()
        );
        Ok(())
    }

    fn replay_match(
        &self,
        ledger: &mut PlayerLedger,
        tag: &TagMap,
        tournament: &Tournament,
        record: &MatchRecord,
    ) -> Result<MatchOutcome, RankingError> {
        let Some(winner) = record.winner_id.and_then(|id| tag.resolve(id)) else {
            debug!("{}: skipping match without a known winner", tournament.id);
            return Ok(MatchOutcome::Void);
        };

        let one = resolve_side(tag, tournament, record.player1_id, "player1-id")?;
        let two = resolve_side(tag, tournament, record.player2_id, "player2-id")?;

        if one == two {
            debug!("{}: skipping match of {} against themselves", tournament.id, one);
            return Ok(MatchOutcome::Void);
        }

        let loser = if winner == one {
            two
        } else if winner == two {
            one
        } else {
            return Err(RankingError::malformed(
                &tournament.id,
                format!("winner {} did not play {} vs {}", winner, one, two),
            ));
        };

        self.apply_result(ledger, tournament, winner, loser)?;
        Ok(MatchOutcome::Decided)
    }

    fn apply_result(
        &self,
        ledger: &mut PlayerLedger,
        tournament: &Tournament,
        winner: &str,
        loser: &str,
    ) -> Result<(), RankingError> {
        let winner_rating = current_rating(ledger, tournament, winner)?;
        let loser_rating = current_rating(ledger, tournament, loser)?;
        let (new_winner, new_loser) = self.rater.rate_1vs1(&winner_rating, &loser_rating);

        for (name, rating) in [(winner, new_winner), (loser, new_loser)] {
            if let Some(player) = ledger.get_mut(name) {
                player.rating = rating;
                player.add_match(winner, loser);
            }
        }
        Ok(())
    }
}

fn ensure_chronological(tournaments: &[Tournament]) -> Result<(), RankingError> {
    let mut previous: Option<NaiveDate> = None;

    for tournament in tournaments {
        let date = tournament.started_on()?;
        if let Some(previous) = previous.filter(|&p| date < p) {
            return Err(RankingError::OutOfOrder {
                tournament: tournament.id.clone(),
                date,
                previous,
            });
        }
        previous = Some(date);
    }

    Ok(())
}

fn register_participants(
    ledger: &mut PlayerLedger,
    tournament: &Tournament,
    phase: ReplayPhase,
) -> TagMap {
    let mut tag = TagMap::new();

    for participant in &tournament.participants {
        let player = ledger.get_or_create(participant);
        if player.appearances == 1 && phase == ReplayPhase::Final {
            player.is_new = true;
        }
        tag.insert(participant.id, player.name.clone());
    }

    tag
}

fn resolve_side<'t>(
    tag: &'t TagMap,
    tournament: &Tournament,
    id: Option<ParticipantId>,
    field: &str,
) -> Result<&'t str, RankingError> {
    let id = id.ok_or_else(|| {
        RankingError::malformed(&tournament.id, format!("decided match has no {}", field))
    })?;

    tag.resolve(id).ok_or_else(|| {
        RankingError::malformed(&tournament.id, format!("{} {} is not a participant", field, id))
    })
}

fn current_rating(
    ledger: &PlayerLedger,
    tournament: &Tournament,
    name: &str,
) -> Result<skillratings::trueskill::TrueSkillRating, RankingError> {
    ledger
        .get(name)
        .map(|p| p.rating)
        .ok_or_else(|| RankingError::malformed(&tournament.id, format!("{} is not registered", name)))
}

/// Latest appearance among players seen more than once, else the final
/// tournament's start.
fn last_updated(ledger: &PlayerLedger, last: &Tournament) -> Result<NaiveDate, RankingError> {
    match ledger
        .players()
        .filter(|p| p.appearances > 1)
        .map(|p| p.last_played)
        .max()
    {
        Some(date) => Ok(date),
        None => last.started_on(),
    }
}
