use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::activity::ActivityFilter;
use crate::ledger::{Player, PlayerLedger};

/// An active player with their current and pre-final-tournament positions.
#[derive(Debug, Clone)]
pub struct RankedPlayer<'a> {
    pub player: &'a Player,
    pub rank: usize,
    /// `None` for players new in the final tournament.
    pub previous_rank: Option<usize>,
}

impl RankedPlayer<'_> {
    pub fn name(&self) -> &str {
        &self.player.name
    }

    /// Places gained since the previous ranking; negative when dropped.
    pub fn rank_delta(&self) -> Option<i64> {
        self.previous_rank
            .map(|previous| previous as i64 - self.rank as i64)
    }
}

/// What renderers get for each line of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub rating_mean: f64,
    /// Places gained since the previous ranking; `None` for new players.
    pub rank_delta: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct Leaderboard<'a> {
    pub entries: Vec<RankedPlayer<'a>>,
    pub last_updated: Option<NaiveDate>,
}

impl<'a> Leaderboard<'a> {
    pub fn build(
        ledger: &'a PlayerLedger,
        filter: &ActivityFilter,
        last_updated: Option<NaiveDate>,
    ) -> Self {
        Self {
            entries: rank_active_players(ledger, filter),
            last_updated,
        }
    }

    pub fn rows(&self) -> Vec<LeaderboardRow> {
        self.entries
            .iter()
            .map(|entry| LeaderboardRow {
                rank: entry.rank,
                name: entry.player.name.clone(),
                rating_mean: entry.player.mean(),
                rank_delta: entry.rank_delta(),
            })
            .collect()
    }

    pub fn active_names(&self) -> HashSet<&'a str> {
        self.entries
            .iter()
            .map(|entry| entry.player.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dense ranks over active players by current mean, plus dense previous
/// ranks over the non-new ones by their snapshot mean.
pub fn rank_active_players<'a>(
    ledger: &'a PlayerLedger,
    filter: &ActivityFilter,
) -> Vec<RankedPlayer<'a>> {
    let mut active: Vec<&Player> = ledger
        .players()
        .filter(|p| filter.is_active(p.last_played))
        .collect();

    active.sort_by(|a, b| by_mean_desc(a.rating.rating, b.rating.rating, a, b));

    let mut entries: Vec<RankedPlayer<'a>> = active
        .into_iter()
        .enumerate()
        .map(|(idx, player)| RankedPlayer {
            player,
            rank: idx + 1,
            previous_rank: None,
        })
        .collect();

    assign_previous_ranks(&mut entries);
    entries
}

fn assign_previous_ranks(entries: &mut [RankedPlayer<'_>]) {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (entries[i].player, entries[j].player);
        by_mean_desc(a.old_rating().rating, b.old_rating().rating, a, b)
    });

    let mut next = 1;
    for idx in order {
        if entries[idx].player.is_new {
            continue;
        }
        entries[idx].previous_rank = Some(next);
        next += 1;
    }
}

fn by_mean_desc(a_mean: f64, b_mean: f64, a: &Player, b: &Player) -> Ordering {
    b_mean.total_cmp(&a_mean).then_with(|| a.name.cmp(&b.name))
}
