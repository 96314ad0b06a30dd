use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::domain::Tournament;
use crate::identity::NameNormalizer;
use crate::ledger::PlayerLedger;
use crate::matchups::{MatchupStore, MatchupTable, aggregate_matchups};
use crate::ranking::{ActivityFilter, Leaderboard, render_text};
use crate::rating::{RatingEngine, ReplaySummary};

/// A fully replayed batch; read-only from here on.
pub struct RankingRun {
    pub ledger: PlayerLedger,
    pub summary: ReplaySummary,
}

impl RankingRun {
    pub fn leaderboard(&self, filter: &ActivityFilter) -> Leaderboard<'_> {
        Leaderboard::build(&self.ledger, filter, self.summary.last_updated)
    }
}

/// Replay chronologically ordered tournaments into a fresh ledger.
pub fn replay_batch(config: &AppConfig, tournaments: &[Tournament]) -> Result<RankingRun> {
    let normalizer = NameNormalizer::new(config.aliases.clone())?;
    let mut ledger = PlayerLedger::new(normalizer, config.rating.prior());
    let engine = RatingEngine::new(&config.rating);

    let summary = engine.replay(&mut ledger, tournaments)?;
    info!("  → {} players in ledger", ledger.len());

    Ok(RankingRun { ledger, summary })
}

pub struct ProcessingService {
    config: AppConfig,
    cache: Cache,
    store: MatchupStore,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let cache = Cache::new(&config.paths.cache_dir)?;
        let store = MatchupStore::new(&config.paths.matchups_path);
        Ok(Self {
            config,
            cache,
            store,
        })
    }

    pub fn run(&self, today: NaiveDate) -> Result<()> {
        info!("=== Starting Ranking Run ({}) ===", today);

        let tournaments = self.load_tournaments()?;
        let run = replay_batch(&self.config, &tournaments)?;

        let filter = ActivityFilter::new(today, self.config.ranking.activity_window());
        let board = run.leaderboard(&filter);
        info!("  → {} active players", board.len());

        let matchups = self.save_matchups(&board)?;
        info!("  → {} matchup records", matchups.len());

        print!("{}", render_text(&board));

        info!("=== Ranking Run Complete ===");
        Ok(())
    }

    fn load_tournaments(&self) -> Result<Vec<Tournament>> {
        let collection = self.cache.load_tournaments()?;
        info!("  → Loaded {} tournaments from cache", collection.len());
        Ok(collection.into_chronological()?)
    }

    fn save_matchups(&self, board: &Leaderboard<'_>) -> Result<MatchupTable> {
        let matchups = aggregate_matchups(board);
        self.store.save(&matchups)?;
        Ok(matchups)
    }
}
