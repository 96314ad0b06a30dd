use anyhow::Result;

use crate::errors::RankingError;
use crate::matchups::MatchupStore;
use crate::matchups::report::{render_index, render_player};

/// Answers "how has this player done against whom" from the saved table.
pub struct LookupService {
    store: MatchupStore,
}

impl LookupService {
    pub fn new(store: MatchupStore) -> Self {
        Self { store }
    }

    pub fn run(&self, name: Option<&str>) -> Result<()> {
        print!("{}", self.describe(name)?);
        Ok(())
    }

    /// The index without a name; a player's record, or a not-found line.
    pub fn describe(&self, name: Option<&str>) -> Result<String> {
        let table = self.store.load()?;

        let Some(name) = name else {
            return Ok(render_index(&table));
        };

        match table.lookup(name) {
            Ok((canonical, entry)) => Ok(render_player(canonical, entry)),
            Err(RankingError::PlayerNotFound { name }) => Ok(format!("Player not found: {}\n", name)),
            Err(e) => Err(e.into()),
        }
    }
}
