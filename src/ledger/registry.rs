use std::collections::{BTreeMap, HashMap};

use skillratings::trueskill::TrueSkillRating;

use super::player::Player;
use crate::domain::{ParticipantId, ParticipantRecord};
use crate::identity::NameNormalizer;

/// Tournament-local participant ids resolved to canonical names.
#[derive(Debug, Default)]
pub struct TagMap {
    names: HashMap<ParticipantId, String>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ParticipantId, name: String) {
        self.names.insert(id, name);
    }

    pub fn resolve(&self, id: ParticipantId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// All players seen in the batch, keyed by canonical name.
pub struct PlayerLedger {
    normalizer: NameNormalizer,
    prior: TrueSkillRating,
    players: BTreeMap<String, Player>,
}

impl PlayerLedger {
    pub fn new(normalizer: NameNormalizer, prior: TrueSkillRating) -> Self {
        Self {
            normalizer,
            prior,
            players: BTreeMap::new(),
        }
    }

    /// Register a participant entry, creating the player on first sight.
    pub fn get_or_create(&mut self, participant: &ParticipantRecord) -> &mut Player {
        let name = self.normalizer.normalize(&participant.name);
        let seen_on = participant.created_at;
        let prior = self.prior;

        self.players
            .entry(name)
            .and_modify(|player| player.mark_seen(seen_on))
            .or_insert_with_key(|name| Player::new(name.clone(), prior, seen_on))
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    /// Players in canonical-name order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Copy every known player's current rating into `previous_rating`.
    pub fn snapshot_ratings(&mut self) {
        for player in self.players.values_mut() {
            player.snapshot_rating();
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
