use skillratings::Outcomes;
use skillratings::trueskill::{TrueSkillConfig, TrueSkillRating, trueskill};

use crate::config::settings::RatingSettings;

/// One-on-one TrueSkill update.
pub struct PairwiseRater {
    config: TrueSkillConfig,
}

impl PairwiseRater {
    pub fn new(settings: &RatingSettings) -> Self {
        Self {
            config: settings.trueskill_config(),
        }
    }

    /// Winner first, loser second; returns the new ratings in the same order.
    pub fn rate_1vs1(
        &self,
        winner: &TrueSkillRating,
        loser: &TrueSkillRating,
    ) -> (TrueSkillRating, TrueSkillRating) {
        trueskill(winner, loser, &Outcomes::WIN, &self.config)
    }
}
