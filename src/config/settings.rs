use std::path::PathBuf;

use chrono::Duration;
use skillratings::trueskill::{TrueSkillConfig, TrueSkillRating};

use super::aliases::{AliasTable, get_aliases};

/// TrueSkill prior and environment.
pub struct RatingSettings {
    pub initial_mean: f64,
    pub initial_uncertainty: f64,
    pub beta: f64,
    pub dynamics: f64,
    pub draw_probability: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_mean: 25.0,
            initial_uncertainty: 25.0 / 3.0,
            beta: 25.0 / 6.0,
            dynamics: 25.0 / 300.0,
            draw_probability: 0.1,
        }
    }
}

impl RatingSettings {
    pub fn prior(&self) -> TrueSkillRating {
        TrueSkillRating {
            rating: self.initial_mean,
            uncertainty: self.initial_uncertainty,
        }
    }

    pub fn trueskill_config(&self) -> TrueSkillConfig {
        TrueSkillConfig {
            draw_probability: self.draw_probability,
            beta: self.beta,
            default_dynamics: self.dynamics,
        }
    }
}

pub struct RankingSettings {
    pub activity_window_weeks: i64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            activity_window_weeks: 4,
        }
    }
}

impl RankingSettings {
    pub fn activity_window(&self) -> Duration {
        Duration::weeks(self.activity_window_weeks)
    }
}

pub struct PathSettings {
    pub cache_dir: PathBuf,
    pub matchups_path: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            cache_dir: env_path("RANKINGS_CACHE_DIR", "cache"),
            matchups_path: env_path("RANKINGS_MATCHUPS_PATH", "player_matchups.json"),
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .into()
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub ranking: RankingSettings,
    pub paths: PathSettings,
    pub aliases: AliasTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            ranking: RankingSettings::default(),
            paths: PathSettings::default(),
            aliases: AliasTable::from_entries(&get_aliases()),
        }
    }
}
