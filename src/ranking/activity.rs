use chrono::{Duration, NaiveDate};

/// Recency window a player must fall inside to be listed.
#[derive(Debug, Clone, Copy)]
pub struct ActivityFilter {
    today: NaiveDate,
    window: Duration,
}

impl ActivityFilter {
    pub fn new(today: NaiveDate, window: Duration) -> Self {
        Self { today, window }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Strictly inside the window; exactly `window` ago is inactive.
    pub fn is_active(&self, last_played: NaiveDate) -> bool {
        self.today.signed_duration_since(last_played) < self.window
    }
}
