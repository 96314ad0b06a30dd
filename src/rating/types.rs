use chrono::NaiveDate;

/// Which side of the snapshot boundary a tournament is replayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    /// Every tournament except the most recent one.
    History,
    /// The most recent tournament; first-time entrants here are new.
    Final,
}

/// Counters and dates gathered while replaying a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub tournaments: usize,
    pub decided_matches: usize,
    pub void_matches: usize,
    pub snapshot_taken: bool,
    pub last_updated: Option<NaiveDate>,
}
