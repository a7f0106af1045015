//! Per-session lounge game statistics

use serde::{Deserialize, Serialize};

use crate::arcade::rps::Outcome;

/// Win/loss tally for one member's lounge session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds the member won
    pub wins: u32,
    /// Rounds the member lost
    pub losses: u32,
    /// Drawn rounds
    pub draws: u32,
}

impl SessionStats {
    /// Start an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one round
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total rounds played
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate as a percentage of rounds played, 0.0 for an empty tally
    pub fn win_rate(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(played) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::new();
        assert_eq!(stats.games_played(), 0);
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_record_and_rate() {
        let mut stats = SessionStats::new();
        stats.record(Outcome::Win);
        stats.record(Outcome::Win);
        stats.record(Outcome::Loss);
        stats.record(Outcome::Draw);

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.games_played(), 4);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
