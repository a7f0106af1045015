//! Number-guessing lounge game
//!
//! The house picks a number between 1 and 100; the player has seven
//! attempts, with a distance hint after every miss.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Lowest possible target
pub const MIN_TARGET: u32 = 1;
/// Highest possible target
pub const MAX_TARGET: u32 = 100;
/// Attempts the player gets before the game is over
pub const MAX_ATTEMPTS: u32 = 7;

/// How far a miss landed from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distance {
    /// Within 5 of the target
    VeryClose,
    /// Within 15 of the target
    Close,
    /// More than 15 away
    Far,
}

impl Distance {
    fn grade(diff: u32) -> Distance {
        if diff <= 5 {
            Distance::VeryClose
        } else if diff <= 15 {
            Distance::Close
        } else {
            Distance::Far
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::VeryClose => write!(f, "very close"),
            Distance::Close => write!(f, "close"),
            Distance::Far => write!(f, "far"),
        }
    }
}

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// The guess hit the target
    Exact,
    /// The target is higher than the guess
    Higher(Distance),
    /// The target is lower than the guess
    Lower(Distance),
    /// Out of attempts; the target is revealed
    GameOver {
        /// The number the house had picked
        target: u32,
    },
}

/// One in-progress guessing game
#[derive(Debug, Clone)]
pub struct GuessGame {
    target: u32,
    attempts_used: u32,
    won: bool,
    finished: bool,
}

impl GuessGame {
    /// Start a game with a randomly drawn target
    pub fn new(rng: &mut impl Rng) -> Self {
        let target = rng.gen_range(MIN_TARGET..=MAX_TARGET);
        debug!(target, "guessing game started");
        Self {
            target,
            attempts_used: 0,
            won: false,
            finished: false,
        }
    }

    /// Attempts the player has left
    pub fn attempts_remaining(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }

    /// Whether the game has ended, by a hit or by running out of attempts
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Submit a guess
    ///
    /// Guesses outside 1..=100 still consume an attempt. Guessing after the
    /// game has finished keeps returning the terminal hint.
    pub fn guess(&mut self, value: u32) -> Hint {
        if self.finished {
            return if self.won {
                Hint::Exact
            } else {
                Hint::GameOver {
                    target: self.target,
                }
            };
        }

        self.attempts_used += 1;
        if value == self.target {
            self.won = true;
            self.finished = true;
            return Hint::Exact;
        }

        if self.attempts_used >= MAX_ATTEMPTS {
            self.finished = true;
            return Hint::GameOver {
                target: self.target,
            };
        }

        let distance = Distance::grade(self.target.abs_diff(value));
        if value < self.target {
            Hint::Higher(distance)
        } else {
            Hint::Lower(distance)
        }
    }
}
