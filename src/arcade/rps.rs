//! Rock-paper-scissors lounge game

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A throw in rock-paper-scissors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Rock beats scissors
    Rock,
    /// Paper beats rock
    Paper,
    /// Scissors beats paper
    Scissors,
}

impl Move {
    /// All moves, in canonical order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Draw a uniformly random move
    pub fn random(rng: &mut impl Rng) -> Move {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Result of a round, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player beat the house
    Win,
    /// House beat the player
    Loss,
    /// Both threw the same move
    Draw,
}

/// A finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// What the player threw
    pub player: Move,
    /// What the house threw
    pub house: Move,
    /// Who won
    pub outcome: Outcome,
}

/// Play one round against a randomly throwing house
pub fn play(player: Move, rng: &mut impl Rng) -> Round {
    let house = Move::random(rng);
    let outcome = judge(player, house);
    debug!(%player, %house, ?outcome, "rock-paper-scissors round");
    Round {
        player,
        house,
        outcome,
    }
}

/// Judge a round from the player's point of view
pub fn judge(player: Move, house: Move) -> Outcome {
    if player == house {
        Outcome::Draw
    } else if player.beats() == house {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
