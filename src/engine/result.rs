//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player landed exactly on the winning cell.
    Winner(PlayerId),
    /// The turn cap was hit; the player furthest along was declared winner.
    TurnLimit(PlayerId),
}

impl GameResult {
    /// The declared winner, however the game ended.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameResult::Winner(p) | GameResult::TurnLimit(p) => p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }

    /// Did the game end by reaching the goal rather than the turn cap?
    #[must_use]
    pub fn reached_goal(&self) -> bool {
        matches!(self, GameResult::Winner(_))
    }
}

/// Rank players for a final report: the winner first, then by position,
/// highest first. Ties keep turn order.
#[must_use]
pub fn standings(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| {
        b.is_winner()
            .cmp(&a.is_winner())
            .then_with(|| b.position().cmp(&a.position()))
    });
    ranked
}
