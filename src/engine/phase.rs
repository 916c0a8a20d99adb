//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the turn engine is within the current turn.
///
/// ```text
/// AwaitingRoll -> Resolving -> TurnComplete -> AwaitingRoll (next player)
///                           \-> GameOver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active player's roll.
    #[default]
    AwaitingRoll,
    /// A roll is in hand and has not been applied yet.
    Resolving {
        /// The pending roll.
        roll: u32,
    },
    /// The move was committed and nobody has won; rotation is pending.
    TurnComplete,
    /// Terminal.
    GameOver,
}

impl TurnPhase {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == TurnPhase::GameOver
    }
}
