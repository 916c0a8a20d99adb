//! Construction-time errors.
//!
//! Only two things can go wrong, and both happen before play begins:
//! a snake or ladder is malformed, or the game is set up with too few
//! players (or otherwise violates setup policy). Once a `TurnEngine` exists,
//! none of its operations are fallible.

use derive_more::{Display, Error};

use crate::board::{Position, TransitionKind};

/// Errors raised while building a board or a game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A snake or ladder with endpoints out of bounds or in the wrong order.
    #[display("invalid {kind} {from}->{to}: {reason}")]
    InvalidDefinition {
        /// Which kind of transition was being defined.
        kind: TransitionKind,
        /// Trigger cell (snake head or ladder bottom).
        from: Position,
        /// Destination cell (snake tail or ladder top).
        to: Position,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Too few players, or a setup value outside the allowed range.
    #[display("invalid setup: {reason}")]
    InvalidSetup {
        /// What was wrong with the setup.
        reason: String,
    },
}

impl GameError {
    pub(crate) fn definition(
        kind: TransitionKind,
        from: Position,
        to: Position,
        reason: &'static str,
    ) -> Self {
        Self::InvalidDefinition {
            kind,
            from,
            to,
            reason,
        }
    }

    pub(crate) fn setup(reason: impl Into<String>) -> Self {
        Self::InvalidSetup {
            reason: reason.into(),
        }
    }
}
