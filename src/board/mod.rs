//! The track, its snakes and ladders, and single-move resolution.
//!
//! - `transition`: snake/ladder definitions and the trigger lookup table
//! - `track`: the `Board` and `resolve_move`
//! - `standard`: the default 100-cell layout

mod standard;
mod track;
mod transition;

pub use standard::{STANDARD_LADDERS, STANDARD_SNAKES};
pub use track::{Board, MoveKind, MoveOutcome};
pub use transition::{Transition, TransitionKind, TransitionTable};

/// A cell on the track. 0 is the off-board start.
pub type Position = u32;
