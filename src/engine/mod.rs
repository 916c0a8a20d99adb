//! Turn engine and game results.
//!
//! The engine is a pure state machine: it consumes die rolls and produces
//! turn records. Rendering and pause gating live in the session driver.

mod phase;
mod result;
mod turn;

pub use phase::TurnPhase;
pub use result::{standings, GameResult};
pub use turn::{TurnEngine, TurnRecord};
