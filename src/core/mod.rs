//! Core types: players, errors, RNG, dice, configuration.
//!
//! Nothing here knows about turn order or movement rules. The board and
//! turn engine build on these.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, GameSetup, TransitionSpec, DEFAULT_MAX_TURNS};
pub use dice::{Die, LoadedDie, SeededDie};
pub use error::GameError;
pub use player::{Player, PlayerId, PLACEHOLDER_SYMBOL, PLAYER_SYMBOLS};
pub use rng::{GameRng, GameRngState};
