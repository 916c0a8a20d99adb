//! # snakes-ladders
//!
//! A Snakes and Ladders engine built around a pure turn state machine.
//!
//! ## Design Principles
//!
//! 1. **Board computes, engine commits**: `Board::resolve_move` never
//!    touches a player. The turn engine writes the result back, once.
//!
//! 2. **Single-hop transitions**: landing on a trigger moves a player once.
//!    A snake tail that happens to sit on a ladder bottom is not followed.
//!
//! 3. **No I/O in the rules**: dice and rendering are capabilities passed
//!    in. The session driver is the only code that waits on the outside
//!    world.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, dice, players and setup configuration
//! - `board`: the track, snakes and ladders, move resolution
//! - `engine`: turn phases, the turn engine and game results
//! - `render`: text snapshots and the `Renderer` trait
//! - `session`: quick and interactive play loops
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::core::GameConfig;
//! use snakes_ladders::engine::TurnEngine;
//!
//! let setup = GameConfig::new(["Alice", "Bob"]).with_seed(42).build().unwrap();
//! let mut game = TurnEngine::from_setup(setup).unwrap();
//! let result = game.autoplay(1000);
//!
//! assert!(game.is_over());
//! assert!(game.players()[result.winner().index()].is_winner());
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, MoveKind, MoveOutcome, Position, Transition, TransitionKind};
pub use crate::core::{
    ConfigError, Die, GameConfig, GameError, GameRng, GameRngState, GameSetup, LoadedDie, Player,
    PlayerId, SeededDie,
};
pub use crate::engine::{GameResult, TurnEngine, TurnPhase, TurnRecord};
pub use crate::render::{NullRenderer, Renderer, TextRenderer};
pub use crate::session::{AlwaysReady, PlayMode, ReadyGate, Session, SessionConfig, SessionEnd};
