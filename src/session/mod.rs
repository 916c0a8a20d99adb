//! Game session driver.
//!
//! Wraps a [`TurnEngine`] with everything that is not game logic: rendering
//! between transitions, the ready gate of interactive play and pacing.
//! The engine stays a pure state machine; this loop is the only place that
//! waits on the outside world.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Die, Player, DEFAULT_MAX_TURNS};
use crate::engine::{GameResult, TurnEngine};
use crate::render::Renderer;

/// Decides when the next roll may happen in interactive play.
pub trait ReadyGate {
    /// Block until `player` is ready to roll. `false` cancels the game.
    fn ready(&mut self, player: &Player) -> bool;
}

/// Gate that never waits and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysReady;

impl ReadyGate for AlwaysReady {
    fn ready(&mut self, _player: &Player) -> bool {
        true
    }
}

impl<F: FnMut(&Player) -> bool> ReadyGate for F {
    fn ready(&mut self, player: &Player) -> bool {
        self(player)
    }
}

/// How turns are triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Turns run back to back.
    #[default]
    Quick,
    /// Each roll waits for the ready gate.
    Interactive,
}

/// Configuration for a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Total turns before the leader is declared the winner.
    ///
    /// `None` leaves interactive play uncapped; auto-play then stops at
    /// `DEFAULT_MAX_TURNS`.
    pub max_turns: Option<u32>,

    /// Quick or interactive play.
    pub mode: PlayMode,

    /// Pause after every turn. Zero means no pause.
    pub turn_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: None,
            mode: PlayMode::Quick,
            turn_delay: Duration::ZERO,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn cap for both modes.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Cap applied to auto-play, which must always terminate.
    #[must_use]
    pub fn auto_turn_cap(&self) -> u32 {
        self.max_turns.unwrap_or(DEFAULT_MAX_TURNS)
    }

    /// Set the play mode.
    pub fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the pause after each turn.
    pub fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }
}

/// How a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a result.
    Finished(GameResult),
    /// The ready gate cancelled before the game ended.
    Cancelled,
}

impl SessionEnd {
    /// The result, if the game finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            SessionEnd::Finished(result) => Some(*result),
            SessionEnd::Cancelled => None,
        }
    }
}

/// Runs one game to completion or cancellation.
pub struct Session<D, R, G> {
    engine: TurnEngine<D>,
    renderer: R,
    gate: G,
    config: SessionConfig,
}

impl<D: Die, R: Renderer, G: ReadyGate> Session<D, R, G> {
    pub fn new(engine: TurnEngine<D>, renderer: R, gate: G, config: SessionConfig) -> Self {
        Self {
            engine,
            renderer,
            gate,
            config,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine<D> {
        &self.engine
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Take back the engine and renderer.
    pub fn into_parts(self) -> (TurnEngine<D>, R) {
        (self.engine, self.renderer)
    }

    /// Play in the configured mode.
    pub fn run(&mut self) -> SessionEnd {
        match self.config.mode {
            PlayMode::Quick => SessionEnd::Finished(self.run_auto()),
            PlayMode::Interactive => self.run_interactive(),
        }
    }

    /// Play without waiting for anyone, up to the turn cap.
    #[instrument(
        skip(self),
        fields(players = self.engine.player_count(), max_turns = self.config.auto_turn_cap())
    )]
    pub fn run_auto(&mut self) -> GameResult {
        info!("auto-play started");
        self.renderer.render(self.engine.board(), self.engine.players());

        let cap = self.config.auto_turn_cap();
        while !self.engine.is_over() && self.engine.turns_played() < cap {
            self.play_one();
        }

        self.finish()
    }

    /// Play with every roll gated on the ready gate.
    ///
    /// A cancelled gate stops the loop and leaves the game exactly as it
    /// was: no roll, no phase change, no result. Without an explicit cap
    /// the game runs until someone reaches the goal.
    #[instrument(
        skip(self),
        fields(players = self.engine.player_count(), max_turns = ?self.config.max_turns)
    )]
    pub fn run_interactive(&mut self) -> SessionEnd {
        info!("interactive play started");
        self.renderer.render(self.engine.board(), self.engine.players());

        let cap = self.config.max_turns;
        while !self.engine.is_over() && cap.map_or(true, |cap| self.engine.turns_played() < cap) {
            if !self.gate.ready(self.engine.current_player()) {
                info!(turns = self.engine.turns_played(), "session cancelled");
                return SessionEnd::Cancelled;
            }
            self.play_one();
        }

        SessionEnd::Finished(self.finish())
    }

    fn play_one(&mut self) {
        let turn = self.engine.turns_played() + 1;
        self.renderer.turn_started(turn, self.engine.current_player());

        if let Some(record) = self.engine.take_turn() {
            self.renderer
                .turn_resolved(&record, self.engine.board(), self.engine.players());
        }

        if !self.config.turn_delay.is_zero() && !self.engine.is_over() {
            thread::sleep(self.config.turn_delay);
        }
    }

    fn finish(&mut self) -> GameResult {
        let result = self.engine.finish_at_turn_limit();
        debug!(?result, turns = self.engine.turns_played(), "session finished");
        self.renderer
            .game_over(&result, self.engine.board(), self.engine.players());
        result
    }
}
