//! The turn engine: turn order, move commits and win detection.
//!
//! The engine owns the board, the die and the players. Each turn:
//!
//! 1. `roll_die`: ask the die for a value (`AwaitingRoll -> Resolving`).
//! 2. `resolve`: let the board resolve the move, commit the result to the
//!    active player, then scan the whole roster for a winner
//!    (`Resolving -> TurnComplete | GameOver`).
//! 3. `end_turn`: rotate to the next player (`TurnComplete -> AwaitingRoll`).
//!
//! `take_turn` runs all three. No I/O happens here; rendering and pause
//! gating live in [`crate::session`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Board, MoveOutcome};
use crate::core::config::MIN_PLAYERS;
use crate::core::{Die, GameError, GameSetup, Player, PlayerId, SeededDie, PLAYER_SYMBOLS};

use super::phase::TurnPhase;
use super::result::{standings, GameResult};

/// One resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number across the whole game.
    pub turn: u32,
    /// Who moved.
    pub player: PlayerId,
    /// How the move resolved.
    pub outcome: MoveOutcome,
}

/// Drives a game from the first roll to a single winner.
#[derive(Clone, Debug)]
pub struct TurnEngine<D> {
    board: Board,
    die: D,
    players: Vec<Player>,
    current: usize,
    phase: TurnPhase,
    result: Option<GameResult>,
    turns_played: u32,
    history: Vec<TurnRecord>,
}

impl TurnEngine<SeededDie> {
    /// Start a game from a validated setup.
    pub fn from_setup(setup: GameSetup) -> Result<Self, GameError> {
        Self::new(setup.players, setup.board, setup.die)
    }
}

impl<D: Die> TurnEngine<D> {
    /// Create a game. Players roll in the order given.
    ///
    /// Symbols `1`..`9`, `0` are assigned to the first ten players.
    pub fn new(mut players: Vec<Player>, board: Board, die: D) -> Result<Self, GameError> {
        if players.len() < MIN_PLAYERS {
            return Err(GameError::setup(format!(
                "need at least {} players, got {}",
                MIN_PLAYERS,
                players.len()
            )));
        }
        if players.len() > usize::from(u8::MAX) {
            return Err(GameError::setup(format!(
                "at most {} players supported, got {}",
                u8::MAX,
                players.len()
            )));
        }

        for (player, &symbol) in players.iter_mut().zip(PLAYER_SYMBOLS.iter()) {
            player.set_symbol(symbol);
        }

        debug!(
            players = players.len(),
            board_size = board.size(),
            transitions = board.transitions().len(),
            triggers = board.transitions().trigger_count(),
            "game created"
        );

        Ok(Self {
            board,
            die,
            players,
            current: 0,
            phase: TurnPhase::AwaitingRoll,
            result: None,
            turns_played: 0,
            history: Vec::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn die(&self) -> &D {
        &self.die
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The winning player, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.result.and_then(|r| self.player(r.winner()))
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Winner first, then everyone else by position, highest first.
    /// Ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        standings(&self.players)
    }

    // === State machine ===

    /// `AwaitingRoll -> Resolving`. Returns the roll, or `None` in any
    /// other phase.
    pub fn roll_die(&mut self) -> Option<u32> {
        if self.phase != TurnPhase::AwaitingRoll {
            return None;
        }
        let roll = self.die.roll();
        self.phase = TurnPhase::Resolving { roll };
        Some(roll)
    }

    /// `Resolving -> TurnComplete | GameOver`.
    ///
    /// Applies the pending roll to the active player and checks every
    /// player, in turn order, for a win. Returns `None` if no roll is
    /// pending.
    pub fn resolve(&mut self) -> Option<TurnRecord> {
        let TurnPhase::Resolving { roll } = self.phase else {
            return None;
        };

        let player = &mut self.players[self.current];
        let outcome = self.board.resolve_move(player.position(), roll);
        player.set_position(outcome.final_position());

        self.turns_played += 1;
        let record = TurnRecord {
            turn: self.turns_played,
            player: PlayerId::new(self.current as u8),
            outcome,
        };
        self.history.push(record);

        debug!(
            turn = record.turn,
            player = %self.players[self.current].name(),
            roll,
            from = outcome.from,
            landed = outcome.landed,
            to = outcome.to,
            kind = ?outcome.kind,
            "turn resolved"
        );

        let board = &self.board;
        let first_winner = self.players.iter().position(|p| board.has_won(p.position()));
        match first_winner {
            Some(index) => self.declare(GameResult::Winner(PlayerId::new(index as u8))),
            None => self.phase = TurnPhase::TurnComplete,
        }

        Some(record)
    }

    /// `TurnComplete -> AwaitingRoll`, passing the turn to the next player.
    /// Returns `false` in any other phase.
    pub fn end_turn(&mut self) -> bool {
        if self.phase != TurnPhase::TurnComplete {
            return false;
        }
        self.current = (self.current + 1) % self.players.len();
        self.phase = TurnPhase::AwaitingRoll;
        true
    }

    /// Play one full turn. Returns `None` once the game is over.
    pub fn take_turn(&mut self) -> Option<TurnRecord> {
        if self.phase == TurnPhase::TurnComplete {
            self.end_turn();
        }
        if self.phase == TurnPhase::AwaitingRoll {
            self.roll_die();
        }
        let record = self.resolve()?;
        self.end_turn();
        Some(record)
    }

    /// Play until someone wins or `max_turns` turns have been played in
    /// total.
    ///
    /// At the cap, the player furthest along (earliest in turn order on a
    /// tie) is declared the winner.
    pub fn autoplay(&mut self, max_turns: u32) -> GameResult {
        while !self.is_over() && self.turns_played < max_turns {
            self.take_turn();
        }
        match self.result {
            Some(result) => result,
            None => self.finish_at_turn_limit(),
        }
    }

    /// End the game now, declaring the leader the winner.
    ///
    /// Does nothing but return the existing result if the game is already
    /// over.
    pub fn finish_at_turn_limit(&mut self) -> GameResult {
        if let Some(result) = self.result {
            return result;
        }

        let leader = self
            .players
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| {
                if p.position() > self.players[best].position() {
                    i
                } else {
                    best
                }
            });

        warn!(
            turns = self.turns_played,
            leader = %self.players[leader].name(),
            position = self.players[leader].position(),
            "turn limit reached without a winner"
        );

        let result = GameResult::TurnLimit(PlayerId::new(leader as u8));
        self.declare(result);
        result
    }

    fn declare(&mut self, result: GameResult) {
        let winner = &mut self.players[result.winner().index()];
        winner.mark_winner();
        info!(
            winner = %winner.name(),
            turns = self.turns_played,
            reached_goal = result.reached_goal(),
            "game over"
        );
        self.result = Some(result);
        self.phase = TurnPhase::GameOver;
    }
}
