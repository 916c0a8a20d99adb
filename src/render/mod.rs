//! Rendering capability.
//!
//! The turn engine never renders anything itself. The session driver calls
//! a `Renderer` between state transitions; nothing a renderer does feeds
//! back into the game.
//!
//! - `view`: pure string builders (board snapshot, move narration, report)
//! - `TextRenderer`: writes those views to any `io::Write`
//! - `NullRenderer`: discards everything

pub mod view;

use std::io::{self, Write};

use tracing::warn;

use crate::board::Board;
use crate::core::Player;
use crate::engine::{GameResult, TurnRecord};

pub use view::{board_snapshot, describe_move, final_report};

/// Consumes snapshots of the game as it is played.
pub trait Renderer {
    /// Show the board and every player's status.
    fn render(&mut self, board: &Board, players: &[Player]);

    /// A new turn is about to begin.
    fn turn_started(&mut self, _turn: u32, _player: &Player) {}

    /// A turn was resolved and committed.
    fn turn_resolved(&mut self, _record: &TurnRecord, _board: &Board, _players: &[Player]) {}

    /// The game has ended.
    fn game_over(&mut self, _result: &GameResult, _board: &Board, _players: &[Player]) {}
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board, _players: &[Player]) {}
}

/// Plain-text renderer over any writer.
///
/// Write failures are logged and otherwise ignored; a broken terminal must
/// not stop the game.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    show_board_each_turn: bool,
}

impl TextRenderer<io::Stdout> {
    /// Render to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_board_each_turn: true,
        }
    }

    /// Only narrate moves; skip the full board after each turn.
    #[must_use]
    pub fn narration_only(mut self) -> Self {
        self.show_board_each_turn = false;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write game output");
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board, players: &[Player]) {
        let snapshot = board_snapshot(board, players);
        self.emit(&snapshot);
    }

    fn turn_started(&mut self, turn: u32, player: &Player) {
        let banner = format!("{}\nTurn {}: {}'s turn!", "=".repeat(50), turn, player.name());
        self.emit(&banner);
    }

    fn turn_resolved(&mut self, record: &TurnRecord, board: &Board, players: &[Player]) {
        let name = players
            .get(record.player.index())
            .map(Player::name)
            .unwrap_or("?");
        let line = describe_move(name, &record.outcome, board.winning_position());
        self.emit(&line);
        if self.show_board_each_turn {
            self.render(board, players);
        }
    }

    fn game_over(&mut self, result: &GameResult, board: &Board, players: &[Player]) {
        if let Some(winner) = players.get(result.winner().index()) {
            let banner = format!(
                "{bar}\n$ GAME OVER! $\n{} has won the game!\n{bar}",
                winner.name(),
                bar = "%".repeat(20)
            );
            self.emit(&banner);
        }
        let report = final_report(result, board, players);
        self.emit(&report);
    }
}
