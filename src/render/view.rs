//! Text views of the board, moves and final results.
//!
//! Everything here is pure: it builds strings and performs no I/O.

use std::fmt::Write;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{Board, MoveKind, MoveOutcome, Position, Transition, TransitionKind};
use crate::core::Player;
use crate::engine::{standings, GameResult};

const GRID_WIDTH: Position = 10;

/// Player symbols standing on each cell, in turn order.
fn occupants(players: &[Player]) -> FxHashMap<Position, SmallVec<[char; 4]>> {
    let mut cells: FxHashMap<Position, SmallVec<[char; 4]>> = FxHashMap::default();
    for player in players {
        cells.entry(player.position()).or_default().push(player.symbol());
    }
    cells
}

fn list(transitions: impl Iterator<Item = impl std::fmt::Display>) -> String {
    let items: Vec<String> = transitions.map(|t| t.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Serpentine 10x10 grid for the standard board, cell 1 at the bottom right.
fn grid(board: &Board, cells: &FxHashMap<Position, SmallVec<[char; 4]>>, out: &mut String) {
    let _ = writeln!(out, "Board Layout ({} = winning position):", board.winning_position());

    for row in (0..GRID_WIDTH).rev() {
        for col in 0..GRID_WIDTH {
            let position = if row % 2 == 1 {
                row * GRID_WIDTH + col + 1
            } else {
                row * GRID_WIDTH + (GRID_WIDTH - 1 - col) + 1
            };

            let marker = match board.transition_at(position).map(Transition::kind) {
                Some(TransitionKind::Snake) => "🐍",
                Some(TransitionKind::Ladder) => "🪜",
                None => "  ",
            };
            let _ = write!(out, "{:3}{}", position, marker);
            if let Some(symbols) = cells.get(&position) {
                out.extend(symbols.iter());
            }
            out.push(' ');
        }
        out.push('\n');
    }
}

/// Compact listing for non-standard sizes, ten cells per line.
fn strip(board: &Board, cells: &FxHashMap<Position, SmallVec<[char; 4]>>, out: &mut String) {
    let _ = write!(out, "Positions 1 to {}", board.size());

    for position in 1..=board.size() {
        if position % GRID_WIDTH == 1 {
            out.push('\n');
        }
        let marker: String = match cells.get(&position) {
            Some(symbols) => symbols.iter().collect(),
            None => match board.transition_at(position).map(Transition::kind) {
                Some(TransitionKind::Snake) => "S".to_string(),
                Some(TransitionKind::Ladder) => "L".to_string(),
                None => ".".to_string(),
            },
        };
        let _ = write!(out, "{:3}{} ", position, marker);
    }
    out.push('\n');
}

/// Full snapshot: track, registered snakes and ladders, player statuses.
#[must_use]
pub fn board_snapshot(board: &Board, players: &[Player]) -> String {
    let cells = occupants(players);
    let mut out = String::from("=== Board Status ===\n");

    if board.size() == GRID_WIDTH * GRID_WIDTH {
        grid(board, &cells, &mut out);
    } else {
        strip(board, &cells, &mut out);
    }

    let _ = writeln!(out, "\n🐍 Snakes: {}", list(board.snakes()));
    let _ = writeln!(out, "🪜 Ladders: {}", list(board.ladders()));

    out.push_str("\nPlayer Positions:\n");
    let waiting = players.iter().filter(|p| p.position() == 0).count();
    for player in players {
        let _ = writeln!(out, "  {}", player);
    }
    if waiting > 0 {
        let _ = writeln!(out, "  ({} not yet on the board)", waiting);
    }

    out
}

/// Narrate one move.
#[must_use]
pub fn describe_move(name: &str, outcome: &MoveOutcome, winning_position: Position) -> String {
    let roll = outcome.roll;
    match outcome.kind {
        MoveKind::Blocked => format!(
            "{} rolled {} but needs exactly {} to win. No movement!",
            name,
            roll,
            winning_position.saturating_sub(outcome.from)
        ),
        MoveKind::Advanced => {
            format!("{} rolled {} and moved to position {}", name, roll, outcome.to)
        }
        MoveKind::Snake => format!(
            "{} rolled {} and moved to position {}\n\
             🐍 Oh no! {} hit a snake and slid down to position {}",
            name, roll, outcome.landed, name, outcome.to
        ),
        MoveKind::Ladder => format!(
            "{} rolled {} and moved to position {}\n🪜 Great! {} climbed a ladder to position {}",
            name, roll, outcome.landed, name, outcome.to
        ),
    }
}

/// Standings and statistics once the game is over.
#[must_use]
pub fn final_report(result: &GameResult, board: &Board, players: &[Player]) -> String {
    let mut out = String::from("=== FINAL RESULTS ===\n");

    if !result.reached_goal() {
        out.push_str("Game ended due to maximum turn limit reached.\n");
    }

    out.push_str("Final Standings:\n");
    for (rank, player) in standings(players).iter().enumerate() {
        if player.is_winner() {
            let _ = writeln!(out, "{}. {} 🏆 WINNER!", rank + 1, player.name());
        } else {
            let _ = writeln!(
                out,
                "{}. {} (Position: {})",
                rank + 1,
                player.name(),
                player.position()
            );
        }
    }

    out.push_str("\nGame Statistics:\n");
    let _ = writeln!(out, "- Total players: {}", players.len());
    let _ = writeln!(out, "- Board size: {}", board.size());
    let _ = writeln!(out, "- Snakes on board: {}", board.snakes().count());
    let _ = writeln!(out, "- Ladders on board: {}", board.ladders().count());
    let _ = writeln!(out, "- Trigger cells: {}", board.transitions().trigger_count());

    out
}
