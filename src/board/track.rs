//! The board: a linear track with snakes and ladders.
//!
//! Movement resolution is a pure function of the current position, the
//! roll and the transition table. The board never writes to a player; the
//! caller commits the returned position.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

use super::transition::{Transition, TransitionKind, TransitionTable};
use super::Position;

/// How a single move was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The roll would overshoot the winning cell; the player stays put.
    Blocked,
    /// Landed on an ordinary cell.
    Advanced,
    /// Landed on a snake head and slid to its tail.
    Snake,
    /// Landed on a ladder bottom and climbed to its top.
    Ladder,
}

/// Result of [`Board::resolve_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Position before the move.
    pub from: Position,
    /// The roll that was applied.
    pub roll: u32,
    /// Cell landed on before any snake or ladder. Equals `from` when blocked.
    pub landed: Position,
    /// Final resolved position.
    pub to: Position,
    /// How the move resolved.
    pub kind: MoveKind,
}

impl MoveOutcome {
    /// The resolved final position.
    #[must_use]
    pub fn final_position(&self) -> Position {
        self.to
    }

    /// Did the player's position change?
    #[must_use]
    pub fn moved(&self) -> bool {
        self.to != self.from
    }
}

/// A numbered track `1..=size` with its transition table.
///
/// Position 0 is the off-board start; `size` is the winning cell.
#[derive(Clone, Debug)]
pub struct Board {
    size: Position,
    table: TransitionTable,
}

impl Board {
    /// Size of the standard board.
    pub const STANDARD_SIZE: Position = 100;

    /// Create an empty board with `size` cells.
    pub fn new(size: Position) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::setup("board needs at least 1 cell"));
        }
        Ok(Self {
            size,
            table: TransitionTable::new(),
        })
    }

    /// Number of cells on the track.
    #[must_use]
    pub fn size(&self) -> Position {
        self.size
    }

    /// The single terminal cell. Always equal to the size.
    #[must_use]
    pub fn winning_position(&self) -> Position {
        self.size
    }

    /// Add a snake from `head` down to `tail`.
    pub fn add_snake(&mut self, head: Position, tail: Position) -> Result<(), GameError> {
        self.add(Transition::snake(head, tail)?)
    }

    /// Add a ladder from `bottom` up to `top`.
    pub fn add_ladder(&mut self, bottom: Position, top: Position) -> Result<(), GameError> {
        self.add(Transition::ladder(bottom, top)?)
    }

    /// Add an already-built transition after checking it fits on this board.
    ///
    /// A trigger that is already taken is silently overwritten for lookups.
    pub fn add(&mut self, transition: Transition) -> Result<(), GameError> {
        if transition.high() > self.size || transition.low() < 1 {
            return Err(GameError::definition(
                transition.kind(),
                transition.trigger(),
                transition.destination(),
                "must lie within the board",
            ));
        }
        self.table.insert(transition);
        Ok(())
    }

    /// Builder form of [`Board::add`].
    pub fn with(mut self, transition: Transition) -> Result<Self, GameError> {
        self.add(transition)?;
        Ok(self)
    }

    /// The transition table.
    #[must_use]
    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    /// The active transition on `position`, if any.
    #[must_use]
    pub fn transition_at(&self, position: Position) -> Option<&Transition> {
        self.table.get(position)
    }

    /// Registered snakes, in registration order.
    pub fn snakes(&self) -> impl Iterator<Item = &Transition> {
        self.table.snakes()
    }

    /// Registered ladders, in registration order.
    pub fn ladders(&self) -> impl Iterator<Item = &Transition> {
        self.table.ladders()
    }

    /// Resolve one move from `current` by `roll`.
    ///
    /// - Overshooting the winning cell is refused: the position is unchanged.
    /// - Landing on a trigger applies exactly one transition. A destination
    ///   that is itself a trigger does not fire again.
    #[must_use]
    pub fn resolve_move(&self, current: Position, roll: u32) -> MoveOutcome {
        let candidate = current.saturating_add(roll);

        if candidate > self.winning_position() {
            return MoveOutcome {
                from: current,
                roll,
                landed: current,
                to: current,
                kind: MoveKind::Blocked,
            };
        }

        let (to, kind) = match self.table.get(candidate) {
            Some(t) => (
                t.destination(),
                match t.kind() {
                    TransitionKind::Snake => MoveKind::Snake,
                    TransitionKind::Ladder => MoveKind::Ladder,
                },
            ),
            None => (candidate, MoveKind::Advanced),
        };

        MoveOutcome {
            from: current,
            roll,
            landed: candidate,
            to,
            kind,
        }
    }

    /// Has a player at `position` reached the goal?
    #[must_use]
    pub fn has_won(&self, position: Position) -> bool {
        position >= self.winning_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_100() -> Board {
        Board::new(100).unwrap()
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Board::new(0), Err(GameError::InvalidSetup { .. })));
    }

    #[test]
    fn test_snake_bounds() {
        let mut board = board_100();
        assert!(board.add_snake(101, 50).is_err());
        assert!(board.add_snake(50, 0).is_err());
        assert!(board.add_snake(50, 60).is_err());
        assert!(board.add_snake(100, 1).is_ok());
        assert!(board.transition_at(100).is_some());
    }

    #[test]
    fn test_ladder_bounds() {
        let mut board = board_100();
        assert!(board.add_ladder(0, 50).is_err());
        assert!(board.add_ladder(50, 101).is_err());
        assert!(board.add_ladder(60, 50).is_err());
        assert!(board.add_ladder(1, 100).is_ok());
    }

    #[test]
    fn test_failed_add_leaves_table_untouched() {
        let mut board = board_100();
        let _ = board.add_ladder(90, 120);
        assert!(board.transitions().is_empty());
    }

    #[test]
    fn test_plain_move() {
        let outcome = board_100().resolve_move(0, 6);
        assert_eq!(outcome.kind, MoveKind::Advanced);
        assert_eq!(outcome.landed, 6);
        assert_eq!(outcome.final_position(), 6);
        assert!(outcome.moved());
    }

    #[test]
    fn test_overshoot_blocked() {
        let outcome = board_100().resolve_move(95, 10);
        assert_eq!(outcome.kind, MoveKind::Blocked);
        assert_eq!(outcome.final_position(), 95);
        assert!(!outcome.moved());
    }

    #[test]
    fn test_exact_landing_on_goal() {
        let board = board_100();
        let outcome = board.resolve_move(94, 6);
        assert_eq!(outcome.final_position(), 100);
        assert!(board.has_won(outcome.final_position()));
    }

    #[test]
    fn test_snake_and_ladder() {
        let board = board_100()
            .with(Transition::snake(99, 54).unwrap())
            .unwrap()
            .with(Transition::ladder(4, 56).unwrap())
            .unwrap();

        let slide = board.resolve_move(97, 2);
        assert_eq!(slide.kind, MoveKind::Snake);
        assert_eq!(slide.landed, 99);
        assert_eq!(slide.final_position(), 54);

        let climb = board.resolve_move(1, 3);
        assert_eq!(climb.kind, MoveKind::Ladder);
        assert_eq!(climb.landed, 4);
        assert_eq!(climb.final_position(), 56);
    }

    #[test]
    fn test_no_chaining() {
        let mut board = board_100();
        board.add_ladder(10, 20).unwrap();
        board.add_ladder(20, 30).unwrap();

        assert_eq!(board.resolve_move(5, 5).final_position(), 20);
    }

    #[test]
    fn test_has_won() {
        let board = board_100();
        assert!(!board.has_won(0));
        assert!(!board.has_won(99));
        assert!(board.has_won(100));
        assert!(board.has_won(101));
    }

    #[test]
    fn test_saturating_roll() {
        let outcome = board_100().resolve_move(50, u32::MAX);
        assert_eq!(outcome.kind, MoveKind::Blocked);
        assert_eq!(outcome.final_position(), 50);
    }
}
