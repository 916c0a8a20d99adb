//! The standard 100-cell layout.

use super::track::Board;
use super::Position;

/// Default snakes as `(head, tail)`.
pub const STANDARD_SNAKES: [(Position, Position); 7] = [
    (99, 54),
    (95, 67),
    (88, 24),
    (62, 19),
    (64, 60),
    (54, 34),
    (17, 7),
];

/// Default ladders as `(bottom, top)`.
///
/// The ladder at 54 shares its trigger with a snake. Ladders are registered
/// first, so the snake is the one that fires.
pub const STANDARD_LADDERS: [(Position, Position); 6] = [
    (4, 56),
    (12, 50),
    (14, 55),
    (22, 58),
    (41, 79),
    (54, 88),
];

impl Board {
    /// The standard 100-cell board with its default snakes and ladders.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::new(Board::STANDARD_SIZE).expect("standard size is non-zero");
        board.add_standard_layout();
        board
    }

    /// Register the default ladders then snakes, so a snake wins any shared
    /// trigger cell.
    ///
    /// Definitions that do not fit on a smaller board are skipped.
    pub fn add_standard_layout(&mut self) {
        for &(bottom, top) in &STANDARD_LADDERS {
            let _ = self.add_ladder(bottom, top);
        }
        for &(head, tail) in &STANDARD_SNAKES {
            let _ = self.add_snake(head, tail);
        }
    }
}
