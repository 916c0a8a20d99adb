//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe index into the turn order, supporting 1-255 players.
//!
//! ## Player
//!
//! Name, board symbol, track position and winner flag. Positions are only
//! ever written by the turn engine that owns the player.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and follow turn order: the first player to
/// roll is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Symbol a player carries until the turn engine assigns the real one.
pub const PLACEHOLDER_SYMBOL: char = '?';

/// Symbols handed out in turn order. Players past the tenth keep their
/// placeholder.
pub const PLAYER_SYMBOLS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: char,
    position: Position,
    is_winner: bool,
}

impl Player {
    /// Create a player at the start position with a placeholder symbol.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_symbol(name, PLACEHOLDER_SYMBOL)
    }

    /// Create a player with an explicit symbol.
    pub fn with_symbol(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
            position: 0,
            is_winner: false,
        }
    }

    /// Set the starting position (builder pattern).
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Single-character board marker.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Current track position (0 = not yet on the board).
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Has this player been declared the winner?
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.is_winner
    }

    pub(crate) fn set_symbol(&mut self, symbol: char) {
        self.symbol = symbol;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn mark_winner(&mut self) {
        self.is_winner = true;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at position {}", self.name, self.symbol, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Alice");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.symbol(), PLACEHOLDER_SYMBOL);
        assert_eq!(player.position(), 0);
        assert!(!player.is_winner());
    }

    #[test]
    fn test_player_display() {
        let player = Player::with_symbol("Bob", '2').at(17);
        assert_eq!(player.to_string(), "Bob (2) at position 17");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::with_symbol("Carol", '3').at(42);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
