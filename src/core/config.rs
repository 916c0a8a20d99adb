//! Game setup configuration.
//!
//! `GameConfig` is the setup capability: it carries everything needed to
//! start a game, validates setup policy, and builds the players, board and
//! die the turn engine consumes. It can be built in code with the `with_*`
//! methods or loaded from TOML:
//!
//! ```toml
//! players = ["Alice", "Bob"]
//! board_size = 30
//! standard_layout = false
//! die_sides = 6
//! seed = 7
//!
//! [[snakes]]
//! from = 27
//! to = 3
//!
//! [[ladders]]
//! from = 2
//! to = 21
//! ```

use std::path::Path;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dice::SeededDie;
use super::error::GameError;
use super::player::Player;
use super::rng::GameRng;
use crate::board::{Board, Position, Transition, TransitionKind};

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players setup will accept.
pub const MAX_PLAYERS: usize = 8;
/// Smallest board setup will accept.
pub const MIN_BOARD_SIZE: Position = 10;
/// Fewest die faces setup will accept.
pub const MIN_DIE_SIDES: u32 = 2;
/// Most die faces setup will accept.
pub const MAX_DIE_SIDES: u32 = 20;
/// Default turn cap for auto-play.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// A snake or ladder as written in a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Trigger cell.
    pub from: Position,
    /// Destination cell.
    pub to: Position,
}

impl TransitionSpec {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// TOML integers are `i64`; wider seeds go through a string.
mod seed_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match *seed {
            None => serializer.serialize_none(),
            Some(seed) => match i64::try_from(seed) {
                Ok(small) => serializer.serialize_some(&Repr::Int(small)),
                Err(_) => serializer.serialize_some(&Repr::Text(seed.to_string())),
            },
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Int(seed)) => u64::try_from(seed)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("seed must not be negative, got {}", seed))),
            Some(Repr::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid seed '{}': {}", text, e))),
        }
    }
}

/// Complete setup for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names in turn order. Blank names become `Player{n}`.
    pub players: Vec<String>,

    /// Number of cells; also the winning position.
    pub board_size: Position,

    /// Start from the default snakes and ladders (only on a 100-cell board).
    pub standard_layout: bool,

    /// Faces on the die.
    pub die_sides: u32,

    /// RNG seed. `None` draws a fresh seed.
    ///
    /// Seeds above `i64::MAX` do not fit a TOML integer and are written as
    /// strings; both forms are accepted when reading.
    #[serde(with = "seed_repr", skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Turn cap for auto-play.
    pub max_turns: u32,

    /// Extra snakes as head -> tail.
    pub snakes: Vec<TransitionSpec>,

    /// Extra ladders as bottom -> top.
    pub ladders: Vec<TransitionSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec!["Player1".to_string(), "Player2".to_string()],
            board_size: Board::STANDARD_SIZE,
            standard_layout: true,
            die_sides: SeededDie::STANDARD_SIDES,
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
            snakes: Vec::new(),
            ladders: Vec::new(),
        }
    }
}

/// Everything the turn engine needs, already validated.
#[derive(Debug)]
pub struct GameSetup {
    pub players: Vec<Player>,
    pub board: Board,
    pub die: SeededDie,
}

/// Errors loading or validating a configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("failed to read config: {_0}")]
    Io(std::io::Error),

    /// The file is not valid TOML for a `GameConfig`.
    #[display("failed to parse config: {_0}")]
    Parse(toml::de::Error),

    /// The values parsed but break setup policy.
    #[display("{_0}")]
    Invalid(GameError),
}

impl GameConfig {
    /// Create a config for the given player names with standard settings.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: Position) -> Self {
        self.board_size = size;
        self
    }

    /// Enable or disable the default snakes and ladders.
    #[must_use]
    pub fn with_standard_layout(mut self, enabled: bool) -> Self {
        self.standard_layout = enabled;
        self
    }

    /// Add a snake.
    #[must_use]
    pub fn with_snake(mut self, head: Position, tail: Position) -> Self {
        self.snakes.push(TransitionSpec::new(head, tail));
        self
    }

    /// Add a ladder.
    #[must_use]
    pub fn with_ladder(mut self, bottom: Position, top: Position) -> Self {
        self.ladders.push(TransitionSpec::new(bottom, top));
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the auto-play turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check setup policy without building anything.
    pub fn validate(&self) -> Result<(), GameError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::setup(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, count
            )));
        }
        if self.board_size < MIN_BOARD_SIZE {
            return Err(GameError::setup(format!(
                "board size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.board_size
            )));
        }
        if !(MIN_DIE_SIDES..=MAX_DIE_SIDES).contains(&self.die_sides) {
            return Err(GameError::setup(format!(
                "die must have {}-{} sides, got {}",
                MIN_DIE_SIDES, MAX_DIE_SIDES, self.die_sides
            )));
        }
        if self.max_turns == 0 {
            return Err(GameError::setup("turn cap must be at least 1"));
        }
        self.build_board().map(|_| ())
    }

    /// Player names with blanks replaced by `Player{n}`.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    format!("Player{}", i + 1)
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }

    fn build_board(&self) -> Result<Board, GameError> {
        let mut board = Board::new(self.board_size)?;
        if self.standard_layout {
            if self.board_size == Board::STANDARD_SIZE {
                board.add_standard_layout();
            } else {
                debug!(
                    board_size = self.board_size,
                    "standard layout only applies to a 100-cell board; skipping"
                );
            }
        }
        for spec in &self.snakes {
            board.add(Transition::new(TransitionKind::Snake, spec.from, spec.to)?)?;
        }
        for spec in &self.ladders {
            board.add(Transition::new(TransitionKind::Ladder, spec.from, spec.to)?)?;
        }
        Ok(board)
    }

    /// Validate and produce the players, board and die for a new game.
    pub fn build(&self) -> Result<GameSetup, GameError> {
        self.validate()?;

        let players = self.player_names().into_iter().map(Player::new).collect();
        let board = self.build_board()?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), sides = self.die_sides, "die ready");
        let die = SeededDie::with_rng(self.die_sides, rng);

        Ok(GameSetup {
            players,
            board,
            die,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Die;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.board_size, 100);
        assert!(config.standard_layout);
        assert_eq!(config.die_sides, 6);
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(["Alice", "Bob", "Carol"])
            .with_board_size(30)
            .with_standard_layout(false)
            .with_snake(27, 3)
            .with_ladder(2, 21)
            .with_die_sides(8)
            .with_seed(9)
            .with_max_turns(50);

        assert_eq!(config.players, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(config.snakes, vec![TransitionSpec::new(27, 3)]);
        assert_eq!(config.ladders, vec![TransitionSpec::new(2, 21)]);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_count_policy() {
        assert!(GameConfig::new(["Solo"]).validate().is_err());
        assert!(GameConfig::new((1..=8).map(|i| format!("P{}", i))).validate().is_ok());
        assert!(GameConfig::new((1..=9).map(|i| format!("P{}", i))).validate().is_err());
    }

    #[test]
    fn test_board_and_die_policy() {
        let base = GameConfig::new(["A", "B"]);
        assert!(base.clone().with_board_size(9).validate().is_err());
        assert!(base.clone().with_board_size(10).validate().is_ok());
        assert!(base.clone().with_die_sides(1).validate().is_err());
        assert!(base.clone().with_die_sides(21).validate().is_err());
        assert!(base.clone().with_max_turns(0).validate().is_err());
    }

    #[test]
    fn test_out_of_bounds_transition_rejected() {
        let config = GameConfig::new(["A", "B"]).with_board_size(20).with_ladder(5, 25);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidDefinition { .. })
        ));

        let config = GameConfig::new(["A", "B"]).with_snake(5, 15);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn test_blank_names_filled() {
        let config = GameConfig::new(["", "  Bob  ", " "]);
        assert_eq!(config.player_names(), vec!["Player1", "Bob", "Player3"]);
    }

    #[test]
    fn test_build_standard() {
        let setup = GameConfig::new(["A", "B"]).with_seed(1).build().unwrap();
        assert_eq!(setup.players.len(), 2);
        assert_eq!(setup.board.size(), 100);
        assert_eq!(setup.board.snakes().count(), 7);
        assert_eq!(setup.die.sides(), 6);
        assert_eq!(setup.die.seed(), 1);
    }

    #[test]
    fn test_standard_layout_skipped_on_other_sizes() {
        let setup = GameConfig::new(["A", "B"])
            .with_board_size(50)
            .with_ladder(3, 40)
            .with_seed(1)
            .build()
            .unwrap();
        assert_eq!(setup.board.transitions().len(), 1);
    }

    #[test]
    fn test_toml_roundtrip() {
        let text = r#"
            players = ["Alice", "Bob"]
            board_size = 30
            standard_layout = false
            die_sides = 4
            seed = 7

            [[snakes]]
            from = 27
            to = 3

            [[ladders]]
            from = 2
            to = 21
        "#;

        let config = GameConfig::from_toml_str(text).unwrap();
        assert_eq!(config.players, vec!["Alice", "Bob"]);
        assert_eq!(config.board_size, 30);
        assert_eq!(config.die_sides, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);

        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_toml_str(&serialized).unwrap(), config);
    }

    #[test]
    fn test_toml_wide_seed_roundtrip() {
        let config = GameConfig::default().with_seed(u64::MAX);
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("seed = \"18446744073709551615\""));
        assert_eq!(GameConfig::from_toml_str(&serialized).unwrap(), config);

        let config = GameConfig::default().with_seed(i64::MAX as u64);
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("seed = 9223372036854775807"));
        assert_eq!(GameConfig::from_toml_str(&serialized).unwrap(), config);
    }

    #[test]
    fn test_toml_seed_forms() {
        let config = GameConfig::from_toml_str("seed = \"12345678901234567890\"").unwrap();
        assert_eq!(config.seed, Some(12_345_678_901_234_567_890));

        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config.seed, None);
        assert!(!toml::to_string(&config).unwrap().contains("seed"));

        assert!(matches!(
            GameConfig::from_toml_str("seed = -1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            GameConfig::from_toml_str("board_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("players = [\"Solo\"]"),
            Err(ConfigError::Invalid(GameError::InvalidSetup { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/snakes-ladders.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
