//! Command-line interface for snakes-ladders.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use snakes_ladders::core::{GameConfig, TransitionSpec};
use snakes_ladders::session::{PlayMode, SessionConfig};

/// Snakes and Ladders - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "snakes-ladders")]
#[command(about = "Snakes and Ladders for 2-8 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML game configuration. Flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How turns are triggered
    #[arg(short, long, value_enum, default_value_t = Mode::Quick)]
    pub mode: Mode,

    /// Player name, in turn order (repeat for each player)
    #[arg(short, long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Number of squares on the track
    #[arg(long)]
    pub board_size: Option<u32>,

    /// Number of faces on the die
    #[arg(long)]
    pub die_sides: Option<u32>,

    /// Extra snake as HEAD:TAIL (repeatable)
    #[arg(long = "snake", value_name = "HEAD:TAIL", value_parser = parse_pair)]
    pub snakes: Vec<TransitionSpec>,

    /// Extra ladder as BOTTOM:TOP (repeatable)
    #[arg(long = "ladder", value_name = "BOTTOM:TOP", value_parser = parse_pair)]
    pub ladders: Vec<TransitionSpec>,

    /// Skip the classic snakes and ladders on a 100-square board
    #[arg(long)]
    pub no_standard_layout: bool,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Turn cap before the leader is declared the winner. Quick play
    /// defaults to 1000; interactive play is uncapped unless this is set.
    #[arg(long)]
    pub max_turns: Option<u32>,

    /// Pause after each turn, in milliseconds
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,
}

/// Play mode as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Auto-play every turn
    Quick,
    /// Press Enter before each roll
    Interactive,
}

impl From<Mode> for PlayMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Quick => PlayMode::Quick,
            Mode::Interactive => PlayMode::Interactive,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of a base configuration.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if !self.players.is_empty() {
            config.players = self.players.clone();
        }
        if let Some(size) = self.board_size {
            config = config.with_board_size(size);
        }
        if let Some(sides) = self.die_sides {
            config = config.with_die_sides(sides);
        }
        if self.no_standard_layout {
            config = config.with_standard_layout(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_turns) = self.max_turns {
            config = config.with_max_turns(max_turns);
        }
        config.snakes.extend(self.snakes.iter().copied());
        config.ladders.extend(self.ladders.iter().copied());
        config
    }

    /// Session settings for the chosen mode.
    ///
    /// Quick play always carries the config's cap. Interactive play is only
    /// capped when `--max-turns` is given.
    pub fn session_config(&self, config: &GameConfig) -> SessionConfig {
        let session = SessionConfig::new()
            .with_mode(self.mode.into())
            .with_turn_delay(Duration::from_millis(self.delay_ms));
        match self.mode {
            Mode::Quick => session.with_max_turns(config.max_turns),
            Mode::Interactive => match self.max_turns {
                Some(cap) => session.with_max_turns(cap),
                None => session,
            },
        }
    }
}

/// Parse `FROM:TO` into a transition spec.
fn parse_pair(text: &str) -> Result<TransitionSpec, String> {
    let (from, to) = text
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", text))?;
    let from = from
        .trim()
        .parse()
        .map_err(|e| format!("bad start square '{}': {}", from, e))?;
    let to = to
        .trim()
        .parse()
        .map_err(|e| format!("bad end square '{}': {}", to, e))?;
    Ok(TransitionSpec::new(from, to))
}
