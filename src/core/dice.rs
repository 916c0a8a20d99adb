//! Die capability.
//!
//! The turn engine only needs one thing from a die: a value in
//! `[1, sides]` each time it asks. How that value is produced is up to
//! the implementation.
//!
//! - `SeededDie`: uniform rolls from a deterministic ChaCha8 stream.
//! - `LoadedDie`: replays a fixed script of faces, for tests and demos.

use super::rng::{GameRng, GameRngState};

/// A source of die rolls.
pub trait Die {
    /// Number of faces. Rolls are always in `[1, sides]`.
    fn sides(&self) -> u32;

    /// Roll once.
    fn roll(&mut self) -> u32;

    /// Roll `count` times and return the sum.
    fn roll_many(&mut self, count: u32) -> u32 {
        (0..count).map(|_| self.roll()).sum()
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn sides(&self) -> u32 {
        (**self).sides()
    }

    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// Uniform die backed by a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct SeededDie {
    rng: GameRng,
    sides: u32,
}

impl SeededDie {
    /// Standard six-sided die.
    pub const STANDARD_SIDES: u32 = 6;

    /// Create a die with the given number of sides and seed.
    #[must_use]
    pub fn new(sides: u32, seed: u64) -> Self {
        Self::with_rng(sides, GameRng::new(seed))
    }

    /// Create a die around an existing RNG.
    #[must_use]
    pub fn with_rng(sides: u32, rng: GameRng) -> Self {
        assert!(sides > 0, "A die needs at least 1 side");
        Self { rng, sides }
    }

    /// Seed of the underlying RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the RNG position so the same roll sequence can be resumed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a die from a captured RNG position.
    #[must_use]
    pub fn from_state(sides: u32, state: &GameRngState) -> Self {
        Self::with_rng(sides, GameRng::from_state(state))
    }
}

impl Die for SeededDie {
    fn sides(&self) -> u32 {
        self.sides
    }

    fn roll(&mut self) -> u32 {
        self.rng.gen_range_inclusive(1..=self.sides)
    }
}

/// A die that replays a fixed sequence of faces, cycling when exhausted.
///
/// ```
/// use snakes_ladders::core::{Die, LoadedDie};
///
/// let mut die = LoadedDie::new([3, 5]);
/// assert_eq!(die.roll(), 3);
/// assert_eq!(die.roll(), 5);
/// assert_eq!(die.roll(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LoadedDie {
    faces: Vec<u32>,
    cursor: usize,
}

impl LoadedDie {
    /// Create a loaded die from its script.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "A loaded die needs at least one face");
        assert!(faces.iter().all(|&f| f > 0), "Die faces must be positive");
        Self { faces, cursor: 0 }
    }

    /// A die that always rolls the same value.
    #[must_use]
    pub fn always(face: u32) -> Self {
        Self::new([face])
    }
}

impl Die for LoadedDie {
    fn sides(&self) -> u32 {
        self.faces.iter().copied().max().unwrap_or(1)
    }

    fn roll(&mut self) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
