//! Snakes, ladders and the trigger lookup table.
//!
//! Both kinds reduce to the same shape for movement: a trigger cell and a
//! destination cell. The kind tag only matters for rendering and narration.
//!
//! The table does not enforce unique triggers. Registering a second
//! definition on an occupied trigger replaces the first for lookups
//! (last-write-wins across snakes and ladders alike); both remain in the
//! registration-ordered listing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::GameError;

use super::Position;

/// Which way a transition moves the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Penalty: head -> tail, downwards.
    Snake,
    /// Shortcut: bottom -> top, upwards.
    Ladder,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Snake => write!(f, "snake"),
            TransitionKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A single snake or ladder.
///
/// Construction guarantees the direction matches the kind: snakes always go
/// down, ladders always go up. Bounds against a particular board are checked
/// when the transition is added to that board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    kind: TransitionKind,
    from: Position,
    to: Position,
}

impl Transition {
    /// A snake from `head` down to `tail`.
    pub fn snake(head: Position, tail: Position) -> Result<Self, GameError> {
        if head <= tail {
            return Err(GameError::definition(
                TransitionKind::Snake,
                head,
                tail,
                "head must be above tail",
            ));
        }
        Ok(Self {
            kind: TransitionKind::Snake,
            from: head,
            to: tail,
        })
    }

    /// A ladder from `bottom` up to `top`.
    pub fn ladder(bottom: Position, top: Position) -> Result<Self, GameError> {
        if bottom >= top {
            return Err(GameError::definition(
                TransitionKind::Ladder,
                bottom,
                top,
                "bottom must be below top",
            ));
        }
        Ok(Self {
            kind: TransitionKind::Ladder,
            from: bottom,
            to: top,
        })
    }

    /// Build a transition of the given kind.
    pub fn new(kind: TransitionKind, from: Position, to: Position) -> Result<Self, GameError> {
        match kind {
            TransitionKind::Snake => Self::snake(from, to),
            TransitionKind::Ladder => Self::ladder(from, to),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Trigger cell: snake head or ladder bottom.
    #[must_use]
    pub fn trigger(&self) -> Position {
        self.from
    }

    /// Destination cell: snake tail or ladder top.
    #[must_use]
    pub fn destination(&self) -> Position {
        self.to
    }

    /// Lowest cell the transition touches.
    #[must_use]
    pub fn low(&self) -> Position {
        self.from.min(self.to)
    }

    /// Highest cell the transition touches.
    #[must_use]
    pub fn high(&self) -> Position {
        self.from.max(self.to)
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TransitionKind::Snake => write!(f, "Snake({}→{})", self.from, self.to),
            TransitionKind::Ladder => write!(f, "Ladder({}→{})", self.from, self.to),
        }
    }
}

/// Trigger cell -> transition lookup.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    by_trigger: FxHashMap<Position, Transition>,
    registered: Vec<Transition>,
}

impl TransitionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition.
    ///
    /// Returns the transition it displaced if the trigger was already taken.
    pub fn insert(&mut self, transition: Transition) -> Option<Transition> {
        self.registered.push(transition);
        let displaced = self.by_trigger.insert(transition.trigger(), transition);
        if let Some(previous) = displaced {
            warn!(
                trigger = transition.trigger(),
                %previous,
                replacement = %transition,
                "trigger cell already registered; latest definition wins"
            );
        }
        displaced
    }

    /// The active transition triggered by landing on `position`.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Transition> {
        self.by_trigger.get(&position)
    }

    /// Every registered transition in registration order, including ones
    /// whose trigger was later overwritten.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.registered.iter()
    }

    /// Registered snakes in registration order.
    pub fn snakes(&self) -> impl Iterator<Item = &Transition> {
        self.of_kind(TransitionKind::Snake)
    }

    /// Registered ladders in registration order.
    pub fn ladders(&self) -> impl Iterator<Item = &Transition> {
        self.of_kind(TransitionKind::Ladder)
    }

    fn of_kind(&self, kind: TransitionKind) -> impl Iterator<Item = &Transition> {
        self.registered.iter().filter(move |t| t.kind() == kind)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Number of distinct trigger cells.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.by_trigger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}
