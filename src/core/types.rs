//! Core type definitions used throughout the codebase

use crate::combat::moves::MoveKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a running match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which fighter in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Result of a finished match
///
/// Both fighters reaching 0 HP in the same phase is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

/// Opponent difficulty profile, immutable for the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Exponent applied to move weights before sampling.
    ///
    /// Above 1.0 sharpens the distribution toward the best-scored move,
    /// below 1.0 flattens it toward uniform choice among legal moves.
    pub fn sharpness(self) -> f32 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 2.5,
        }
    }

    /// Additive hit-probability adjustment for the opponent's attack rolls.
    ///
    /// Hard opponents hit at each move's nominal probability; easier ones
    /// are penalized.
    pub fn accuracy_skew(self) -> f32 {
        match self {
            Difficulty::Easy => -0.15,
            Difficulty::Medium => -0.05,
            Difficulty::Hard => 0.0,
        }
    }

    /// Per-move weight multiplier applied to the opponent's preferences.
    ///
    /// Easy pushes the opponent toward passive moves, hard toward offense.
    pub fn move_bias(self, kind: MoveKind) -> f32 {
        match self {
            Difficulty::Easy => match kind {
                MoveKind::Punch => 0.5,
                MoveKind::Kick => 0.4,
                MoveKind::Special => 0.4,
                MoveKind::Block => 1.6,
                MoveKind::Evade => 1.5,
                MoveKind::Rest => 1.5,
            },
            Difficulty::Medium => 1.0,
            Difficulty::Hard => match kind {
                MoveKind::Punch => 1.8,
                MoveKind::Kick => 1.7,
                MoveKind::Special => 1.6,
                MoveKind::Block => 0.4,
                MoveKind::Evade => 0.5,
                MoveKind::Rest => 0.5,
            },
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}
