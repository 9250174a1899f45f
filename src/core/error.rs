use crate::combat::moves::MoveKind;
use thiserror::Error;

/// Why a requested move is not currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Actor does not have the stamina the move costs.
    InsufficientStamina { required: u32, available: u32 },
    /// Special move is still cooling down.
    OnCooldown { remaining: u32 },
    /// Actor has already been defeated.
    Defeated,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::InsufficientStamina {
                required,
                available,
            } => write!(f, "not enough stamina (need {required}, have {available})"),
            IllegalMoveReason::OnCooldown { remaining } => {
                write!(f, "on cooldown ({remaining} turns remaining)")
            }
            IllegalMoveReason::Defeated => write!(f, "fighter is already defeated"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("Unknown match: {0}")]
    UnknownMatch(String),

    #[error("Illegal move {kind:?}: {reason}")]
    IllegalMove {
        kind: MoveKind,
        reason: IllegalMoveReason,
    },

    #[error("Match is already over")]
    MatchAlreadyOver,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
