//! Opponent behavioral modes
//!
//! The opponent runs a small state machine over seven modes. Transitions
//! are a fixed-priority threshold cascade re-evaluated every turn from the
//! current fight state, so the mode is a pure function of its inputs: the
//! highest-priority condition that holds wins, and Aggressive is the
//! fallback.
//!
//! Each mode carries a doctrine: a base weight per move kind that the
//! fuzzy controller blends into its scores.

use crate::combat::MoveKind;
use crate::core::config;
use serde::{Deserialize, Serialize};

/// Behavioral mode, checked in declaration order (Exhausted first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Out of stamina, must recover before anything else
    Exhausted,
    /// Critically hurt, gambles on high-risk moves
    Desperation,
    /// The player is nearly down, hunt the finishing blow
    Finisher,
    /// Hurt, plays it safe
    Wounded,
    /// The player is predictable, punish the pattern
    Counter,
    /// Under pressure, turtles up
    Defensive,
    /// Healthy and confident, leads with offense
    Aggressive,
}

/// Inputs the transition cascade reads, all precomputed by the controller
#[derive(Debug, Clone, Copy)]
pub struct ModeContext {
    pub own_hp: f32,
    pub own_stamina: f32,
    pub player_hp: f32,
    pub special_ready: bool,
    pub pattern_strength: f32,
    pub defensive_score: f32,
}

impl Mode {
    /// Pick the mode for this turn. Priority runs from survival concerns
    /// down to opportunism: recovery and desperation outrank the kill
    /// hunt, which outranks caution, which outranks pattern punishment.
    pub fn evaluate(ctx: &ModeContext) -> Mode {
        if ctx.own_stamina < config::EXHAUSTED_STAMINA_THRESHOLD {
            Mode::Exhausted
        } else if ctx.own_hp < config::DESPERATE_HP_THRESHOLD {
            Mode::Desperation
        } else if ctx.player_hp < config::FINISHER_HP_THRESHOLD
            && ctx.special_ready
            && ctx.own_stamina >= config::FINISHER_STAMINA_THRESHOLD
        {
            Mode::Finisher
        } else if ctx.own_hp < config::WOUNDED_HP_THRESHOLD {
            Mode::Wounded
        } else if ctx.pattern_strength > config::COUNTER_PATTERN_THRESHOLD && ctx.own_hp > 0.4 {
            Mode::Counter
        } else if ctx.defensive_score >= config::DEFENSIVE_SCORE_THRESHOLD {
            Mode::Defensive
        } else {
            Mode::Aggressive
        }
    }

    /// Doctrine weight for a move kind. Unnormalized; the controller
    /// multiplies these into the fuzzy scores and normalizes at the end.
    pub fn doctrine_weight(self, kind: MoveKind) -> f32 {
        use MoveKind::*;
        match self {
            Mode::Aggressive => match kind {
                Punch => 0.55,
                Kick => 0.40,
                Special => 0.25,
                Block => 0.05,
                Evade => 0.08,
                Rest => 0.07,
            },
            Mode::Defensive => match kind {
                Punch => 0.10,
                Kick => 0.08,
                Special => 0.05,
                Block => 0.50,
                Evade => 0.25,
                Rest => 0.10,
            },
            Mode::Counter => match kind {
                Punch => 0.40,
                Kick => 0.30,
                Special => 0.30,
                Block => 0.15,
                Evade => 0.10,
                Rest => 0.05,
            },
            Mode::Wounded => match kind {
                Punch => 0.15,
                Kick => 0.10,
                Special => 0.10,
                Block => 0.45,
                Evade => 0.20,
                Rest => 0.10,
            },
            Mode::Desperation => match kind {
                Punch => 0.20,
                Kick => 0.15,
                Special => 0.60,
                Block => 0.05,
                Evade => 0.10,
                Rest => 0.05,
            },
            Mode::Exhausted => match kind {
                Punch => 0.10,
                Kick => 0.05,
                Special => 0.02,
                Block => 0.20,
                Evade => 0.15,
                Rest => 0.53,
            },
            Mode::Finisher => match kind {
                Punch => 0.15,
                Kick => 0.12,
                Special => 0.70,
                Block => 0.03,
                Evade => 0.08,
                Rest => 0.04,
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Aggressive => "Aggressive",
            Mode::Defensive => "Defensive",
            Mode::Counter => "Counter",
            Mode::Wounded => "Wounded",
            Mode::Desperation => "Desperation",
            Mode::Exhausted => "Exhausted",
            Mode::Finisher => "Finisher",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Aggressive => "Confident and healthy, focuses on offense",
            Mode::Defensive => "Anticipates danger, focuses on defense",
            Mode::Counter => "Reads the player's pattern and punishes it",
            Mode::Wounded => "Low on health, plays safe",
            Mode::Desperation => "Critically hurt, takes big risks",
            Mode::Exhausted => "Low on stamina, focuses on recovery",
            Mode::Finisher => "Hunts the finishing blow",
        }
    }
}

/// How threatening the player looks right now, in `[0, 1]`.
pub fn threat_level(player_hp: f32, player_stamina: f32, last_player_move: Option<MoveKind>) -> f32 {
    let action_threat = match last_player_move {
        Some(MoveKind::Special) => 0.8,
        Some(MoveKind::Punch) | Some(MoveKind::Kick) => 0.4,
        Some(MoveKind::Rest) => 0.1,
        _ => 0.2,
    };
    ((1.0 - player_hp) * 0.4 + player_stamina * 0.4 + action_threat).clamp(0.0, 1.0)
}

/// Defensive-pressure score that drives the Defensive transition.
pub fn defensive_score(
    threat: f32,
    last_player_move: Option<MoveKind>,
    heavy_streak: usize,
    own_hp: f32,
) -> f32 {
    let mut score = threat * 0.4;
    if last_player_move == Some(MoveKind::Special) {
        score += 0.3;
    }
    if heavy_streak >= 2 {
        score += 0.2;
    } else if heavy_streak >= 1 {
        score += 0.1;
    }
    if own_hp < 0.4 {
        score += 0.2;
    } else if own_hp < 0.6 {
        score += 0.1;
    }
    score.min(1.0)
}
