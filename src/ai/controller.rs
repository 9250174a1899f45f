//! The opponent's decision pipeline
//!
//! One brain per match. Each turn it reads the fight state, picks a
//! behavioral mode, runs the fuzzy rule base, blends in the pattern
//! predictor and the difficulty profile, then samples a legal move from
//! the resulting weights. The chain of modifiers:
//!
//!   fuzzy scores -> prediction boosts -> mode doctrine -> difficulty bias
//!   -> sharpening exponent -> legality filter -> normalized sample
//!
//! Rest is the unconditional fallback: it is always legal for a living
//! fighter, so the pipeline can never come up empty-handed.

use crate::combat::moves::check_legal;
use crate::combat::{FighterState, MoveKind};
use crate::core::config;
use crate::core::types::Difficulty;
use crate::roster::CharacterProfile;
use rand::distributions::{Distribution, WeightedIndex};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use super::fuzzy::{self, FuzzyInputs};
use super::mode::{self, Mode, ModeContext};
use super::pattern::MoveMemory;

/// Minimum prediction confidence before the brain reacts to it at all
const PREDICTION_REACT_THRESHOLD: f32 = 0.6;
/// Confidence needed to pre-commit a hard counter to an attack
const PREDICTION_COUNTER_THRESHOLD: f32 = 0.7;
/// Floor added to the fuzzy score before the doctrine multiplies in, so a
/// mode can still reach for a move the rule base was silent about
const FUZZY_SCORE_FLOOR: f32 = 0.2;

/// One selected move plus the reasoning that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub kind: MoveKind,
    pub mode: Mode,
    pub threat: f32,
    /// Normalized sampling weights per legal move
    pub weights: Vec<(MoveKind, f32)>,
}

/// Per-match opponent brain: difficulty profile, player-move memory, and
/// the current behavioral mode
#[derive(Debug)]
pub struct OpponentBrain {
    difficulty: Difficulty,
    memory: MoveMemory,
    mode: Mode,
}

impl OpponentBrain {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            memory: MoveMemory::new(),
            mode: Mode::Aggressive,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Feed the player's latest move into the pattern memory.
    pub fn observe_player_move(&mut self, kind: MoveKind) {
        self.memory.record(kind);
    }

    /// Pick this turn's move.
    pub fn choose(
        &mut self,
        own: &FighterState,
        own_profile: &CharacterProfile,
        player: &FighterState,
        rng: &mut ChaCha8Rng,
    ) -> Decision {
        let own_hp = own.hp_ratio();
        let own_stamina = own.stamina_ratio();
        let player_hp = player.hp_ratio();
        let last_player_move = self.memory.last();

        let threat = mode::threat_level(player_hp, player.stamina_ratio(), last_player_move);
        let defensive_score =
            mode::defensive_score(threat, last_player_move, self.memory.heavy_streak(), own_hp);
        let special_ready = own.special_cooldown == 0
            && own.stamina >= own_profile.special.stamina_cost;

        self.mode = Mode::evaluate(&ModeContext {
            own_hp,
            own_stamina,
            player_hp,
            special_ready,
            pattern_strength: self.memory.pattern_strength(),
            defensive_score,
        });

        // The rule base reads a slightly hotter threat right after an
        // aggressive player move and a cooler one after a rest.
        let adjusted_threat = match last_player_move {
            Some(MoveKind::Special) => (threat + 0.3).min(1.0),
            Some(MoveKind::Punch) => (threat + 0.1).min(1.0),
            Some(MoveKind::Rest) => (threat - 0.2).max(0.0),
            _ => threat,
        };

        let inputs = FuzzyInputs {
            own_hp,
            own_stamina,
            player_hp,
            health_diff: own_hp - player_hp,
            threat: adjusted_threat,
            pattern: self.memory.pattern_strength(),
            cooldown: 1.0 - own.special_cooldown as f32 / config::SPECIAL_COOLDOWN_TURNS as f32,
        };
        let mut scores = fuzzy::action_scores(&inputs);

        self.apply_prediction_boosts(&mut scores);

        for (kind, score) in &mut scores {
            *score = (*score + FUZZY_SCORE_FLOOR) * self.mode.doctrine_weight(*kind);
            *score *= self.difficulty.move_bias(*kind);
            *score = score.powf(self.difficulty.sharpness());
        }

        let mut legal: Vec<(MoveKind, f32)> = scores
            .iter()
            .filter(|(kind, _)| check_legal(own, own_profile, *kind).is_ok())
            .copied()
            .collect();

        let total: f32 = legal.iter().map(|(_, w)| w).sum();
        if legal.is_empty() {
            return self.fallback(threat);
        }
        if total > 0.0 {
            for (_, w) in &mut legal {
                *w /= total;
            }
        } else {
            // Nothing scored: fall back to a uniform pick among legal moves.
            let uniform = 1.0 / legal.len() as f32;
            for (_, w) in &mut legal {
                *w = uniform;
            }
        }

        let kind = match WeightedIndex::new(legal.iter().map(|(_, w)| *w)) {
            Ok(dist) => legal[dist.sample(rng)].0,
            Err(_) => return self.fallback(threat),
        };

        debug!(
            mode = self.mode.display_name(),
            move_kind = kind.id(),
            threat,
            "opponent chose"
        );

        Decision {
            kind,
            mode: self.mode,
            threat,
            weights: legal,
        }
    }

    fn apply_prediction_boosts(&self, scores: &mut [(MoveKind, f32); 6]) {
        let Some(prediction) = self.memory.prediction() else {
            return;
        };
        if prediction.strength <= PREDICTION_REACT_THRESHOLD {
            return;
        }
        let boost = |scores: &mut [(MoveKind, f32); 6], target: MoveKind, factor: f32| {
            for (kind, score) in scores.iter_mut() {
                if *kind == target {
                    *score = (*score * factor).min(1.0);
                }
            }
        };
        match prediction.kind {
            MoveKind::Punch | MoveKind::Kick
                if prediction.strength > PREDICTION_COUNTER_THRESHOLD =>
            {
                boost(scores, MoveKind::Block, 1.5);
            }
            MoveKind::Special if prediction.strength > PREDICTION_COUNTER_THRESHOLD => {
                boost(scores, MoveKind::Evade, 1.4);
            }
            // A specials-heavy answer to a predicted block: it goes through.
            MoveKind::Block => {
                boost(scores, MoveKind::Special, 1.3);
            }
            _ => {}
        }
    }

    fn fallback(&self, threat: f32) -> Decision {
        Decision {
            kind: MoveKind::Rest,
            mode: self.mode,
            threat,
            weights: vec![(MoveKind::Rest, 1.0)],
        }
    }
}
