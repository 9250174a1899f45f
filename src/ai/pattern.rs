//! Player move pattern tracking
//!
//! Keeps a short ring of the player's recent moves and predicts the next
//! one from repeated bigrams: if the last two moves have occurred earlier
//! in the window at least twice, the most common follower becomes the
//! prediction. A handful of well-known three-move sequences also raise the
//! confidence when they appear verbatim.

use crate::combat::MoveKind;
use crate::core::config;
use serde::Serialize;
use std::collections::VecDeque;

/// Named sequences players fall into often enough to hard-code
const KNOWN_SEQUENCES: &[[MoveKind; 3]] = &[
    [MoveKind::Punch, MoveKind::Punch, MoveKind::Special],
    [MoveKind::Block, MoveKind::Evade, MoveKind::Block],
    [MoveKind::Punch, MoveKind::Rest, MoveKind::Punch],
    [MoveKind::Special, MoveKind::Rest, MoveKind::Special],
    [MoveKind::Block, MoveKind::Punch, MoveKind::Block],
];

/// Confidence assigned when a known sequence shows up in the window
const KNOWN_SEQUENCE_STRENGTH: f32 = 0.8;

/// A predicted next player move with a confidence in `[0, 1]`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prediction {
    pub kind: MoveKind,
    pub strength: f32,
}

/// Ring buffer of recent player moves plus the analysis derived from it
#[derive(Debug, Clone, Default)]
pub struct MoveMemory {
    history: VecDeque<MoveKind>,
    prediction: Option<Prediction>,
    strength: f32,
}

impl MoveMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: MoveKind) {
        if self.history.len() == config::MOVE_HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(kind);
        self.analyze();
    }

    pub fn recent(&self) -> impl Iterator<Item = MoveKind> + '_ {
        self.history.iter().copied()
    }

    pub fn last(&self) -> Option<MoveKind> {
        self.history.back().copied()
    }

    /// Predicted next player move, if the window shows a repeating pattern.
    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    /// Confidence that the player is locked into a pattern, in `[0, 1]`.
    /// Nonzero even when no concrete next move could be predicted.
    pub fn pattern_strength(&self) -> f32 {
        self.strength
    }

    /// Count of consecutive heavy attacks (Kick or Special) at the end of
    /// the window. Feeds the defensive-pressure score.
    pub fn heavy_streak(&self) -> usize {
        self.history
            .iter()
            .rev()
            .take_while(|m| matches!(m, MoveKind::Kick | MoveKind::Special))
            .count()
    }

    fn analyze(&mut self) {
        self.strength = 0.0;
        self.prediction = None;
        if self.history.len() < 3 {
            return;
        }
        let moves: Vec<MoveKind> = self.history.iter().copied().collect();

        let last_two = (moves[moves.len() - 2], moves[moves.len() - 1]);
        let mut occurrences = 0usize;
        let mut followers: Vec<MoveKind> = Vec::new();
        for window in moves.windows(3) {
            if (window[0], window[1]) == last_two {
                occurrences += 1;
                followers.push(window[2]);
            }
        }
        // The trailing bigram itself also counts as an occurrence.
        occurrences += 1;
        if occurrences >= 2 && !followers.is_empty() {
            // Ties break in catalog order so replays stay deterministic.
            let mut best = (followers[0], 0usize);
            for kind in MoveKind::ALL {
                let count = followers.iter().filter(|&&f| f == kind).count();
                if count > best.1 {
                    best = (kind, count);
                }
            }
            let strength = (best.1 as f32 / followers.len() as f32).min(1.0);
            self.prediction = Some(Prediction {
                kind: best.0,
                strength,
            });
            self.strength = strength;
        }

        for sequence in KNOWN_SEQUENCES {
            if moves.windows(3).any(|w| w == sequence) {
                self.strength = self.strength.max(KNOWN_SEQUENCE_STRENGTH);
                if let Some(prediction) = &mut self.prediction {
                    prediction.strength = prediction.strength.max(KNOWN_SEQUENCE_STRENGTH);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(memory: &mut MoveMemory, moves: &[MoveKind]) {
        for &m in moves {
            memory.record(m);
        }
    }

    #[test]
    fn too_short_a_history_predicts_nothing() {
        let mut memory = MoveMemory::new();
        feed(&mut memory, &[MoveKind::Punch, MoveKind::Punch]);
        assert!(memory.prediction().is_none());
        assert_eq!(memory.pattern_strength(), 0.0);
    }

    #[test]
    fn repeated_bigram_predicts_its_follower() {
        let mut memory = MoveMemory::new();
        // punch,kick -> punch appears, then the window ends on punch,kick.
        feed(
            &mut memory,
            &[
                MoveKind::Punch,
                MoveKind::Kick,
                MoveKind::Punch,
                MoveKind::Punch,
                MoveKind::Kick,
            ],
        );
        let prediction = memory.prediction().unwrap();
        assert_eq!(prediction.kind, MoveKind::Punch);
        assert!(prediction.strength > 0.5);
    }

    #[test]
    fn known_sequence_raises_confidence() {
        let mut memory = MoveMemory::new();
        feed(
            &mut memory,
            &[MoveKind::Block, MoveKind::Evade, MoveKind::Block],
        );
        assert!(memory.pattern_strength() >= 0.8);
    }

    #[test]
    fn heavy_streak_counts_trailing_heavy_attacks_only() {
        let mut memory = MoveMemory::new();
        feed(
            &mut memory,
            &[
                MoveKind::Kick,
                MoveKind::Punch,
                MoveKind::Kick,
                MoveKind::Special,
            ],
        );
        assert_eq!(memory.heavy_streak(), 2);
        memory.record(MoveKind::Rest);
        assert_eq!(memory.heavy_streak(), 0);
    }

    #[test]
    fn window_is_bounded() {
        let mut memory = MoveMemory::new();
        for _ in 0..20 {
            memory.record(MoveKind::Punch);
        }
        assert_eq!(memory.recent().count(), config::MOVE_HISTORY_LEN);
    }
}
