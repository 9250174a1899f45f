//! Serializable read-only views of a match
//!
//! Snapshots are self-contained: they copy names and maxima out of the
//! static profiles so the external layer can render a fight without
//! touching the roster.

use crate::ai::Mode;
use crate::combat::{ActiveEffect, FighterState};
use crate::core::types::{Difficulty, MatchId, Winner};
use crate::roster::{Archetype, CharacterProfile};
use serde::{Deserialize, Serialize};

/// One fighter as the UI sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub archetype: Archetype,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub special_name: String,
    pub special_cooldown: u32,
    pub blocking: bool,
    pub evading: bool,
    pub effects: Vec<ActiveEffect>,
}

impl FighterSnapshot {
    pub fn capture(state: &FighterState, profile: &CharacterProfile) -> Self {
        Self {
            archetype: profile.archetype,
            name: profile.name.to_string(),
            hp: state.hp,
            max_hp: state.max_hp,
            stamina: state.stamina,
            max_stamina: state.max_stamina,
            special_name: profile.special.name.to_string(),
            special_cooldown: state.special_cooldown,
            blocking: state.blocking,
            evading: state.evading,
            effects: state.effects.clone(),
        }
    }
}

/// The whole match as the UI sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelSnapshot {
    pub match_id: MatchId,
    pub turn: u32,
    pub difficulty: Difficulty,
    pub opponent_mode: Mode,
    pub match_over: bool,
    pub winner: Option<Winner>,
    pub player: FighterSnapshot,
    pub opponent: FighterSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Duel;
    use crate::combat::{EffectKind, MoveKind};

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut duel = Duel::new_seeded("tank", Difficulty::Hard, 11).unwrap();
        duel.submit_player_move(MoveKind::Punch).unwrap();
        let snapshot = duel.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DuelSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.match_id, snapshot.match_id);
        assert_eq!(back.turn, snapshot.turn);
        assert_eq!(back.player.hp, snapshot.player.hp);
        assert_eq!(back.opponent.stamina, snapshot.opponent.stamina);
        assert_eq!(back.player.archetype, Archetype::Tank);
    }

    #[test]
    fn snapshot_carries_effects_and_guards() {
        let profile = Archetype::Warrior.profile();
        let mut state = FighterState::new(profile);
        state.apply_effect(EffectKind::Bleeding);
        state.blocking = true;
        let snapshot = FighterSnapshot::capture(&state, profile);
        assert!(snapshot.blocking);
        assert_eq!(snapshot.effects.len(), 1);
        assert_eq!(snapshot.effects[0].kind, EffectKind::Bleeding);
        assert_eq!(snapshot.special_name, "Power Strike");
    }
}
