//! The move catalog and its cost rules
//!
//! Moves are stateless descriptors: fixed stamina cost, base hit
//! probability, damage multiplier. The legality check is pure so the
//! external layer can gray out unavailable actions without performing them.

use crate::core::config;
use crate::core::error::IllegalMoveReason;
use crate::roster::CharacterProfile;
use serde::{Deserialize, Serialize};

use super::fighter::FighterState;

/// The six action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Punch,
    Kick,
    Block,
    Evade,
    Rest,
    Special,
}

impl MoveKind {
    pub const ALL: [MoveKind; 6] = [
        MoveKind::Punch,
        MoveKind::Kick,
        MoveKind::Block,
        MoveKind::Evade,
        MoveKind::Rest,
        MoveKind::Special,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "punch" => Some(MoveKind::Punch),
            "kick" => Some(MoveKind::Kick),
            "block" => Some(MoveKind::Block),
            "evade" => Some(MoveKind::Evade),
            "rest" => Some(MoveKind::Rest),
            "special" => Some(MoveKind::Special),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            MoveKind::Punch => "punch",
            MoveKind::Kick => "kick",
            MoveKind::Block => "block",
            MoveKind::Evade => "evade",
            MoveKind::Rest => "rest",
            MoveKind::Special => "special",
        }
    }

    /// Does this move target the other fighter?
    pub fn is_attack(self) -> bool {
        matches!(self, MoveKind::Punch | MoveKind::Kick | MoveKind::Special)
    }

    /// Stamina cost for a given fighter. Only Special varies per character.
    pub fn stamina_cost(self, profile: &CharacterProfile) -> u32 {
        match self {
            MoveKind::Punch => config::PUNCH_STAMINA_COST,
            MoveKind::Kick => config::KICK_STAMINA_COST,
            MoveKind::Block => config::BLOCK_STAMINA_COST,
            MoveKind::Evade => config::EVADE_STAMINA_COST,
            MoveKind::Rest => 0,
            MoveKind::Special => profile.special.stamina_cost,
        }
    }

    /// Base hit probability before guard, status, and difficulty modifiers.
    ///
    /// Non-attacks cannot miss.
    pub fn base_hit_chance(self, profile: &CharacterProfile) -> f32 {
        match self {
            MoveKind::Punch => config::PUNCH_HIT_CHANCE,
            MoveKind::Kick => config::KICK_HIT_CHANCE,
            MoveKind::Special => profile.special.hit_chance,
            MoveKind::Block | MoveKind::Evade | MoveKind::Rest => 1.0,
        }
    }

    /// Damage as a multiple of the actor's base damage. Zero for non-attacks.
    pub fn damage_mult(self, profile: &CharacterProfile) -> f32 {
        match self {
            MoveKind::Punch => config::PUNCH_DAMAGE_MULT,
            MoveKind::Kick => config::KICK_DAMAGE_MULT,
            MoveKind::Special => profile.special.damage_mult,
            MoveKind::Block | MoveKind::Evade | MoveKind::Rest => 0.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MoveKind::Punch => "Punch",
            MoveKind::Kick => "Kick",
            MoveKind::Block => "Block",
            MoveKind::Evade => "Evade",
            MoveKind::Rest => "Rest",
            MoveKind::Special => "Special",
        }
    }
}

/// Pure legality check: liveness, stamina, and (for Special) cooldown.
///
/// Rest is legal for any living fighter.
pub fn check_legal(
    state: &FighterState,
    profile: &CharacterProfile,
    kind: MoveKind,
) -> std::result::Result<(), IllegalMoveReason> {
    if state.is_defeated() {
        return Err(IllegalMoveReason::Defeated);
    }
    if kind == MoveKind::Special && state.special_cooldown > 0 {
        return Err(IllegalMoveReason::OnCooldown {
            remaining: state.special_cooldown,
        });
    }
    let cost = kind.stamina_cost(profile);
    if state.stamina < cost {
        return Err(IllegalMoveReason::InsufficientStamina {
            required: cost,
            available: state.stamina,
        });
    }
    Ok(())
}

/// Per-move availability entry handed to the external layer
#[derive(Debug, Clone, Serialize)]
pub struct MoveReport {
    pub kind: MoveKind,
    pub name: String,
    pub stamina_cost: u32,
    pub cooldown_remaining: u32,
    pub legal: bool,
    pub reason: Option<String>,
}

/// Availability of every move for one fighter, in catalog order.
pub fn available_moves(state: &FighterState, profile: &CharacterProfile) -> Vec<MoveReport> {
    MoveKind::ALL
        .iter()
        .map(|&kind| {
            let verdict = check_legal(state, profile, kind);
            let name = if kind == MoveKind::Special {
                format!("{} ({})", kind.display_name(), profile.special.name)
            } else {
                kind.display_name().to_string()
            };
            MoveReport {
                kind,
                name,
                stamina_cost: kind.stamina_cost(profile),
                cooldown_remaining: if kind == MoveKind::Special {
                    state.special_cooldown
                } else {
                    0
                },
                legal: verdict.is_ok(),
                reason: verdict.err().map(|r| r.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Archetype;

    #[test]
    fn rest_is_always_legal_while_alive() {
        let profile = Archetype::Warrior.profile();
        let mut state = FighterState::new(profile);
        state.stamina = 0;
        assert!(check_legal(&state, profile, MoveKind::Rest).is_ok());
        assert!(matches!(
            check_legal(&state, profile, MoveKind::Punch),
            Err(IllegalMoveReason::InsufficientStamina { required: 10, .. })
        ));
    }

    #[test]
    fn nothing_is_legal_when_defeated() {
        let profile = Archetype::Warrior.profile();
        let mut state = FighterState::new(profile);
        state.hp = 0;
        for kind in MoveKind::ALL {
            assert_eq!(
                check_legal(&state, profile, kind),
                Err(IllegalMoveReason::Defeated)
            );
        }
    }

    #[test]
    fn special_checks_cooldown_before_stamina() {
        let profile = Archetype::Mage.profile();
        let mut state = FighterState::new(profile);
        state.special_cooldown = 3;
        state.stamina = 0;
        assert_eq!(
            check_legal(&state, profile, MoveKind::Special),
            Err(IllegalMoveReason::OnCooldown { remaining: 3 })
        );
    }

    #[test]
    fn report_names_the_character_special() {
        let profile = Archetype::Samurai.profile();
        let state = FighterState::new(profile);
        let reports = available_moves(&state, profile);
        let special = reports
            .iter()
            .find(|r| r.kind == MoveKind::Special)
            .unwrap();
        assert_eq!(special.name, "Special (Iaido Slash)");
        assert!(special.legal);
    }
}
