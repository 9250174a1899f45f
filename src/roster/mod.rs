//! Static character roster
//!
//! Per-archetype stats and special-move parameters. Profiles are immutable
//! `'static` data shared by reference across matches.

use crate::combat::status::EffectKind;
use serde::{Deserialize, Serialize};

/// The playable archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Warrior,
    Tank,
    Assassin,
    Mage,
    Samurai,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Warrior,
        Archetype::Tank,
        Archetype::Assassin,
        Archetype::Mage,
        Archetype::Samurai,
    ];

    /// Parse a roster identifier as used by the external layer.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "warrior" => Some(Archetype::Warrior),
            "tank" => Some(Archetype::Tank),
            "assassin" => Some(Archetype::Assassin),
            "mage" => Some(Archetype::Mage),
            "samurai" => Some(Archetype::Samurai),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Archetype::Warrior => "warrior",
            Archetype::Tank => "tank",
            Archetype::Assassin => "assassin",
            Archetype::Mage => "mage",
            Archetype::Samurai => "samurai",
        }
    }

    pub fn profile(self) -> &'static CharacterProfile {
        match self {
            Archetype::Warrior => &WARRIOR,
            Archetype::Tank => &TANK,
            Archetype::Assassin => &ASSASSIN,
            Archetype::Mage => &MAGE,
            Archetype::Samurai => &SAMURAI,
        }
    }
}

/// Static per-archetype stats
#[derive(Debug, Clone, Serialize)]
pub struct CharacterProfile {
    pub archetype: Archetype,
    pub name: &'static str,
    pub max_hp: u32,
    pub max_stamina: u32,
    pub base_damage: u32,
    pub special: SpecialSpec,
}

/// Parameters of a character's unique special move
///
/// Data-driven so the resolver stays a single code path: every flag or
/// chance defaults to "no effect" and each archetype overrides what its
/// move actually does.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub stamina_cost: u32,
    pub damage_mult: f32,
    /// Base hit probability; 1.0 for specials that cannot inherently miss
    pub hit_chance: f32,
    /// Attack bypasses the target's block guard
    pub ignores_block: bool,
    /// Attack bypasses the target's evade guard
    pub ignores_evade: bool,
    /// Chance of a critical hit, 0.0 when the move cannot crit
    pub crit_chance: f32,
    /// Damage multiplier applied on a critical hit
    pub crit_mult: f32,
    /// Status effect applied to the target on hit
    pub applies_to_target: Option<EffectKind>,
    /// Status effect applied to the user, hit or miss
    pub applies_to_self: Option<EffectKind>,
}

impl SpecialSpec {
    const fn plain(
        name: &'static str,
        description: &'static str,
        stamina_cost: u32,
        damage_mult: f32,
    ) -> Self {
        Self {
            name,
            description,
            stamina_cost,
            damage_mult,
            hit_chance: 1.0,
            ignores_block: false,
            ignores_evade: false,
            crit_chance: 0.0,
            crit_mult: 1.0,
            applies_to_target: None,
            applies_to_self: None,
        }
    }
}

static WARRIOR: CharacterProfile = CharacterProfile {
    archetype: Archetype::Warrior,
    name: "Warrior",
    max_hp: 100,
    max_stamina: 80,
    base_damage: 15,
    special: SpecialSpec {
        applies_to_target: Some(EffectKind::Stunned),
        ..SpecialSpec::plain(
            "Power Strike",
            "A crushing overhead blow that leaves the target reeling.",
            30,
            2.5,
        )
    },
};

static TANK: CharacterProfile = CharacterProfile {
    archetype: Archetype::Tank,
    name: "Tank",
    max_hp: 150,
    max_stamina: 60,
    base_damage: 18,
    special: SpecialSpec {
        applies_to_self: Some(EffectKind::Shielded),
        ..SpecialSpec::plain(
            "Shield Slam",
            "A shield charge that also braces the user against reprisal.",
            35,
            2.0,
        )
    },
};

static ASSASSIN: CharacterProfile = CharacterProfile {
    archetype: Archetype::Assassin,
    name: "Assassin",
    max_hp: 75,
    max_stamina: 90,
    base_damage: 16,
    special: SpecialSpec {
        ignores_block: true,
        crit_chance: 0.6,
        crit_mult: 1.8,
        ..SpecialSpec::plain(
            "Shadow Strike",
            "A strike from the blind side that slips past any guard.",
            30,
            2.0,
        )
    },
};

static MAGE: CharacterProfile = CharacterProfile {
    archetype: Archetype::Mage,
    name: "Mage",
    max_hp: 70,
    max_stamina: 75,
    base_damage: 17,
    special: SpecialSpec {
        ignores_evade: true,
        applies_to_target: Some(EffectKind::Bleeding),
        ..SpecialSpec::plain(
            "Fireball",
            "An unavoidable burst of flame that keeps burning.",
            35,
            2.2,
        )
    },
};

static SAMURAI: CharacterProfile = CharacterProfile {
    archetype: Archetype::Samurai,
    name: "Samurai",
    max_hp: 88,
    max_stamina: 80,
    base_damage: 16,
    special: SpecialSpec {
        hit_chance: 0.9,
        ignores_evade: true,
        applies_to_target: Some(EffectKind::Weakened),
        ..SpecialSpec::plain(
            "Iaido Slash",
            "A single drawn cut too fast to sidestep.",
            28,
            2.3,
        )
    },
};

/// All profiles, for the character-select screen.
pub fn all_profiles() -> impl Iterator<Item = &'static CharacterProfile> {
    Archetype::ALL.iter().map(|a| a.profile())
}
