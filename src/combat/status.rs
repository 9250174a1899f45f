//! Status effects and the per-turn tick that ages them
//!
//! Each effect kind carries its own duration and per-turn consequences.
//! Passive modifiers (damage taken, miss chance) are read by the resolver
//! while the effect is active; periodic ones (bleed damage, stamina drain)
//! are applied once per tick here.

use crate::core::config;
use serde::{Deserialize, Serialize};

use super::fighter::FighterState;

/// The four status effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Loses HP every tick
    Bleeding,
    /// Own attacks suffer an extra miss chance
    Stunned,
    /// Loses stamina every tick and takes increased damage
    Weakened,
    /// Takes reduced damage
    Shielded,
}

impl EffectKind {
    /// Full duration in ticks when (re)applied.
    pub fn duration(self) -> u32 {
        match self {
            EffectKind::Bleeding => config::BLEED_DURATION_TURNS,
            EffectKind::Stunned => config::STUN_DURATION_TURNS,
            EffectKind::Weakened => config::WEAKENED_DURATION_TURNS,
            EffectKind::Shielded => config::SHIELDED_DURATION_TURNS,
        }
    }

    /// HP lost by the carrier at each tick.
    pub fn tick_damage(self) -> u32 {
        match self {
            EffectKind::Bleeding => config::BLEED_DAMAGE_PER_TURN,
            _ => 0,
        }
    }

    /// Stamina lost by the carrier at each tick.
    pub fn stamina_drain(self) -> u32 {
        match self {
            EffectKind::Weakened => config::WEAKENED_STAMINA_DRAIN,
            _ => 0,
        }
    }

    /// Multiplier on damage the carrier takes while the effect is active.
    pub fn damage_taken_mult(self) -> f32 {
        match self {
            EffectKind::Weakened => config::WEAKENED_DAMAGE_TAKEN_MULT,
            EffectKind::Shielded => config::SHIELDED_DAMAGE_TAKEN_MULT,
            _ => 1.0,
        }
    }

    /// Additive miss chance on the carrier's own attacks.
    pub fn miss_penalty(self) -> f32 {
        match self {
            EffectKind::Stunned => config::STUN_MISS_PENALTY,
            _ => 0.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            EffectKind::Bleeding => "Bleeding",
            EffectKind::Stunned => "Stunned",
            EffectKind::Weakened => "Weakened",
            EffectKind::Shielded => "Shielded",
        }
    }
}

/// One running effect on a fighter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    /// Ticks left including the current one
    pub remaining: u32,
}

/// What one tick did to one fighter
#[derive(Debug, Clone, Serialize)]
pub struct EffectTick {
    pub kind: EffectKind,
    pub damage: u32,
    pub stamina_drained: u32,
    pub expired: bool,
}

impl EffectTick {
    /// Battle-log lines for this record, the content contract for the UI.
    /// A passive effect that neither bit nor expired produces none.
    pub fn description(&self, who: &str) -> Vec<String> {
        let name = self.kind.display_name();
        let mut lines = Vec::new();
        if self.damage > 0 {
            lines.push(format!("{who} takes {} {} damage", self.damage, name));
        }
        if self.stamina_drained > 0 {
            lines.push(format!("{who} loses {} stamina to {}", self.stamina_drained, name));
        }
        if self.expired {
            lines.push(format!("{who}'s {} wears off", name));
        }
        lines
    }
}

/// Age every effect on `state` by one tick: apply periodic damage and
/// drain, decrement durations, drop expired entries. Returns one record
/// per effect that was active going in.
pub fn tick_effects(state: &mut FighterState) -> Vec<EffectTick> {
    let mut records = Vec::with_capacity(state.effects.len());
    let mut damage_total = 0u32;
    let mut drain_total = 0u32;
    for effect in &mut state.effects {
        let damage = effect.kind.tick_damage();
        let drained = effect.kind.stamina_drain();
        damage_total += damage;
        drain_total += drained;
        effect.remaining = effect.remaining.saturating_sub(1);
        records.push(EffectTick {
            kind: effect.kind,
            damage,
            stamina_drained: drained,
            expired: effect.remaining == 0,
        });
    }
    state.take_damage(damage_total);
    state.drain_stamina(drain_total);
    state.effects.retain(|e| e.remaining > 0);
    records
}
