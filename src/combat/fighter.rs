//! Runtime state of one fighter
//!
//! Created at match start from a character profile, mutated only by the
//! resolver and the status-effect tracker, discarded when the match ends.
//! HP and stamina never leave `[0, max]`; a fighter at 0 HP is defeated
//! and no further moves apply to it.

use crate::roster::CharacterProfile;
use serde::{Deserialize, Serialize};

use super::status::{ActiveEffect, EffectKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterState {
    pub hp: u32,
    pub max_hp: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    /// Turns until Special is usable again; 0 means ready
    pub special_cooldown: u32,
    /// Guard raised by Block, held until this fighter next acts
    pub blocking: bool,
    /// Guard raised by Evade, held until this fighter next acts
    pub evading: bool,
    /// Active status effects, at most one entry per kind
    pub effects: Vec<ActiveEffect>,
}

impl FighterState {
    pub fn new(profile: &CharacterProfile) -> Self {
        Self {
            hp: profile.max_hp,
            max_hp: profile.max_hp,
            stamina: profile.max_stamina,
            max_stamina: profile.max_stamina,
            special_cooldown: 0,
            blocking: false,
            evading: false,
            effects: Vec::new(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn hp_ratio(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    pub fn stamina_ratio(&self) -> f32 {
        self.stamina as f32 / self.max_stamina as f32
    }

    /// Remove raw HP, saturating at zero. Guard reductions are the
    /// resolver's job; this is the final write.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn spend_stamina(&mut self, amount: u32) {
        debug_assert!(self.stamina >= amount, "stamina spent without legality check");
        self.stamina = self.stamina.saturating_sub(amount);
    }

    pub fn drain_stamina(&mut self, amount: u32) {
        self.stamina = self.stamina.saturating_sub(amount);
    }

    pub fn restore_hp(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn restore_stamina(&mut self, amount: u32) {
        self.stamina = (self.stamina + amount).min(self.max_stamina);
    }

    /// Apply a status effect. Reapplying an active kind refreshes its
    /// duration to the kind's full length rather than stacking.
    pub fn apply_effect(&mut self, kind: EffectKind) {
        let remaining = kind.duration();
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining = remaining;
        } else {
            self.effects.push(ActiveEffect { kind, remaining });
        }
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Product of incoming-damage multipliers from active effects.
    pub fn damage_taken_mult(&self) -> f32 {
        self.effects
            .iter()
            .map(|e| e.kind.damage_taken_mult())
            .product()
    }

    /// Additive miss chance this fighter suffers on its own attacks.
    pub fn miss_penalty(&self) -> f32 {
        self.effects.iter().map(|e| e.kind.miss_penalty()).sum()
    }

    /// Drop both guards. Called when this fighter starts its own action:
    /// a guard protects against incoming attacks until the owner moves
    /// again.
    pub fn lower_guard(&mut self) {
        self.blocking = false;
        self.evading = false;
    }
}
