//! Combat tuning constants with documented interactions
//!
//! All magic numbers are collected here. These values have been tuned so a
//! duel between evenly matched archetypes runs 8-15 turns; changing them
//! shifts the pacing and the value of the defensive moves.

// === BASIC MOVES ===

/// Punch stamina cost (the cheapest attack)
pub const PUNCH_STAMINA_COST: u32 = 10;
/// Punch base hit probability
pub const PUNCH_HIT_CHANCE: f32 = 0.90;
/// Punch damage as a fraction of the fighter's base damage
pub const PUNCH_DAMAGE_MULT: f32 = 1.0;

/// Kick stamina cost
pub const KICK_STAMINA_COST: u32 = 15;
/// Kick base hit probability
///
/// Deliberately low: the kick trades 30% whiff risk for 30% extra damage.
pub const KICK_HIT_CHANCE: f32 = 0.70;
/// Kick damage multiplier
pub const KICK_DAMAGE_MULT: f32 = 1.3;

/// Block stamina cost
pub const BLOCK_STAMINA_COST: u32 = 5;
/// Fraction of incoming damage removed while the block guard is up
pub const BLOCK_DAMAGE_REDUCTION: f32 = 0.7;

/// Evade stamina cost
pub const EVADE_STAMINA_COST: u32 = 8;
/// Hit-probability penalty applied to attacks against an evading target
pub const EVADE_HIT_PENALTY: f32 = 0.30;

/// Fraction of max stamina restored by Rest
pub const REST_STAMINA_FRACTION: f32 = 0.30;
/// Fraction of max HP restored by Rest
///
/// Small on purpose: resting is primarily a stamina move, the HP trickle
/// just keeps it from being strictly dominated late in a duel.
pub const REST_HP_FRACTION: f32 = 0.05;

// === SPECIAL MOVES ===

/// Turns a special move stays on cooldown after use, hit or miss
pub const SPECIAL_COOLDOWN_TURNS: u32 = 4;

// === STATUS EFFECTS ===

/// Damage dealt by Bleeding at each tick
pub const BLEED_DAMAGE_PER_TURN: u32 = 5;
/// Turns Bleeding persists
pub const BLEED_DURATION_TURNS: u32 = 3;

/// Additive miss chance while Stunned
pub const STUN_MISS_PENALTY: f32 = 0.25;
/// Turns Stunned persists
///
/// Two, not one: the effect is decremented during the tick phase, so a
/// single-turn entry would expire before the victim's next action.
pub const STUN_DURATION_TURNS: u32 = 2;

/// Stamina drained from a Weakened fighter at each tick
pub const WEAKENED_STAMINA_DRAIN: u32 = 3;
/// Incoming-damage multiplier while Weakened
pub const WEAKENED_DAMAGE_TAKEN_MULT: f32 = 1.2;
/// Turns Weakened persists
pub const WEAKENED_DURATION_TURNS: u32 = 2;

/// Incoming-damage multiplier while Shielded
pub const SHIELDED_DAMAGE_TAKEN_MULT: f32 = 0.7;
/// Turns Shielded persists
pub const SHIELDED_DURATION_TURNS: u32 = 2;

// === OPPONENT BEHAVIOR ===

/// HP ratio below which the opponent considers itself wounded
pub const WOUNDED_HP_THRESHOLD: f32 = 0.5;
/// HP ratio below which the opponent goes desperate, overriding caution
pub const DESPERATE_HP_THRESHOLD: f32 = 0.2;
/// Player HP ratio below which the opponent hunts for the finishing blow
pub const FINISHER_HP_THRESHOLD: f32 = 0.15;
/// Stamina ratio the opponent needs before committing to the kill hunt
pub const FINISHER_STAMINA_THRESHOLD: f32 = 0.3;
/// Stamina ratio below which the opponent prioritizes recovery
pub const EXHAUSTED_STAMINA_THRESHOLD: f32 = 0.25;
/// Minimum pattern strength before the opponent commits to countering
pub const COUNTER_PATTERN_THRESHOLD: f32 = 0.6;
/// Defensive-pressure score at which the opponent turtles up
pub const DEFENSIVE_SCORE_THRESHOLD: f32 = 0.5;

/// Number of recent player moves the opponent remembers
pub const MOVE_HISTORY_LEN: usize = 5;
