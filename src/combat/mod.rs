//! Combat core: the move catalog, runtime fighter state, status effects,
//! and the resolver that turns a chosen move into an outcome.

pub mod fighter;
pub mod moves;
pub mod resolve;
pub mod status;

pub use fighter::FighterState;
pub use moves::{MoveKind, MoveReport};
pub use resolve::{resolve_move, Outcome};
pub use status::{tick_effects, ActiveEffect, EffectKind, EffectTick};
