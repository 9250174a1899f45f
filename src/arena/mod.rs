//! Match orchestration and read-only views

pub mod duel;
pub mod snapshot;

pub use duel::{Duel, OpponentAction, TickReport, TurnReport};
pub use snapshot::{DuelSnapshot, FighterSnapshot};
