//! Iron Arena - Turn-Based Duel Simulator
//!
//! A human-controlled fighter against a computer opponent driven by a
//! behavioral-mode state machine and a fuzzy-logic move controller.

pub mod ai;
pub mod arena;
pub mod combat;
pub mod core;
pub mod roster;
