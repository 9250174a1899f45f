//! The opponent: pattern memory, behavioral modes, fuzzy inference, and
//! the controller that ties them into one move choice per turn.

pub mod controller;
pub mod fuzzy;
pub mod mode;
pub mod pattern;

pub use controller::{Decision, OpponentBrain};
pub use mode::Mode;
pub use pattern::{MoveMemory, Prediction};
