//! Match orchestration
//!
//! A `Duel` owns both fighters, the opponent brain, and the match RNG, and
//! drives the two-phase turn loop:
//!
//! 1. **Tick**: status effects age on both sides (player first), special
//!    cooldowns count down. Both fighters dying here is a draw.
//! 2. **Action**: the player's move resolves; if the match is still live
//!    the opponent observes it, re-evaluates its mode, and answers.
//!
//! `submit_player_move` runs the pending tick automatically, so callers
//! who do not care about separate tick reporting can drive a match with
//! that single call per turn.

use crate::ai::{Mode, OpponentBrain};
use crate::combat::moves::{available_moves, check_legal};
use crate::combat::{resolve_move, tick_effects, EffectTick, FighterState, MoveKind, MoveReport, Outcome};
use crate::core::error::{ArenaError, Result};
use crate::core::types::{Difficulty, MatchId, Side, Winner};
use crate::roster::{Archetype, CharacterProfile};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use super::snapshot::{DuelSnapshot, FighterSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Status effects for this turn have not run yet
    TickPending,
    /// Ticked; waiting for the player's move
    Action,
}

/// What the tick phase did
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub turn: u32,
    pub player_effects: Vec<EffectTick>,
    pub opponent_effects: Vec<EffectTick>,
    pub match_over: bool,
    pub winner: Option<Winner>,
}

/// The opponent's half of an action phase
#[derive(Debug, Clone, Serialize)]
pub struct OpponentAction {
    pub kind: MoveKind,
    pub mode: Mode,
    pub outcome: Outcome,
}

/// Everything that happened in one call to `submit_player_move`
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    /// Present when the tick ran inside this call
    pub tick: Option<TickReport>,
    /// Absent when the tick already ended the match
    pub player_outcome: Option<Outcome>,
    /// Absent when the match ended before the opponent could act
    pub opponent: Option<OpponentAction>,
    pub match_over: bool,
    pub winner: Option<Winner>,
}

/// One match: two fighters, a brain, an RNG, and the turn loop
#[derive(Debug)]
pub struct Duel {
    id: MatchId,
    difficulty: Difficulty,
    player: FighterState,
    player_profile: &'static CharacterProfile,
    opponent: FighterState,
    opponent_profile: &'static CharacterProfile,
    brain: OpponentBrain,
    rng: ChaCha8Rng,
    turn: u32,
    phase: Phase,
    winner: Option<Winner>,
}

impl Duel {
    /// Start a match. The opponent's archetype is drawn at random from the
    /// rest of the roster.
    pub fn new(character_id: &str, difficulty: Difficulty) -> Result<Self> {
        Self::with_rng(character_id, difficulty, ChaCha8Rng::from_entropy())
    }

    /// Start a match with a fixed RNG seed, for replays and tests.
    pub fn new_seeded(character_id: &str, difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::with_rng(character_id, difficulty, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(character_id: &str, difficulty: Difficulty, mut rng: ChaCha8Rng) -> Result<Self> {
        let archetype = Archetype::from_id(character_id)
            .ok_or_else(|| ArenaError::UnknownCharacter(character_id.to_string()))?;
        let pool: Vec<Archetype> = Archetype::ALL
            .iter()
            .copied()
            .filter(|a| *a != archetype)
            .collect();
        // The pool is never empty: the roster has five archetypes.
        let opponent_archetype = *pool.choose(&mut rng).unwrap_or(&Archetype::Warrior);

        let player_profile = archetype.profile();
        let opponent_profile = opponent_archetype.profile();
        let id = MatchId::new();
        info!(
            match_id = %id,
            player = player_profile.name,
            opponent = opponent_profile.name,
            difficulty = %difficulty,
            "match started"
        );
        Ok(Self {
            id,
            difficulty,
            player: FighterState::new(player_profile),
            player_profile,
            opponent: FighterState::new(opponent_profile),
            opponent_profile,
            brain: OpponentBrain::new(difficulty),
            rng,
            turn: 1,
            phase: Phase::TickPending,
            winner: None,
        })
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn fighter(&self, side: Side) -> &FighterState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn profile(&self, side: Side) -> &'static CharacterProfile {
        match side {
            Side::Player => self.player_profile,
            Side::Opponent => self.opponent_profile,
        }
    }

    /// Per-move availability for one side, for the UI.
    pub fn legal_moves(&self, side: Side) -> Vec<MoveReport> {
        available_moves(self.fighter(side), self.profile(side))
    }

    /// Run this turn's tick phase: age status effects on both sides
    /// (player first), count down special cooldowns, and settle deaths.
    /// Calling it again before the next action phase reports nothing.
    pub fn tick(&mut self) -> Result<TickReport> {
        if self.is_over() {
            return Err(ArenaError::MatchAlreadyOver);
        }
        if self.phase == Phase::Action {
            return Ok(TickReport {
                turn: self.turn,
                player_effects: Vec::new(),
                opponent_effects: Vec::new(),
                match_over: false,
                winner: None,
            });
        }

        let player_effects = tick_effects(&mut self.player);
        let opponent_effects = tick_effects(&mut self.opponent);
        self.player.special_cooldown = self.player.special_cooldown.saturating_sub(1);
        self.opponent.special_cooldown = self.opponent.special_cooldown.saturating_sub(1);
        self.phase = Phase::Action;

        match (self.player.is_defeated(), self.opponent.is_defeated()) {
            (true, true) => self.finish(Winner::Draw),
            (false, true) => self.finish(Winner::Player),
            (true, false) => self.finish(Winner::Opponent),
            (false, false) => {}
        }

        Ok(TickReport {
            turn: self.turn,
            player_effects,
            opponent_effects,
            match_over: self.is_over(),
            winner: self.winner,
        })
    }

    /// Resolve one full action phase around the player's chosen move,
    /// running the tick first if it has not run this turn.
    pub fn submit_player_move(&mut self, kind: MoveKind) -> Result<TurnReport> {
        if self.is_over() {
            return Err(ArenaError::MatchAlreadyOver);
        }

        let tick = if self.phase == Phase::TickPending {
            Some(self.tick()?)
        } else {
            None
        };
        if self.is_over() {
            return Ok(TurnReport {
                turn: self.turn,
                tick,
                player_outcome: None,
                opponent: None,
                match_over: true,
                winner: self.winner,
            });
        }

        check_legal(&self.player, self.player_profile, kind)
            .map_err(|reason| ArenaError::IllegalMove { kind, reason })?;

        let player_outcome = resolve_move(
            &mut self.player,
            self.player_profile,
            &mut self.opponent,
            kind,
            0.0,
            &mut self.rng,
        );
        self.brain.observe_player_move(kind);

        let opponent = if self.opponent.is_defeated() {
            self.finish(Winner::Player);
            None
        } else {
            let decision = self.brain.choose(
                &self.opponent,
                self.opponent_profile,
                &self.player,
                &mut self.rng,
            );
            let outcome = resolve_move(
                &mut self.opponent,
                self.opponent_profile,
                &mut self.player,
                decision.kind,
                self.difficulty.accuracy_skew(),
                &mut self.rng,
            );
            if self.player.is_defeated() {
                self.finish(Winner::Opponent);
            }
            Some(OpponentAction {
                kind: decision.kind,
                mode: decision.mode,
                outcome,
            })
        };

        let report = TurnReport {
            turn: self.turn,
            tick,
            player_outcome: Some(player_outcome),
            opponent,
            match_over: self.is_over(),
            winner: self.winner,
        };
        // The counter only advances past turns the match survived.
        if !self.is_over() {
            self.turn += 1;
            self.phase = Phase::TickPending;
        }
        Ok(report)
    }

    /// Lossless read-only view of the match for the external layer.
    pub fn snapshot(&self) -> DuelSnapshot {
        DuelSnapshot {
            match_id: self.id,
            turn: self.turn,
            difficulty: self.difficulty,
            opponent_mode: self.brain.mode(),
            match_over: self.is_over(),
            winner: self.winner,
            player: FighterSnapshot::capture(&self.player, self.player_profile),
            opponent: FighterSnapshot::capture(&self.opponent, self.opponent_profile),
        }
    }

    fn finish(&mut self, winner: Winner) {
        self.winner = Some(winner);
        info!(match_id = %self.id, winner = ?winner, turns = self.turn, "match over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EffectKind;

    fn duel() -> Duel {
        Duel::new_seeded("warrior", Difficulty::Medium, 7).unwrap()
    }

    #[test]
    fn unknown_character_is_rejected() {
        let err = Duel::new_seeded("paladin", Difficulty::Easy, 0).unwrap_err();
        assert!(matches!(err, ArenaError::UnknownCharacter(id) if id == "paladin"));
    }

    #[test]
    fn opponent_never_mirrors_the_player() {
        for seed in 0..20 {
            let duel = Duel::new_seeded("mage", Difficulty::Hard, seed).unwrap();
            assert_ne!(duel.profile(Side::Opponent).archetype, Archetype::Mage);
        }
    }

    #[test]
    fn both_dying_in_the_same_tick_is_a_draw() {
        let mut duel = duel();
        duel.player.hp = 3;
        duel.opponent.hp = 2;
        duel.player.apply_effect(EffectKind::Bleeding);
        duel.opponent.apply_effect(EffectKind::Bleeding);
        let report = duel.tick().unwrap();
        assert!(report.match_over);
        assert_eq!(report.winner, Some(Winner::Draw));
        assert!(matches!(
            duel.submit_player_move(MoveKind::Rest),
            Err(ArenaError::MatchAlreadyOver)
        ));
    }

    #[test]
    fn lone_death_in_the_tick_names_the_survivor() {
        let mut duel = duel();
        duel.opponent.hp = 4;
        duel.opponent.apply_effect(EffectKind::Bleeding);
        let report = duel.tick().unwrap();
        assert_eq!(report.winner, Some(Winner::Player));
    }

    #[test]
    fn submit_runs_the_pending_tick_exactly_once() {
        let mut duel = duel();
        duel.player.apply_effect(EffectKind::Bleeding);
        let report = duel.submit_player_move(MoveKind::Rest).unwrap();
        let tick = report.tick.expect("tick ran inside submit");
        assert_eq!(tick.player_effects.len(), 1);

        // An explicit tick call before submit leaves nothing for submit.
        duel.player.apply_effect(EffectKind::Bleeding);
        duel.tick().unwrap();
        let report = duel.submit_player_move(MoveKind::Rest).unwrap();
        assert!(report.tick.is_none());
    }

    #[test]
    fn second_tick_in_one_turn_reports_nothing() {
        let mut duel = duel();
        duel.player.apply_effect(EffectKind::Bleeding);
        let first = duel.tick().unwrap();
        assert_eq!(first.player_effects.len(), 1);
        let second = duel.tick().unwrap();
        assert!(second.player_effects.is_empty());
        assert_eq!(duel.player.effects[0].remaining, 2);
    }

    #[test]
    fn turn_counter_advances_only_on_completed_actions() {
        let mut duel = duel();
        assert_eq!(duel.turn(), 1);
        duel.tick().unwrap();
        assert_eq!(duel.turn(), 1);
        duel.submit_player_move(MoveKind::Rest).unwrap();
        assert_eq!(duel.turn(), 2);
    }

    #[test]
    fn illegal_move_is_a_typed_error_and_changes_nothing() {
        let mut duel = duel();
        duel.tick().unwrap();
        duel.player.stamina = 3;
        let err = duel.submit_player_move(MoveKind::Kick).unwrap_err();
        assert!(matches!(
            err,
            ArenaError::IllegalMove {
                kind: MoveKind::Kick,
                ..
            }
        ));
        assert_eq!(duel.player.stamina, 3);
        assert_eq!(duel.turn(), 1);
    }

    #[test]
    fn cooldowns_count_down_during_the_tick() {
        let mut duel = duel();
        duel.player.special_cooldown = 4;
        duel.tick().unwrap();
        assert_eq!(duel.player.special_cooldown, 3);
    }

    #[test]
    fn turn_counter_stops_on_the_turn_the_match_ends() {
        for seed in 0..200 {
            let mut duel = Duel::new_seeded("warrior", Difficulty::Medium, seed).unwrap();
            duel.opponent.hp = 5;
            let report = duel.submit_player_move(MoveKind::Punch).unwrap();
            if report.player_outcome.as_ref().is_some_and(|o| o.hit) {
                assert!(report.match_over);
                assert_eq!(duel.turn(), 1, "the match ended on turn 1");
                assert_eq!(duel.snapshot().turn, 1);
                return;
            }
        }
        panic!("no seed in 0..200 landed the punch");
    }

    #[test]
    fn finishing_blow_skips_the_opponent_response() {
        // Scan seeds for a run where the player's punch both lands and
        // finishes a 5 HP opponent.
        for seed in 0..200 {
            let mut duel = Duel::new_seeded("warrior", Difficulty::Medium, seed).unwrap();
            duel.opponent.hp = 5;
            let report = duel.submit_player_move(MoveKind::Punch).unwrap();
            let outcome = report.player_outcome.unwrap();
            if outcome.hit {
                assert!(report.match_over);
                assert_eq!(report.winner, Some(Winner::Player));
                assert!(report.opponent.is_none());
                return;
            }
        }
        panic!("no seed in 0..200 landed the punch");
    }
}
