//! Fuzzy inference over the fight state
//!
//! Mamdani-style pipeline: crisp inputs are fuzzified through triangular
//! membership functions, a static rule table fires with min-AND semantics
//! scaled by rule weight, firings aggregate per move by max, and each
//! move's score is the centroid of its clipped output sets.
//!
//! Scores are raw desirabilities, not probabilities. The controller blends
//! them with doctrine and difficulty and normalizes at the end.

use crate::combat::MoveKind;
use std::collections::HashMap;

/// Triangular membership function with feet at `a` and `c`, peak at `b`.
/// A degenerate edge (`a == b` or `b == c`) makes a shoulder that holds
/// grade 1.0 at the flat end.
#[derive(Debug, Clone, Copy)]
pub struct Tri(pub f32, pub f32, pub f32);

impl Tri {
    pub fn grade(self, x: f32) -> f32 {
        let Tri(a, b, c) = self;
        if x < a || x > c {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else if x > b {
            (c - x) / (c - b)
        } else {
            1.0
        }
    }
}

/// Input variables, all in `[0, 1]` except `HealthDiff` in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    OwnHealth,
    OwnStamina,
    PlayerHealth,
    /// Own HP ratio minus player HP ratio
    HealthDiff,
    Threat,
    Pattern,
    /// 1.0 = special ready, 0.0 = just used
    Cooldown,
}

/// Linguistic terms, shared across variables; each variable defines
/// membership for its own subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    LargeDisadvantage,
    Disadvantage,
    Even,
    Advantage,
    LargeAdvantage,
    NoPattern,
    Weak,
    Strong,
    VeryStrong,
    NotReady,
    AlmostReady,
    Ready,
}

/// Membership function for a (variable, term) pair, if that variable
/// defines the term.
fn membership(var: Var, term: Term) -> Option<Tri> {
    let tri = match (var, term) {
        (Var::OwnHealth | Var::PlayerHealth, Term::VeryLow) => Tri(0.0, 0.0, 0.2),
        (Var::OwnHealth | Var::PlayerHealth, Term::Low) => Tri(0.1, 0.3, 0.5),
        (Var::OwnHealth | Var::PlayerHealth, Term::Medium) => Tri(0.4, 0.6, 0.8),
        (Var::OwnHealth | Var::PlayerHealth, Term::High) => Tri(0.7, 0.9, 1.0),
        (Var::OwnHealth | Var::PlayerHealth, Term::VeryHigh) => Tri(0.8, 1.0, 1.0),

        (Var::OwnStamina, Term::VeryLow) => Tri(0.0, 0.0, 0.25),
        (Var::OwnStamina, Term::Low) => Tri(0.15, 0.35, 0.55),
        (Var::OwnStamina, Term::Medium) => Tri(0.45, 0.65, 0.85),
        (Var::OwnStamina, Term::High) => Tri(0.75, 0.9, 1.0),
        (Var::OwnStamina, Term::VeryHigh) => Tri(0.9, 1.0, 1.0),

        (Var::HealthDiff, Term::LargeDisadvantage) => Tri(-1.0, -0.5, 0.0),
        (Var::HealthDiff, Term::Disadvantage) => Tri(-0.3, -0.1, 0.1),
        (Var::HealthDiff, Term::Even) => Tri(-0.1, 0.0, 0.1),
        (Var::HealthDiff, Term::Advantage) => Tri(-0.1, 0.1, 0.3),
        (Var::HealthDiff, Term::LargeAdvantage) => Tri(0.0, 0.5, 1.0),

        (Var::Threat, Term::VeryLow) => Tri(0.0, 0.0, 0.3),
        (Var::Threat, Term::Low) => Tri(0.2, 0.4, 0.6),
        (Var::Threat, Term::Medium) => Tri(0.5, 0.7, 0.9),
        (Var::Threat, Term::High) => Tri(0.8, 1.0, 1.0),

        (Var::Pattern, Term::NoPattern) => Tri(0.0, 0.0, 0.3),
        (Var::Pattern, Term::Weak) => Tri(0.2, 0.4, 0.6),
        (Var::Pattern, Term::Strong) => Tri(0.5, 0.8, 1.0),
        (Var::Pattern, Term::VeryStrong) => Tri(0.7, 1.0, 1.0),

        (Var::Cooldown, Term::NotReady) => Tri(0.0, 0.0, 0.5),
        (Var::Cooldown, Term::AlmostReady) => Tri(0.3, 0.6, 0.9),
        (Var::Cooldown, Term::Ready) => Tri(0.7, 1.0, 1.0),

        _ => return None,
    };
    Some(tri)
}

/// Output terms for every move's desirability, on `[0, 1]`.
fn output_membership(term: Term) -> Tri {
    match term {
        Term::VeryLow => Tri(0.0, 0.0, 0.25),
        Term::Low => Tri(0.15, 0.35, 0.55),
        Term::Medium => Tri(0.45, 0.65, 0.85),
        Term::High => Tri(0.75, 0.9, 1.0),
        _ => Tri(0.9, 1.0, 1.0),
    }
}

/// Crisp inputs to one inference pass
#[derive(Debug, Clone, Copy)]
pub struct FuzzyInputs {
    pub own_hp: f32,
    pub own_stamina: f32,
    pub player_hp: f32,
    pub health_diff: f32,
    pub threat: f32,
    pub pattern: f32,
    pub cooldown: f32,
}

impl FuzzyInputs {
    fn value(&self, var: Var) -> f32 {
        match var {
            Var::OwnHealth => self.own_hp,
            Var::OwnStamina => self.own_stamina,
            Var::PlayerHealth => self.player_hp,
            Var::HealthDiff => self.health_diff,
            Var::Threat => self.threat,
            Var::Pattern => self.pattern,
            Var::Cooldown => self.cooldown,
        }
    }
}

struct Rule {
    when: &'static [(Var, Term)],
    then: (MoveKind, Term),
    weight: f32,
}

impl Rule {
    fn firing_strength(&self, inputs: &FuzzyInputs) -> f32 {
        let mut strength = 1.0f32;
        for &(var, term) in self.when {
            let grade = membership(var, term)
                .map(|tri| tri.grade(inputs.value(var)))
                .unwrap_or(0.0);
            strength = strength.min(grade);
        }
        strength * self.weight
    }
}

use MoveKind::{Block, Evade, Kick, Punch, Rest, Special};
use Term::*;
use Var::*;

static RULES: &[Rule] = &[
    // Recovery
    Rule { when: &[(OwnHealth, VeryLow), (OwnStamina, High)], then: (Rest, VeryHigh), weight: 1.0 },
    Rule { when: &[(OwnStamina, VeryLow)], then: (Rest, VeryHigh), weight: 1.0 },
    Rule { when: &[(OwnStamina, Low), (OwnHealth, High)], then: (Rest, Medium), weight: 0.7 },
    // Offense from strength
    Rule { when: &[(OwnHealth, High), (OwnStamina, High), (PlayerHealth, Low)], then: (Special, VeryHigh), weight: 1.0 },
    Rule { when: &[(OwnHealth, High), (OwnStamina, Medium), (HealthDiff, Advantage)], then: (Punch, High), weight: 0.9 },
    Rule { when: &[(OwnHealth, High), (OwnStamina, High), (PlayerHealth, Medium)], then: (Kick, High), weight: 0.8 },
    Rule { when: &[(HealthDiff, LargeAdvantage), (OwnStamina, High)], then: (Special, High), weight: 0.85 },
    Rule { when: &[(HealthDiff, Even), (OwnStamina, High)], then: (Special, Medium), weight: 0.75 },
    Rule { when: &[(Threat, Medium), (OwnHealth, High)], then: (Punch, High), weight: 0.85 },
    Rule { when: &[(OwnHealth, Medium), (OwnStamina, Medium), (Threat, Low)], then: (Punch, Medium), weight: 0.8 },
    Rule { when: &[(OwnStamina, VeryHigh), (PlayerHealth, Medium)], then: (Punch, High), weight: 0.8 },
    // Danger responses
    Rule { when: &[(Threat, High), (OwnHealth, Medium)], then: (Block, High), weight: 0.9 },
    Rule { when: &[(Threat, High), (OwnHealth, Low)], then: (Evade, High), weight: 0.9 },
    Rule { when: &[(HealthDiff, LargeDisadvantage), (OwnStamina, Medium)], then: (Block, VeryHigh), weight: 0.9 },
    Rule { when: &[(OwnHealth, VeryLow), (PlayerHealth, High)], then: (Evade, VeryHigh), weight: 0.9 },
    // Pattern punishment
    Rule { when: &[(Pattern, Strong)], then: (Block, High), weight: 0.85 },
    Rule { when: &[(Pattern, VeryStrong), (Threat, High)], then: (Evade, VeryHigh), weight: 0.9 },
    Rule { when: &[(Pattern, Strong), (HealthDiff, Disadvantage)], then: (Block, VeryHigh), weight: 0.9 },
    // Cooldown awareness
    Rule { when: &[(Cooldown, Ready), (PlayerHealth, Low)], then: (Special, VeryHigh), weight: 1.0 },
    Rule { when: &[(Cooldown, NotReady), (OwnStamina, High)], then: (Punch, High), weight: 0.75 },
    // Close out a nearly beaten player
    Rule { when: &[(PlayerHealth, VeryLow), (OwnStamina, High)], then: (Special, VeryHigh), weight: 1.0 },
    Rule { when: &[(PlayerHealth, VeryLow), (OwnStamina, Medium)], then: (Punch, VeryHigh), weight: 1.0 },
    Rule { when: &[(PlayerHealth, VeryLow), (OwnStamina, High)], then: (Punch, VeryHigh), weight: 1.0 },
    Rule { when: &[(PlayerHealth, VeryLow), (OwnStamina, VeryHigh)], then: (Punch, VeryHigh), weight: 1.0 },
    Rule { when: &[(PlayerHealth, Low), (OwnStamina, High), (Cooldown, NotReady)], then: (Punch, High), weight: 0.9 },
    Rule { when: &[(PlayerHealth, Low), (OwnStamina, VeryHigh), (Cooldown, NotReady)], then: (Kick, High), weight: 0.85 },
    Rule { when: &[(PlayerHealth, Low), (HealthDiff, Advantage), (OwnStamina, Medium)], then: (Punch, High), weight: 0.9 },
    Rule { when: &[(PlayerHealth, Low), (HealthDiff, LargeAdvantage), (OwnStamina, High)], then: (Kick, High), weight: 0.9 },
];

const CENTROID_SAMPLES: usize = 100;

/// Centroid of the union of output sets, each clipped at its firing level.
fn centroid(clips: &[(Term, f32)]) -> f32 {
    let mut area = 0.0f32;
    let mut weighted = 0.0f32;
    for i in 0..=CENTROID_SAMPLES {
        let x = i as f32 / CENTROID_SAMPLES as f32;
        let mut m = 0.0f32;
        for &(term, clip) in clips {
            m = m.max(output_membership(term).grade(x).min(clip));
        }
        area += m;
        weighted += x * m;
    }
    if area > 0.0 {
        weighted / area
    } else {
        0.0
    }
}

/// Run the full rule base and return one raw score per move, in catalog
/// order. A move no rule fired for scores 0.0.
pub fn action_scores(inputs: &FuzzyInputs) -> [(MoveKind, f32); 6] {
    let mut aggregated: HashMap<MoveKind, HashMap<Term, f32>> = HashMap::new();
    for rule in RULES {
        let strength = rule.firing_strength(inputs);
        if strength > 0.0 {
            let (kind, term) = rule.then;
            let slot = aggregated.entry(kind).or_default().entry(term).or_insert(0.0);
            *slot = slot.max(strength);
        }
    }
    MoveKind::ALL.map(|kind| {
        let score = aggregated
            .get(&kind)
            .map(|clips| {
                let clips: Vec<(Term, f32)> = clips.iter().map(|(&t, &c)| (t, c)).collect();
                centroid(&clips)
            })
            .unwrap_or(0.0);
        (kind, score)
    })
}
