//! Turn phases and the transition table.
//!
//! The phase is a closed sum type: the pending conquest move only exists
//! inside `Phase::AttackMove`, so an attack-move phase without move details
//! cannot be constructed. Legal transitions are listed in one table keyed
//! by (phase, requested transition).
//!
//! Turn flow:
//! - Deploy     -> Attack      (all reinforcements placed)
//! - Attack     -> AttackMove  (conquest)
//! - AttackMove -> Attack      (mandatory move completed)
//! - Attack     -> Fortify
//! - Fortify    -> Deploy      (next player)
//! - any        -> GameOver    (a player holds no territory)

use serde::Serialize;

use crate::board::Territory;

/// Armies that must or may follow a successful attack into the conquered
/// territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PendingMove {
    pub from: Territory,
    pub to: Territory,
    pub min: u32,
    pub max: u32,
}

impl PendingMove {
    pub fn allows(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// The current phase of the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Deploy,
    Attack,
    AttackMove(PendingMove),
    Fortify,
    GameOver,
}

/// The data-free tag of a `Phase`, used for transition lookups and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    Deploy,
    Attack,
    AttackMove,
    Fortify,
    GameOver,
}

/// A requested change of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    BeginAttack,
    Conquer,
    CompleteMove,
    BeginFortify,
    EndTurn,
    EndGame,
}

impl Phase {
    pub const fn kind(&self) -> PhaseKind {
        match self {
            Phase::Deploy => PhaseKind::Deploy,
            Phase::Attack => PhaseKind::Attack,
            Phase::AttackMove(_) => PhaseKind::AttackMove,
            Phase::Fortify => PhaseKind::Fortify,
            Phase::GameOver => PhaseKind::GameOver,
        }
    }

    /// Returns the pending conquest move, if one is outstanding.
    pub const fn pending_move(&self) -> Option<PendingMove> {
        match self {
            Phase::AttackMove(m) => Some(*m),
            _ => None,
        }
    }
}

impl PhaseKind {
    pub const fn name(self) -> &'static str {
        match self {
            PhaseKind::Deploy => "DEPLOY",
            PhaseKind::Attack => "ATTACK",
            PhaseKind::AttackMove => "ATTACK_MOVE",
            PhaseKind::Fortify => "FORTIFY",
            PhaseKind::GameOver => "GAME_OVER",
        }
    }
}

impl Transition {
    /// Names the player action that requests this transition.
    pub const fn action(self) -> &'static str {
        match self {
            Transition::BeginAttack => "begin attack",
            Transition::Conquer => "conquer",
            Transition::CompleteMove => "move after conquest",
            Transition::BeginFortify => "begin fortify",
            Transition::EndTurn => "end turn",
            Transition::EndGame => "end game",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the phase reached by applying `transition` in `from`.
///
/// Returns None when the transition is not legal from that phase.
pub const fn transition(from: PhaseKind, transition: Transition) -> Option<PhaseKind> {
    use PhaseKind as P;
    use Transition as T;
    match (from, transition) {
        (P::GameOver, _) => None,
        (_, T::EndGame) => Some(P::GameOver),
        (P::Deploy, T::BeginAttack) => Some(P::Attack),
        (P::Attack, T::Conquer) => Some(P::AttackMove),
        (P::AttackMove, T::CompleteMove) => Some(P::Attack),
        (P::Attack, T::BeginFortify) => Some(P::Fortify),
        (P::Fortify, T::EndTurn) => Some(P::Deploy),
        _ => None,
    }
}
