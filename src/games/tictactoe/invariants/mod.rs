//! Engine invariants.
//!
//! [`EngineInvariants`] runs after every accepted move; a failure rolls the
//! move back.

/// A property of engine state that every accepted move must preserve.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;

    /// `Err` naming this invariant when it does not hold.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// A broken invariant, by description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the broken invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked as one postcondition.
///
/// Tuples of two or three invariants implement this; every member is
/// checked and all failures are reported.
pub trait InvariantSet<S> {
    /// `Ok` if every member holds, otherwise each violation in member order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect_violations(
    results: impl IntoIterator<Item = Result<(), InvariantViolation>>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results.into_iter().filter_map(Result::err).collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, A: Invariant<S>, B: Invariant<S>> InvariantSet<S> for (A, B) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([A::check(state), B::check(state)])
    }
}

impl<S, A: Invariant<S>, B: Invariant<S>, C: Invariant<S>> InvariantSet<S> for (A, B, C) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([A::check(state), B::check(state), C::check(state)])
    }
}

pub mod alternating_turn;
pub mod board_shape;
pub mod consistent_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_shape::BoardShapeInvariant;
pub use consistent_winner::ConsistentWinnerInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    BoardShapeInvariant,
    AlternatingTurnInvariant,
    ConsistentWinnerInvariant,
);
