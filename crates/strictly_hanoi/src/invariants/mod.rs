//! First-class invariants for Towers of Hanoi boards.
//!
//! Invariants are logical properties that must hold for every board, before
//! and after each accepted move. They validate untrusted boards on
//! construction and serve as move postconditions.

use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;

    /// The violation, if the invariant fails.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violations into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Invariants checked together, every violation collected.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($invariant:ident),+) => {
        impl<S, $($invariant: Invariant<S>),+> InvariantSet<S> for ($($invariant,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$($invariant::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod disk_conservation;
pub mod disk_count;
pub mod stack_order;

pub use disk_conservation::DiskConservationInvariant;
pub use disk_count::DiskCountInvariant;
pub use stack_order::StackOrderInvariant;

/// All board invariants as a composable set.
pub type HanoiInvariants = (
    DiskCountInvariant,
    DiskConservationInvariant,
    StackOrderInvariant,
);

/// Invariants a move could break. Moves never change the disk count.
pub type MoveInvariants = (DiskConservationInvariant, StackOrderInvariant);
