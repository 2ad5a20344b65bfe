//! Method objects with an auto-wrapping entry point.
//!
//! A [`Procedure`] is a named unit of work invoked through a single
//! `call`. Implementors write the work itself in [`Procedure::run`],
//! returning whatever fallible shape is natural there (`Result`, a
//! nested [`Outcome`]); the provided `call` normalizes it, so every
//! caller sees an outcome back from every invocation without wrapping
//! anything by hand.

use crate::normalize::Normalize;
use crate::outcome::Outcome;

/// A unit of work exposed as a single, outcome-returning entry point.
///
/// The seam between a pipeline and the code that does actual work.
/// `run` is the implementation surface; `call` is the invocation
/// surface. Callers only ever see `call`.
pub trait Procedure {
    /// What the procedure consumes.
    type Input;

    /// The success payload.
    type Value;

    /// The failure payload.
    type Failure;

    /// What `run` actually returns, normalized by `call`.
    type Raw: Normalize<Self::Value, Self::Failure>;

    /// The work itself.
    fn run(&self, input: Self::Input) -> Self::Raw;

    /// Invoke the procedure, normalizing its result onto the rails.
    fn call(&self, input: Self::Input) -> Outcome<Self::Value, Self::Failure> {
        Outcome::wrap(self.run(input))
    }
}
