//! Ingestion: how raw computation results become outcomes.
//!
//! The boundary of a pipeline sees three kinds of input:
//!
//! - an already-constructed [`Outcome`] (from a nested pipeline),
//! - a `Result`, whose `Err` arm is the fault channel,
//! - a plain value, which enters through [`Outcome::success`].
//!
//! The first two are classified by this trait; the third is classified
//! by the type system itself. Normalization is total and idempotent:
//! whatever a computation hands back, exactly one rail receives it, and
//! re-normalizing an outcome never nests it.

use crate::outcome::Outcome;

/// A value that can be classified onto one of the two rails.
///
/// Implemented for [`Outcome`] (identity — the idempotence guarantee)
/// and for `Result` (fault classification). Combinator-facing code
/// should accept `impl Normalize<T, E>` wherever the original input may
/// or may not already be wrapped.
pub trait Normalize<T, E> {
    /// Classify `self` onto the success or failure rail.
    fn normalize(self) -> Outcome<T, E>;
}

/// An outcome is already normal. Returned unchanged — never
/// `Success(Success(x))`.
impl<T, E> Normalize<T, E> for Outcome<T, E> {
    fn normalize(self) -> Outcome<T, E> {
        self
    }
}

/// `Err` is the raised-fault channel: it always lands on the failure
/// rail, and an `Ok` payload always lands on the success rail.
impl<T, E> Normalize<T, E> for Result<T, E> {
    fn normalize(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(fault) => Outcome::Failure(fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_normalizes_to_itself() {
        let outcome: Outcome<i32, String> = Outcome::Success(7);
        assert_eq!(outcome.clone().normalize(), outcome);

        let outcome: Outcome<i32, String> = Outcome::Failure("fault".into());
        assert_eq!(outcome.clone().normalize(), outcome);
    }

    #[test]
    fn err_is_classified_as_failure() {
        let result: Result<i32, String> = Err("fault".into());
        assert!(result.normalize().is_failure());
    }

    #[test]
    fn ok_is_classified_as_success() {
        let result: Result<i32, String> = Ok(7);
        assert_eq!(result.normalize(), Outcome::Success(7));
    }
}
