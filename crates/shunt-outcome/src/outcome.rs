//! The two rails.
//!
//! An [`Outcome`] holds either a successful payload or a failure
//! payload, never both, never neither. Once constructed it is immutable;
//! every combinator consumes its input and produces a new, independently
//! owned outcome. Chains short-circuit: after the first failure, no
//! success-rail step runs until an [`Outcome::or_else`] recovers.
//!
//! The combinator contract is strict — closures passed to
//! [`Outcome::and_then`] and [`Outcome::or_else`] must return an
//! `Outcome`. Lenient ingestion of raw `Result`s or nested outcomes
//! happens once, through [`Outcome::wrap`].

use serde::{Deserialize, Serialize};

use crate::normalize::Normalize;

/// The result of a fallible computation: a value on the success rail or
/// a fault on the failure rail.
///
/// Outcomes are pure values: no interior mutability, no I/O, freely
/// shareable across threads when `T` and `E` are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "an unexamined outcome may hide a failure"]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),

    /// The computation produced a fault or an application-level error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Place a plain value on the success rail.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Place a fault on the failure rail.
    pub fn failure(fault: E) -> Self {
        Self::Failure(fault)
    }

    /// Normalize any fallible input onto the rails.
    ///
    /// Accepts an existing `Outcome` (returned unchanged — wrapping is
    /// idempotent) or a `Result` (classified: `Ok` to success, `Err` to
    /// failure). This is the lenient boundary constructor; everything
    /// past it stays strict.
    pub fn wrap(input: impl Normalize<T, E>) -> Self {
        input.normalize()
    }

    /// Whether this outcome sits on the success rail.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome sits on the failure rail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Continue the chain on the success rail.
    ///
    /// Applies `next` to the held value. On a failure, `next` never
    /// runs and the failure passes through unchanged — this is the
    /// short-circuit that lets a pipeline skip past a fault.
    pub fn and_then<U>(self, next: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Recover on the failure rail.
    ///
    /// Applies `recover` to the held fault, potentially re-entering the
    /// success rail. On a success, `recover` never runs and the success
    /// passes through unchanged.
    pub fn or_else<F>(self, recover: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => recover(fault),
        }
    }

    /// Transform the success payload, staying on the same rail.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Transform the failure payload, staying on the same rail.
    pub fn map_failure<F>(self, transform: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(transform(fault)),
        }
    }

    /// The held value.
    ///
    /// This is the unchecked accessor: callers use it only after the
    /// chain guarantees the success rail.
    ///
    /// # Panics
    ///
    /// Panics on a failure outcome — unchecked access is a usage bug,
    /// never folded into the failure channel.
    pub fn value(self) -> T
    where
        E: std::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => {
                panic!("unchecked access of a failure outcome: {fault:?}")
            }
        }
    }

    /// The held fault, or `None` on the success rail.
    ///
    /// Unlike [`Outcome::value`], reading the failure side of a success
    /// is not a usage bug; it answers "did anything go wrong" with an
    /// absent marker.
    pub fn failure_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// The held value, or `fallback` on the failure rail.
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// The held value, or the result of `recover` applied to the fault.
    ///
    /// `recover` produces a plain value; no normalization happens at
    /// this boundary — the chain is over.
    pub fn value_or_else(self, recover: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => recover(fault),
        }
    }

    /// Leave the rails: convert into a `Result` for `?`-based code.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.normalize()
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
