//! Captured work, executed later.
//!
//! A [`Deferred`] holds a computation without running it. Construction
//! is free of side effects; only invoking the deferred value executes
//! the work, and whatever it hands back — a plain `Result`, a nested
//! outcome — is normalized onto the rails at that moment. A fault the
//! computation produces is an `Err`, and an `Err` never escapes an
//! invocation as anything but a [`Outcome::Failure`].
//!
//! Deferred values are reusable: each invocation is independent, and the
//! wrapper holds no state across invocations. Whether the captured work
//! itself has side effects is entirely the work's own business.

use crate::normalize::Normalize;
use crate::outcome::Outcome;

/// A unit of fallible work captured for later execution.
pub struct Deferred<F> {
    work: F,
}

/// Capture `work` without executing it.
///
/// Counterpart of [`Outcome::wrap`] for computations rather than
/// values: `wrap` normalizes now, `defer` normalizes at invocation time.
pub fn defer<F>(work: F) -> Deferred<F> {
    Deferred::new(work)
}

impl<F> Deferred<F> {
    /// Capture `work` without executing it.
    pub fn new(work: F) -> Self {
        Self { work }
    }

    /// Execute the captured work with `arg` and normalize its outcome.
    pub fn call<A, T, E, N>(&self, arg: A) -> Outcome<T, E>
    where
        F: Fn(A) -> N,
        N: Normalize<T, E>,
    {
        Outcome::wrap((self.work)(arg))
    }

    /// Execute the captured work with the unit argument.
    pub fn invoke<T, E, N>(&self) -> Outcome<T, E>
    where
        F: Fn(()) -> N,
        N: Normalize<T, E>,
    {
        self.call(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn construction_runs_nothing() {
        let runs = Cell::new(0);
        let deferred = defer(|()| {
            runs.set(runs.get() + 1);
            Ok::<_, String>("done")
        });
        assert_eq!(runs.get(), 0);

        assert_eq!(deferred.invoke(), Outcome::Success("done"));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn forwards_the_caller_argument() {
        let identity = defer(|value: &'static str| Ok::<_, String>(value));
        assert_eq!(identity.call("x"), Outcome::Success("x"));
    }

    #[test]
    fn a_fault_never_escapes_an_invocation() {
        let failing = defer(|()| Err::<i32, _>("boom"));
        assert_eq!(failing.invoke(), Outcome::Failure("boom"));
    }

    #[test]
    fn a_returned_outcome_is_not_wrapped_again() {
        let wrapped = defer(|n: i32| Outcome::<_, String>::success(n * 2));
        assert_eq!(wrapped.call(3), Outcome::Success(6));
    }

    #[test]
    fn invocations_are_independent() {
        let runs = Cell::new(0);
        let counting = defer(|()| {
            runs.set(runs.get() + 1);
            Ok::<_, String>(runs.get())
        });
        assert_eq!(counting.invoke(), Outcome::Success(1));
        assert_eq!(counting.invoke(), Outcome::Success(2));
    }
}
