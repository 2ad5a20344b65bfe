//! # Shunt Outcome
//!
//! A two-rail outcome core: every fallible computation ends on exactly
//! one of two rails — success or failure — and composition never leaves
//! the pair.
//!
//! This crate is **domain-agnostic**: it does not prescribe what a
//! failure is (an error enum, a captured fault, a plain message). It
//! only prescribes how values and faults are normalized onto the rails
//! and how chains move between them.
//!
//! ## Architecture
//!
//! ```text
//! Normalize<T, E>       ← Ingestion: value / fault / already-wrapped
//!     │
//! Outcome<T, E>         ← The two rails: Success(T) | Failure(E)
//!     │
//! Deferred<F>           ← Captured work, normalized when invoked
//!     │
//! Procedure             ← Method objects whose call auto-wraps
//! ```
//!
//! The contract is strict: `and_then` and `or_else` closures must return
//! an [`Outcome`]; lenient ingestion happens once, at the boundary,
//! through [`Outcome::wrap`] or a [`Deferred`] invocation.

pub mod deferred;
pub mod normalize;
pub mod outcome;
pub mod procedure;

pub use deferred::{Deferred, defer};
pub use normalize::Normalize;
pub use outcome::Outcome;
pub use procedure::Procedure;
