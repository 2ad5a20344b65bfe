//! # Shunt Models
//!
//! Example consumers of the outcome core. Internally these models
//! raise-or-return with plain `Result` and `?`; each public entry point
//! normalizes exactly once, so downstream code always handles an
//! [`shunt_outcome::Outcome`] regardless of which validator produced it.

pub mod error;
pub mod metadata;
pub mod registration;

pub use error::{MetadataError, RegistrationError};
pub use metadata::{Metadata, ParseMetadata};
pub use registration::Registration;
