//! Extension registrations: the record a partner holds for a deployed
//! extension.

use serde::{Deserialize, Serialize};
use shunt_outcome::Outcome;

use crate::error::RegistrationError;

/// A registered extension and its current draft version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: u64,
    pub kind: String,
    pub title: String,
    pub draft_version: String,
}

impl Registration {
    /// Titles longer than this are rejected at registration time.
    pub const MAX_TITLE_LENGTH: usize = 50;

    /// Whether `title` is acceptable: non-blank and within the cap.
    pub fn valid_title(title: &str) -> bool {
        !title.trim().is_empty() && title.chars().count() <= Self::MAX_TITLE_LENGTH
    }

    /// Build a registration, validating the title at the boundary.
    pub fn new(
        id: u64,
        kind: impl Into<String>,
        title: impl Into<String>,
        draft_version: impl Into<String>,
    ) -> Outcome<Registration, RegistrationError> {
        let title = title.into();
        if !Self::valid_title(&title) {
            return Outcome::failure(RegistrationError::InvalidTitle(title));
        }
        Outcome::success(Registration {
            id,
            kind: kind.into(),
            title,
            draft_version: draft_version.into(),
        })
    }
}
