//! Fault types for the model validators.

/// Faults arising while validating script metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The document is not valid JSON.
    #[error("metadata is not valid JSON: {0}")]
    Malformed(String),

    /// The document has no `schemaVersions` object.
    #[error("metadata is missing schemaVersions")]
    MissingSchemaVersions,

    /// Scripts attach to exactly one extension point for now.
    #[error("metadata schemaVersions should have one key")]
    NotExactlyOneExtensionPoint,

    /// The schema version has no `major` key.
    #[error("metadata schema version is missing major key")]
    MissingMajorVersion,

    /// The schema version has no `minor` key and is not a prerelease.
    #[error("metadata schema version is missing minor key")]
    MissingMinorVersion,
}

/// Faults arising while validating an extension registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The title is empty, blank, or longer than the cap.
    #[error("invalid registration title: {0:?}")]
    InvalidTitle(String),
}
