//! Script metadata: the `schemaVersions` document emitted by a script
//! build.
//!
//! The document names the extension point schema the script was
//! compiled against:
//!
//! ```json
//! { "schemaVersions": { "example": { "major": "1", "minor": "0" } } }
//! ```
//!
//! A major version of `"prerelease"` marks an unstable schema; only
//! prerelease schemas may omit the minor version.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shunt_outcome::{Outcome, Procedure};

use crate::error::MetadataError;

/// The schema version a script was built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub schema_major_version: String,
    pub schema_minor_version: Option<String>,
}

const PRERELEASE_MAJOR: &str = "prerelease";

impl Metadata {
    /// Parse and validate a metadata document.
    ///
    /// The single normalization point for metadata: every fault the
    /// validation raises internally surfaces as a failure outcome here.
    pub fn from_json(raw: &str) -> Outcome<Metadata, MetadataError> {
        Outcome::wrap(parse(raw))
    }

    /// Whether the schema is a prerelease (unstable) one.
    pub fn prerelease(&self) -> bool {
        self.schema_major_version == PRERELEASE_MAJOR
    }
}

fn parse(raw: &str) -> Result<Metadata, MetadataError> {
    let document: Value =
        serde_json::from_str(raw).map_err(|e| MetadataError::Malformed(e.to_string()))?;

    let schema_versions = document
        .get("schemaVersions")
        .and_then(Value::as_object)
        .ok_or(MetadataError::MissingSchemaVersions)?;

    // Scripts may attach to more than one extension point in the
    // future, but not right now.
    if schema_versions.len() != 1 {
        return Err(MetadataError::NotExactlyOneExtensionPoint);
    }
    let (_, version) = schema_versions
        .iter()
        .next()
        .ok_or(MetadataError::NotExactlyOneExtensionPoint)?;

    let schema_major_version =
        scalar(version.get("major")).ok_or(MetadataError::MissingMajorVersion)?;
    let is_prerelease = schema_major_version == PRERELEASE_MAJOR;

    let schema_minor_version = scalar(version.get("minor"));
    if schema_minor_version.is_none() && !is_prerelease {
        return Err(MetadataError::MissingMinorVersion);
    }

    Ok(Metadata {
        schema_major_version,
        schema_minor_version,
    })
}

/// Version keys arrive as strings or numbers depending on the compiler
/// that wrote the document; both read as their string rendering.
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Metadata parsing as a procedure, for use inside outcome pipelines.
pub struct ParseMetadata;

impl Procedure for ParseMetadata {
    type Input = String;
    type Value = Metadata;
    type Failure = MetadataError;
    type Raw = Result<Metadata, MetadataError>;

    fn run(&self, input: String) -> Result<Metadata, MetadataError> {
        parse(&input)
    }
}
