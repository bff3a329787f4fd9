//! Record URI minting and reference parsing

use crate::error::ValidationError;
use crate::kind::EntityKind;
use std::fmt;

/// Base of every URI this process mints.
pub const RECORD_BASE: &str = "http://labtrace.io/record/";

/// Suffix appended to a Question URI to name its companion activity.
pub const GENERATION_SUFFIX: &str = "/generation";

/// URI identity of a record or referenced resource.
///
/// Minted URIs are `RECORD_BASE` + kind segment + a uuid-v4 token, so the
/// kind of a minted target can be recovered from the URI alone. Foreign
/// URIs (agents, external vocabularies) pass through [`RecordUri::parse`]
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordUri(String);

impl RecordUri {
    /// Mint a fresh, process-unique URI for a record of the given kind.
    pub fn mint(kind: EntityKind) -> Self {
        Self(format!(
            "{}{}/{}",
            RECORD_BASE,
            kind.segment(),
            uuid::Uuid::new_v4().simple()
        ))
    }

    /// Accept a caller-supplied URI reference.
    ///
    /// The check is deliberately shallow: a usable reference has a scheme
    /// separator and no whitespace. Full IRI validation belongs to the RDF
    /// layer, which rejects malformed nodes at serialization time.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.chars().any(char::is_whitespace)
            || !trimmed.contains(':')
        {
            return Err(ValidationError::InvalidReference {
                value: value.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entity kind encoded in a minted URI, if this is one.
    ///
    /// Foreign URIs return `None`; the caller cannot range-check those
    /// without a graph read.
    pub fn kind(&self) -> Option<EntityKind> {
        let rest = self.0.strip_prefix(RECORD_BASE)?;
        let segment = rest.split('/').next()?;
        EntityKind::parse(segment)
    }

    /// URI of the companion activity derived from this record's URI.
    pub fn generation_activity(&self) -> RecordUri {
        Self(format!("{}{}", self.0, GENERATION_SUFFIX))
    }
}

impl fmt::Display for RecordUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
