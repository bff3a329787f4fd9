//! Validation errors raised while checking a record draft

use crate::kind::EntityKind;
use crate::relation::Relation;
use crate::record::Field;
use std::fmt;

/// A record draft or provenance link failed validation.
///
/// Validation is all-or-nothing: the first violation is reported and no
/// triples are constructed for the offending record. Every variant is
/// caller-correctable; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent from the draft
    MissingField {
        /// Kind being built
        kind: EntityKind,
        /// First missing required field, in schema order
        field: Field,
    },
    /// A required field is present but empty
    EmptyField {
        /// Kind being built
        kind: EntityKind,
        /// Offending field
        field: Field,
    },
    /// A field not in the kind's schema was supplied
    UnknownField {
        /// Kind being built
        kind: EntityKind,
        /// Offending field
        field: Field,
    },
    /// A non-repeatable field was supplied more than once
    DuplicateField {
        /// Kind being built
        kind: EntityKind,
        /// Offending field
        field: Field,
    },
    /// The relation is not declared for the kind being built
    InvalidRelation {
        /// Kind being built
        kind: EntityKind,
        /// Offending relation
        relation: Relation,
    },
    /// A link target inside the record namespace has the wrong kind segment
    IncompatibleTarget {
        /// Relation carrying the bad target
        relation: Relation,
        /// The target URI as supplied
        target: String,
    },
    /// A reference value is not a usable URI
    InvalidReference {
        /// The value as supplied
        value: String,
    },
    /// The uncertainty nature is not one of the permitted values
    InvalidUncertaintyNature {
        /// The value as supplied
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { kind, field } => {
                write!(f, "{} requires field '{}'", kind, field.name())
            }
            ValidationError::EmptyField { kind, field } => {
                write!(f, "{} field '{}' must not be empty", kind, field.name())
            }
            ValidationError::UnknownField { kind, field } => {
                write!(f, "{} has no field '{}'", kind, field.name())
            }
            ValidationError::DuplicateField { kind, field } => {
                write!(f, "{} field '{}' given more than once", kind, field.name())
            }
            ValidationError::InvalidRelation { kind, relation } => {
                write!(f, "{} cannot carry relation '{}'", kind, relation.name())
            }
            ValidationError::IncompatibleTarget { relation, target } => {
                write!(
                    f,
                    "relation '{}' cannot target <{}>: wrong entity kind",
                    relation.name(),
                    target
                )
            }
            ValidationError::InvalidReference { value } => {
                write!(f, "'{}' is not a valid URI reference", value)
            }
            ValidationError::InvalidUncertaintyNature { value } => {
                write!(
                    f,
                    "'{}' is not an uncertainty nature (expected Epistemic or Aleatory)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
