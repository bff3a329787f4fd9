//! Provenance relations and their range rules

use crate::error::ValidationError;
use crate::kind::EntityKind;
use crate::uri::RecordUri;
use std::fmt;

/// A provenance edge a record may carry.
///
/// `used` and `wasInformedBy` are activity-side relations; they are part of
/// the vocabulary (the synthesized activity layer and the ontology artifact
/// use them) but no entity draft may carry them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Entity ← predecessor entity in the chain
    WasDerivedFrom,
    /// Entity ← the activity that produced it
    WasGeneratedBy,
    /// Activity ← the entity it consumed
    Used,
    /// Activity ← the activity that preceded it
    WasInformedBy,
    /// Evidence/Result backing a Hypothesis
    Supports,
    /// Evidence/Result undermining a Hypothesis
    Contradicts,
    /// Entity ← its reified uncertainty model
    HasUncertainty,
}

impl Relation {
    /// Relation name as it appears in tool parameters and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Relation::WasDerivedFrom => "wasDerivedFrom",
            Relation::WasGeneratedBy => "wasGeneratedBy",
            Relation::Used => "used",
            Relation::WasInformedBy => "wasInformedBy",
            Relation::Supports => "supports",
            Relation::Contradicts => "contradicts",
            Relation::HasUncertainty => "hasUncertainty",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One provenance edge: relation plus target URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvLink {
    /// The relation carried
    pub relation: Relation,
    /// The edge target
    pub target: RecordUri,
}

impl ProvLink {
    /// Convenience constructor.
    pub fn new(relation: Relation, target: RecordUri) -> Self {
        Self { relation, target }
    }

    /// Check this link against the rules for the kind being built.
    ///
    /// Targets inside the minted-record namespace are kind-checked via
    /// their URI segment; foreign targets are accepted as-is since their
    /// type cannot be known without a graph read.
    pub fn check(&self, source: EntityKind) -> Result<(), ValidationError> {
        let allowed: &[EntityKind] = match self.relation {
            Relation::WasDerivedFrom => {
                let sources = source.derivation_sources();
                if sources.is_empty() {
                    return Err(ValidationError::InvalidRelation {
                        kind: source,
                        relation: self.relation,
                    });
                }
                sources
            }
            Relation::WasGeneratedBy => {
                // The Question's generating activity is always synthesized;
                // a caller-supplied edge would duplicate it. Activity URIs
                // carry no kind segment, so other kinds get no local check.
                if source == EntityKind::Question || source == EntityKind::UncertaintyModel {
                    return Err(ValidationError::InvalidRelation {
                        kind: source,
                        relation: self.relation,
                    });
                }
                return Ok(());
            }
            Relation::Supports | Relation::Contradicts => {
                if source != EntityKind::Evidence && source != EntityKind::Result {
                    return Err(ValidationError::InvalidRelation {
                        kind: source,
                        relation: self.relation,
                    });
                }
                &[EntityKind::Hypothesis]
            }
            Relation::HasUncertainty => {
                if source == EntityKind::UncertaintyModel {
                    return Err(ValidationError::InvalidRelation {
                        kind: source,
                        relation: self.relation,
                    });
                }
                &[EntityKind::UncertaintyModel]
            }
            Relation::Used | Relation::WasInformedBy => {
                return Err(ValidationError::InvalidRelation {
                    kind: source,
                    relation: self.relation,
                });
            }
        };

        match self.target.kind() {
            Some(kind) if !allowed.contains(&kind) => Err(ValidationError::IncompatibleTarget {
                relation: self.relation,
                target: self.target.as_str().to_string(),
            }),
            _ => Ok(()),
        }
    }
}
