//! Entity and activity kinds of the provenance chain

use std::fmt;

/// Concrete entity kind of a record.
///
/// Each kind maps to a domain class in the ontology and is dual-typed as
/// `prov:Entity` when serialized. The chain runs Question → Evidence →
/// Premise → Hypothesis → ExperimentalMethod → Dataset → Result →
/// Conclusion; `UncertaintyModel` sits beside the chain and is attached to
/// any entity via `hasUncertainty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An interrogative sentence representing the research query
    Question,
    /// A factual claim extracted from a source
    Evidence,
    /// An assessed statement distilled from evidence
    Premise,
    /// A testable claim derived from evidence
    Hypothesis,
    /// A specification of the experimental or computational method
    ExperimentalMethod,
    /// Raw data, observations, or measurements produced by experimentation
    Dataset,
    /// The outcome of an analysis activity
    Result,
    /// The answer the chain converges on
    Conclusion,
    /// A reified uncertainty model attached to another entity
    UncertaintyModel,
}

impl EntityKind {
    /// All kinds, in chain order.
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Question,
        EntityKind::Evidence,
        EntityKind::Premise,
        EntityKind::Hypothesis,
        EntityKind::ExperimentalMethod,
        EntityKind::Dataset,
        EntityKind::Result,
        EntityKind::Conclusion,
        EntityKind::UncertaintyModel,
    ];

    /// Class name within the domain ontology namespace.
    pub fn class_name(self) -> &'static str {
        match self {
            EntityKind::Question => "Question",
            EntityKind::Evidence => "Evidence",
            EntityKind::Premise => "Premise",
            EntityKind::Hypothesis => "Hypothesis",
            EntityKind::ExperimentalMethod => "ExperimentalMethod",
            EntityKind::Dataset => "Dataset",
            EntityKind::Result => "Result",
            EntityKind::Conclusion => "Conclusion",
            EntityKind::UncertaintyModel => "UncertaintyModel",
        }
    }

    /// Path segment used in minted record URIs.
    pub fn segment(self) -> &'static str {
        match self {
            EntityKind::Question => "question",
            EntityKind::Evidence => "evidence",
            EntityKind::Premise => "premise",
            EntityKind::Hypothesis => "hypothesis",
            EntityKind::ExperimentalMethod => "method",
            EntityKind::Dataset => "dataset",
            EntityKind::Result => "result",
            EntityKind::Conclusion => "conclusion",
            EntityKind::UncertaintyModel => "uncertainty",
        }
    }

    /// Parse a kind from its segment or class name (internal use).
    pub fn parse(s: &str) -> Option<Self> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|k| k.segment() == s || k.class_name() == s)
    }

    /// The activity kind that generates entities of this kind.
    ///
    /// `UncertaintyModel` is the one entity without a generating activity:
    /// it describes another entity rather than being produced by a step of
    /// the method.
    pub fn generating_activity(self) -> Option<ActivityKind> {
        match self {
            EntityKind::Question => Some(ActivityKind::QuestionFormation),
            EntityKind::Evidence => Some(ActivityKind::LiteratureSearch),
            EntityKind::Premise => Some(ActivityKind::EvidenceAssessment),
            EntityKind::Hypothesis => Some(ActivityKind::HypothesisFormation),
            EntityKind::ExperimentalMethod => Some(ActivityKind::DesignOfExperiment),
            EntityKind::Dataset => Some(ActivityKind::Experimentation),
            EntityKind::Result => Some(ActivityKind::Analysis),
            EntityKind::Conclusion => Some(ActivityKind::ResultAssessment),
            EntityKind::UncertaintyModel => None,
        }
    }

    /// Entity kinds this kind may be derived from (`wasDerivedFrom` range).
    pub fn derivation_sources(self) -> &'static [EntityKind] {
        match self {
            EntityKind::Question => &[],
            EntityKind::Evidence => &[EntityKind::Question],
            EntityKind::Premise => &[EntityKind::Evidence],
            EntityKind::Hypothesis => &[EntityKind::Evidence, EntityKind::Premise],
            EntityKind::ExperimentalMethod => &[EntityKind::Hypothesis],
            EntityKind::Dataset => &[EntityKind::ExperimentalMethod],
            EntityKind::Result => &[EntityKind::Dataset],
            EntityKind::Conclusion => &[EntityKind::Result],
            EntityKind::UncertaintyModel => &[],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown entity kind: {}", s))
    }
}

/// Activity kind: a process step of the scientific method.
///
/// Activities are dual-typed as `prov:Activity` when serialized. Each one
/// consumes the previous chain entity (`used`) and is informed by the
/// previous activity (`wasInformedBy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Creating a research Question
    QuestionFormation,
    /// Searching for and extracting Evidence
    LiteratureSearch,
    /// Evaluating credibility or relevance of Evidence
    EvidenceAssessment,
    /// Synthesizing Evidence into a Hypothesis
    HypothesisFormation,
    /// Creating an ExperimentalMethod from a Hypothesis
    DesignOfExperiment,
    /// Running an ExperimentalMethod to produce a Dataset
    Experimentation,
    /// Processing a Dataset to produce a Result
    Analysis,
    /// Comparing a Result to the original Hypothesis
    ResultAssessment,
}

impl ActivityKind {
    /// Class name within the domain ontology namespace.
    pub fn class_name(self) -> &'static str {
        match self {
            ActivityKind::QuestionFormation => "QuestionFormation",
            ActivityKind::LiteratureSearch => "LiteratureSearch",
            ActivityKind::EvidenceAssessment => "EvidenceAssessment",
            ActivityKind::HypothesisFormation => "HypothesisFormation",
            ActivityKind::DesignOfExperiment => "DesignOfExperiment",
            ActivityKind::Experimentation => "Experimentation",
            ActivityKind::Analysis => "Analysis",
            ActivityKind::ResultAssessment => "ResultAssessment",
        }
    }

    /// The entity kind this activity consumes (`used` range).
    pub fn uses(self) -> Option<EntityKind> {
        match self {
            ActivityKind::QuestionFormation => None,
            ActivityKind::LiteratureSearch => Some(EntityKind::Question),
            ActivityKind::EvidenceAssessment => Some(EntityKind::Evidence),
            ActivityKind::HypothesisFormation => Some(EntityKind::Evidence),
            ActivityKind::DesignOfExperiment => Some(EntityKind::Hypothesis),
            ActivityKind::Experimentation => Some(EntityKind::ExperimentalMethod),
            ActivityKind::Analysis => Some(EntityKind::Dataset),
            ActivityKind::ResultAssessment => Some(EntityKind::Result),
        }
    }

    /// The activity kind that informs this one (`wasInformedBy` range).
    pub fn informed_by(self) -> Option<ActivityKind> {
        match self {
            ActivityKind::QuestionFormation => None,
            ActivityKind::LiteratureSearch => Some(ActivityKind::QuestionFormation),
            ActivityKind::EvidenceAssessment => Some(ActivityKind::LiteratureSearch),
            ActivityKind::HypothesisFormation => Some(ActivityKind::EvidenceAssessment),
            ActivityKind::DesignOfExperiment => Some(ActivityKind::HypothesisFormation),
            ActivityKind::Experimentation => Some(ActivityKind::DesignOfExperiment),
            ActivityKind::Analysis => Some(ActivityKind::Experimentation),
            ActivityKind::ResultAssessment => Some(ActivityKind::Analysis),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_roundtrip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::parse(kind.segment()), Some(kind));
            assert_eq!(EntityKind::parse(kind.class_name()), Some(kind));
        }
        assert_eq!(EntityKind::parse("nonsense"), None);
    }

    #[test]
    fn test_chain_is_acyclic() {
        // Each kind may only derive from kinds that appear earlier in the chain.
        let position = |k: EntityKind| EntityKind::ALL.iter().position(|x| *x == k).unwrap();
        for kind in EntityKind::ALL {
            for source in kind.derivation_sources() {
                assert!(
                    position(*source) < position(kind),
                    "{} derives from {} which is not upstream",
                    kind,
                    source
                );
            }
        }
    }

    #[test]
    fn test_every_chain_entity_has_generating_activity() {
        for kind in EntityKind::ALL {
            if kind == EntityKind::UncertaintyModel {
                assert!(kind.generating_activity().is_none());
            } else {
                assert!(kind.generating_activity().is_some());
            }
        }
    }

    #[test]
    fn test_activity_chain_alignment() {
        // LiteratureSearch consumes the Question and is informed by its formation.
        assert_eq!(
            ActivityKind::LiteratureSearch.uses(),
            Some(EntityKind::Question)
        );
        assert_eq!(
            ActivityKind::LiteratureSearch.informed_by(),
            Some(ActivityKind::QuestionFormation)
        );
        assert_eq!(ActivityKind::QuestionFormation.uses(), None);
    }
}
