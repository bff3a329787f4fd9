//! Uncertainty nature enumeration

/// Nature of a reified uncertainty model.
///
/// Two permitted values, matching the uncertainty-representation vocabulary
/// the ontology borrows from:
/// - Epistemic: uncertainty due to lack of knowledge
/// - Aleatory: uncertainty due to inherent randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UncertaintyNature {
    /// Uncertainty due to lack of knowledge
    Epistemic,
    /// Uncertainty due to inherent randomness
    Aleatory,
}

impl UncertaintyNature {
    /// Get the nature name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UncertaintyNature::Epistemic => "Epistemic",
            UncertaintyNature::Aleatory => "Aleatory",
        }
    }

    /// Parse a nature from a string (internal use).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Epistemic" => Some(UncertaintyNature::Epistemic),
            "Aleatory" => Some(UncertaintyNature::Aleatory),
            _ => None,
        }
    }
}

impl std::str::FromStr for UncertaintyNature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid uncertainty nature: {}", s))
    }
}

impl std::fmt::Display for UncertaintyNature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
