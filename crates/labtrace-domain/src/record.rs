//! Record drafts and the static field-schema table

use crate::error::ValidationError;
use crate::kind::EntityKind;
use crate::uncertainty::UncertaintyNature;

/// Scalar field of a record.
///
/// The field set is closed: every field name the store will ever serialize
/// appears here, and the per-kind schema table below decides which are
/// accepted. There is no runtime-mutable field registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Human-readable label (`rdfs:label`)
    Label,
    /// Textual content of Evidence or a Conclusion
    Content,
    /// Formatted bibliographic citation
    Citation,
    /// DOI or URL of the source publication
    Source,
    /// Method description of an ExperimentalMethod
    Method,
    /// One configured parameter of an ExperimentalMethod (repeatable)
    Parameter,
    /// Scalar value of a Result
    Value,
    /// Unit of a Result value
    Unit,
    /// Nature of an UncertaintyModel (Epistemic or Aleatory)
    Nature,
    /// How the uncertainty was assessed
    Derivation,
}

impl Field {
    /// Field name as it appears in tool parameters and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Label => "label",
            Field::Content => "content",
            Field::Citation => "citation",
            Field::Source => "source",
            Field::Method => "method",
            Field::Parameter => "parameter",
            Field::Value => "value",
            Field::Unit => "unit",
            Field::Nature => "natureOfUncertainty",
            Field::Derivation => "derivationOfUncertainty",
        }
    }

    /// Whether the field may appear more than once on a single record.
    pub fn repeatable(self) -> bool {
        matches!(self, Field::Parameter)
    }
}

/// Required/optional field sets for one entity kind.
#[derive(Debug)]
pub struct KindSchema {
    /// Fields that must be present and non-empty
    pub required: &'static [Field],
    /// Fields that may be present
    pub optional: &'static [Field],
}

impl KindSchema {
    fn accepts(&self, field: Field) -> bool {
        self.required.contains(&field) || self.optional.contains(&field)
    }
}

impl EntityKind {
    /// The static schema for this kind.
    pub fn schema(self) -> &'static KindSchema {
        match self {
            EntityKind::Question => &KindSchema {
                required: &[Field::Label],
                optional: &[],
            },
            EntityKind::Evidence => &KindSchema {
                required: &[Field::Content, Field::Citation, Field::Source],
                // Label is derived from content when absent
                optional: &[Field::Label],
            },
            EntityKind::Premise => &KindSchema {
                required: &[Field::Label],
                optional: &[],
            },
            EntityKind::Hypothesis => &KindSchema {
                required: &[Field::Label],
                optional: &[],
            },
            EntityKind::ExperimentalMethod => &KindSchema {
                required: &[Field::Label],
                optional: &[Field::Method, Field::Parameter],
            },
            EntityKind::Dataset => &KindSchema {
                required: &[Field::Label],
                optional: &[],
            },
            EntityKind::Result => &KindSchema {
                required: &[Field::Label],
                optional: &[Field::Value, Field::Unit],
            },
            EntityKind::Conclusion => &KindSchema {
                required: &[Field::Label],
                optional: &[Field::Content],
            },
            EntityKind::UncertaintyModel => &KindSchema {
                required: &[Field::Nature],
                optional: &[Field::Derivation],
            },
        }
    }
}

/// A record about to be built: a kind plus its scalar field values.
///
/// Drafts are assembled with the builder-style [`RecordDraft::field`] and
/// checked once with [`RecordDraft::validate`]; an invalid draft never
/// produces triples.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    kind: EntityKind,
    fields: Vec<(Field, String)>,
}

impl RecordDraft {
    /// Start an empty draft of the given kind.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Append a field value.
    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.fields.push((field, value.into()));
        self
    }

    /// The kind being drafted.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// All field values, in insertion order.
    pub fn fields(&self) -> &[(Field, String)] {
        &self.fields
    }

    /// First value of the given field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Validate the draft against the kind's schema.
    ///
    /// Checks, in order: no unknown fields, no duplicated non-repeatable
    /// fields, every required field present (first missing one named) and
    /// non-empty, and, for `UncertaintyModel`, a parseable nature value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let schema = self.kind.schema();

        for (field, _) in &self.fields {
            if !schema.accepts(*field) {
                return Err(ValidationError::UnknownField {
                    kind: self.kind,
                    field: *field,
                });
            }
            if !field.repeatable() {
                let occurrences = self.fields.iter().filter(|(f, _)| f == field).count();
                if occurrences > 1 {
                    return Err(ValidationError::DuplicateField {
                        kind: self.kind,
                        field: *field,
                    });
                }
            }
        }

        for field in schema.required {
            match self.get(*field) {
                None => {
                    return Err(ValidationError::MissingField {
                        kind: self.kind,
                        field: *field,
                    })
                }
                Some(value) if value.trim().is_empty() => {
                    return Err(ValidationError::EmptyField {
                        kind: self.kind,
                        field: *field,
                    })
                }
                Some(_) => {}
            }
        }

        if self.kind == EntityKind::UncertaintyModel {
            let value = self.get(Field::Nature).unwrap_or_default();
            if UncertaintyNature::parse(value).is_none() {
                return Err(ValidationError::InvalidUncertaintyNature {
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}
