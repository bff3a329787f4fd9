//! labtrace Domain Layer
//!
//! This crate contains the domain model for labtrace: the vocabulary of the
//! scientific-method provenance chain and the rules every recorded artifact
//! must satisfy. It has no external dependencies beyond `uuid` and defines
//! the concepts all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Record**: a scientific-method artifact (Question, Evidence, …) about
//!   to become a set of RDF triples
//! - **Kind**: the concrete entity class of a record, paired with the
//!   PROV activity class that generates it
//! - **Schema table**: the static required/optional field table each draft
//!   is validated against
//! - **Relation rules**: which provenance edges a kind may carry, and what
//!   they may point at
//! - **RecordUri**: process-unique identifier, assigned at creation and
//!   never reassigned
//!
//! ## Architecture
//!
//! This crate follows the same layering as the rest of the workspace:
//! pure domain logic only, no I/O, no RDF types. The infrastructure
//! implementations (triple construction, persistence, projection) live in
//! `labtrace-store`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kind;
pub mod record;
pub mod relation;
pub mod uncertainty;
pub mod uri;

// Re-exports for convenience
pub use error::ValidationError;
pub use kind::{ActivityKind, EntityKind};
pub use record::{Field, KindSchema, RecordDraft};
pub use relation::{ProvLink, Relation};
pub use uncertainty::UncertaintyNature;
pub use uri::RecordUri;
