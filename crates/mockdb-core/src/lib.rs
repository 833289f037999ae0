//! MockDB Core - model declaration parsing
//!
//! This crate normalizes a declarative entity schema plus optional initial
//! values into scalar properties and typed relational links, the
//! initialization step of MockDB's in-memory data modeling system.

pub mod declaration;
pub mod diagnostics;
pub mod error;
pub mod parse;
pub mod relation;
pub mod scalar;

pub use declaration::{FieldSpec, Generator, InitialValue, InitialValues, ModelDeclaration};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::{Error, Result};
pub use parse::{parse_model_declaration, parse_model_declaration_with, ParsedModel};
pub use relation::{NodeId, Reference, RelationKind, RelationLink};
pub use scalar::{Scalar, ScalarKind};
