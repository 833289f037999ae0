//! Model declaration parsing

use crate::declaration::{FieldSpec, InitialValue, InitialValues, ModelDeclaration};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{Error, Result};
use crate::relation::RelationLink;
use crate::scalar::Scalar;
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized result of parsing one model declaration
///
/// Every declared field lands in exactly one of the two maps. The store
/// consumes a `ParsedModel` once to materialize a live entity; the parser
/// retains nothing across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedModel {
    /// Scalar field values
    pub properties: BTreeMap<String, Scalar>,

    /// Relational field links, unresolved
    pub relations: BTreeMap<String, RelationLink>,
}

/// Parse a model declaration, reporting decisions to `tracing`
pub fn parse_model_declaration(
    model_name: &str,
    declaration: &ModelDeclaration,
    initial_values: Option<&InitialValues>,
) -> Result<ParsedModel> {
    parse_model_declaration_with(model_name, declaration, initial_values, &TracingSink)
}

/// Parse a model declaration, reporting decisions to the given sink
///
/// Classifies each field independently, in declaration order. An initial
/// value always wins over the declared spec: a scalar override on a
/// relational field becomes a property, and a reference override on a
/// generator field becomes a relation. Without an override, a generator
/// field is seeded from its generator and a relational field is an error.
///
/// Fails with [`Error::MissingRelationValue`] naming `model.field`; on
/// failure no partial result is returned.
pub fn parse_model_declaration_with(
    model_name: &str,
    declaration: &ModelDeclaration,
    initial_values: Option<&InitialValues>,
    sink: &dyn DiagnosticSink,
) -> Result<ParsedModel> {
    sink.record(&format!("create a \"{}\" entity", model_name));

    let mut parsed = ParsedModel::default();

    for (key, spec) in declaration.fields() {
        let exact_value = initial_values.and_then(|values| values.get(key));

        match (exact_value, spec) {
            (Some(InitialValue::Scalar(value)), _) => {
                sink.record(&format!(
                    "\"{}.{}\" has a plain initial value ({})",
                    model_name,
                    key,
                    value.kind()
                ));
                parsed.properties.insert(key.to_string(), value.clone());
            }
            (Some(InitialValue::ReferenceList(references)), _) => {
                sink.record(&format!(
                    "initial value for \"{}.{}\" references {} node(s)",
                    model_name,
                    key,
                    references.len()
                ));
                parsed
                    .relations
                    .insert(key.to_string(), RelationLink::many_of(key, references.clone()));
            }
            (Some(InitialValue::Reference(reference)), _) => {
                sink.record(&format!(
                    "initial value for \"{}.{}\" references \"{}\" with id \"{}\"",
                    model_name, key, reference.model, reference.node_id
                ));
                parsed
                    .relations
                    .insert(key.to_string(), RelationLink::one_of(key, reference.clone()));
            }
            (None, FieldSpec::Relation(_)) => {
                return Err(Error::MissingRelationValue {
                    model: model_name.to_string(),
                    field: key.to_string(),
                });
            }
            (None, FieldSpec::Generator(generate)) => {
                sink.record(&format!(
                    "\"{}.{}\" has no initial value, seeding from its generator",
                    model_name, key
                ));
                parsed.properties.insert(key.to_string(), generate());
            }
        }
    }

    Ok(parsed)
}
