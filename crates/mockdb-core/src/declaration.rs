//! Model declarations and initial values

use crate::relation::{Reference, RelationKind};
use crate::scalar::Scalar;
use std::collections::HashMap;

/// Zero-argument default-value producer for a scalar field
pub type Generator = Box<dyn Fn() -> Scalar + Send + Sync>;

/// What a declared field is: a default-producing generator or a relation
/// placeholder
pub enum FieldSpec {
    /// Produces the field's value when no initial value is supplied
    Generator(Generator),

    /// Marks the field as relational; relational fields have no default
    /// and must be satisfied by an initial value
    Relation(RelationKind),
}

impl FieldSpec {
    /// Declare a scalar field seeded by `generate`
    pub fn generator(generate: impl Fn() -> Scalar + Send + Sync + 'static) -> Self {
        Self::Generator(Box::new(generate))
    }

    /// Declare a field referencing exactly one other entity
    pub fn one_of() -> Self {
        Self::Relation(RelationKind::OneOf)
    }

    /// Declare a field referencing an ordered collection of other entities
    pub fn many_of() -> Self {
        Self::Relation(RelationKind::ManyOf)
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSpec::Generator(_) => f.write_str("FieldSpec::Generator(..)"),
            FieldSpec::Relation(kind) => write!(f, "FieldSpec::Relation({:?})", kind),
        }
    }
}

/// Declarative schema for one entity type
///
/// Field names must be unique within a declaration. Field order is
/// preserved; the parser classifies fields in declaration order.
#[derive(Debug, Default)]
pub struct ModelDeclaration {
    fields: Vec<(String, FieldSpec)>,
}

impl ModelDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the declaration
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.push((name.into(), spec));
        self
    }

    /// Iterate fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One explicitly tagged initial value
///
/// The variant is chosen by the caller at the boundary, so the parser never
/// has to sniff whether a value is a literal or a reference. A
/// `ReferenceList` always describes relation targets; lists of plain
/// scalars (or mixed lists) are not part of the initial-value contract.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialValue {
    Scalar(Scalar),
    Reference(Reference),
    ReferenceList(Vec<Reference>),
}

impl From<Scalar> for InitialValue {
    fn from(value: Scalar) -> Self {
        InitialValue::Scalar(value)
    }
}

impl From<Reference> for InitialValue {
    fn from(reference: Reference) -> Self {
        InitialValue::Reference(reference)
    }
}

impl From<Vec<Reference>> for InitialValue {
    fn from(references: Vec<Reference>) -> Self {
        InitialValue::ReferenceList(references)
    }
}

/// Partial field-name → initial-value map for one entity-creation call
#[derive(Debug, Clone, Default)]
pub struct InitialValues {
    values: HashMap<String, InitialValue>,
}

impl InitialValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a scalar literal for a field
    pub fn scalar(mut self, field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.values
            .insert(field.into(), InitialValue::Scalar(value.into()));
        self
    }

    /// Supply a single relation target for a field
    pub fn reference(mut self, field: impl Into<String>, reference: Reference) -> Self {
        self.values
            .insert(field.into(), InitialValue::Reference(reference));
        self
    }

    /// Supply an ordered collection of relation targets for a field
    pub fn references(
        mut self,
        field: impl Into<String>,
        references: impl IntoIterator<Item = Reference>,
    ) -> Self {
        self.values.insert(
            field.into(),
            InitialValue::ReferenceList(references.into_iter().collect()),
        );
        self
    }

    pub fn get(&self, field: &str) -> Option<&InitialValue> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_preserves_field_order() {
        let declaration = ModelDeclaration::new()
            .field("name", FieldSpec::generator(|| Scalar::from("anonymous")))
            .field("age", FieldSpec::generator(|| Scalar::from(0)))
            .field("author", FieldSpec::one_of());

        let names: Vec<&str> = declaration.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "age", "author"]);
        assert_eq!(declaration.len(), 3);
    }

    #[test]
    fn test_initial_values_builders() {
        let values = InitialValues::new()
            .scalar("title", "hello")
            .reference("author", Reference::new("User", "u1"))
            .references("tags", vec![Reference::new("Tag", "t1")]);

        assert_eq!(
            values.get("title"),
            Some(&InitialValue::Scalar(Scalar::from("hello")))
        );
        assert!(matches!(
            values.get("author"),
            Some(InitialValue::Reference(_))
        ));
        assert!(matches!(
            values.get("tags"),
            Some(InitialValue::ReferenceList(refs)) if refs.len() == 1
        ));
        assert_eq!(values.get("missing"), None);
    }

    #[test]
    fn test_field_spec_debug_is_opaque_for_generators() {
        let spec = FieldSpec::generator(|| Scalar::from(1));
        assert_eq!(format!("{:?}", spec), "FieldSpec::Generator(..)");
    }
}
