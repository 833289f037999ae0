//! Relation links and reference targets

use serde::{Deserialize, Serialize};

/// Identifier of a node within its model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many targets a relational field points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    OneOf,
    ManyOf,
}

/// An unresolved pointer to an entity of another model
///
/// Carries only the target model name and node identifier; resolving the
/// pair into a live entity is the store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Model (entity type) of the target
    pub model: String,

    /// Identifier of the target node
    pub node_id: NodeId,
}

impl Reference {
    pub fn new(model: impl Into<String>, node_id: impl Into<NodeId>) -> Self {
        Self {
            model: model.into(),
            node_id: node_id.into(),
        }
    }
}

/// A normalized relational field of a parsed model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationLink {
    /// Cardinality of the relation
    pub kind: RelationKind,

    /// Name of the declared field this link belongs to
    pub target_model_name: String,

    /// Target references, in input order
    pub nodes: Vec<Reference>,
}

impl RelationLink {
    /// Create a `OneOf` link with exactly one target
    pub fn one_of(field: impl Into<String>, node: Reference) -> Self {
        Self {
            kind: RelationKind::OneOf,
            target_model_name: field.into(),
            nodes: vec![node],
        }
    }

    /// Create a `ManyOf` link with zero or more targets
    pub fn many_of(field: impl Into<String>, nodes: Vec<Reference>) -> Self {
        Self {
            kind: RelationKind::ManyOf,
            target_model_name: field.into(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_creation() {
        let reference = Reference::new("User", "u1");
        assert_eq!(reference.model, "User");
        assert_eq!(reference.node_id.as_str(), "u1");
    }

    #[test]
    fn test_one_of_link() {
        let link = RelationLink::one_of("author", Reference::new("User", "u1"));
        assert_eq!(link.kind, RelationKind::OneOf);
        assert_eq!(link.target_model_name, "author");
        assert_eq!(link.nodes.len(), 1);
    }

    #[test]
    fn test_many_of_link_preserves_order() {
        let link = RelationLink::many_of(
            "tags",
            vec![Reference::new("Tag", "t1"), Reference::new("Tag", "t2")],
        );
        assert_eq!(link.kind, RelationKind::ManyOf);
        assert_eq!(link.nodes[0].node_id, NodeId::from("t1"));
        assert_eq!(link.nodes[1].node_id, NodeId::from("t2"));
    }

    #[test]
    fn test_many_of_link_may_be_empty() {
        let link = RelationLink::many_of("tags", Vec::new());
        assert!(link.nodes.is_empty());
    }
}
