//! Source-document node types for schema definitions.
//!
//! These mirror the shape of a parsed schema document: one definition node
//! per declaration plus zero or more extension nodes, each pinned to a
//! [`loc::SourceLocation`]. Parsing happens outside this crate (the
//! `inputunion` syntax rules out stock GraphQL parsers), so builders attach
//! these nodes to the schema model they produce. Validation uses them to
//! report every declaration site of a duplicated element; a model built
//! without them still validates, just with location-free diagnostics.

use crate::loc;

/// The three schema root operations.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// A `schema { … }` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub operation_types: Vec<OperationTypeDefinition>,
    pub position: loc::SourceLocation,
}

/// One `query: TypeName` entry within a `schema { … }` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationTypeDefinition {
    pub named_type: NamedTypeNode,
    pub operation: OperationKind,
    pub position: loc::SourceLocation,
}

/// A bare type-name reference (union member, implemented interface, root
/// operation type).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeNode {
    pub name: String,
    pub position: loc::SourceLocation,
}

/// A `directive @name(…) on …` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

/// A field argument or an input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub name: String,
    pub position: loc::SourceLocation,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeExtension {
    pub name: String,
    pub position: loc::SourceLocation,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub fields: Vec<InputValueDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeExtension {
    pub fields: Vec<InputValueDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputUnionTypeDefinition {
    pub members: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputUnionTypeExtension {
    pub members: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub fields: Vec<FieldDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeExtension {
    pub fields: Vec<FieldDefinition>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeExtension {
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeExtension {
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub members: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeExtension {
    pub members: Vec<NamedTypeNode>,
    pub name: String,
    pub position: loc::SourceLocation,
}
