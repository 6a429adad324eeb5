use crate::ast;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::InterfaceTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    pub extension_ast_nodes: Vec<ast::InterfaceTypeExtension>,

    /// A map from FieldName -> [`Field`] for all fields defined on this type,
    /// in definition order.
    pub fields: IndexMap<String, Field>,

    pub name: String,
}
