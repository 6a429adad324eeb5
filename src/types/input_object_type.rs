use crate::ast;
use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an [input object
/// type](https://spec.graphql.org/October2021/#sec-Input-Objects) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::InputObjectTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    pub extension_ast_nodes: Vec<ast::InputObjectTypeExtension>,

    /// A map from FieldName -> [`InputField`] for all input fields defined on
    /// this type, in definition order.
    pub fields: IndexMap<String, InputField>,

    pub name: String,
}
