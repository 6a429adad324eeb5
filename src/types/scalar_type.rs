use crate::ast;
use crate::loc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::Schema).
///
/// The built-in scalars (`String`, `Int`, `Float`, `Boolean`, `ID`) are
/// represented with this struct as well, with no `ast_node` and no
/// `def_location`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::ScalarTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    pub extension_ast_nodes: Vec<ast::ScalarTypeExtension>,

    pub name: String,
}
