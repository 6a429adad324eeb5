use crate::ast;
use crate::loc;
use crate::types::Argument;

/// Represents a [directive
/// definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    /// The [`Argument`]s defined on this directive, in definition order.
    pub arguments: Vec<Argument>,

    /// The definition node this directive was built from, when it was built
    /// from a source text.
    pub ast_node: Option<ast::DirectiveDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this directive as defined in the schema
    /// (e.g. in a `"""`-string immediately before the directive definition).
    pub description: Option<String>,

    pub name: String,
}
