use crate::ast;
use crate::loc;
use crate::types::NamedTypeRef;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::UnionTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    pub extension_ast_nodes: Vec<ast::UnionTypeExtension>,

    /// The member types of this union, in definition order.
    ///
    /// Members are recorded here even when the named type turns out not to be
    /// an object type; [`Schema::validate`](crate::Schema::validate) reports
    /// such members.
    pub members: Vec<NamedTypeRef>,

    pub name: String,
}
impl UnionType {
    /// The names of all member types of this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member_ref| member_ref.name())
            .collect()
    }
}
