use crate::ast;
use crate::loc;
use crate::types::NamedTypeRef;

/// Represents an input union type defined within some
/// [`Schema`](crate::Schema).
///
/// An input union is the input-side analogue of a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions): a closed
/// set of alternatives usable wherever an input type is expected, where every
/// member must be an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputUnionType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::InputUnionTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    pub extension_ast_nodes: Vec<ast::InputUnionTypeExtension>,

    /// The member types of this input union, in definition order.
    ///
    /// Members are recorded here even when the named type turns out not to be
    /// an input object type; [`Schema::validate`](crate::Schema::validate)
    /// reports such members.
    pub members: Vec<NamedTypeRef>,

    pub name: String,
}
impl InputUnionType {
    /// The names of all member types of this input union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member_ref| member_ref.name())
            .collect()
    }
}
