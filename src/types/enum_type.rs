use crate::ast;
use crate::loc;
use crate::types::EnumValue;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::EnumTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    /// Extension nodes that contributed values to this type, when it was
    /// built from a source text.
    pub extension_ast_nodes: Vec<ast::EnumTypeExtension>,

    pub name: String,

    /// The values defined on this type, in definition order. Names are
    /// unique here; any duplication in the source text is recorded on
    /// [`Self::ast_node`] and [`Self::extension_ast_nodes`].
    pub values: Vec<EnumValue>,
}
impl EnumType {
    /// Find the [`EnumValue`] with the given name, if this type defines one.
    pub fn value_named(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }
}
