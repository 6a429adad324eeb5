use crate::ast;
use crate::loc;
use crate::types::Field;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    /// The definition node this type was built from, when it was built from a
    /// source text.
    pub ast_node: Option<ast::ObjectTypeDefinition>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this type as defined in the schema
    /// (e.g. in a `"""`-string immediately before the type definition).
    pub description: Option<String>,

    /// Extension nodes that contributed fields or interface claims to this
    /// type, when it was built from a source text.
    pub extension_ast_nodes: Vec<ast::ObjectTypeExtension>,

    /// A map from FieldName -> [`Field`] for all fields defined on this type,
    /// in definition order.
    pub fields: IndexMap<String, Field>,

    /// The interfaces this type claims to implement, in claim order.
    ///
    /// Claims are recorded here even when the named type turns out not to be
    /// an interface type; [`Schema::validate`](crate::Schema::validate)
    /// reports such claims.
    pub interfaces: Vec<NamedTypeRef>,

    pub name: String,
}
impl ObjectType {
    /// The names of all interfaces this type claims to implement.
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }
}
