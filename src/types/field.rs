use crate::loc;
use crate::types::Argument;
use crate::types::TypeAnnotation;

/// Represents a [field](https://spec.graphql.org/October2021/#FieldDefinition)
/// defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    /// The [`Argument`]s defined on this field, in definition order.
    pub arguments: Vec<Argument>,

    pub def_location: Option<loc::SourceLocation>,

    /// The description of this field as defined in the schema
    /// (e.g. in a `"""`-string immediately before the field definition).
    pub description: Option<String>,

    pub name: String,

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// field.
    pub type_annotation: TypeAnnotation,
}
impl Field {
    /// Find the [`Argument`] with the given name, if this field defines one.
    pub fn argument_named(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
