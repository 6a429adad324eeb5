use crate::loc;
use crate::types::TypeAnnotation;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub def_location: Option<loc::SourceLocation>,

    /// The description of this input field as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub description: Option<String>,

    pub name: String,

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// input field.
    pub type_annotation: TypeAnnotation,
}
