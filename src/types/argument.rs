use crate::loc;
use crate::types::TypeAnnotation;

/// Represents an [argument](https://spec.graphql.org/October2021/#sec-Field-Arguments)
/// defined on a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub def_location: Option<loc::SourceLocation>,

    /// The description of this argument as defined in the schema
    /// (e.g. in a `"""`-string immediately before the argument definition).
    pub description: Option<String>,

    pub name: String,

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// argument.
    pub type_annotation: TypeAnnotation,
}
