use crate::loc;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub def_location: Option<loc::SourceLocation>,

    /// The description of this value as defined in the schema
    /// (e.g. in a `"""`-string immediately before the value definition).
    pub description: Option<String>,

    pub name: String,
}
