use crate::loc;
use crate::name::InvalidNameError;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// A single rule violation found while validating a [`Schema`](crate::Schema).
///
/// Each variant carries the source locations that evidence the violation.
/// Locations are empty when the relevant schema elements were constructed
/// without source information.
#[derive(
    Clone,
    Debug,
    Error,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SchemaValidationError {
    #[error(
        "Object field argument {type_name}.{field_name}({argument_name}:) is \
        of required type {argument_type} but is not also provided by the \
        interface {interface_name}.{field_name}."
    )]
    AdditionalRequiredArgument {
        argument_name: String,
        argument_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "Argument @{directive_name}({argument_name}:) can only be defined \
        once."
    )]
    DuplicateDirectiveArgument {
        argument_name: String,
        directive_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error("Enum type {enum_name} can include value {value_name} only once.")]
    DuplicateEnumValue {
        enum_name: String,
        locations: Vec<loc::SourceLocation>,
        value_name: String,
    },

    #[error(
        "Field argument {type_name}.{field_name}({argument_name}:) can only \
        be defined once."
    )]
    DuplicateFieldArgument {
        argument_name: String,
        field_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Field {type_name}.{field_name} can only be defined once.")]
    DuplicateFieldDefinition {
        field_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "Input Union type {input_union_name} can only include type \
        {member_name} once."
    )]
    DuplicateInputUnionMember {
        input_union_name: String,
        locations: Vec<loc::SourceLocation>,
        member_name: String,
    },

    #[error("Type {type_name} can only implement {interface_name} once.")]
    DuplicateInterfaceImplementation {
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Union type {union_name} can only include type {member_name} once.")]
    DuplicateUnionMember {
        locations: Vec<loc::SourceLocation>,
        member_name: String,
        union_name: String,
    },

    #[error("Enum type {enum_name} must define one or more values.")]
    EnumWithoutValues {
        enum_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "Type {type_name} must only implement Interface types, it cannot \
        implement {non_interface_type_name}."
    )]
    ImplementsNonInterfaceType {
        locations: Vec<loc::SourceLocation>,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "Interface field argument \
        {interface_name}.{field_name}({argument_name}:) expects type \
        {expected_type} but {type_name}.{field_name}({argument_name}:) is \
        type {provided_type}."
    )]
    IncompatibleInterfaceFieldArgumentType {
        argument_name: String,
        expected_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        provided_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Interface field {interface_name}.{field_name} expects type \
        {expected_type} but {type_name}.{field_name} is type {provided_type}."
    )]
    IncompatibleInterfaceFieldType {
        expected_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        provided_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Input Object type {input_object_name} must define one or more fields."
    )]
    InputObjectWithoutFields {
        input_object_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "Input Union type {input_union_name} must define one or more member \
        types."
    )]
    InputUnionWithoutMembers {
        input_union_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "The type of @{directive_name}({argument_name}:) must be Input Type \
        but got: {argument_type}."
    )]
    InvalidDirectiveArgumentType {
        argument_name: String,
        argument_type: TypeAnnotation,
        directive_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "The type of {type_name}.{field_name}({argument_name}:) must be \
        Input Type but got: {argument_type}."
    )]
    InvalidFieldArgumentType {
        argument_name: String,
        argument_type: TypeAnnotation,
        field_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "The type of {type_name}.{field_name} must be Output Type but got: \
        {field_type}."
    )]
    InvalidFieldType {
        field_name: String,
        field_type: TypeAnnotation,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "The type of {input_object_name}.{field_name} must be Input Type but \
        got: {field_type}."
    )]
    InvalidInputFieldType {
        field_name: String,
        field_type: TypeAnnotation,
        input_object_name: String,
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "Input Union type {input_union_name} can only include Input Object \
        types, it cannot include {member_name}."
    )]
    InvalidInputUnionMemberType {
        input_union_name: String,
        locations: Vec<loc::SourceLocation>,
        member_name: String,
    },

    #[error("{name_error}")]
    InvalidName {
        locations: Vec<loc::SourceLocation>,
        name_error: InvalidNameError,
    },

    #[error(
        "Union type {union_name} can only include Object types, it cannot \
        include {member_name}."
    )]
    InvalidUnionMemberType {
        locations: Vec<loc::SourceLocation>,
        member_name: String,
        union_name: String,
    },

    #[error(
        "Interface field {interface_name}.{field_name} expected but \
        {type_name} does not provide it."
    )]
    MissingInterfaceField {
        field_name: String,
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "Interface field argument \
        {interface_name}.{field_name}({argument_name}:) expected but \
        {type_name}.{field_name} does not provide it."
    )]
    MissingInterfaceFieldArgument {
        argument_name: String,
        field_name: String,
        interface_name: String,
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Query root type must be provided.")]
    MissingQueryRootType {
        locations: Vec<loc::SourceLocation>,
    },

    #[error(
        "Mutation root type must be Object type if provided, it cannot be \
        {type_name}."
    )]
    NonObjectMutationRoot {
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Query root type must be Object type, it cannot be {type_name}.")]
    NonObjectQueryRoot {
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error(
        "Subscription root type must be Object type if provided, it cannot \
        be {type_name}."
    )]
    NonObjectSubscriptionRoot {
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Enum type {enum_name} cannot include value: {value_name}.")]
    ReservedEnumValue {
        enum_name: String,
        locations: Vec<loc::SourceLocation>,
        value_name: String,
    },

    #[error("Type {type_name} must define one or more fields.")]
    TypeWithoutFields {
        locations: Vec<loc::SourceLocation>,
        type_name: String,
    },

    #[error("Union type {union_name} must define one or more member types.")]
    UnionWithoutMembers {
        locations: Vec<loc::SourceLocation>,
        union_name: String,
    },
}
impl SchemaValidationError {
    /// The source locations that evidence this violation.
    pub fn locations(&self) -> &[loc::SourceLocation] {
        match self {
            Self::AdditionalRequiredArgument { locations, .. } => locations,
            Self::DuplicateDirectiveArgument { locations, .. } => locations,
            Self::DuplicateEnumValue { locations, .. } => locations,
            Self::DuplicateFieldArgument { locations, .. } => locations,
            Self::DuplicateFieldDefinition { locations, .. } => locations,
            Self::DuplicateInputUnionMember { locations, .. } => locations,
            Self::DuplicateInterfaceImplementation { locations, .. } => locations,
            Self::DuplicateUnionMember { locations, .. } => locations,
            Self::EnumWithoutValues { locations, .. } => locations,
            Self::ImplementsNonInterfaceType { locations, .. } => locations,
            Self::IncompatibleInterfaceFieldArgumentType { locations, .. } => locations,
            Self::IncompatibleInterfaceFieldType { locations, .. } => locations,
            Self::InputObjectWithoutFields { locations, .. } => locations,
            Self::InputUnionWithoutMembers { locations, .. } => locations,
            Self::InvalidDirectiveArgumentType { locations, .. } => locations,
            Self::InvalidFieldArgumentType { locations, .. } => locations,
            Self::InvalidFieldType { locations, .. } => locations,
            Self::InvalidInputFieldType { locations, .. } => locations,
            Self::InvalidInputUnionMemberType { locations, .. } => locations,
            Self::InvalidName { locations, .. } => locations,
            Self::InvalidUnionMemberType { locations, .. } => locations,
            Self::MissingInterfaceField { locations, .. } => locations,
            Self::MissingInterfaceFieldArgument { locations, .. } => locations,
            Self::MissingQueryRootType { locations } => locations,
            Self::NonObjectMutationRoot { locations, .. } => locations,
            Self::NonObjectQueryRoot { locations, .. } => locations,
            Self::NonObjectSubscriptionRoot { locations, .. } => locations,
            Self::ReservedEnumValue { locations, .. } => locations,
            Self::TypeWithoutFields { locations, .. } => locations,
            Self::UnionWithoutMembers { locations, .. } => locations,
        }
    }
}

/// The error returned by [`Schema::assert_valid`](crate::Schema::assert_valid)
/// when validation finds one or more rule violations.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InvalidSchemaError {
    pub errors: Vec<SchemaValidationError>,
}
impl std::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages =
            self.errors
                .iter()
                .map(|error| error.to_string())
                .collect::<Vec<_>>();
        f.write_str(messages.join("\n\n").as_str())
    }
}
impl std::error::Error for InvalidSchemaError {}
