use crate::introspection;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InputUnionType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;

/// Represents a named type defined within some [`Schema`].
///
/// Every type a schema can define is one of these seven kinds. Built-in
/// scalars (`String`, `Int`, etc) appear here as [`NamedType::Scalar`] entries
/// just like custom scalars do.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NamedType {
    Enum(EnumType),
    InputObject(InputObjectType),
    InputUnion(InputUnionType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl NamedType {
    /// Unwrap the [`EnumType`] if this type is one.
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`InputObjectType`] if this type is one.
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`InputUnionType`] if this type is one.
    pub fn as_input_union(&self) -> Option<&InputUnionType> {
        if let Self::InputUnion(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`InterfaceType`] if this type is one.
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`ObjectType`] if this type is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`ScalarType`] if this type is one.
    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Unwrap the [`UnionType`] if this type is one.
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self {
            Some(t)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this type
    /// was defined, if it was defined from a source text.
    pub fn def_location(&self) -> Option<&loc::SourceLocation> {
        match self {
            Self::Enum(t) => t.def_location.as_ref(),
            Self::InputObject(t) => t.def_location.as_ref(),
            Self::InputUnion(t) => t.def_location.as_ref(),
            Self::Interface(t) => t.def_location.as_ref(),
            Self::Object(t) => t.def_location.as_ref(),
            Self::Scalar(t) => t.def_location.as_ref(),
            Self::Union(t) => t.def_location.as_ref(),
        }
    }

    /// Indicates if values of this type can be used as [input
    /// types](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            Self::Enum(_)
                | Self::InputObject(_)
                | Self::InputUnion(_)
                | Self::Scalar(_),
        )
    }

    /// Indicates if this type is one of the types reserved for the
    /// introspection system (e.g. `__Schema`, `__Type`, etc).
    pub fn is_introspection_type(&self) -> bool {
        introspection::is_introspection_type_name(self.name())
    }

    /// Indicates if values of this type can be used as [output
    /// types](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    pub fn is_output_type(&self) -> bool {
        matches!(
            self,
            Self::Enum(_)
                | Self::Interface(_)
                | Self::Object(_)
                | Self::Scalar(_)
                | Self::Union(_),
        )
    }

    /// The [`TypeKind`] corresponding to this type.
    pub fn kind(&self) -> TypeKind {
        self.into()
    }

    /// The name of this type as defined within the schema.
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name.as_str(),
            Self::InputObject(t) => t.name.as_str(),
            Self::InputUnion(t) => t.name.as_str(),
            Self::Interface(t) => t.name.as_str(),
            Self::Object(t) => t.name.as_str(),
            Self::Scalar(t) => t.name.as_str(),
            Self::Union(t) => t.name.as_str(),
        }
    }
}
impl DerefByName for NamedType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
