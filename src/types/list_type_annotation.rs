use crate::loc;
use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_ref: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
    pub(crate) ref_location: Option<loc::SourceLocation>,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    /// Check if two list type annotations are definitionally equal.
    ///
    /// Two list type annotations are equivalent if they have the same
    /// nullability and equivalent inner annotations.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub fn is_subtype_of(
        &self,
        schema: &Schema,
        other: &Self,
    ) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, NamedType>,
        other: &Self,
    ) -> bool {
        // A nullable annotation never satisfies a non-null one.
        if !other.nullable && self.nullable {
            return false;
        }
        self.inner_type_ref.is_subtype_of_impl(types_map, &other.inner_type_ref)
    }

    /// Indicates if this annotation is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> Option<&loc::SourceLocation> {
        self.ref_location.as_ref()
    }
}
