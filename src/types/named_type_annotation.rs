use crate::loc;
use crate::schema::Schema;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedTypeRef,
}
impl NamedTypeAnnotation {
    /// Check if two named type annotations are definitionally equal.
    ///
    /// Two named type annotations are equivalent if they have:
    /// - Same type name
    /// - Same nullability
    ///
    /// Source location is intentionally ignored for semantic comparison.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
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

        if self.type_ref.name() == other.type_ref.name() {
            return true;
        }

        let self_type =
            if let Some(type_) = types_map.get(self.type_ref.name()) {
                type_
            } else {
                return false;
            };
        let other_type =
            if let Some(type_) = types_map.get(other.type_ref.name()) {
                type_
            } else {
                return false;
            };

        match (self_type, other_type) {
            (NamedType::Object(self_obj),
             NamedType::Interface(other_iface))
                => self_obj.interface_names()
                    .contains(&other_iface.name.as_str()),
            (NamedType::Object(self_obj),
             NamedType::Union(other_union))
                => other_union.member_type_names()
                    .contains(&self_obj.name.as_str()),
            (_, _) => false,
        }
    }

    /// Indicates if this annotation is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> Option<&loc::SourceLocation> {
        self.type_ref.ref_location()
    }

    /// The name of the type this annotation refers to.
    pub fn type_name(&self) -> &str {
        self.type_ref.name()
    }
}
