use crate::loc;
use crate::schema::Schema;
use crate::types::ListTypeAnnotation;
use crate::types::NamedType;
use crate::types::NamedTypeAnnotation;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Argument`](crate::types::Argument), or
/// [`InputField`](crate::types::InputField).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable annotation of the type with the given name.
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_ref: NamedTypeRef::new(name, None),
        })
    }

    /// A non-null annotation of the type with the given name.
    pub fn non_null_named(name: impl AsRef<str>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: false,
            type_ref: NamedTypeRef::new(name, None),
        })
    }

    /// A nullable list annotation wrapping the given inner annotation.
    pub fn list_of(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable: true,
            ref_location: None,
        })
    }

    /// A non-null list annotation wrapping the given inner annotation.
    pub fn non_null_list_of(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable: false,
            ref_location: None,
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same type structure (Named vs List)
    /// - Same nullability at each level
    /// - Same innermost type name
    ///
    /// Source location is intentionally ignored for semantic comparison.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Indicates if this annotation refers to an [input
    /// type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    ///
    /// List and non-null wrappers never affect this; only the kind of the
    /// inner-most named type does. Returns false if that type is not defined
    /// in `schema`.
    pub fn is_input_type(&self, schema: &Schema) -> bool {
        let type_name = self.innermost_named_type_annotation().type_name();
        if let Some(type_) = schema.types.get(type_name) {
            type_.is_input_type()
        } else {
            false
        }
    }

    /// Indicates if this annotation refers to an [output
    /// type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
    ///
    /// List and non-null wrappers never affect this; only the kind of the
    /// inner-most named type does. Returns false if that type is not defined
    /// in `schema`.
    pub fn is_output_type(&self, schema: &Schema) -> bool {
        let type_name = self.innermost_named_type_annotation().type_name();
        if let Some(type_) = schema.types.get(type_name) {
            type_.is_output_type()
        } else {
            false
        }
    }

    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        types_map: &IndexMap<String, NamedType>,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::List(self_inner), Self::List(other_inner))
                => self_inner.is_subtype_of_impl(types_map, other_inner),
            (Self::List(_), Self::Named(_))
                => false,
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_subtype_of_impl(types_map, other_named),
            (Self::Named(_), Self::List(_))
                => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`TypeAnnotation`] appeared within the schema, when it came from a
    /// source text.
    pub fn ref_location(&self) -> Option<&loc::SourceLocation> {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
