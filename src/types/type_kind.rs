use crate::types::NamedType;

/// The seven kinds of [`NamedType`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum TypeKind {
    Enum,
    InputObject,
    InputUnion,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "Input Object",
            Self::InputUnion => "Input Union",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&NamedType> for TypeKind {
    fn from(value: &NamedType) -> Self {
        match value {
            NamedType::Enum(_) => TypeKind::Enum,
            NamedType::InputObject(_) => TypeKind::InputObject,
            NamedType::InputUnion(_) => TypeKind::InputUnion,
            NamedType::Interface(_) => TypeKind::Interface,
            NamedType::Object(_) => TypeKind::Object,
            NamedType::Scalar(_) => TypeKind::Scalar,
            NamedType::Union(_) => TypeKind::Union,
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
