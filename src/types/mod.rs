mod argument;
mod directive;
mod enum_type;
mod enum_type_validator;
mod enum_value;
mod field;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod input_union_type;
mod input_union_type_validator;
mod interface_implementation_validator;
mod interface_type;
mod list_type_annotation;
mod named_type;
mod named_type_annotation;
mod named_type_ref;
mod object_or_interface_type;
mod object_or_interface_type_validator;
mod object_type;
mod scalar_type;
mod type_annotation;
mod type_kind;
mod union_type;
mod union_type_validator;

pub use argument::Argument;
pub use directive::Directive;
pub use enum_type::EnumType;
pub(crate) use enum_type_validator::EnumTypeValidator;
pub use enum_value::EnumValue;
pub use field::Field;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub use input_union_type::InputUnionType;
pub(crate) use input_union_type_validator::InputUnionTypeValidator;
pub(crate) use interface_implementation_validator::InterfaceImplementationValidator;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type::NamedType;
pub use named_type_annotation::NamedTypeAnnotation;
pub use named_type_ref::NamedTypeRef;
pub(crate) use object_or_interface_type::ObjectOrInterfaceType;
pub(crate) use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_kind::TypeKind;
pub use union_type::UnionType;
pub(crate) use union_type_validator::UnionTypeValidator;

#[cfg(test)]
pub(crate) mod tests;
