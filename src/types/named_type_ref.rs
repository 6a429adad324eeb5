use crate::named_ref::NamedRef;
use crate::types::NamedType;

pub type NamedTypeRef = NamedRef<NamedType>;
