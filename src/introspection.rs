//! The built-in introspection type names.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Names of the types that make up the introspection machinery. These are
/// defined implicitly by every schema, so their (`__`-prefixed) names are
/// exempt from name validation.
pub fn introspection_type_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "__Schema",
            "__Directive",
            "__DirectiveLocation",
            "__Type",
            "__Field",
            "__InputValue",
            "__EnumValue",
            "__TypeKind",
        ])
    })
}

/// True if `name` names one of the introspection types.
pub fn is_introspection_type_name(name: &str) -> bool {
    introspection_type_names().contains(name)
}
