//! The name grammar shared by every named schema element.

use thiserror::Error;

/// Why a name failed the name grammar.
#[derive(
    Clone,
    Debug,
    Error,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum InvalidNameError {
    #[error(
        "Name \"{name}\" must not begin with \"__\", which is reserved by \
        GraphQL introspection."
    )]
    ReservedPrefix {
        name: String,
    },

    #[error(
        "Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{name}\" does not."
    )]
    InvalidFormat {
        name: String,
    },
}

/// Checks `name` against the name grammar and the `__` introspection
/// reserve rule, returning the violation if there is one.
///
/// The reserve rule wins when both apply, so `"__bad-name"` reports the
/// reserved prefix rather than the format.
pub fn is_valid_name_error(name: &str) -> Option<InvalidNameError> {
    if name.starts_with("__") {
        return Some(InvalidNameError::ReservedPrefix {
            name: name.to_string(),
        });
    }
    if !is_valid_name(name) {
        return Some(InvalidNameError::InvalidFormat {
            name: name.to_string(),
        });
    }
    None
}

/// True if `name` matches `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidNameError;
    use super::is_valid_name;
    use super::is_valid_name_error;

    #[test]
    fn accepts_conventional_names() {
        for name in ["Query", "fooBar", "_private", "x", "abc123", "_0"] {
            assert!(is_valid_name(name), "expected `{name}` to be valid");
            assert_eq!(is_valid_name_error(name), None);
        }
    }

    #[test]
    fn rejects_malformed_names() {
        for name in ["", "1stPlace", "bad-name", "has space", "kebab-case"] {
            assert_eq!(
                is_valid_name_error(name),
                Some(InvalidNameError::InvalidFormat {
                    name: name.to_string(),
                }),
            );
        }
    }

    #[test]
    fn rejects_introspection_reserved_prefix() {
        assert_eq!(
            is_valid_name_error("__typename"),
            Some(InvalidNameError::ReservedPrefix {
                name: "__typename".to_string(),
            }),
        );
    }

    #[test]
    fn reserve_rule_wins_over_format() {
        assert_eq!(
            is_valid_name_error("__bad-name"),
            Some(InvalidNameError::ReservedPrefix {
                name: "__bad-name".to_string(),
            }),
        );
    }

    #[test]
    fn single_leading_underscore_is_fine() {
        assert_eq!(is_valid_name_error("_x"), None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            is_valid_name_error("__x").map(|err| err.to_string()),
            Some(
                "Name \"__x\" must not begin with \"__\", which is reserved \
                by GraphQL introspection.".to_string()
            ),
        );
        assert_eq!(
            is_valid_name_error("bad-name").map(|err| err.to_string()),
            Some(
                "Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \
                \"bad-name\" does not.".to_string()
            ),
        );
    }
}
