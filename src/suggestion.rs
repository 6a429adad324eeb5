//! Human-readable rendering of candidate-name lists for diagnostics.

const MAX_SUGGESTIONS: usize = 5;

/// Renders up to five candidate names as an English alternation: `"A"`,
/// `"A or B"`, `"A, B, or C"`. Candidates beyond the fifth are dropped.
/// Returns `None` for an empty list.
pub fn or_list(items: &[impl AsRef<str>]) -> Option<String> {
    let selected: Vec<&str> = items
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| item.as_ref())
        .collect();
    match selected.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        [first, second] => Some(format!("{first} or {second}")),
        [init @ .., last] => Some(format!("{}, or {last}", init.join(", "))),
    }
}

/// Like [`or_list`], with each candidate wrapped in double quotes.
pub fn quoted_or_list(items: &[impl AsRef<str>]) -> Option<String> {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    or_list(&quoted)
}

#[cfg(test)]
mod tests {
    use super::or_list;
    use super::quoted_or_list;

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(or_list(&[] as &[&str]), None);
        assert_eq!(quoted_or_list(&[] as &[&str]), None);
    }

    #[test]
    fn single_item() {
        assert_eq!(or_list(&["A"]), Some("A".to_string()));
    }

    #[test]
    fn two_items() {
        assert_eq!(or_list(&["A", "B"]), Some("A or B".to_string()));
    }

    #[test]
    fn oxford_comma_from_three_items_up() {
        assert_eq!(or_list(&["A", "B", "C"]), Some("A, B, or C".to_string()));
        assert_eq!(
            or_list(&["A", "B", "C", "D", "E"]),
            Some("A, B, C, D, or E".to_string()),
        );
    }

    #[test]
    fn truncates_past_five_items() {
        assert_eq!(
            or_list(&["A", "B", "C", "D", "E", "F"]),
            Some("A, B, C, D, or E".to_string()),
        );
    }

    #[test]
    fn quoted_variant_wraps_each_item() {
        assert_eq!(
            quoted_or_list(&["A", "B"]),
            Some("\"A\" or \"B\"".to_string()),
        );
    }
}
