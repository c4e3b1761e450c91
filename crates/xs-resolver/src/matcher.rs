//! Naming-convention matching for Xishui UI identifiers.
//!
//! Components follow the `Xs` prefix convention (`XsTableColumn`); directives
//! are looked up in an injectable table so new directives can be published
//! without touching engine logic.

use rustc_hash::FxHashMap;

/// Prefix every Xishui UI component tag carries.
const COMPONENT_PREFIX: &str = "Xs";

/// Mapping from public directive identifier to its library entry.
pub type DirectiveTable = FxHashMap<String, DirectiveEntry>;

/// One directive the library publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveEntry {
    /// Name the library exports the directive under.
    pub import_name: String,
    /// Key the directive's stylesheet is published under.
    pub style_name: String,
}

impl DirectiveEntry {
    pub fn new(import_name: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            import_name: import_name.into(),
            style_name: style_name.into(),
        }
    }
}

/// Match a component tag against the library naming convention.
///
/// Matches only identifiers starting with `Xs` followed by an ASCII uppercase
/// letter; matching is case-sensitive and anchored, so partial or suffix
/// matches never count. On match, returns the hyphenated library-internal
/// name (`XsTableColumn` -> `table-column`).
pub(crate) fn match_component(identifier: &str) -> Option<String> {
    let tail = identifier.strip_prefix(COMPONENT_PREFIX)?;
    if !tail.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    Some(kebab_case(tail))
}

/// Look up a directive identifier in the table.
pub(crate) fn match_directive<'t>(
    identifier: &str,
    table: &'t DirectiveTable,
) -> Option<&'t DirectiveEntry> {
    table.get(identifier)
}

/// Convert an identifier tail to its hyphenated form: `TableColumn` ->
/// `table-column`.
pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_splits_on_uppercase() {
        assert_eq!(kebab_case("TableColumn"), "table-column");
        assert_eq!(kebab_case("Button"), "button");
        assert_eq!(kebab_case("DatePickerPanel"), "date-picker-panel");
    }

    #[test]
    fn kebab_case_keeps_digits_inline() {
        assert_eq!(kebab_case("Col2"), "col2");
    }

    #[test]
    fn matches_prefixed_components() {
        assert_eq!(match_component("XsTableColumn").as_deref(), Some("table-column"));
        assert_eq!(match_component("XsButton").as_deref(), Some("button"));
    }

    #[test]
    fn rejects_lowercase_after_prefix() {
        assert_eq!(match_component("xsButton"), None);
        assert_eq!(match_component("Xsbutton"), None);
    }

    #[test]
    fn rejects_unanchored_and_partial_matches() {
        assert_eq!(match_component("MyXsButton"), None);
        assert_eq!(match_component("Xs"), None);
        assert_eq!(match_component(""), None);
        assert_eq!(match_component("Button"), None);
    }

    #[test]
    fn directive_lookup_is_exact() {
        let mut table = DirectiveTable::default();
        table.insert(
            "loading".to_string(),
            DirectiveEntry::new("XsLoadingDirective", "loading"),
        );

        let entry = match_directive("loading", &table).unwrap();
        assert_eq!(entry.import_name, "XsLoadingDirective");
        assert_eq!(entry.style_name, "loading");
        assert!(match_directive("Loading", &table).is_none());
        assert!(match_directive("tooltip", &table).is_none());
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = DirectiveTable::default();
        assert!(match_directive("loading", &table).is_none());
    }
}
