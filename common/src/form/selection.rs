//! "Select all" semantics for the multi-select widgets.
//!
//! Every select carries a sentinel option valued `all` (and some carry an
//! `any` option). Picking `all` selects the whole option set minus the
//! sentinels; dropping it clears the selection. The resolution is a pure
//! function over option values so the widget itself stays thin.

/// Sentinel value that expands to the full option set.
pub const ALL: &str = "all";
/// Sentinel value excluded from the expansion alongside [`ALL`].
pub const ANY: &str = "any";

/// An option of a select widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Builds the option list for a select, prefixed with the `all` sentinel.
pub fn with_all(values: &[&str]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(ALL, "All")];
    options.extend(values.iter().map(|value| SelectOption::new(*value, *value)));
    options
}

pub fn is_sentinel(value: &str) -> bool {
    value == ALL || value == ANY
}

/// All selectable values of a widget, sentinels excluded.
pub fn expanded(option_values: &[String]) -> Vec<String> {
    option_values
        .iter()
        .filter(|value| !is_sentinel(value))
        .cloned()
        .collect()
}

/// True when `selected` covers every non-sentinel option, which is when the
/// widget shows the `all` option as engaged.
pub fn covers_all(option_values: &[String], selected: &[String]) -> bool {
    let full = expanded(option_values);
    !full.is_empty() && full.iter().all(|value| selected.contains(value))
}

/// Resolves a raw widget change into the effective selection.
///
/// Newly picking `all` expands to every non-sentinel option; dropping a
/// previously engaged `all` clears the widget; any other change passes
/// through with sentinels filtered out.
pub fn resolve_change(
    option_values: &[String],
    previous: &[String],
    current: &[String],
) -> Vec<String> {
    let had_all = previous.iter().any(|value| value == ALL);
    let has_all = current.iter().any(|value| value == ALL);

    if has_all && !had_all {
        expanded(option_values)
    } else if had_all && !has_all {
        Vec::new()
    } else {
        current
            .iter()
            .filter(|value| *value != ALL)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["all", "any", "Finance", "Engineering", "Sales"]
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn selecting_all_expands_without_sentinels() {
        let resolved = resolve_change(&options(), &[], &strings(&["all"]));
        assert_eq!(resolved, strings(&["Finance", "Engineering", "Sales"]));
    }

    #[test]
    fn deselecting_all_clears_the_widget() {
        let previous = strings(&["all", "Finance", "Engineering", "Sales"]);
        let resolved = resolve_change(&options(), &previous, &strings(&["Finance", "Sales"]));
        assert!(resolved.is_empty());
    }

    #[test]
    fn plain_changes_pass_through() {
        let resolved = resolve_change(&options(), &strings(&["Finance"]), &strings(&["Finance", "Sales"]));
        assert_eq!(resolved, strings(&["Finance", "Sales"]));
    }

    #[test]
    fn any_is_selectable_but_never_expanded() {
        let resolved = resolve_change(&options(), &[], &strings(&["any"]));
        assert_eq!(resolved, strings(&["any"]));

        let expanded = resolve_change(&options(), &[], &strings(&["all"]));
        assert!(!expanded.contains(&"any".to_string()));
        assert!(!expanded.contains(&"all".to_string()));
    }

    #[test]
    fn change_while_all_engaged_resolves_against_the_synced_widget() {
        // Option selectedness is pushed into the widget as a property, so a
        // change fired while "all" is engaged reports the expanded set plus
        // the sentinel, not a stale subset.
        let previous = strings(&["Finance", "Engineering", "Sales", "all"]);
        let current = strings(&["all", "any", "Finance", "Engineering", "Sales"]);
        let resolved = resolve_change(&options(), &previous, &current);
        assert_eq!(resolved, strings(&["any", "Finance", "Engineering", "Sales"]));
    }

    #[test]
    fn covers_all_tracks_the_full_set() {
        assert!(covers_all(
            &options(),
            &strings(&["Finance", "Engineering", "Sales"])
        ));
        assert!(!covers_all(&options(), &strings(&["Finance"])));
        assert!(!covers_all(&[], &[]));
    }

    #[test]
    fn with_all_prefixes_the_sentinel() {
        let built = with_all(&["Finance", "Sales"]);
        assert_eq!(built[0].value, ALL);
        assert_eq!(built.len(), 3);
    }
}
