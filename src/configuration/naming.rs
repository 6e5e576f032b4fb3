//! Unique names for duplicated configurations.

use regex::Regex;
use std::sync::LazyLock;

/// `"Name (3)"` -> (`"Name"`, 3).
static DUPLICATE_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s?\((\d+)\)$").expect("Invalid duplicate suffix regex")
});

fn split_duplicate_suffix(name: &str) -> Option<(&str, u64)> {
    let captures = DUPLICATE_SUFFIX_REGEX.captures(name)?;
    let number = captures.get(2)?.as_str().parse().ok()?;
    Some((captures.get(1)?.as_str(), number))
}

/// Derive a name from `proposed` that none of `existing` uses.
///
/// A trailing `" (N)"` on `proposed` is dropped to get the base name. If no
/// existing name is the base name or a numbered copy of it, the base name is
/// returned. Otherwise the result is `"{base} ({max + 1})"`, where an
/// unnumbered match counts as 1.
pub fn make_unique_name<S: AsRef<str>>(existing: &[S], proposed: &str) -> String {
    let base_name = split_duplicate_suffix(proposed)
        .map(|(base, _)| base)
        .unwrap_or(proposed);

    let taken: Vec<u64> = existing
        .iter()
        .map(|name| -> &str { name.as_ref() })
        .filter(|name| name.starts_with(base_name))
        .filter_map(|name| match split_duplicate_suffix(name) {
            Some((base, number)) if base == base_name => Some(number),
            _ if name == base_name => Some(1),
            _ => None,
        })
        .collect();

    let Some(max) = taken.iter().copied().max() else {
        return base_name.to_string();
    };

    // At u64::MAX fall back to the lowest free number.
    let number = max
        .checked_add(1)
        .unwrap_or_else(|| (2..).find(|n| !taken.contains(n)).unwrap_or(max));
    format!("{} ({})", base_name, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_free_name_is_kept() {
        assert_eq!(make_unique_name(&NONE, "Foo"), "Foo");
        assert_eq!(make_unique_name(&["Bar"], "Foo"), "Foo");
    }

    #[test]
    fn test_collision_appends_two() {
        assert_eq!(make_unique_name(&["Foo"], "Foo"), "Foo (2)");
    }

    #[test]
    fn test_uses_highest_existing_suffix() {
        assert_eq!(make_unique_name(&["Foo", "Foo (2)"], "Foo"), "Foo (3)");
        assert_eq!(make_unique_name(&["Foo", "Foo (7)", "Foo (3)"], "Foo"), "Foo (8)");
    }

    #[test]
    fn test_proposed_suffix_is_stripped() {
        assert_eq!(make_unique_name(&["Foo (2)"], "Foo (2)"), "Foo (3)");
        assert_eq!(make_unique_name(&NONE, "Foo (5)"), "Foo");
    }

    #[test]
    fn test_names_only_sharing_a_prefix_do_not_collide() {
        assert_eq!(make_unique_name(&["Foobar", "Foo bar (4)"], "Foo"), "Foo");
    }

    #[test]
    fn test_result_never_matches_existing() {
        let existing = ["Validation", "Validation (2)", "Validation (10)", "API dump"];
        for proposed in ["Validation", "Validation (2)", "API dump", "Frame capture"] {
            let name = make_unique_name(&existing, proposed);
            assert!(!existing.contains(&name.as_str()), "{} collides", name);
        }
    }

    #[test]
    fn test_largest_suffix_does_not_overflow() {
        let max = format!("Foo ({})", u64::MAX);
        let name = make_unique_name(&["Foo", max.as_str()], "Foo");
        assert_eq!(name, "Foo (2)");

        let existing = ["Foo", "Foo (2)", max.as_str()];
        assert_eq!(make_unique_name(&existing, "Foo"), "Foo (3)");
    }

    #[test]
    fn test_suffix_beyond_u64_is_not_a_number() {
        let existing = ["Foo (99999999999999999999999)"];
        assert_eq!(make_unique_name(&existing, "Foo"), "Foo");
    }

    #[test]
    fn test_split_duplicate_suffix() {
        assert_eq!(split_duplicate_suffix("Foo (12)"), Some(("Foo", 12)));
        assert_eq!(split_duplicate_suffix("Foo(3)"), Some(("Foo", 3)));
        assert_eq!(split_duplicate_suffix("Foo (x)"), None);
        assert_eq!(split_duplicate_suffix("Foo"), None);
    }
}
