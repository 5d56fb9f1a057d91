//! Property tests for exclusion patterns.

use proptest::prelude::*;

use promptweave::{is_excluded, ExclusionMatcher};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_.]{1,8}").unwrap()
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.join("/"))
}

fn pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_.*?\\[\\]()+]{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Adding patterns never brings a hidden path back.
    #[test]
    fn property_more_patterns_hide_more(
        path in relative_path(),
        base in proptest::collection::vec(pattern(), 0..=4),
        extra in proptest::collection::vec(pattern(), 0..=4),
    ) {
        let mut all = base.clone();
        all.extend(extra);
        if is_excluded(&path, base.as_slice()) {
            prop_assert!(is_excluded(&path, all.as_slice()));
        }
    }

    /// PROPERTY: A pattern without `*` matches exactly when it is a substring.
    #[test]
    fn property_plain_patterns_are_substrings(
        path in relative_path(),
        needle in "[a-z0-9_./]{1,5}",
    ) {
        prop_assert_eq!(is_excluded(&path, &[needle.as_str()]), path.contains(&needle));
    }

    /// PROPERTY: Regex metacharacters other than `*` are taken literally.
    #[test]
    fn property_only_star_is_special(
        path in relative_path(),
        pat in pattern(),
    ) {
        let matcher = ExclusionMatcher::new([pat.as_str()]);
        prop_assert!(matcher.is_ok(), "pattern '{}' failed to compile", pat);
        let matcher = matcher.unwrap();
        if !pat.contains('*') && !pat.trim().is_empty() {
            prop_assert_eq!(matcher.is_excluded(&path), path.contains(&pat));
        }
    }

    /// PROPERTY: The compiled matcher agrees with the one-shot check.
    #[test]
    fn property_matcher_agrees_with_one_shot(
        path in relative_path(),
        patterns in proptest::collection::vec(pattern(), 0..=5),
    ) {
        let matcher = ExclusionMatcher::new(&patterns).unwrap();
        prop_assert_eq!(matcher.is_excluded(&path), is_excluded(&path, patterns.as_slice()));
    }

    /// PROPERTY: Backslash-separated paths match like their `/` form.
    #[test]
    fn property_separators_are_normalized(
        parts in proptest::collection::vec(segment(), 1..=4),
        patterns in proptest::collection::vec(pattern(), 0..=3),
    ) {
        let slash = parts.join("/");
        let backslash = parts.join("\\");
        prop_assert_eq!(is_excluded(&slash, patterns.as_slice()), is_excluded(&backslash, patterns.as_slice()));
    }
}
