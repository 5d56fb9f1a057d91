//! Property tests for selection toggling.

use proptest::prelude::*;

use promptweave::{toggle, SelectionSet};

fn path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,4}(/[a-z]{1,4}){0,2}").unwrap()
}

fn selection() -> impl Strategy<Value = SelectionSet> {
    proptest::collection::vec(path(), 0..=8).prop_map(|paths| paths.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling a path absent from the set, then toggling it back,
    /// restores the original set.
    #[test]
    fn property_toggle_then_opposite_restores(
        start in selection(),
        p in path(),
    ) {
        let included = !start.contains(&p);
        let toggled = toggle(&p, included, &start);
        prop_assert_eq!(toggled.contains(&p), included);
        prop_assert_eq!(toggle(&p, !included, &toggled), start);
    }

    /// PROPERTY: Toggling is idempotent.
    #[test]
    fn property_toggle_is_idempotent(
        start in selection(),
        p in path(),
        included in any::<bool>(),
    ) {
        let once = toggle(&p, included, &start);
        let twice = toggle(&p, included, &once);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Toggling one path leaves every other path alone.
    #[test]
    fn property_toggle_touches_one_path(
        start in selection(),
        p in path(),
        included in any::<bool>(),
    ) {
        let next = toggle(&p, included, &start);
        for other in start.iter().filter(|o| *o != p) {
            prop_assert!(next.contains(other));
        }
        prop_assert!(next.len() <= start.len() + 1);
    }

    /// PROPERTY: The saved YAML form reads back to the same set.
    #[test]
    fn property_selection_yaml_is_stable(start in selection()) {
        let yaml = serde_yaml_ng::to_string(&start).unwrap();
        let back: SelectionSet = serde_yaml_ng::from_str(&yaml).unwrap();
        prop_assert_eq!(back, start);
    }
}
