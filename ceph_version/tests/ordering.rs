use ceph_version::{parse, Version};
use proptest::prelude::*;

fn version() -> impl Strategy<Value = Version> {
    (0u32..40, 0u32..20, 0u32..20).prop_map(Version::from)
}

proptest! {
    #[test]
    fn is_at_least_is_total(a in version(), b in version()) {
        if a == b {
            prop_assert!(a.is_at_least(&b) && b.is_at_least(&a));
        } else {
            prop_assert!(a.is_at_least(&b) != b.is_at_least(&a));
        }
    }

    #[test]
    fn is_at_least_is_transitive(a in version(), b in version(), c in version()) {
        if a.is_at_least(&b) && b.is_at_least(&c) {
            prop_assert!(a.is_at_least(&c));
        }
    }

    #[test]
    fn is_at_least_matches_tuple_order(a in version(), b in version()) {
        let expected = (a.major, a.minor, a.patch) >= (b.major, b.minor, b.patch);
        prop_assert_eq!(a.is_at_least(&b), expected);
    }

    #[test]
    fn classification_ignores_minor_and_patch(a in version(), minor in any::<u32>(), patch in any::<u32>()) {
        let b = Version::new(a.major, minor, patch);
        prop_assert!(a.is_release(&b));
        prop_assert_eq!(a.release_name(), b.release_name());
        prop_assert_eq!(a.is_supported(), b.is_supported());
    }

    #[test]
    fn parse_reads_embedded_version(
        major in any::<u32>(),
        minor in any::<u32>(),
        patch in any::<u32>(),
        prefix in "[a-z \n]{0,16}",
        suffix in "[ -~]{0,32}",
    ) {
        let text = format!("{}ceph version {}.{}.{} {}", prefix, major, minor, patch, suffix);
        prop_assert_eq!(parse(&text).unwrap(), Version::new(major, minor, patch));
    }
}
