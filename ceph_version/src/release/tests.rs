#![cfg(test)]

use super::*;

#[test]
fn test_names() {
    assert_eq!(Release::Luminous.name(), "luminous");
    assert_eq!(Release::Mimic.name(), "mimic");
    assert_eq!(Release::Nautilus.name(), "nautilus");
    assert_eq!(Release::Octopus.to_string(), "octopus");
}

#[test]
fn test_reference_versions() {
    assert_eq!(Release::Luminous.version(), Version::new(12, 0, 0));
    assert_eq!(Release::Mimic.version(), Version::new(13, 0, 0));
    assert_eq!(Release::Nautilus.version(), Version::new(14, 0, 0));
    assert_eq!(Release::Octopus.version(), Version::new(15, 0, 0));
}

#[test]
fn test_named_newest_first() {
    let majors: Vec<_> = Release::all()
        .iter()
        .map(|release| release.version().major)
        .collect();
    assert_eq!(majors, [15, 14, 13, 12]);
}

#[test]
fn test_from_major() {
    assert_eq!(Release::from_major(12), Some(Release::Luminous));
    assert_eq!(Release::from_major(15), Some(Release::Octopus));
    assert_eq!(Release::from_major(11), None);
    assert_eq!(Release::from_major(99), None);
}

#[test]
fn test_catalog_partition() {
    for release in supported_releases() {
        assert!(!unsupported_releases().contains(release));
    }
    assert_eq!(
        all_releases(),
        [Release::Luminous, Release::Mimic, Release::Nautilus]
    );

    let joined: Vec<_> = supported_releases()
        .iter()
        .chain(unsupported_releases())
        .copied()
        .collect();
    assert_eq!(all_releases(), joined.as_slice());
}

#[test]
fn test_octopus_is_not_cataloged() {
    assert!(!all_releases().contains(&Release::Octopus));
    assert!(!Release::Octopus.is_supported());
}

#[test]
fn test_release_support() {
    assert!(Release::Luminous.is_supported());
    assert!(Release::Mimic.is_supported());
    assert!(!Release::Nautilus.is_supported());
}
