use pleasing::domain::{
    next_version, resolve, IncrementPolicy, SemanticVersion, VersionDirective, VersionOptions,
};
use pleasing::PleasingError;

#[test]
fn test_parse_renders_major_minor_patch_build() {
    // Prerelease and metadata are not retained by the model: they vanish
    // from the rendered form, and a fourth component renders as "-build".
    let cases = [
        ("1.2.3", "1.2.3"),
        ("v1.2.3", "1.2.3"),
        ("1.2", "1.2.0"),
        ("1.2.3.4", "1.2.3-4"),
        ("1.2.3.0", "1.2.3"),
        ("1.2.3-beta.1", "1.2.3"),
        ("1.2.3+build.5", "1.2.3"),
        ("1.2.3.9-rc1+sha.abc", "1.2.3-9"),
    ];

    for (input, expected) in cases {
        let version = SemanticVersion::parse(input).unwrap();
        assert_eq!(version.to_string(), expected, "rendering {}", input);
    }
}

#[test]
fn test_raw_is_the_searchable_literal() {
    assert_eq!(SemanticVersion::parse("v2.0.1").unwrap().raw(), "2.0.1");
    assert_eq!(SemanticVersion::parse("2.0.1-beta").unwrap().raw(), "2.0.1-beta");
    assert_eq!(SemanticVersion::parse("2.0").unwrap().raw(), "2.0");
}

#[test]
fn test_dev_sentinel() {
    let version = SemanticVersion::parse("9999999-dev").unwrap();
    assert_eq!(version.major(), 0);
    assert_eq!(version.minor(), 0);
    assert_eq!(version.patch(), 0);
    assert_eq!(version.build(), Some("dev-master"));
    assert_eq!(version.raw(), "9999999-dev");
}

#[test]
fn test_invalid_version() {
    let err = SemanticVersion::parse("release candidate").unwrap_err();
    assert!(matches!(err, PleasingError::InvalidVersionFormat(_)));
}

#[test]
fn test_set_always_wins() {
    let policy = IncrementPolicy::default();
    for current in ["0.1.0", "2.5.0", "10.0.0.3", "9999999-dev"] {
        let current = SemanticVersion::parse(current).unwrap();
        let next = next_version(&current, &VersionDirective::Set("2.5.0".to_string()), policy)
            .unwrap();
        assert_eq!(next.to_string(), "2.5.0");
    }
}

#[test]
fn test_increments_leave_lower_components() {
    // Observed behaviour: bumping major/minor does not reset the lower
    // components. This differs from conventional semver; the
    // `cascade_reset` policy switches to resetting.
    let current = SemanticVersion::parse("1.2.3").unwrap();
    let policy = IncrementPolicy::default();

    let patch = next_version(&current, &VersionDirective::IncrementPatch(1), policy).unwrap();
    assert_eq!(patch.to_string(), "1.2.4");

    let minor = next_version(&current, &VersionDirective::IncrementMinor(2), policy).unwrap();
    assert_eq!(minor.to_string(), "1.4.3");

    let major = next_version(&current, &VersionDirective::IncrementMajor(1), policy).unwrap();
    assert_eq!(major.to_string(), "2.2.3");
}

#[test]
fn test_cascade_reset_policy() {
    let current = SemanticVersion::parse("1.2.3").unwrap();
    let policy = IncrementPolicy {
        cascade_reset: true,
    };

    let minor = next_version(&current, &VersionDirective::IncrementMinor(2), policy).unwrap();
    assert_eq!(minor.to_string(), "1.4.0");
}

#[test]
fn test_resolve_without_directive() {
    let current = SemanticVersion::parse("1.2.3").unwrap();
    let err = resolve(&current, &VersionOptions::default(), IncrementPolicy::default())
        .unwrap_err();
    assert!(matches!(err, PleasingError::NoDirectiveGiven));
}

#[test]
fn test_resolve_build_tag() {
    let current = SemanticVersion::parse("1.2.3").unwrap();
    let options = VersionOptions {
        build: Some("20240101".to_string()),
        ..VersionOptions::default()
    };
    let next = resolve(&current, &options, IncrementPolicy::default()).unwrap();
    assert_eq!(next.to_string(), "1.2.3-20240101");
}
