// tests/resolver_test.rs
use tag_release::domain::VersionBump;
use tag_release::git::{MockRepository, Repository};
use tag_release::resolver::{filter_release_commits, resolve_next, revision_range};
use tag_release::TagReleaseError;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_first_release_is_0_0_1() {
    for bump in [VersionBump::Patch, VersionBump::Minor, VersionBump::Major] {
        let resolution = resolve_next("svc", bump, &[]).unwrap();
        assert_eq!(resolution.new_tag.to_string(), "svc-0.0.1");
        assert!(resolution.previous_tag.is_none());
        assert_eq!(revision_range(resolution.previous_tag.as_ref()), "HEAD");
    }
}

#[test]
fn test_patch_release_from_existing_namespace() {
    let existing = tags(&["svc-1.2.3", "other-9.9.9"]);
    let resolution = resolve_next("svc", VersionBump::Patch, &existing).unwrap();

    assert_eq!(resolution.new_tag.to_string(), "svc-1.2.4");
    assert_eq!(
        resolution.previous_tag.as_ref().map(|t| t.to_string()),
        Some("svc-1.2.3".to_string())
    );
    assert_eq!(
        revision_range(resolution.previous_tag.as_ref()),
        "svc-1.2.3..HEAD"
    );
}

#[test]
fn test_minor_and_major_reset_lower_components() {
    let existing = tags(&["svc-1.2.3"]);

    let minor = resolve_next("svc", VersionBump::Minor, &existing).unwrap();
    assert_eq!(minor.new_tag.to_string(), "svc-1.3.0");

    let major = resolve_next("svc", VersionBump::Major, &existing).unwrap();
    assert_eq!(major.new_tag.to_string(), "svc-2.0.0");
}

#[test]
fn test_multi_digit_components_compare_numerically() {
    let existing = tags(&["svc-1.9.0", "svc-1.10.0", "svc-1.2.30"]);
    let resolution = resolve_next("svc", VersionBump::Patch, &existing).unwrap();
    assert_eq!(resolution.new_tag.to_string(), "svc-1.10.1");
}

#[test]
fn test_malformed_namespace_tag_is_fatal() {
    let existing = tags(&["svc-1.2.3", "svc-oops"]);
    assert!(matches!(
        resolve_next("svc", VersionBump::Patch, &existing),
        Err(TagReleaseError::MalformedTag { .. })
    ));
}

#[test]
fn test_dashed_application_name_is_rejected() {
    assert!(matches!(
        resolve_next("my-svc", VersionBump::Patch, &tags(&["my-svc-1.0.0"])),
        Err(TagReleaseError::AmbiguousApplication(_))
    ));
}

#[test]
fn test_marker_filtering() {
    let mut repo = MockRepository::new();
    repo.add_commit("ghi789", "[other] change");
    repo.add_commit("def456", "[svc] add feature");
    repo.add_commit("abc123", "fix bug");

    let log = repo.commits_since(None).unwrap();
    let filtered = filter_release_commits(&log, "svc");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].summary(), "def456 [svc] add feature");
}

#[test]
fn test_end_to_end_against_mock_repository() {
    // Full read path: enumerate tags, resolve, scan the range, filter
    let mut repo = MockRepository::new();
    repo.add_commit("ccc1111", "[svc] add retry logic");
    repo.add_commit("bbb2222", "[other] unrelated");
    repo.add_commit("aaa3333", "[svc] previous release work");
    repo.add_tag_at("svc-0.3.1", "aaa3333");
    repo.add_tag("other-1.0.0");

    let existing = repo.list_tags().unwrap();
    let resolution = resolve_next("svc", VersionBump::Minor, &existing).unwrap();
    assert_eq!(resolution.new_tag.to_string(), "svc-0.4.0");

    let previous = resolution.previous_tag.as_ref().map(|t| t.to_string());
    let log = repo.commits_since(previous.as_deref()).unwrap();
    assert_eq!(log.len(), 2);

    let filtered = filter_release_commits(&log, "svc");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].hash, "ccc1111");
}
