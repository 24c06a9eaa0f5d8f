use pageaudit_types::*;
use std::io::Write;

#[test]
fn test_reason_order_follows_source() {
    let json = r#"{
        "BFCacheFailures": [{
            "notRestoredReasonsTree": {
                "SupportPending": {"WebSocket": ["https://example.com/"]},
                "PageSupportNeeded": {
                    "UnloadHandlerExistsInMainFrame": ["https://example.com/"],
                    "CacheControlNoStore": []
                }
            }
        }]
    }"#;

    let artifacts = Artifacts::from_json_str(json).unwrap();
    let failures = artifacts.bf_cache_failures.as_ref().unwrap();
    let tree = &failures[0].not_restored_reasons_tree;

    let actionable: Vec<&str> = tree
        .reasons(FailureType::PageSupportNeeded)
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        actionable,
        vec!["UnloadHandlerExistsInMainFrame", "CacheControlNoStore"]
    );
    assert!(tree.reasons(FailureType::Circumstantial).is_empty());
    assert_eq!(tree.reason_count(), 3);
}

#[test]
fn test_null_frame_list_reads_as_empty() {
    let json = r#"{
        "notRestoredReasonsTree": {
            "PageSupportNeeded": {"WebSocket": null},
            "Circumstantial": null
        }
    }"#;

    let failure: BfCacheFailure = serde_json::from_str(json).unwrap();
    let tree = &failure.not_restored_reasons_tree;
    assert_eq!(tree.reasons(FailureType::PageSupportNeeded)["WebSocket"], Vec::<String>::new());
    assert!(tree.reasons(FailureType::Circumstantial).is_empty());
}

#[test]
fn test_presence_checks() {
    let json = r#"{"BFCacheFailures": [], "URL": {"finalUrl": "https://example.com/"}, "Trace": null}"#;
    let artifacts = Artifacts::from_json_str(json).unwrap();

    assert!(artifacts.has(Artifacts::BF_CACHE_FAILURES));
    assert!(artifacts.has("URL"));
    assert!(!artifacts.has("Trace"));
    assert!(!artifacts.has("DevtoolsLog"));
    assert_eq!(artifacts.missing(&["URL", "Trace"]), vec!["Trace"]);
}

#[test]
fn test_missing_bf_cache_artifact() {
    let artifacts = Artifacts::from_json_str("{}").unwrap();
    assert!(!artifacts.has(Artifacts::BF_CACHE_FAILURES));
    assert!(artifacts.fetch_time.is_none());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"fetchTime": "2025-06-01T12:00:00Z", "BFCacheFailures": []}}"#
    )
    .unwrap();

    let artifacts = Artifacts::load(file.path()).unwrap();
    assert_eq!(artifacts.bf_cache_failures, Some(vec![]));
    assert!(artifacts.fetch_time.is_some());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    match Artifacts::load(&path) {
        Err(Error::ArtifactsNotFound(p)) => assert_eq!(p, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_load_malformed_json() {
    let result = Artifacts::from_json_str(r#"{"BFCacheFailures": [{"notRestoredReasonsTree": 5}]}"#);
    assert!(matches!(result, Err(Error::Json(_))));
}
