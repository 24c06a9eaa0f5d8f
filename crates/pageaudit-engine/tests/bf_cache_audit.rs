use pageaudit_engine::{Audit, BfCacheAudit, audit_bf_cache, run_default_audits};
use pageaudit_testing::{ArtifactsBuilder, TreeBuilder};
use pageaudit_types::{Artifacts, AuditProduct, Details, TableDetails};
use serde_json::json;
use std::fs;
use std::path::Path;

// Helper to load Artifacts from fixture JSON
fn load_fixture(fixture_name: &str) -> Artifacts {
    let path = Path::new("tests/fixtures").join(fixture_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    Artifacts::from_json_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

fn table(product: &AuditProduct) -> &TableDetails {
    product
        .details
        .as_ref()
        .and_then(Details::as_table)
        .expect("expected table details")
}

fn column(product: &AuditProduct, key: &str) -> Vec<String> {
    table(product)
        .items
        .iter()
        .map(|item| item[key].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_no_failures_is_exactly_a_pass() {
    let artifacts = ArtifactsBuilder::new().no_failures().build();
    let product = BfCacheAudit.audit(&artifacts).unwrap();

    assert_eq!(serde_json::to_value(&product).unwrap(), json!({"score": 1.0}));
}

#[test]
fn test_single_actionable_reason() {
    let artifacts = ArtifactsBuilder::new()
        .failure(TreeBuilder::new().actionable("WebSocket", &["https://example.com/"]))
        .build();
    let product = BfCacheAudit.audit(&artifacts).unwrap();

    assert_eq!(product.score, 0.0);
    assert_eq!(
        product.display_value.as_deref(),
        Some("1 actionable failure reason")
    );
    assert_eq!(table(&product).items.len(), 1);
}

#[test]
fn test_two_actionable_reasons_pluralize() {
    let tree = TreeBuilder::new()
        .actionable("WebSocket", &["https://example.com/"])
        .actionable("UnloadHandlerExistsInMainFrame", &["https://example.com/"]);
    let product = audit_bf_cache(&[tree.into_failure()]).unwrap();

    assert_eq!(product.score, 0.0);
    assert_eq!(
        product.display_value.as_deref(),
        Some("2 actionable failure reasons")
    );
}

#[test]
fn test_circumstantial_only_reports_zero_actionable() {
    let tree = TreeBuilder::new().circumstantial("CacheLimit", &["https://a.test/"]);
    let product = audit_bf_cache(&[tree.into_failure()]).unwrap();

    assert_eq!(product.score, 1.0);
    assert_eq!(
        product.display_value.as_deref(),
        Some("0 actionable failure reasons")
    );
}

#[test]
fn test_actionable_counts_reasons_not_frames() {
    let tree = TreeBuilder::new().actionable(
        "WebSocket",
        &["https://a.example/", "https://b.example/", "https://c.example/"],
    );
    let product = audit_bf_cache(&[tree.into_failure()]).unwrap();

    assert_eq!(
        product.display_value.as_deref(),
        Some("1 actionable failure reason")
    );
}

#[test]
fn test_non_actionable_reasons_pass_but_are_listed() {
    let product = BfCacheAudit
        .audit(&load_fixture("not_actionable_only.json"))
        .unwrap();

    assert_eq!(product.score, 1.0);
    assert_eq!(
        product.display_value.as_deref(),
        Some("0 actionable failure reasons")
    );
    assert_eq!(
        column(&product, "failureType"),
        vec!["Not actionable", "Pending browser support", "Pending browser support"]
    );
}

#[test]
fn test_rows_follow_category_order_not_input_order() {
    let product = BfCacheAudit.audit(&load_fixture("mixed_reasons.json")).unwrap();

    assert_eq!(
        column(&product, "protocolReason"),
        vec![
            "UnloadHandlerExistsInMainFrame",
            "WebSocket",
            "CacheLimit",
            "BroadcastChannel"
        ]
    );
    assert_eq!(
        column(&product, "failureType"),
        vec![
            "Actionable",
            "Actionable",
            "Not actionable",
            "Pending browser support"
        ]
    );
}

#[test]
fn test_only_first_failure_is_considered() {
    let product = BfCacheAudit.audit(&load_fixture("mixed_reasons.json")).unwrap();

    assert!(
        !column(&product, "protocolReason").contains(&"CacheControlNoStore".to_string())
    );
    assert_eq!(
        product.display_value.as_deref(),
        Some("2 actionable failure reasons")
    );
}

#[test]
fn test_unknown_reason_code_is_shown_verbatim() {
    let product = BfCacheAudit
        .audit(&load_fixture("not_actionable_only.json"))
        .unwrap();

    assert_eq!(column(&product, "reason")[2], "SomeReasonFromTheFuture");
}

#[test]
fn test_empty_frame_list_renders_empty_sub_items() {
    let product = BfCacheAudit
        .audit(&load_fixture("not_actionable_only.json"))
        .unwrap();

    let row = &table(&product).items[2];
    assert_eq!(row["subItems"], json!({"type": "subitems", "items": []}));
}

#[test]
fn test_table_shape_matches_renderer() {
    let product = BfCacheAudit.audit(&load_fixture("mixed_reasons.json")).unwrap();

    insta::with_settings!({sort_maps => true}, {
        insta::assert_json_snapshot!("mixed_reasons_table", product.details);
    });
}

#[test]
fn test_run_summary_uses_failure_title() {
    let summary = run_default_audits(&load_fixture("mixed_reasons.json"));
    let report = &summary.audits[0];

    assert_eq!(report.id, "bf-cache");
    assert_eq!(report.title, "Page prevented back/forward cache restoration");
    assert_eq!(report.score, Some(0.0));
    assert!(summary.fetch_time.is_some());
}

#[test]
fn test_run_summary_uses_title_on_pass() {
    let summary = run_default_audits(&load_fixture("not_actionable_only.json"));
    let report = &summary.audits[0];

    assert_eq!(
        report.title,
        "Page didn't prevent back/forward cache restoration"
    );
    assert_eq!(report.score, Some(1.0));
}
