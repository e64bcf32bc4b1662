use std::collections::HashSet;

use httpmock::MockServer;
use metrics_util::debugging::DebuggingRecorder;
use tempfile::TempDir;
use vitrine::api::ApiClient;
use vitrine::application::controller::ViewController;
use vitrine::cache::{CacheConfig, ResourceType, ViewCache};
use vitrine::presentation::ViewFormat;
use vitrine::session::SessionStore;

#[tokio::test]
async fn controller_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/brand");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"name":"Acme","description":null}]"#);
    });
    server.mock(|when, then| {
        when.method("POST").path("/brand");
        then.status(201);
    });

    let dir = TempDir::new().expect("tmp dir");
    let api = ApiClient::new(&server.base_url(), &server.base_url())
        .expect("client")
        .with_token("tok");
    let mut controller = ViewController::new(
        api,
        ViewCache::new(CacheConfig::default()),
        SessionStore::new(dir.path().join("session.token")),
        ViewFormat::Text,
    );

    // miss, hit, then invalidate + miss through the mutation path
    controller
        .show(ResourceType::Brands)
        .await
        .expect("first show");
    controller
        .show(ResourceType::Brands)
        .await
        .expect("cached show");
    controller
        .create_brand(vitrine::application::forms::BrandForm {
            name: "Bolt".into(),
            description: None,
        })
        .await
        .expect("create brand");

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(composite_key, _, _, _)| composite_key.key().name().to_string())
        .collect();

    let expected = [
        "vitrine_view_cache_hit_total",
        "vitrine_view_cache_miss_total",
        "vitrine_view_cache_invalidate_total",
    ];

    for metric in expected {
        assert!(names.contains(metric), "missing metric: {metric}");
    }
}
