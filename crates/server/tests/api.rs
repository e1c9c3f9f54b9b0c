use std::{
    fs,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    body::{to_bytes, Body},
    http::{header::CACHE_CONTROL, Request, StatusCode},
    Router,
};
use clap::Parser;
use serde_json::{json, Value};
use server::{cli::Cli, db, router, seed::seed_pricing_plans, AppState};
use shared::{
    api::{
        collection_path,
        error::ServerError,
        response_errors::{ApiError, CollectionError},
        Object,
    },
    model::{AdminConfig, Document, PlanEnvironment},
    table::QuotaDisplay,
};
use tower::ServiceExt;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory holding the database and a stand-in client build
struct TestDir(PathBuf);

impl TestDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!(
            "plans-admin-test-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(dir.join("dist")).unwrap();
        fs::write(dir.join("dist/index.html"), "<html>plans admin</html>").unwrap();
        Self(dir)
    }

    fn db(&self) -> String {
        self.0.join("test.sqlite").to_string_lossy().into_owned()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

async fn spawn_app(dir: &TestDir, extra_args: &[&str]) -> (Router, AppState) {
    let assets = dir.0.join("dist");
    let db = dir.db();
    let mut cli_args = vec![
        "server",
        "--assets-dir",
        assets.to_str().unwrap(),
        "--sqlite-connection-string",
        db.as_str(),
    ];
    cli_args.extend_from_slice(extra_args);
    let args = Cli::try_parse_from(cli_args).unwrap();

    db::run_migrations(&args.sqlite_connection_string).unwrap();
    let pool = db::create_pool(&args.sqlite_connection_string).unwrap();

    let state = AppState { pool, args: Arc::new(args) };
    (router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let cache_control = response
        .headers()
        .get(CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_owned());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache_control, body.to_vec())
}

fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/pricing_plans.json")
}

#[tokio::test]
async fn test_empty_collection() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    let (status, cache_control, body) = get(&app, &collection_path("pricing_plans")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    let documents: Vec<Document> = serde_json::from_slice(&body).unwrap();
    assert!(documents.is_empty());
}

#[tokio::test]
async fn test_seeded_collection_ordered_by_key() {
    let dir = TestDir::new();
    let (app, state) = spawn_app(&dir, &[]).await;

    let seeded = seed_pricing_plans(&state.pool, PlanEnvironment::Prod, &config_path())
        .await
        .unwrap();
    assert_eq!(seeded, 3);

    let (status, _, body) = get(&app, &collection_path("pricing_plans")).await;
    assert_eq!(status, StatusCode::OK);
    let documents: Vec<Document> = serde_json::from_slice(&body).unwrap();
    let keys: Vec<_> = documents.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, ["free", "premium", "starter"]);
    assert_eq!(documents[0].fields["price_cents"], json!(0));
    assert_eq!(documents[0].fields["quota_week"], json!(5));

    // Dev collection stays untouched
    let (_, _, body) = get(&app, &collection_path("pricing_plans_dev")).await;
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let dir = TestDir::new();
    let (app, state) = spawn_app(&dir, &[]).await;

    for _ in 0..2 {
        seed_pricing_plans(&state.pool, PlanEnvironment::Dev, &config_path())
            .await
            .unwrap();
    }

    let (_, _, body) = get(&app, &collection_path("pricing_plans_dev")).await;
    let documents: Vec<Document> = serde_json::from_slice(&body).unwrap();
    assert_eq!(documents.len(), 3);
}

#[tokio::test]
async fn test_invalid_collection_name() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    let (status, _, body) = get(&app, "/api/collections/bad%20name").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: ServerError<CollectionError> = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        err,
        ServerError::from(CollectionError::InvalidName { name: "bad name".to_owned() })
    );
}

#[tokio::test]
async fn test_empty_collection_name() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    let (status, cache_control, body) = get(&app, &collection_path("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    let err: ServerError<CollectionError> = serde_json::from_slice(&body).unwrap();
    assert_eq!(err, ServerError::from(CollectionError::InvalidName { name: String::new() }));
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    for path in ["/api/nope", "/api/users/1"] {
        let (status, cache_control, body) = get(&app, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        let err: ServerError<ApiError> = serde_json::from_slice(&body).unwrap();
        assert_eq!(err, ServerError::from(ApiError::NotFound { path: path.to_owned() }));
    }
}

#[tokio::test]
async fn test_admin_config() {
    let dir = TestDir::new();

    let (app, _) = spawn_app(&dir, &[]).await;
    let (status, _, body) = get(&app, Object::AdminConfig.path()).await;
    assert_eq!(status, StatusCode::OK);
    let config: AdminConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(config, AdminConfig::default());

    let (app, _) = spawn_app(&dir, &["--plans-env", "dev", "--quota-display", "unlimited"]).await;
    let (_, _, body) = get(&app, Object::AdminConfig.path()).await;
    let config: AdminConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(config.plans_collection, "pricing_plans_dev");
    assert_eq!(config.quota_display, QuotaDisplay::Unlimited);
}

#[tokio::test]
async fn test_ping() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    let (status, cache_control, body) = get(&app, Object::Ping.path()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert_eq!(body, b"null");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = TestDir::new();
    let (app, _) = spawn_app(&dir, &[]).await;

    let (status, _, body) = get(&app, "/admin/plans").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>plans admin</html>");
}
