use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use ats_resume::config::Config;
use ats_resume::export::{ExportError, PdfExporter};
use ats_resume::render::Assets;
use ats_resume::routes::build_router;
use ats_resume::state::AppState;

const TEMPLATE: &str = r#"<html><head><link rel="stylesheet" href="./style.css" /></head><body><h1>{{NAME}}</h1><p>{{TITLE}}</p>{{SKILLS_HTML}}</body></html>"#;

/// Records every HTML document it is asked to print.
struct StubExporter {
    fail: bool,
    seen: Mutex<Vec<String>>,
}

impl StubExporter {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PdfExporter for StubExporter {
    async fn export(&self, html: &str, _base_dir: Option<&Path>) -> Result<Vec<u8>, ExportError> {
        self.seen.lock().unwrap().push(html.to_string());
        if self.fail {
            return Err(ExportError::Engine {
                status: "exit status: 1".to_string(),
                stderr: "browser crashed".to_string(),
            });
        }
        Ok(b"%PDF-1.7 stub".to_vec())
    }
}

fn repo_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(name)
}

fn app(exporter: Arc<StubExporter>) -> Router {
    let config = Config {
        port: 0,
        rust_log: "info".to_string(),
        assets_dir: repo_dir("templates"),
        data_dir: repo_dir("data"),
        chromium_bin: PathBuf::from("chromium"),
        chromium_no_sandbox: false,
        export_timeout: Duration::from_secs(5),
        max_concurrent_exports: 1,
    };
    build_router(AppState {
        assets: Arc::new(Assets::new(TEMPLATE, "h1 { color: navy; }")),
        exporter,
        config,
    })
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_export_pdf_returns_pdf_bytes() {
    let exporter = StubExporter::new(false);
    let body = json!({
        "name": "Jane Doe",
        "title": "Engineer",
        "skills": [{"group": "Core", "items": ["Go", "Rust"]}]
    });

    let response = app(exporter.clone())
        .oneshot(post("/api/export-pdf", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=resume.pdf"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.7 stub");

    let seen = exporter.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("<style>h1 { color: navy; }</style>"));
    assert!(seen[0].contains("<h1>Jane Doe</h1>"));
    assert!(seen[0].contains("Go, Rust"));
}

#[tokio::test]
async fn test_export_failure_is_500_with_error_json() {
    let response = app(StubExporter::new(true))
        .oneshot(post("/api/export-pdf", json!({"name": "Jane"}).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("PDF export failed"));
    assert!(message.contains("browser crashed"));
}

#[tokio::test]
async fn test_non_object_body_is_rejected_before_export() {
    let exporter = StubExporter::new(false);
    let response = app(exporter.clone())
        .oneshot(post("/api/export-pdf", "[1, 2, 3]"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("expected a JSON object"));
    assert!(exporter.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unparseable_body_is_error_json() {
    let response = app(StubExporter::new(false))
        .oneshot(post("/api/export-pdf", "{ nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn test_wrong_typed_fields_still_export() {
    let exporter = StubExporter::new(false);
    let response = app(exporter.clone())
        .oneshot(post(
            "/api/export-pdf",
            json!({"name": 42, "title": "Engineer", "skills": "Rust"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let seen = exporter.seen.lock().unwrap();
    assert!(seen[0].contains("<h1></h1><p>Engineer</p>"));
}

#[tokio::test]
async fn test_preview_returns_html() {
    let response = app(StubExporter::new(false))
        .oneshot(post("/api/preview", json!({"name": "A & B"}).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<h1>A &amp; B</h1>"));
    assert!(!html.contains("{{"));
}

#[tokio::test]
async fn test_health() {
    let response = app(StubExporter::new(false))
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ats-resume");
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let response = app(StubExporter::new(false))
        .oneshot(
            Request::get("/data/resume.example.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], "Jane Doe");

    let response = app(StubExporter::new(false))
        .oneshot(
            Request::get("/templates/missing.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
