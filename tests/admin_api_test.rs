//! # Admin API Tests
//!
//! Spawns the admin router on a random port and drives it over HTTP.

use anyhow::Result;
use folio_rs::content::{default_content, to_pretty_json};
use folio_rs::resolver::{ContentSource, Resolved};
use folio_rs::server::{router, AppState, PASSCODE_HEADER};
use folio_rs::state::{AdminGate, ContentState};
use folio_rs::storage::{ContentGateway, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::{net::TcpListener, task::JoinHandle};

const PASSCODE: &str = "test-passcode";

/// A running admin server backed by an in-memory store
struct TestApp {
    address: String,
    client: reqwest::Client,
    _public_dir: TempDir,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    async fn spawn() -> Result<Self> {
        Self::spawn_with_gateway(ContentGateway::new(MemoryStore::new(), "draft")).await
    }

    async fn spawn_with_gateway(gateway: ContentGateway<MemoryStore>) -> Result<Self> {
        let public_dir = TempDir::new()?;
        std::fs::create_dir_all(public_dir.path().join("content"))?;
        std::fs::write(
            public_dir.path().join("content/content.json"),
            to_pretty_json(&default_content())?,
        )?;

        let resolved = Resolved {
            content: default_content(),
            source: ContentSource::Default,
        };
        let state = ContentState::from_resolved(gateway, resolved);
        let app = Arc::new(AppState::new(state, AdminGate::new(PASSCODE), "content.json"));
        let router = router(app, public_dir.path());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Ok(Self {
            address,
            client: reqwest::Client::new(),
            _public_dir: public_dir,
            _server_handle: server_handle,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    fn admin(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(PASSCODE_HEADER, PASSCODE)
    }
}

#[tokio::test]
async fn test_public_content_and_static_file() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.client.get(app.url("/api/content")).send().await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["source"], "default");
    assert_eq!(body["content"]["siteSettings"]["name"], default_content().site_settings.name);

    let response = app
        .client
        .get(app.url("/content/content.json"))
        .send()
        .await?;
    assert!(response.status().is_success());

    Ok(())
}

#[tokio::test]
async fn test_admin_routes_require_passcode() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app.client.get(app.url("/api/admin/draft")).send().await?;
    assert_eq!(401, response.status().as_u16());

    let response = app
        .client
        .get(app.url("/api/admin/draft"))
        .header(PASSCODE_HEADER, "wrong")
        .send()
        .await?;
    assert_eq!(401, response.status().as_u16());

    let response = app
        .client
        .post(app.url("/api/admin/login"))
        .json(&json!({ "passcode": "wrong" }))
        .send()
        .await?;
    assert_eq!(401, response.status().as_u16());

    let response = app
        .client
        .post(app.url("/api/admin/login"))
        .json(&json!({ "passcode": PASSCODE }))
        .send()
        .await?;
    assert!(response.status().is_success());

    Ok(())
}

#[tokio::test]
async fn test_edit_then_commit() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .admin(reqwest::Method::PATCH, "/api/admin/draft/field")
        .json(&json!({ "path": "hero.name", "value": "Edited Name" }))
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["dirty"], true);
    assert_eq!(body["draft"]["hero"]["name"], "Edited Name");

    // Not visible publicly before commit
    let body: Value = app
        .client
        .get(app.url("/api/content"))
        .send()
        .await?
        .json()
        .await?;
    assert_ne!(body["content"]["hero"]["name"], "Edited Name");

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/commit")
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["source"], "draft");
    assert_eq!(body["content"]["hero"]["name"], "Edited Name");

    Ok(())
}

#[tokio::test]
async fn test_list_operations() -> Result<()> {
    let app = TestApp::spawn().await?;
    let roles = default_content().hero.roles;

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/draft/list/move")
        .json(&json!({ "path": "hero.roles", "from": 0, "to": 2 }))
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["draft"]["hero"]["roles"][2], roles[0]);

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/draft/list/insert")
        .json(&json!({ "path": "testimonials", "item": { "name": "Ada", "role": "Mentor", "quote": "Great." } }))
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    let testimonials = body["draft"]["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.last().unwrap()["name"], "Ada");

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/draft/list/remove")
        .json(&json!({ "path": "testimonials", "index": 99 }))
        .send()
        .await?;
    assert_eq!(404, response.status().as_u16());

    let response = app
        .admin(reqwest::Method::PATCH, "/api/admin/draft/field")
        .json(&json!({ "path": "hero.nope", "value": 1 }))
        .send()
        .await?;
    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await?;
    assert!(body["error"].as_str().unwrap().contains("hero.nope"));

    let response = app
        .admin(reqwest::Method::PATCH, "/api/admin/draft/field")
        .json(&json!({ "path": "hero.isGenAI", "value": true }))
        .send()
        .await?;
    assert_eq!(400, response.status().as_u16());

    Ok(())
}

#[tokio::test]
async fn test_export_import_and_reset() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .admin(reqwest::Method::GET, "/api/admin/export")
        .send()
        .await?;
    assert!(response.status().is_success());
    let disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()?
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"content.json\"");
    let exported = response.text().await?;

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/import")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(400, response.status().as_u16());

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/import")
        .body(r#"{"foo": 1}"#)
        .send()
        .await?;
    assert_eq!(400, response.status().as_u16());

    let edited = exported.replace("\"greeting\": \"", "\"greeting\": \"Hey! ");
    let response = app
        .admin(reqwest::Method::POST, "/api/admin/import")
        .body(edited)
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["source"], "draft");
    assert!(body["content"]["hero"]["greeting"]
        .as_str()
        .unwrap()
        .starts_with("Hey! "));

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/reset")
        .send()
        .await?;
    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body["source"], "default");
    assert_eq!(body["content"]["hero"]["greeting"], default_content().hero.greeting);

    Ok(())
}

#[tokio::test]
async fn test_quota_exceeded_maps_to_507() -> Result<()> {
    let gateway = ContentGateway::new(MemoryStore::new(), "draft").with_size_limit(1024);
    let app = TestApp::spawn_with_gateway(gateway).await?;

    let response = app
        .admin(reqwest::Method::POST, "/api/admin/commit")
        .send()
        .await?;
    assert_eq!(507, response.status().as_u16());

    Ok(())
}
