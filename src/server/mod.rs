//! Admin server
//!
//! Serves the public directory, the resolved content as JSON, and the
//! passcode-gated admin API that edits the draft.

mod error;
mod handlers;

use anyhow::Result;
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ADMIN_PASSCODE_ENV;
use crate::state::{AdminGate, ContentState};
use crate::storage::KeyValueStore;
use crate::Folio;

pub use error::ApiError;

/// Header carrying the admin passcode on every admin request
pub const PASSCODE_HEADER: &str = "x-admin-passcode";

/// Server state
pub struct AppState<S> {
    content: RwLock<ContentState<S>>,
    gate: AdminGate,
    export_file: String,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(content: ContentState<S>, gate: AdminGate, export_file: impl Into<String>) -> Self {
        Self {
            content: RwLock::new(content),
            gate,
            export_file: export_file.into(),
        }
    }
}

/// Build the router for a shared state, serving static files from
/// `public_dir` for everything that is not an API route
pub fn router<S: KeyValueStore + 'static>(app: Arc<AppState<S>>, public_dir: &Path) -> Router {
    let admin = Router::new()
        .route("/draft", get(handlers::draft::<S>))
        .route("/draft/field", patch(handlers::set_field::<S>))
        .route("/draft/list/insert", post(handlers::list_insert::<S>))
        .route("/draft/list/remove", post(handlers::list_remove::<S>))
        .route("/draft/list/move", post(handlers::list_move::<S>))
        .route("/commit", post(handlers::commit::<S>))
        .route("/export", get(handlers::export::<S>))
        .route("/import", post(handlers::import::<S>))
        .route("/reset", post(handlers::reset::<S>))
        .route_layer(middleware::from_fn_with_state(
            app.clone(),
            require_passcode::<S>,
        ))
        .route("/login", post(handlers::login::<S>));

    Router::new()
        .route("/api/content", get(handlers::content::<S>))
        .nest("/api/admin", admin)
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn require_passcode<S: KeyValueStore + 'static>(
    State(app): State<Arc<AppState<S>>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let passcode = request
        .headers()
        .get(PASSCODE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !app.gate.check(passcode) {
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}

/// Start the admin server
pub async fn start(folio: &Folio, ip: &str, port: u16, passcode: Option<&str>) -> Result<()> {
    let content = folio.load_state().await;
    tracing::info!("Serving content from the {}", content.source());

    if passcode.is_none() && folio.config.admin_passcode.is_none() {
        tracing::warn!(
            "No admin passcode configured, set {} or admin_passcode in _config.yml. Using the built-in fallback.",
            ADMIN_PASSCODE_ENV
        );
    }
    let gate = AdminGate::new(folio.config.admin_passcode(passcode));

    let app = Arc::new(AppState::new(content, gate, &folio.config.export_file));
    let router = router(app, &folio.public_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Admin API at http://{}:{}/api/admin", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
