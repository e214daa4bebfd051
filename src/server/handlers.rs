use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::state::{AdminError, ContentState};
use crate::storage::KeyValueStore;

type Shared<S> = State<Arc<AppState<S>>>;

#[derive(Debug, Deserialize)]
pub struct Login {
    pub passcode: String,
}

/// Body of `PATCH /api/admin/draft/field`. `unset` removes an open map key
/// instead of assigning `value`.
#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub path: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub unset: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListInsert {
    pub path: String,
    pub item: Value,
    pub index: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ListRemove {
    pub path: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct ListMove {
    pub path: String,
    pub from: usize,
    pub to: usize,
}

fn content_body<S: KeyValueStore>(state: &ContentState<S>) -> Json<Value> {
    Json(json!({
        "source": state.source(),
        "content": state.resolved(),
    }))
}

fn draft_body<S: KeyValueStore>(state: &ContentState<S>) -> Json<Value> {
    Json(json!({
        "dirty": state.draft().is_dirty(),
        "draft": state.draft().draft(),
    }))
}

/// Apply a change that writes to the store on a blocking thread, holding
/// the write lock there, and return the published content
async fn write_through<S, F>(app: Arc<AppState<S>>, change: F) -> Result<Json<Value>, ApiError>
where
    S: KeyValueStore + 'static,
    F: FnOnce(&mut ContentState<S>) -> Result<(), AdminError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || -> Result<Json<Value>, ApiError> {
        let mut state = app.content.blocking_write();
        change(&mut *state)?;
        Ok(content_body(&state))
    })
    .await?
}

pub async fn content<S: KeyValueStore + 'static>(State(app): Shared<S>) -> Json<Value> {
    let state = app.content.read().await;
    content_body(&state)
}

pub async fn login<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    Json(login): Json<Login>,
) -> Result<Json<Value>, ApiError> {
    if app.gate.check(&login.passcode) {
        Ok(Json(json!({ "ok": true })))
    } else {
        tracing::warn!("Rejected admin login");
        Err(ApiError::Unauthorized)
    }
}

pub async fn draft<S: KeyValueStore + 'static>(State(app): Shared<S>) -> Json<Value> {
    let state = app.content.read().await;
    draft_body(&state)
}

pub async fn set_field<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<Value>, ApiError> {
    let mut state = app.content.write().await;
    if update.unset {
        state.draft_mut().unset_field(&update.path)?;
    } else {
        state.draft_mut().set_field(&update.path, update.value)?;
    }
    Ok(draft_body(&state))
}

pub async fn list_insert<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    Json(body): Json<ListInsert>,
) -> Result<Json<Value>, ApiError> {
    let mut state = app.content.write().await;
    state
        .draft_mut()
        .insert_at_path(&body.path, body.item, body.index)?;
    Ok(draft_body(&state))
}

pub async fn list_remove<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    Json(body): Json<ListRemove>,
) -> Result<Json<Value>, ApiError> {
    let mut state = app.content.write().await;
    state.draft_mut().remove_at_path(&body.path, body.index)?;
    Ok(draft_body(&state))
}

pub async fn list_move<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    Json(body): Json<ListMove>,
) -> Result<Json<Value>, ApiError> {
    let mut state = app.content.write().await;
    state
        .draft_mut()
        .move_at_path(&body.path, body.from, body.to)?;
    Ok(draft_body(&state))
}

pub async fn commit<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
) -> Result<Json<Value>, ApiError> {
    write_through(app, |state| state.commit()).await
}

pub async fn export<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
) -> Result<impl IntoResponse, ApiError> {
    let state = app.content.read().await;
    let bytes = state.export()?;
    let disposition = format!("attachment; filename=\"{}\"", app.export_file);
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

pub async fn import<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    write_through(app, move |state| state.import(&body)).await
}

pub async fn reset<S: KeyValueStore + 'static>(
    State(app): Shared<S>,
) -> Result<Json<Value>, ApiError> {
    write_through(app, |state| state.reset()).await
}
