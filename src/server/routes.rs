use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, post},
    Json, Router
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::core::{RosterError, UserDraft, UserId, UserRecord};
use crate::server::error::{ServerError, ServerResult};
use crate::server::html::render_listing;
use crate::server::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user).put(update_user))
        .route("/ujuser", post(create_user))
        .route("/delete/:id", delete(delete_user))
        .route("/reset", post(reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let store = state.store.lock().await;
    let roster = store.read_all()?;
    return Ok(Html(render_listing(&roster)));
}

async fn list_users(State(state): State<AppState>) -> ServerResult<Json<Vec<UserRecord>>> {
    let store = state.store.lock().await;
    let roster = store.read_all()?;
    return Ok(Json(roster.users().to_vec()));
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>
) -> ServerResult<Json<UserRecord>> {
    let store = state.store.lock().await;
    let roster = store.read_all()?;

    let user = roster.find(id)
        .cloned()
        .ok_or_else(|| ServerError::NotFound(format!("no user with id {}", id)))?;
    return Ok(Json(user));
}

async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>
) -> ServerResult<(StatusCode, Json<UserRecord>)> {
    let id = draft.id
        .ok_or_else(|| ServerError::BadRequest("user id is required".to_owned()))?;
    let record = draft.into_record(id);

    // Lock held across the whole read-modify-write cycle.
    let store = state.store.lock().await;
    let mut roster = store.read_all()?;
    roster.add(record.clone())
        .map_err(|err| ServerError::BadRequest(err.to_string()))?;
    store.write_all(&roster)?;

    tracing::info!(id, "created user record");
    return Ok((StatusCode::CREATED, Json(record)));
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(draft): Json<UserDraft>
) -> ServerResult<Json<UserRecord>> {
    // The path parameter wins over whatever id the body carries.
    let record = draft.into_record(id);

    let store = state.store.lock().await;
    let mut roster = store.read_all()?;
    let updated = roster.replace(id, record)
        .map(UserRecord::clone)
        .map_err(|err| match err {
            RosterError::UnknownId(_) => ServerError::NotFound(err.to_string()),
            RosterError::DuplicateId(_) => ServerError::BadRequest(err.to_string())
        })?;
    store.write_all(&roster)?;

    tracing::info!(id, "updated user record");
    return Ok(Json(updated));
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>
) -> ServerResult<Json<Value>> {
    let store = state.store.lock().await;
    let mut roster = store.read_all()?;
    roster.remove(id)
        .map_err(|err| ServerError::NotFound(err.to_string()))?;
    store.write_all(&roster)?;

    tracing::info!(id, "deleted user record");
    return Ok(Json(json!({"message": format!("user {} deleted", id)})));
}

async fn reset(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let roster = state.seed.fetch().await?;

    let store = state.store.lock().await;
    store.write_all(&roster)?;

    tracing::info!(count = roster.len(), "reset store from seed collection");
    return Ok(Json(json!({"message": "store reset from seed collection"})));
}
