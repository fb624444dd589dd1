//! Todo endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Todo, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::TodoTitle;

/// Create todo request
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    /// Initial completion state, defaults to false
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Update todo request (full replace, both fields mandatory)
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub completed: bool,
}

/// List response with item count
#[derive(Serialize)]
pub struct TodoListResponse {
    pub items: Vec<Todo>,
    pub total: usize,
}

/// POST /todos - create a new todo
async fn create_todo(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = TodoTitle::new(&req.title)?;
    let todo = TodoRepo::new(&state.pool)
        .create(title, req.completed.unwrap_or(false))
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos - list all todos, newest first
async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, ApiError> {
    let items = TodoRepo::new(&state.pool).list().await?;
    let total = items.len();

    Ok(Json(TodoListResponse { items, total }))
}

/// GET /todos/{id} - get a single todo
async fn get_todo(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(todo))
}

/// PUT /todos/{id} - full replace of title and completed
async fn update_todo(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let title = TodoTitle::new(&req.title)?;
    let todo = TodoRepo::new(&state.pool)
        .update(id, title, req.completed)
        .await?;

    Ok(Json(todo))
}

/// DELETE /todos/{id} - hard delete
async fn delete_todo(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /todos/{id}/toggle - flip the completed flag
async fn toggle_todo(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).toggle(id).await?;
    Ok(Json(todo))
}

/// Todo routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/toggle", patch(toggle_todo))
}
