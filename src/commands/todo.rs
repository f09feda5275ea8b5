//! Todo Commands
//!
//! List, create and delete against the backend todo API.

use crate::config::AppConfig;
use crate::http::{self, FetchError};
use crate::models::{NewTodo, Todo, TodoId};

// ========================
// Requests
// ========================

async fn fetch_todos(config: &AppConfig) -> Result<Vec<Todo>, FetchError> {
    let response = http::send("GET", &config.todos_base, &[], None).await?;
    http::json(response).await
}

async fn post_todo(config: &AppConfig, todo: &NewTodo) -> Result<(), FetchError> {
    let body = serde_json::to_string(todo).map_err(|e| FetchError::Transport(e.to_string()))?;
    let _ = http::send(
        "POST",
        &config.todos_base,
        &[("Content-Type", "application/json")],
        Some(&body),
    )
    .await?;
    Ok(())
}

async fn send_delete(config: &AppConfig, id: &TodoId) -> Result<(), FetchError> {
    let _ = http::send("DELETE", &config.todo_url(&id.0), &[], None).await?;
    Ok(())
}

// ========================
// Commands
// ========================

/// Full current list, or `None` if it could not be fetched
pub async fn list_todos(config: &AppConfig) -> Option<Vec<Todo>> {
    match fetch_todos(config).await {
        Ok(todos) => Some(todos),
        Err(e) => {
            web_sys::console::error_1(&format!("[TODOS] Failed to fetch todos: {}", e).into());
            None
        }
    }
}

/// Create a todo; the server-assigned id is only visible after a re-list
pub async fn create_todo(config: &AppConfig, todo: &NewTodo) {
    if let Err(e) = post_todo(config, todo).await {
        web_sys::console::error_1(&format!("[TODOS] Failed to add todo: {}", e).into());
    }
}

pub async fn delete_todo(config: &AppConfig, id: &TodoId) {
    if let Err(e) = send_delete(config, id).await {
        web_sys::console::error_1(&format!("[TODOS] Failed to delete todo {}: {}", id, e).into());
    }
}
