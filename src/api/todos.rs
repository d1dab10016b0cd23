//! Task Endpoints
//!
//! The four operations against the task collection, all scoped to one owner.

use crate::config;
use crate::models::{NewTodo, Todo};

use super::{parse_json, send};

/// Fetches the owner's full task list, in remote store order.
pub async fn get_todos(user_id: u32) -> Result<Vec<Todo>, String> {
    let url = format!("{}/todos?userId={}", config::api_base(), user_id);
    let response = send("GET", &url, None).await?;
    parse_json(response).await
}

/// Creates a task; the remote store assigns the id.
pub async fn add_todo(draft: &NewTodo) -> Result<Todo, String> {
    let body = serde_json::to_string(draft).map_err(|err| err.to_string())?;
    let url = format!("{}/todos", config::api_base());
    let response = send("POST", &url, Some(body)).await?;
    parse_json(response).await
}

/// Updates a task's completion flag; the body carries the full task.
pub async fn update_todo_status(candidate: &Todo) -> Result<Todo, String> {
    let body = serde_json::to_string(candidate).map_err(|err| err.to_string())?;
    let url = format!("{}/todos/{}", config::api_base(), candidate.id);
    let response = send("PATCH", &url, Some(body)).await?;
    parse_json(response).await
}

/// Deletes a task. The response body is an empty ack and is dropped.
pub async fn delete_todo(id: u32) -> Result<(), String> {
    let url = format!("{}/todos/{}", config::api_base(), id);
    send("DELETE", &url, None).await?;
    Ok(())
}
