//! REST Client
//!
//! Frontend bindings to the task API, one async function per server
//! operation. The server addresses tasks by id under a fixed base path.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{NewTask, Task, TaskPatch};

pub const API_BASE_URL: &str = "/api/tasks/";

/// A request that did not produce a usable response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-OK HTTP response, carrying the server's error message when it
    /// sent one.
    #[error("{}", rejection_text(*.status, .message.as_deref()))]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed (network failure, malformed response).
    #[error("server connection error")]
    Transport(#[from] gloo_net::Error),
}

fn rejection_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("the server rejected the request (HTTP {status})"),
    }
}

/// Pull the `error` field out of a rejection body like `{"error": "..."}`.
pub fn server_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => server_error_message(&body),
        Err(_) => None,
    };
    ApiError::Rejected { status, message }
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let response = Request::get(API_BASE_URL).send().await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(response.json().await?)
}

pub async fn create_task(task: &NewTask<'_>) -> Result<Task, ApiError> {
    let response = Request::post(API_BASE_URL).json(task)?.send().await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(response.json().await?)
}

pub async fn update_task(id: u32, patch: &TaskPatch<'_>) -> Result<Task, ApiError> {
    let url = format!("{API_BASE_URL}{id}/");
    let response = Request::put(&url).json(patch)?.send().await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(response.json().await?)
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{id}/");
    let response = Request::delete(&url).send().await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_extracted_from_body() {
        assert_eq!(
            server_error_message(r#"{"error":"title already exists"}"#),
            Some("title already exists".to_string())
        );
    }

    #[test]
    fn blank_or_missing_error_falls_back() {
        assert_eq!(server_error_message(r#"{"error":""}"#), None);
        assert_eq!(server_error_message(r#"{"detail":"nope"}"#), None);
        assert_eq!(server_error_message("<html>504</html>"), None);
    }

    #[test]
    fn rejection_display_prefers_server_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("title is required".to_string()),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "the server rejected the request (HTTP 500)");
    }
}
