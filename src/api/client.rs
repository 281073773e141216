//! GraphQL HTTP Transport
//!
//! One POST per operation: `{query, variables}` in, the standard
//! `{data, errors}` envelope out. A non-empty `errors` array is a
//! rejection carrying the server's message.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use crate::config;

#[derive(Debug, Deserialize)]
pub(super) struct GqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GqlError>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GqlError {
    pub message: String,
}

pub(super) fn request_body(query: &str, variables: Value) -> Value {
    json!({
        "query": query,
        "variables": variables,
    })
}

pub(super) fn unwrap_response<T>(body: GqlResponse<T>) -> Result<T, ApiError> {
    if let Some(errors) = body.errors {
        let message = errors
            .into_iter()
            .next()
            .map(|e| e.message)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(ApiError::Rejected(message));
    }
    body.data
        .ok_or_else(|| ApiError::Transport("empty response".to_string()))
}

/// Execute one query or mutation
pub(super) async fn execute<T: DeserializeOwned>(
    token: Option<&str>,
    query: &str,
    variables: Value,
) -> Result<T, ApiError> {
    let mut request = reqwest::Client::new()
        .post(config::graphql_http_url())
        .json(&request_body(query, variables));
    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body: GqlResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    unwrap_response(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TasksData {
        tasks: Vec<String>,
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("query GetTasks { tasks { id } }", json!({ "projectId": "p1" }));
        assert_eq!(body["variables"]["projectId"], "p1");
        assert!(body["query"].as_str().unwrap().contains("GetTasks"));
    }

    #[test]
    fn test_unwrap_data() {
        let body: GqlResponse<TasksData> =
            serde_json::from_value(json!({ "data": { "tasks": ["a", "b"] } })).unwrap();
        let data = unwrap_response(body).unwrap();
        assert_eq!(data, TasksData { tasks: vec!["a".into(), "b".into()] });
    }

    #[test]
    fn test_unwrap_rejection_takes_first_message() {
        let body: GqlResponse<TasksData> = serde_json::from_value(json!({
            "data": null,
            "errors": [
                { "message": "Task not found" },
                { "message": "secondary" }
            ]
        }))
        .unwrap();
        assert_eq!(
            unwrap_response(body),
            Err(ApiError::Rejected("Task not found".to_string()))
        );
    }

    #[test]
    fn test_unwrap_empty_is_transport_error() {
        let body: GqlResponse<TasksData> = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(unwrap_response(body), Err(ApiError::Transport(_))));
    }
}
