//! Auth Operations
//!
//! Login, registration and session restore. All authorization logic lives
//! on the server; the client only stores and forwards the token.

use serde::Deserialize;
use serde_json::json;

use super::client::execute;
use super::error::ApiError;
use crate::models::{AuthPayload, User};

const LOGIN_MUTATION: &str = r#"
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    user { id email name avatar role }
  }
}
"#;

const REGISTER_MUTATION: &str = r#"
mutation Register($email: String!, $password: String!, $name: String!) {
  register(email: $email, password: $password, name: $name) {
    token
    user { id email name avatar role }
  }
}
"#;

const ME_QUERY: &str = r#"
query GetMe {
  me { id email name avatar role }
}
"#;

#[derive(Deserialize)]
struct LoginData {
    login: AuthPayload,
}

#[derive(Deserialize)]
struct RegisterData {
    register: AuthPayload,
}

#[derive(Deserialize)]
struct MeData {
    me: User,
}

pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    let data: LoginData = execute(
        None,
        LOGIN_MUTATION,
        json!({ "email": email, "password": password }),
    )
    .await?;
    Ok(data.login)
}

pub async fn register(email: &str, password: &str, name: &str) -> Result<AuthPayload, ApiError> {
    let data: RegisterData = execute(
        None,
        REGISTER_MUTATION,
        json!({ "email": email, "password": password, "name": name }),
    )
    .await?;
    Ok(data.register)
}

/// Resolve a stored token back into a user, or fail if it went stale
pub async fn me(token: &str) -> Result<User, ApiError> {
    let data: MeData = execute(Some(token), ME_QUERY, json!({})).await?;
    Ok(data.me)
}
