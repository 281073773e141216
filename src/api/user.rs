//! User Operations

use serde::Deserialize;
use serde_json::json;

use super::client::execute;
use super::error::ApiError;
use crate::models::User;
use crate::session::Session;

const USERS_QUERY: &str = r#"
query GetUsers {
  users {
    id
    name
    email
    avatar
  }
}
"#;

#[derive(Deserialize)]
struct UsersData {
    users: Vec<User>,
}

/// All users, for assignee and member pickers
pub async fn fetch_users(session: &Session) -> Result<Vec<User>, ApiError> {
    let data: UsersData = execute(Some(&session.token), USERS_QUERY, json!({})).await?;
    Ok(data.users)
}
