//! Comment Operations

use serde::Deserialize;
use serde_json::json;

use super::client::execute;
use super::error::ApiError;
use crate::models::CommentDetail;
use crate::session::Session;

const COMMENTS_QUERY: &str = r#"
query GetComments($taskId: ID!) {
  comments(taskId: $taskId) {
    id
    content
    isEdited
    editedAt
    createdAt
    author { id name avatar }
  }
}
"#;

const CREATE_COMMENT_MUTATION: &str = r#"
mutation CreateComment($content: String!, $taskId: ID!) {
  createComment(content: $content, taskId: $taskId) {
    id
    content
  }
}
"#;

const UPDATE_COMMENT_MUTATION: &str = r#"
mutation UpdateComment($id: ID!, $content: String!) {
  updateComment(id: $id, content: $content) {
    id
    content
    isEdited
  }
}
"#;

const DELETE_COMMENT_MUTATION: &str = r#"
mutation DeleteComment($id: ID!) {
  deleteComment(id: $id)
}
"#;

#[derive(Deserialize)]
struct CommentsData {
    comments: Vec<CommentDetail>,
}

pub async fn fetch_comments(session: &Session, task_id: &str) -> Result<Vec<CommentDetail>, ApiError> {
    let data: CommentsData = execute(
        Some(&session.token),
        COMMENTS_QUERY,
        json!({ "taskId": task_id }),
    )
    .await?;
    Ok(data.comments)
}

pub async fn create_comment(session: &Session, task_id: &str, content: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        CREATE_COMMENT_MUTATION,
        json!({ "taskId": task_id, "content": content }),
    )
    .await?;
    Ok(())
}

pub async fn update_comment(session: &Session, id: &str, content: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        UPDATE_COMMENT_MUTATION,
        json!({ "id": id, "content": content }),
    )
    .await?;
    Ok(())
}

pub async fn delete_comment(session: &Session, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        DELETE_COMMENT_MUTATION,
        json!({ "id": id }),
    )
    .await?;
    Ok(())
}
