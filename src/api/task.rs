//! Task Operations

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::execute;
use super::error::ApiError;
use crate::board::MoveRequest;
use crate::models::{TaskCard, TaskDetail, TaskPriority, TaskStatus};
use crate::session::Session;

const TASKS_QUERY: &str = r#"
query GetTasks($projectId: ID!) {
  tasks(projectId: $projectId) {
    id
    title
    description
    status
    priority
    taskKey
    position
    assignee { id name avatar }
    reporter { id name }
  }
}
"#;

const TASK_QUERY: &str = r#"
query GetTask($id: ID!) {
  task(id: $id) {
    id
    title
    description
    status
    priority
    taskKey
    createdAt
    updatedAt
    project { id name key }
    assignee { id name avatar email }
    reporter { id name avatar email }
  }
}
"#;

const CREATE_TASK_MUTATION: &str = r#"
mutation CreateTask($title: String!, $projectId: ID!, $priority: TaskPriority, $description: String, $assigneeId: ID) {
  createTask(title: $title, projectId: $projectId, priority: $priority, description: $description, assigneeId: $assigneeId) {
    id
    title
    status
    priority
    taskKey
  }
}
"#;

const UPDATE_TASK_MUTATION: &str = r#"
mutation UpdateTask($id: ID!, $title: String, $description: String, $status: TaskStatus, $priority: TaskPriority, $assigneeId: ID) {
  updateTask(id: $id, title: $title, description: $description, status: $status, priority: $priority, assigneeId: $assigneeId) {
    id
    title
    description
    status
    priority
  }
}
"#;

const DELETE_TASK_MUTATION: &str = r#"
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id)
}
"#;

const MOVE_TASK_MUTATION: &str = r#"
mutation MoveTask($id: ID!, $status: TaskStatus!, $position: Int!) {
  moveTask(id: $id, status: $status, position: $position) {
    id
    status
    position
  }
}
"#;

/// Fields echoed back by the move mutation
///
/// Not treated as authoritative; the follow-up refetch is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovedTask {
    pub id: String,
    pub status: TaskStatus,
    pub position: i32,
}

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    #[serde(rename = "projectId")]
    pub project_id: &'a str,
    pub priority: TaskPriority,
    pub description: Option<&'a str>,
    #[serde(rename = "assigneeId")]
    pub assignee_id: Option<&'a str>,
}

#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(rename = "assigneeId")]
    pub assignee_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct TasksData {
    tasks: Vec<TaskCard>,
}

#[derive(Deserialize)]
struct TaskData {
    task: TaskDetail,
}

#[derive(Deserialize)]
struct MoveTaskData {
    #[serde(rename = "moveTask")]
    move_task: MovedTask,
}

/// Pull the full board for one project
pub async fn fetch_tasks(session: &Session, project_id: &str) -> Result<Vec<TaskCard>, ApiError> {
    let data: TasksData = execute(
        Some(&session.token),
        TASKS_QUERY,
        json!({ "projectId": project_id }),
    )
    .await?;
    Ok(data.tasks)
}

pub async fn fetch_task(session: &Session, id: &str) -> Result<TaskDetail, ApiError> {
    let data: TaskData = execute(Some(&session.token), TASK_QUERY, json!({ "id": id })).await?;
    Ok(data.task)
}

pub async fn create_task(session: &Session, args: &CreateTaskArgs<'_>) -> Result<(), ApiError> {
    let variables = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    let _: serde_json::Value = execute(Some(&session.token), CREATE_TASK_MUTATION, variables).await?;
    Ok(())
}

pub async fn update_task(session: &Session, args: &UpdateTaskArgs<'_>) -> Result<(), ApiError> {
    let variables = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    let _: serde_json::Value = execute(Some(&session.token), UPDATE_TASK_MUTATION, variables).await?;
    Ok(())
}

pub async fn delete_task(session: &Session, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        DELETE_TASK_MUTATION,
        json!({ "id": id }),
    )
    .await?;
    Ok(())
}

/// Issue the status/position change for one planned move
pub async fn move_task(session: &Session, request: &MoveRequest) -> Result<MovedTask, ApiError> {
    let data: MoveTaskData = execute(
        Some(&session.token),
        MOVE_TASK_MUTATION,
        json!({
            "id": request.task_id,
            "status": request.status,
            "position": request.position,
        }),
    )
    .await?;
    Ok(data.move_task)
}
