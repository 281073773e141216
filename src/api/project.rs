//! Project Operations

use serde::Deserialize;
use serde_json::json;

use super::client::execute;
use super::error::ApiError;
use crate::models::{Project, ProjectTeaser};
use crate::session::Session;

const PROJECTS_QUERY: &str = r#"
query GetProjects {
  projects {
    id
    name
    key
    description
    owner { id name }
    members { id name }
  }
}
"#;

const PROJECT_QUERY: &str = r#"
query GetProject($id: ID!) {
  project(id: $id) {
    id
    name
    key
    description
    owner { id name email }
    members { id name email avatar }
  }
}
"#;

const CREATE_PROJECT_MUTATION: &str = r#"
mutation CreateProject($name: String!, $key: String!, $description: String) {
  createProject(name: $name, key: $key, description: $description) {
    id
    name
    key
    description
  }
}
"#;

const UPDATE_PROJECT_MUTATION: &str = r#"
mutation UpdateProject($id: ID!, $name: String, $description: String) {
  updateProject(id: $id, name: $name, description: $description) {
    id
    name
    description
  }
}
"#;

const DELETE_PROJECT_MUTATION: &str = r#"
mutation DeleteProject($id: ID!) {
  deleteProject(id: $id)
}
"#;

const ADD_MEMBER_MUTATION: &str = r#"
mutation AddProjectMember($projectId: ID!, $userId: ID!) {
  addProjectMember(projectId: $projectId, userId: $userId) {
    id
    members { id name email avatar }
  }
}
"#;

const REMOVE_MEMBER_MUTATION: &str = r#"
mutation RemoveProjectMember($projectId: ID!, $userId: ID!) {
  removeProjectMember(projectId: $projectId, userId: $userId) {
    id
    members { id name email avatar }
  }
}
"#;

#[derive(Deserialize)]
struct ProjectsData {
    projects: Vec<ProjectTeaser>,
}

#[derive(Deserialize)]
struct ProjectData {
    project: Project,
}

pub async fn fetch_projects(session: &Session) -> Result<Vec<ProjectTeaser>, ApiError> {
    let data: ProjectsData = execute(Some(&session.token), PROJECTS_QUERY, json!({})).await?;
    Ok(data.projects)
}

pub async fn fetch_project(session: &Session, id: &str) -> Result<Project, ApiError> {
    let data: ProjectData = execute(Some(&session.token), PROJECT_QUERY, json!({ "id": id })).await?;
    Ok(data.project)
}

pub async fn create_project(
    session: &Session,
    name: &str,
    key: &str,
    description: Option<&str>,
) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        CREATE_PROJECT_MUTATION,
        json!({ "name": name, "key": key, "description": description }),
    )
    .await?;
    Ok(())
}

pub async fn update_project(
    session: &Session,
    id: &str,
    name: &str,
    description: &str,
) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        UPDATE_PROJECT_MUTATION,
        json!({ "id": id, "name": name, "description": description }),
    )
    .await?;
    Ok(())
}

pub async fn delete_project(session: &Session, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        DELETE_PROJECT_MUTATION,
        json!({ "id": id }),
    )
    .await?;
    Ok(())
}

pub async fn add_project_member(
    session: &Session,
    project_id: &str,
    user_id: &str,
) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        ADD_MEMBER_MUTATION,
        json!({ "projectId": project_id, "userId": user_id }),
    )
    .await?;
    Ok(())
}

pub async fn remove_project_member(
    session: &Session,
    project_id: &str,
    user_id: &str,
) -> Result<(), ApiError> {
    let _: serde_json::Value = execute(
        Some(&session.token),
        REMOVE_MEMBER_MUTATION,
        json!({ "projectId": project_id, "userId": user_id }),
    )
    .await?;
    Ok(())
}
