//! Frontend Models
//!
//! Data structures matching the GraphQL schema. Field names are camelCase
//! on the wire, enum values SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

/// Task status, one per board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column order on the board
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire value, also used as column id by the drag layer
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "TODO" => Some(TaskStatus::Todo),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "DONE" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }

    pub fn parse(value: &str) -> Option<TaskPriority> {
        match value {
            "LOW" => Some(TaskPriority::Low),
            "MEDIUM" => Some(TaskPriority::Medium),
            "HIGH" => Some(TaskPriority::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    /// CSS modifier for priority badges
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskPriority::Low => "priority-low",
            TaskPriority::Medium => "priority-medium",
            TaskPriority::High => "priority-high",
        }
    }
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Minimal user reference embedded in other objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Project as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTeaser {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: UserRef,
    pub members: Vec<UserRef>,
}

/// Full project with member details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: User,
    pub members: Vec<User>,
}

/// Task as rendered on a board card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub task_key: String,
    pub position: i32,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    pub reporter: UserRef,
}

/// Project reference embedded in a task detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
    pub key: String,
}

/// Full task detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub task_key: String,
    pub created_at: String,
    pub updated_at: String,
    pub project: ProjectRef,
    #[serde(default)]
    pub assignee: Option<User>,
    pub reporter: User,
}

/// Comment on a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub content: String,
    pub is_edited: bool,
    #[serde(default)]
    pub edited_at: Option<String>,
    pub created_at: String,
    pub author: UserRef,
}

/// Login/register result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        let card: TaskCard = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "title": "Fix login",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "taskKey": "DEMO-1",
            "position": 0,
            "reporter": { "id": "u1", "name": "Ada" }
        }))
        .unwrap();
        assert_eq!(card.status, TaskStatus::InProgress);
        assert_eq!(card.priority, TaskPriority::High);
        assert_eq!(card.task_key, "DEMO-1");
        assert!(card.assignee.is_none());
    }

    #[test]
    fn test_status_parse_matches_as_str() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("BLOCKED"), None);
    }
}
