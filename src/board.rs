//! Board Logic
//!
//! Pure helpers behind the kanban board: column filtering, move planning
//! and the settle policy for a finished move. The board snapshot itself is
//! replaced wholesale on every fetch; everything here derives from it.

use crate::api::ApiError;
use crate::models::{TaskCard, TaskStatus};

/// Tasks belonging to one column, ordered by position
///
/// Recomputed from the current snapshot on every read; positions are an
/// ordering hint, not a dense index.
pub fn column_tasks(tasks: &[TaskCard], status: TaskStatus) -> Vec<TaskCard> {
    let mut column: Vec<TaskCard> = tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect();
    column.sort_by_key(|task| task.position);
    column
}

/// A planned status/position change for one task
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub task_id: String,
    pub status: TaskStatus,
    pub position: i32,
}

/// Plan a move out of a drag gesture
///
/// Returns `None` when the task is unknown or already lives in the target
/// column - no mutation is issued in either case. Moved tasks are appended
/// to the end of the target column: the new position is the count of tasks
/// currently there.
pub fn plan_move(tasks: &[TaskCard], task_id: &str, target: TaskStatus) -> Option<MoveRequest> {
    let task = tasks.iter().find(|task| task.id == task_id)?;
    if task.status == target {
        return None;
    }
    let position = tasks.iter().filter(|task| task.status == target).count() as i32;
    Some(MoveRequest {
        task_id: task.id.clone(),
        status: target,
        position,
    })
}

/// Apply a planned move to the local snapshot
///
/// Optimistic: shown to the user while the mutation is in flight. The next
/// refresh overwrites the whole snapshot with server truth.
pub fn apply_move(tasks: &mut [TaskCard], request: &MoveRequest) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == request.task_id) {
        task.status = request.status;
        task.position = request.position;
    }
}

/// What to do once a move mutation has settled
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// User-visible failure notice, if any
    pub notice: Option<String>,
    /// Whether to pull the board again from the server
    pub refresh: bool,
}

/// Settle policy: reconcile on both outcomes
///
/// Success and failure both trigger a full refresh - once a round trip has
/// happened the optimistic local state is never trusted. Only failures add
/// a notice. There is no automatic retry; a repeated gesture is the retry.
pub fn settle_move(error: Option<&ApiError>) -> Settlement {
    Settlement {
        notice: error.map(|e| e.to_string()),
        refresh: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, UserRef};

    fn make_task(id: &str, status: TaskStatus, position: i32) -> TaskCard {
        TaskCard {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            priority: TaskPriority::Medium,
            task_key: format!("DEMO-{}", id),
            position,
            assignee: None,
            reporter: UserRef {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                avatar: None,
            },
        }
    }

    #[test]
    fn test_columns_reproduce_snapshot_membership() {
        let tasks = vec![
            make_task("a", TaskStatus::Todo, 0),
            make_task("b", TaskStatus::Done, 0),
            make_task("c", TaskStatus::Todo, 1),
            make_task("d", TaskStatus::InProgress, 0),
        ];

        let todo = column_tasks(&tasks, TaskStatus::Todo);
        let in_progress = column_tasks(&tasks, TaskStatus::InProgress);
        let done = column_tasks(&tasks, TaskStatus::Done);

        assert_eq!(todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(in_progress.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["d"]);
        assert_eq!(done.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b"]);
        // every task lands in exactly one column
        assert_eq!(todo.len() + in_progress.len() + done.len(), tasks.len());
    }

    #[test]
    fn test_columns_order_by_position_with_gaps() {
        let tasks = vec![
            make_task("a", TaskStatus::Todo, 7),
            make_task("b", TaskStatus::Todo, 2),
            make_task("c", TaskStatus::Todo, 40),
        ];
        let todo = column_tasks(&tasks, TaskStatus::Todo);
        assert_eq!(todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn test_move_to_own_column_is_noop() {
        let tasks = vec![
            make_task("a", TaskStatus::Todo, 0),
            make_task("b", TaskStatus::Todo, 1),
        ];
        assert_eq!(plan_move(&tasks, "a", TaskStatus::Todo), None);
    }

    #[test]
    fn test_move_to_unknown_task_is_noop() {
        let tasks = vec![make_task("a", TaskStatus::Todo, 0)];
        assert_eq!(plan_move(&tasks, "ghost", TaskStatus::Done), None);
    }

    #[test]
    fn test_move_appends_to_target_column() {
        // TODO=[a,b], IN_PROGRESS=[], DONE=[]
        let tasks = vec![
            make_task("a", TaskStatus::Todo, 0),
            make_task("b", TaskStatus::Todo, 1),
        ];

        let request = plan_move(&tasks, "a", TaskStatus::InProgress).unwrap();
        assert_eq!(
            request,
            MoveRequest {
                task_id: "a".to_string(),
                status: TaskStatus::InProgress,
                position: 0,
            }
        );
    }

    #[test]
    fn test_move_position_is_target_count() {
        let tasks = vec![
            make_task("a", TaskStatus::Todo, 0),
            make_task("b", TaskStatus::Done, 0),
            make_task("c", TaskStatus::Done, 1),
            make_task("d", TaskStatus::Done, 2),
        ];
        let request = plan_move(&tasks, "a", TaskStatus::Done).unwrap();
        assert_eq!(request.position, 3);
    }

    #[test]
    fn test_optimistic_apply_then_refresh_converges() {
        let mut tasks = vec![
            make_task("a", TaskStatus::Todo, 0),
            make_task("b", TaskStatus::Todo, 1),
        ];

        let request = plan_move(&tasks, "a", TaskStatus::InProgress).unwrap();
        apply_move(&mut tasks, &request);

        assert_eq!(
            column_tasks(&tasks, TaskStatus::Todo).iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["b"]
        );
        assert_eq!(
            column_tasks(&tasks, TaskStatus::InProgress).iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["a"]
        );

        // server refresh replaces the snapshot wholesale; columns derive from it
        let refreshed = vec![
            make_task("b", TaskStatus::Todo, 0),
            make_task("a", TaskStatus::InProgress, 0),
        ];
        assert_eq!(
            column_tasks(&refreshed, TaskStatus::InProgress).iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["a"]
        );
    }

    #[test]
    fn test_settle_success_refreshes_without_notice() {
        let settlement = settle_move(None);
        assert_eq!(settlement, Settlement { notice: None, refresh: true });
    }

    #[test]
    fn test_settle_failure_refreshes_with_notice() {
        let rejected = ApiError::Rejected("Task not found".to_string());
        let settlement = settle_move(Some(&rejected));
        assert!(settlement.refresh);
        assert_eq!(settlement.notice.as_deref(), Some("Task not found"));

        let transport = ApiError::Transport("connection refused".to_string());
        let settlement = settle_move(Some(&transport));
        assert!(settlement.refresh);
        // transport errors differ only in message, not in control flow
        assert_eq!(settlement.notice.as_deref(), Some("request failed: connection refused"));
    }
}
