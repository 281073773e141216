//! Task Detail Page Component
//!
//! Full task view with edit form, details sidebar and the comment thread.
//! New comments pushed by other clients arrive over the comment
//! subscription and trigger a refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UpdateTaskArgs};
use crate::components::{use_toasts, DeleteConfirmButton, Navbar};
use crate::context::{AppContext, Route};
use crate::markdown::parse_markdown;
use crate::models::{CommentDetail, TaskDetail, TaskPriority, TaskStatus, User};
use crate::session::use_session;

/// Date part of an ISO timestamp
fn format_date(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or(timestamp).to_string()
}

#[component]
pub fn TaskPage(task_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let (task, set_task) = signal(None::<TaskDetail>);
    let (comments, set_comments) = signal(Vec::<CommentDetail>::new());
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (task_reload, set_task_reload) = signal(0u32);
    let (comments_reload, set_comments_reload) = signal(0u32);

    // Edit form state, seeded from the loaded task
    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Todo);
    let (priority, set_priority) = signal(TaskPriority::Medium);
    let (assignee_id, set_assignee_id) = signal(String::new());

    let (new_comment, set_new_comment) = signal(String::new());
    let (editing_comment, set_editing_comment) = signal(None::<String>);
    let (edit_content, set_edit_content) = signal(String::new());

    // Load the task
    let tid = task_id.clone();
    Effect::new(move |_| {
        let _ = task_reload.get();
        let Some(session) = session.get() else { return };
        let tid = tid.clone();
        spawn_local(async move {
            match api::fetch_task(&session, &tid).await {
                Ok(loaded) => set_task.set(Some(loaded)),
                Err(e) => toasts.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    // Seed the edit form whenever the task arrives
    Effect::new(move |_| {
        if let Some(task) = task.get() {
            set_title.set(task.title);
            set_description.set(task.description.unwrap_or_default());
            set_status.set(task.status);
            set_priority.set(task.priority);
            set_assignee_id.set(task.assignee.map(|a| a.id).unwrap_or_default());
        }
    });

    // Load comments
    let tid = task_id.clone();
    Effect::new(move |_| {
        let _ = comments_reload.get();
        let Some(session) = session.get() else { return };
        let tid = tid.clone();
        spawn_local(async move {
            match api::fetch_comments(&session, &tid).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(e) => toasts.error(e.to_string()),
            }
        });
    });

    // Assignee picker options
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        spawn_local(async move {
            if let Ok(loaded) = api::fetch_users(&session).await {
                set_users.set(loaded);
            }
        });
    });

    // Comment push channel
    let subscription = StoredValue::new_local(None::<api::Subscription>);
    let tid = task_id.clone();
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        if subscription.with_value(|s| s.is_some()) {
            return;
        }
        let sub = api::subscribe_comment_added(&session, &tid, move || {
            set_comments_reload.update(|v| *v += 1);
        });
        subscription.set_value(Some(sub));
    });
    on_cleanup(move || {
        subscription.with_value(|s| {
            if let Some(sub) = s {
                sub.close();
            }
        });
    });

    // Save the edit form
    let tid = task_id.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = session.get_untracked() else { return };
        let tid = tid.clone();
        let title = title.get();
        let description = description.get();
        let status = status.get();
        let priority = priority.get();
        let assignee = assignee_id.get();
        spawn_local(async move {
            let args = UpdateTaskArgs {
                id: &tid,
                title: &title,
                description: (!description.is_empty()).then_some(description.as_str()),
                status,
                priority,
                assignee_id: (!assignee.is_empty()).then_some(assignee.as_str()),
            };
            match api::update_task(&session, &args).await {
                Ok(()) => {
                    toasts.success("Task updated");
                    set_editing.set(false);
                    set_task_reload.update(|v| *v += 1);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    // Delete the task, then return to its board
    let tid = task_id.clone();
    let on_delete = Callback::new(move |_| {
        let Some(session) = session.get_untracked() else { return };
        let Some(project_id) = task.get_untracked().map(|t| t.project.id) else { return };
        let tid = tid.clone();
        spawn_local(async move {
            match api::delete_task(&session, &tid).await {
                Ok(()) => {
                    toasts.success("Task deleted");
                    ctx.navigate(Route::Board { project_id });
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    });

    // Add a comment
    let tid = task_id.clone();
    let on_add_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_comment.get();
        if content.trim().is_empty() {
            return;
        }
        let Some(session) = session.get_untracked() else { return };
        let tid = tid.clone();
        spawn_local(async move {
            match api::create_comment(&session, &tid, &content).await {
                Ok(()) => {
                    set_new_comment.set(String::new());
                    set_comments_reload.update(|v| *v += 1);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let save_comment_edit = move |comment_id: String| {
        let content = edit_content.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        let Some(session) = session.get_untracked() else { return };
        spawn_local(async move {
            match api::update_comment(&session, &comment_id, &content).await {
                Ok(()) => {
                    set_editing_comment.set(None);
                    set_edit_content.set(String::new());
                    set_comments_reload.update(|v| *v += 1);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let delete_comment = move |comment_id: String| {
        let Some(session) = session.get_untracked() else { return };
        spawn_local(async move {
            match api::delete_comment(&session, &comment_id).await {
                Ok(()) => set_comments_reload.update(|v| *v += 1),
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let current_user_id = move || session.get().map(|s| s.user.id);

    view! {
        <div class="page">
            <Navbar />

            <div class="page-body">
                {move || match task.get() {
                    None if loading.get() => view! { <div class="loading">"Loading task..."</div> }.into_any(),
                    None => view! { <div class="load-error">"Task not found"</div> }.into_any(),
                    Some(task) => {
                        let board_project_id = task.project.id.clone();
                        let on_save = on_save.clone();
                        let on_add_comment = on_add_comment.clone();
                        let view_title = task.title.clone();
                        let view_description = task.description.clone();
                        view! {
                            <div class="breadcrumbs">
                                <button class="breadcrumb-link" on:click=move |_| ctx.navigate(Route::Dashboard)>
                                    "Projects"
                                </button>
                                <span>"/"</span>
                                <button
                                    class="breadcrumb-link"
                                    on:click=move |_| ctx.navigate(Route::Board { project_id: board_project_id.clone() })
                                >
                                    {task.project.name.clone()}
                                </button>
                                <span>"/"</span>
                                <span>{task.task_key.clone()}</span>
                            </div>

                            <div class="task-layout">
                                <div class="task-main">
                                    <div class="card">
                                        <div class="card-header">
                                            <h1>{task.task_key.clone()}</h1>
                                            <div class="card-header-actions">
                                                {move || (!editing.get()).then(|| view! {
                                                    <button class="btn-link" on:click=move |_| set_editing.set(true)>
                                                        "Edit"
                                                    </button>
                                                })}
                                                <DeleteConfirmButton
                                                    button_class="btn-link danger"
                                                    label="Delete"
                                                    on_confirm=on_delete
                                                />
                                            </div>
                                        </div>

                                        {move || if editing.get() {
                                            view! {
                                                <form class="task-edit-form" on:submit=on_save.clone()>
                                                    <div class="form-field">
                                                        <label>"Title"</label>
                                                        <input
                                                            type="text"
                                                            required
                                                            prop:value=move || title.get()
                                                            on:input=move |ev| set_title.set(event_target_value(&ev))
                                                        />
                                                    </div>
                                                    <div class="form-field">
                                                        <label>"Description"</label>
                                                        <textarea
                                                            rows="4"
                                                            prop:value=move || description.get()
                                                            on:input=move |ev| set_description.set(event_target_value(&ev))
                                                        />
                                                    </div>
                                                    <div class="form-row">
                                                        <div class="form-field">
                                                            <label>"Status"</label>
                                                            <select
                                                                prop:value=move || status.get().as_str()
                                                                on:change=move |ev| {
                                                                    if let Some(parsed) = TaskStatus::parse(&event_target_value(&ev)) {
                                                                        set_status.set(parsed);
                                                                    }
                                                                }
                                                            >
                                                                {TaskStatus::ALL
                                                                    .into_iter()
                                                                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                                                    .collect_view()}
                                                            </select>
                                                        </div>
                                                        <div class="form-field">
                                                            <label>"Priority"</label>
                                                            <select
                                                                prop:value=move || priority.get().as_str()
                                                                on:change=move |ev| {
                                                                    if let Some(parsed) = TaskPriority::parse(&event_target_value(&ev)) {
                                                                        set_priority.set(parsed);
                                                                    }
                                                                }
                                                            >
                                                                {TaskPriority::ALL
                                                                    .into_iter()
                                                                    .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                                                    .collect_view()}
                                                            </select>
                                                        </div>
                                                        <div class="form-field">
                                                            <label>"Assignee"</label>
                                                            <select
                                                                prop:value=move || assignee_id.get()
                                                                on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                                                            >
                                                                <option value="">"Unassigned"</option>
                                                                <For
                                                                    each=move || users.get()
                                                                    key=|user| user.id.clone()
                                                                    children=move |user| view! {
                                                                        <option value=user.id.clone()>{user.name.clone()}</option>
                                                                    }
                                                                />
                                                            </select>
                                                        </div>
                                                    </div>
                                                    <div class="modal-actions">
                                                        <button type="button" class="btn-secondary" on:click=move |_| set_editing.set(false)>
                                                            "Cancel"
                                                        </button>
                                                        <button type="submit" class="btn-primary">"Save Changes"</button>
                                                    </div>
                                                </form>
                                            }.into_any()
                                        } else {
                                            let body = view_description.clone().filter(|d| !d.is_empty());
                                            view! {
                                                <div class="task-view">
                                                    <h2>{view_title.clone()}</h2>
                                                    {match body {
                                                        Some(text) => view! {
                                                            <div class="markdown" inner_html=parse_markdown(&text)></div>
                                                        }.into_any(),
                                                        None => view! {
                                                            <p class="muted">"No description provided"</p>
                                                        }.into_any(),
                                                    }}
                                                </div>
                                            }.into_any()
                                        }}
                                    </div>

                                    <div class="card">
                                        <h3>{move || format!("Comments ({})", comments.get().len())}</h3>

                                        <form class="comment-form" on:submit=on_add_comment.clone()>
                                            <textarea
                                                rows="3"
                                                placeholder="Add a comment..."
                                                prop:value=move || new_comment.get()
                                                on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                                            />
                                            <button
                                                type="submit"
                                                class="btn-primary"
                                                disabled=move || new_comment.get().trim().is_empty()
                                            >
                                                "Add Comment"
                                            </button>
                                        </form>

                                        <div class="comment-list">
                                            {move || comments.get().is_empty().then(|| view! {
                                                <div class="muted">"No comments yet"</div>
                                            })}
                                            <For
                                                each=move || comments.get()
                                                key=|c| (c.id.clone(), c.content.clone(), c.is_edited)
                                                children=move |comment| {
                                                    let comment_id = comment.id.clone();
                                                    let author_id = comment.author.id.clone();
                                                    let is_mine = move || current_user_id() == Some(author_id.clone());
                                                    let is_editing_this = {
                                                        let comment_id = comment_id.clone();
                                                        move || editing_comment.get().as_deref() == Some(comment_id.as_str())
                                                    };

                                                    let edit_id = comment_id.clone();
                                                    let edit_seed = comment.content.clone();
                                                    let save_id = comment_id.clone();
                                                    let delete_id = comment_id.clone();

                                                    view! {
                                                        <div class="comment">
                                                            <div class="comment-header">
                                                                <div class="comment-author">
                                                                    <span class="avatar-initial">
                                                                        {comment.author.name.chars().next().unwrap_or('?')}
                                                                    </span>
                                                                    <div>
                                                                        <p class="comment-author-name">{comment.author.name.clone()}</p>
                                                                        <p class="comment-meta">
                                                                            {format_date(&comment.created_at)}
                                                                            {comment.is_edited.then_some(" (edited)")}
                                                                        </p>
                                                                    </div>
                                                                </div>
                                                                {move || is_mine().then(|| {
                                                                    let edit_id = edit_id.clone();
                                                                    let edit_seed = edit_seed.clone();
                                                                    let delete_id = delete_id.clone();
                                                                    view! {
                                                                        <div class="comment-actions">
                                                                            <button
                                                                                class="btn-link"
                                                                                on:click=move |_| {
                                                                                    set_editing_comment.set(Some(edit_id.clone()));
                                                                                    set_edit_content.set(edit_seed.clone());
                                                                                }
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                            <DeleteConfirmButton
                                                                                button_class="btn-link danger"
                                                                                label="Delete"
                                                                                on_confirm=Callback::new(move |_| delete_comment(delete_id.clone()))
                                                                            />
                                                                        </div>
                                                                    }
                                                                })}
                                                            </div>

                                                            {move || if is_editing_this() {
                                                                let save_id = save_id.clone();
                                                                view! {
                                                                    <div class="comment-edit">
                                                                        <textarea
                                                                            rows="2"
                                                                            prop:value=move || edit_content.get()
                                                                            on:input=move |ev| set_edit_content.set(event_target_value(&ev))
                                                                        />
                                                                        <div class="modal-actions">
                                                                            <button
                                                                                class="btn-secondary"
                                                                                on:click=move |_| set_editing_comment.set(None)
                                                                            >
                                                                                "Cancel"
                                                                            </button>
                                                                            <button
                                                                                class="btn-primary"
                                                                                on:click=move |_| save_comment_edit(save_id.clone())
                                                                            >
                                                                                "Save"
                                                                            </button>
                                                                        </div>
                                                                    </div>
                                                                }.into_any()
                                                            } else {
                                                                view! {
                                                                    <div class="markdown" inner_html=parse_markdown(&comment.content)></div>
                                                                }.into_any()
                                                            }}
                                                        </div>
                                                    }
                                                }
                                            />
                                        </div>
                                    </div>
                                </div>

                                <div class="task-sidebar">
                                    <div class="card">
                                        <h3>"Details"</h3>
                                        <div class="detail-row">
                                            <p class="detail-label">"Status"</p>
                                            <span class="status-badge">{task.status.label()}</span>
                                        </div>
                                        <div class="detail-row">
                                            <p class="detail-label">"Priority"</p>
                                            <span class=format!("priority-badge {}", task.priority.css_class())>
                                                {task.priority.label()}
                                            </span>
                                        </div>
                                        <div class="detail-row">
                                            <p class="detail-label">"Assignee"</p>
                                            {match task.assignee.clone() {
                                                Some(assignee) => view! {
                                                    <div class="detail-user">
                                                        <span class="avatar-initial">{assignee.name.chars().next().unwrap_or('?')}</span>
                                                        <span>{assignee.name.clone()}</span>
                                                    </div>
                                                }.into_any(),
                                                None => view! { <span class="muted">"Unassigned"</span> }.into_any(),
                                            }}
                                        </div>
                                        <div class="detail-row">
                                            <p class="detail-label">"Reporter"</p>
                                            <div class="detail-user">
                                                <span class="avatar-initial">{task.reporter.name.chars().next().unwrap_or('?')}</span>
                                                <span>{task.reporter.name.clone()}</span>
                                            </div>
                                        </div>
                                        <div class="detail-row">
                                            <p class="detail-label">"Created"</p>
                                            <span>{format_date(&task.created_at)}</span>
                                        </div>
                                        <div class="detail-row">
                                            <p class="detail-label">"Updated"</p>
                                            <span>{format_date(&task.updated_at)}</span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
