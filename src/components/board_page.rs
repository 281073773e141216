//! Board Page Component
//!
//! The kanban board for one project. Owns the task snapshot, turns drag
//! gestures into move mutations and reconciles every settled move and
//! every push notification with a full refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_board_dnd::{
    bind_global_mouseup, create_dnd_signals, make_on_column_mouseenter,
    make_on_column_mouseleave, DndSignals,
};

use crate::api;
use crate::board;
use crate::components::{use_toasts, BoardCard, CreateTaskModal, Navbar};
use crate::context::{AppContext, Route};
use crate::models::{Project, TaskStatus};
use crate::session::use_session;
use crate::store::{store_apply_move, store_set_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardPage(project_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();
    let store = use_app_store();

    let (project, set_project) = signal(None::<Project>);
    let (loading, set_loading) = signal(true);
    let (show_create_task, set_show_create_task) = signal(false);

    // Load the project header
    let pid = project_id.clone();
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            match api::fetch_project(&session, &pid).await {
                Ok(loaded) => set_project.set(Some(loaded)),
                Err(e) => toasts.error(e.to_string()),
            }
        });
    });

    // Pull the whole board whenever the refresh trigger bumps. The
    // snapshot is replaced wholesale; the last fetch to land wins.
    let pid = project_id.clone();
    Effect::new(move |_| {
        let trigger = ctx.board_refresh.get();
        let Some(session) = session.get() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[BOARD] Loading tasks, trigger={}", trigger).into());
            match api::fetch_tasks(&session, &pid).await {
                Ok(tasks) => store_set_tasks(&store, tasks),
                Err(e) => toasts.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    // Push channel: task-changed notifications collapse into the same
    // refresh trigger as settled moves.
    let subscription = StoredValue::new_local(None::<api::Subscription>);
    let pid = project_id.clone();
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        if subscription.with_value(|s| s.is_some()) {
            return;
        }
        let sub = api::subscribe_task_changed(&session, &pid, move || ctx.refresh_board());
        subscription.set_value(Some(sub));
    });
    on_cleanup(move || {
        subscription.with_value(|s| {
            if let Some(sub) = s {
                sub.close();
            }
        });
    });

    // Drag gestures: a drop on another column plans exactly one move,
    // applied optimistically, then reconciled on both outcomes.
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |task_id, target_column| {
        // released outside any column: cancelled gesture
        let Some(target) = target_column.and_then(|c| TaskStatus::parse(&c)) else { return };
        let Some(request) = store
            .tasks()
            .with_untracked(|tasks| board::plan_move(tasks, &task_id, target))
        else {
            return;
        };
        let Some(session) = session.get_untracked() else { return };

        store_apply_move(&store, &request);
        spawn_local(async move {
            let result = api::move_task(&session, &request).await;
            let settlement = board::settle_move(result.as_ref().err());
            if let Some(notice) = settlement.notice {
                toasts.error(notice);
            }
            if settlement.refresh {
                ctx.refresh_board();
            }
        });
    });

    let project_name = move || project.get().map(|p| p.name).unwrap_or_default();
    let project_key = move || project.get().map(|p| p.key).unwrap_or_default();

    let settings_id = project_id.clone();
    let modal_project_id = project_id.clone();

    view! {
        <div class="page">
            <Navbar />

            <div class="page-body">
                <div class="breadcrumbs">
                    <button class="breadcrumb-link" on:click=move |_| ctx.navigate(Route::Dashboard)>
                        "Projects"
                    </button>
                    <span>"/"</span>
                    <span>{project_name}</span>
                </div>

                <div class="page-header">
                    <div>
                        <h1>{project_name}</h1>
                        <p class="page-subtitle">{move || format!("{} · Kanban Board", project_key())}</p>
                    </div>
                    <div class="page-header-actions">
                        <button class="btn-primary" on:click=move |_| set_show_create_task.set(true)>
                            "+ Create Task"
                        </button>
                        <button
                            class="btn-secondary"
                            on:click=move |_| ctx.navigate(Route::Settings { project_id: settings_id.clone() })
                        >
                            "Settings"
                        </button>
                    </div>
                </div>

                {move || if loading.get() {
                    view! { <div class="loading">"Loading tasks..."</div> }.into_any()
                } else {
                    view! {
                        <div class="board-columns">
                            {TaskStatus::ALL
                                .into_iter()
                                .map(|status| view! { <BoardColumn status=status dnd=dnd /> })
                                .collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            {move || show_create_task.get().then(|| view! {
                <CreateTaskModal
                    project_id=modal_project_id.clone()
                    on_close=Callback::new(move |_| set_show_create_task.set(false))
                    on_success=Callback::new(move |_| {
                        set_show_create_task.set(false);
                        ctx.refresh_board();
                    })
                />
            })}
        </div>
    }
}

/// One status column; membership is a pure filter over the snapshot
#[component]
fn BoardColumn(status: TaskStatus, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let tasks = move || store.tasks().with(|tasks| board::column_tasks(tasks, status));

    let on_mouseenter = make_on_column_mouseenter(dnd, status.as_str());
    let on_mouseleave = make_on_column_mouseleave(dnd);

    let is_drop_target = move || {
        dnd.dragging_id_read.get().is_some()
            && dnd.drop_column_read.get().as_deref() == Some(status.as_str())
    };

    let column_class = move || {
        if is_drop_target() { "board-column drop-target" } else { "board-column" }
    };

    view! {
        <div class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="board-column-header">
                <h3>{status.label()}</h3>
                <span class="board-column-count">{move || tasks().len()}</span>
            </div>

            <div class="board-column-cards">
                <For
                    each=tasks
                    key=|task| (task.id.clone(), task.title.clone(), task.status, task.priority, task.position)
                    children=move |task| view! { <BoardCard task=task dnd=dnd /> }
                />
                {move || tasks().is_empty().then(|| view! {
                    <div class="board-column-empty">"No tasks"</div>
                })}
            </div>
        </div>
    }
}
