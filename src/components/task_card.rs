//! Board Card Component
//!
//! A single task card on the kanban board: draggable, click opens the
//! task detail page.

use leptos::prelude::*;
use leptos_board_dnd::{make_on_mousedown, DndSignals};

use crate::context::{AppContext, Route};
use crate::models::TaskCard;

#[component]
pub fn BoardCard(task: TaskCard, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };

    let card_class = move || {
        if is_dragging() { "task-card dragging" } else { "task-card" }
    };

    // Suppress the click that ends a drag; only a plain click navigates
    let on_click = {
        let id = id.clone();
        move |_| {
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            ctx.navigate(Route::Task { task_id: id.clone() });
        }
    };

    let priority = task.priority;
    let description = task.description.clone().filter(|d| !d.is_empty());

    view! {
        <div class=card_class on:mousedown=on_mousedown on:click=on_click>
            <div class="task-card-top">
                <h4 class="task-card-title">{task.title.clone()}</h4>
                <span class=format!("priority-badge {}", priority.css_class())>
                    {priority.label()}
                </span>
            </div>

            {description.map(|d| view! { <p class="task-card-description">{d}</p> })}

            <div class="task-card-bottom">
                <span class="task-card-key">{task.task_key.clone()}</span>
                {match task.assignee.clone() {
                    Some(assignee) => match assignee.avatar.clone() {
                        Some(avatar) => view! {
                            <img class="avatar" src=avatar alt=assignee.name.clone() title=assignee.name.clone() />
                        }.into_any(),
                        None => view! {
                            <span class="avatar-initial" title=assignee.name.clone()>
                                {assignee.name.chars().next().unwrap_or('?')}
                            </span>
                        }.into_any(),
                    },
                    None => view! { <span class="avatar-unassigned">"?"</span> }.into_any(),
                }}
            </div>
        </div>
    }
}
