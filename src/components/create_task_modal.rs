//! Create Task Modal Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskArgs};
use crate::models::{TaskPriority, User};
use crate::session::use_session;

#[component]
pub fn CreateTaskModal(
    project_id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Medium);
    let (assignee_id, set_assignee_id) = signal(String::new());
    let (users, set_users) = signal(Vec::<User>::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Assignee picker options
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        spawn_local(async move {
            if let Ok(loaded) = api::fetch_users(&session).await {
                set_users.set(loaded);
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let Some(session) = session.get_untracked() else { return };
        let title = title.get();
        let description = description.get();
        let assignee = assignee_id.get();
        let priority = priority.get();
        let project_id = project_id.clone();
        set_submitting.set(true);

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &title,
                project_id: &project_id,
                priority,
                description: (!description.is_empty()).then_some(description.as_str()),
                assignee_id: (!assignee.is_empty()).then_some(assignee.as_str()),
            };
            match api::create_task(&session, &args).await {
                Ok(()) => on_success.run(()),
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Create New Task"</h2>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <div class="form-error">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label>"Task Title *"</label>
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            required
                            minlength="3"
                            maxlength="200"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            rows="4"
                            placeholder="Add more details..."
                            maxlength="3000"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label>"Priority *"</label>
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
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
