//! Project Settings Page Component
//!
//! Project info editing, member administration and deletion. Mutating
//! actions are only offered to the owner; the server enforces the same
//! rules regardless.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{use_toasts, DeleteConfirmButton, Navbar};
use crate::context::{AppContext, Route};
use crate::models::{Project, User};
use crate::session::use_session;

#[component]
pub fn SettingsPage(project_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let (project, set_project) = signal(None::<Project>);
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (reload, set_reload) = signal(0u32);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (show_add_member, set_show_add_member) = signal(false);
    let (selected_user, set_selected_user) = signal(String::new());

    // Load the project and seed the form
    let pid = project_id.clone();
    Effect::new(move |_| {
        let _ = reload.get();
        let Some(session) = session.get() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            match api::fetch_project(&session, &pid).await {
                Ok(loaded) => {
                    set_name.set(loaded.name.clone());
                    set_description.set(loaded.description.clone().unwrap_or_default());
                    set_project.set(Some(loaded));
                }
                Err(e) => toasts.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    // Candidates for the add-member picker
    Effect::new(move |_| {
        let Some(session) = session.get() else { return };
        spawn_local(async move {
            if let Ok(loaded) = api::fetch_users(&session).await {
                set_users.set(loaded);
            }
        });
    });

    let is_owner = move || {
        match (project.get(), session.get()) {
            (Some(project), Some(session)) => project.owner.id == session.user.id,
            _ => false,
        }
    };

    // Users not yet on the project
    let available_users = move || {
        let Some(project) = project.get() else { return Vec::new() };
        users
            .get()
            .into_iter()
            .filter(|user| !project.members.iter().any(|m| m.id == user.id))
            .collect::<Vec<_>>()
    };

    let pid = project_id.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = session.get_untracked() else { return };
        let pid = pid.clone();
        let name = name.get();
        let description = description.get();
        spawn_local(async move {
            match api::update_project(&session, &pid, &name, &description).await {
                Ok(()) => {
                    toasts.success("Project updated");
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let pid = project_id.clone();
    let on_delete = Callback::new(move |_| {
        let Some(session) = session.get_untracked() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            match api::delete_project(&session, &pid).await {
                Ok(()) => {
                    toasts.success("Project deleted");
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    });

    let pid = project_id.clone();
    let on_add_member = move |_| {
        let user_id = selected_user.get_untracked();
        if user_id.is_empty() {
            return;
        }
        let Some(session) = session.get_untracked() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            match api::add_project_member(&session, &pid, &user_id).await {
                Ok(()) => {
                    set_show_add_member.set(false);
                    set_selected_user.set(String::new());
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let pid = project_id.clone();
    let remove_member = move |user_id: String| {
        let Some(session) = session.get_untracked() else { return };
        let pid = pid.clone();
        spawn_local(async move {
            match api::remove_project_member(&session, &pid, &user_id).await {
                Ok(()) => set_reload.update(|v| *v += 1),
                Err(e) => toasts.error(e.to_string()),
            }
        });
    };

    let board_id = project_id.clone();

    view! {
        <div class="page">
            <Navbar />

            <div class="page-body page-body-narrow">
                {move || match project.get() {
                    None if loading.get() => view! { <div class="loading">"Loading..."</div> }.into_any(),
                    None => view! { <div class="load-error">"Project not found"</div> }.into_any(),
                    Some(project) => {
                        let on_save = on_save.clone();
                        let remove_member = remove_member.clone();
                        let board_id = board_id.clone();
                        let owner_id = project.owner.id.clone();
                        let project_name = project.name.clone();
                        let project_key = project.key.clone();
                        let members = project.members.clone();
                        view! {
                            <div class="breadcrumbs">
                                <button class="breadcrumb-link" on:click=move |_| ctx.navigate(Route::Dashboard)>
                                    "Projects"
                                </button>
                                <span>"/"</span>
                                <button
                                    class="breadcrumb-link"
                                    on:click=move |_| ctx.navigate(Route::Board { project_id: board_id.clone() })
                                >
                                    {project_name.clone()}
                                </button>
                                <span>"/"</span>
                                <span>"Settings"</span>
                            </div>

                            <h1>"Project Settings"</h1>

                            <div class="card">
                                <h2>"Project Information"</h2>
                                <form on:submit=on_save.clone()>
                                    <div class="form-field">
                                        <label>"Project Name"</label>
                                        <input
                                            type="text"
                                            disabled=move || !is_owner()
                                            prop:value=move || name.get()
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Description"</label>
                                        <textarea
                                            rows="3"
                                            disabled=move || !is_owner()
                                            prop:value=move || description.get()
                                            on:input=move |ev| set_description.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label>"Project Key"</label>
                                        <input type="text" disabled=true prop:value=project_key.clone() />
                                    </div>
                                    {move || is_owner().then(|| view! {
                                        <button type="submit" class="btn-primary">"Save Changes"</button>
                                    })}
                                </form>
                            </div>

                            <div class="card">
                                <div class="card-header">
                                    <h2>{format!("Members ({})", members.len())}</h2>
                                    <button class="btn-primary" on:click=move |_| set_show_add_member.set(true)>
                                        "+ Add Member"
                                    </button>
                                </div>

                                <div class="member-list">
                                    <For
                                        each=move || members.clone()
                                        key=|member| member.id.clone()
                                        children=move |member| {
                                            let member_id = member.id.clone();
                                            let member_is_owner = member.id == owner_id;
                                            let remove_member = remove_member.clone();
                                            view! {
                                                <div class="member-row">
                                                    <div class="member-info">
                                                        <span class="avatar-initial">
                                                            {member.name.chars().next().unwrap_or('?')}
                                                        </span>
                                                        <div>
                                                            <p class="member-name">{member.name.clone()}</p>
                                                            <p class="member-email">{member.email.clone()}</p>
                                                        </div>
                                                        {member_is_owner.then(|| view! {
                                                            <span class="owner-badge">"Owner"</span>
                                                        })}
                                                    </div>
                                                    {move || (is_owner() && !member_is_owner).then(|| {
                                                        let member_id = member_id.clone();
                                                        let remove_member = remove_member.clone();
                                                        view! {
                                                            <DeleteConfirmButton
                                                                button_class="btn-link danger"
                                                                label="Remove"
                                                                on_confirm=Callback::new(move |_| remove_member(member_id.clone()))
                                                            />
                                                        }
                                                    })}
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            </div>

                            {move || is_owner().then(|| view! {
                                <div class="card danger-zone">
                                    <h2>"Danger Zone"</h2>
                                    <p class="muted">
                                        "Once you delete a project, there is no going back. Please be certain."
                                    </p>
                                    <DeleteConfirmButton
                                        button_class="btn-danger"
                                        label="Delete Project"
                                        on_confirm=on_delete
                                    />
                                </div>
                            })}
                        }.into_any()
                    }
                }}

                {move || show_add_member.get().then(|| view! {
                    <div class="modal-overlay">
                        <div class="modal">
                            <h2>"Add Member"</h2>
                            <select
                                prop:value=move || selected_user.get()
                                on:change=move |ev| set_selected_user.set(event_target_value(&ev))
                            >
                                <option value="">"Select a user"</option>
                                <For
                                    each=available_users
                                    key=|user| user.id.clone()
                                    children=move |user| view! {
                                        <option value=user.id.clone()>
                                            {format!("{} ({})", user.name, user.email)}
                                        </option>
                                    }
                                />
                            </select>
                            <div class="modal-actions">
                                <button class="btn-secondary" on:click=move |_| set_show_add_member.set(false)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn-primary"
                                    disabled=move || selected_user.get().is_empty()
                                    on:click=on_add_member.clone()
                                >
                                    "Add"
                                </button>
                            </div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
