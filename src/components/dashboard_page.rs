//! Dashboard Page Component
//!
//! Project list with search and a create-project modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{use_toasts, Navbar};
use crate::context::{AppContext, Route};
use crate::models::ProjectTeaser;
use crate::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let (projects, set_projects) = signal(Vec::<ProjectTeaser>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (show_create, set_show_create) = signal(false);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let Some(session) = session.get() else { return };
        spawn_local(async move {
            match api::fetch_projects(&session).await {
                Ok(list) => set_projects.set(list),
                Err(e) => toasts.error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        let query = search.get().to_lowercase();
        projects
            .get()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query) || p.key.to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Navbar />

            <div class="page-body">
                <div class="page-header">
                    <div>
                        <h1>"Projects"</h1>
                        <p class="page-subtitle">"Manage your projects and tasks"</p>
                    </div>
                    <button class="btn-primary" on:click=move |_| set_show_create.set(true)>
                        "+ Create Project"
                    </button>
                </div>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Search projects by name or key..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />

                {move || if loading.get() {
                    view! { <div class="loading">"Loading projects..."</div> }.into_any()
                } else if filtered().is_empty() {
                    view! {
                        <div class="empty-state">
                            <h3>"No projects found"</h3>
                            <p>
                                {move || if search.get().is_empty() {
                                    "Create your first project to get started!"
                                } else {
                                    "Try a different search term"
                                }}
                            </p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            <For
                                each=filtered
                                key=|p| p.id.clone()
                                children=move |project| view! { <ProjectCard project=project /> }
                            />
                        </div>
                    }.into_any()
                }}
            </div>

            {move || show_create.get().then(|| view! {
                <CreateProjectModal
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_success=Callback::new(move |_| {
                        set_show_create.set(false);
                        set_reload.update(|v| *v += 1);
                    })
                />
            })}
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectTeaser) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = project.id.clone();
    let member_count = project.members.len();
    let owner_initial = project.owner.name.chars().next().unwrap_or('?');
    let description = project
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description provided".to_string());

    view! {
        <div class="project-card" on:click=move |_| ctx.navigate(Route::Board { project_id: id.clone() })>
            <div class="project-card-header">
                <h3>{project.name.clone()}</h3>
                <span class="project-key">{project.key.clone()}</span>
            </div>
            <p class="project-description">{description}</p>
            <div class="project-card-footer">
                <div class="project-owner">
                    <span class="avatar-initial">{owner_initial}</span>
                    <span>{project.owner.name.clone()}</span>
                </div>
                <span class="project-members">
                    {format!("{} {}", member_count, if member_count == 1 { "member" } else { "members" })}
                </span>
            </div>
        </div>
    }
}

#[component]
fn CreateProjectModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (key, set_key) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Keys are uppercase alphanumerics, enforced while typing
    let on_key_input = move |ev: web_sys::Event| {
        let value: String = event_target_value(&ev)
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        set_key.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let key_value = key.get();
        if key_value.len() < 2 || key_value.len() > 5 {
            set_error.set("Project key must be 2-5 characters".to_string());
            return;
        }

        let Some(session) = session.get_untracked() else { return };
        let name = name.get();
        let description = description.get();
        set_submitting.set(true);

        spawn_local(async move {
            let description = (!description.is_empty()).then_some(description.as_str());
            match api::create_project(&session, &name, &key_value, description).await {
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
                <h2>"Create New Project"</h2>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <div class="form-error">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label>"Project Name *"</label>
                        <input
                            type="text"
                            placeholder="My Awesome Project"
                            required
                            minlength="3"
                            maxlength="100"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label>"Project Key * (2-5 characters)"</label>
                        <input
                            type="text"
                            placeholder="PROJ"
                            required
                            minlength="2"
                            maxlength="5"
                            prop:value=move || key.get()
                            on:input=on_key_input
                        />
                        <p class="form-hint">"Example: DEMO, TEST, APP (uppercase letters and numbers only)"</p>
                    </div>

                    <div class="form-field">
                        <label>"Description (optional)"</label>
                        <textarea
                            rows="3"
                            placeholder="Brief description of your project"
                            maxlength="1000"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
