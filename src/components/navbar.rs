//! Navbar Component
//!
//! Top navigation bar with brand, current user and logout.

use leptos::prelude::*;

use crate::components::use_toasts;
use crate::context::{AppContext, Route};
use crate::session::{end_session, use_session};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let on_logout = move |_| {
        end_session(session);
        toasts.success("Logged out");
        ctx.navigate(Route::Login);
    };

    view! {
        <nav class="navbar">
            <div class="navbar-left">
                <button class="navbar-brand" on:click=move |_| ctx.navigate(Route::Dashboard)>
                    "Kanri"
                </button>
                <button class="navbar-link" on:click=move |_| ctx.navigate(Route::Dashboard)>
                    "Projects"
                </button>
            </div>

            <div class="navbar-right">
                {move || session.get().map(|s| {
                    let initial = s.user.name.chars().next().unwrap_or('?');
                    let role = s.user.role.clone().unwrap_or_default();
                    view! {
                        <div class="navbar-user">
                            <span class="avatar-initial">{initial}</span>
                            <div class="navbar-user-meta">
                                <p class="navbar-user-name">{s.user.name.clone()}</p>
                                <p class="navbar-user-role">{role}</p>
                            </div>
                        </div>
                        <button class="navbar-logout" on:click=on_logout>"Logout"</button>
                    }
                })}
            </div>
        </nav>
    }
}
