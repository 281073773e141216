//! Kanri Frontend App
//!
//! Root component: restores the session from a stored token, provides the
//! shared context and switches pages on the route signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    provide_toasts, BoardPage, DashboardPage, LoginPage, SettingsPage, TaskPage, Toaster,
};
use crate::context::{AppContext, Route};
use crate::session::{begin_session, end_session, provide_session, stored_token};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session();
    provide_toasts();
    provide_context(Store::new(AppState::default()));

    // Land on the dashboard when a token survives from a previous visit;
    // the restore effect below decides whether it still works.
    let initial_route = if stored_token().is_some() {
        Route::Dashboard
    } else {
        Route::Login
    };
    let (route, set_route) = signal(initial_route);
    let (board_refresh, set_board_refresh) = signal(0u32);

    let ctx = AppContext::new((route, set_route), (board_refresh, set_board_refresh));
    provide_context(ctx);

    // Resolve the stored token back into a user, or give up and log in
    Effect::new(move |_| {
        if session.get().is_some() {
            return;
        }
        let Some(token) = stored_token() else { return };
        spawn_local(async move {
            match api::me(&token).await {
                Ok(user) => begin_session(session, token, user),
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] Session restore failed: {}", e).into());
                    end_session(session);
                    ctx.navigate(Route::Login);
                }
            }
        });
    });

    view! {
        <Toaster />
        {move || match route.get() {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            Route::Board { project_id } => view! { <BoardPage project_id=project_id /> }.into_any(),
            Route::Task { task_id } => view! { <TaskPage task_id=task_id /> }.into_any(),
            Route::Settings { project_id } => view! { <SettingsPage project_id=project_id /> }.into_any(),
        }}
    }
}
