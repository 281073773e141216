//! Login Page Component
//!
//! Email/password login with a register toggle. Tokens come back from the
//! API; the client never checks credentials itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::use_toasts;
use crate::context::{AppContext, Route};
use crate::session::{begin_session, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let (registering, set_registering) = signal(false);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_submitting.set(true);

        let email = email.get();
        let password = password.get();
        let name = name.get();
        let register = registering.get();

        spawn_local(async move {
            let result = if register {
                api::register(&email, &password, &name).await
            } else {
                api::login(&email, &password).await
            };
            set_submitting.set(false);
            match result {
                Ok(payload) => {
                    begin_session(session, payload.token, payload.user);
                    toasts.success(if register { "Welcome aboard!" } else { "Welcome back!" });
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => set_error.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-title">"Kanri"</h1>
                <p class="login-subtitle">
                    {move || if registering.get() { "Create your account" } else { "Sign in to continue" }}
                </p>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <div class="form-error">{message}</div> })
                }}

                <form class="login-form" on:submit=on_submit>
                    {move || registering.get().then(|| view! {
                        <div class="form-field">
                            <label>"Name"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                    })}

                    <div class="form-field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || match (registering.get(), submitting.get()) {
                            (_, true) => "Please wait...",
                            (true, _) => "Register",
                            (false, _) => "Login",
                        }}
                    </button>
                </form>

                <button
                    class="login-toggle"
                    on:click=move |_| {
                        set_error.set(String::new());
                        set_registering.update(|v| *v = !*v);
                    }
                >
                    {move || if registering.get() {
                        "Already have an account? Sign in"
                    } else {
                        "No account yet? Register"
                    }}
                </button>
            </div>
        </div>
    }
}
