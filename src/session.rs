//! Session Handling
//!
//! The session is an explicit value (token + user) carried in a context
//! signal and handed to whatever issues network calls. It begins on a
//! successful login and ends on logout; the token survives reloads in
//! localStorage.

use leptos::prelude::*;

use crate::models::User;

const TOKEN_KEY: &str = "token";

/// Authenticated session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

pub type SessionSignal = RwSignal<Option<Session>>;

/// Provide the session signal to the component tree
pub fn provide_session() -> SessionSignal {
    let session: SessionSignal = RwSignal::new(None);
    provide_context(session);
    session
}

/// Get the session signal from context
pub fn use_session() -> SessionSignal {
    expect_context::<SessionSignal>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Token persisted from a previous session, if any
pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Start a session after login/register
pub fn begin_session(session: SessionSignal, token: String, user: User) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &token);
    }
    session.set(Some(Session { token, user }));
}

/// Tear the session down on logout or a rejected token
pub fn end_session(session: SessionSignal) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    session.set(None);
}
