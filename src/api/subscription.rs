//! GraphQL Subscriptions
//!
//! Minimal graphql-transport-ws client over a web-sys WebSocket. The
//! payload of a notification is never inspected beyond "something
//! changed"; callers react by refetching. An unexpected close reconnects
//! after a fixed delay, an explicit `close()` does not.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{json, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use crate::config;
use crate::session::Session;

const WS_SUBPROTOCOL: &str = "graphql-transport-ws";
const RECONNECT_DELAY_MS: i32 = 3000;

const TASK_UPDATED_SUBSCRIPTION: &str = r#"
subscription TaskUpdated($projectId: ID!) {
  taskUpdated(projectId: $projectId) {
    action
    task { id status position }
  }
}
"#;

const COMMENT_ADDED_SUBSCRIPTION: &str = r#"
subscription CommentAdded($taskId: ID!) {
  commentAdded(taskId: $taskId) {
    id
  }
}
"#;

struct SubscriptionState {
    token: String,
    query: &'static str,
    variables: Value,
    on_event: Box<dyn Fn()>,
    closed: Cell<bool>,
    socket: RefCell<Option<WebSocket>>,
}

/// Handle for one live subscription
///
/// Dropping the handle does not stop the stream; call `close()` on page
/// teardown.
pub struct Subscription {
    state: Rc<SubscriptionState>,
}

impl Subscription {
    pub fn close(&self) {
        self.state.closed.set(true);
        if let Some(socket) = self.state.socket.borrow_mut().take() {
            let _ = socket.close();
        }
    }
}

/// Change feed for one project's tasks
pub fn subscribe_task_changed(
    session: &Session,
    project_id: &str,
    on_event: impl Fn() + 'static,
) -> Subscription {
    open(
        session,
        TASK_UPDATED_SUBSCRIPTION,
        json!({ "projectId": project_id }),
        on_event,
    )
}

/// Change feed for one task's comments
pub fn subscribe_comment_added(
    session: &Session,
    task_id: &str,
    on_event: impl Fn() + 'static,
) -> Subscription {
    open(
        session,
        COMMENT_ADDED_SUBSCRIPTION,
        json!({ "taskId": task_id }),
        on_event,
    )
}

fn open(
    session: &Session,
    query: &'static str,
    variables: Value,
    on_event: impl Fn() + 'static,
) -> Subscription {
    let state = Rc::new(SubscriptionState {
        token: session.token.clone(),
        query,
        variables,
        on_event: Box::new(on_event),
        closed: Cell::new(false),
        socket: RefCell::new(None),
    });
    connect(state.clone());
    Subscription { state }
}

fn connect(state: Rc<SubscriptionState>) {
    let socket = match WebSocket::new_with_str(config::graphql_ws_url(), WS_SUBPROTOCOL) {
        Ok(socket) => socket,
        Err(_) => {
            schedule_reconnect(state);
            return;
        }
    };

    let on_open = {
        let state = state.clone();
        let socket = socket.clone();
        Closure::<dyn FnMut()>::new(move || {
            let init = json!({
                "type": "connection_init",
                "payload": { "Authorization": format!("Bearer {}", state.token) },
            });
            let _ = socket.send_with_str(&init.to_string());
        })
    };
    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    on_open.forget();

    let on_message = {
        let state = state.clone();
        let socket = socket.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            let Some(text) = ev.data().as_string() else { return };
            let Ok(message) = serde_json::from_str::<Value>(&text) else { return };
            match message["type"].as_str() {
                Some("connection_ack") => {
                    let subscribe = json!({
                        "id": "1",
                        "type": "subscribe",
                        "payload": { "query": state.query, "variables": state.variables },
                    });
                    let _ = socket.send_with_str(&subscribe.to_string());
                }
                Some("next") => (state.on_event)(),
                Some("ping") => {
                    let _ = socket.send_with_str(&json!({ "type": "pong" }).to_string());
                }
                _ => {}
            }
        })
    };
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_close = {
        let state = state.clone();
        Closure::<dyn FnMut(CloseEvent)>::new(move |_ev: CloseEvent| {
            if !state.closed.get() {
                web_sys::console::log_1(&"[WS] connection lost, reconnecting".into());
                schedule_reconnect(state.clone());
            }
        })
    };
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    *state.socket.borrow_mut() = Some(socket);
}

fn schedule_reconnect(state: Rc<SubscriptionState>) {
    let Some(win) = web_sys::window() else { return };
    let cb = Closure::<dyn FnMut()>::new(move || {
        if !state.closed.get() {
            connect(state.clone());
        }
    });
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        RECONNECT_DELAY_MS,
    );
    cb.forget();
}
