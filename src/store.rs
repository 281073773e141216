//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{self, MoveRequest};
use crate::models::TaskCard;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board snapshot for the currently open project
    pub tasks: Vec<TaskCard>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the board snapshot wholesale after a fetch
pub fn store_set_tasks(store: &AppStore, tasks: Vec<TaskCard>) {
    *store.tasks().write() = tasks;
}

/// Patch the snapshot optimistically while a move is in flight
pub fn store_apply_move(store: &AppStore, request: &MoveRequest) {
    board::apply_move(&mut store.tasks().write(), request);
}
