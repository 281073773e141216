//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// In-memory route, switched by signal
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Login,
    Dashboard,
    Board { project_id: String },
    Task { task_id: String },
    Settings { project_id: String },
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    /// Trigger to reload the board from the server - read
    pub board_refresh: ReadSignal<u32>,
    /// Trigger to reload the board from the server - write
    set_board_refresh: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        board_refresh: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            board_refresh: board_refresh.0,
            set_board_refresh: board_refresh.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Ask the board page for a full refetch
    ///
    /// Every reconciliation path funnels through here: settled moves, push
    /// notifications and task creation all bump the same trigger.
    pub fn refresh_board(&self) {
        self.set_board_refresh.update(|v| *v += 1);
    }
}
