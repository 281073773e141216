//! GraphQL API Bindings
//!
//! Frontend bindings to the project-management GraphQL service, organized
//! by domain. Queries and mutations go over HTTP, subscriptions over a
//! graphql-transport-ws WebSocket.

mod client;
mod error;

mod auth;
mod comment;
mod project;
mod subscription;
mod task;
mod user;

pub use error::ApiError;

// Re-export all public items
pub use auth::*;
pub use comment::*;
pub use project::*;
pub use subscription::*;
pub use task::*;
pub use user::*;
