//! Endpoint Configuration
//!
//! GraphQL endpoints are resolved at compile time so a deployment can bake
//! its own URLs in with `KANRI_API_URL` / `KANRI_WS_URL`.

const DEFAULT_API_URL: &str = "http://localhost:4000/graphql";
const DEFAULT_WS_URL: &str = "ws://localhost:4000/graphql";

/// HTTP endpoint for queries and mutations
pub fn graphql_http_url() -> &'static str {
    option_env!("KANRI_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// WebSocket endpoint for subscriptions
pub fn graphql_ws_url() -> &'static str {
    option_env!("KANRI_WS_URL").unwrap_or(DEFAULT_WS_URL)
}
