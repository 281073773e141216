//! API Error Types

use thiserror::Error;

/// Failure modes of a GraphQL round trip
///
/// Both are handled the same way by callers - notify, then refetch - the
/// split only changes the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a usable GraphQL response
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered but refused the operation
    #[error("{0}")]
    Rejected(String),
}
