//! The injected remote-service collaborator.

use replay_protocol::{Result, SessionEndpoint, SessionId, UserInfo};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`ReplayClient`] methods.
///
/// Methods return boxed futures rather than `async fn` so the trait stays
/// object-safe and implementations can be passed around as `&dyn
/// ReplayClient`.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Interface to the remote Replay service.
///
/// Implementations own transport, timeouts, and retries; this layer only
/// sees their results. Any failure is reported as a
/// [`replay_protocol::Error`], structured where the server supports it and
/// an unstructured string for the legacy endpoints that do not.
pub trait ReplayClient: Send + Sync {
    /// Creates a new session for a recording, returning its id.
    ///
    /// The access token, when present, authenticates the session; public
    /// recordings initialize without one.
    fn initialize(
        &self,
        recording_id: &str,
        access_token: Option<&str>,
    ) -> ClientFuture<'_, SessionId>;

    /// Resolves the endpoint of a session's recorded execution.
    fn get_session_endpoint(&self, session_id: &SessionId) -> ClientFuture<'_, SessionEndpoint>;

    /// Looks up the user the access token belongs to.
    ///
    /// Returns `None` when the token does not resolve to an account.
    fn get_current_user_info(&self, access_token: &str) -> ClientFuture<'_, Option<UserInfo>>;
}
