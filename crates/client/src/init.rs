//! Session initialization sequence.
//!
//! This module performs the ordered handshake that turns a recording id
//! into a live session context:
//!
//! 1. Check that a recording id was supplied
//! 2. Initialize a session for the recording
//! 3. Resolve the session's endpoint (requires the id from step 2)
//! 4. Look up the current user, only when an access token was supplied
//! 5. Assemble the immutable [`SessionContext`]

use crate::client::ReplayClient;
use crate::context::{BootstrapOptions, SessionContext};
use replay_protocol::{Error, Result};

/// Bootstraps a replay session against the given client.
///
/// Each invocation starts an entirely new remote session; this function
/// holds no state between calls. The steps run strictly in order — a
/// failure at any required step aborts the sequence and propagates the
/// error unchanged, with no retries and no partial result. No local
/// timeout is imposed: if the remote service hangs, so does this call,
/// and timeout policy belongs to the [`ReplayClient`] implementation
/// (surfacing as a `TimedOut`-coded command error).
///
/// # Errors
///
/// Returns [`Error::Config`] when no recording id was supplied (before any
/// remote call), and otherwise whatever failure the client reported for
/// the step that broke.
pub async fn initialize_session<C>(client: &C, options: &BootstrapOptions) -> Result<SessionContext>
where
    C: ReplayClient + ?Sized,
{
    let Some(recording_id) = options.recording_id.as_deref() else {
        return Err(Error::Config("Must specify a recording id".to_string()));
    };
    let access_token = options.access_token.as_deref();

    tracing::debug!(recording_id, authenticated = access_token.is_some(), "initializing session");
    let session_id = client.initialize(recording_id, access_token).await?;

    let endpoint = client.get_session_endpoint(&session_id).await?;
    tracing::debug!(%session_id, endpoint = %endpoint.point, "loaded session");

    let current_user_info = match access_token {
        Some(token) => client.get_current_user_info(token).await?,
        None => None,
    };

    Ok(SessionContext {
        access_token: access_token.map(str::to_string),
        current_user_info,
        duration: endpoint.time,
        end_point: endpoint.point,
        recording_id: recording_id.to_string(),
        session_id,
    })
}
