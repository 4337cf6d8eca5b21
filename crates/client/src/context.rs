//! Bootstrap inputs and the resulting session context.

use replay_protocol::{ExecutionPoint, SessionId, UserInfo};

/// Inputs to the session bootstrap.
///
/// Both fields arrive pre-parsed from whatever surface the caller exposes
/// (URL parameters, CLI flags). The recording id is required; leaving it
/// unset makes the bootstrap fail before any remote call.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Recording to open a session for.
    pub recording_id: Option<String>,
    /// Token authenticating the caller; absent for public recordings.
    pub access_token: Option<String>,
}

impl BootstrapOptions {
    /// Creates options for a recording.
    pub fn new(recording_id: impl Into<String>) -> Self {
        Self {
            recording_id: Some(recording_id.into()),
            access_token: None,
        }
    }

    /// Sets the access token.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

/// Everything a caller needs about a freshly bootstrapped session.
///
/// Assembled all-or-nothing by [`crate::initialize_session`]; there is no
/// partially populated state. `current_user_info` can only be present when
/// `access_token` is — user lookup is skipped entirely for anonymous
/// bootstraps.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Token the session was authenticated with, if any.
    pub access_token: Option<String>,
    /// Identity behind the token; `None` for anonymous bootstraps or
    /// tokens that resolve to no account.
    pub current_user_info: Option<UserInfo>,
    /// Duration of the recording in milliseconds, from the endpoint.
    pub duration: f64,
    /// Last position in the recording.
    pub end_point: ExecutionPoint,
    /// Recording the session replays.
    pub recording_id: String,
    /// Live session handle issued by the server.
    pub session_id: SessionId,
}
