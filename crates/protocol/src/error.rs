//! Error surface of the Replay command protocol.
//!
//! A failed command surfaces in one of three shapes: a structured
//! [`CommandError`] carrying a numeric code, a bare string from an endpoint
//! that predates structured errors, or a local precondition failure that
//! never involved the server at all. The [`Error`] sum type covers all
//! three, so classification is an exhaustive match rather than a downcast.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed prefix of the legacy string error emitted by analysis endpoints
/// when a query covers too many points. The remainder of the string carries
/// variable detail about the analysis and is not stable.
const TOO_MANY_POINTS_PREFIX: &str =
    "There are too many points to complete this operation";

/// Exact legacy string error for recordings made with an unsupported linker.
const LINKER_UNSUPPORTED_MESSAGE: &str =
    "The linker version used to make this recording does not support this action";

/// Stable numeric error codes reported by the Replay command protocol.
///
/// The set is closed on the client side but the server may report codes
/// introduced after this enum was written; those travel through
/// [`CommandError`] as raw integers and simply have no named counterpart
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ProtocolError {
    /// Unspecified server-side failure.
    InternalError = 1,
    /// The recording's format version is not supported.
    UnsupportedRecording = 31,
    /// The build that produced the recording is not known to the server.
    UnknownBuild = 32,
    /// The command ran but could not complete.
    CommandFailed = 33,
    /// The recording was unloaded while commands were outstanding.
    RecordingUnloaded = 38,
    /// The requested document is not available at this point.
    DocumentIsUnavailable = 45,
    /// The command did not complete in time.
    TimedOut = 46,
    /// The linker used to make the recording does not support this action.
    LinkerDoesNotSupportAction = 48,
    /// The recording is malformed.
    InvalidRecording = 50,
    /// The backing service is temporarily unavailable.
    ServiceUnavailable = 51,
    /// The operation would cover too many execution points.
    TooManyPoints = 55,
    /// The session id does not name a live session.
    UnknownSession = 59,
    /// Source mapping produced too many generated locations.
    TooManyGeneratedLocations = 61,
    /// No graphics data exists at the requested point.
    GraphicsUnavailableAtPoint = 65,
    /// The session was destroyed while commands were outstanding.
    SessionDestroyed = 66,
    /// The query matched too many source locations.
    TooManyLocations = 67,
    /// The server failed to create a session for the recording.
    SessionCreationFailure = 72,
    /// The focus window changed while the command was running.
    FocusWindowChange = 76,
}

impl ProtocolError {
    /// Returns the wire code for this error.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Looks up a known code, returning `None` for codes this client does
    /// not recognize by name.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::InternalError,
            31 => Self::UnsupportedRecording,
            32 => Self::UnknownBuild,
            33 => Self::CommandFailed,
            38 => Self::RecordingUnloaded,
            45 => Self::DocumentIsUnavailable,
            46 => Self::TimedOut,
            48 => Self::LinkerDoesNotSupportAction,
            50 => Self::InvalidRecording,
            51 => Self::ServiceUnavailable,
            55 => Self::TooManyPoints,
            59 => Self::UnknownSession,
            61 => Self::TooManyGeneratedLocations,
            65 => Self::GraphicsUnavailableAtPoint,
            66 => Self::SessionDestroyed,
            67 => Self::TooManyLocations,
            72 => Self::SessionCreationFailure,
            76 => Self::FocusWindowChange,
            _ => return None,
        })
    }
}

/// Diagnostic context attached to a failed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandErrorArgs {
    /// Request id of the failed command.
    pub id: u64,
    /// Protocol method that failed (e.g. "Session.getEndpoint").
    pub method: String,
    /// Parameters the command was invoked with.
    pub params: Value,
    /// Pause the command was scoped to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_id: Option<String>,
    /// Session the command was scoped to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Structured failure reported by the server for a single command.
///
/// Constructed once at the point the command fails and propagated upward
/// unchanged. The code is stored verbatim: the server may report codes
/// newer than [`ProtocolError`] names, and classification must still see
/// them.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (code {code})")]
pub struct CommandError {
    /// Human-readable message from the server.
    pub message: String,
    /// Numeric protocol code, not validated against [`ProtocolError`].
    pub code: u32,
    /// Diagnostic context from the failed request, when available.
    pub args: Option<CommandErrorArgs>,
}

impl CommandError {
    /// Creates a structured command error with no diagnostic context.
    pub fn new(message: impl Into<String>, code: u32) -> Self {
        Self {
            message: message.into(),
            code,
            args: None,
        }
    }

    /// Attaches diagnostic context from the failed request.
    pub fn with_args(mut self, args: CommandErrorArgs) -> Self {
        self.args = Some(args);
        self
    }

    /// Returns the named code this error maps to, if the client knows it.
    pub fn protocol_error(&self) -> Option<ProtocolError> {
        ProtocolError::from_code(self.code)
    }
}

/// Failure shapes a Replay protocol call can surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Local precondition failure (caller misuse). Never reported by the
    /// server and never carries a protocol code.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structured command failure from the server.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Bare string failure from an endpoint that has not been migrated to
    /// structured errors.
    #[error("Protocol error: {0}")]
    Unstructured(String),
}

impl Error {
    /// Classifies this failure against an expected protocol code.
    ///
    /// Structured errors match on their numeric code, or on any code when
    /// `expected` is `None`. Unstructured strings are a compatibility shim
    /// limited to exactly two codes: [`ProtocolError::TooManyPoints`]
    /// (prefix match; the suffix carries variable analysis detail and is
    /// never parsed here) and [`ProtocolError::LinkerDoesNotSupportAction`]
    /// (exact match). A string never matches any other code, or an omitted
    /// one. Local [`Error::Config`] failures never match.
    pub fn is_command_error(&self, expected: Option<ProtocolError>) -> bool {
        match self {
            Error::Command(err) => match expected {
                None => true,
                Some(code) => err.code == code.code(),
            },
            Error::Unstructured(message) => {
                // String-shaped errors are a legacy condition worth
                // surfacing whether or not the match below succeeds.
                tracing::warn!(%message, "unstructured error string from server");
                match expected {
                    Some(ProtocolError::TooManyPoints) => {
                        message.starts_with(TOO_MANY_POINTS_PREFIX)
                    }
                    Some(ProtocolError::LinkerDoesNotSupportAction) => {
                        message.as_str() == LINKER_UNSUPPORTED_MESSAGE
                    }
                    _ => false,
                }
            }
            Error::Config(_) => false,
        }
    }

    /// Returns the raw command code if this is a structured failure.
    pub fn command_code(&self) -> Option<u32> {
        match self {
            Error::Command(err) => Some(err.code),
            _ => None,
        }
    }

    /// Returns diagnostic context if this is a structured failure that
    /// carries it.
    pub fn command_args(&self) -> Option<&CommandErrorArgs> {
        match self {
            Error::Command(err) => err.args.as_ref(),
            _ => None,
        }
    }
}
