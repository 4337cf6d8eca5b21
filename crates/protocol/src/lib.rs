//! Wire types and error taxonomy for the Replay command protocol.
//!
//! This crate contains the data shapes that cross the wire to a Replay
//! server — session and point identifiers, the session endpoint — and the
//! full error surface of the command protocol: the closed set of numeric
//! error codes, the structured `CommandError` value a failed command
//! reports, and the classification predicate that tells structured,
//! legacy-string, and local failures apart.
//!
//! Higher-level session orchestration lives in `replay-client`; this crate
//! is pure data plus classification and has no runtime dependencies.

pub mod error;
pub mod types;

pub use error::{CommandError, CommandErrorArgs, Error, ProtocolError, Result};
pub use types::{ExecutionPoint, SessionEndpoint, SessionId, UserInfo};
