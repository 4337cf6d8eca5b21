//! Session bootstrap for Replay remote debugging sessions.
//!
//! This crate orchestrates the ordered calls needed to stand up a usable
//! replay session against a remote Replay service: initialize a session for
//! a recording, resolve the session's endpoint, optionally look up the
//! authenticated user, and package the result into an immutable
//! [`SessionContext`].
//!
//! The remote service itself is injected through the [`ReplayClient`]
//! trait, so the bootstrap can be exercised against a fake in tests. All
//! failures surface as [`replay_protocol::Error`] values; callers decide on
//! recovery policy by running them through
//! [`replay_protocol::Error::is_command_error`].
//!
//! # Example
//!
//! ```ignore
//! use replay_client::{BootstrapOptions, initialize_session};
//!
//! # async fn run(client: &impl replay_client::ReplayClient) -> replay_client::Result<()> {
//! let options = BootstrapOptions::new("1ff386de-f3f4-4ff2-b6ba-cf8cd2fcd2a5")
//!     .with_access_token("token");
//! let context = initialize_session(client, &options).await?;
//! println!("session {} runs for {}ms", context.session_id, context.duration);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod context;
pub mod init;

pub use client::ReplayClient;
pub use context::{BootstrapOptions, SessionContext};
pub use init::initialize_session;

// Re-export the protocol surface callers need for error classification.
pub use replay_protocol;
pub use replay_protocol::{Error, ProtocolError, Result};
