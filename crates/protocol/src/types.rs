//! Core wire types for the Replay protocol.
//!
//! These are pure data: no behavior beyond serialization and a few
//! conversion helpers.

use serde::{Deserialize, Serialize};

/// Opaque marker for a position inside a recording's execution.
///
/// Points are totally ordered on the server; clients must treat them as
/// opaque tokens and never parse or compare their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionPoint(String);

impl ExecutionPoint {
    /// Wraps a raw point token from the wire.
    pub fn new(point: impl Into<String>) -> Self {
        Self(point.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExecutionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionPoint {
    fn from(point: &str) -> Self {
        Self::new(point)
    }
}

/// Handle for an active replay session, issued by `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a raw session id from the wire.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Terminal position of a session's recorded execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEndpoint {
    /// Elapsed time at the end of the recording, in milliseconds.
    pub time: f64,
    /// Point marker for the last position in the recording.
    pub point: ExecutionPoint,
}

/// Identity of the authenticated user, as returned by the user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Stable user id.
    pub id: String,
    /// Display name, if the account has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email, if the account has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_point_serializes_transparently() {
        let point = ExecutionPoint::new("81289574327553");
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!("81289574327553"));
    }

    #[test]
    fn session_endpoint_roundtrip() {
        let endpoint: SessionEndpoint =
            serde_json::from_str(r#"{"time": 12543.0, "point": "81289574327553"}"#).unwrap();
        assert_eq!(endpoint.time, 12543.0);
        assert_eq!(endpoint.point.as_str(), "81289574327553");
    }

    #[test]
    fn user_info_omits_absent_fields() {
        let user = UserInfo {
            id: "user-1".to_string(),
            name: None,
            email: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":"user-1"}"#);
    }
}
