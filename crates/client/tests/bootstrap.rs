//! Bootstrap sequence tests against a scriptable fake client.

use replay_client::client::ClientFuture;
use replay_client::{BootstrapOptions, ReplayClient, initialize_session};
use replay_protocol::{
    CommandError, Error, ExecutionPoint, ProtocolError, SessionEndpoint, SessionId, UserInfo,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

const RECORDING_ID: &str = "1ff386de-f3f4-4ff2-b6ba-cf8cd2fcd2a5";

/// Fake remote service: hands out canned values, can be scripted to fail
/// at either remote step, and records what it was called with.
#[derive(Default)]
struct FakeClient {
    initialize_error: Option<Error>,
    endpoint_error: Option<Error>,
    user_info: Option<UserInfo>,
    initialize_calls: AtomicUsize,
    endpoint_calls: AtomicUsize,
    user_calls: AtomicUsize,
    endpoint_saw_session: Mutex<Option<SessionId>>,
    user_saw_token: Mutex<Option<String>>,
}

impl FakeClient {
    fn with_user(user: UserInfo) -> Self {
        Self {
            user_info: Some(user),
            ..Self::default()
        }
    }
}

impl ReplayClient for FakeClient {
    fn initialize(
        &self,
        recording_id: &str,
        _access_token: Option<&str>,
    ) -> ClientFuture<'_, SessionId> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        let result = match &self.initialize_error {
            Some(err) => Err(err.clone()),
            None => Ok(SessionId::new(format!("session-for-{recording_id}"))),
        };
        Box::pin(async move { result })
    }

    fn get_session_endpoint(&self, session_id: &SessionId) -> ClientFuture<'_, SessionEndpoint> {
        self.endpoint_calls.fetch_add(1, Ordering::SeqCst);
        *self.endpoint_saw_session.lock().unwrap() = Some(session_id.clone());
        let result = match &self.endpoint_error {
            Some(err) => Err(err.clone()),
            None => Ok(SessionEndpoint {
                time: 12543.0,
                point: ExecutionPoint::new("81289574327553"),
            }),
        };
        Box::pin(async move { result })
    }

    fn get_current_user_info(&self, access_token: &str) -> ClientFuture<'_, Option<UserInfo>> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        *self.user_saw_token.lock().unwrap() = Some(access_token.to_string());
        let result = Ok(self.user_info.clone());
        Box::pin(async move { result })
    }
}

fn test_user() -> UserInfo {
    UserInfo {
        id: "user-1".to_string(),
        name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
    }
}

#[tokio::test]
async fn missing_recording_id_fails_before_any_remote_call() {
    let client = FakeClient::default();
    let options = BootstrapOptions::default();

    let err = initialize_session(&client, &options).await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(!err.is_command_error(None));
    assert_eq!(client.initialize_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.endpoint_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.user_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn anonymous_bootstrap_skips_user_lookup() {
    let client = FakeClient::default();
    let options = BootstrapOptions::new(RECORDING_ID);

    let context = initialize_session(&client, &options).await.unwrap();

    assert_eq!(context.access_token, None);
    assert_eq!(context.current_user_info, None);
    assert_eq!(context.recording_id, RECORDING_ID);
    assert_eq!(context.duration, 12543.0);
    assert_eq!(context.end_point.as_str(), "81289574327553");
    assert_eq!(client.user_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn authenticated_bootstrap_populates_user_info() {
    let client = FakeClient::with_user(test_user());
    let options = BootstrapOptions::new(RECORDING_ID).with_access_token("token-abc");

    let context = initialize_session(&client, &options).await.unwrap();

    assert_eq!(context.access_token.as_deref(), Some("token-abc"));
    assert_eq!(context.current_user_info, Some(test_user()));
    assert_eq!(
        client.user_saw_token.lock().unwrap().as_deref(),
        Some("token-abc")
    );
    assert_eq!(client.user_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn endpoint_is_resolved_with_the_initialized_session_id() {
    let client = FakeClient::default();
    let options = BootstrapOptions::new(RECORDING_ID);

    let context = initialize_session(&client, &options).await.unwrap();

    let expected = SessionId::new(format!("session-for-{RECORDING_ID}"));
    assert_eq!(context.session_id, expected);
    assert_eq!(
        client.endpoint_saw_session.lock().unwrap().as_ref(),
        Some(&expected)
    );
}

#[tokio::test]
async fn failed_initialize_aborts_the_whole_sequence() {
    let client = FakeClient {
        initialize_error: Some(Error::from(CommandError::new("unknown session", 59))),
        ..FakeClient::default()
    };
    let options = BootstrapOptions::new(RECORDING_ID).with_access_token("token-abc");

    let err = initialize_session(&client, &options).await.unwrap_err();

    assert!(err.is_command_error(Some(ProtocolError::UnknownSession)));
    assert_eq!(err.command_code(), Some(59));
    assert_eq!(client.endpoint_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.user_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_endpoint_resolution_propagates_unchanged() {
    let failure = Error::from(CommandError::new("session destroyed", 66));
    let client = FakeClient {
        endpoint_error: Some(failure.clone()),
        ..FakeClient::default()
    };
    let options = BootstrapOptions::new(RECORDING_ID).with_access_token("token-abc");

    let err = initialize_session(&client, &options).await.unwrap_err();

    assert_eq!(err, failure);
    // The sequence aborts before the user lookup.
    assert_eq!(client.user_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unstructured_failures_pass_through_for_classification() {
    let client = FakeClient {
        endpoint_error: Some(Error::Unstructured(
            "There are too many points to complete this operation in the recording".to_string(),
        )),
        ..FakeClient::default()
    };
    let options = BootstrapOptions::new(RECORDING_ID);

    let err = initialize_session(&client, &options).await.unwrap_err();

    assert!(err.is_command_error(Some(ProtocolError::TooManyPoints)));
    assert!(!err.is_command_error(Some(ProtocolError::UnknownBuild)));
}
