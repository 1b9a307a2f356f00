//! Tests for Gyazo access token acquisition

use std::sync::Arc;

use vss_domain::error::Error;
use vss_providers::gyazo::GyazoAuth;

use crate::support::StubGateway;

#[tokio::test]
async fn test_get_access_token_returns_token() {
    let stub = Arc::new(StubGateway::replying(
        200,
        r#"{"access_token":"abc","token_type":"bearer"}"#,
    ));

    let token = GyazoAuth::new(stub.clone())
        .get_access_token("client-id", "client-secret")
        .await
        .unwrap();

    assert_eq!(token, "abc");
}

#[tokio::test]
async fn test_get_access_token_sends_client_credentials() {
    let stub = Arc::new(StubGateway::replying(200, r#"{"access_token":"abc"}"#));

    GyazoAuth::new(stub.clone())
        .get_access_token("client-id", "client-secret")
        .await
        .unwrap();

    let call = stub.last_call();
    assert_eq!(call.endpoint, "/token");
    assert_eq!(call.field("client_id"), Some("client-id"));
    assert_eq!(call.field("client_secret"), Some("client-secret"));
    assert_eq!(call.field("grant_type"), Some("client_credentials"));
    assert_eq!(call.field("redirect_uri"), Some("http://localhost"));
}

#[tokio::test]
async fn test_reply_without_token_is_api_error() {
    for body in ["{}", r#"{"access_token":null}"#] {
        let stub = Arc::new(StubGateway::replying(200, body));
        let err = GyazoAuth::new(stub.clone())
            .get_access_token("id", "secret")
            .await
            .unwrap_err();

        match err {
            Error::Api { message, .. } => assert!(message.contains("No access_token")),
            other => panic!("Expected Api error for {body}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_rejected_credentials_is_api_error() {
    let stub = Arc::new(StubGateway::replying(
        401,
        r#"{"error":"invalid_client"}"#,
    ));

    let err = GyazoAuth::new(stub.clone())
        .get_access_token("id", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Failed to get access token"));
}
