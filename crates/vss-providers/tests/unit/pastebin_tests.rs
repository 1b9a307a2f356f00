//! Tests for the Pastebin adapter

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::TempDir;
use vss_domain::error::Error;
use vss_domain::ports::{HttpResponse, PasteProvider};
use vss_domain::value_objects::{PasteExpiration, PastePrivacy, PasteRequest};
use vss_providers::pastebin::PastebinClient;

use crate::support::StubGateway;

fn client_with(stub: &Arc<StubGateway>) -> PastebinClient {
    PastebinClient::new(stub.clone())
}

#[tokio::test]
async fn test_create_paste_returns_url_and_key() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/Xy7Qw2"));
    let client = client_with(&stub);

    let request = PasteRequest::new("Console.WriteLine(\"Hello\");", "Test.cs")
        .with_privacy(PastePrivacy::Private)
        .with_expiration(PasteExpiration::OneDay);
    let paste = client.create_paste(&request).await.unwrap();

    assert_eq!(paste.url, "https://pastebin.com/Xy7Qw2");
    assert_eq!(paste.key, "Xy7Qw2");
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn test_create_paste_sends_exact_form_fields() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/abc"));
    let client = client_with(&stub);

    let request = PasteRequest::new("body text", "notes.py").with_format("python");
    client.create_paste(&request).await.unwrap();

    let call = stub.last_call();
    assert_eq!(call.endpoint, "/api_post.php");
    assert_eq!(
        call.field_names(),
        vec![
            "api_dev_key",
            "api_option",
            "api_paste_code",
            "api_paste_private",
            "api_paste_expire_date",
            "api_paste_name",
            "api_paste_format",
        ]
    );
    assert_eq!(call.field("api_dev_key"), Some("test-credential"));
    assert_eq!(call.field("api_option"), Some("paste"));
    assert_eq!(call.field("api_paste_code"), Some("body text"));
    assert_eq!(call.field("api_paste_private"), Some("1"));
    assert_eq!(call.field("api_paste_expire_date"), Some("1H"));
    assert_eq!(call.field("api_paste_name"), Some("notes.py"));
    assert_eq!(call.field("api_paste_format"), Some("python"));
}

#[tokio::test]
async fn test_create_paste_keeps_body_verbatim() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/raw/k3y"));
    let paste = client_with(&stub)
        .create_paste(&PasteRequest::new("x", "x"))
        .await
        .unwrap();
    assert_eq!(paste.url, "https://pastebin.com/raw/k3y");
    assert_eq!(paste.key, "k3y");
}

#[tokio::test]
async fn test_bad_api_request_with_ok_status_is_api_error() {
    let stub = Arc::new(StubGateway::replying(
        200,
        "Bad API request, invalid api_dev_key",
    ));
    let result = client_with(&stub)
        .create_paste(&PasteRequest::new("x", "x"))
        .await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("invalid api_dev_key"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let stub = Arc::new(StubGateway::replying(503, "Service Unavailable"));
    let err = client_with(&stub)
        .create_paste(&PasteRequest::new("x", "x"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let stub = Arc::new(StubGateway::with_responder(|_| {
        Err(Error::network("connection refused"))
    }));
    let err = client_with(&stub)
        .create_paste(&PasteRequest::new("x", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn test_share_file_missing_path_is_not_found() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/unused"));
    let dir = TempDir::new().unwrap();

    let err = client_with(&stub)
        .share_file(
            dir.path().join("missing.cs"),
            PastePrivacy::Unlisted,
            PasteExpiration::OneHour,
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_share_file_derives_title_and_format() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/p1"));
    let client = client_with(&stub);
    let dir = TempDir::new().unwrap();

    let cs = dir.path().join("Program.cs");
    std::fs::write(&cs, "class Program {}").unwrap();
    client
        .share_file(&cs, PastePrivacy::Public, PasteExpiration::Never)
        .await
        .unwrap();

    let call = stub.last_call();
    assert_eq!(call.field("api_paste_name"), Some("Program.cs"));
    assert_eq!(call.field("api_paste_format"), Some("csharp"));
    assert_eq!(call.field("api_paste_code"), Some("class Program {}"));
    assert_eq!(call.field("api_paste_private"), Some("0"));
    assert_eq!(call.field("api_paste_expire_date"), Some("N"));

    let rs = dir.path().join("main.rs");
    std::fs::write(&rs, "fn main() {}").unwrap();
    client
        .share_file(&rs, PastePrivacy::Unlisted, PasteExpiration::OneHour)
        .await
        .unwrap();
    assert_eq!(stub.last_call().field("api_paste_format"), Some("text"));
}

#[tokio::test]
async fn test_share_directory_skips_failed_files() {
    let stub = Arc::new(StubGateway::with_responder(|request| {
        let name = request.field("api_paste_name").unwrap_or_default();
        if name == "b.cs" {
            Ok(HttpResponse::new(200, "Bad API request, maximum pastes reached"))
        } else {
            let key = name.split('.').next().unwrap_or_default();
            Ok(HttpResponse::new(200, format!("https://pastebin.com/{key}")))
        }
    }));
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.cs"), "a").unwrap();
    std::fs::write(dir.path().join("b.cs"), "b").unwrap();
    std::fs::write(dir.path().join("c.json"), "{}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

    let responses = client_with(&stub)
        .share_directory(
            dir.path(),
            Some(&[".cs", ".json"][..]),
            PastePrivacy::Unlisted,
            PasteExpiration::OneHour,
        )
        .await
        .unwrap();

    assert_eq!(responses.len(), 2);
    assert_eq!(stub.call_count(), 3);
    let keys: HashSet<String> = responses.into_iter().map(|r| r.key).collect();
    assert_eq!(keys, HashSet::from(["a".to_string(), "c".to_string()]));
}

#[tokio::test]
async fn test_share_directory_default_extensions_recurse() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/ok"));
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("src").join("Models");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(dir.path().join("App.csproj"), "<Project />").unwrap();
    std::fs::write(dir.path().join("appsettings.json"), "{}").unwrap();
    std::fs::write(nested.join("User.cs"), "class User {}").unwrap();
    std::fs::write(nested.join("readme.md"), "# no").unwrap();

    let responses = client_with(&stub)
        .share_directory(
            dir.path(),
            None,
            PastePrivacy::Unlisted,
            PasteExpiration::OneHour,
        )
        .await
        .unwrap();

    assert_eq!(responses.len(), 3);
    let names: HashSet<String> = stub
        .calls()
        .iter()
        .filter_map(|c| c.field("api_paste_name").map(str::to_string))
        .collect();
    assert_eq!(
        names,
        HashSet::from([
            "App.csproj".to_string(),
            "appsettings.json".to_string(),
            "User.cs".to_string(),
        ])
    );
}

#[tokio::test]
async fn test_share_directory_missing_dir_is_not_found() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/ok"));
    let dir = TempDir::new().unwrap();

    let err = client_with(&stub)
        .share_directory(
            dir.path().join("nope"),
            None,
            PastePrivacy::Unlisted,
            PasteExpiration::OneHour,
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_share_directory_all_failures_returns_empty() {
    let stub = Arc::new(StubGateway::replying(500, "boom"));
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.cs"), "a").unwrap();
    std::fs::write(dir.path().join("b.json"), "{}").unwrap();

    let responses = client_with(&stub)
        .share_directory(
            dir.path(),
            None,
            PastePrivacy::Unlisted,
            PasteExpiration::OneHour,
        )
        .await
        .unwrap();

    assert!(responses.is_empty());
    assert_eq!(stub.call_count(), 2);
}

#[tokio::test]
async fn test_usable_as_paste_provider_port() {
    let stub = Arc::new(StubGateway::replying(200, "https://pastebin.com/port"));
    let provider: Arc<dyn PasteProvider> = Arc::new(client_with(&stub));

    assert_eq!(provider.provider_name(), "pastebin");
    let paste = provider
        .create_paste(&PasteRequest::new("x", "x"))
        .await
        .unwrap();
    assert_eq!(paste.key, "port");
}
