//! Client Factory Tests

use mockito::{Matcher, Server};
use vss_domain::error::Error;
use vss_infrastructure::config::{AppConfig, GyazoConfig, PastebinConfig};
use vss_infrastructure::factory::ClientFactory;

fn config_with(pastebin: PastebinConfig, gyazo: GyazoConfig) -> AppConfig {
    AppConfig {
        pastebin,
        gyazo,
        ..AppConfig::default()
    }
}

#[test]
fn test_factory_wires_configured_credentials() {
    let config = config_with(
        PastebinConfig {
            api_key: "dev-key".to_string(),
            ..PastebinConfig::default()
        },
        GyazoConfig {
            access_token: "upload-token".to_string(),
            ..GyazoConfig::default()
        },
    );

    let factory = ClientFactory::new(&config).unwrap();

    let pastebin = factory.pastebin().gateway();
    assert_eq!(pastebin.base_url(), "https://pastebin.com/api");
    assert_eq!(pastebin.credential(), "dev-key");

    let gyazo = factory.gyazo().gateway();
    assert_eq!(gyazo.base_url(), "https://upload.gyazo.com/api");
    assert_eq!(gyazo.credential(), "upload-token");

    assert_eq!(factory.paste_provider().provider_name(), "pastebin");
    assert_eq!(factory.image_provider().provider_name(), "gyazo");
    assert_eq!(factory.config(), &config);
}

#[tokio::test]
async fn test_configured_token_is_used_without_request() {
    let config = config_with(
        PastebinConfig::default(),
        GyazoConfig {
            auth_url: "http://127.0.0.1:1".to_string(),
            access_token: "already-have-one".to_string(),
            ..GyazoConfig::default()
        },
    );

    let client = ClientFactory::new(&config)
        .unwrap()
        .gyazo_client_with_token()
        .await
        .unwrap();

    assert_eq!(client.gateway().credential(), "already-have-one");
}

#[tokio::test]
async fn test_token_is_fetched_from_client_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "my-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "my-secret".into()),
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fresh-token"}"#)
        .create_async()
        .await;

    let config = config_with(
        PastebinConfig::default(),
        GyazoConfig {
            auth_url: format!("{}/api", server.url()),
            client_id: "my-id".to_string(),
            client_secret: "my-secret".to_string(),
            ..GyazoConfig::default()
        },
    );

    let client = ClientFactory::new(&config)
        .unwrap()
        .gyazo_client_with_token()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(client.gateway().credential(), "fresh-token");
    assert_eq!(client.gateway().base_url(), "https://upload.gyazo.com/api");
}

#[tokio::test]
async fn test_missing_token_and_credentials_is_configuration_error() {
    let factory = ClientFactory::new(&AppConfig::default()).unwrap();

    let err = factory.gyazo_client_with_token().await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    let err = factory.fetch_access_token().await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
