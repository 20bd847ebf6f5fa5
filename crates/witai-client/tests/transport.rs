mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, TOKEN};
use witai_client::WitClient;

#[tokio::test]
async fn default_user_agent_names_the_crate() {
    let server = MockServer::start().await;
    let agent = format!("witai-client/{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path("/intents"))
        .and(header("user-agent", agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let intents = client_for(&server).intents().list().await.unwrap();
    assert!(intents.is_empty());
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entities"))
        .and(header("user-agent", "my-bot/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = WitClient::builder()
        .auth_token(TOKEN)
        .base_url(server.uri())
        .user_agent("my-bot/2.1")
        .build()
        .unwrap();

    let entities = client.entities().list().await.unwrap();
    assert!(entities.is_empty());
}
