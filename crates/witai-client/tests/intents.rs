mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, lists_only_client_for};

#[tokio::test]
async fn list_intents_sends_auth_and_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/intents"))
        .and(query_param("v", "20220511"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "2690212494559269", "name": "buy_car"},
            {"id": "254954985556896", "name": "wit$get_weather"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let intents = client_for(&server).intents().list().await.unwrap();

    assert_eq!(intents.len(), 2);
    assert_eq!(intents[0].name, "buy_car");
    assert!(intents[0].is_custom);
    assert_eq!(intents[1].name, "get_weather");
    assert!(!intents[1].is_custom);
    assert_eq!(intents[1].confidence, 0.0);
}

#[tokio::test]
async fn get_intent_normalizes_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/intents/wit$get_weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "254954985556896",
            "name": "wit$get_weather",
            "entities": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intent = client_for(&server)
        .intents()
        .get("wit$get_weather")
        .await
        .unwrap();

    assert_eq!(intent.name, "get_weather");
    assert!(!intent.is_custom);
}

#[tokio::test]
async fn get_intent_lists_only_returns_raw_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/intents/wit$get_weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "254954985556896",
            "name": "wit$get_weather"
        })))
        .mount(&server)
        .await;

    let intent = lists_only_client_for(&server)
        .intents()
        .get("wit$get_weather")
        .await
        .unwrap();

    assert_eq!(intent.name, "wit$get_weather");
    assert!(!intent.is_custom);
}

#[tokio::test]
async fn lists_only_still_normalizes_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/intents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "1", "name": "wit$greetings"}])),
        )
        .mount(&server)
        .await;

    let intents = lists_only_client_for(&server).intents().list().await.unwrap();
    assert_eq!(intents[0].name, "greetings");
    assert!(!intents[0].is_custom);
}

#[tokio::test]
async fn get_intent_rejects_empty_name_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).intents().get("").await.unwrap_err();
    assert!(matches!(err, witai_client::Error::InvalidInput(_)));
}

#[tokio::test]
async fn create_intent_slugs_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intents"))
        .and(query_param("v", "20220511"))
        .and(body_json(json!({"name": "book_flight"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "13989798788", "name": "book_flight"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let intent = client_for(&server)
        .intents()
        .create("Book Flight")
        .await
        .unwrap();

    assert_eq!(intent.id, "13989798788");
    assert_eq!(intent.name, "book_flight");
    assert!(intent.is_custom);
}

#[tokio::test]
async fn create_intent_keeps_repeated_spaces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/intents"))
        .and(body_json(json!({"name": "check__status"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "check__status"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let intent = client_for(&server)
        .intents()
        .create("Check  Status")
        .await
        .unwrap();
    assert_eq!(intent.name, "check__status");
}

#[tokio::test]
async fn delete_intent_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/intents/buy_flowers"))
        .and(query_param("v", "20220511"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": "buy_flowers"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .intents()
        .delete("buy_flowers")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_intent_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/intents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Intent not found",
            "code": "not-found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .intents()
        .delete("missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: Intent not found");
}

#[tokio::test]
async fn intent_name_is_a_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/intents/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "a/b"})))
        .expect(1)
        .mount(&server)
        .await;

    let intent = client_for(&server).intents().get("a/b").await.unwrap();
    assert_eq!(intent.name, "a/b");
}
