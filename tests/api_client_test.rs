use std::time::Duration;

use course_cart::clients::{ApiClient, ApiError, LessonApi, RequestOptions};
use course_cart::config::{messages, ApiConfig};
use course_cart::model::OrderRequest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lesson_json(id: &str, subject: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "subject": subject,
        "location": "Hendon",
        "price": 90,
        "spaces": 5,
        "image": format!("{id}.png"),
        "icon": "fa-book"
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::new(server.uri())).expect("client")
}

#[tokio::test]
async fn test_get_lessons_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([lesson_json("a", "Maths"), lesson_json("b", "Music")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lessons = client_for(&server).get_lessons().await.unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[1].subject, "Music");
    assert_eq!(lessons[0].icon.as_deref(), Some("fa-book"));
}

#[tokio::test]
async fn test_search_sends_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "art & design"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([lesson_json("c", "Art & Design")])))
        .expect(1)
        .mount(&server)
        .await;

    let lessons = client_for(&server).search_lessons("  art & design ").await.unwrap();
    assert_eq!(lessons[0].id, "c");
}

#[tokio::test]
async fn test_create_order_posts_json() {
    let server = MockServer::start().await;
    let order = OrderRequest {
        name: "Ann Lee".into(),
        phone: "07123456789".into(),
        lesson_ids: vec!["a".into(), "b".into()],
        num_spaces: vec![1, 2],
    };
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({
            "name": "Ann Lee",
            "phone": "07123456789",
            "lessonIDs": ["a", "b"],
            "numSpaces": [1, 2]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "order-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).create_order(&order).await.unwrap();
    assert_eq!(created["_id"], "order-1");
}

#[tokio::test]
async fn test_update_lesson_spaces_puts_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/lessons/a"))
        .and(body_json(json!({"spaces": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(lesson_json("a", "Maths")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).update_lesson_spaces("a", 3).await.unwrap();
}

#[tokio::test]
async fn test_custom_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .and(header("content-type", "text/plain"))
        .and(header("x-client", "cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::get()
        .header("Content-Type", "text/plain")
        .header("X-Client", "cart");
    let body = client_for(&server).send("/lessons", options).await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_error_field_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Lesson is full"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request("/orders", RequestOptions::post(json!({})))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 400,
            message: "Lesson is full".into()
        }
    );
    assert_eq!(err.user_message(), "Lesson is full");
}

#[tokio::test]
async fn test_server_error_without_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_lessons().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
    assert_eq!(err.user_message(), messages::SERVER_ERROR);
}

#[tokio::test]
async fn test_non_json_error_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nothing here"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_lesson("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_wrong_shape_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lessons": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lessons/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.get_lessons().await,
        Err(ApiError::UnexpectedResponse("array"))
    );
    assert!(matches!(client.get_lesson("a").await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(&config).unwrap();

    let err = client.get_lessons().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
    assert_eq!(err.user_message(), messages::TIMEOUT);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:1")).unwrap();

    let err = client.get_lessons().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    assert_eq!(err.user_message(), messages::NETWORK);
}
