use lokal_gateway::{ApiResult, Gateway, RequestOptions, Session, NETWORK_ERROR_MESSAGE};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};


#[tokio::test]
async fn test_success_returns_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": 120.5,
            "currency": "ZAR",
            "daily_limit": 5000.0,
            "monthly_limit": 50000.0,
            "daily_spent": 0.0,
            "monthly_spent": 30.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result = gateway.balance().await;

    let balance = result.data().expect("expected data");
    assert_eq!(balance.balance, 120.5);
    assert_eq!(balance.currency, "ZAR");
}

#[tokio::test]
async fn test_error_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wifi/purchase"))
        .respond_with(fixtures::detail(400, "Insufficient balance"))
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result = gateway.purchase_wifi("pkg-1").await;

    assert_eq!(result, ApiResult::Error("Insufficient balance".to_string()));
}

#[tokio::test]
async fn test_error_without_detail_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result = gateway.balance().await;

    assert_eq!(result.error(), Some("Error: 500"));
}

#[tokio::test]
async fn test_validation_error_list_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wallet/topup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "amount"], "msg": "field required" }]
        })))
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result = gateway
        .topup(10.0, lokal_gateway::models::PaymentMethod::Card)
        .await;

    assert_eq!(result.error(), Some("Error: 422"));
}

#[tokio::test]
async fn test_error_with_empty_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    assert_eq!(gateway.me().await.error(), Some("Error: 403"));
}

#[tokio::test]
async fn test_undecodable_success_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    assert_eq!(gateway.balance().await.error(), Some("Error: 200"));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let gateway = fixtures::gateway(fixtures::UNREACHABLE_URL);
    let result = gateway.wifi_packages().await;
    assert_eq!(result.error(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/referrals/stats"))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "referral_code": "LOK123",
            "total_referrals": 2,
            "total_rewards_earned": 20.0,
            "loyalty_points": 250,
            "reward_per_referral": 10.0,
            "points_per_referral": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = fixtures::signed_in_gateway(&server.uri(), "tok-123");
    let result = gateway.referral_stats().await;

    assert!(result.is_data());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wifi/packages"))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "packages": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result = gateway.wifi_packages().await;

    assert_eq!(result, ApiResult::Data(vec![]));
}

#[tokio::test]
async fn test_token_restored_from_file_is_sent() {
    let dir = tempfile::tempdir().unwrap();
    let path_buf = dir.path().join("session.json");
    Session::with_file(&path_buf).set_tokens("persisted", Some("r-1"));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agent/dashboard"))
        .and(header("authorization", "Bearer persisted"))
        .respond_with(fixtures::detail(403, "Not an agent"))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Gateway::new(server.uri(), Arc::new(Session::with_file(&path_buf)));
    let result = gateway.agent_dashboard().await;

    assert_eq!(result.error(), Some("Not an agent"));
}

#[tokio::test]
async fn test_generic_request_with_query_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom"))
        .and(query_param("page", "2"))
        .and(body_json(json!({ "hello": "world" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = fixtures::gateway(&server.uri());
    let result: ApiResult<Value> = gateway
        .request(
            "/custom",
            RequestOptions::post(json!({ "hello": "world" })).param("page", 2),
        )
        .await;

    assert_eq!(result, ApiResult::Data(json!({ "ok": true })));
}

#[tokio::test]
async fn test_clones_share_the_session() {
    let gateway = fixtures::gateway(fixtures::UNREACHABLE_URL);
    let clone = gateway.clone();
    gateway.session().set_token(Some("shared".into()));
    assert_eq!(clone.session().get_token().as_deref(), Some("shared"));
}
