//! HTTP API against mocked services and gateway

use crate::common;
use actix_web::{test, web};
use monitor_api::monitoring::MonitoringSystem;
use monitor_api::server::{AppState, HttpServer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[actix_web::test]
async fn test_manual_check_reports_without_touching_board() {
    let service_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&service_server)
        .await;

    let config = common::config_with(vec![common::service_on(&service_server, "frontend")]);
    let state = web::Data::new(AppState::new(common::silent_system(&config)));
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let req = test::TestRequest::post().uri("/check/frontend").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["service"], "Service frontend");
    assert_eq!(body["result"]["status"], "online");
    assert_eq!(body["result"]["error_message"], "");
    assert!(state.monitoring.board().is_empty());
}

#[actix_web::test]
async fn test_status_lists_probed_services() {
    let service_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&service_server)
        .await;

    let service = common::service_on(&service_server, "backend");
    let config = common::config_with(vec![service.clone()]);
    let monitoring = common::silent_system(&config);
    let mut tracker = monitor_api::monitoring::health::FailureTracker::new(2);
    monitoring.run_check_cycle(&service, &mut tracker).await;

    let app = test::init_service(HttpServer::create_app(web::Data::new(AppState::new(
        monitoring,
    ))))
    .await;

    let req = test::TestRequest::get().uri("/status").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let entry = &body["services"]["backend"];
    assert_eq!(entry["name"], "Service backend");
    assert_eq!(entry["url"], service.url);
    assert_eq!(entry["status"], "error");
    assert_eq!(entry["error_message"], "HTTP 502");
    assert!(entry["last_check"].is_string());
}

#[actix_web::test]
async fn test_test_alert_reaches_gateway() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut config = common::config_with(Vec::new());
    config.alerting.whatsapp = common::whatsapp_on(&gateway);
    let monitoring = MonitoringSystem::new(&config).unwrap();
    let app = test::init_service(HttpServer::create_app(web::Data::new(AppState::new(
        monitoring,
    ))))
    .await;

    let req = test::TestRequest::post().uri("/test-alert").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Test sent");
    assert_eq!(body["success"], true);
    assert_eq!(body["phone"], common::PHONE);

    let req = test::TestRequest::get().uri("/alerts?limit=5").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["delivered_notifications"], 1);
    assert_eq!(body["history"][0]["title"], "Notification Test");
}

#[actix_web::test]
async fn test_root_reports_gateway_settings() {
    let gateway = MockServer::start().await;
    let mut config = common::config_with(Vec::new());
    config.alerting.whatsapp = common::whatsapp_on(&gateway);

    let app = test::init_service(HttpServer::create_app(web::Data::new(AppState::new(
        common::silent_system(&config),
    ))))
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Test Monitor");
    assert_eq!(body["services"], 0);
    assert_eq!(body["evolution_api"], gateway.uri());
    assert_eq!(body["instance"], common::INSTANCE);
}
