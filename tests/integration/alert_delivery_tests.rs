//! Alert delivery through the Evolution API gateway

use crate::common;
use monitor_api::config::{AlertingConfig, ServiceConfig};
use monitor_api::monitoring::alerts::{AlertManager, NotificationChannel, WhatsAppChannel, messages};
use monitor_api::monitoring::{AlertSeverity, ServiceState};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend() -> ServiceConfig {
    ServiceConfig::new("backend", "Backend API", "https://api.example.com/health")
}

#[tokio::test]
async fn test_whatsapp_posts_text_with_api_key() {
    let gateway = MockServer::start().await;
    let alert = messages::test_notice();

    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .and(header("apikey", common::API_KEY))
        .and(body_json(serde_json::json!({
            "number": common::PHONE,
            "text": alert.description,
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&gateway)
        .await;

    let channel = WhatsAppChannel::new(&common::whatsapp_on(&gateway), AlertSeverity::Info).unwrap();
    channel.send(&alert).await.unwrap();
}

#[tokio::test]
async fn test_whatsapp_accepts_200() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&gateway)
        .await;

    let channel = WhatsAppChannel::new(&common::whatsapp_on(&gateway), AlertSeverity::Info).unwrap();
    assert!(channel.send(&messages::test_notice()).await.is_ok());
}

#[tokio::test]
async fn test_whatsapp_rejection_is_notification_error() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid apikey"))
        .mount(&gateway)
        .await;

    let channel = WhatsAppChannel::new(&common::whatsapp_on(&gateway), AlertSeverity::Info).unwrap();
    let err = channel.send(&messages::test_notice()).await.unwrap_err();

    assert_eq!(err.error_code(), "NOTIFICATION_ERROR");
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("invalid apikey"));
}

#[tokio::test]
async fn test_manager_counts_gateway_failures() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&gateway)
        .await;

    let config = AlertingConfig {
        whatsapp: common::whatsapp_on(&gateway),
        slack_webhook: None,
    };
    let manager = AlertManager::new(&config).unwrap();

    let alert = messages::service_down("Monitor", &backend(), ServiceState::Offline, "boom");
    assert!(!manager.send_alert(alert).await);

    let stats = manager.get_stats();
    assert_eq!(stats.total_alerts, 1);
    assert_eq!(stats.failed_notifications, 1);
    assert_eq!(stats.delivered_notifications, 0);
    assert_eq!(manager.get_history(None).len(), 1);
}

#[tokio::test]
async fn test_manager_delivers_to_whatsapp_and_slack() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&gateway)
        .await;

    let slack = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&slack)
        .await;

    let config = AlertingConfig {
        whatsapp: common::whatsapp_on(&gateway),
        slack_webhook: Some(format!("{}/hook", slack.uri())),
    };
    let manager = AlertManager::new(&config).unwrap();

    assert!(manager.send_alert(messages::service_recovered("Monitor", &backend())).await);
    assert_eq!(manager.get_stats().delivered_notifications, 2);

    let requests = slack.received_requests().await.unwrap();
    let payload: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(payload["attachments"][0]["title"], "Backend API recovered");
}
