//! Probe cycles driving the failure tracker and alerts

use crate::common;
use monitor_api::monitoring::health::{FailureTracker, Transition};
use monitor_api::monitoring::{MonitoringSystem, ServiceState};
use monitor_api::monitoring::alerts::AlertManager;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_health(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn gateway_texts(gateway: &MockServer) -> Vec<String> {
    gateway
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| r.body_json::<serde_json::Value>().ok())
        .filter_map(|body| body["text"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_outage_alerts_once_then_recovers() {
    let service_server = MockServer::start().await;
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(201))
        .mount(&gateway)
        .await;

    let service = common::service_on(&service_server, "api");
    let mut config = common::config_with(vec![service.clone()]);
    config.alerting.whatsapp = common::whatsapp_on(&gateway);
    let system = MonitoringSystem::new(&config).unwrap();
    let mut tracker = FailureTracker::new(config.monitor.failure_threshold);

    mount_health(&service_server, 503).await;

    // Below the threshold nothing is sent
    assert_eq!(system.run_check_cycle(&service, &mut tracker).await, None);
    assert!(gateway_texts(&gateway).await.is_empty());

    assert_eq!(
        system.run_check_cycle(&service, &mut tracker).await,
        Some(Transition::Down)
    );
    assert_eq!(system.run_check_cycle(&service, &mut tracker).await, None);

    let texts = gateway_texts(&gateway).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("*Service:* Service api"));
    assert!(texts[0].contains("*Status:* ERROR"));
    assert!(texts[0].contains("*Error:* HTTP 503"));

    let status = system.board().get("api").unwrap();
    assert_eq!(status.status, ServiceState::Error);
    assert_eq!(status.error_message, "HTTP 503");

    service_server.reset().await;
    mount_health(&service_server, 200).await;

    assert_eq!(
        system.run_check_cycle(&service, &mut tracker).await,
        Some(Transition::Recovered)
    );
    assert_eq!(system.run_check_cycle(&service, &mut tracker).await, None);

    let texts = gateway_texts(&gateway).await;
    assert_eq!(texts.len(), 2);
    assert!(texts[1].starts_with("✅"));
    assert!(texts[1].contains("Service recovered"));
    assert_eq!(system.board().get("api").unwrap().status, ServiceState::Online);
    assert_eq!(tracker.consecutive_failures(), 0);
}

#[tokio::test]
async fn test_single_failure_does_not_alert() {
    let service_server = MockServer::start().await;
    let service = common::service_on(&service_server, "api");
    let config = common::config_with(vec![service.clone()]);
    let system = common::silent_system(&config);
    let mut tracker = FailureTracker::new(config.monitor.failure_threshold);

    mount_health(&service_server, 500).await;
    assert_eq!(system.run_check_cycle(&service, &mut tracker).await, None);

    service_server.reset().await;
    mount_health(&service_server, 200).await;
    assert_eq!(system.run_check_cycle(&service, &mut tracker).await, None);

    assert_eq!(system.alerts().get_stats().total_alerts, 0);
}

#[tokio::test]
async fn test_started_system_probes_in_background() {
    let service_server = MockServer::start().await;
    mount_health(&service_server, 200).await;

    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(common::send_text_path()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&gateway)
        .await;

    let mut config = common::config_with(vec![
        common::service_on(&service_server, "a"),
        common::service_on(&service_server, "b"),
    ]);
    config.alerting.whatsapp = common::whatsapp_on(&gateway);
    let system = MonitoringSystem::new(&config).unwrap();

    system.start().await.unwrap();
    assert!(system.is_active());

    let mut attempts = 0;
    while system.board().len() < 2 && attempts < 50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        attempts += 1;
    }
    system.stop();

    assert!(!system.is_active());
    let snapshot = system.status_snapshot();
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.values().all(|s| s.status == ServiceState::Online));

    let texts = gateway_texts(&gateway).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Monitoring 2 services."));
}

#[tokio::test]
async fn test_stopped_system_can_be_dropped_without_alerts() {
    let config = common::config_with(Vec::new());
    let system =
        MonitoringSystem::with_alert_manager(&config, AlertManager::with_channels(Vec::new()))
            .unwrap();

    system.stop();
    assert!(!system.is_active());
    assert!(system.status_snapshot().is_empty());
}
