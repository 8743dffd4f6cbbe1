use seer_application::services::DeviceRegistry;
use seer_application::use_cases::devices::{
    GetDevicesUseCase, RefreshDevicesUseCase, RemoveDevicesUseCase, UnblockDeviceUseCase,
};
use seer_domain::{BlockedDevice, DomainError, OutboundMessage};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod helpers;
use helpers::MockBridge;

fn blocked(mac: &str) -> BlockedDevice {
    BlockedDevice {
        mac: mac.to_string(),
        ip: Some("192.168.1.50".to_string()),
    }
}

#[test]
fn test_recently_unblocked_device_is_hidden_from_stale_list() {
    let mut registry = DeviceRegistry::new();
    let start = Instant::now();
    registry.replace_blocked(vec![blocked("AA-BB-CC-DD-EE-FF")], start);

    registry.mark_unblocked("aa:bb:cc:dd:ee:ff", start);
    registry.replace_blocked(
        vec![blocked("AA-BB-CC-DD-EE-FF"), blocked("11:22:33:44:55:66")],
        start + Duration::from_secs(1),
    );

    assert_eq!(registry.blocked().len(), 1);
    assert_eq!(registry.blocked()[0].mac, "11:22:33:44:55:66");
}

#[test]
fn test_suppression_expires() {
    let mut registry = DeviceRegistry::with_suppression(Duration::from_secs(5));
    let start = Instant::now();

    registry.mark_unblocked("aa:bb:cc:dd:ee:ff", start);
    assert!(registry.is_suppressed("AA:BB:CC:DD:EE:FF", start + Duration::from_secs(4)));

    let later = start + Duration::from_secs(6);
    assert!(!registry.is_suppressed("aa:bb:cc:dd:ee:ff", later));
    registry.replace_blocked(vec![blocked("aa:bb:cc:dd:ee:ff")], later);
    assert_eq!(registry.blocked().len(), 1);
}

#[tokio::test]
async fn test_unblock_sends_request_and_drops_device() {
    let registry = DeviceRegistry::shared();
    registry
        .lock()
        .await
        .replace_blocked(vec![blocked("aa:bb:cc:dd:ee:ff")], Instant::now());
    let bridge = Arc::new(MockBridge::new());

    UnblockDeviceUseCase::new(registry.clone(), bridge.clone())
        .execute("AA:BB:CC:DD:EE:FF", Some("192.168.1.50".to_string()))
        .await
        .unwrap();

    assert_eq!(
        bridge.sent(),
        vec![OutboundMessage::UnblockDevice {
            mac: "AA:BB:CC:DD:EE:FF".to_string(),
            ip: Some("192.168.1.50".to_string()),
        }]
    );
    assert!(registry.lock().await.blocked().is_empty());
}

#[tokio::test]
async fn test_unblock_keeps_device_when_send_fails() {
    let registry = DeviceRegistry::shared();
    registry
        .lock()
        .await
        .replace_blocked(vec![blocked("aa:bb:cc:dd:ee:ff")], Instant::now());
    let bridge = Arc::new(MockBridge::failing());

    let result = UnblockDeviceUseCase::new(registry.clone(), bridge)
        .execute("aa:bb:cc:dd:ee:ff", None)
        .await;

    assert!(result.is_err());
    assert_eq!(registry.lock().await.blocked().len(), 1);
}

#[tokio::test]
async fn test_remove_devices_requires_selection() {
    let bridge = Arc::new(MockBridge::new());
    let use_case = RemoveDevicesUseCase::new(bridge.clone());

    assert_eq!(use_case.execute(vec![]), Err(DomainError::NoDevicesSelected));

    use_case
        .execute(vec!["aa:bb:cc:dd:ee:ff".to_string()])
        .unwrap();
    assert_eq!(bridge.sent_topics(), vec!["remove_devices"]);
}

#[tokio::test]
async fn test_refresh_blocked_clears_current_list() {
    let registry = DeviceRegistry::shared();
    registry
        .lock()
        .await
        .replace_blocked(vec![blocked("aa:bb:cc:dd:ee:ff")], Instant::now());
    let bridge = Arc::new(MockBridge::new());
    let refresh = RefreshDevicesUseCase::new(registry.clone(), bridge.clone());

    refresh.blocked().await.unwrap();
    refresh.leases().unwrap();

    assert!(GetDevicesUseCase::new(registry).blocked().await.is_empty());
    assert_eq!(
        bridge.sent_topics(),
        vec!["fetch_blocked_devices", "fetch_devices"]
    );
}
