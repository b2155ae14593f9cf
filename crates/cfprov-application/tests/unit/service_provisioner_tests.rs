//! Service provisioner tests

use crate::support::{Failure, RecordingAdapter, StubBrokerClient};
use async_trait::async_trait;
use cfprov_application::{CapabilityScanner, CredentialAggregator, ScanMode, ServiceProvisioner};
use cfprov_domain::ports::ServiceBrokerClient;
use cfprov_domain::{Credentials, Error, Result, ServiceKind, ServiceRequest, TestClass};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn provisioner(
    client: Arc<dyn ServiceBrokerClient>,
    adapter: Arc<RecordingAdapter>,
    mode: ScanMode,
) -> ServiceProvisioner {
    ServiceProvisioner::new(
        CapabilityScanner::with_mode(mode),
        CredentialAggregator::new(client),
        adapter,
    )
}

#[tokio::test]
async fn test_applies_credentials_once_after_success() {
    let adapter = Arc::new(RecordingAdapter::new());
    let provisioner = provisioner(
        Arc::new(StubBrokerClient::new()),
        adapter.clone(),
        ScanMode::Lenient,
    );
    let class = TestClass::new("OrderListenerIT")
        .requires(ServiceKind::RabbitMq)
        .requires(ServiceKind::Redis);

    provisioner
        .create_services_for(&class, &CancellationToken::new())
        .await
        .unwrap();

    let applied = adapter.applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].len(), 2);
    assert!(applied[0].contains(ServiceKind::RabbitMq));
    assert!(applied[0].contains(ServiceKind::Redis));
}

#[tokio::test]
async fn test_class_without_services_applies_empty_set() {
    let adapter = Arc::new(RecordingAdapter::new());
    let client = Arc::new(StubBrokerClient::new());
    let provisioner = provisioner(client.clone(), adapter.clone(), ScanMode::Lenient);

    provisioner
        .create_services_for(&TestClass::new("PureUnitTest"), &CancellationToken::new())
        .await
        .unwrap();

    let applied = adapter.applied();
    assert_eq!(applied.len(), 1);
    assert!(applied[0].is_empty());
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_failure_leaves_environment_untouched() {
    let adapter = Arc::new(RecordingAdapter::new());
    let provisioner = provisioner(
        Arc::new(StubBrokerClient::failing(ServiceKind::Redis, Failure::Broker)),
        adapter.clone(),
        ScanMode::Lenient,
    );
    let class = TestClass::new("OrderListenerIT")
        .requires(ServiceKind::RabbitMq)
        .requires(ServiceKind::Redis);

    let err = provisioner
        .create_services_for(&class, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(err.is_provisioning_failure());
    assert!(adapter.applied().is_empty());
}

#[tokio::test]
async fn test_strict_scan_failure_makes_no_requests() {
    let adapter = Arc::new(RecordingAdapter::new());
    let client = Arc::new(StubBrokerClient::new());
    let provisioner = provisioner(client.clone(), adapter.clone(), ScanMode::Strict);
    let class = TestClass::new("SearchIT").with_marker("elasticsearch");

    let err = provisioner
        .create_services_for(&class, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnrecognizedCapability { .. }));
    assert!(client.calls().is_empty());
    assert!(adapter.applied().is_empty());
}

/// Broker client returning the exact attributes of a RabbitMQ binding
struct RabbitBroker;

#[async_trait]
impl ServiceBrokerClient for RabbitBroker {
    async fn request_credentials(
        &self,
        _request: &ServiceRequest,
        _cancel: &CancellationToken,
    ) -> Result<Credentials> {
        let attributes = serde_json::json!({
            "host": "h",
            "port": 5672,
            "user": "u",
            "pass": "p",
        });
        Ok(serde_json::from_value(attributes)?)
    }
}

#[tokio::test]
async fn test_rabbitmq_credentials_reach_the_adapter() {
    let adapter = Arc::new(RecordingAdapter::new());
    let provisioner = provisioner(Arc::new(RabbitBroker), adapter.clone(), ScanMode::Lenient);
    let class = TestClass::new("OrderListenerIT").with_marker("rabbitmq");

    provisioner
        .create_services_for(&class, &CancellationToken::new())
        .await
        .unwrap();

    let applied = adapter.applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].len(), 1);
    let creds = applied[0].get(ServiceKind::RabbitMq).expect("rabbit bound");
    assert_eq!(creds.hostname(), "h");
    assert_eq!(creds.port(), 5672);
    assert_eq!(creds.username(), Some("u"));
    assert_eq!(creds.password(), Some("p"));
}
