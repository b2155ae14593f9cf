//! Tests for the service kind tables

use cfprov_domain::{ServiceKind, ServiceRequest};

#[test]
fn test_instance_names_are_fixed() {
    assert_eq!(ServiceKind::RabbitMq.instance_name(), "rabbit-test");
    assert_eq!(ServiceKind::Redis.instance_name(), "redis-test");
}

#[test]
fn test_from_marker_resolves_every_kind() {
    for kind in ServiceKind::ALL {
        assert_eq!(ServiceKind::from_marker(kind.marker()), Some(kind));
    }
}

#[test]
fn test_from_marker_ignores_case_and_whitespace() {
    assert_eq!(ServiceKind::from_marker(" RabbitMQ "), Some(ServiceKind::RabbitMq));
    assert_eq!(ServiceKind::from_marker("REDIS"), Some(ServiceKind::Redis));
}

#[test]
fn test_from_marker_unknown() {
    assert_eq!(ServiceKind::from_marker("postgres"), None);
    assert_eq!(ServiceKind::from_marker(""), None);
}

#[test]
fn test_labels() {
    assert_eq!(ServiceKind::RabbitMq.label(), "rabbitmq-2.8");
    assert_eq!(ServiceKind::Redis.label(), "redis-2.6");
}

#[test]
fn test_serde_uses_markers() {
    let json = serde_json::to_string(&ServiceKind::RabbitMq).expect("serialize");
    assert_eq!(json, "\"rabbitmq\"");
    let kind: ServiceKind = serde_json::from_str("\"redis\"").expect("deserialize");
    assert_eq!(kind, ServiceKind::Redis);
}

#[test]
fn test_request_for_kind_uses_fixed_name() {
    let request = ServiceRequest::for_kind(ServiceKind::Redis);
    assert_eq!(request.instance_name, "redis-test");
    assert_eq!(request.kind, ServiceKind::Redis);
}

#[test]
fn test_display() {
    assert_eq!(ServiceKind::RabbitMq.to_string(), "RabbitMQ");
    assert_eq!(ServiceKind::Redis.to_string(), "Redis");
}
