//! Tests for broker envelopes

use cfprov_domain::{
    BrokerError, CreateServiceReply, CreateServiceRequest, Credentials, ServiceKind,
    ServiceRequest,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn test_request_carries_fresh_correlation_id() {
    let request = ServiceRequest::for_kind(ServiceKind::RabbitMq);
    let first = CreateServiceRequest::new(&request);
    let second = CreateServiceRequest::new(&request);

    assert_ne!(first.correlation_id, second.correlation_id);
    assert_eq!(first.instance_name, "rabbit-test");
    assert_eq!(first.service, ServiceKind::RabbitMq);
    assert_eq!(first.version, "2.8");
}

#[test]
fn test_request_wire_shape() {
    let id = Uuid::new_v4();
    let request = CreateServiceRequest::with_correlation_id(
        id,
        &ServiceRequest::for_kind(ServiceKind::Redis),
    );
    let json = serde_json::to_value(&request).expect("encode");

    assert_eq!(json["correlation_id"], id.to_string());
    assert_eq!(json["instance_name"], "redis-test");
    assert_eq!(json["service"], "redis");
    assert_eq!(json["version"], "2.6");
}

#[test]
fn test_reply_outcome() {
    let id = Uuid::new_v4();
    let created = CreateServiceReply::created(id, Credentials::new("h", 1));
    assert_eq!(created.into_outcome().expect("credentials").hostname(), "h");

    let failed = CreateServiceReply::failed(id, BrokerError::new("quota exceeded"));
    assert_eq!(failed.into_outcome().unwrap_err().message, "quota exceeded");
}

#[test]
fn test_reply_error_wins_over_credentials() {
    let reply = CreateServiceReply {
        correlation_id: Uuid::new_v4(),
        credentials: Some(Credentials::new("h", 1)),
        error: Some(BrokerError::new("boom").with_code("500")),
    };
    let err = reply.into_outcome().unwrap_err();
    assert_eq!(err.code.as_deref(), Some("500"));
}

#[test]
fn test_empty_reply_is_an_error() {
    let reply: CreateServiceReply =
        serde_json::from_value(json!({"correlation_id": Uuid::new_v4()})).expect("decode");
    assert!(reply.into_outcome().is_err());
}

#[test]
fn test_reply_decodes_broker_credentials() {
    let id = Uuid::new_v4();
    let reply: CreateServiceReply = serde_json::from_value(json!({
        "correlation_id": id,
        "credentials": {"host": "h", "port": 5672, "user": "u", "pass": "p"}
    }))
    .expect("decode");

    assert_eq!(reply.correlation_id, id);
    let creds = reply.into_outcome().expect("credentials");
    assert_eq!(creds.username(), Some("u"));
}

fn payload(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).expect("encode")
}

#[test]
fn test_decode_reply_with_missing_port_fails_the_request() {
    let id = Uuid::new_v4();
    let reply = CreateServiceReply::decode(&payload(json!({
        "correlation_id": id,
        "credentials": {"host": "h"}
    })))
    .expect("envelope decodes");

    assert_eq!(reply.correlation_id, id);
    let error = reply.into_outcome().unwrap_err();
    assert!(error.message.contains("port"), "got {}", error.message);
}

#[test]
fn test_decode_reply_with_mistyped_attribute_names_it() {
    let reply = CreateServiceReply::decode(&payload(json!({
        "correlation_id": Uuid::new_v4(),
        "credentials": {"host": "h", "port": 5672, "name": 7}
    })))
    .expect("envelope decodes");

    let error = reply.into_outcome().unwrap_err();
    assert!(error.message.contains("'name'"), "got {}", error.message);
}

#[test]
fn test_decode_reply_keeps_broker_error() {
    let reply = CreateServiceReply::decode(&payload(json!({
        "correlation_id": Uuid::new_v4(),
        "error": {"message": "quota exceeded", "code": "CF-Quota"}
    })))
    .expect("envelope decodes");

    assert_eq!(
        reply.into_outcome().unwrap_err(),
        BrokerError::new("quota exceeded").with_code("CF-Quota")
    );
}

#[test]
fn test_decode_valid_reply() {
    let reply = CreateServiceReply::decode(&payload(json!({
        "correlation_id": Uuid::new_v4(),
        "credentials": {"hostname": "h", "port": "6379", "password": "p"}
    })))
    .expect("envelope decodes");

    let creds = reply.into_outcome().expect("credentials");
    assert_eq!(creds.port(), 6379);
    assert_eq!(creds.password(), Some("p"));
}

#[test]
fn test_decode_without_correlation_id_is_an_error() {
    assert!(CreateServiceReply::decode(br#"{"credentials": {"host": "h", "port": 1}}"#).is_err());
    assert!(CreateServiceReply::decode(b"not json").is_err());
}
