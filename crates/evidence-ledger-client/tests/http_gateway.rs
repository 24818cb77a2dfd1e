//! HTTP gateway client against a mock ledger gateway.

use std::sync::Arc;

use evidence_core::IdentityLabel;
use evidence_ledger_client::{
    Contract, Credential, GatewayConnector, HttpGatewayConnector, LedgerError, ProfileTemplate,
    ResolvedIdentity,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

fn identity() -> ResolvedIdentity {
    ResolvedIdentity {
        label: IdentityLabel::new("appUser"),
        credential: Credential {
            msp_id: "Org1MSP".into(),
            certificate: "unused over plain http".into(),
            private_key: Zeroizing::new("unused over plain http".into()),
        },
    }
}

async fn channel_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/mychannel"))
        .and(header("x-ledger-identity", "appUser"))
        .and(header("x-ledger-msp-id", "Org1MSP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "mychannel"})))
        .mount(server)
        .await;
}

async fn bind(server: &MockServer) -> Arc<dyn Contract> {
    let profile = ProfileTemplate {
        gateway_url: server.uri(),
        ..ProfileTemplate::default()
    }
    .render()
    .unwrap();
    let gateway = HttpGatewayConnector::default()
        .connect(&profile, &identity())
        .await
        .unwrap();
    gateway.network("mychannel").await.unwrap().contract("evidencecc")
}

#[tokio::test]
async fn submit_posts_function_and_args_and_returns_body() {
    let server = MockServer::start().await;
    channel_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/channels/mychannel/contracts/evidencecc/submit"))
        .and(body_json(json!({
            "function": "UpdateStatus",
            "args": ["E1", "sealed"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("0xdeadbeef"))
        .expect(1)
        .mount(&server)
        .await;

    let contract = bind(&server).await;
    let result = contract.submit("UpdateStatus", &["E1", "sealed"]).await.unwrap();
    assert_eq!(result, b"0xdeadbeef");
}

#[tokio::test]
async fn evaluate_uses_evaluate_endpoint() {
    let server = MockServer::start().await;
    channel_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/channels/mychannel/contracts/evidencecc/evaluate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"log.txt"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let contract = bind(&server).await;
    let result = contract.evaluate("GetEvidence", &["E1"]).await.unwrap();
    assert_eq!(result, br#"{"name":"log.txt"}"#);
}

#[tokio::test]
async fn rejected_submit_is_not_retried_and_keeps_message() {
    let server = MockServer::start().await;
    channel_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/channels/mychannel/contracts/evidencecc/submit"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "evidence E9 does not exist"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let contract = bind(&server).await;
    let err = contract.submit("UpdateStatus", &["E9", "sealed"]).await.unwrap_err();
    match &err {
        LedgerError::Rejected { status, message, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "evidence E9 does not exist");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(err.upstream_message(), "evidence E9 does not exist");
}

#[tokio::test]
async fn unknown_channel_fails_network_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/channels/mychannel"))
        .respond_with(ResponseTemplate::new(404).set_body_string("channel not found"))
        .mount(&server)
        .await;

    let profile = ProfileTemplate {
        gateway_url: server.uri(),
        ..ProfileTemplate::default()
    }
    .render()
    .unwrap();
    let gateway = HttpGatewayConnector::default()
        .connect(&profile, &identity())
        .await
        .unwrap();

    let err = gateway.network("mychannel").await.err().unwrap();
    assert!(matches!(err, LedgerError::Rejected { status: 404, .. }));
    assert_eq!(err.upstream_message(), "channel not found");
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let profile = ProfileTemplate {
        gateway_url: "http://127.0.0.1:1".into(),
        ..ProfileTemplate::default()
    }
    .render()
    .unwrap();
    let gateway = HttpGatewayConnector::default()
        .connect(&profile, &identity())
        .await
        .unwrap();

    let err = gateway.network("mychannel").await.err().unwrap();
    assert!(err.outcome_unknown());
}

#[tokio::test]
async fn empty_error_body_reports_status_reason() {
    let server = MockServer::start().await;
    channel_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/channels/mychannel/contracts/evidencecc/submit"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let contract = bind(&server).await;
    let err = contract.submit("AddEvidence", &["log.txt"]).await.unwrap_err();
    assert!(matches!(err, LedgerError::Rejected { status: 503, .. }));
    assert_eq!(err.upstream_message(), "Service Unavailable");
    assert_eq!(
        err.to_string(),
        "submit evidencecc:AddEvidence returned 503: Service Unavailable"
    );
}
