//! Integration tests for failure normalization

use crate::mock_server::MockServerFixture;
use serde_json::json;
use wa_cloud_messages::types::{QuickReply, TemplateComponents};
use wa_cloud_messages::{ResponseOutcome, WhatsAppClientBuilder};

#[tokio::test]
async fn test_api_error_body_becomes_details() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            400,
            r#"{"error":{"message":"(#131009) Parameter value is not valid","type":"OAuthException","code":131009,"fbtrace_id":"AbC"}}"#,
        )
        .await;

    let outcome = fixture.client().text("15551234567", "hi").await;

    assert_eq!(
        outcome,
        ResponseOutcome::Error {
            error: vec![wa_cloud_messages::types::ErrorEntry::new(
                "Request failed with status code 400",
                Some(json!({
                    "message": "(#131009) Parameter value is not valid",
                    "type": "OAuthException",
                    "code": 131009,
                    "fbtrace_id": "AbC"
                })),
            )]
        }
    );
}

#[tokio::test]
async fn test_error_classification() {
    let test_cases = vec![
        (401, r#"{"error":{"message":"expired","code":190}}"#),
        (429, r#"{"error":{"message":"slow down","code":130429}}"#),
        (500, r#"{"error":{"message":"unknown","code":131000}}"#),
    ];

    for (status, body) in test_cases {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_json_response(status, body).await;
        let outcome = fixture.client().text("15551234567", "hi").await;
        let errors = outcome.errors();
        assert_eq!(errors.len(), 1, "status {}", status);
        assert_eq!(
            errors[0].message,
            format!("Request failed with status code {}", status)
        );
        assert!(errors[0].details.as_ref().unwrap().get("code").is_some());
    }
}

#[tokio::test]
async fn test_success_status_with_wrong_shape_is_schema_failure() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"messaging_product": "whatsapp", "messages": [{"id": "wamid.1"}]});
    let _mock = fixture.mock_json_response(200, &body.to_string()).await;

    let outcome = fixture.client().text("15551234567", "hi").await;
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid schema format");
    assert_eq!(errors[0].details, Some(body));
}

#[tokio::test]
async fn test_non_json_success_body_is_schema_failure() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_raw_response(200, "<html>ok</html>").await;

    let outcome = fixture.client().text("15551234567", "hi").await;
    let errors = outcome.errors();
    assert_eq!(errors[0].message, "Invalid schema format");
    assert_eq!(errors[0].details, Some(json!("<html>ok</html>")));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    let client = WhatsAppClientBuilder::new()
        .access_token("test-token")
        .phone_number_id("1")
        .base_url_override("http://127.0.0.1:1")
        .timeout_secs(2)
        .build()
        .unwrap();

    let outcome = client.text("15551234567", "hi").await;
    let errors = outcome.errors();
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].message.is_empty());
    assert_eq!(errors[0].details, None);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_server() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_untouched().await;

    let components = TemplateComponents::new()
        .quick_reply(QuickReply::new(0, "A"))
        .quick_reply(QuickReply::new(0, "B"));
    let outcome = fixture
        .client()
        .template("15551234567", "poll", "en_US", Some(components))
        .await;

    mock.assert_async().await;
    let errors = outcome.errors();
    assert_eq!(errors[0].message, "duplicate quick reply index 0");
    assert_eq!(
        errors[0].details,
        Some(json!({"field": "template.components.quick_replies[1].index"}))
    );
}
