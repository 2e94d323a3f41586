//! Successful sends through the reqwest transport

use crate::mock_server::MockServerFixture;
use serde_json::json;
use wa_cloud_messages::types::{
    CardButton, CardHeader, CarouselCard, CarouselTemplate, MediaLink, MediaReference,
    TemplateComponents, TemplateParameter,
};
use wa_cloud_messages::ResponseOutcome;

#[tokio::test]
async fn test_text_send_posts_envelope_and_returns_success() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_body(json!({
            "messaging_product": "whatsapp",
            "recipient_type": "individual",
            "to": "15551234567",
            "type": "text",
            "text": {"preview_url": true, "body": "hi"}
        }))
        .await;

    let outcome = fixture.client().text("15551234567", "hi").await;
    mock.assert_async().await;

    match outcome {
        ResponseOutcome::Success(resp) => {
            assert_eq!(resp.messaging_product, "whatsapp");
            assert_eq!(resp.contacts[0].input, "15551234567");
            assert_eq!(resp.messages[0].id, "wamid.HBgLMTU1NTEyMzQ1NjcVAgARGBI");
            assert_eq!(resp.messages[0].message_status.as_deref(), Some("accepted"));
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_image_send_strips_media_tag() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_body(json!({"type": "image", "image": {"id": "abc"}}))
        .await;

    let media: MediaReference = serde_json::from_value(json!({"type": "id", "id": "abc"})).unwrap();
    let outcome = fixture.client().image("15551234567", media).await;

    mock.assert_async().await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_template_send_includes_components() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_body(json!({
            "type": "template",
            "template": {
                "name": "order_shipped",
                "language": {"code": "en_US"},
                "components": [
                    {"type": "body", "parameters": [{"type": "text", "text": "#4411"}]}
                ]
            }
        }))
        .await;

    let outcome = fixture
        .client()
        .template(
            "15551234567",
            "order_shipped",
            "en_US",
            Some(TemplateComponents::new().body(vec![TemplateParameter::text("#4411")])),
        )
        .await;

    mock.assert_async().await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_media_carousel_send() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_body(json!({
            "type": "template",
            "template": {
                "name": "spring_promo",
                "components": [{
                    "type": "carousel",
                    "cards": [{
                        "card_index": 0,
                        "components": [
                            {"type": "header", "parameters": [{"type": "image", "image": {"link": "1234"}}]},
                            {
                                "type": "button",
                                "sub_type": "quick_reply",
                                "index": 0,
                                "parameters": [{"type": "payload", "payload": "MORE"}]
                            }
                        ]
                    }]
                }]
            }
        }))
        .await;

    let template = CarouselTemplate {
        name: "spring_promo".into(),
        language: "en_US".into(),
        body: None,
        cards: vec![CarouselCard {
            header: CardHeader::Image {
                image: MediaLink::id("1234"),
            },
            body: None,
            buttons: vec![CardButton::QuickReply {
                index: 0,
                payload: "MORE".into(),
            }],
        }],
    };
    let outcome = fixture.client().media_carousel("15551234567", template).await;

    mock.assert_async().await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_authorization_override_wins_in_any_case() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_header("authorization", "Bearer other", 10)
        .await;

    for _ in 0..10 {
        let outcome = fixture
            .client_with_header("authorization", "Bearer other")
            .text("15551234567", "hi")
            .await;
        assert!(outcome.is_success(), "override not sent: {:?}", outcome);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_content_type_override_reaches_the_wire() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_header("content-type", "application/json; charset=utf-8", 1)
        .await;

    let outcome = fixture
        .client_with_header("Content-Type", "application/json; charset=utf-8")
        .text("15551234567", "hi")
        .await;

    mock.assert_async().await;
    assert!(outcome.is_success());
}
