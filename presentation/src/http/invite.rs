//! `POST /api/invite`

use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use bergs_application::SubmitInquiryError;
use bergs_domain::{DeliveryReport, InquiryPayload, ValidationError};
use serde::Serialize;
use tracing::debug;

/// Success body: `{"ok": true, "details": {...}}`
#[derive(Debug, Serialize)]
pub struct InviteAccepted {
    pub ok: bool,
    pub details: DeliveryReport,
}

pub(super) async fn submit_invite(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<InviteAccepted>, ApiError> {
    let body = body?;
    let payload = decode_payload(&headers, &body)?;
    let details = state.submit_inquiry.execute(payload).await?;
    Ok(Json(InviteAccepted { ok: true, details }))
}

/// Decode a form-encoded or JSON body.
///
/// A body that is not JSON at all is an unexpected fault. Anything other
/// than a JSON object, or an object with wrongly typed fields, is reported
/// as invalid form data.
fn decode_payload(headers: &HeaderMap, body: &[u8]) -> Result<InquiryPayload, ApiError> {
    let malformed = || ApiError::from(SubmitInquiryError::from(ValidationError::Malformed));

    if is_form(headers) {
        debug!("Decoding form-encoded invite");
        return serde_urlencoded::from_bytes(body).map_err(|_| malformed());
    }

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::UnreadableBody(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed());
    }
    serde_json::from_value(value).map_err(|_| malformed())
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

#[cfg(test)]
mod tests {
    use super::super::router;
    use super::*;
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use bergs_application::{DeliveryChannel, DeliveryError, SubmitInquiryUseCase};
    use bergs_domain::{ChannelKind, Inquiry};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Clone, Copy)]
    enum Outcome {
        Unconfigured,
        Succeed,
        Fail,
    }

    struct MockChannel {
        kind: ChannelKind,
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl MockChannel {
        fn new(kind: ChannelKind, outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                kind,
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl DeliveryChannel for MockChannel {
        fn kind(&self) -> ChannelKind {
            self.kind
        }

        fn is_configured(&self) -> bool {
            !matches!(self.outcome, Outcome::Unconfigured)
        }

        async fn send(&self, _inquiry: &Inquiry) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Succeed => Ok(()),
                Outcome::Fail => Err(DeliveryError::Rejected {
                    status: 500,
                    detail: "provider unavailable".to_string(),
                }),
                Outcome::Unconfigured => Err(DeliveryError::NotConfigured),
            }
        }
    }

    fn app(email: Outcome, whatsapp: Outcome) -> (Router, Arc<MockChannel>, Arc<MockChannel>) {
        let email = MockChannel::new(ChannelKind::Email, email);
        let whatsapp = MockChannel::new(ChannelKind::WhatsApp, whatsapp);
        let channels: Vec<Arc<dyn DeliveryChannel>> = vec![email.clone(), whatsapp.clone()];
        let state = AppState::new(SubmitInquiryUseCase::new(channels));
        (router(state), email, whatsapp)
    }

    fn valid_invite() -> Value {
        json!({
            "name": "Ada Lovelace",
            "mobile": "+44 20 7946 0958",
            "email": "ada@example.com",
            "message": "We would love an invite to the next roundtable."
        })
    }

    async fn post(app: Router, content_type: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/invite")
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: Router, body: &Value) -> (StatusCode, Value) {
        post(app, "application/json", body.to_string()).await
    }

    #[tokio::test]
    async fn test_nothing_configured_is_503() {
        let (app, email, whatsapp) = app(Outcome::Unconfigured, Outcome::Unconfigured);
        let (status, body) = post_json(app, &valid_invite()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({
                "error": "Invite delivery is not configured.",
                "details": {
                    "email": {"ok": false, "error": "Email service is not configured", "skipped": true},
                    "whatsapp": {"ok": false, "error": "WhatsApp service is not configured", "skipped": true}
                }
            })
        );
        assert_eq!(email.calls.load(Ordering::SeqCst), 0);
        assert_eq!(whatsapp.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_is_400_without_delivery() {
        let (app, email, _) = app(Outcome::Succeed, Outcome::Succeed);
        let mut invite = valid_invite();
        invite["email"] = json!("not-an-email");

        let (status, body) = post_json(app, &invite).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "A valid email is required"}));
        assert_eq!(email.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_configured_channel_succeeds() {
        let (app, _, _) = app(Outcome::Succeed, Outcome::Unconfigured);
        let (status, body) = post_json(app, &valid_invite()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["details"]["email"], json!({"ok": true}));
        assert_eq!(body["details"]["whatsapp"]["skipped"], json!(true));
    }

    #[tokio::test]
    async fn test_partial_success_is_200_with_mixed_details() {
        let (app, _, _) = app(Outcome::Fail, Outcome::Succeed);
        let (status, body) = post_json(app, &valid_invite()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["details"]["email"],
            json!({"ok": false, "error": "Email failed: provider unavailable"})
        );
        assert_eq!(body["details"]["whatsapp"], json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_all_configured_failing_is_502() {
        let (app, _, _) = app(Outcome::Fail, Outcome::Fail);
        let (status, body) = post_json(app, &valid_invite()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], json!("Invite delivery failed."));
        assert_eq!(body["details"]["email"]["ok"], json!(false));
        assert_eq!(body["details"]["whatsapp"]["ok"], json!(false));
    }

    #[tokio::test]
    async fn test_non_json_body_is_500() {
        let (app, email, _) = app(Outcome::Succeed, Outcome::Succeed);
        let (status, body) = post(app, "application/json", "name=Ada").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Unexpected server error."}));
        assert_eq!(email.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrongly_typed_json_is_invalid_form_data() {
        let (app, _, _) = app(Outcome::Succeed, Outcome::Succeed);
        let mut invite = valid_invite();
        invite["name"] = json!(42);

        let (status, body) = post_json(app, &invite).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid form data"}));
    }

    #[tokio::test]
    async fn test_positional_json_array_is_invalid_form_data() {
        let (app, email, whatsapp) = app(Outcome::Succeed, Outcome::Succeed);
        let body = json!([
            "Ada Lovelace",
            "+44 20 7946 0958",
            "ada@example.com",
            "We would love an invite to the roundtable."
        ]);

        let (status, body) = post_json(app, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid form data"}));
        assert_eq!(email.calls.load(Ordering::SeqCst), 0);
        assert_eq!(whatsapp.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_decode_rejects_non_object_json() {
        let headers = HeaderMap::new();
        for body in [&b"[]"[..], b"null", b"\"Ada\"", b"42"] {
            assert!(matches!(
                decode_payload(&headers, body),
                Err(ApiError::Submit(SubmitInquiryError::Invalid(
                    ValidationError::Malformed
                )))
            ));
        }
        assert!(decode_payload(&headers, br#"{"name":"Ada"}"#).is_ok());
    }

    #[tokio::test]
    async fn test_form_encoded_with_phone_alias() {
        let (app, email, _) = app(Outcome::Succeed, Outcome::Unconfigured);
        let form = "name=Ada+Lovelace&phone=%2B44+20+7946+0958&email=ada%40example.com\
                    &message=Please+add+me+to+the+list.";

        let (status, body) = post(app, "application/x-www-form-urlencoded", form).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
        assert_eq!(email.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_oversized_body_is_json_413() {
        let (app, email, _) = app(Outcome::Succeed, Outcome::Succeed);
        let mut invite = valid_invite();
        invite["message"] = json!("x".repeat(crate::http::MAX_BODY_BYTES + 1));

        let (status, body) = post_json(app, &invite).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body, json!({"error": "Request body is too large."}));
        assert_eq!(email.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_healthz() {
        let (app, _, _) = app(Outcome::Unconfigured, Outcome::Unconfigured);
        let request = Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }
}
