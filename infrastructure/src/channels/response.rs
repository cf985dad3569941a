//! Shared provider response handling

use bergs_application::DeliveryError;
use bergs_domain::core::text::truncate;

/// Longest provider response body kept in an error detail
const MAX_DETAIL_LEN: usize = 500;

/// Turn a provider response into `Ok(())` on 2xx, or a [`DeliveryError::Rejected`]
/// carrying the response text.
pub(super) async fn check_response(response: reqwest::Response) -> Result<(), DeliveryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    let detail = if body.trim().is_empty() {
        format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )
    } else {
        truncate(body.trim(), MAX_DETAIL_LEN)
    };

    Err(DeliveryError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

/// Describe a request that never produced a response
pub(super) fn transport_error(err: reqwest::Error) -> DeliveryError {
    DeliveryError::Transport(err.to_string())
}
