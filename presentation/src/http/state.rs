//! Shared request state

use bergs_application::SubmitInquiryUseCase;
use std::sync::Arc;

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub submit_inquiry: Arc<SubmitInquiryUseCase>,
}

impl AppState {
    pub fn new(submit_inquiry: SubmitInquiryUseCase) -> Self {
        Self {
            submit_inquiry: Arc::new(submit_inquiry),
        }
    }
}
