use std::sync::Arc;

use crate::copywriter::session::SessionStore;
use crate::llm_client::GeminiClient;
use crate::usage::UsageSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    pub sessions: SessionStore,
    /// Pluggable best-effort usage sink. Webhook when USAGE_LOG_URL is set,
    /// noop otherwise — swapped at startup.
    pub usage: Arc<dyn UsageSink>,
}
