//! Usage recording — best-effort sink for submitted drafts and the headline
//! they produced.
//!
//! `AppState` holds an `Arc<dyn UsageSink>`, chosen at startup:
//! `WebhookUsageSink` when `USAGE_LOG_URL` is set, `NoopUsageSink` otherwise.
//! A sink failure is logged and dropped by the caller — it never blocks the
//! success presentation or turns into an Error state.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::copywriter::draft::ProductDraft;

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("usage endpoint returned status {0}")]
    Api(u16),
}

/// One recorded submission: the full draft plus the generated headline.
#[derive(Debug, Clone, Serialize)]
pub struct UsageRecord {
    pub user_name: String,
    pub product_name: String,
    pub region: String,
    pub season: String,
    pub features: String,
    pub producer_story: String,
    pub target: String,
    pub tone: String,
    pub format: String,
    pub headline: String,
    pub logged_at: DateTime<Utc>,
}

impl UsageRecord {
    pub fn from_draft(draft: &ProductDraft, headline: String) -> Self {
        Self {
            user_name: draft.user_name.clone(),
            product_name: draft.product_name.clone(),
            region: draft.region.clone(),
            season: draft.season.clone(),
            features: draft.features.clone(),
            producer_story: draft.producer_story.clone(),
            target: draft.target.clone(),
            tone: draft.tone.label().to_string(),
            format: draft.format.as_str().to_string(),
            headline,
            logged_at: Utc::now(),
        }
    }
}

/// Best-effort usage sink. Implementations must be safe to call from a
/// detached task; callers tolerate any failure.
#[async_trait]
pub trait UsageSink: Send + Sync {
    async fn record(&self, record: &UsageRecord) -> Result<(), UsageError>;
}

/// POSTs each record as JSON to a webhook (e.g. a spreadsheet bridge).
pub struct WebhookUsageSink {
    client: Client,
    endpoint: String,
}

impl WebhookUsageSink {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl UsageSink for WebhookUsageSink {
    async fn record(&self, record: &UsageRecord) -> Result<(), UsageError> {
        let response = self.client.post(&self.endpoint).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UsageError::Api(status.as_u16()));
        }

        debug!("Usage record accepted for '{}'", record.product_name);
        Ok(())
    }
}

/// Used when no usage endpoint is configured.
pub struct NoopUsageSink;

#[async_trait]
impl UsageSink for NoopUsageSink {
    async fn record(&self, record: &UsageRecord) -> Result<(), UsageError> {
        debug!(
            "Usage logging disabled — dropping record for '{}'",
            record.product_name
        );
        Ok(())
    }
}

/// Picks the sink implementation for the configured endpoint.
pub fn sink_from_config(usage_log_url: Option<&str>) -> Arc<dyn UsageSink> {
    match usage_log_url {
        Some(url) if !url.trim().is_empty() => Arc::new(WebhookUsageSink::new(url.to_string())),
        _ => Arc::new(NoopUsageSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copywriter::draft::DraftField;

    fn sample_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.set_field(DraftField::UserName, "구좌영농조합").unwrap();
        draft.set_field(DraftField::ProductName, "제주 구좌 당근").unwrap();
        draft.set_field(DraftField::Region, "제주도 구좌읍").unwrap();
        draft.set_field(DraftField::Season, "12월~2월").unwrap();
        draft.set_field(DraftField::Features, "유기농").unwrap();
        draft.set_field(DraftField::ProducerStory, "30년 고집").unwrap();
        draft.set_field(DraftField::Target, "건강 식단족").unwrap();
        draft
    }

    #[test]
    fn test_record_carries_full_draft_and_headline() {
        let record = UsageRecord::from_draft(&sample_draft(), "흙이 키운 단맛".to_string());

        assert_eq!(record.user_name, "구좌영농조합");
        assert_eq!(record.product_name, "제주 구좌 당근");
        assert_eq!(record.tone, "따뜻하고 서정적인");
        assert_eq!(record.format, "SNS");
        assert_eq!(record.headline, "흙이 키운 단맛");
    }

    #[test]
    fn test_record_serializes_to_flat_json() {
        let record = UsageRecord::from_draft(&sample_draft(), "h".to_string());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["product_name"], "제주 구좌 당근");
        assert_eq!(value["headline"], "h");
        assert!(value["logged_at"].is_string());
    }

    #[tokio::test]
    async fn test_noop_sink_always_succeeds() {
        let record = UsageRecord::from_draft(&sample_draft(), "h".to_string());
        assert!(NoopUsageSink.record(&record).await.is_ok());
    }
}
