//! Product draft — the user-entered attributes a session accumulates before
//! submission.
//!
//! The draft performs no validation on update beyond rejecting unknown
//! tone/format values. Required-presence is checked once, at submission time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::copywriter::tone::Tone;

/// Requested output format for the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Short social-style copy — the default.
    #[default]
    #[serde(rename = "SNS")]
    Sns,
    /// Long-form blog/detail-page copy.
    #[serde(rename = "BLOG")]
    Blog,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Sns, OutputFormat::Blog];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Sns => "SNS",
            OutputFormat::Blog => "BLOG",
        }
    }

    pub fn from_label(label: &str) -> Option<OutputFormat> {
        OutputFormat::ALL.into_iter().find(|f| f.as_str() == label)
    }
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("field '{0}' must not be empty")]
    MissingField(&'static str),

    #[error("unknown tone preset: '{0}'")]
    UnknownTone(String),

    #[error("unknown output format: '{0}' (expected SNS or BLOG)")]
    UnknownFormat(String),
}

/// Addressable draft attribute for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    UserName,
    ProductName,
    Region,
    Season,
    Features,
    ProducerStory,
    Target,
    Tone,
    Format,
}

/// The current draft of product attributes. One per session, created with
/// defaults and mutated field-by-field as the user types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductDraft {
    /// Submitter name or business name, recorded by the usage sink.
    pub user_name: String,
    pub product_name: String,
    /// Region / origin, e.g. "제주도 구좌읍".
    pub region: String,
    /// Seasonality, e.g. "찬바람 부는 12월~2월".
    pub season: String,
    pub features: String,
    /// Producer story / philosophy — the storytelling core.
    pub producer_story: String,
    /// Target audience.
    pub target: String,
    pub tone: Tone,
    pub format: OutputFormat,
}

impl ProductDraft {
    /// Replaces a single attribute, preserving all others. Tone and format
    /// must name one of the fixed presets; text fields are taken as-is.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::UserName => self.user_name = value.to_string(),
            DraftField::ProductName => self.product_name = value.to_string(),
            DraftField::Region => self.region = value.to_string(),
            DraftField::Season => self.season = value.to_string(),
            DraftField::Features => self.features = value.to_string(),
            DraftField::ProducerStory => self.producer_story = value.to_string(),
            DraftField::Target => self.target = value.to_string(),
            DraftField::Tone => {
                self.tone = Tone::from_label(value)
                    .ok_or_else(|| DraftError::UnknownTone(value.to_string()))?;
            }
            DraftField::Format => {
                self.format = OutputFormat::from_label(value)
                    .ok_or_else(|| DraftError::UnknownFormat(value.to_string()))?;
            }
        }
        Ok(())
    }

    /// Submission-time check: every text field must be non-empty after
    /// trimming. Reports the first missing field.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required: [(&'static str, &str); 7] = [
            ("user_name", &self.user_name),
            ("product_name", &self.product_name),
            ("region", &self.region),
            ("season", &self.season),
            ("features", &self.features),
            ("producer_story", &self.producer_story),
            ("target", &self.target),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }
        Ok(())
    }
}
