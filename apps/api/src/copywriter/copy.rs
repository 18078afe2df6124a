//! Generated copy — the structured result of one successful generation call,
//! plus the pure text-composition helpers the share surface uses.

use serde::{Deserialize, Serialize};

/// Title passed alongside the composed text to native share surfaces.
pub const SHARE_TITLE: &str = "로컬 큐레이터의 선물";

/// Marketing copy returned by the generation service.
///
/// All three fields are required: a response missing any of them is a
/// contract violation and fails deserialization outright — there is no
/// degraded success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headline: String,
    pub body: String,
    /// Hashtags as returned by the service — possibly without the leading
    /// marker. Normalized at composition/render time, never mutated here.
    pub hashtags: Vec<String>,
}

/// Prefixes `#` exactly once. Already-marked tags pass through unchanged,
/// so normalizing twice is a no-op.
pub fn normalize_hashtag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

/// Composes the single shareable text block:
/// headline, blank line, body, blank line, space-joined normalized hashtags.
pub fn compose_share_text(copy: &GeneratedCopy) -> String {
    let tags = copy
        .hashtags
        .iter()
        .map(|t| normalize_hashtag(t))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}\n\n{}\n\n{}", copy.headline, copy.body, tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_marker_once() {
        assert_eq!(normalize_hashtag("제주당근"), "#제주당근");
        assert_eq!(normalize_hashtag("#제주당근"), "#제주당근");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_hashtag("유기농");
        let twice = normalize_hashtag(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compose_share_text_layout() {
        let copy = GeneratedCopy {
            headline: "🌱 제주 붉은 흙이 키운 단맛".to_string(),
            body: "겨울 바람을 견딘 당근 이야기.".to_string(),
            hashtags: vec!["제주당근".to_string(), "#유기농".to_string()],
        };

        assert_eq!(
            compose_share_text(&copy),
            "🌱 제주 붉은 흙이 키운 단맛\n\n겨울 바람을 견딘 당근 이야기.\n\n#제주당근 #유기농"
        );
    }

    #[test]
    fn test_compose_share_text_with_no_hashtags() {
        let copy = GeneratedCopy {
            headline: "h".to_string(),
            body: "b".to_string(),
            hashtags: vec![],
        };
        assert_eq!(compose_share_text(&copy), "h\n\nb\n\n");
    }

    #[test]
    fn test_deserialization_requires_all_three_fields() {
        // hashtags missing — contract violation, never a degraded success
        let missing_hashtags = r#"{"headline": "x", "body": "y"}"#;
        assert!(serde_json::from_str::<GeneratedCopy>(missing_hashtags).is_err());

        let missing_body = r#"{"headline": "x", "hashtags": []}"#;
        assert!(serde_json::from_str::<GeneratedCopy>(missing_body).is_err());

        let missing_headline = r#"{"body": "y", "hashtags": []}"#;
        assert!(serde_json::from_str::<GeneratedCopy>(missing_headline).is_err());
    }

    #[test]
    fn test_well_formed_response_parses_unchanged() {
        let json = r#"{
            "headline": "🌱 제주 붉은 흙이 키운 단맛",
            "body": "겨울 바람을 견딘 당근 이야기.",
            "hashtags": ["제주당근", "유기농"]
        }"#;
        let copy: GeneratedCopy = serde_json::from_str(json).unwrap();

        assert_eq!(copy.headline, "🌱 제주 붉은 흙이 키운 단맛");
        assert_eq!(copy.hashtags, vec!["제주당근", "유기농"]);
    }
}
