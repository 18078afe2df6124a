// All LLM prompt constants for the copywriter module, plus the structured
// response schema requested from the generation service.

use serde_json::{json, Value};

use crate::copywriter::draft::{OutputFormat, ProductDraft};

/// User prompt template. Replace every `{placeholder}` before sending.
pub const COPY_PROMPT_TEMPLATE: &str = r#"다음 로컬 제품에 대한 매력적인 {format_phrase}를 작성해 주세요.

[제품 정보]
- 제품명: {product_name}
- 지역/원산지: {region}
- 제철 정보: {season}
- 핵심 특징: {features}
- 생산자 이야기/철학: {producer_story}
- 타겟 고객: {target}
- 톤앤매너: {tone}"#;

/// System instruction — the curator persona. Replace `{format_guideline}`.
pub const COPY_SYSTEM_TEMPLATE: &str = r#"당신은 10년 차 로컬 큐레이터이자 감성 에세이 작가입니다.
지역 고유의 제품이 가진 가치를 서정적이고 신뢰감 있는 어조로 소개합니다.

[작성 가이드라인]
1. 사용자의 '톤앤매너'를 최우선으로 반영하세요.
2. '생산자 이야기'와 '제철 정보'를 문장에 자연스럽게 녹여내어 진정성을 더하세요.
3. {format_guideline}
4. 마치 해당 지역의 풍경과 흙내음이 독자에게 전달되듯 묘사하세요."#;

const SNS_FORMAT_PHRASE: &str = "SNS용 감성 카피";
const BLOG_FORMAT_PHRASE: &str = "블로그 포스팅용 긴 글";

const SNS_FORMAT_GUIDELINE: &str =
    "SNS 형식: 시선을 끄는 헤드라인과 300자 내외의 여운이 남는 짧은 본문으로 작성하세요.";
const BLOG_FORMAT_GUIDELINE: &str =
    "블로그 형식: 제목은 시적이며, 본문은 800자 내외로 문단을 나누어 깊이 있는 서사를 작성하세요.";

/// Builds the user prompt by interpolating every draft field.
pub fn build_user_prompt(draft: &ProductDraft) -> String {
    let format_phrase = match draft.format {
        OutputFormat::Sns => SNS_FORMAT_PHRASE,
        OutputFormat::Blog => BLOG_FORMAT_PHRASE,
    };

    COPY_PROMPT_TEMPLATE
        .replace("{format_phrase}", format_phrase)
        .replace("{product_name}", &draft.product_name)
        .replace("{region}", &draft.region)
        .replace("{season}", &draft.season)
        .replace("{features}", &draft.features)
        .replace("{producer_story}", &draft.producer_story)
        .replace("{target}", &draft.target)
        .replace("{tone}", draft.tone.label())
}

/// Builds the system instruction with the format-specific length guidance.
pub fn build_system_instruction(format: OutputFormat) -> String {
    let guideline = match format {
        OutputFormat::Sns => SNS_FORMAT_GUIDELINE,
        OutputFormat::Blog => BLOG_FORMAT_GUIDELINE,
    };
    COPY_SYSTEM_TEMPLATE.replace("{format_guideline}", guideline)
}

/// The structured-output schema requested from the service: three required
/// fields, with format-dependent descriptions. Uses the REST API's
/// uppercase type names.
pub fn copy_response_schema(format: OutputFormat) -> Value {
    let is_blog = format == OutputFormat::Blog;

    json!({
        "type": "OBJECT",
        "properties": {
            "headline": {
                "type": "STRING",
                "description": if is_blog {
                    "블로그 포스팅 제목"
                } else {
                    "인스타그램용 헤드라인 (이모지 포함)"
                },
            },
            "body": {
                "type": "STRING",
                "description": if is_blog {
                    "800자 내외의 심도 깊은 스토리텔링 본문 (문단 구분 포함)"
                } else {
                    "300자 내외의 감성적인 짧은 글"
                },
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": if is_blog {
                    "관련 키워드 5개"
                } else {
                    "인스타그램용 해시태그 5개"
                },
            },
        },
        "required": ["headline", "body", "hashtags"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copywriter::draft::DraftField;
    use crate::copywriter::tone::Tone;

    fn sample_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.set_field(DraftField::UserName, "구좌영농조합").unwrap();
        draft.set_field(DraftField::ProductName, "제주 구좌 당근").unwrap();
        draft.set_field(DraftField::Region, "제주도 구좌읍").unwrap();
        draft.set_field(DraftField::Season, "12월~2월").unwrap();
        draft.set_field(DraftField::Features, "유기농, 아삭한 식감").unwrap();
        draft.set_field(DraftField::ProducerStory, "30년 고집").unwrap();
        draft.set_field(DraftField::Target, "건강한 식단을 챙기는 분들").unwrap();
        draft
    }

    #[test]
    fn test_user_prompt_interpolates_every_field() {
        let prompt = build_user_prompt(&sample_draft());

        assert!(prompt.contains("제주 구좌 당근"));
        assert!(prompt.contains("제주도 구좌읍"));
        assert!(prompt.contains("12월~2월"));
        assert!(prompt.contains("유기농, 아삭한 식감"));
        assert!(prompt.contains("30년 고집"));
        assert!(prompt.contains("건강한 식단을 챙기는 분들"));
        assert!(prompt.contains("따뜻하고 서정적인"));
        assert!(!prompt.contains('{'), "no unfilled placeholder may remain");
    }

    #[test]
    fn test_user_prompt_names_the_requested_format() {
        let mut draft = sample_draft();
        assert!(build_user_prompt(&draft).contains("SNS용 감성 카피"));

        draft.set_field(DraftField::Format, "BLOG").unwrap();
        assert!(build_user_prompt(&draft).contains("블로그 포스팅용 긴 글"));
    }

    #[test]
    fn test_user_prompt_reflects_selected_tone() {
        let mut draft = sample_draft();
        draft.tone = Tone::Traditional;
        assert!(build_user_prompt(&draft).contains("전통적이고 묵직한"));
    }

    #[test]
    fn test_system_instruction_varies_length_guidance_by_format() {
        let sns = build_system_instruction(OutputFormat::Sns);
        assert!(sns.contains("300자"));
        assert!(!sns.contains("800자"));

        let blog = build_system_instruction(OutputFormat::Blog);
        assert!(blog.contains("800자"));
        assert!(blog.contains("문단"));
    }

    #[test]
    fn test_system_instruction_keeps_curator_persona() {
        let system = build_system_instruction(OutputFormat::Sns);
        assert!(system.contains("10년 차 로컬 큐레이터"));
        assert!(system.contains("톤앤매너"));
        assert!(!system.contains('{'));
    }

    #[test]
    fn test_response_schema_requires_all_three_fields() {
        for format in OutputFormat::ALL {
            let schema = copy_response_schema(format);
            assert_eq!(schema["type"], "OBJECT");
            assert_eq!(
                schema["required"],
                serde_json::json!(["headline", "body", "hashtags"])
            );
            assert_eq!(schema["properties"]["hashtags"]["type"], "ARRAY");
        }
    }

    #[test]
    fn test_response_schema_descriptions_follow_format() {
        let sns = copy_response_schema(OutputFormat::Sns);
        assert!(sns["properties"]["body"]["description"]
            .as_str()
            .unwrap()
            .contains("300자"));

        let blog = copy_response_schema(OutputFormat::Blog);
        assert!(blog["properties"]["body"]["description"]
            .as_str()
            .unwrap()
            .contains("800자"));
    }
}
