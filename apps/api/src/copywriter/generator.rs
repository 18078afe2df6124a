//! Copy generation — builds the prompt pair and issues the single LLM call.
//!
//! Flow: validated draft → user prompt + format system instruction +
//! response schema → Gemini → GeneratedCopy.
//!
//! Each invocation is one fresh, independent request. Failures are returned
//! to the session layer, which stores a user-facing message and leaves
//! retrying to the user.

use tracing::info;

use crate::copywriter::copy::GeneratedCopy;
use crate::copywriter::draft::ProductDraft;
use crate::copywriter::prompts::{
    build_system_instruction, build_user_prompt, copy_response_schema,
};
use crate::llm_client::{GeminiClient, GeminiError};

/// Generic user-facing fallback when the service gives no usable message.
pub const GENERATION_FAILURE_MESSAGE: &str = "카피를 생성하는 중에 오류가 발생했습니다.";

/// Produces one `GeneratedCopy` for the draft, or fails.
///
/// The caller (the session state machine) is responsible for having
/// validated the draft before handing it over.
pub async fn generate_copy(
    llm: &GeminiClient,
    draft: &ProductDraft,
) -> Result<GeneratedCopy, GeminiError> {
    let prompt = build_user_prompt(draft);
    let system = build_system_instruction(draft.format);
    let schema = copy_response_schema(draft.format);

    info!(
        "Generating {} copy for '{}'",
        draft.format.as_str(),
        draft.product_name
    );

    let copy: GeneratedCopy = llm.call_json(&prompt, &system, schema).await?;

    info!(
        "Copy generated: headline {} chars, {} hashtags",
        copy.headline.chars().count(),
        copy.hashtags.len()
    );

    Ok(copy)
}

/// Maps a client error to the message stored on the session: the
/// service-provided message when one is available, the generic Korean
/// fallback otherwise. The full error is for logs only.
pub fn user_facing_message(err: &GeminiError) -> String {
    match err {
        GeminiError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => GENERATION_FAILURE_MESSAGE.to_string(),
    }
}
