use crate::{info, llm::completion, management::AppState, warning};

/// Keyword used whenever the language model cannot provide one.
pub const FALLBACK_KEYWORD: &str = "trending songs";

const KEYWORD_MAX_TOKENS: u32 = 20;
const KEYWORD_TEMPERATURE: f32 = 0.4;

/// Builds the instruction sent to the language model for `message`.
pub fn build_prompt(message: &str) -> String {
    format!(
        r#"Convert the user's text into a simple 5-6 word Spotify search keyword.
ALWAYS return Bollywood / Indian music terms such as:
"bollywood hits", "hindi romantic", "sad hindi song", "punjabi beats",
"lofi hindi", "arijit singh", "kishore kumar", "90s bollywood", etc.
until and unless user mention english songs specifically or any songs from other language.
Only return keyword, no explanation.
User: {message}"#
    )
}

/// Asks the language model for a search keyword describing `message`.
///
/// Returns the trimmed first completion. An empty completion, and any failure on
/// the way (transport, timeout, non-2xx status, unexpected body), is logged and
/// replaced by [`FALLBACK_KEYWORD`].
pub async fn derive_keyword(state: &AppState, message: &str) -> String {
    let prompt = build_prompt(message);

    match completion::complete(
        &state.http,
        &state.settings,
        &prompt,
        KEYWORD_MAX_TOKENS,
        KEYWORD_TEMPERATURE,
    )
    .await
    {
        Ok(content) => {
            let keyword = content.trim();
            info!("LLM keyword: {}", keyword);
            if keyword.is_empty() {
                FALLBACK_KEYWORD.to_string()
            } else {
                keyword.to_string()
            }
        }
        Err(e) => {
            warning!("LLM error: {}", e);
            FALLBACK_KEYWORD.to_string()
        }
    }
}
