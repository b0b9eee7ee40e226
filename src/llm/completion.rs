use reqwest::Client;

use crate::{
    config::Settings,
    error::{Error, Result},
    types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
};

/// Sends a single user message to the chat-completion endpoint and returns the
/// content of the first choice.
///
/// The endpoint is expected to speak the OpenAI-compatible wire format
/// (`choices[].message.content`).
pub async fn complete(
    http: &Client,
    settings: &Settings,
    prompt: &str,
    max_tokens: u32,
    temperature: f32,
) -> Result<String> {
    let request = ChatCompletionRequest {
        model: settings.llm_model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        max_tokens,
        temperature,
    };

    let response = http
        .post(&settings.llm_api_url)
        .bearer_auth(&settings.llm_api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Llm(format!("received status {}: {}", status, body)));
    }

    let completion: ChatCompletionResponse = response.json().await?;
    completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::Llm("no response choices available".into()))
        .map(|choice| choice.message.content.unwrap_or_default())
}
