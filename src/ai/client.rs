//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completions call that turns free text into a
//! summary plus calls-to-action.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::provider::CompletionProvider;
use crate::core::config::AppConfig;
use crate::core::models::CompletionOutput;
use crate::errors::SummaryError;

/// Rough token count used for request logging.
fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Maps a non-success provider status onto the error taxonomy.
#[must_use]
pub fn classify_status(status: u16, body: &str) -> SummaryError {
    let detail = format!("status {status}: {body}");
    match status {
        401 | 403 => SummaryError::ProviderAuth(detail),
        400 | 404 | 422 => SummaryError::ProviderRequest(detail),
        _ => SummaryError::ProviderUnavailable(detail),
    }
}

/// Strip markdown code block wrappers from a JSON reply
fn strip_markdown_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(without_prefix) = trimmed.strip_prefix("```") {
        let without_prefix = without_prefix.strip_prefix("json").unwrap_or(without_prefix);
        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim();
        }
    }

    trimmed
}

/// Parses and validates the provider's reply text.
///
/// # Errors
///
/// `ProviderUnavailable` when the text is not a JSON object with a non-blank
/// `content` string and a `ctas` string array.
pub fn parse_completion_output(text: &str) -> Result<CompletionOutput, SummaryError> {
    let output: CompletionOutput = serde_json::from_str(strip_markdown_json(text))?;
    if output.content.trim().is_empty() {
        return Err(SummaryError::ProviderUnavailable(
            "malformed completion output: empty content".to_string(),
        ));
    }
    Ok(output)
}

/// Pull the first choice's message text out of a chat-completions reply.
fn extract_message_content(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(ToString::to_string)
}

pub(crate) fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns `SummaryError::Config` if the credential cannot be used as a
    /// header value or the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, SummaryError> {
        Self::with_settings(
            &config.openai_api_key,
            config.openai_org_id.as_deref(),
            &config.openai_model,
            &config.openai_base_url,
            config.provider_timeout,
        )
    }

    /// # Errors
    ///
    /// Same as [`LlmClient::new`].
    pub fn with_settings(
        api_key: &str,
        org_id: Option<&str>,
        model_name: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, SummaryError> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| SummaryError::Config(format!("Invalid Authorization header: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org) = org_id {
            let org_value = HeaderValue::from_str(org).map_err(|e| {
                SummaryError::Config(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SummaryError::Config(format!("Failed to build OpenAI HTTP client: {e}")))?;

        Ok(Self {
            http,
            model_name: model_name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn build_prompt(&self, instructions: &str, user_text: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(instructions.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(user_text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(
        &self,
        instructions: &str,
        user_text: &str,
    ) -> Result<CompletionOutput, SummaryError> {
        let prompt = self.build_prompt(instructions, user_text);

        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            estimated_input_tokens,
            "Requesting summary completion"
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages(&prompt),
            "response_format": { "type": "json_object" }
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!(status = %status, "Completion provider returned an error");
            return Err(classify_status(status.as_u16(), &error_text));
        }

        let response_json: Value = response.json().await?;

        let text = extract_message_content(&response_json).ok_or_else(|| {
            SummaryError::ProviderUnavailable("No text in completion response".to_string())
        })?;

        debug!(reply_chars = text.len(), "Completion received");

        parse_completion_output(&text)
    }
}
