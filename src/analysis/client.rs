use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::encode::DataUrl;
use super::prompt::ANALYSIS_PROMPT;
use crate::config::{ApiKey, Settings};
use crate::error::{AnalysisError, ConfigError};

// --- Chat completion request structs ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

// --- Chat completion response structs ---

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// One image plus the fixed instruction, consumed by a single call
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub instruction: &'static str,
    pub image: DataUrl,
}

impl AnalysisRequest {
    pub fn new(image: DataUrl) -> Self {
        Self {
            instruction: ANALYSIS_PROMPT,
            image,
        }
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint
///
/// No request timeout is configured; a call resolves or fails with the transport.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Build a client, failing when no usable API key is configured
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let api_key = settings.api_key.clone()?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: format!("{}/chat/completions", settings.base_url),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    /// Send one image for analysis.
    ///
    /// Returns the first choice's message text, or `None` when the response
    /// carries no text. An absent result is for the caller to judge, it is not
    /// a transport error.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Option<String>, AnalysisError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: request.instruction,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: request.image.as_str(),
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        };

        info!("🌿 Sending image to {} ({})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &text));
        }

        let body: ChatResponse = response.json().await?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        debug!(
            "Response received: {} chars",
            content.as_ref().map_or(0, String::len)
        );

        Ok(content)
    }
}

/// Turn a non-success response into a readable error
fn api_error(status: u16, body: &str) -> AnalysisError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => {
            // Proxy error pages and the like never reach the banner
            debug!("Non-JSON error body ({} bytes) for status {}", body.len(), status);
            "status code (no body)".to_string()
        }
    };

    AnalysisError::Api { status, message }
}
