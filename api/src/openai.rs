use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Failure modes of a completion call. Handlers map all of these to the
/// same opaque 500; the variants exist for the logs.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Chat-completions client. Cheap to clone; the underlying connection pool
/// is shared.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    /// Build a client from `OPENAI_API_KEY`, `OPENAI_BASE_URL`, and
    /// `OPENAI_MODEL`. A missing key is not fatal here; each completion
    /// call reports it instead, so the server still boots for /health
    /// and the docs UI.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self::new(
            api_key,
            env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            env_or("OPENAI_MODEL", DEFAULT_MODEL),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One chat completion round trip: system message plus user message in,
    /// the first choice's content out. An absent choice or a missing or
    /// null content field comes back as the empty string rather than an
    /// error.
    pub async fn chat_completion(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Api { status, body });
        }

        let payload = response.json::<ChatResponse>().await?;
        Ok(payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
