use crate::error::RfpLensError;
use crate::models::{AnalysisPrompt, ChatPrompt, ModelConfig};
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionError, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub model_name: String,
    pub credential: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
}

/// Upper bound on a single backoff pause, whatever the configured base
/// delay and attempt count multiply out to.
const MAX_RETRY_DELAY_MS: u64 = 30_000;

/// Per-attempt timeout plus bounded exponential backoff. Separated from the
/// transport so the policy can be driven by an arbitrary attempt future.
#[derive(Debug, Clone, Copy)]
struct RetryPolicy {
    timeout_seconds: u64,
    max_retries: u32,
    base_delay_ms: u64,
}

impl RetryPolicy {
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let millis = self
            .base_delay_ms
            .checked_shl(attempt)
            .unwrap_or(MAX_RETRY_DELAY_MS)
            .min(MAX_RETRY_DELAY_MS);
        Duration::from_millis(millis)
    }

    async fn run<F, Fut>(&self, mut attempt_fn: F) -> Result<String, RfpLensError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, RfpLensError>>,
    {
        let timeout = Duration::from_secs(self.timeout_seconds);
        let mut attempt: u32 = 0;

        loop {
            let error = match tokio::time::timeout(timeout, attempt_fn()).await {
                Ok(Ok(text)) => return Ok(text),
                Ok(Err(error)) => error,
                Err(_) => RfpLensError::CompletionTimeout {
                    timeout: self.timeout_seconds,
                },
            };

            // Only transient service failures are retried in-process. A
            // timed-out attempt already consumed the caller's time budget
            // and is surfaced immediately.
            let transient = matches!(
                error,
                RfpLensError::RateLimited(_) | RfpLensError::NetworkFailure(_)
            );
            if !transient || attempt >= self.max_retries {
                return Err(error);
            }

            let delay = self.backoff_delay(attempt);
            tracing::warn!(
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "transient completion failure, backing off"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// One fully-formed request for the generation capability: the instruction,
/// the persona preamble, and per-call generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub instruction: String,
    pub persona: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn from_analysis(prompt: &AnalysisPrompt, model_config: &ModelConfig) -> Self {
        Self {
            instruction: prompt.instruction().to_string(),
            persona: prompt.persona().to_string(),
            max_output_tokens: model_config.max_output_tokens,
            temperature: model_config.temperature,
        }
    }

    pub fn from_chat(prompt: &ChatPrompt, model_config: &ModelConfig) -> Self {
        Self {
            instruction: prompt.instruction().to_string(),
            persona: prompt.persona().to_string(),
            max_output_tokens: model_config.max_output_tokens,
            temperature: model_config.temperature,
        }
    }
}

pub trait CompletionProvider: Send + Sync {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, RfpLensError>> + Send + 'a>>;

    fn model_name(&self) -> &str;

    fn timeout(&self) -> Duration;
}

impl std::fmt::Debug for dyn CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("model_name", &self.model_name())
            .finish()
    }
}

pub struct RigCompletionClient {
    config: CompletionConfig,
    provider: RigProvider,
}

enum RigProvider {
    OpenAi(openai::Client),
    Anthropic(anthropic::Client),
    Gemini(gemini::Client),
}

impl RigCompletionClient {
    /// The credential is checked here, before any provider construction or
    /// network interaction.
    pub fn new(config: CompletionConfig) -> Result<Self, RfpLensError> {
        if config.credential.trim().is_empty() {
            return Err(RfpLensError::MissingCredential);
        }
        let provider = create_provider(&config)?;
        Ok(Self { config, provider })
    }

    async fn dispatch(&self, request: &CompletionRequest) -> Result<String, RfpLensError> {
        match &self.provider {
            RigProvider::OpenAi(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
            RigProvider::Gemini(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        request: &CompletionRequest,
    ) -> Result<String, RfpLensError> {
        let mut builder = model
            .completion_request(request.instruction.as_str())
            .preamble(request.persona.clone())
            .max_tokens(request.max_output_tokens as u64);

        // Reasoning models (o1/o3/o4, gpt-5) reject a non-default temperature.
        if supports_temperature(&self.config.model_name) {
            builder = builder.temperature(request.temperature as f64);
        }

        let response = builder.send().await.map_err(map_completion_error)?;

        let mut text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                text.push_str(&text_content.text);
            }
        }

        if text.trim().is_empty() {
            return Err(RfpLensError::ModelFailure(
                "completion contained no text output".to_string(),
            ));
        }

        Ok(text)
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout_seconds: self.config.timeout_seconds,
            max_retries: self.config.max_retries,
            base_delay_ms: self.config.retry_base_delay_ms,
        }
    }
}

impl CompletionProvider for RigCompletionClient {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, RfpLensError>> + Send + 'a>> {
        Box::pin(async move { self.retry_policy().run(|| self.dispatch(request)).await })
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

fn create_provider(config: &CompletionConfig) -> Result<RigProvider, RfpLensError> {
    let model_name = config.model_name.trim();

    if is_openai_model(model_name) {
        Ok(RigProvider::OpenAi(openai::Client::new(&config.credential)))
    } else if is_claude_model(model_name) {
        Ok(RigProvider::Anthropic(
            anthropic::ClientBuilder::new(&config.credential).build(),
        ))
    } else if is_gemini_model(model_name) {
        Ok(RigProvider::Gemini(gemini::Client::new(&config.credential)))
    } else {
        Err(RfpLensError::ModelFailure(format!(
            "Unsupported model '{}'. Use OpenAI (gpt-*), Anthropic (claude-*), or Gemini (gemini-*) models",
            model_name
        )))
    }
}

pub fn create_completion_client(
    model: &str,
    credential: Option<String>,
    timeout_seconds: u64,
    max_retries: u32,
    retry_base_delay_ms: u64,
) -> Result<Box<dyn CompletionProvider>, RfpLensError> {
    let credential = credential
        .filter(|key| !key.trim().is_empty())
        .ok_or(RfpLensError::MissingCredential)?;

    let config = CompletionConfig {
        model_name: model.to_string(),
        credential,
        timeout_seconds,
        max_retries,
        retry_base_delay_ms,
    };

    let client = RigCompletionClient::new(config)?;
    Ok(Box::new(client))
}

/// Fold the provider SDK's failure modes into the caller-facing taxonomy,
/// preserving the original detail for diagnostics.
fn map_completion_error(error: CompletionError) -> RfpLensError {
    match error {
        CompletionError::HttpError(http) => match http.status() {
            Some(status) => classify_http_status(status, http.to_string()),
            None => RfpLensError::NetworkFailure(http.to_string()),
        },
        CompletionError::ProviderError(detail) => classify_provider_detail(detail),
        other => RfpLensError::Unknown(other.to_string()),
    }
}

fn classify_http_status(status: reqwest::StatusCode, detail: String) -> RfpLensError {
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        RfpLensError::AuthenticationFailure(detail)
    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        RfpLensError::RateLimited(detail)
    } else if status.is_server_error() {
        RfpLensError::NetworkFailure(detail)
    } else {
        RfpLensError::ModelFailure(detail)
    }
}

fn classify_provider_detail(detail: String) -> RfpLensError {
    let lower = detail.to_lowercase();

    if lower.contains("401")
        || lower.contains("unauthorized")
        || lower.contains("invalid api key")
        || lower.contains("incorrect api key")
        || lower.contains("authentication")
    {
        RfpLensError::AuthenticationFailure(detail)
    } else if lower.contains("429") || lower.contains("rate limit") || lower.contains("quota") {
        RfpLensError::RateLimited(detail)
    } else if lower.contains("overloaded")
        || lower.contains("unavailable")
        || lower.contains("connection")
        || lower.contains("timed out")
    {
        RfpLensError::NetworkFailure(detail)
    } else if lower.contains("model") && (lower.contains("not found") || lower.contains("does not exist"))
    {
        RfpLensError::ModelFailure(detail)
    } else {
        RfpLensError::Unknown(detail)
    }
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

fn supports_temperature(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    !(candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
        || candidate.starts_with("gpt-5"))
}

fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
