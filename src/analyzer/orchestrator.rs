use crate::analyzer::llm_client::{
    create_completion_client, CompletionProvider, CompletionRequest,
};
use crate::analyzer::prompts::PromptTemplate;
use crate::config::AppConfig;
use crate::error::RfpLensError;
use crate::extractor::DocumentExtractor;
use crate::models::{AnalysisResult, ChatReply, ConversationContext, RawDocument};
use crate::storage::UploadSpool;
use std::sync::Arc;
use std::time::Instant;

/// Label embedded in the analysis instruction; the original system only ever
/// analyzed solicitations.
const DOC_TYPE: &str = "RFP";

/// Composes extraction, prompt construction, and the completion call into
/// the two supported flows. Holds no cross-request state: one orchestrator
/// is built per call with that call's credential, and concurrent instances
/// are fully independent.
pub struct AnalysisOrchestrator {
    config: AppConfig,
    provider: Arc<dyn CompletionProvider>,
    spool: UploadSpool,
}

impl std::fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOrchestrator")
            .field("config", &self.config)
            .field("provider", &self.provider.model_name())
            .field("spool", &self.spool)
            .finish()
    }
}

impl AnalysisOrchestrator {
    /// Credential resolution is ordered first: a missing credential (no
    /// per-call value and no configured default) fails here, before any
    /// spooling or extraction work is attempted.
    pub fn new(config: AppConfig, credential: Option<String>) -> Result<Self, RfpLensError> {
        let credential = credential
            .filter(|key| !key.trim().is_empty())
            .or_else(|| config.default_credential.clone());

        let provider = create_completion_client(
            &config.model,
            credential,
            config.timeout_seconds,
            config.max_retries,
            config.retry_base_delay_ms,
        )?;

        Ok(Self::with_provider(config, provider.into()))
    }

    /// Injection seam for an already-built provider.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        let spool = UploadSpool::new(config.spool_dir.clone());
        Self {
            config,
            provider,
            spool,
        }
    }

    /// Full intake pipeline: spool, extract, build the analysis prompt,
    /// request a completion. Stages run strictly in that order and the first
    /// failure short-circuits, so no completion call is ever paid for a
    /// document that failed extraction.
    pub async fn analyze_upload(
        &self,
        document: RawDocument,
    ) -> Result<AnalysisResult, RfpLensError> {
        let started = Instant::now();

        let spooled = self.spool.spool(&document.filename, &document.bytes)?;
        let bytes = spooled.read()?;

        let extractor = DocumentExtractor::new();
        let extracted = extractor.extract(&bytes, document.format)?;
        drop(spooled);

        tracing::info!(
            filename = %document.filename,
            format = document.format.as_str(),
            segments = extracted.segment_count(),
            chars = extracted.char_count(),
            "document extracted"
        );

        let prompt = PromptTemplate::build_analysis_prompt(
            &extracted,
            DOC_TYPE,
            self.config.truncation_budget,
        );
        if prompt.truncated() {
            tracing::warn!(
                budget = self.config.truncation_budget,
                total_chars = extracted.char_count(),
                "document exceeds truncation budget, trailing content not analyzed"
            );
        }

        let request = CompletionRequest::from_analysis(&prompt, &self.config.analysis_model_config());
        let analysis = self.provider.complete(&request).await?;

        Ok(AnalysisResult {
            analysis,
            filename: document.filename,
            text_length: extracted.char_count(),
            truncated: prompt.truncated(),
            model_used: self.provider.model_name().to_string(),
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Follow-up query carrying the caller-held context. An empty message is
    /// rejected before any downstream call is attempted.
    pub async fn continue_chat(
        &self,
        message: &str,
        context: &ConversationContext,
    ) -> Result<ChatReply, RfpLensError> {
        if message.trim().is_empty() {
            return Err(RfpLensError::ValidationError(
                "chat message cannot be empty".to_string(),
            ));
        }

        let started = Instant::now();
        let prompt = PromptTemplate::build_chat_prompt(message, context);
        let request = CompletionRequest::from_chat(&prompt, &self.config.chat_model_config());
        let response = self.provider.complete(&request).await?;

        Ok(ChatReply {
            response,
            model_used: self.provider.model_name().to_string(),
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}
