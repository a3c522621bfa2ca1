// Analyzer module - prompt construction, completion client, orchestration

pub mod llm_client;
pub mod orchestrator;
pub mod prompts;

pub use llm_client::{
    create_completion_client, CompletionConfig, CompletionProvider, CompletionRequest,
};
pub use orchestrator::AnalysisOrchestrator;
pub use prompts::PromptTemplate;
