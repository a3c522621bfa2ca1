pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod storage;

pub use error::{ErrorClass, RfpLensError};

// Re-export commonly used types
pub use analyzer::{AnalysisOrchestrator, CompletionProvider, CompletionRequest, PromptTemplate};
pub use config::AppConfig;
pub use extractor::DocumentExtractor;
pub use models::{
    AnalysisPrompt, AnalysisResult, ChatPrompt, ChatReply, ConversationContext, DocumentFormat,
    ExtractedText, ModelConfig, RawDocument,
};
pub use storage::{SpooledUpload, UploadSpool};
