pub mod analysis;
pub mod document;
pub mod envelope;
pub mod prompt;

pub use analysis::{AnalysisResult, ChatReply, ConversationContext};
pub use document::{DocumentFormat, ExtractedText, RawDocument};
pub use envelope::{ChatResponse, ErrorBody, UploadResponse};
pub use prompt::{AnalysisPrompt, ChatPrompt, ModelConfig};
