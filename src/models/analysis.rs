use serde::{Deserialize, Serialize};

/// Outcome of a full document analysis. The five report sections
/// (requirements, deadlines, evaluation criteria, compliance checklist,
/// risk factors) arrive as one opaque formatted text; nothing here parses
/// or validates their internal structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis: String,
    pub filename: String,
    pub text_length: usize,
    pub truncated: bool,
    pub model_used: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub model_used: String,
    pub duration_ms: u64,
}

/// Caller-held summary of prior analysis, resubmitted on every chat call.
/// There is no server-side session: the orchestrator stays stateless and
/// scale-out needs no coordination. The flip side is that nothing here caps
/// the context's growth; bounding it is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext(String);

impl ConversationContext {
    pub fn new(context: impl Into<String>) -> Self {
        Self(context.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for ConversationContext {
    fn from(context: String) -> Self {
        Self(context)
    }
}

impl From<&str> for ConversationContext {
    fn from(context: &str) -> Self {
        Self(context.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_emptiness() {
        assert!(ConversationContext::empty().is_empty());
        assert!(ConversationContext::new("  \n ").is_empty());
        assert!(!ConversationContext::new("prior analysis").is_empty());
    }

    #[test]
    fn test_context_carries_text_verbatim() {
        let context = ConversationContext::new("## DEADLINES\n- Questions due 2024-03-01");
        assert_eq!(context.as_str(), "## DEADLINES\n- Questions due 2024-03-01");
    }
}
