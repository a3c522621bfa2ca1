use serde::{Deserialize, Serialize};

/// Generation parameters for a single completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl ModelConfig {
    pub fn new(model: impl Into<String>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            model: model.into(),
            max_output_tokens,
            temperature,
        }
    }
}

/// Fully assembled analysis instruction plus the fixed system persona.
/// Immutable once built; the embedded document content is capped at the
/// truncation budget the builder was given.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPrompt {
    instruction: String,
    persona: String,
    embedded_chars: usize,
    truncated: bool,
}

impl AnalysisPrompt {
    pub(crate) fn new(
        instruction: String,
        persona: String,
        embedded_chars: usize,
        truncated: bool,
    ) -> Self {
        Self {
            instruction,
            persona,
            embedded_chars,
            truncated,
        }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Number of document characters embedded in the instruction.
    pub fn embedded_chars(&self) -> usize {
        self.embedded_chars
    }

    /// True when content past the budget was omitted.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Follow-up instruction carrying the caller-held context verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    instruction: String,
    persona: String,
}

impl ChatPrompt {
    pub(crate) fn new(instruction: String, persona: String) -> Self {
        Self {
            instruction,
            persona,
        }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }
}
