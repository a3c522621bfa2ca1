use crate::models::{AnalysisPrompt, ChatPrompt, ConversationContext, ExtractedText};

pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed system persona shared by both flows.
    pub fn persona() -> &'static str {
        r#"You are an expert federal capture manager assistant following Shipley methodology.
You help with RFP analysis, compliance checking, teaming strategy, and proposal development.
Always provide specific, actionable advice with clear next steps.
Format your responses with clear headings and bullet points for easy reading.
Be thorough and comprehensive in your analysis."#
    }

    /// Assemble the fixed five-section analysis instruction around the
    /// document text. Only the leading `budget` characters of the text are
    /// embedded; everything past the budget is silently omitted, and the
    /// instruction sections themselves are never cut. Requirements appearing
    /// after the budget are therefore never analyzed; that bound is the
    /// documented cost control, not an accident.
    pub fn build_analysis_prompt(
        text: &ExtractedText,
        doc_type: &str,
        budget: usize,
    ) -> AnalysisPrompt {
        let total_chars = text.char_count();
        let embedded: String = text.content().chars().take(budget).collect();
        let embedded_chars = embedded.chars().count();
        let truncated = total_chars > budget;

        let instruction = format!(
            r#"Analyze this {doc_type} document and provide:

## REQUIREMENTS
Extract and list EVERY requirement from this document. Include:
1. Technical requirements
2. Performance requirements
3. Functional requirements
4. Compliance requirements
5. Delivery requirements
6. Personnel/staffing requirements
7. Security requirements
8. Any other specified requirements
Number each requirement clearly.

## DEADLINES
List all important dates and deadlines including:
1. Proposal submission deadline
2. Question submission deadline
3. Site visits or demonstrations
4. Contract start/end dates
5. Milestone dates
6. Any other time-sensitive requirements

## EVALUATION CRITERIA
Explain in detail how proposals will be scored including:
1. Evaluation factors and their weights
2. Scoring methodology
3. Pass/fail criteria
4. Technical vs cost evaluation approach

## COMPLIANCE CHECKLIST
Create a comprehensive checklist of what must be included in the response:
1. Required sections and formats
2. Mandatory attachments
3. Page limits and formatting requirements
4. Submission requirements (copies, format, etc.)
5. Required certifications or statements

## RISK FACTORS
Identify potential issues including:
1. Unclear or conflicting requirements
2. Aggressive timelines
3. Technical challenges
4. Compliance risks
5. Competitive risks

Document content (first {budget} characters):
{embedded}

Be thorough and comprehensive in your analysis. Don't miss any requirements, no matter how small."#
        );

        AnalysisPrompt::new(
            instruction,
            Self::persona().to_string(),
            embedded_chars,
            truncated,
        )
    }

    /// Assemble a follow-up instruction from the caller-held context and the
    /// new message. The context is embedded verbatim with no truncation;
    /// bounding its growth is the caller's job.
    pub fn build_chat_prompt(message: &str, context: &ConversationContext) -> ChatPrompt {
        let instruction = format!(
            r#"Context from previous analysis: {context}

User question: {message}

Provide helpful, specific advice for federal capture management.
Use clear formatting with headings and bullet points.
Be comprehensive and thorough in your response."#,
            context = context.as_str(),
            message = message,
        );

        ChatPrompt::new(instruction, Self::persona().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentFormat;

    fn extracted(content: &str) -> ExtractedText {
        ExtractedText::new(content.to_string(), DocumentFormat::Pdf, 1).unwrap()
    }

    #[test]
    fn test_analysis_prompt_contains_all_five_sections() {
        let prompt = PromptTemplate::build_analysis_prompt(&extracted("Scope of work"), "RFP", 4000);

        for section in [
            "## REQUIREMENTS",
            "## DEADLINES",
            "## EVALUATION CRITERIA",
            "## COMPLIANCE CHECKLIST",
            "## RISK FACTORS",
        ] {
            assert!(prompt.instruction().contains(section), "{section}");
        }
        assert!(prompt.instruction().contains("Scope of work"));
        assert!(prompt.persona().contains("Shipley"));
        assert!(!prompt.truncated());
    }

    #[test]
    fn test_short_content_is_embedded_unmodified() {
        let content = "Offerors shall submit questions by March 1.";
        let prompt = PromptTemplate::build_analysis_prompt(&extracted(content), "RFP", 4000);

        assert!(prompt.instruction().contains(content));
        assert_eq!(prompt.embedded_chars(), content.chars().count());
        assert!(!prompt.truncated());
    }

    #[test]
    fn test_long_content_is_cut_at_exactly_the_budget() {
        let content: String = std::iter::repeat('a')
            .take(100)
            .chain(std::iter::repeat('b').take(100))
            .collect();
        let prompt = PromptTemplate::build_analysis_prompt(&extracted(&content), "RFP", 100);

        let expected: String = content.chars().take(100).collect();
        assert!(prompt.instruction().contains(&expected));
        // The 101st character never appears: no 'b' was embedded.
        assert!(!prompt.instruction().contains(&format!("{expected}b")));
        assert_eq!(prompt.embedded_chars(), 100);
        assert!(prompt.truncated());
    }

    #[test]
    fn test_budget_respects_char_boundaries() {
        let content = "需要仕様書の要求事項一覧".repeat(50);
        let prompt = PromptTemplate::build_analysis_prompt(&extracted(&content), "RFP", 10);

        let expected: String = content.chars().take(10).collect();
        assert!(prompt.instruction().contains(&expected));
        assert_eq!(prompt.embedded_chars(), 10);
        assert!(prompt.truncated());
    }

    #[test]
    fn test_chat_prompt_embeds_context_verbatim() {
        let context = ConversationContext::new("## DEADLINES\n- Proposals due 2024-04-15");
        let prompt = PromptTemplate::build_chat_prompt("What should we bid?", &context);

        assert!(prompt
            .instruction()
            .contains("## DEADLINES\n- Proposals due 2024-04-15"));
        assert!(prompt.instruction().contains("User question: What should we bid?"));
        assert_eq!(prompt.persona(), PromptTemplate::persona());
    }

    #[test]
    fn test_chat_prompt_applies_no_truncation_to_context() {
        let long_context = ConversationContext::new("x".repeat(20_000));
        let prompt = PromptTemplate::build_chat_prompt("status?", &long_context);
        assert!(prompt.instruction().contains(&"x".repeat(20_000)));
    }
}
