pub mod args;

pub use args::{Cli, Command};

use crate::analyzer::AnalysisOrchestrator;
use crate::config::AppConfig;
use crate::error::RfpLensError;
use crate::models::{
    AnalysisResult, ChatReply, ChatResponse, ConversationContext, RawDocument, UploadResponse,
};
use std::fs;
use std::path::Path;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, RfpLensError> {
        match &self.cli.command {
            Command::Analyze {
                file,
                model,
                api_key,
                timeout,
                budget,
            } => {
                self.run_analyze(file, model.clone(), api_key.clone(), *timeout, *budget)
                    .await
            }
            Command::Chat {
                message,
                context_file,
                model,
                api_key,
            } => {
                self.run_chat(message, context_file.as_deref(), model.clone(), api_key.clone())
                    .await
            }
        }
    }

    async fn run_analyze(
        &self,
        file: &Path,
        model: Option<String>,
        api_key: Option<String>,
        timeout: Option<u64>,
        budget: Option<usize>,
    ) -> Result<i32, RfpLensError> {
        let mut config = AppConfig::from_env()?;
        if let Some(model) = model {
            config.model = model;
        }
        if let Some(timeout) = timeout {
            config.timeout_seconds = timeout;
        }
        if let Some(budget) = budget {
            config.truncation_budget = budget;
        }
        config.validate()?;

        let filename = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RfpLensError::ValidationError(format!("invalid file path: {}", file.display()))
            })?
            .to_string();
        let bytes = fs::read(file)?;
        let document = RawDocument::from_filename(bytes, &filename)?;

        if self.cli.verbose {
            eprintln!(
                "📥 Read {} bytes from {} ({})",
                document.size_bytes(),
                file.display(),
                document.format.as_str()
            );
        }

        let orchestrator = AnalysisOrchestrator::new(config, api_key)?;
        match orchestrator.analyze_upload(document).await {
            Ok(result) => {
                self.print_analysis(&result)?;
                Ok(0)
            }
            Err(error) => {
                if self.cli.json {
                    println!("{}", serde_json::to_string_pretty(&UploadResponse::err(&error))?);
                }
                Err(error)
            }
        }
    }

    async fn run_chat(
        &self,
        message: &str,
        context_file: Option<&Path>,
        model: Option<String>,
        api_key: Option<String>,
    ) -> Result<i32, RfpLensError> {
        let mut config = AppConfig::from_env()?;
        if let Some(model) = model {
            config.model = model;
        }
        config.validate()?;

        let context = match context_file {
            Some(path) => ConversationContext::new(fs::read_to_string(path)?),
            None => ConversationContext::empty(),
        };

        if self.cli.verbose && !context.is_empty() {
            eprintln!("📎 Carrying {} characters of prior context", context.char_count());
        }

        let orchestrator = AnalysisOrchestrator::new(config, api_key)?;
        match orchestrator.continue_chat(message, &context).await {
            Ok(reply) => {
                self.print_chat(&reply)?;
                Ok(0)
            }
            Err(error) => {
                if self.cli.json {
                    println!("{}", serde_json::to_string_pretty(&ChatResponse::err(&error))?);
                }
                Err(error)
            }
        }
    }

    fn print_analysis(&self, result: &AnalysisResult) -> Result<(), RfpLensError> {
        if self.cli.json {
            println!("{}", serde_json::to_string_pretty(&UploadResponse::ok(result))?);
            return Ok(());
        }

        println!("📄 {} — {} characters extracted", result.filename, result.text_length);
        if result.truncated {
            println!("⚠️  Document exceeds the analysis budget; trailing content was not analyzed.");
        }
        println!();
        println!("{}", result.analysis);
        println!();
        println!("— {} in {}ms", result.model_used, result.duration_ms);
        Ok(())
    }

    fn print_chat(&self, reply: &ChatReply) -> Result<(), RfpLensError> {
        if self.cli.json {
            println!("{}", serde_json::to_string_pretty(&ChatResponse::ok(reply))?);
            return Ok(());
        }

        println!("{}", reply.response);
        println!();
        println!("— {} in {}ms", reply.model_used, reply.duration_ms);
        Ok(())
    }
}
