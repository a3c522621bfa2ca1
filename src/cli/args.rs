use crate::error::RfpLensError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rfplens")]
#[command(about = "Procurement document analysis using LLMs")]
#[command(version)]
pub struct Cli {
    /// Emit the machine-readable response envelope instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a procurement document (.pdf or .docx)
    Analyze {
        /// Path to the document
        file: PathBuf,

        /// LLM model to use
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// API credential (falls back to RFPLENS_API_KEY / OPENAI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Maximum time for the completion call in seconds (10-300)
        #[arg(short = 't', long)]
        timeout: Option<u64>,

        /// Characters of extracted text embedded in the analysis prompt
        #[arg(long)]
        budget: Option<usize>,
    },

    /// Ask a follow-up question against a prior analysis
    Chat {
        /// The question
        message: String,

        /// File holding prior-analysis context to carry forward
        #[arg(long)]
        context_file: Option<PathBuf>,

        /// LLM model to use
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// API credential (falls back to RFPLENS_API_KEY / OPENAI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Result<Self, RfpLensError> {
        Self::try_parse().map_err(|e| RfpLensError::ValidationError(e.to_string()))
    }
}
