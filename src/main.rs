use rfplens::{
    cli::{Cli, CliHandler},
    error::RfpLensError,
};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rfplens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    };

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            match e {
                RfpLensError::UnsupportedFormat(_)
                | RfpLensError::ValidationError(_)
                | RfpLensError::MissingCredential
                | RfpLensError::ConfigError(_) => 2,
                RfpLensError::CompletionTimeout { .. } => 4,
                RfpLensError::AuthenticationFailure(_)
                | RfpLensError::RateLimited(_)
                | RfpLensError::NetworkFailure(_)
                | RfpLensError::ModelFailure(_) => 5,
                _ => 1,
            }
        }
    };

    process::exit(exit_code);
}
