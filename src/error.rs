use thiserror::Error;

#[derive(Error, Debug)]
pub enum RfpLensError {
    #[error("Unsupported document format: {0} (only .pdf and .docx are accepted)")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("No text could be extracted from the document")]
    EmptyExtraction,

    #[error("No API credential provided")]
    MissingCredential,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Completion service rejected the credential: {0}")]
    AuthenticationFailure(String),

    #[error("Completion service rate limit reached: {0}")]
    RateLimited(String),

    #[error("Network error reaching completion service: {0}")]
    NetworkFailure(String),

    #[error("Completion timed out after {timeout} seconds")]
    CompletionTimeout { timeout: u64 },

    #[error("Completion service failed to produce output: {0}")]
    ModelFailure(String),

    #[error("Unexpected completion failure: {0}")]
    Unknown(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Coarse response class a transport binding can map onto its own status
/// space. Client errors are the caller's to fix; retryable upstream errors
/// are transient and worth resubmitting; permanent upstream errors are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    RetryableUpstream,
    PermanentUpstream,
    Internal,
}

impl RfpLensError {
    /// Stable machine-readable code, decoupled from the display message.
    pub fn code(&self) -> &'static str {
        match self {
            RfpLensError::UnsupportedFormat(_) => "unsupported_format",
            RfpLensError::ExtractionFailed(_) => "extraction_failed",
            RfpLensError::EmptyExtraction => "empty_extraction",
            RfpLensError::MissingCredential => "missing_credential",
            RfpLensError::ValidationError(_) => "validation_error",
            RfpLensError::AuthenticationFailure(_) => "authentication_failure",
            RfpLensError::RateLimited(_) => "rate_limited",
            RfpLensError::NetworkFailure(_) => "network_failure",
            RfpLensError::CompletionTimeout { .. } => "completion_timeout",
            RfpLensError::ModelFailure(_) => "model_failure",
            RfpLensError::Unknown(_) => "unknown",
            RfpLensError::ConfigError(_) => "config_error",
            RfpLensError::IoError(_) => "io_error",
            RfpLensError::SerializationError(_) => "serialization_error",
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            RfpLensError::UnsupportedFormat(_)
            | RfpLensError::ExtractionFailed(_)
            | RfpLensError::EmptyExtraction
            | RfpLensError::MissingCredential
            | RfpLensError::ValidationError(_) => ErrorClass::Client,
            RfpLensError::RateLimited(_)
            | RfpLensError::NetworkFailure(_)
            | RfpLensError::CompletionTimeout { .. } => ErrorClass::RetryableUpstream,
            RfpLensError::AuthenticationFailure(_) | RfpLensError::ModelFailure(_) => {
                ErrorClass::PermanentUpstream
            }
            RfpLensError::Unknown(_)
            | RfpLensError::ConfigError(_)
            | RfpLensError::IoError(_)
            | RfpLensError::SerializationError(_) => ErrorClass::Internal,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.class() == ErrorClass::RetryableUpstream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(RfpLensError::EmptyExtraction.code(), "empty_extraction");
        assert_eq!(RfpLensError::MissingCredential.code(), "missing_credential");
        assert_eq!(
            RfpLensError::RateLimited("429".to_string()).code(),
            "rate_limited"
        );
    }

    #[test]
    fn test_validation_errors_are_client_class() {
        assert_eq!(
            RfpLensError::ValidationError("empty message".to_string()).class(),
            ErrorClass::Client
        );
        assert_eq!(
            RfpLensError::UnsupportedFormat("notes.txt".to_string()).class(),
            ErrorClass::Client
        );
        assert_eq!(RfpLensError::MissingCredential.class(), ErrorClass::Client);
    }

    #[test]
    fn test_transient_failures_are_retryable() {
        assert!(RfpLensError::RateLimited("slow down".to_string()).is_retryable());
        assert!(RfpLensError::NetworkFailure("reset".to_string()).is_retryable());
        assert!(RfpLensError::CompletionTimeout { timeout: 60 }.is_retryable());
        assert!(!RfpLensError::AuthenticationFailure("bad key".to_string()).is_retryable());
        assert!(!RfpLensError::EmptyExtraction.is_retryable());
    }
}
