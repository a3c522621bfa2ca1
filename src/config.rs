use crate::error::RfpLensError;
use crate::models::ModelConfig;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TRUNCATION_BUDGET: usize = 4000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;

/// Environment-driven defaults for the analysis core. Compiled-in values
/// apply when a variable is absent; callers may still override the
/// credential and model per call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional fallback credential when the caller supplies none.
    pub default_credential: Option<String>,
    pub model: String,
    pub max_output_tokens: u32,
    pub chat_max_output_tokens: u32,
    pub temperature: f32,
    pub chat_temperature: f32,
    /// Leading characters of extracted text embedded in an analysis prompt.
    pub truncation_budget: usize,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
    pub spool_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_credential: None,
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: 2000,
            chat_max_output_tokens: 1000,
            temperature: 0.3,
            chat_temperature: 0.4,
            truncation_budget: DEFAULT_TRUNCATION_BUDGET,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            spool_dir: std::env::temp_dir().join("rfplens-spool"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, RfpLensError> {
        let mut config = Self::default();

        config.default_credential = std::env::var("RFPLENS_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(model) = std::env::var("RFPLENS_MODEL") {
            config.model = model;
        }
        if let Some(value) = read_env_parsed("RFPLENS_MAX_TOKENS")? {
            config.max_output_tokens = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_CHAT_MAX_TOKENS")? {
            config.chat_max_output_tokens = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_TEMPERATURE")? {
            config.temperature = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_CHAT_TEMPERATURE")? {
            config.chat_temperature = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_TRUNCATION_BUDGET")? {
            config.truncation_budget = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_TIMEOUT")? {
            config.timeout_seconds = value;
        }
        if let Some(value) = read_env_parsed("RFPLENS_MAX_RETRIES")? {
            config.max_retries = value;
        }
        if let Ok(dir) = std::env::var("RFPLENS_SPOOL_DIR") {
            config.spool_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RfpLensError> {
        if self.model.trim().is_empty() {
            return Err(RfpLensError::ConfigError(
                "model identifier cannot be empty".to_string(),
            ));
        }
        if !(10..=300).contains(&self.timeout_seconds) {
            return Err(RfpLensError::ConfigError(
                "timeout must be between 10 and 300 seconds".to_string(),
            ));
        }
        if self.max_retries > 10 {
            return Err(RfpLensError::ConfigError(
                "max retries must be 10 or fewer".to_string(),
            ));
        }
        if self.truncation_budget == 0 {
            return Err(RfpLensError::ConfigError(
                "truncation budget must be greater than zero".to_string(),
            ));
        }
        for temperature in [self.temperature, self.chat_temperature] {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(RfpLensError::ConfigError(
                    "temperature must be between 0.0 and 2.0".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn analysis_model_config(&self) -> ModelConfig {
        ModelConfig::new(&self.model, self.max_output_tokens, self.temperature)
    }

    pub fn chat_model_config(&self) -> ModelConfig {
        ModelConfig::new(&self.model, self.chat_max_output_tokens, self.chat_temperature)
    }
}

fn read_env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, RfpLensError> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            RfpLensError::ConfigError(format!("invalid value for {name}: {raw:?}"))
        }),
        Err(_) => Ok(None),
    }
}
