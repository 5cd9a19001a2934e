//! Environment-driven Gemini credentials and endpoint settings.

use std::env;
use std::fmt;

use crate::error::GenerationError;

/// Environment variable holding the Gemini API key. Required.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model identifier. Optional.
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Environment variable overriding the API base URL. Optional.
pub const API_URL_VAR: &str = "GEMINI_API_URL";

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Base URL used when `GEMINI_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Resolved settings for talking to the Gemini API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl GeminiConfig {
    /// Builds a config with the given key and the default model and URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL. Handy for pointing tests at a local server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Reads the configuration from the environment, loading a `.env` file
    /// first when one is present.
    ///
    /// Fails with [`GenerationError::MissingApiKey`] before any network
    /// traffic when `GEMINI_API_KEY` is absent or blank.
    pub fn from_env() -> Result<Self, GenerationError> {
        dotenv::dotenv().ok();

        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: var_or(MODEL_VAR, DEFAULT_MODEL),
            api_url: var_or(API_URL_VAR, DEFAULT_API_URL),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl fmt::Debug for GeminiConfig {
    // The key never lands in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Environment mutations are process-wide, so every from_env scenario
    // lives in this one test to keep them ordered.
    #[test]
    fn from_env_requires_a_key_and_applies_defaults() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(MODEL_VAR);
        env::remove_var(API_URL_VAR);
        assert!(matches!(
            GeminiConfig::from_env(),
            Err(GenerationError::MissingApiKey)
        ));

        env::set_var(API_KEY_VAR, "   ");
        assert!(matches!(
            GeminiConfig::from_env(),
            Err(GenerationError::MissingApiKey)
        ));

        env::set_var(API_KEY_VAR, "unit-test-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "unit-test-key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        env::set_var(MODEL_VAR, "gemini-exp");
        env::set_var(API_URL_VAR, "http://localhost:9090/v1beta");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.model, "gemini-exp");
        assert_eq!(config.api_url, "http://localhost:9090/v1beta");

        env::remove_var(API_KEY_VAR);
        env::remove_var(MODEL_VAR);
        env::remove_var(API_URL_VAR);
    }

    #[test]
    fn builder_overrides_the_defaults() {
        let config = GeminiConfig::new("k")
            .with_model("gemini-exp")
            .with_api_url("http://localhost:1234");

        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, "gemini-exp");
        assert_eq!(config.api_url, "http://localhost:1234");
    }

    #[test]
    fn dotenv_files_load_into_the_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "SYMBIOTIC_DOTENV_PROBE=loaded").unwrap();

        dotenv::from_path(&path).unwrap();

        assert_eq!(env::var("SYMBIOTIC_DOTENV_PROBE").unwrap(), "loaded");
        env::remove_var("SYMBIOTIC_DOTENV_PROBE");
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = GeminiConfig::new("super-secret");
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
