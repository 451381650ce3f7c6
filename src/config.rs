//! LLM provider credentials.
//!
//! One TOML section per provider, e.g.:
//!
//! ```toml
//! [deepseek]
//! api_key = "sk-..."
//!
//! [ollama]
//! base_url = "http://localhost:11434"
//! model = "gemma3:12b"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::nl2sql::LlmProvider;

/// Default credentials file, looked up relative to the working directory.
pub const DEFAULT_CREDENTIALS_FILE: &str = "keys.toml";

/// Default Ollama endpoint when the section is absent or partial.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    pub deepseek: Option<ApiKeySection>,
    pub gemini: Option<ApiKeySection>,
    pub ollama: Option<OllamaSection>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeySection {
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct OllamaSection {
    #[serde(default = "default_ollama_url")]
    pub base_url: String,
    pub model: Option<String>,
}

fn default_ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

/// Resolved binding for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderAuth {
    /// Hosted API reached with a secret key.
    ApiKey(String),
    /// Local endpoint, no credential required.
    Endpoint {
        base_url: String,
        model: Option<String>,
    },
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Resolve the binding for `provider`, or say exactly what is missing.
    pub fn resolve(&self, provider: LlmProvider) -> Result<ProviderAuth, ConfigError> {
        match provider {
            LlmProvider::Deepseek => api_key(provider, self.deepseek.as_ref()),
            LlmProvider::Gemini => api_key(provider, self.gemini.as_ref()),
            LlmProvider::Ollama => {
                // Local endpoint; an absent section just means defaults.
                let (base_url, model) = match &self.ollama {
                    Some(section) => (section.base_url.clone(), section.model.clone()),
                    None => (DEFAULT_OLLAMA_URL.to_string(), None),
                };
                Ok(ProviderAuth::Endpoint { base_url, model })
            }
        }
    }
}

fn api_key(
    provider: LlmProvider,
    section: Option<&ApiKeySection>,
) -> Result<ProviderAuth, ConfigError> {
    let section = section.ok_or_else(|| ConfigError::MissingProvider {
        provider: provider.section().to_string(),
    })?;
    if section.api_key.trim().is_empty() {
        return Err(ConfigError::MissingField {
            provider: provider.section().to_string(),
            field: "api_key",
        });
    }
    Ok(ProviderAuth::ApiKey(section.api_key.clone()))
}

/// Mask a secret for display: the first four characters, then asterisks.
pub fn mask_key(key: &str) -> String {
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{visible}****")
}
