use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default caption language code (ISO)
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Transcript shaping settings
    #[serde(default)]
    pub transcript: TranscriptConfig,

    /// Caption provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Transcript shaping settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptConfig {
    /// Section window length in seconds for timestamped structured output
    #[serde(default = "default_section_window_secs")]
    pub section_window_secs: u64,

    /// Sentences per paragraph for plain structured output
    #[serde(default = "default_sentences_per_paragraph")]
    pub sentences_per_paragraph: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            section_window_secs: default_section_window_secs(),
            sentences_per_paragraph: default_sentences_per_paragraph(),
        }
    }
}

/// Caption provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Request timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_section_window_secs() -> u64 {
    120
}

fn default_sentences_per_paragraph() -> usize {
    4
}

fn default_endpoint() -> String {
    "https://www.youtube.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            transcript: TranscriptConfig::default(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(anyhow!("default_language must not be empty"));
        }
        if self.transcript.section_window_secs == 0 {
            return Err(anyhow!("section_window_secs must be at least 1"));
        }
        if self.transcript.sentences_per_paragraph == 0 {
            return Err(anyhow!("sentences_per_paragraph must be at least 1"));
        }
        if self.provider.endpoint.trim().is_empty() {
            return Err(anyhow!("provider endpoint must not be empty"));
        }
        Ok(())
    }
}
