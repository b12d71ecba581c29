//! Chat service configuration as operator-tunable TOML values.
//!
//! Each section implements `Default` with the values in [`super::defaults`],
//! so a missing file or a partial file behaves exactly like the built-in
//! setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV_VAR: &str = "BUDS_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "buds_config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({0}): {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({0}): {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with [`ChatConfig::load`], which searches:
/// 1. `$BUDS_CONFIG`
/// 2. `./buds_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

impl ChatConfig {
    /// Load configuration using the standard search order. Broken files are
    /// logged and skipped.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate TOML text. Unknown keys are logged as warnings.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML. The API key is never written out.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Run range checks; log warnings, fail on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!(field = %w.field, "{}", w);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Server Config
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. `BUDS_SERVER_ADDR` and `--addr` take precedence.
    #[serde(default = "default_server_addr")]
    pub addr: String,

    /// Request body limit for the chat endpoint (bytes).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}
fn default_max_body_bytes() -> usize {
    defaults::MAX_BODY_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// ============================================================================
// Assistant Config
// ============================================================================

/// Answer composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// School name used in the system instruction.
    #[serde(default = "default_school_name")]
    pub school_name: String,

    /// Maximum retrieved documents kept as sources.
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Questions offered to visitors before they type anything.
    #[serde(default = "default_suggested_questions")]
    pub suggested_questions: Vec<String>,
}

fn default_school_name() -> String {
    defaults::SCHOOL_NAME.to_string()
}
fn default_max_sources() -> usize {
    defaults::MAX_SOURCES
}
fn default_suggested_questions() -> Vec<String> {
    defaults::SUGGESTED_QUESTIONS
        .iter()
        .map(|q| (*q).to_string())
        .collect()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            max_sources: default_max_sources(),
            suggested_questions: default_suggested_questions(),
        }
    }
}

// ============================================================================
// Knowledge Config
// ============================================================================

/// Knowledge base source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// TOML file of `[[documents]]`. Unset means the built-in documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ============================================================================
// Generation Config
// ============================================================================

/// Generation provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Upper bound for one generation call before the fallback answer is used.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Inline API key. Prefer `LLAMA3_API_KEY` / `TOGETHER_API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    defaults::GENERATION_BASE_URL.to_string()
}
fn default_model() -> String {
    defaults::GENERATION_MODEL.to_string()
}
fn default_temperature() -> f64 {
    defaults::GENERATION_TEMPERATURE
}
fn default_max_tokens() -> u32 {
    defaults::GENERATION_MAX_TOKENS
}
fn default_timeout_secs() -> u64 {
    defaults::GENERATION_TIMEOUT_SECS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl GenerationConfig {
    /// Resolve the API key from the config, then the process environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key with a custom environment lookup.
    ///
    /// Order: `api_key` field, then each of [`defaults::API_KEY_ENV_VARS`].
    /// Blank values count as unset.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |v: String| (!v.trim().is_empty()).then_some(v);
        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| {
                defaults::API_KEY_ENV_VARS
                    .iter()
                    .find_map(|&name| lookup(name).and_then(non_blank))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ChatConfig::from_toml_str("[assistant]\nmax_sources = 5\n").unwrap();
        assert_eq!(config.assistant.max_sources, 5);
        assert_eq!(config.assistant.school_name, defaults::SCHOOL_NAME);
        assert_eq!(config.generation.timeout_secs, defaults::GENERATION_TIMEOUT_SECS);
        assert_eq!(config.assistant.suggested_questions.len(), 8);
    }

    #[test]
    fn test_validation_error() {
        let result = ChatConfig::from_toml_str("[generation]\ntimeout_secs = 0\n");
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors[0].contains("timeout_secs"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\naddr = 42").unwrap();
        match ChatConfig::load_from_file(file.path()) {
            Err(ConfigError::Parse(path, _)) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = ChatConfig::default();
        config.generation.api_key = Some("secret".to_string());
        let toml = config.to_toml().unwrap();
        assert!(!toml.contains("secret"));
    }

    #[test]
    fn test_api_key_resolution_order() {
        let env = |name: &str| match name {
            "LLAMA3_API_KEY" => Some("  ".to_string()),
            "TOGETHER_API_KEY" => Some("together".to_string()),
            _ => None,
        };

        let mut g = GenerationConfig::default();
        assert_eq!(g.resolve_api_key_with(env).as_deref(), Some("together"));

        g.api_key = Some("inline".to_string());
        assert_eq!(g.resolve_api_key_with(env).as_deref(), Some("inline"));

        g.api_key = None;
        assert_eq!(g.resolve_api_key_with(|_| None), None);
    }
}
