use crate::constants::{env, gemini};
use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::{validate_settings, validate_url};

/// Non-secret settings, read from an optional TOML file and overridable from the environment.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Model used for generation, e.g. `gemini-2.0-flash`.
    pub gemini_model: String,
    /// Base URL of the generative API, without a trailing slash.
    pub gemini_api_base: String,
    /// HTTP timeout in seconds for every request the tools make.
    /// Unset means no client timeout; the transport's own behavior applies.
    pub http_timeout_seconds: Option<u64>,
    /// Path to the log file. If not specified, logs go to the default log directory.
    pub log_file_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            gemini_model: gemini::DEFAULT_MODEL.to_string(),
            gemini_api_base: gemini::DEFAULT_API_BASE.to_string(),
            http_timeout_seconds: None,
            log_file_path: None,
        }
    }
}

impl Settings {
    /// Loads settings from the default location, applies environment overrides and validates.
    ///
    /// A missing settings file is not an error; defaults are used instead.
    ///
    /// # Environment Variables
    /// - `GEMINI_MODEL` - Override the model
    /// - `GEMINI_API_BASE` - Override the generative API base URL
    /// - `TENNIS_SCORES_HTTP_TIMEOUT` - Set an HTTP timeout in seconds (default: none)
    /// - `TENNIS_SCORES_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut settings = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Settings::default()
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;

        Ok(settings)
    }

    /// Loads settings from a specific TOML file without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Applies overrides from a variable lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(model) = lookup(env::GEMINI_MODEL) {
            self.gemini_model = model;
        }

        if let Some(api_base) = lookup(env::GEMINI_API_BASE) {
            self.gemini_api_base = api_base;
        }

        if let Some(timeout) = lookup(env::HTTP_TIMEOUT) {
            let seconds = timeout.trim().parse::<u64>().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a whole number of seconds (got '{timeout}')",
                    env::HTTP_TIMEOUT
                ))
            })?;
            self.http_timeout_seconds = Some(seconds);
        }

        if let Some(log_file_path) = lookup(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        self.gemini_api_base = self.gemini_api_base.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_settings(
            &self.gemini_model,
            &self.gemini_api_base,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }
}

/// Connection details for the generative search API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &gemini::API_KEY_MASK)
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

/// Connection details for the Supabase REST endpoint.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL without a trailing slash.
    pub url: String,
    pub anon_key: String,
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"***")
            .finish()
    }
}

impl SupabaseConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the Supabase variables through `lookup`, reporting every missing one at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = require(&lookup, &[env::SUPABASE_URL, env::SUPABASE_ANON_KEY])?;
        Self::from_values(&values[0], &values[1])
    }

    fn from_values(url: &str, anon_key: &str) -> Result<Self, AppError> {
        let url = url.trim().trim_end_matches('/').to_string();
        validate_url(env::SUPABASE_URL, &url)?;
        Ok(SupabaseConfig {
            url,
            anon_key: anon_key.trim().to_string(),
        })
    }
}

/// Everything the fetch pipeline needs, loaded once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub supabase: SupabaseConfig,
    pub settings: Settings,
}

impl Config {
    /// Reads the three required secrets from the process environment.
    ///
    /// # Returns
    /// * `Ok(Config)` - All required variables present
    /// * `Err(AppError::MissingEnv)` - One or more required variables are missing or blank
    /// * `Err(AppError::Config)` - `SUPABASE_URL` is not an http(s) URL
    pub fn from_env(settings: Settings) -> Result<Self, AppError> {
        Self::from_lookup(settings, |key| std::env::var(key).ok())
    }

    /// Builds a config from already-loaded settings and a variable lookup.
    pub fn from_lookup<F>(settings: Settings, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = require(
            &lookup,
            &[env::GEMINI_API_KEY, env::SUPABASE_URL, env::SUPABASE_ANON_KEY],
        )?;

        Ok(Config {
            gemini: GeminiConfig {
                api_key: values[0].trim().to_string(),
                api_base: settings.gemini_api_base.clone(),
                model: settings.gemini_model.clone(),
            },
            supabase: SupabaseConfig::from_values(&values[1], &values[2])?,
            settings,
        })
    }
}

/// Looks up every name, failing with the full list of missing (or blank) variables.
fn require<F>(lookup: &F, names: &[&str]) -> Result<Vec<String>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = Vec::with_capacity(names.len());
    let mut missing = Vec::new();

    for name in names {
        match lookup(name).filter(|value| !value.trim().is_empty()) {
            Some(value) => values.push(value),
            None => missing.push(*name),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(AppError::missing_env(missing))
    }
}
