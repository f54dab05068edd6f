//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SCOUT_*` environment variables; API credentials use
//! the provider-conventional `XAI_API_KEY` and `GOOGLE_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};

/// Default player dataset location.
pub const DEFAULT_PLAYERS_PATH: &str = "data/top5_leagues_player.csv";
/// Default evaluation question set.
pub const DEFAULT_TEST_DATASET_PATH: &str = "data/test_dataset.csv";
/// Default evaluation results file (overwritten on every run).
pub const DEFAULT_RESULTS_PATH: &str = "evaluation_results.csv";
/// OpenAI-compatible endpoint used for Grok.
pub const DEFAULT_XAI_BASE_URL: &str = "https://api.x.ai/v1";
/// Default Grok model.
pub const DEFAULT_XAI_MODEL: &str = "grok-4-latest";
/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Application configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// Player dataset CSV. Default: `data/top5_leagues_player.csv`.
    pub players_path: PathBuf,

    /// Evaluation question set CSV. Default: `data/test_dataset.csv`.
    pub test_dataset_path: PathBuf,

    /// Evaluation output CSV. Default: `evaluation_results.csv`.
    pub results_path: PathBuf,

    /// xAI credential. Absent means the Grok backend answers with a missing-key message.
    pub xai_api_key: Option<String>,

    /// xAI API base. Default: `https://api.x.ai/v1`.
    pub xai_base_url: String,

    /// Grok model name. Default: `grok-4-latest`.
    pub xai_model: String,

    /// Google credential. Absent means the Gemini backend answers with a missing-key message.
    pub google_api_key: Option<String>,

    /// Gemini model name. Default: `gemini-2.5-flash`.
    pub gemini_model: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("players_path", &self.players_path)
            .field("test_dataset_path", &self.test_dataset_path)
            .field("results_path", &self.results_path)
            .field("xai_api_key", &self.xai_api_key.as_ref().map(|_| "<redacted>"))
            .field("xai_base_url", &self.xai_base_url)
            .field("xai_model", &self.xai_model)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from(DEFAULT_PLAYERS_PATH),
            test_dataset_path: PathBuf::from(DEFAULT_TEST_DATASET_PATH),
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            xai_api_key: None,
            xai_base_url: DEFAULT_XAI_BASE_URL.to_string(),
            xai_model: DEFAULT_XAI_MODEL.to_string(),
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl Config {
    const ENV_PLAYERS_PATH: &'static str = "SCOUT_PLAYERS_PATH";
    const ENV_TEST_DATASET_PATH: &'static str = "SCOUT_TEST_DATASET_PATH";
    const ENV_RESULTS_PATH: &'static str = "SCOUT_RESULTS_PATH";
    const ENV_XAI_API_KEY: &'static str = "XAI_API_KEY";
    const ENV_XAI_BASE_URL: &'static str = "SCOUT_XAI_BASE_URL";
    const ENV_XAI_MODEL: &'static str = "SCOUT_XAI_MODEL";
    const ENV_GOOGLE_API_KEY: &'static str = "GOOGLE_API_KEY";
    const ENV_GEMINI_MODEL: &'static str = "SCOUT_GEMINI_MODEL";

    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Blank values count as unset. Checks that can fail live in [`Config::validate`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let players_path = Self::parse_path_from_env(Self::ENV_PLAYERS_PATH, defaults.players_path);
        let test_dataset_path =
            Self::parse_path_from_env(Self::ENV_TEST_DATASET_PATH, defaults.test_dataset_path);
        let results_path = Self::parse_path_from_env(Self::ENV_RESULTS_PATH, defaults.results_path);
        let xai_api_key = Self::parse_optional_string_from_env(Self::ENV_XAI_API_KEY);
        let xai_base_url =
            Self::parse_string_from_env(Self::ENV_XAI_BASE_URL, defaults.xai_base_url);
        let xai_model = Self::parse_string_from_env(Self::ENV_XAI_MODEL, defaults.xai_model);
        let google_api_key = Self::parse_optional_string_from_env(Self::ENV_GOOGLE_API_KEY);
        let gemini_model =
            Self::parse_string_from_env(Self::ENV_GEMINI_MODEL, defaults.gemini_model);

        Self {
            players_path,
            test_dataset_path,
            results_path,
            xai_api_key,
            xai_base_url,
            xai_model,
            google_api_key,
            gemini_model,
        }
    }

    /// Validates paths and basic invariants.
    ///
    /// Missing dataset files are not an error here: the store degrades to "unavailable" and the
    /// evaluation reports its own failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_file_if_present(&self.players_path)?;
        Self::validate_file_if_present(&self.test_dataset_path)?;

        if self.results_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.results_path.clone(),
            });
        }

        if self.xai_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_XAI_BASE_URL,
            });
        }
        if self.xai_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_XAI_MODEL,
            });
        }
        if self.gemini_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_GEMINI_MODEL,
            });
        }

        Ok(())
    }

    fn validate_file_if_present(path: &Path) -> Result<(), ConfigError> {
        if path.exists() && !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        Self::parse_optional_string_from_env(var_name)
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }
}
