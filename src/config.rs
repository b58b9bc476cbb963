//! Configuration types for catalog-sync

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Catalog endpoint for the staging environment
const STAGE_ENDPOINT: &str = "https://marais-stage.com/line_shopping/product_full";

/// Catalog endpoint for the production environment
const PRODUCTION_ENDPOINT: &str = "https://www.storemarais.com/line_shopping/product_full";

/// Which catalog endpoint to fetch from
///
/// The endpoint table lives here as an explicit enum rather than a global
/// lookup; callers select an environment (or override the URL entirely via
/// [`Config::endpoint_override`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Staging catalog endpoint
    #[default]
    Stage,
    /// Production catalog endpoint
    Production,
}

impl Environment {
    /// The catalog URL for this environment
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Stage => STAGE_ENDPOINT,
            Environment::Production => PRODUCTION_ENDPOINT,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stage" | "staging" => Ok(Environment::Stage),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::config_key(
                format!("unknown environment '{other}' (expected 'stage' or 'production')"),
                "environment",
            )),
        }
    }
}

/// Main configuration for the catalog sync pipeline
///
/// All fields have sensible defaults; `Config::default()` fetches the staging
/// catalog into `./result.json` with validation enabled and both optional
/// behaviors (file reuse, image tag stripping) turned off.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Which environment's endpoint to fetch from (default: stage)
    #[serde(default)]
    pub environment: Environment,

    /// Explicit endpoint URL, taking precedence over `environment` when set
    #[serde(default)]
    pub endpoint_override: Option<String>,

    /// Path the downloaded document is written to (default: "./result.json")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// HTTP request timeout in seconds (default: 600)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Skip the fetch and reuse the existing output file if present (default: false)
    ///
    /// When enabled and the output file already exists, no HTTP request is
    /// made and validation runs directly against the file's current contents.
    #[serde(default)]
    pub reuse_existing_file: bool,

    /// Strip inline base64 image tags from the long-text field before the
    /// length check (default: false)
    #[serde(default)]
    pub strip_image_tags: bool,

    /// Maximum allowed character length of a record's long-text field
    /// (default: 60000)
    ///
    /// Records whose field strictly exceeds this are reported; a length of
    /// exactly this value passes.
    #[serde(default = "default_max_description_len")]
    pub max_description_len: usize,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("result.json")
}

fn default_request_timeout_secs() -> u64 {
    600
}

fn default_max_description_len() -> usize {
    60_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            endpoint_override: None,
            output_path: default_output_path(),
            request_timeout_secs: default_request_timeout_secs(),
            reuse_existing_file: false,
            strip_image_tags: false,
            max_description_len: default_max_description_len(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults, so a partial config file
    /// is valid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The URL the fetcher will request, as a parsed [`Url`]
    ///
    /// Resolves the override if set, otherwise the environment's endpoint.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = self
            .endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.environment.endpoint());
        Url::parse(raw).map_err(|e| Error::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    /// The HTTP request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check the configuration for values that cannot work at runtime
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::config_key(
                "output path must not be empty",
                "output_path",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::config_key(
                "request timeout must be at least 1 second",
                "request_timeout_secs",
            ));
        }
        self.endpoint_url()?;
        Ok(())
    }
}
