//! Configuration for the curator.
//!
//! Resolution order (highest priority first):
//! 1. Invocation overrides (CLI flags, JSON request fields)
//! 2. Environment variables (`CURATOR_ENDPOINT`, `CURATOR_TOKEN`)
//! 3. `config.toml` in the curator home directory
//! 4. Defaults
//!
//! The configured endpoint only seeds the controller; query-string and
//! host-context endpoints still take precedence over it at resolution time.

use crate::context::DEFAULT_SELECTION_LIMIT;
use crate::endpoint::DEFAULT_MAX_SEARCH_DEPTH;
use crate::error::{CuratorError, Result};
use dirs_next::home_dir;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Apply `Option`-field overrides from a source struct to a target struct.
macro_rules! apply_option_overrides {
    ($src:expr, $dst:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(ref v) = $src.$field {
                $dst.$field = v.clone();
            }
        )+
    };
}

fn default_true() -> bool {
    true
}

fn default_selection_limit() -> usize {
    DEFAULT_SELECTION_LIMIT
}

fn default_max_search_depth() -> usize {
    DEFAULT_MAX_SEARCH_DEPTH
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default endpoint, used when neither the query string nor the host context names one
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer token to attach when `use_auth_header` is on
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_true")]
    pub include_context: bool,
    #[serde(default = "default_true")]
    pub use_auth_header: bool,
    /// Characters of host selection forwarded with the prompt
    #[serde(default = "default_selection_limit")]
    pub selection_limit: usize,
    /// Depth bound for the host-context endpoint search
    #[serde(default = "default_max_search_depth")]
    pub max_search_depth: usize,
    /// Request timeout; absent means wait indefinitely
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            include_context: true,
            use_auth_header: true,
            selection_limit: DEFAULT_SELECTION_LIMIT,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load `config.toml` from `home`, or defaults when the file does not exist.
    pub fn load_from(home: &Path) -> Result<Self> {
        let path = home.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| CuratorError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Per-invocation overrides (same fields as `config.toml`, all optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub include_context: Option<bool>,
    #[serde(default)]
    pub use_auth_header: Option<bool>,
    #[serde(default)]
    pub selection_limit: Option<usize>,
    #[serde(default)]
    pub max_search_depth: Option<usize>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Fully resolved configuration consumed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub include_context: bool,
    pub use_auth_header: bool,
    pub selection_limit: usize,
    pub max_search_depth: usize,
    pub timeout_seconds: Option<u64>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            token: None,
            include_context: true,
            use_auth_header: true,
            selection_limit: DEFAULT_SELECTION_LIMIT,
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
            timeout_seconds: None,
        }
    }
}

impl ResolvedConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// Layer environment variables and `overrides` on top of this file config.
    pub fn resolve(&self, overrides: &ConfigOverrides) -> ResolvedConfig {
        let mut resolved = ResolvedConfig {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            token: self.token.clone(),
            include_context: self.include_context,
            use_auth_header: self.use_auth_header,
            selection_limit: self.selection_limit,
            max_search_depth: self.max_search_depth,
            timeout_seconds: self.timeout_seconds,
        };

        apply_env_overrides(&mut resolved);

        if let Some(ref endpoint) = overrides.endpoint {
            resolved.endpoint = endpoint.clone();
        }
        if overrides.token.is_some() {
            resolved.token = overrides.token.clone();
        }
        if overrides.timeout_seconds.is_some() {
            resolved.timeout_seconds = overrides.timeout_seconds;
        }
        apply_option_overrides!(
            overrides,
            resolved,
            include_context,
            use_auth_header,
            selection_limit,
            max_search_depth,
        );

        resolved.endpoint = resolved.endpoint.trim().to_string();
        resolved.token = resolved.token.filter(|t| !t.is_empty());
        resolved
    }
}

fn apply_env_overrides(resolved: &mut ResolvedConfig) {
    if let Ok(endpoint) = std::env::var("CURATOR_ENDPOINT")
        && !endpoint.trim().is_empty()
    {
        resolved.endpoint = endpoint;
    }
    if let Ok(token) = std::env::var("CURATOR_TOKEN")
        && !token.is_empty()
    {
        resolved.token = Some(token);
    }
}

/// Curator home: explicit override > `CURATOR_HOME` > `~/.curator`.
pub fn curator_home(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home);
    }
    if let Ok(home) = std::env::var("CURATOR_HOME")
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    home_dir()
        .map(|home| home.join(".curator"))
        .ok_or_else(|| CuratorError::Config("could not determine home directory".to_string()))
}

/// Load and resolve configuration in one step.
pub fn load_config(
    home_override: Option<PathBuf>,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig> {
    let home = curator_home(home_override)?;
    Ok(Config::load_from(&home)?.resolve(overrides))
}
