use std::path::PathBuf;

use curator_core::ConfigOverrides;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// What to do once the response is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Emit the result record only
    #[default]
    Preview,
    /// Deliver the synthesized HTML as a `send_html` record
    Insert,
    /// Deliver the indented response JSON as a `send_text` record
    SendJson,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JsonFlags {
    /// Emit diagnostic events on stderr
    #[serde(default)]
    pub verbose: bool,
}

/// JSON-mode input -- read from stdin, one submission per invocation.
///
/// Override priority (highest → lowest):
/// top-level fields > `config` > env > `config.toml` > defaults
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JsonInput {
    /// Prompt text
    pub prompt: String,
    /// Endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Location query string (e.g. `?endpoint=https://...`)
    #[serde(default)]
    pub query: Option<String>,
    /// Host context (url, path, locale, selection, metadata, nested endpoint keys)
    #[serde(default)]
    pub context: Option<Value>,
    /// Bearer token
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub include_context: Option<bool>,
    #[serde(default)]
    pub use_auth_header: Option<bool>,
    #[serde(default)]
    pub action: Action,
    /// Curator home directory override
    #[serde(default)]
    pub home: Option<PathBuf>,
    /// Typed config overrides (same fields as config.toml)
    #[serde(default)]
    pub config: Option<ConfigOverrides>,
    #[serde(default)]
    pub flags: JsonFlags,
}

impl JsonInput {
    /// Merge `config` with the top-level shorthand fields.
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = self.config.clone().unwrap_or_default();
        if self.endpoint.is_some() {
            overrides.endpoint = self.endpoint.clone();
        }
        if self.token.is_some() {
            overrides.token = self.token.clone();
        }
        if self.include_context.is_some() {
            overrides.include_context = self.include_context;
        }
        if self.use_auth_header.is_some() {
            overrides.use_auth_header = self.use_auth_header;
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_input() {
        let input: JsonInput = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(input.prompt, "hi");
        assert_eq!(input.action, Action::Preview);
        assert!(!input.flags.verbose);
        assert_eq!(input.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn top_level_fields_beat_config() {
        let input: JsonInput = serde_json::from_str(
            r#"{
                "prompt": "hi",
                "endpoint": "https://top",
                "include_context": false,
                "action": "send_json",
                "config": {"endpoint": "https://cfg", "timeout_seconds": 5, "use_auth_header": false}
            }"#,
        )
        .unwrap();
        assert_eq!(input.action, Action::SendJson);
        let overrides = input.overrides();
        assert_eq!(overrides.endpoint.as_deref(), Some("https://top"));
        assert_eq!(overrides.include_context, Some(false));
        assert_eq!(overrides.use_auth_header, Some(false));
        assert_eq!(overrides.timeout_seconds, Some(5));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(serde_json::from_str::<JsonInput>(r#"{"prompt": "x", "bogus": 1}"#).is_err());
    }

    #[test]
    fn prompt_is_required() {
        assert!(serde_json::from_str::<JsonInput>(r#"{"endpoint": "https://x"}"#).is_err());
    }
}
