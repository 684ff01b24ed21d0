//! CLI argument parsing with clap.

use clap::Parser;
use curator_core::ConfigOverrides;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

const CLI_AFTER_HELP: &str = "\
ENDPOINT RESOLUTION (highest priority first):
  --query 'endpoint=URL' or 'api=URL'
  aiContentEndpoint / aiCuratorEndpoint / aiAssistantEndpoint / aiPluginEndpoint
    anywhere in the --context-file JSON
  --endpoint, CURATOR_ENDPOINT, or `endpoint` in config.toml

EXAMPLES:
  curator -e https://ai.example/generate \"Three reasons to visit Lisbon\"
  echo \"Summer campaign copy\" | curator -x page.json --insert -o out.html
  curator -q '?api=https://staging/ai' --send-json \"FAQ for pricing\"";

/// curator - generate structured page content from a prompt
#[derive(Parser, Debug)]
#[command(
    name = "curator",
    version,
    about = "Generate structured page content from a prompt via an AI endpoint",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    /// Prompt text (read from stdin when omitted and stdin is not a terminal)
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,

    /// AI endpoint URL
    #[arg(short = 'e', long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Location query string that may override the endpoint
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Host context as a JSON file (document url, path, selection, metadata)
    #[arg(short = 'x', long = "context-file", value_name = "FILE")]
    pub context_file: Option<PathBuf>,

    /// Bearer token for the endpoint
    #[arg(short = 't', long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Do not send the host context with the prompt
    #[arg(long = "no-context")]
    pub no_context: bool,

    /// Do not send an Authorization header
    #[arg(long = "no-auth")]
    pub no_auth: bool,

    /// Deliver the generated HTML instead of printing a preview
    #[arg(long = "insert", conflicts_with = "send_json")]
    pub insert: bool,

    /// Deliver the raw response as indented JSON text
    #[arg(long = "send-json")]
    pub send_json: bool,

    /// Print the raw JSON response after the preview
    #[arg(long = "raw")]
    pub raw: bool,

    /// Write deliveries to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Curator home directory (default: CURATOR_HOME or ~/.curator)
    #[arg(long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Show state transitions and diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// What to do with a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Preview,
    Insert,
    SendJson,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.insert {
            Action::Insert
        } else if self.send_json {
            Action::SendJson
        } else {
            Action::Preview
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            token: self.token.clone(),
            include_context: self.no_context.then_some(false),
            use_auth_header: self.no_auth.then_some(false),
            ..ConfigOverrides::default()
        }
    }

    /// Positional prompt words, or stdin when there are none and stdin is piped.
    pub fn read_prompt(&self) -> io::Result<String> {
        if !self.prompt.is_empty() {
            return Ok(self.prompt.join(" "));
        }
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut buf = String::new();
        stdin.lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}
