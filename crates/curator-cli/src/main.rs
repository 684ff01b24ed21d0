mod cli;
mod output;

use clap::Parser;
use cli::{Action, Cli};
use curator_core::{Curator, CuratorError, HttpTransport, load_config};
use output::{CliBridge, TerminalSink, render_preview};
use serde_json::Value;
use std::process::ExitCode;

fn read_context_file(cli: &Cli) -> curator_core::Result<Value> {
    let Some(path) = &cli.context_file else {
        return Ok(Value::Null);
    };
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        CuratorError::Config(format!("context file '{}': {}", path.display(), e))
    })
}

async fn run(cli: Cli) -> curator_core::Result<()> {
    let config = load_config(cli.home.clone(), &cli.overrides())?;
    let host_context = read_context_file(&cli)?;
    let prompt = cli.read_prompt()?;

    let transport = HttpTransport::new(config.timeout())?;
    let mut curator = Curator::with_config(transport, &config);
    let mut sink = TerminalSink::new(cli.verbose);

    curator.set_host(host_context, None, &mut sink);
    if let Some(query) = &cli.query {
        curator.resolve_endpoint(query, &mut sink);
    }
    curator.set_prompt(prompt);
    curator.submit(&mut sink).await?;

    match cli.action() {
        Action::Preview => {
            println!(
                "{}",
                render_preview(
                    curator.preview_mode(),
                    curator.sections(),
                    curator.generated_html()
                )
            );
        }
        Action::Insert => {
            let mut bridge = CliBridge::new(cli.output.as_deref())?;
            curator.insert_html(&mut bridge, &mut sink)?;
        }
        Action::SendJson => {
            let mut bridge = CliBridge::new(cli.output.as_deref())?;
            curator.send_json(&mut bridge, &mut sink)?;
        }
    }

    if cli.raw
        && let Some(raw) = curator.raw_json()
    {
        println!("{}", raw);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "warn,curator_core=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
